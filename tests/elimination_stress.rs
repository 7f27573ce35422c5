use baseball_elimination::division::parse_division;
use baseball_elimination::utils::random_division::generate_division;
use baseball_elimination::{Division, Elimination, EliminationNetwork, ValidationPolicy};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Whether the teams in `subset` must average more wins than `target` can
/// reach once the games among themselves are played.
fn subset_eliminates(division: &Division, target: usize, subset: &[usize]) -> bool {
    let wins: u64 = subset.iter().map(|&team| division.wins_at(team) as u64).sum();
    let mut games = 0u64;
    for (k, &i) in subset.iter().enumerate() {
        for &j in &subset[k + 1..] {
            games += division.against_at(i, j) as u64;
        }
    }
    wins + games > division.ceiling_at(target) * subset.len() as u64
}

fn indices(division: &Division, names: &[String]) -> Vec<usize> {
    names
        .iter()
        .map(|name| division.team_index(name).unwrap())
        .collect()
}

fn check_certificates(division: &Division) -> (u32, u32) {
    let mut trivial = 0;
    let mut flow = 0;
    for target in 0..division.number_of_teams() {
        let ceiling = division.ceiling_at(target);
        let dominated = (0..division.number_of_teams())
            .any(|team| team != target && division.wins_at(team) as u64 > ceiling);

        match division.evaluate_at(target) {
            Elimination::Trivial { certificate } => {
                assert!(dominated);
                let teams = indices(division, &certificate);
                assert!(teams.iter().all(|&team| division.wins_at(team) as u64 > ceiling));
                trivial += 1;
            }
            Elimination::Flow {
                certificate,
                max_flow,
                capacity,
            } => {
                assert!(!dominated);
                assert!(max_flow < capacity);
                let teams = indices(division, &certificate);
                assert!(!teams.contains(&target));
                assert!(
                    subset_eliminates(division, target, &teams),
                    "certificate {certificate:?} does not eliminate {}",
                    division.team_name(target)
                );
                flow += 1;
            }
            Elimination::NotEliminated => {
                assert!(!dominated);
                let mut network = EliminationNetwork::build(division, target);
                let solver = network.solve();
                assert_eq!(solver.value(), network.total_games());
            }
        }
    }
    (trivial, flow)
}

#[test]
fn random_certificates_are_sound() {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    let mut flow_eliminations = 0;
    for _ in 0..400 {
        let teams = rng.random_range(2..=8);
        let (division, _) = generate_division(teams, 6, &mut rng);
        flow_eliminations += check_certificates(&division).1;
    }
    assert!(flow_eliminations > 0, "no division needed the flow check");
}

#[test]
fn flow_verdict_matches_exhaustive_subset_search() {
    let mut rng = StdRng::seed_from_u64(0xD1CE);
    for _ in 0..150 {
        let teams = rng.random_range(2..=7);
        let (division, _) = generate_division(teams, 6, &mut rng);
        for target in 0..teams {
            let others: Vec<usize> = (0..teams).filter(|&team| team != target).collect();
            let exists = (1u32..(1 << others.len())).any(|mask| {
                let subset: Vec<usize> = others
                    .iter()
                    .enumerate()
                    .filter(|(bit, _)| mask & (1 << bit) != 0)
                    .map(|(_, &team)| team)
                    .collect();
                subset_eliminates(&division, target, &subset)
            });
            assert_eq!(
                division.evaluate_at(target).is_eliminated(),
                exists,
                "{} in\n{division}",
                division.team_name(target)
            );
        }
    }
}

#[test]
fn generated_divisions_pass_strict_validation() {
    let mut rng = StdRng::seed_from_u64(7);
    let (division, params) = generate_division(12, 4, &mut rng);
    assert_eq!(params.teams, 12);
    let reparsed = parse_division(&division.to_string(), ValidationPolicy::Strict).unwrap();
    assert_eq!(reparsed.records(), division.records());
}

#[cfg_attr(
    not(feature = "stress-tests"),
    ignore = "set --features stress-tests to enable large-division runs"
)]
#[cfg_attr(
    feature = "stress-tests",
    ignore = "pass -- --ignored to execute heavy stress scenarios"
)]
#[test]
fn large_divisions_produce_sound_certificates() {
    let mut rng = StdRng::seed_from_u64(0xB16_D1CE);
    for teams in [30, 60, 100] {
        for _ in 0..5 {
            let (division, _) = generate_division(teams, 10, &mut rng);
            check_certificates(&division);
        }
    }
}

#[cfg_attr(
    not(feature = "stress-tests"),
    ignore = "set --features stress-tests to enable large-division runs"
)]
#[cfg_attr(
    feature = "stress-tests",
    ignore = "pass -- --ignored to execute heavy stress scenarios"
)]
#[test]
fn concurrent_queries_share_one_snapshot() {
    let mut rng = StdRng::seed_from_u64(42);
    let (division, _) = generate_division(40, 8, &mut rng);
    let expected = division.report();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| division.report()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap().teams, expected.teams);
        }
    });
}
