use baseball_elimination::utils::random_division::{generate_division, DEFAULT_MAX_GAMES};
use baseball_elimination::{Division, Elimination, EliminationNetwork};
use clap::Parser;
use env_logger::Env;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::{Duration, Instant};

struct BenchmarkResult {
    teams: usize,
    samples: u32,
    vertices: usize,
    edges: usize,
    evaluate_time_ms: f64,
    per_team_time_us: f64,
    trivial: u32,
    flow: u32,
    alive: u32,
}

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Benchmark runner for division elimination queries"
)]
struct BenchmarkCli {
    /// Comma-separated list of division sizes to benchmark (e.g. 5,10,30)
    #[arg(long, value_delimiter = ',', value_parser = clap::value_parser!(usize))]
    teams: Option<Vec<usize>>,
    /// Random divisions evaluated per size
    #[arg(long, default_value_t = 20)]
    samples: u32,
    #[arg(long, default_value_t = DEFAULT_MAX_GAMES)]
    max_games: u32,
    #[arg(long, default_value_t = 0xBA5E_BA11)]
    seed: u64,
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = BenchmarkCli::parse();
    println!("=== Division Elimination Benchmark ===\n");

    let sizes = cli.teams.unwrap_or_else(|| vec![4, 8, 16, 32]);
    let mut rng = StdRng::seed_from_u64(cli.seed);
    let mut all_results = Vec::new();

    for &teams in &sizes {
        if teams == 0 || cli.samples == 0 {
            eprintln!("  ✗ skipping teams={teams}, samples={}", cli.samples);
            continue;
        }
        let progress = ProgressBar::new(cli.samples as u64);
        progress.set_style(
            ProgressStyle::with_template("{msg:>12} [{bar:40}] {pos}/{len}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=> "),
        );
        progress.set_message(format!("n={teams}"));

        let mut result = BenchmarkResult {
            teams,
            samples: cli.samples,
            vertices: 0,
            edges: 0,
            evaluate_time_ms: 0.0,
            per_team_time_us: 0.0,
            trivial: 0,
            flow: 0,
            alive: 0,
        };
        let mut elapsed = Duration::ZERO;
        for _ in 0..cli.samples {
            let (division, _) = generate_division(teams, cli.max_games, &mut rng);
            elapsed += run_sample(&division, &mut result);
            progress.inc(1);
        }
        progress.finish_and_clear();

        result.evaluate_time_ms = elapsed.as_secs_f64() * 1000.0 / cli.samples as f64;
        result.per_team_time_us = result.evaluate_time_ms * 1000.0 / teams as f64;
        print_result(&result);
        all_results.push(result);
    }

    println!("\n=== Summary Report ===\n");
    print_summary_table(&all_results);
}

fn run_sample(division: &Division, result: &mut BenchmarkResult) -> Duration {
    // network size for a team that reaches the flow check; every team sees
    // nearly the same shape
    let network = EliminationNetwork::build(division, 0);
    result.vertices = result.vertices.max(network.network().vertex_count());
    result.edges = result.edges.max(network.network().edge_count());

    let start = Instant::now();
    for team in 0..division.number_of_teams() {
        match division.evaluate_at(team) {
            Elimination::NotEliminated => result.alive += 1,
            Elimination::Trivial { .. } => result.trivial += 1,
            Elimination::Flow { .. } => result.flow += 1,
        }
    }
    start.elapsed()
}

fn print_result(result: &BenchmarkResult) {
    println!(
        "  n={:>3} → {:>8.3} ms/division | {:>8.2} µs/team | network ≤ {} vertices, {} edges",
        result.teams,
        result.evaluate_time_ms,
        result.per_team_time_us,
        result.vertices,
        result.edges
    );
}

fn print_summary_table(results: &[BenchmarkResult]) {
    println!(
        "{:>6} {:>8} {:>12} {:>12} {:>9} {:>9} {:>9}",
        "teams", "samples", "ms/division", "µs/team", "trivial", "flow", "alive"
    );
    for result in results {
        println!(
            "{:>6} {:>8} {:>12.3} {:>12.2} {:>9} {:>9} {:>9}",
            result.teams,
            result.samples,
            result.evaluate_time_ms,
            result.per_team_time_us,
            result.trivial,
            result.flow,
            result.alive
        );
    }
}
