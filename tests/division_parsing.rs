use baseball_elimination::division::{parse_division, read_division};
use baseball_elimination::utils::serialization::{load_division, save_division};
use baseball_elimination::{CheckerConfig, Division, DivisionError, OutputFormat, TeamRecord, ValidationPolicy};
use std::io::Cursor;

const TEAMS4: &str = "4
Atlanta       83 71  8  0 1 6 1
Philadelphia  80 79  3  1 0 0 2
New_York      78 78  6  6 0 0 0
Montreal      77 82  3  1 2 0 0
";

#[test]
fn rows_with_wrong_field_count_are_malformed() {
    let source = "2\nAlpha 10 5 3 0 3\nBeta 9 6 3 3\n";
    match parse_division(source, ValidationPolicy::Permissive) {
        Err(DivisionError::MalformedRecord { line, .. }) => assert_eq!(line, 3),
        other => panic!("expected a malformed record, got {other:?}"),
    }
}

#[test]
fn non_numeric_fields_are_malformed() {
    let source = "2\nAlpha 10 five 3 0 3\nBeta 9 6 3 3 0\n";
    match parse_division(source, ValidationPolicy::Permissive) {
        Err(DivisionError::MalformedRecord { line, reason }) => {
            assert_eq!(line, 2);
            assert!(reason.contains("five"), "{reason}");
        }
        other => panic!("expected a malformed record, got {other:?}"),
    }
}

#[test]
fn negative_counts_are_malformed() {
    let source = "1\nAlpha -1 5 0 0\n";
    assert!(matches!(
        source.parse::<Division>(),
        Err(DivisionError::MalformedRecord { line: 2, .. })
    ));
}

#[test]
fn bad_team_count_is_malformed() {
    assert!(matches!(
        "four\n".parse::<Division>(),
        Err(DivisionError::MalformedRecord { line: 1, .. })
    ));
    assert!(matches!(
        "".parse::<Division>(),
        Err(DivisionError::MalformedRecord { line: 1, .. })
    ));
}

#[test]
fn missing_rows_are_reported() {
    let source = "3\nAlpha 10 5 0 0 0 0\nBeta 9 6 0 0 0 0\n";
    assert!(matches!(
        source.parse::<Division>(),
        Err(DivisionError::TruncatedInput {
            expected: 3,
            found: 2
        })
    ));
}

#[test]
fn huge_team_count_on_short_input_is_truncated() {
    let source = "18446744073709551615\nAlpha 1 1 0 0\n";
    assert!(matches!(
        source.parse::<Division>(),
        Err(DivisionError::TruncatedInput {
            expected: usize::MAX,
            found: 1
        })
    ));
}

#[test]
fn blank_lines_and_spacing_are_ignored() {
    let source = "\n  2  \n\nAlpha\t10 5 3   0 3\n\n   Beta 9 6 3 3 0   \n\n";
    let division: Division = source.parse().unwrap();
    assert_eq!(division.teams().collect::<Vec<_>>(), vec!["Alpha", "Beta"]);
    assert_eq!(division.against("Beta", "Alpha").unwrap(), 3);
}

#[test]
fn duplicate_team_names_are_rejected() {
    let source = "2\nAlpha 10 5 3 0 3\nAlpha 9 6 3 3 0\n";
    assert!(matches!(
        source.parse::<Division>(),
        Err(DivisionError::MalformedRecord { line: 3, .. })
    ));
}

#[test]
fn duplicate_names_after_blank_lines_report_the_source_line() {
    let source = "2\n\n\nAlpha 10 5 3 0 3\n\nAlpha 9 6 3 3 0\n";
    match source.parse::<Division>() {
        Err(DivisionError::MalformedRecord { line, reason }) => {
            assert_eq!(line, 6);
            assert!(reason.contains("Alpha"), "{reason}");
        }
        other => panic!("expected a malformed record, got {other:?}"),
    }
}

#[test]
fn permissive_policy_accepts_inconsistent_schedules() {
    // asymmetric, and Alpha books more division games than it has left
    let source = "2\nAlpha 10 5 1 0 4\nBeta 9 6 3 2 0\n";
    let division = parse_division(source, ValidationPolicy::Permissive).unwrap();
    assert_eq!(division.against("Alpha", "Beta").unwrap(), 4);
    assert_eq!(division.against("Beta", "Alpha").unwrap(), 2);
}

#[test]
fn strict_policy_rejects_asymmetric_schedules() {
    let source = "2\nAlpha 10 5 4 0 4\nBeta 9 6 3 2 0\n";
    assert!(matches!(
        parse_division(source, ValidationPolicy::Strict),
        Err(DivisionError::InconsistentSchedule { team, .. }) if team == "Alpha"
    ));
}

#[test]
fn strict_policy_rejects_self_games_and_overbooking() {
    let self_games = "1\nAlpha 10 5 2 2\n";
    assert!(matches!(
        parse_division(self_games, ValidationPolicy::Strict),
        Err(DivisionError::InconsistentSchedule { .. })
    ));

    let overbooked = "2\nAlpha 10 5 1 0 4\nBeta 9 6 4 4 0\n";
    assert!(matches!(
        parse_division(overbooked, ValidationPolicy::Strict),
        Err(DivisionError::InconsistentSchedule { team, .. }) if team == "Alpha"
    ));
}

#[test]
fn strict_policy_allows_games_outside_the_division() {
    let source = "2\nAlpha 10 5 9 0 3\nBeta 9 6 3 3 0\n";
    assert!(parse_division(source, ValidationPolicy::Strict).is_ok());
}

#[test]
fn reader_and_display_agree_with_the_source() {
    let division = read_division(Cursor::new(TEAMS4), ValidationPolicy::Strict).unwrap();
    let rendered = division.to_string();
    let reparsed: Division = rendered.parse().unwrap();
    assert_eq!(reparsed.records(), division.records());
    assert!(rendered.starts_with("4\n"));
}

#[test]
fn constructor_checks_schedule_width() {
    let records = vec![
        TeamRecord::new("Alpha", 10, 5, 3, vec![0, 3]),
        TeamRecord::new("Beta", 9, 6, 3, vec![3]),
    ];
    assert!(matches!(
        Division::new(records, ValidationPolicy::Permissive),
        Err(DivisionError::MalformedRecord { .. })
    ));
}

#[test]
fn binary_snapshot_restores_the_division() {
    let division: Division = TEAMS4.parse().unwrap();
    let path = std::env::temp_dir().join(format!("division-{}.bin", std::process::id()));
    save_division(&path, &division).unwrap();
    let restored = load_division(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(restored.records(), division.records());
    assert_eq!(restored.team_index("Montreal").unwrap(), 3);
    assert_eq!(
        restored.certificate_of_elimination("Philadelphia").unwrap(),
        division.certificate_of_elimination("Philadelphia").unwrap()
    );
}

#[test]
fn config_reads_toml_and_defaults_missing_keys() {
    let config = CheckerConfig::from_toml_str("validation = \"strict\"\n").unwrap();
    assert_eq!(config.validation, ValidationPolicy::Strict);
    assert_eq!(config.format, OutputFormat::Text);

    let config = CheckerConfig::from_toml_str("format = \"json\"").unwrap();
    assert_eq!(config.validation, ValidationPolicy::Permissive);
    assert_eq!(config.format, OutputFormat::Json);

    assert!(CheckerConfig::from_toml_str("validation = \"lenient\"").is_err());
    assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
    assert!("yaml".parse::<OutputFormat>().is_err());
}
