use baseball_elimination::division::load_division_file;
use baseball_elimination::utils::random_division::{generate_division, DEFAULT_MAX_GAMES};
use baseball_elimination::utils::serialization::{
    is_binary_snapshot, load_division, save_division, write_division_text, write_report_json,
};
use baseball_elimination::{
    CheckerConfig, Division, DivisionReport, OutputFormat, TeamVerdict, ValidationPolicy,
};
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(author, version, about = "Decide which teams of a division can no longer finish first", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report which teams of a division are eliminated, with certificates
    Check {
        #[arg(value_name = "FILE")]
        division: PathBuf,
        /// Only evaluate this team
        #[arg(short, long)]
        team: Option<String>,
        /// Output format (text or json)
        #[arg(short, long)]
        format: Option<OutputFormat>,
        /// Reject asymmetric or overbooked schedules
        #[arg(long)]
        strict: bool,
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
    /// Generate a random division with a consistent schedule
    Generate {
        #[arg(long, default_value_t = 5)]
        teams: usize,
        #[arg(long, default_value_t = DEFAULT_MAX_GAMES)]
        max_games: u32,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Check {
            division,
            team,
            format,
            strict,
            config,
        } => run_check(division, team, format, strict, config)?,
        Commands::Generate {
            teams,
            max_games,
            seed,
            output,
        } => run_generate(teams, max_games, seed, output)?,
    }
    Ok(())
}

fn run_check(
    path: PathBuf,
    team: Option<String>,
    format: Option<OutputFormat>,
    strict: bool,
    config_path: Option<PathBuf>,
) -> CliResult<()> {
    let mut config = match config_path {
        Some(path) => CheckerConfig::load(path)?,
        None => CheckerConfig::default(),
    };
    if strict {
        config.validation = ValidationPolicy::Strict;
    }
    if let Some(format) = format {
        config.format = format;
    }
    debug!("checker config: {config:?}");

    let division = load(&path, config.validation)?;
    info!(
        "loaded {} teams from {}",
        division.number_of_teams(),
        path.display()
    );

    let start = Instant::now();
    let report = match team {
        Some(team) => {
            let target = division.team_index(&team)?;
            DivisionReport {
                teams: vec![TeamVerdict::new(&division, target, division.evaluate_at(target))],
            }
        }
        None => division.report(),
    };
    info!(
        "{} of {} teams eliminated in {:.2} ms",
        report.eliminated().count(),
        report.teams.len(),
        start.elapsed().as_secs_f64() * 1000.0
    );

    match config.format {
        OutputFormat::Text => print!("{report}"),
        OutputFormat::Json => {
            write_report_json(io::stdout().lock(), &report)?;
            println!();
        }
    }
    Ok(())
}

fn load(path: &Path, policy: ValidationPolicy) -> CliResult<Division> {
    if is_binary_snapshot(path) {
        let division = load_division(path)?;
        if policy == ValidationPolicy::Strict {
            // snapshots decode permissively; re-check them under the strict policy
            return Ok(Division::new(division.records(), policy)?);
        }
        Ok(division)
    } else {
        Ok(load_division_file(path, policy)?)
    }
}

fn run_generate(teams: usize, max_games: u32, seed: Option<u64>, output: PathBuf) -> CliResult<()> {
    if teams == 0 {
        return Err("teams must be greater than zero".into());
    }
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let (division, params) = generate_division(teams, max_games, &mut rng);
    println!(
        "  teams = {}, max games per pair = {}, games left = {}",
        params.teams, params.max_games_per_pair, params.total_games
    );
    if is_binary_snapshot(&output) {
        save_division(&output, &division)?;
    } else {
        write_division_text(&output, &division)?;
    }
    println!("Division saved to {}", output.display());
    Ok(())
}
