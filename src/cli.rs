use std::io::{self, Write};

use anyhow::{Context, Result, ensure};
use arith_drill::game::prompt_game_count;
use arith_drill::utils::MAX_GAMES;
use arith_drill::{Game, GameConfig, Operator, ReportMarkers, write_report};
use clap::{Parser, ValueEnum};
use log::{info, warn};

const GREETING: &str = "Hello!\n\nThis is not a game.\nthis is THE game.\n\n";

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Arith-drill - Practise mental arithmetic
#[derive(Parser, Debug)]
#[command(name = "arith-drill")]
#[command(about = "Answer random arithmetic expressions and get a per-operator report")]
#[command(version)]
pub struct CliArgs {
    /// Number of games, 0 plays until the first wrong answer (asked when omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(0..=i64::from(MAX_GAMES)))]
    pub games: Option<u32>,

    /// Comma separated operators by name or glyph; the first one is never drawn,
    /// and `nothing` may only come first
    #[arg(short, long, value_delimiter = ',')]
    pub operators: Vec<Operator>,

    /// Seed for reproducible expressions
    #[arg(long)]
    pub seed: Option<u64>,

    /// File name of the report, without the .txt extension
    #[arg(short, long, default_value = "report")]
    pub report: String,

    /// Do not write the report file
    #[arg(long)]
    pub no_report: bool,

    /// Marker printed after right answers in the report
    #[arg(long, default_value = "Right")]
    pub right_marker: String,

    /// Marker printed after wrong answers in the report
    #[arg(long, default_value = "")]
    pub wrong_marker: String,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    /// `None` asks for the number of games interactively
    pub games: Option<u32>,
    pub game: GameConfig,
    pub report_stem: Option<String>,
    pub log_level: LogLevel,
}

/// Turn parsed arguments into the application configuration
pub fn build_config(args: CliArgs) -> Result<CliConfig> {
    let operators = if args.operators.is_empty() {
        Operator::real_operators()
    } else {
        args.operators
    };
    ensure!(
        operators.iter().any(|op| !op.is_no_op()),
        "At least one real operator is required"
    );
    ensure!(
        operators.iter().skip(1).all(|op| !op.is_no_op()),
        "'nothing' may only be listed first"
    );

    Ok(CliConfig {
        games: args.games,
        game: GameConfig {
            games: args.games.unwrap_or(0),
            operators,
            markers: ReportMarkers::new(args.right_marker, args.wrong_marker),
            seed: args.seed,
            ..GameConfig::default()
        },
        report_stem: (!args.no_report).then_some(args.report),
        log_level: args.log_level,
    })
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    let args = CliArgs::parse();
    build_config(args).context("Invalid arguments")
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut output = stdout.lock();

    write!(output, "{}", GREETING)?;

    let games = match config.games {
        Some(games) => games,
        None => prompt_game_count(&mut input, &mut output)
            .context("Failed to read the number of games")?,
    };

    let mut game = Game::new(GameConfig {
        games,
        ..config.game
    });
    let end = game
        .play(&mut input, &mut output)
        .context("Game session failed")?;
    info!("Game ended: {:?}", end);

    let report = game.statistics().render_report();
    writeln!(output, "{}", report)?;

    if let Some(stem) = config.report_stem {
        match write_report(&report, &stem) {
            Ok(path) => {
                info!("Report saved to {}", path.display());
                writeln!(output, "Game report is written into the {}.txt!", stem)?;
            }
            Err(err) => {
                warn!("Report was not written: {}", err);
                writeln!(output, "{}", err)?;
            }
        }
    }

    Ok(())
}
