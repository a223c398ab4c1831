use clap::{ArgAction, Parser, Subcommand};
use sinker_core::{BenchArgs, SortArgs};
use tracing::warn;
use tracing_subscriber::{filter::ParseError, EnvFilter};

/// Environment variable holding a `tracing` filter directive, e.g. `SINKER_LOG=sinker_core=trace`.
const LOG_ENV: &str = "SINKER_LOG";

#[derive(Parser)]
#[command(author, version, about, long_about = None, styles=get_styles())] // Read from `Cargo.toml`
struct Cli {
    /// Log more. Repeat for more detail (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    commands: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Bubble sort a list of integers
    Sort(SortArgs),

    /// Measure the bubble sorter on generated inputs
    Bench(BenchArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.commands {
        Commands::Sort(sort_args) => sort_args.run(),
        Commands::Bench(bench_args) => bench_args.run(),
    }
}

fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

// A set but unparsable `SINKER_LOG` falls back to the `-v` level and hands back the parse error.
fn log_filter(env: Option<&str>, verbose: u8) -> (EnvFilter, Option<ParseError>) {
    match env.map(EnvFilter::try_new) {
        Some(Ok(filter)) => (filter, None),
        Some(Err(err)) => (EnvFilter::new(default_level(verbose)), Some(err)),
        None => (EnvFilter::new(default_level(verbose)), None),
    }
}

fn init_logging(verbose: u8) {
    let env = std::env::var(LOG_ENV).ok();
    let (filter, rejected) = log_filter(env.as_deref(), verbose);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Some(err) = rejected {
        warn!(%err, "ignoring invalid {LOG_ENV}, using the -v level instead");
    }
}

fn get_styles() -> clap::builder::Styles {
    clap::builder::Styles::styled()
        .usage(
            anstyle::Style::new()
                .bold()
                .underline()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Blue))),
        )
        .header(
            anstyle::Style::new()
                .bold()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Blue))),
        )
        .literal(
            anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))),
        )
        .invalid(
            anstyle::Style::new()
                .bold()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
        )
        .error(
            anstyle::Style::new()
                .bold()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
        )
        .valid(
            anstyle::Style::new()
                .bold()
                .underline()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Cyan))),
        )
        .placeholder(
            anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
        )
}

#[test]
fn verify_cli() {
    use clap::CommandFactory;
    Cli::command().debug_assert()
}

#[test]
fn verbosity_maps_to_levels() {
    assert_eq!(default_level(0), "warn");
    assert_eq!(default_level(1), "info");
    assert_eq!(default_level(2), "debug");
    assert_eq!(default_level(9), "trace");
}

#[test]
fn parses_nested_sort_command() {
    let cli = Cli::try_parse_from(["sinker", "-vv", "sort", "--sample", "-d", "desc"]).unwrap();
    assert_eq!(cli.verbose, 2);
    assert!(matches!(cli.commands, Commands::Sort(_)));
}

#[test]
fn log_filter_reports_unparsable_env() {
    let (_, rejected) = log_filter(Some("sinker_core=loudest"), 0);
    assert!(rejected.is_some());

    let (filter, rejected) = log_filter(Some("sinker_core=trace"), 0);
    assert!(rejected.is_none());
    assert!(filter.to_string().contains("sinker_core=trace"));

    let (filter, rejected) = log_filter(None, 2);
    assert!(rejected.is_none());
    assert!(filter.to_string().contains("debug"));
}
