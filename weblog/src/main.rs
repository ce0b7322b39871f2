use clap::{Parser, Subcommand};
use weblog_core::cli;
use weblog_core::cli::analyze::AnalyzeArgs;
use weblog_core::logging::{LogFormat, default_log_format, init_logging};

#[derive(Parser, Debug)]
#[command(
    name = "weblog",
    version,
    about = "weblog: access and error log analyzer"
)]
struct Cli {
    /// Diagnostic log format on stderr (defaults to pretty on a terminal)
    #[arg(long, value_enum, global = true)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze an access log and an error log (default)
    Analyze(AnalyzeArgs),

    /// Configuration tooling
    Config {
        #[command(subcommand)]
        cmd: cli::config::ConfigCmd,
    },
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.log_format.unwrap_or_else(default_log_format));

    let result = match cli.command {
        Some(Command::Analyze(args)) => cli::analyze::run_analyze(args),
        Some(Command::Config { cmd }) => cli::config::run(cmd),
        None => cli::analyze::run_analyze(AnalyzeArgs::default()),
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "weblog failed");
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
