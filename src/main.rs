use clap::Parser;
use rwroads::{CityNetwork, Console, FlatFileWriter};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Console record keeper for Rwandan cities and roads
#[derive(Parser, Debug)]
#[command(name = "rwroads")]
#[command(about = "Manage cities, roads and road budgets", long_about = None)]
struct Args {
    /// Directory receiving cities.txt and roads.txt
    #[arg(short, long, default_value = ".")]
    data_dir: PathBuf,

    /// Log level (logs go to stderr)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("Fatal error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting rwroads v{}", env!("CARGO_PKG_VERSION"));
    info!("Data directory: {:?}", args.data_dir);

    let writer = FlatFileWriter::new(&args.data_dir)?;
    let network = CityNetwork::with_defaults();

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout(), network, writer);
    console.persist_all();
    console.run()?;

    info!("Shutting down...");
    Ok(())
}
