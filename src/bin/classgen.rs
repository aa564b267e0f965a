use std::path::PathBuf;
use clap::{ArgAction, Parser};
use classgen::{Generator, Layout, Outcome};
use classgen::error_report::Report;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

/// Generates empty Java classes in the current package directory.
///
/// The package is derived from the directory's path below `src/main/java`.
/// Outside of the source root nothing is generated.
#[derive(Debug, Parser)]
#[command(name = "classgen", version)]
struct Args {
    /// Directory to generate into instead of the current one.
    #[arg(long, value_name = "PATH")]
    dir: Option<PathBuf>,

    /// Toml file describing the source layout.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// More logging, repeat for even more.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Names of the classes to generate.
    #[arg(value_name = "NAME")]
    names: Vec<String>,
}

impl Args {
    fn log_level(&self) -> &'static str {
        match (self.quiet, self.verbose) {
            (true, _) => "error",
            (false, 0) => "warn",
            (false, 1) => "info",
            (false, 2) => "debug",
            (false, _) => "trace",
        }
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("classgen={}", level)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.log_level());

    let layout = match &args.config {
        Some(path) => Layout::load(path.as_path()).unwrap_or_else(|error| {
            let contents = error.contents().unwrap_or_default().to_owned();
            error.report(path.display().to_string(), contents)
        }),
        None => Layout::default(),
    };

    let dir = match args.dir {
        Some(dir) => dir,
        None => std::env::current_dir().unwrap_or_else(|err| {
            error!(error = %err, "failed to get current directory");
            std::process::exit(1);
        }),
    };
    debug!(dir = %dir.display(), layout = ?layout, "starting generation");

    match Generator::new(layout).generate(&dir, &args.names) {
        Ok(Outcome::Generated { files, .. }) => {
            for file in &files {
                info!(file = %file.display(), "written");
            }
        },
        Ok(Outcome::OutsideSourceRoot) => (),
        Err(error) => error.report("", ""),
    }
}
