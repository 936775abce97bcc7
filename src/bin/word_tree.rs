use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::{debug, info, LevelFilter};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};
use thiserror::Error;

use wordtree::analyze;

const NO_TEXT: &str = "No text supplied.";

#[derive(Parser, Debug)]
#[clap(author, version, about = "Prints the word frequency merge tree of a text", long_about = None)]
struct Args {
    /// Input filename. Reads standard input if missing
    #[clap(short, long, value_parser)]
    input_file: Option<PathBuf>,
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,
    /// Log debug messages
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// The indented ASCII tree
    Text,
    /// Frequencies, tree and rendering as JSON
    Json,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("cannot read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot read standard input: {0}")]
    Stdin(#[from] io::Error),
    #[error("cannot encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let config = ConfigBuilder::new()
        .set_target_level(LevelFilter::Error)
        .build();

    let _ = TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto);
}

fn read_input(input_file: Option<&PathBuf>) -> Result<String, CliError> {
    match input_file {
        Some(path) => {
            let bytes = fs::read(path).map_err(|source| CliError::Read {
                path: path.clone(),
                source,
            })?;
            debug!("read {} bytes from {:?}", bytes.len(), path);
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn main() -> Result<(), CliError> {
    let args = Args::parse();
    init_logger(args.verbose);

    let text = read_input(args.input_file.as_ref())?;

    let Some(analysis) = analyze(&text) else {
        info!("{}", NO_TEXT);
        return Ok(());
    };

    info!(
        "{} words, {} distinct",
        analysis.table.total(),
        analysis.table.len()
    );

    match args.format {
        Format::Text => print!("{}", analysis.rendered),
        Format::Json => println!("{}", serde_json::to_string_pretty(&analysis)?),
    }

    Ok(())
}
