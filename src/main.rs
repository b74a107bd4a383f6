#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(coverage_nightly, coverage(off))]

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use octile::{config, logging, GridMap};
use tracing::{debug, info};

const USAGE: &str = "usage: octile -i <input> [-o <output>]";

/// Input and output locations taken from the command line.
#[derive(Debug, Default)]
struct Args {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    help: bool,
}

impl Args {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self, String> {
        let mut parsed = Args::default();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => parsed.help = true,
                "-i" | "--input" => {
                    parsed.input = Some(args.next().ok_or_else(|| format!("missing value for {arg}"))?.into());
                }
                "-o" | "--output" => {
                    parsed.output = Some(args.next().ok_or_else(|| format!("missing value for {arg}"))?.into());
                }
                flag if flag.starts_with('-') => return Err(format!("unknown option {flag}")),
                path if parsed.input.is_none() => parsed.input = Some(path.into()),
                extra => return Err(format!("unexpected argument {extra}")),
            }
        }
        Ok(parsed)
    }
}

fn run(input: PathBuf, output: Option<PathBuf>) -> anyhow::Result<()> {
    let map = GridMap::load_file(&input).with_context(|| format!("failed to load map {}", input.display()))?;
    info!(
        width = map.width(),
        height = map.height(),
        traversable = map.num_traversable(),
        "Map loaded"
    );

    match output {
        Some(path) => {
            let file = File::create(&path).with_context(|| format!("failed to create {}", path.display()))?;
            map.write_to(&mut BufWriter::new(file))
                .with_context(|| format!("failed to write map to {}", path.display()))?;
            debug!(path = %path.display(), "Map written");
        }
        None => map
            .write_to(&mut io::stdout().lock())
            .context("failed to write map to stdout")?,
    }

    Ok(())
}

fn main() -> ExitCode {
    let config = match config::load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: invalid configuration: {e}");
            return ExitCode::from(2);
        }
    };
    logging::setup_logging(&config);

    let args = match Args::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("error: {message}\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    if args.help {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    let Some(input) = args.input else {
        eprintln!("error: no input map given\n{USAGE}");
        return ExitCode::from(2);
    };

    match run(input, args.output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
