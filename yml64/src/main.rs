use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use yml64::{
    Direction, Options, Pipeline,
    io::{Sink, Source},
};

/// Encode or decode the data of a Kubernetes Secret manifest using base64.
///
/// Reads FILE, or standard input when FILE is absent or `-`.
#[derive(Parser)]
#[command(name = "yml64", version)]
struct Args {
    file: Option<PathBuf>,

    /// Decode the base64 in the input instead of encoding it
    #[arg(short, long)]
    decode: bool,

    /// Keep all metadata instead of only `name` and `namespace`
    #[arg(short, long)]
    metadata: bool,

    /// Write the result to this file instead of standard output
    #[arg(short, long, conflicts_with = "inplace")]
    output: Option<PathBuf>,

    /// Replace the contents of the input file with the result
    #[arg(short, long)]
    inplace: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let source = Source::from_arg(args.file);
    let sink = Sink::resolve(&source, args.output, args.inplace)?;
    let options = Options {
        direction: if args.decode {
            Direction::Decode
        } else {
            Direction::Encode
        },
        keep_all_metadata: args.metadata,
    };
    tracing::debug!(?source, ?sink, ?options, "running yml64");

    let input = source.read()?;
    let output = Pipeline::default()
        .process(&input, options)
        .context("processing secret")?;

    sink.write(&output, &mut std::io::stdout().lock())
}
