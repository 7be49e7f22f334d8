//! optimize-rects - Consolidate text-selection client rects
//!
//! Reads a JSON array of rects (`pageNumber`, `top`, `left`, `width`,
//! `height`) and writes the consolidated highlight rects as a JSON array.

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use hilite_core::{MergeParams, OptimizeReport, Rect, optimize_with_report};
use tracing::{Level, debug};

/// Consolidate the client rects of a text selection into highlight rects.
#[derive(Parser, Debug)]
#[command(name = "optimize-rects")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON file holding an array of rects, or "-" for stdin
    #[arg(default_value = "-")]
    input: String,

    /// Path to file where output is written, or "-" for stdout
    #[arg(short = 'o', long, default_value = "-")]
    outfile: String,

    /// Same-line tolerance for top and height differences
    #[arg(long = "y-margin", default_value = "5.0")]
    y_margin: f64,

    /// Largest horizontal gap bridged between same-line rects
    #[arg(long = "x-margin", default_value = "10.0")]
    x_margin: f64,

    /// Pretty-print the JSON output
    #[arg(long, action = ArgAction::SetTrue)]
    pretty: bool,

    /// Print stage counts to stderr
    #[arg(long, action = ArgAction::SetTrue)]
    stats: bool,

    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,
}

fn read_input(input: &str) -> Result<String> {
    let mut buf = String::new();
    if input == "-" {
        io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read rects from stdin")?;
    } else {
        let path = PathBuf::from(input);
        File::open(&path)
            .and_then(|mut f| f.read_to_string(&mut buf))
            .with_context(|| format!("failed to read {}", path.display()))?;
    }
    Ok(buf)
}

fn write_rects<W: Write>(writer: &mut W, rects: &[Rect], pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, rects)?;
    } else {
        serde_json::to_writer(&mut *writer, rects)?;
    }
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

fn print_stats(report: &OptimizeReport) {
    eprintln!("input:     {}", report.input);
    eprintln!("contained: {}", report.contained);
    for (pass, n) in report.merged_per_pass.iter().enumerate() {
        eprintln!("pass {}:    {}", pass + 1, n);
    }
    eprintln!("output:    {}", report.output);
}

fn run(args: &Args) -> Result<()> {
    let params = MergeParams::new(args.y_margin, args.x_margin)?;
    let text = read_input(&args.input)?;
    let rects: Vec<Rect> = serde_json::from_str(&text).context("input is not a JSON rect array")?;
    debug!(count = rects.len(), "read rects");

    let (out, report) = optimize_with_report(&rects, &params)?;
    if args.stats {
        print_stats(&report);
    }

    let mut output: Box<dyn Write> = if args.outfile == "-" {
        Box::new(BufWriter::new(io::stdout()))
    } else {
        let file = File::create(&args.outfile)
            .with_context(|| format!("failed to create output file {}", args.outfile))?;
        Box::new(BufWriter::new(file))
    };
    write_rects(&mut output, &out, args.pretty)
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.debug { Level::DEBUG } else { Level::WARN })
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(&args) {
        eprintln!("optimize-rects: {e:#}");
        std::process::exit(1);
    }
}
