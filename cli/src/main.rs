mod args;

use anyhow::{Context, Result};
use args::Args;
use ascii_term::{Resolver, render_file};
use clap::Parser;
use std::io::{self, BufWriter, Write};

fn main() {
    // Configure logging
    env_logger::init();

    let args = Args::parse();

    if let Err(err) = run(&args) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

/// Resolve, render, then write; nothing reaches stdout unless every step succeeded
fn run(args: &Args) -> Result<()> {
    let config = args.render_config();
    config.validate()?;

    let path = {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut prompt = io::stderr();
        Resolver::new(&mut input, &mut prompt).resolve(&args.selection())?
    };
    log::info!("rendering {}", path.display());

    let rows = render_file(&path, &config)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for row in &rows {
        writeln!(out, "{row}").context("write output")?;
    }
    out.flush().context("write output")?;
    Ok(())
}
