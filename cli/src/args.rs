//! CLI argument parsing with clap.

use ascii_term::config::DEFAULT_WIDTH;
use ascii_term::{RenderConfig, SelectionRequest};
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Render an image as ASCII art in the terminal
#[derive(Parser, Debug)]
#[command(name = "ascii-term")]
#[command(version, about = "Render an image as ASCII art in the terminal", long_about = None)]
pub struct Args {
    /// Path to an input image or directory (a picker is shown when omitted)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output width in characters (1 to 65535)
    #[arg(short, long, default_value_t = DEFAULT_WIDTH, allow_negative_numbers = true)]
    pub width: i64,

    /// Invert brightness mapping (for light terminals)
    #[arg(long)]
    pub invert: bool,

    /// Glob to match images (e.g. '*.png'); filters the directory given with --input
    #[arg(long)]
    pub glob: Option<String>,

    /// Read an image path from stdin (first usable line); blocks until stdin closes
    #[arg(long)]
    pub stdin: bool,

    /// Prompt to choose when several images are found (--interactive=false to take the first)
    #[arg(long, default_value_t = true, action = ArgAction::Set, num_args = 0..=1, default_missing_value = "true")]
    pub interactive: bool,
}

impl Args {
    /// Which image the user asked for
    pub fn selection(&self) -> SelectionRequest {
        SelectionRequest {
            path: self.input.clone().filter(|p| !p.as_os_str().is_empty()),
            glob: self.glob.clone().filter(|g| !g.is_empty()),
            from_stdin: self.stdin,
            interactive: self.interactive,
        }
    }

    /// How to render it
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig::new(self.width, self.invert)
    }
}
