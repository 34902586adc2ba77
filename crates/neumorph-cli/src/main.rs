//! neumorph - render a neumorphic toggle as JSON draw commands.

mod error;
mod render;

use clap::Parser;
use error::CliError;
use neumorph_widgets::{sanitize_side, ToggleSettings};
use render::{render, RenderOptions};
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "neumorph")]
#[command(about = "Render a neumorphic toggle switch to JSON draw commands")]
#[command(version)]
struct Cli {
    /// Start in the OFF state
    #[arg(long)]
    off: bool,

    /// Viewport width
    #[arg(long, default_value_t = 320.0)]
    width: f32,

    /// Viewport height (default: same as width)
    #[arg(long)]
    height: Option<f32>,

    /// TOML file with colors and transition
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Activate the toggle this many times before rendering
    #[arg(long, default_value_t = 0)]
    tap: u32,

    /// Emit this many steps of the last transition (n + 1 frames)
    #[arg(long, default_value_t = 0)]
    frames: u32,

    /// Pretty-print the JSON
    #[arg(long)]
    pretty: bool,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn options(&self) -> Result<RenderOptions, CliError> {
        // Degenerate sizes render an empty toggle rather than failing.
        let width = sanitize_side(self.width);
        let height = self.height.map_or(width, sanitize_side);

        let settings = match &self.config {
            Some(path) => ToggleSettings::load(path)?,
            None => ToggleSettings::default(),
        };

        Ok(RenderOptions {
            on: !self.off,
            width,
            height,
            taps: self.tap,
            frames: self.frames,
            settings,
        })
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let options = cli.options()?;
    debug!(?options, "render options");

    let output = render(&options);
    let json = if cli.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}")?;
    Ok(())
}

/// Logs go to stderr so stdout stays pure JSON.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
