//! tessera CLI: render a square-code sentence to an SVG file.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use miette::{IntoDiagnostic, Result};

use tessera::{RenderOptions, render_svg};

#[derive(Parser)]
#[command(name = "tessera", version, about = "Render square-code glyph grids to SVG")]
struct Cli {
    /// Sentence to render. Whitespace is skipped; accented Vietnamese
    /// characters expand into base letter + mark cells.
    text: String,

    /// Number of grid columns.
    #[arg(long, default_value_t = 6)]
    columns: usize,

    /// Minimum number of rows to reserve in the viewport. The grid grows
    /// past this when the sentence needs more.
    #[arg(long, default_value_t = 1)]
    min_rows: usize,

    /// Do not draw the character label over each cell.
    #[arg(long)]
    no_labels: bool,

    /// Border line width, in canvas units (a cell is 3 units wide).
    #[arg(long, default_value_t = 0.05)]
    line_width: f64,

    /// Pixels per canvas unit.
    #[arg(long, default_value_t = 40.0)]
    scale: f64,

    /// Output file.
    #[arg(short, long, default_value = "squares.svg")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let options = RenderOptions {
        columns: cli.columns,
        min_rows: cli.min_rows,
        show_labels: !cli.no_labels,
        line_width: cli.line_width,
        scale: cli.scale,
        ..RenderOptions::default()
    };

    let svg = render_svg(&cli.text, &options).into_diagnostic()?;
    fs::write(&cli.output, svg).into_diagnostic()?;
    log::info!("wrote {}", cli.output.display());
    Ok(())
}
