use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use locus_core::{Plasmid, PlasmidRecord};
use locus_render::geometry::CANVAS_SIZE;
use locus_render::{render, MapStyle, Pixmap, SvgSurface};

#[derive(Parser)]
#[command(
    name = "locus",
    version,
    about = "Render an annotated circular plasmid map"
)]
struct Cli {
    /// Plasmid description (JSON: name, sequence, features).
    input: PathBuf,

    /// Output path. Defaults to the input path with the matching extension.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Rasterize to PNG instead of writing SVG.
    #[arg(long)]
    png: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let raw = fs::read_to_string(&cli.input)
        .with_context(|| format!("reading {}", cli.input.display()))?;
    let record: PlasmidRecord =
        serde_json::from_str(&raw).context("parsing plasmid description")?;
    let plasmid = Plasmid::from_record(record)?;
    info!(
        "{}: {} bp, {} features",
        plasmid.name,
        plasmid.len(),
        plasmid.features.len()
    );

    let extension = if cli.png { "png" } else { "svg" };
    let output = cli
        .output
        .unwrap_or_else(|| cli.input.with_extension(extension));
    let style = MapStyle::default();

    if cli.png {
        let mut pixmap = Pixmap::new(CANVAS_SIZE, CANVAS_SIZE);
        render(&mut pixmap, &plasmid, &style)?;
        pixmap.write_png(&output)?;
    } else {
        let mut svg = SvgSurface::new(CANVAS_SIZE, CANVAS_SIZE);
        render(&mut svg, &plasmid, &style)?;
        fs::write(&output, svg.finish())
            .with_context(|| format!("writing {}", output.display()))?;
    }
    info!("wrote {}", output.display());
    Ok(())
}
