//! Polyview - interactive terminal viewer for polyhedron description
//! files.
//!
//! Drag with the left mouse button to rotate the mesh in place; press q
//! or Esc to quit.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use polyview_terminal::{TerminalApp, ViewerConfig, DEFAULT_SENSITIVITY};

#[derive(Parser)]
#[command(name = "polyview")]
#[command(about = "Render a polyhedron file and rotate it by dragging the mouse")]
#[command(version)]
struct Cli {
    /// Path to the polyhedron description file
    mesh: PathBuf,

    /// Draw a dot on each face corner
    #[arg(long)]
    markers: bool,

    /// Drag sensitivity in radians per cell of pointer travel
    #[arg(long, default_value_t = DEFAULT_SENSITIVITY)]
    sensitivity: f64,

    /// Zoom multiplier on the default fit-to-window scale
    #[arg(long, default_value_t = 1.0)]
    zoom: f64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mesh = polyview_core::load_mesh(&cli.mesh)
        .with_context(|| format!("failed to load mesh from {}", cli.mesh.display()))?;

    let config = ViewerConfig {
        sensitivity: cli.sensitivity,
        zoom: cli.zoom,
        vertex_markers: cli.markers,
    };
    let title = cli
        .mesh
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| cli.mesh.display().to_string());

    let mut app = TerminalApp::new(mesh, config, &title)?;
    app.run()?;

    Ok(())
}
