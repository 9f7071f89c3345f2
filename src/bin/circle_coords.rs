//! circle-coords: print the lattice points of a midpoint circle.
//!
//! Run: `circle-coords --center-x 1 --center-y 1 --radius 1`
//! Logging: `RUST_LOG=lattice_circle=debug circle-coords`

use std::io::{stdout, Write};

use anyhow::{Context, Result};
use clap::Parser;
use lattice_circle::input::parse_integer;
use lattice_circle::output::{write_points, PointFormat};
use lattice_circle::{generate_with, Connectivity};

/// Print the grid coordinates approximating a circle's perimeter
#[derive(Parser, Debug)]
#[command(name = "circle-coords")]
#[command(version)]
#[command(about = "Midpoint-circle lattice coordinates, one point per line", long_about = None)]
struct Cli {
    /// Center X coordinate
    #[arg(long, default_value = "1", allow_hyphen_values = true, value_parser = center_x)]
    center_x: i32,

    /// Center Y coordinate
    #[arg(long, default_value = "1", allow_hyphen_values = true, value_parser = center_y)]
    center_y: i32,

    /// Circle radius (non-negative)
    #[arg(short, long, default_value = "1", allow_hyphen_values = true, value_parser = radius)]
    radius: i32,

    /// Stepping rule: four or eight
    #[arg(short, long, default_value = "four")]
    connectivity: Connectivity,

    /// Output format: tuple, csv or json
    #[arg(short, long, default_value = "tuple")]
    format: PointFormat,

    /// Print a description line before the points
    #[arg(long)]
    header: bool,
}

fn center_x(s: &str) -> lattice_circle::Result<i32> {
    parse_integer("center_x", s)
}

fn center_y(s: &str) -> lattice_circle::Result<i32> {
    parse_integer("center_y", s)
}

fn radius(s: &str) -> lattice_circle::Result<i32> {
    parse_integer("radius", s)
}

fn header_line(cli: &Cli) -> String {
    format!(
        "Coordinates to plot a circle centered at ({}, {}) with radius {}:",
        cli.center_x, cli.center_y, cli.radius
    )
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::debug!(?cli, "parsed arguments");

    let points = generate_with(cli.center_x, cli.center_y, cli.radius, cli.connectivity)
        .with_context(|| {
            format!(
                "cannot rasterize circle at ({}, {}) with radius {}",
                cli.center_x, cli.center_y, cli.radius
            )
        })?;

    let mut out = stdout().lock();
    if cli.header {
        writeln!(out, "{}", header_line(&cli))?;
    }
    write_points(&mut out, &points, cli.format).context("failed to write points")?;

    Ok(())
}
