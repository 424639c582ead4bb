mod font;
mod raster;

use anyhow::{Context, Result};
use labplane::{
    chart::{Figure, Legend, LegendLocation, Marker},
    colorspace::{overlay, OverlayPoint},
    models::Lab,
    plot_2d_lab_colorspace, Component,
};
use log::{error, info};

use crate::raster::{RenderConfig, Renderer};

const WIDTH: u32 = 1000;
const HEIGHT: u32 = 800;
const NUM_POINTS: usize = 256;
const LIGHTNESS: Component = 75.0;
const OUTPUT_NAME: &str = "lab_colorspace.png";

fn samples() -> Vec<OverlayPoint> {
    vec![
        OverlayPoint::new(Lab::new(50.0, -85.0, -40.0), "Platinum Plating"),
        OverlayPoint::new(Lab::new(45.0, -30.0, 40.0), "Paladium Plating"),
        OverlayPoint::new(Lab::new(70.0, 25.0, 20.0), "Silver Plating"),
        OverlayPoint::new(Lab::new(50.0, 60.0, 100.0), "Bronze Plating"),
    ]
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let markers = ["o", "v", "s"]
        .iter()
        .map(|code| code.parse::<Marker>())
        .collect::<Result<Vec<_>, _>>()?;

    let mut fig = Figure::new(WIDTH, HEIGHT);
    let axes = plot_2d_lab_colorspace(&mut fig, NUM_POINTS, LIGHTNESS);
    overlay(axes, &samples(), &markers);
    axes.legend(Legend {
        location: LegendLocation::LowerLeft,
        bbox_to_anchor: Some((1.0, 0.8)),
    });

    let image = Renderer::new(RenderConfig::default()).render(&fig)?;

    let path = std::env::temp_dir().join(OUTPUT_NAME);
    image
        .save(&path)
        .with_context(|| format!("could not write image to {}", path.display()))?;
    info!("wrote {}", path.display());

    if let Err(err) = open::that(&path) {
        error!("Failed to open {}: {}", path.display(), err);
    }

    Ok(())
}
