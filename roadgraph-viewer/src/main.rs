//! Entry point for the road graph viewer.

use std::path::PathBuf;

use clap::Parser;
use eframe::egui;
use log::info;
use roadgraph_core::{Error, load_road_network};

mod app;
mod camera;

use app::ViewerApp;

/// Renders the road graph of an OSM extract with intersections
/// highlighted.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to the `.osm.pbf` extract
    pbf: PathBuf,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging; default to "info" if RUST_LOG is unset.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let network = match load_road_network(&args.pbf) {
        Ok(network) => network,
        Err(Error::NoRoadNodes) => {
            println!("No valid road nodes found.");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    info!("Nodes: {}", network.node_count());
    info!("Edges: {}", network.edge_count());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1000.0, 1000.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Road Graph from OSM",
        options,
        Box::new(move |_cc| Ok(Box::new(ViewerApp::new(network)))),
    )
    .map_err(|err| anyhow::anyhow!("viewer window failed: {err}"))
}
