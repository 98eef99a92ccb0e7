mod app;

use std::path::PathBuf;

use anyhow::anyhow;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::app::{FocusGraphApp, GraphSource};
use focus_graph::focus::FocusConfig;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// JSON graph file; the built-in sample graph is shown when omitted
    #[arg(long)]
    graph: Option<PathBuf>,

    #[arg(long, default_value_t = FocusConfig::DEFAULT_SATELLITE_RADIUS)]
    satellite_radius: f32,

    #[arg(long, default_value_t = FocusConfig::DEFAULT_HIT_RADIUS)]
    hit_radius: f32,

    /// Angular offset of the successor arc, in radians
    #[arg(long, default_value_t = FocusConfig::DEFAULT_SUCCESSOR_ARC_OFFSET)]
    successor_offset: f32,

    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn focus_config(&self) -> FocusConfig {
        FocusConfig {
            satellite_radius: self.satellite_radius,
            hit_radius: self.hit_radius,
            successor_arc_offset: self.successor_offset,
        }
    }

    fn source(&self) -> GraphSource {
        match &self.graph {
            Some(path) => GraphSource::File(path.clone()),
            None => GraphSource::Sample,
        }
    }
}

fn setup_logging(verbose: bool) {
    let filter = if verbose { "focus_graph=debug,warn" } else { "warn" };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    let source = args.source();
    let config = args.focus_config();
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([1280.0, 860.0]),
        ..Default::default()
    };

    eframe::run_native(
        "focus-graph",
        options,
        Box::new(move |cc| Ok(Box::new(FocusGraphApp::new(cc, source.clone(), config)))),
    )
    .map_err(|error| anyhow!("viewer exited with an error: {error}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_focus_config() {
        let args = Args::parse_from(["focus-graph"]);
        assert_eq!(args.focus_config(), FocusConfig::default());
        assert!(matches!(args.source(), GraphSource::Sample));
    }

    #[test]
    fn graph_flag_selects_file_source() {
        let args = Args::parse_from(["focus-graph", "--graph", "deps.json", "--hit-radius", "12"]);
        let GraphSource::File(path) = args.source() else {
            panic!("expected a file source");
        };
        assert_eq!(path, PathBuf::from("deps.json"));
        assert_eq!(args.focus_config().hit_radius, 12.0);
    }
}
