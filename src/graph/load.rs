use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::model::Graph;
use super::parse::parse_graph;

pub fn load_graph(path: &Path) -> Result<Graph> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read graph file {}", path.display()))?;
    let graph = parse_graph(&raw)
        .with_context(|| format!("failed to parse graph file {}", path.display()))?;

    info!(
        path = %path.display(),
        nodes = graph.len(),
        edges = graph.edges().len(),
        "loaded graph"
    );
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn loads_graph_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"nodes": ["A", "B"], "edges": [["A", "B"]]}}"#).unwrap();

        let graph = load_graph(file.path()).unwrap();
        assert_eq!(graph.len(), 2);
        assert_eq!(graph.edges().len(), 1);
    }

    #[test]
    fn bundled_demo_graph_loads() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/build-pipeline.json");
        let graph = load_graph(&path).unwrap();

        assert_eq!(graph.len(), 8);
        assert_eq!(graph.edges().len(), 10);
    }

    #[test]
    fn missing_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        let error = load_graph(&path).unwrap_err();
        assert!(error.to_string().contains("absent.json"));
    }
}
