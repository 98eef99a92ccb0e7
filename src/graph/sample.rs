use super::model::{Edge, Graph, GraphError, NodeId};

pub fn sample_graph() -> Result<Graph, GraphError> {
    let nodes = [
        "parser", "lexer", "ast", "typeck", "codegen", "driver", "diagnostics", "linker",
    ]
    .into_iter()
    .map(NodeId::from)
    .collect();

    let edges = [
        ("driver", "parser"),
        ("parser", "lexer"),
        ("lexer", "ast"),
        ("ast", "parser"),
        ("parser", "ast"),
        ("ast", "typeck"),
        ("typeck", "codegen"),
        ("typeck", "diagnostics"),
        ("parser", "diagnostics"),
        ("lexer", "diagnostics"),
        ("codegen", "diagnostics"),
        ("codegen", "linker"),
        ("driver", "linker"),
        ("driver", "codegen"),
        ("diagnostics", "diagnostics"),
        ("driver", "parser"),
    ]
    .into_iter()
    .map(|(src, dst)| Edge::new(src, dst))
    .collect();

    Graph::new(nodes, edges)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_is_valid() {
        let graph = sample_graph().unwrap();
        assert_eq!(graph.node(0), Some(&NodeId::from("parser")));
        assert!(graph.edges().iter().any(Edge::is_self_loop));
    }
}
