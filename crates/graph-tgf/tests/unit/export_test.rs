//! Tests for TGF export: document layout, id remapping, edge expansion and
//! failure on dangling endpoints.

use graph_tgf::{
    Edge, Exporter, GraphView, LineEnding, MemoryGraph, TgfError, TgfOptions, TrivialGraphFormat,
    Vertex,
};
use std::fs;
use tempfile::TempDir;

fn exporter() -> TrivialGraphFormat {
    TrivialGraphFormat::with_options(TgfOptions {
        line_ending: LineEnding::Lf,
    })
}

fn two_vertices() -> MemoryGraph<&'static str> {
    let mut graph = MemoryGraph::new();
    graph.add_vertex("a").unwrap();
    graph.add_vertex("b").unwrap();
    graph
}

// Small flow network used by several tests
fn create_flow_network() -> MemoryGraph<&'static str> {
    let mut graph = MemoryGraph::new();
    graph.add_vertex_with_balance("s", 5).unwrap();
    graph.add_vertex("x").unwrap();
    graph.add_vertex_with_balance("t", -5).unwrap();

    graph
        .add_edge(Edge::directed("s", "x").with_capacity(4).with_flow(3))
        .unwrap();
    graph
        .add_edge(Edge::directed("x", "t").with_capacity(6))
        .unwrap();
    graph
        .add_edge(Edge::undirected("s", "t").with_flow(2).with_weight(7))
        .unwrap();
    graph
}

/// A graph store that does not validate its edges.
struct LooseGraph {
    vertices: Vec<Vertex<&'static str>>,
    edges: Vec<Edge<&'static str>>,
}

impl GraphView for LooseGraph {
    type Id = &'static str;
    type Vertex = Vertex<&'static str>;
    type Edge = Edge<&'static str>;

    fn vertices(&self) -> impl Iterator<Item = &Self::Vertex> {
        self.vertices.iter()
    }

    fn edges(&self) -> impl Iterator<Item = &Self::Edge> {
        self.edges.iter()
    }
}

#[test]
fn test_empty_graph_is_only_separator() {
    let graph: MemoryGraph<String> = MemoryGraph::new();
    assert_eq!(exporter().output(&graph).unwrap(), "#\n");
}

#[test]
fn test_vertices_without_edges() {
    let graph = two_vertices();
    assert_eq!(exporter().output(&graph).unwrap(), "1 a\n2 b\n#\n");
}

#[test]
fn test_directed_edge_without_attributes() {
    let mut graph = two_vertices();
    graph.add_edge(Edge::directed("a", "b")).unwrap();

    assert_eq!(exporter().output(&graph).unwrap(), "1 a\n2 b\n#\n1 2\n");
}

#[test]
fn test_directed_edge_keeps_direction() {
    let mut graph = two_vertices();
    graph.add_edge(Edge::directed("b", "a")).unwrap();

    assert_eq!(exporter().output(&graph).unwrap(), "1 a\n2 b\n#\n2 1\n");
}

#[test]
fn test_undirected_edge_expands_to_two_lines() {
    let mut graph = two_vertices();
    graph.add_edge(Edge::undirected("a", "b").with_weight(5)).unwrap();

    assert_eq!(
        exporter().output(&graph).unwrap(),
        "1 a\n2 b\n#\n1 2 5\n2 1 5\n"
    );
}

#[test]
fn test_undirected_edge_uses_stored_endpoint_order() {
    let mut graph = two_vertices();
    graph.add_edge(Edge::undirected("b", "a")).unwrap();

    assert_eq!(exporter().output(&graph).unwrap(), "1 a\n2 b\n#\n2 1\n1 2\n");
}

#[test]
fn test_flow_network_labels() {
    let graph = create_flow_network();

    let expected = "\
1 s (+5)
2 x
3 t (-5)
#
1 2 3/4
2 3 0/6
1 3 2/∞/7
3 1 2/∞/7
";
    assert_eq!(exporter().output(&graph).unwrap(), expected);
}

#[test]
fn test_ids_are_dense_and_follow_insertion_order() {
    let mut graph = MemoryGraph::new();
    let names = ["delta", "alpha", "charlie", "bravo"];
    for name in names {
        graph.add_vertex(name.to_string()).unwrap();
    }

    let output = exporter().output(&graph).unwrap();
    let vertex_lines: Vec<&str> = output.lines().take_while(|l| *l != "#").collect();

    assert_eq!(vertex_lines.len(), names.len());
    for (i, (line, name)) in vertex_lines.iter().zip(names).enumerate() {
        assert_eq!(*line, format!("{} {}", i + 1, name));
    }
}

#[test]
fn test_numeric_vertex_ids_are_remapped() {
    let mut graph = MemoryGraph::new();
    graph.add_vertex(100u32).unwrap();
    graph.add_vertex(7u32).unwrap();
    graph.add_edge(Edge::directed(7, 100)).unwrap();

    assert_eq!(exporter().output(&graph).unwrap(), "1 100\n2 7\n#\n2 1\n");
}

#[test]
fn test_parallel_edges_and_self_loops_are_kept() {
    let mut graph = two_vertices();
    graph.add_edge(Edge::directed("a", "b").with_weight(1)).unwrap();
    graph.add_edge(Edge::directed("a", "b").with_weight(1)).unwrap();
    graph.add_edge(Edge::undirected("a", "a")).unwrap();

    assert_eq!(
        exporter().output(&graph).unwrap(),
        "1 a\n2 b\n#\n1 2 1\n1 2 1\n1 1\n1 1\n"
    );
}

#[test]
fn test_line_counts_match_graph_shape() {
    let mut graph = MemoryGraph::new();
    for i in 0..20u32 {
        graph.add_vertex(i).unwrap();
    }
    let mut directed = 0;
    let mut undirected = 0;
    for i in 0..19u32 {
        if i % 3 == 0 {
            graph.add_edge(Edge::undirected(i, i + 1)).unwrap();
            undirected += 1;
        } else {
            graph.add_edge(Edge::directed(i, i + 1).with_capacity(i)).unwrap();
            directed += 1;
        }
    }

    let output = exporter().output(&graph).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    let separator = lines.iter().position(|l| *l == "#").unwrap();

    assert_eq!(separator, 20);
    assert_eq!(lines.len() - separator - 1, directed + 2 * undirected);
}

#[test]
fn test_export_is_deterministic() {
    let graph = create_flow_network();

    let first = exporter().output(&graph).unwrap();
    let second = exporter().output(&graph).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_dangling_endpoint_fails_without_output() {
    let graph = LooseGraph {
        vertices: vec![Vertex::new("a")],
        edges: vec![Edge::directed("a", "ghost")],
    };

    let err = exporter().output(&graph).unwrap_err();
    assert!(matches!(err, TgfError::UnknownVertex { ref vertex_id } if vertex_id == "ghost"));
}

#[test]
fn test_duplicate_ids_keep_numbering_dense() {
    let graph = LooseGraph {
        vertices: vec![Vertex::new("a"), Vertex::new("a"), Vertex::new("c")],
        edges: vec![Edge::directed("a", "c")],
    };

    // The first "a" owns id 1; the second still takes id 2
    assert_eq!(
        exporter().output(&graph).unwrap(),
        "1 a\n2 a\n3 c\n#\n1 3\n"
    );
}

#[test]
fn test_streaming_stops_before_dangling_edge() {
    let graph = LooseGraph {
        vertices: vec![Vertex::new("a"), Vertex::new("b")],
        edges: vec![Edge::directed("a", "b"), Edge::undirected("b", "ghost")],
    };

    let mut buffer = Vec::new();
    let err = exporter().write_to(&graph, &mut buffer).unwrap_err();

    assert!(matches!(err, TgfError::UnknownVertex { .. }));
    assert_eq!(String::from_utf8(buffer).unwrap(), "1 a\n2 b\n#\n1 2\n");
}

#[test]
fn test_write_to_file_matches_output() {
    let graph = create_flow_network();

    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("network.tgf");
    let file = fs::File::create(&path).unwrap();
    exporter().write_to(&graph, file).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written, exporter().output(&graph).unwrap());
}

#[test]
fn test_free_function_and_graph_method_agree() {
    let graph = create_flow_network();
    let options = TgfOptions {
        line_ending: LineEnding::CrLf,
    };

    let via_fn = graph_tgf::export_tgf_with(&graph, options.clone()).unwrap();
    let via_method = graph.export_tgf_with(options).unwrap();

    assert_eq!(via_fn, via_method);
    assert!(via_fn.contains("\r\n#\r\n"));
    assert!(!via_fn.replace("\r\n", "").contains('\n'));
}

#[cfg(not(windows))]
#[test]
fn test_default_line_ending_is_lf() {
    let graph: MemoryGraph<&str> = MemoryGraph::new();
    assert_eq!(graph.export_tgf().unwrap(), "#\n");
    assert_eq!(graph_tgf::export_tgf(&graph).unwrap(), "#\n");
}

#[test]
fn test_large_graph_export_succeeds() {
    let mut graph = MemoryGraph::new();
    for i in 0..10_100u32 {
        graph.add_vertex(i).unwrap();
    }
    for i in 1..10_100u32 {
        graph.add_edge(Edge::directed(i - 1, i)).unwrap();
    }

    let output = graph.export_tgf().unwrap();
    assert_eq!(output.lines().count(), 10_100 + 1 + 10_099);
}
