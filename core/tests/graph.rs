use songgraph_core::{
    Metric, RawRecord, TrackCatalog, build_threshold_graph, build_top_n_graph,
};

fn record(id: &str, fields: &[(&str, f64)]) -> RawRecord {
    RawRecord {
        id: Some(id.to_string()),
        title: Some(format!("Track {id}")),
        artist: Some("Test Artist".to_string()),
        fields: fields
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect(),
    }
}

fn catalog(records: Vec<RawRecord>) -> TrackCatalog {
    TrackCatalog::from_records(&records).unwrap()
}

fn identical_triangle() -> TrackCatalog {
    catalog(vec![
        record("a", &[("danceability", 0.5), ("energy", 0.8)]),
        record("b", &[("danceability", 0.5), ("energy", 0.8)]),
        record("c", &[("danceability", 0.5), ("energy", 0.8)]),
    ])
}

#[test]
fn test_identical_tracks_form_complete_triangle() {
    let catalog = identical_triangle();
    let graph = build_threshold_graph(&catalog, Metric::Cosine, 0.5, None);

    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 3);
    for (a, b) in [("a", "b"), ("a", "c"), ("b", "c")] {
        let weight = graph.edge_weight(a, b).unwrap();
        assert!((weight - 1.0).abs() < 1e-12);
    }
}

#[test]
fn test_no_self_loops_and_unique_pairs() {
    let graph = build_threshold_graph(&identical_triangle(), Metric::Cosine, -1.0, None);

    for edge in &graph.edges {
        assert_ne!(edge.source, edge.target);
    }
    let mut pairs: Vec<(String, String)> = graph
        .edges
        .iter()
        .map(|edge| {
            let mut pair = [edge.source.clone(), edge.target.clone()];
            pair.sort();
            (pair[0].clone(), pair[1].clone())
        })
        .collect();
    pairs.sort();
    pairs.dedup();
    assert_eq!(pairs.len(), graph.edge_count());
}

#[test]
fn test_threshold_is_strictly_greater_than() {
    // Only shared attribute differs by 1.0, so the euclidean score is
    // exactly 0.5.
    let catalog = catalog(vec![
        record("a", &[("energy", 0.0)]),
        record("b", &[("energy", 1.0)]),
    ]);

    let at_threshold = build_threshold_graph(&catalog, Metric::Euclidean, 0.5, None);
    assert_eq!(at_threshold.edge_count(), 0);

    let below_threshold = build_threshold_graph(&catalog, Metric::Euclidean, 0.49, None);
    assert_eq!(below_threshold.edge_count(), 1);
    assert_eq!(below_threshold.edge_weight("a", "b"), Some(0.5));
}

#[test]
fn test_incomparable_pairs_never_produce_edges() {
    let catalog = catalog(vec![
        record("a", &[("danceability", 0.9)]),
        record("b", &[("energy", 0.9)]),
    ]);

    let threshold_graph = build_threshold_graph(&catalog, Metric::Cosine, -1.0, None);
    assert_eq!(threshold_graph.node_count(), 2);
    assert_eq!(threshold_graph.edge_count(), 0);

    let top_n_graph = build_top_n_graph(&catalog, 5, None);
    assert_eq!(top_n_graph.node_count(), 2);
    assert_eq!(top_n_graph.edge_count(), 0);
}

/// Four tracks where h is the nearest partner of both a and b, but h
/// itself only contributes one edge.
fn hub_catalog() -> TrackCatalog {
    catalog(vec![
        record("a", &[("danceability", 1.0), ("energy", 0.9)]),
        record("b", &[("danceability", 0.9), ("energy", 1.0)]),
        record("c", &[("danceability", 1.0), ("energy", 0.5)]),
        record("h", &[("danceability", 1.0), ("energy", 1.0)]),
    ])
}

#[test]
fn test_top_n_realized_degree_can_exceed_n() {
    let graph = build_top_n_graph(&hub_catalog(), 1, None);

    // a and b both pick h; c picks a; h's own single pick lands on an
    // already admitted pair.
    assert_eq!(graph.edge_count(), 3);
    assert!(graph.has_edge("a", "h"));
    assert!(graph.has_edge("b", "h"));
    assert!(graph.has_edge("a", "c"));
    assert_eq!(graph.degree("h"), 2);
}

#[test]
fn test_top_n_keeps_each_nodes_best_partners() {
    let graph = build_top_n_graph(&hub_catalog(), 2, None);

    // a's two highest-scoring partners are h and b; both edges must exist
    // no matter what the other nodes contribute.
    assert!(graph.has_edge("a", "h"));
    assert!(graph.has_edge("a", "b"));
    // Union over all nodes' picks: a-h, a-b, b-h, c-a, c-h
    assert_eq!(graph.edge_count(), 5);
    assert_eq!(graph.degree("h"), 3);
}

#[test]
fn test_worker_count_does_not_change_the_graph() {
    let catalog = hub_catalog();

    let single = build_threshold_graph(&catalog, Metric::Cosine, 0.9, Some(1));
    let parallel = build_threshold_graph(&catalog, Metric::Cosine, 0.9, Some(4));
    let default_pool = build_threshold_graph(&catalog, Metric::Cosine, 0.9, None);

    let edge_key = |graph: &songgraph_core::SimilarityGraph| {
        let mut edges: Vec<(String, String, String)> = graph
            .edges
            .iter()
            .map(|edge| {
                (
                    edge.source.clone(),
                    edge.target.clone(),
                    format!("{:.12}", edge.weight),
                )
            })
            .collect();
        edges.sort();
        edges
    };

    assert_eq!(edge_key(&single), edge_key(&parallel));
    assert_eq!(edge_key(&single), edge_key(&default_pool));
}

#[test]
fn test_graph_serializes_for_the_visualization_handoff() {
    let graph = build_threshold_graph(&identical_triangle(), Metric::Cosine, 0.5, None);
    let json = serde_json::to_value(&graph).unwrap();

    assert_eq!(json["nodes"].as_array().unwrap().len(), 3);
    assert_eq!(json["edges"].as_array().unwrap().len(), 3);
    assert_eq!(json["nodes"][0]["label"], "Track a");
    assert!(json["edges"][0]["weight"].is_number());
}
