use crate::colors::ColorScheme;
use songgraph_core::{QueueOutcome, SimilarityGraph, TrackCatalog};
use std::path::Path;

pub fn display_graph_info(
    metric: &str,
    policy: &str,
    track_count: usize,
    colors: &ColorScheme,
) {
    println!(
        "🎵 Building similarity graph over {} tracks",
        colors.number(&track_count.to_string())
    );
    println!("⚙️  Using {} similarity with {}", metric, policy);
    println!("🔍 Computing pairwise similarities...");
}

pub fn display_graph_summary(graph: &SimilarityGraph, output: &Path, colors: &ColorScheme) {
    println!(
        "{} Graph with {} nodes and {} edges written to {}",
        colors.success("✅"),
        colors.number(&graph.node_count().to_string()),
        colors.number(&graph.edge_count().to_string()),
        output.display()
    );
}

pub fn display_queue_info(seed_title: &str, count: usize, metric: &str, colors: &ColorScheme) {
    println!(
        "🎵 Queueing {} tracks from {}",
        colors.number(&count.to_string()),
        colors.track_name(&format!("\"{}\"", seed_title))
    );
    println!("⚙️  Ranking neighbors by weighted {} score", metric);
    println!("🔀 Walking...");
}

pub fn display_queue(
    outcome: &QueueOutcome,
    catalog: &TrackCatalog,
    quiet: bool,
    colors: &ColorScheme,
) {
    if !quiet {
        println!();
    }

    if outcome.is_exhausted() {
        println!(
            "{} Ran out of candidates after {} tracks; partial queue below",
            colors.warning("⚠️"),
            colors.number(&outcome.track_ids().len().to_string())
        );
    }

    for (step_index, track_id) in outcome.track_ids().iter().enumerate() {
        let step_number = format!("{}.", step_index + 1);
        match catalog.get(track_id) {
            Some(track) => println!(
                "{:3} {} by {}",
                colors.step_number(&step_number),
                colors.track_name(&format!("\"{}\"", track.title)),
                colors.artist_name(&track.artist)
            ),
            None => println!("{:3} {}", colors.step_number(&step_number), track_id),
        }
    }
}
