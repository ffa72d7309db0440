use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use rustc_hash::FxHashMap;
use songgraph::args::{Args, Command};
use songgraph::colors::ColorScheme;
use songgraph::display::{
    display_graph_info, display_graph_summary, display_queue, display_queue_info,
};
use songgraph::parsing::{parse_playlist_file, parse_weights_file};
use songgraph::weights::{attribute_keys, default_weights};
use songgraph_core::{
    EXTENDED_ATTRIBUTES, Metric, QueueConfig, SimilarityGraph, TrackCatalog,
    build_threshold_graph, build_top_n_graph, generate_queue,
};
use std::{error::Error, fs, path::PathBuf, process};
use tracing_subscriber::EnvFilter;

enum AdmissionPolicy {
    Threshold(f64),
    TopN(usize),
}

impl AdmissionPolicy {
    fn describe(&self) -> String {
        match self {
            AdmissionPolicy::Threshold(threshold) => format!("threshold {threshold}"),
            AdmissionPolicy::TopN(n) => format!("top-{n} admission"),
        }
    }
}

struct GraphRequest {
    catalog: TrackCatalog,
    metric: Metric,
    policy: AdmissionPolicy,
    workers: Option<usize>,
    output: PathBuf,
}

struct QueueRequest {
    catalog: TrackCatalog,
    seed_track: String,
    weights: FxHashMap<String, f64>,
    attributes: Vec<String>,
    config: QueueConfig,
    rng: StdRng,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let colors = ColorScheme::new(!args.no_color);

    if let Err(error_message) = run(args.command, args.quiet, &colors) {
        eprintln!("{} {}", colors.error("❌ Error:"), error_message);
        process::exit(1);
    }
}

fn run(command: Command, quiet: bool, colors: &ColorScheme) -> Result<(), Box<dyn Error>> {
    match command {
        Command::Graph {
            playlist,
            metric,
            threshold,
            top_n,
            workers,
            output,
        } => {
            let request = create_graph_request(playlist, metric, threshold, top_n, workers, output)?;
            execute_graph_build(request, quiet, colors)
        }
        Command::Queue {
            playlist,
            seed_track,
            count,
            neighborhood,
            exponent,
            metric,
            weights,
            rng_seed,
        } => {
            let metric: Metric = metric.parse()?;
            let config = QueueConfig::new(count, neighborhood, exponent, metric);
            let request = create_queue_request(playlist, seed_track, config, weights, rng_seed)?;
            execute_queue_walk(request, quiet, colors)
        }
    }
}

fn create_graph_request(
    playlist: PathBuf,
    metric_name: String,
    threshold: Option<f64>,
    top_n: Option<usize>,
    workers: Option<usize>,
    output: PathBuf,
) -> Result<GraphRequest, Box<dyn Error>> {
    let records = parse_playlist_file(&playlist)?;
    let catalog = TrackCatalog::from_records(&records)?;
    let metric: Metric = metric_name.parse()?;

    let policy = match (threshold, top_n) {
        (Some(threshold), None) => AdmissionPolicy::Threshold(threshold),
        (None, Some(n)) => AdmissionPolicy::TopN(n),
        _ => return Err("choose an admission policy: --threshold or --top-n".into()),
    };

    Ok(GraphRequest {
        catalog,
        metric,
        policy,
        workers,
        output,
    })
}

fn execute_graph_build(
    request: GraphRequest,
    quiet: bool,
    colors: &ColorScheme,
) -> Result<(), Box<dyn Error>> {
    if !quiet {
        display_graph_info(
            request.metric.as_str(),
            &request.policy.describe(),
            request.catalog.len(),
            colors,
        );
    }

    let graph: SimilarityGraph = match request.policy {
        AdmissionPolicy::Threshold(threshold) => {
            build_threshold_graph(&request.catalog, request.metric, threshold, request.workers)
        }
        AdmissionPolicy::TopN(n) => build_top_n_graph(&request.catalog, n, request.workers),
    };

    let file = fs::File::create(&request.output)?;
    serde_json::to_writer_pretty(file, &graph)?;

    display_graph_summary(&graph, &request.output, colors);
    Ok(())
}

fn create_queue_request(
    playlist: PathBuf,
    seed_track: String,
    config: QueueConfig,
    weights_path: Option<PathBuf>,
    rng_seed: Option<u64>,
) -> Result<QueueRequest, Box<dyn Error>> {
    let records = parse_playlist_file(&playlist)?;
    let catalog = TrackCatalog::from_records_with_allowlist(&records, &EXTENDED_ATTRIBUTES)?;

    let weights = match weights_path {
        Some(path) => parse_weights_file(&path)?,
        None => default_weights(),
    };
    let attributes = attribute_keys(&weights);

    let rng = match rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    Ok(QueueRequest {
        catalog,
        seed_track,
        weights,
        attributes,
        config,
        rng,
    })
}

fn execute_queue_walk(
    mut request: QueueRequest,
    quiet: bool,
    colors: &ColorScheme,
) -> Result<(), Box<dyn Error>> {
    if !quiet {
        let seed_title = request
            .catalog
            .get(&request.seed_track)
            .map(|track| track.title.as_str())
            .unwrap_or(request.seed_track.as_str());
        display_queue_info(
            seed_title,
            request.config.num_songs,
            request.config.metric.as_str(),
            colors,
        );
    }

    let outcome = generate_queue(
        &request.catalog,
        &request.seed_track,
        &request.weights,
        &request.attributes,
        &request.config,
        &mut request.rng,
    )?;

    display_queue(&outcome, &request.catalog, quiet, colors);
    Ok(())
}
