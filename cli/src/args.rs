use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "songgraph")]
#[command(about = "Build song similarity graphs and shuffle queues from playlist audio features")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Quiet mode - only show the final result
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build a similarity graph from a playlist and write it as JSON
    Graph {
        /// Playlist JSON file with per-track audio features
        playlist: PathBuf,

        /// Similarity metric for pairwise scoring (cosine or euclidean)
        #[arg(short, long, default_value = "cosine")]
        metric: String,

        /// Keep edges with similarity strictly above this threshold
        #[arg(short, long, value_name = "SIMILARITY", conflicts_with = "top_n")]
        threshold: Option<f64>,

        /// Keep each track's top N partners instead of a threshold
        #[arg(short = 'n', long, value_name = "COUNT")]
        top_n: Option<usize>,

        /// Fixed worker count for pairwise scoring
        #[arg(short, long, value_name = "COUNT")]
        workers: Option<usize>,

        /// Output path for the graph JSON
        #[arg(short, long, default_value = "graph.json")]
        output: PathBuf,
    },

    /// Generate a non-repeating shuffle queue starting from a seed track
    Queue {
        /// Playlist JSON file with per-track audio features
        playlist: PathBuf,

        /// Track id to start the queue from
        seed_track: String,

        /// Number of tracks to queue after the seed
        #[arg(short, long, default_value = "30")]
        count: usize,

        /// Nearest-neighbor pool size considered at each step
        #[arg(short = 'k', long, default_value = "20")]
        neighborhood: usize,

        /// Exponent biasing selection toward closer tracks
        #[arg(short, long, default_value = "2.0")]
        exponent: f64,

        /// Weighted metric for neighbor ranking (euclidean or cosine)
        #[arg(short, long, default_value = "euclidean")]
        metric: String,

        /// JSON file mapping attribute names to weights; its keys define
        /// the attribute list used for scoring
        #[arg(long, value_name = "FILE")]
        weights: Option<PathBuf>,

        /// Seed for the random source (same seed, same queue)
        #[arg(long, value_name = "SEED")]
        rng_seed: Option<u64>,
    },
}
