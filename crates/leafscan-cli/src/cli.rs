//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "leafscan", version, about = "Send leaf images to the inference server")]
pub struct Cli {
    /// Base URL of the inference server, e.g. http://10.0.0.5:5000
    #[arg(long, env = "LEAFSCAN_SERVER_URL")]
    pub server: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Diagnose leaf health
    Classify {
        /// Image file to submit
        image: PathBuf,
        /// Show confidence and every class probability
        #[arg(long)]
        detailed: bool,
    },
    /// Detect diseased regions with bounding boxes
    Detect {
        image: PathBuf,
        /// Where to write the annotated image
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Segment lesions
    Segment {
        image: PathBuf,
        /// Where to write the annotated image
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Query server health
    Health,
    /// Show the classification model's labels and input shape
    ModelInfo,
}
