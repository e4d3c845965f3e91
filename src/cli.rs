use bomsim::application::dto::OutputFormat;
use bomsim::bom_analysis::domain::Quantity;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Explore product structures and compare products by their leaf components
#[derive(Parser, Debug)]
#[command(name = "bomsim")]
#[command(version)]
#[command(
    about = "Explore bill-of-materials structures and compare products by shared leaf components",
    long_about = None
)]
pub struct Args {
    /// BoM CSV file (Parent, Component, QtyPer)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub bom: Option<PathBuf>,

    /// Output format: json, markdown or dot
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Config file (defaults to bomsim.config.yml in the current directory)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Abandon any walk more than N edge levels below the queried SKU
    #[arg(long, global = true, value_name = "N")]
    pub max_depth: Option<usize>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Every SKU below a root, each once
    Components { sku: String },

    /// Every assembly or product that consumes a SKU, each once
    Usage { sku: String },

    /// Top-level products that consume a SKU
    TopLevel { sku: String },

    /// Parent-component pairs below a root, in walk order
    Edges { sku: String },

    /// Leaf SKUs below a root, each once
    Leaves { sku: String },

    /// Leaf quantities needed to build a root
    Closure {
        sku: String,

        /// How many of the root to build
        #[arg(short, long, default_value = "1")]
        qty: Quantity,
    },

    /// Similarity proportion between two products
    Similarity { sku_a: String, sku_b: String },

    /// Pairwise similarity of every product in a SKU list
    Matrix {
        /// SKU list CSV (header row, one SKU per row)
        #[arg(short, long, value_name = "PATH")]
        skus: Option<PathBuf>,
    },
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
