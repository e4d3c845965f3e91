//! bomsim - bill-of-materials explorer and product similarity calculator
//!
//! This library walks a flat BoM table (`Parent, Component, QtyPer`) as a
//! directed graph, answering structural questions about products and
//! measuring how much two products share at the leaf-component level.
//! It follows hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`bom_analysis`): Value objects, the traversal engine and the similarity calculator
//! - **Application Layer** (`application`): Use cases, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use bomsim::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = QueryBomUseCase::new(
//!     FileSystemReader::new(),
//!     FileSystemReader::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = QueryRequest::new(
//!     PathBuf::from("bom.csv"),
//!     QueryKind::Similarity {
//!         sku_a: "PROD012".to_string(),
//!         sku_b: "PROD001".to_string(),
//!     },
//! );
//! let response = use_case.execute(request)?;
//!
//! let output = JsonFormatter::new().format(&response)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```
//!
//! The domain services can also be used directly on an in-memory table:
//!
//! ```
//! use bomsim::prelude::*;
//!
//! let bom = BillOfMaterials::new(vec![
//!     BomEntry::new("P", "A", 2.0).unwrap(),
//!     BomEntry::new("A", "X", 3.0).unwrap(),
//! ]);
//! let closure = BomTraversal::new(&bom)
//!     .leaf_quantity_closure(&Sku::from("P"), Quantity::ONE)
//!     .unwrap();
//! assert_eq!(closure.get(&Sku::from("X")), Some(6.0));
//! ```

pub mod adapters;
pub mod application;
pub mod bom_analysis;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{DotFormatter, JsonFormatter, MarkdownFormatter};
    pub use crate::application::dto::{
        OutputFormat, QueryKind, QueryRequest, QueryResponse, QueryResult,
    };
    pub use crate::application::use_cases::QueryBomUseCase;
    pub use crate::bom_analysis::domain::{
        BillOfMaterials, BomEntry, BomError, BomResult, LeafClosure, Quantity, SimilarityMatrix,
        SimilarityReport, Sku,
    };
    pub use crate::bom_analysis::policies::round_to;
    pub use crate::bom_analysis::services::{BomTraversal, SimilarityCalculator};
    pub use crate::ports::outbound::{
        BomReader, OutputPresenter, ProgressReporter, ReportFormatter, SkuListReader,
    };
    pub use crate::shared::Result;
}
