//! mixtrace-core — event model, classifier and table export for mixtrace.
//!
//! # Architecture
//!
//! ```text
//! Ingestor ──► Classifier ──► Timeline ──► Export
//! ```
//!
//! Everything runs on the calling thread. The ingestor consumes the whole
//! input before the exporter writes the first row.

pub mod classifier;
pub mod config;
pub mod error;
pub mod export;
pub mod ingest;
pub mod timeline;
pub mod types;

pub use classifier::{Classifier, Rule};
pub use config::Config;
pub use error::{Error, Result};
pub use ingest::Summary;
pub use timeline::Timeline;
pub use types::{Event, EventKind};
