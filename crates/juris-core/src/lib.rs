//! juris-core: domain layer for the juris judicial lookup front end.
//!
//! Everything in this crate is a pure transform over decoded webhook
//! payloads or user input, except [`config`] which reads the user's
//! configuration file.
//!
//! # Data flow
//!
//! ```text
//! form input ──► validation ──► (juris-webhooks) ──► normalizer ──► ProcessOutcome
//!                                      │
//!                                      └──► envelope ──► sections ──► JurisprudenceOutcome
//! ```
//!
//! The normalizer and the section parser are independent; neither holds
//! any state between calls.

pub mod config;
pub mod display;
pub mod envelope;
pub mod error;
pub mod keywords;
pub mod markdown;
pub mod normalizer;
pub mod query;
pub mod sections;
pub mod states;
pub mod types;
pub mod validation;

mod fields;

pub use envelope::{decode_body, unwrap_envelope};
pub use error::{QueryError, ValidationError};
pub use normalizer::normalize;
pub use query::{JurisprudenceQuery, ProcessQuery, SummaryRequest};
pub use sections::parse_sections;
pub use types::{
    AnalysisSection, JurisprudenceItem, JurisprudenceOutcome, JurisprudenceResult, Movement,
    NotFoundResult, Parties, ProcessOutcome, ProcessRecord, ProcessSummary,
};
