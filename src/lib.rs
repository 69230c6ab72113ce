//! juris: terminal front end for judicial process lookup and AI-assisted
//! case-law analysis.
//!
//! The binary either starts the TUI (`juris-tui`) or runs one headless
//! query through [`headless`]. Both paths share the same layers:
//!
//! ```text
//! input ──► validation ──► WebhookClient ──► normalize / unwrap_envelope ──► card lines
//!           (juris-core)   (juris-webhooks)       (juris-core)               (juris-tui)
//! ```

pub mod headless;

pub use headless::{Format, ProcessReport};
