//! juris-webhooks: async client for the webhooks behind juris.
//!
//! Three endpoints do the real work: process lookup, case-law search and
//! movement summaries. [`WebhookClient`] posts JSON to each, maps transport
//! failures onto [`juris_core::QueryError`] and hands decoded bodies to the
//! pure transforms in `juris-core`.

mod client;

pub use client::{Endpoint, WebhookClient};
