//! vigil-registry — the in-memory metric registry.
//!
//! Stores the most recent gauge value per (check name, URL) pair and
//! renders the whole registry into the Prometheus text exposition
//! format for scraping.
//!
//! # Invariant
//!
//! At most one live entry exists per (name, url) pair at any time.
//! `publish` removes any previous entry for the pair before inserting
//! the new value, inside one write-lock critical section, so readers
//! never observe zero entries for a pair that has completed a probe,
//! nor two entries for the same pair.

pub mod prometheus;
pub mod registry;

pub use prometheus::render_prometheus;
pub use registry::{CheckKey, MetricRegistry};
