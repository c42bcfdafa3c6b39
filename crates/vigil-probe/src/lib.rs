//! vigil-probe — probe execution and outcome classification.
//!
//! A probe is one GET against a check's URL with a bounded total
//! timeout. Every probe produces a `RawResult` (transport failures are
//! values, never errors), which `classify` turns into an `Outcome`
//! against the check's expectations.
//!
//! # Architecture
//!
//! ```text
//! Prober (trait)
//!   └── HttpProber — one shared reqwest client for every probe
//! RawResult ── classify(check, raw) ──► Outcome ──► gauge value 0/1
//! ```
//!
//! The `Prober` trait is the seam the scheduler is driven through;
//! tests substitute a stub that counts or delays invocations.

pub mod classify;
pub mod prober;

pub use classify::{Outcome, classify};
pub use prober::{HttpProber, Prober, RawResult};
