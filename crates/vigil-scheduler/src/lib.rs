//! vigil-scheduler — per-check probe scheduling.
//!
//! Runs one independent timer loop per configured check. Each tick
//! spawns the probe pipeline (execute → classify → log → publish)
//! without awaiting it, so a slow probe never delays the next tick or
//! any other check's loop. The `Supervisor` owns every loop handle and
//! the shutdown signal.
//!
//! # Architecture
//!
//! ```text
//! Supervisor
//!   ├── watch::Sender<bool> — shutdown signal shared by all loops
//!   └── one JoinHandle per check
//!         └── run_check_loop
//!               ├── spawn probe pipeline (not awaited)
//!               └── select! { sleep(interval), shutdown }
//! ```
//!
//! # Overlap
//!
//! If a probe takes longer than the check's interval, the next tick
//! still fires and a second probe for the same check may be in flight
//! at the same time. That is deliberate: the interval paces probe
//! starts, not completions. The registry applies last-writer-wins per
//! (name, url) key.

pub mod scheduler;
pub mod supervisor;

pub use scheduler::run_check_loop;
pub use supervisor::Supervisor;
