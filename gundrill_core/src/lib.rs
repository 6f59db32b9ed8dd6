//! # gundrill_core - Gun-Drilling Standard Time Engine
//!
//! `gundrill_core` estimates the standard time for a gun-drilling job: cutting,
//! setup, tool regrinds, inspection and the optional FMJ port. All inputs and
//! outputs are JSON-serializable so hosts (CLI, forms, services) can pass them
//! through unchanged.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: the engine is a pure function of its parameters
//! - **JSON-First**: all records implement Serialize/Deserialize
//! - **Rich Errors**: structured error types, not just strings
//! - **Lenient Input**: raw form text resolves to usable parameters with defaults
//!
//! ## Quick Start
//!
//! ```rust
//! use gundrill_core::calculations::{compute_standard_time, JobParameters};
//!
//! let job = JobParameters::new("25CR", 0.299, 10.0, 0.8).with_fmj_port(true);
//! let breakdown = compute_standard_time(&job).unwrap();
//! assert_eq!(breakdown.total_standard_time, 85.5);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Standard time breakdown
//! - [`resolver`] - Raw form input to job parameters
//! - [`materials`] - Grade groups, drill table and FMJ port plans
//! - [`settings`] - Time constants and engine policies
//! - [`history`] - Archived calculations
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types
//! - [`file_io`] - History and settings files with atomic saves and locking

pub mod calculations;
pub mod errors;
pub mod file_io;
pub mod history;
pub mod materials;
pub mod resolver;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{compute_standard_time, compute_standard_time_with, JobParameters, TimeBreakdown};
pub use errors::{CalcError, CalcResult};
pub use file_io::{append_to_history, load_history, load_or_create_history, load_settings, save_history, FileLock};
pub use history::{CalculationHistory, HistoryEntry};
pub use materials::MaterialGroup;
pub use resolver::{resolve, resolve_or_default, resolve_strict, RawJobInput};
pub use settings::{EngineSettings, TimeConstants};
