//! Continental drift versus apparent polar wander.
//!
//! The rotation mathematics lives in the workspace crates re-exported here;
//! this crate adds figure rendering and CSV read-back so that the binaries
//! (and any other front-end) share one implementation.

pub mod plot;
pub mod track;

pub use apw_config as config;
pub use apw_core as primitives;
pub use apw_drift as drift;
pub use apw_export as export;
pub use apw_sphere as sphere;

/// Returns the version of the library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
