//! Filesystem primitives for the Java conventions resolver
//!
//! Provides the well-known convention paths, locked atomic writes and
//! content checksums used when materializing generated files.

pub mod checksum;
pub mod constants;
pub mod error;
pub mod io;

pub use checksum::{compute_bytes_checksum, compute_file_checksum};
pub use constants::ConventionPath;
pub use error::{Error, Result};
