//! CLI command implementations.

pub mod common;
pub mod complexity;
pub mod fourier;
pub mod layout;
pub mod phase;
pub mod resources;
pub mod search;
pub mod version;
