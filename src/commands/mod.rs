//! Command implementations for gl-launcher CLI

pub mod completions;
pub mod create;
pub mod helpers;
pub mod scan;
pub mod version;
