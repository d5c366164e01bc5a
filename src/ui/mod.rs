//! Operator-facing output

pub mod display;
