//! # motion_plot
//!
//! A small library for generating illustrative motor motion plots in Rust.
//!
//! This library provides the following modules:
//! - `step_sequence` for building repeated discrete position sequences per motor.
//! - `sinusoid` for evaluating phase-shifted sine waves over a shared time axis.
//! - `time_axis` for building evenly spaced sample axes.
//!
//! The plotting itself lives in the demo targets (`demos/`), which feed the
//! values computed here into gnuplot.

pub mod step_sequence;
pub mod sinusoid;
pub mod time_axis;

// Re-export main items for convenience:
pub use step_sequence::*;
pub use sinusoid::*;
pub use time_axis::*;
