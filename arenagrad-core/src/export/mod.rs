//! Diagnostic export of computation graphs.

pub mod dot;

pub use dot::{export_dot, render_png, write_dot};
