//! Command-line facing flow, kept apart from argument parsing in `main.rs`

pub mod orchestration;
