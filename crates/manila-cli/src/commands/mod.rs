//! Command implementations for manila-cli

pub mod compile;
pub mod params;

pub use compile::{CompileArgs, run_compile};
pub use params::run_params;
