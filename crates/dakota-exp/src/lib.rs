//! Experiment facade over the external Dakota toolkit.
//!
//! An [`Experiment`] owns one method descriptor, renders it into a Dakota
//! input file, persists it as YAML and launches the `dakota` binary.

mod experiment;
mod hash;
mod runner;
mod serde;

pub use experiment::{Experiment, DEFAULT_EXECUTABLE, DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE};
pub use hash::sha256_hex;
pub use runner::run_dakota;

pub use crate::serde::{
    mapping_from_yaml_reader, mapping_from_yaml_str, to_canonical_json_bytes, to_yaml_string,
};
