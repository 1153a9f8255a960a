use std::fmt::Write;

use dakota_core::errors::DakotaError;
use serde::{Deserialize, Serialize};

use crate::format::real_list;
use crate::method::Method;
use crate::settings::{shape_error, Settings};

/// Sampling scheme used to draw points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SampleType {
    /// Pure Monte Carlo.
    #[default]
    Random,
    /// Latin hypercube.
    Lhs,
}

impl SampleType {
    /// Keyword used by the input grammar.
    pub fn keyword(self) -> &'static str {
        match self {
            SampleType::Random => "random",
            SampleType::Lhs => "lhs",
        }
    }
}

/// Monte Carlo or Latin hypercube sampling over uniform uncertain variables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sampling {
    /// Sampling scheme.
    pub sample_type: SampleType,
    /// Number of samples drawn.
    pub samples: u32,
    /// Random seed; Dakota picks one when absent.
    pub seed: Option<u64>,
    /// Lower bound per variable.
    pub lower_bounds: Vec<f64>,
    /// Upper bound per variable.
    pub upper_bounds: Vec<f64>,
    /// Response levels at which CDF probabilities are reported.
    pub response_levels: Vec<f64>,
    /// Shared settings.
    #[serde(flatten)]
    pub settings: Settings,
}

impl Sampling {
    /// Registry name and Dakota keyword.
    pub const NAME: &'static str = "sampling";
}

impl Default for Sampling {
    fn default() -> Self {
        Self {
            sample_type: SampleType::Random,
            samples: 10,
            seed: Some(17),
            lower_bounds: vec![-2.0, -2.0],
            upper_bounds: vec![2.0, 2.0],
            response_levels: Vec::new(),
            settings: Settings::default(),
        }
    }
}

impl Method for Sampling {
    descriptor_plumbing!();

    fn method_block(&self) -> String {
        let mut s = String::from("method\n");
        let _ = writeln!(s, "  {}", Self::NAME);
        let _ = writeln!(s, "    sample_type {}", self.sample_type.keyword());
        let _ = writeln!(s, "    samples = {}", self.samples);
        if let Some(seed) = self.seed {
            let _ = writeln!(s, "    seed = {seed}");
        }
        if !self.response_levels.is_empty() {
            let _ = writeln!(
                s,
                "    response_levels = {}",
                real_list(&self.response_levels)
            );
        }
        s.push('\n');
        s
    }

    fn variables_block(&self) -> String {
        self.settings
            .bounded_variables("uniform_uncertain", &self.lower_bounds, &self.upper_bounds)
    }

    fn validate(&self) -> Result<(), DakotaError> {
        self.settings.validate(Self::NAME)?;
        self.settings
            .validate_bounds(Self::NAME, &self.lower_bounds, &self.upper_bounds)?;
        self.settings
            .expect_finite(Self::NAME, "response_levels", &self.response_levels)?;
        if self.samples == 0 {
            return Err(shape_error(
                Self::NAME,
                "samples",
                "sampling needs at least one sample",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_lines_follow_fields() {
        let mut sampling = Sampling {
            sample_type: SampleType::Lhs,
            seed: None,
            ..Sampling::default()
        };
        assert_eq!(
            sampling.method_block(),
            "method\n  sampling\n    sample_type lhs\n    samples = 10\n\n"
        );
        sampling.response_levels = vec![0.5, 1.5];
        assert!(sampling
            .method_block()
            .contains("    response_levels = 0.5 1.5\n"));
    }
}
