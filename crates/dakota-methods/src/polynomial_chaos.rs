use std::fmt::Write;

use dakota_core::errors::DakotaError;
use serde::{Deserialize, Serialize};

use crate::format::real_list;
use crate::method::Method;
use crate::sampling::SampleType;
use crate::settings::{shape_error, Settings};

/// Polynomial chaos expansion over uniform uncertain variables, with
/// coefficients computed by tensor-product quadrature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolynomialChaos {
    /// Quadrature order per dimension.
    pub quadrature_order: u32,
    /// Scheme used to sample the expansion.
    pub sample_type: SampleType,
    /// Samples evaluated on the expansion.
    pub samples_on_emulator: u32,
    /// Random seed; Dakota picks one when absent.
    pub seed: Option<u64>,
    /// Probability levels mapped back to response levels.
    pub probability_levels: Vec<f64>,
    /// Response levels mapped to probabilities.
    pub response_levels: Vec<f64>,
    /// Whether to compute Sobol sensitivity indices.
    pub variance_based_decomp: bool,
    /// Lower bound per variable.
    pub lower_bounds: Vec<f64>,
    /// Upper bound per variable.
    pub upper_bounds: Vec<f64>,
    /// Shared settings.
    #[serde(flatten)]
    pub settings: Settings,
}

impl PolynomialChaos {
    /// Registry name and Dakota keyword.
    pub const NAME: &'static str = "polynomial_chaos";
}

impl Default for PolynomialChaos {
    fn default() -> Self {
        Self {
            quadrature_order: 2,
            sample_type: SampleType::Random,
            samples_on_emulator: 10000,
            seed: Some(17),
            probability_levels: Vec::new(),
            response_levels: Vec::new(),
            variance_based_decomp: true,
            lower_bounds: vec![-2.0, -2.0],
            upper_bounds: vec![2.0, 2.0],
            settings: Settings::default(),
        }
    }
}

impl Method for PolynomialChaos {
    descriptor_plumbing!();

    fn method_block(&self) -> String {
        let mut s = String::from("method\n");
        let _ = writeln!(s, "  {}", Self::NAME);
        let _ = writeln!(s, "    quadrature_order = {}", self.quadrature_order);
        let _ = writeln!(s, "    sample_type {}", self.sample_type.keyword());
        let _ = writeln!(s, "    samples_on_emulator = {}", self.samples_on_emulator);
        if let Some(seed) = self.seed {
            let _ = writeln!(s, "    seed = {seed}");
        }
        if !self.probability_levels.is_empty() {
            let _ = writeln!(
                s,
                "    probability_levels = {}",
                real_list(&self.probability_levels)
            );
        }
        if !self.response_levels.is_empty() {
            let _ = writeln!(
                s,
                "    response_levels = {}",
                real_list(&self.response_levels)
            );
        }
        if self.variance_based_decomp {
            s.push_str("    variance_based_decomp\n");
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
            .expect_finite(Self::NAME, "probability_levels", &self.probability_levels)?;
        self.settings
            .expect_finite(Self::NAME, "response_levels", &self.response_levels)?;
        if self.quadrature_order == 0 {
            return Err(shape_error(
                Self::NAME,
                "quadrature_order",
                "quadrature order must be positive",
            ));
        }
        if self
            .probability_levels
            .iter()
            .any(|level| !(0.0..=1.0).contains(level))
        {
            return Err(shape_error(
                Self::NAME,
                "probability_levels",
                "probability levels must lie in [0, 1]",
            ));
        }
        Ok(())
    }
}
