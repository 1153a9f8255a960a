use std::fmt::Write;

use dakota_core::errors::DakotaError;
use serde::{Deserialize, Serialize};

use crate::format::real_list;
use crate::method::Method;
use crate::settings::{shape_error, Settings};

/// Steps from the initial point toward a final point in equal increments.
///
/// The defaults reproduce Dakota's Rosenbrock vector study example.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VectorParameterStudy {
    /// Starting point of the study, one value per variable.
    pub initial_point: Vec<f64>,
    /// End point of the study, one value per variable.
    pub final_point: Vec<f64>,
    /// Number of steps between the initial and final points.
    pub n_steps: u32,
    /// Shared settings.
    #[serde(flatten)]
    pub settings: Settings,
}

impl VectorParameterStudy {
    /// Registry name and Dakota keyword.
    pub const NAME: &'static str = "vector_parameter_study";
}

impl Default for VectorParameterStudy {
    fn default() -> Self {
        Self {
            initial_point: vec![-0.3, 0.2],
            final_point: vec![1.1, 1.3],
            n_steps: 10,
            settings: Settings::default(),
        }
    }
}

impl Method for VectorParameterStudy {
    descriptor_plumbing!();

    fn method_block(&self) -> String {
        let mut s = String::from("method\n");
        let _ = writeln!(s, "  {}", Self::NAME);
        let _ = writeln!(s, "    final_point = {}", real_list(&self.final_point));
        let _ = writeln!(s, "    num_steps = {}", self.n_steps);
        s.push('\n');
        s
    }

    fn variables_block(&self) -> String {
        self.settings.design_variables(&self.initial_point)
    }

    fn validate(&self) -> Result<(), DakotaError> {
        self.settings.validate(Self::NAME)?;
        self.settings
            .expect_dimension(Self::NAME, "initial_point", &self.initial_point)?;
        self.settings
            .expect_dimension(Self::NAME, "final_point", &self.final_point)?;
        self.settings
            .expect_finite(Self::NAME, "initial_point", &self.initial_point)?;
        self.settings
            .expect_finite(Self::NAME, "final_point", &self.final_point)?;
        if self.n_steps == 0 {
            return Err(shape_error(
                Self::NAME,
                "n_steps",
                "a vector study needs at least one step",
            ));
        }
        Ok(())
    }
}
