use std::fmt::Write;

use dakota_core::errors::DakotaError;
use serde::{Deserialize, Serialize};

use crate::format::{integer_list, real_list};
use crate::method::Method;
use crate::settings::Settings;

/// Steps out from a center point along each variable axis in turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CenteredParameterStudy {
    /// Center of the study.
    pub initial_point: Vec<f64>,
    /// Step size per variable.
    pub step_vector: Vec<f64>,
    /// Steps taken in each direction per variable.
    pub steps_per_variable: Vec<u32>,
    /// Shared settings.
    #[serde(flatten)]
    pub settings: Settings,
}

impl CenteredParameterStudy {
    /// Registry name and Dakota keyword.
    pub const NAME: &'static str = "centered_parameter_study";
}

impl Default for CenteredParameterStudy {
    fn default() -> Self {
        Self {
            initial_point: vec![0.0, 0.0],
            step_vector: vec![0.1, 0.1],
            steps_per_variable: vec![2, 2],
            settings: Settings::default(),
        }
    }
}

impl Method for CenteredParameterStudy {
    descriptor_plumbing!();

    fn method_block(&self) -> String {
        let mut s = String::from("method\n");
        let _ = writeln!(s, "  {}", Self::NAME);
        let _ = writeln!(s, "    step_vector = {}", real_list(&self.step_vector));
        let _ = writeln!(
            s,
            "    steps_per_variable = {}",
            integer_list(&self.steps_per_variable)
        );
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
            .expect_dimension(Self::NAME, "step_vector", &self.step_vector)?;
        self.settings
            .expect_finite(Self::NAME, "initial_point", &self.initial_point)?;
        self.settings
            .expect_finite(Self::NAME, "step_vector", &self.step_vector)?;
        self.settings
            .expect_dimension(Self::NAME, "steps_per_variable", &self.steps_per_variable)
    }
}
