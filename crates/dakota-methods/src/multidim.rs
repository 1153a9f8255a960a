use std::fmt::Write;

use dakota_core::errors::DakotaError;
use serde::{Deserialize, Serialize};

use crate::format::integer_list;
use crate::method::Method;
use crate::settings::Settings;

/// Full factorial grid over bounded variables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MultidimParameterStudy {
    /// Lower bound per variable.
    pub lower_bounds: Vec<f64>,
    /// Upper bound per variable.
    pub upper_bounds: Vec<f64>,
    /// Number of intervals each variable range is split into.
    pub partitions: Vec<u32>,
    /// Shared settings.
    #[serde(flatten)]
    pub settings: Settings,
}

impl MultidimParameterStudy {
    /// Registry name and Dakota keyword.
    pub const NAME: &'static str = "multidim_parameter_study";
}

impl Default for MultidimParameterStudy {
    fn default() -> Self {
        Self {
            lower_bounds: vec![-2.0, -2.0],
            upper_bounds: vec![2.0, 2.0],
            partitions: vec![10, 8],
            settings: Settings::default(),
        }
    }
}

impl Method for MultidimParameterStudy {
    descriptor_plumbing!();

    fn method_block(&self) -> String {
        let mut s = String::from("method\n");
        let _ = writeln!(s, "  {}", Self::NAME);
        let _ = writeln!(s, "    partitions = {}", integer_list(&self.partitions));
        s.push('\n');
        s
    }

    fn variables_block(&self) -> String {
        self.settings
            .bounded_variables("continuous_design", &self.lower_bounds, &self.upper_bounds)
    }

    fn validate(&self) -> Result<(), DakotaError> {
        self.settings.validate(Self::NAME)?;
        self.settings
            .validate_bounds(Self::NAME, &self.lower_bounds, &self.upper_bounds)?;
        self.settings
            .expect_dimension(Self::NAME, "partitions", &self.partitions)
    }
}
