use std::fmt::Write;
use std::path::PathBuf;

use dakota_core::errors::{DakotaError, ErrorInfo};
use serde::{Deserialize, Serialize};

use crate::format::{quoted, quoted_list, real_list};

/// Default path of the YAML configuration file.
pub const DEFAULT_CONFIGURATION_FILE: &str = "config.yaml";

/// How Dakota reaches the simulation being analysed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InterfaceKind {
    /// Driver linked into the Dakota binary (e.g. `rosenbrock`).
    #[default]
    Direct,
    /// Driver launched as a separate process exchanging parameter/result files.
    Fork,
}

impl InterfaceKind {
    /// Keyword used by the input grammar.
    pub fn keyword(self) -> &'static str {
        match self {
            InterfaceKind::Direct => "direct",
            InterfaceKind::Fork => "fork",
        }
    }
}

/// Settings shared by every method descriptor.
///
/// These drive the environment, interface and responses blocks and name the
/// variables that the method-specific blocks are sized against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Where the YAML configuration file is written.
    pub configuration_file: PathBuf,
    /// Tabular data file Dakota writes evaluations to.
    pub data_file: String,
    /// Identifier of the interface section.
    pub id_interface: String,
    /// Interface kind.
    pub interface: InterfaceKind,
    /// Analysis driver invoked for each evaluation.
    pub analysis_driver: String,
    /// Parameters file handed to a forked driver.
    pub parameters_file: String,
    /// Results file read back from a forked driver.
    pub results_file: String,
    /// One descriptor per variable.
    pub variable_descriptors: Vec<String>,
    /// One descriptor per response function.
    pub response_descriptors: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            configuration_file: PathBuf::from(DEFAULT_CONFIGURATION_FILE),
            data_file: "dakota.dat".to_string(),
            id_interface: "CSDMS".to_string(),
            interface: InterfaceKind::Direct,
            analysis_driver: "rosenbrock".to_string(),
            parameters_file: "params.in".to_string(),
            results_file: "results.out".to_string(),
            variable_descriptors: vec!["x1".to_string(), "x2".to_string()],
            response_descriptors: vec!["y1".to_string()],
        }
    }
}

impl Settings {
    /// Number of variables declared by the descriptors.
    pub fn dimension(&self) -> usize {
        self.variable_descriptors.len()
    }

    pub(crate) fn environment_block(&self) -> String {
        let mut s = String::from("environment\n");
        s.push_str("  tabular_data\n");
        let _ = writeln!(s, "    tabular_data_file = {}", quoted(&self.data_file));
        s.push('\n');
        s
    }

    pub(crate) fn interface_block(&self) -> String {
        let mut s = String::from("interface\n");
        let _ = writeln!(s, "  id_interface = {}", quoted(&self.id_interface));
        let _ = writeln!(s, "  {}", self.interface.keyword());
        let _ = writeln!(s, "    analysis_driver = {}", quoted(&self.analysis_driver));
        if self.interface == InterfaceKind::Fork {
            let _ = writeln!(s, "    parameters_file = {}", quoted(&self.parameters_file));
            let _ = writeln!(s, "    results_file = {}", quoted(&self.results_file));
            s.push_str("    file_save\n");
        }
        s.push('\n');
        s
    }

    pub(crate) fn responses_block(&self) -> String {
        let mut s = String::from("responses\n");
        let _ = writeln!(
            s,
            "  response_functions = {}",
            self.response_descriptors.len()
        );
        let _ = writeln!(
            s,
            "    response_descriptors = {}",
            quoted_list(&self.response_descriptors)
        );
        s.push_str("  no_gradients\n");
        s.push_str("  no_hessians\n");
        s.push('\n');
        s
    }

    /// Checks the settings every variant relies on.
    pub(crate) fn validate(&self, method: &str) -> Result<(), DakotaError> {
        if self.variable_descriptors.is_empty() {
            return Err(shape_error(
                method,
                "variable_descriptors",
                "at least one variable descriptor is required",
            ));
        }
        if self.response_descriptors.is_empty() {
            return Err(shape_error(
                method,
                "response_descriptors",
                "at least one response descriptor is required",
            ));
        }
        if self.analysis_driver.trim().is_empty() {
            return Err(shape_error(
                method,
                "analysis_driver",
                "analysis driver must not be empty",
            ));
        }
        let scalars = [
            ("data_file", &self.data_file),
            ("id_interface", &self.id_interface),
            ("analysis_driver", &self.analysis_driver),
            ("parameters_file", &self.parameters_file),
            ("results_file", &self.results_file),
        ];
        for (field, value) in scalars {
            expect_quotable(method, field, value)?;
        }
        for value in &self.variable_descriptors {
            expect_quotable(method, "variable_descriptors", value)?;
        }
        for value in &self.response_descriptors {
            expect_quotable(method, "response_descriptors", value)?;
        }
        Ok(())
    }

    /// Fails unless `values` holds exactly one entry per variable.
    pub(crate) fn expect_dimension<T>(
        &self,
        method: &str,
        field: &str,
        values: &[T],
    ) -> Result<(), DakotaError> {
        if values.len() == self.dimension() {
            return Ok(());
        }
        Err(DakotaError::Field(
            ErrorInfo::new(
                "dakota_methods.shape_mismatch",
                format!("{field} must have one entry per variable"),
            )
            .with_context("method", method)
            .with_context("field", field)
            .with_context("expected", self.dimension().to_string())
            .with_context("actual", values.len().to_string()),
        ))
    }

    /// Fails when any value is NaN or infinite; the input grammar has no
    /// token for either.
    pub(crate) fn expect_finite(
        &self,
        method: &str,
        field: &str,
        values: &[f64],
    ) -> Result<(), DakotaError> {
        match values.iter().position(|value| !value.is_finite()) {
            None => Ok(()),
            Some(idx) => Err(DakotaError::Field(
                ErrorInfo::new(
                    "dakota_methods.invalid_value",
                    format!("{field} must hold finite numbers"),
                )
                .with_context("method", method)
                .with_context("field", field)
                .with_context("index", idx.to_string())
                .with_context("value", values[idx].to_string()),
            )),
        }
    }

    /// Continuous design variables anchored at `initial_point`.
    pub(crate) fn design_variables(&self, initial_point: &[f64]) -> String {
        let mut s = String::from("variables\n");
        let _ = writeln!(s, "  continuous_design = {}", self.dimension());
        let _ = writeln!(s, "    initial_point = {}", real_list(initial_point));
        let _ = writeln!(
            s,
            "    descriptors = {}",
            quoted_list(&self.variable_descriptors)
        );
        s.push('\n');
        s
    }

    /// Bounded variables, either design or uniform uncertain.
    pub(crate) fn bounded_variables(&self, kind: &str, lower: &[f64], upper: &[f64]) -> String {
        let mut s = String::from("variables\n");
        let _ = writeln!(s, "  {kind} = {}", self.dimension());
        let _ = writeln!(s, "    lower_bounds = {}", real_list(lower));
        let _ = writeln!(s, "    upper_bounds = {}", real_list(upper));
        let _ = writeln!(
            s,
            "    descriptors = {}",
            quoted_list(&self.variable_descriptors)
        );
        s.push('\n');
        s
    }

    /// Dimension and ordering checks for a pair of bound vectors.
    pub(crate) fn validate_bounds(
        &self,
        method: &str,
        lower: &[f64],
        upper: &[f64],
    ) -> Result<(), DakotaError> {
        self.expect_dimension(method, "lower_bounds", lower)?;
        self.expect_dimension(method, "upper_bounds", upper)?;
        self.expect_finite(method, "lower_bounds", lower)?;
        self.expect_finite(method, "upper_bounds", upper)?;
        for (idx, (lo, hi)) in lower.iter().zip(upper).enumerate() {
            if lo > hi {
                return Err(DakotaError::Field(
                    ErrorInfo::new(
                        "dakota_methods.inverted_bounds",
                        "lower bound exceeds upper bound",
                    )
                    .with_context("method", method)
                    .with_context("variable", self.variable_descriptors[idx].clone())
                    .with_context("lower", lo.to_string())
                    .with_context("upper", hi.to_string()),
                ));
            }
        }
        Ok(())
    }
}

pub(crate) fn shape_error(method: &str, field: &str, message: &str) -> DakotaError {
    DakotaError::Field(
        ErrorInfo::new("dakota_methods.invalid_value", message)
            .with_context("method", method)
            .with_context("field", field),
    )
}

// Quoted tokens cannot escape a quote or span lines.
fn expect_quotable(method: &str, field: &str, value: &str) -> Result<(), DakotaError> {
    if value.contains(['\'', '\n', '\r']) {
        return Err(shape_error(
            method,
            field,
            "quoted values must not contain single quotes or line breaks",
        ));
    }
    Ok(())
}
