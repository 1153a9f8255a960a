use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

use dakota_core::errors::{DakotaError, ErrorInfo};
use dakota_methods::{
    build_method, default_method, export, input_text, Method, VectorParameterStudy, METHOD_KEY,
};
use serde_yaml::{Mapping, Value};
use tracing::{debug, info};

use crate::hash::sha256_hex;
use crate::runner::run_dakota;
use crate::serde::{mapping_from_yaml_reader, mapping_from_yaml_str, to_yaml_string};

/// Default path of the generated Dakota input file.
pub const DEFAULT_INPUT_FILE: &str = "dakota.in";
/// Default path of the Dakota output file.
pub const DEFAULT_OUTPUT_FILE: &str = "dakota.out";
/// Default name of the Dakota binary, resolved through `PATH`.
pub const DEFAULT_EXECUTABLE: &str = "dakota";

fn io_error(code: &str, path: &Path, err: std::io::Error) -> DakotaError {
    DakotaError::Io(
        ErrorInfo::new(code, err.to_string()).with_context("path", path.display().to_string()),
    )
}

/// A Dakota experiment: one method descriptor plus the files it is run with.
///
/// Files are only touched by explicit calls. The caller is expected to call
/// [`Experiment::write_input_file`] before [`Experiment::run`]; running
/// without an input file surfaces as a failure of the external binary.
#[derive(Debug)]
pub struct Experiment {
    /// Path of the generated input file.
    pub input_file: PathBuf,
    /// Path Dakota writes its output to.
    pub output_file: PathBuf,
    /// Dakota binary to launch.
    pub executable: PathBuf,
    method: Box<dyn Method>,
}

impl Default for Experiment {
    fn default() -> Self {
        Self::with_method(default_method())
    }
}

impl Experiment {
    /// Creates an experiment, selecting the method by name when given.
    ///
    /// Without a name the default vector parameter study is used and `kwargs`
    /// are applied to it, under the same strict field checks as a named
    /// method.
    pub fn new(method: Option<&str>, kwargs: Mapping) -> Result<Self, DakotaError> {
        let method = build_method(method.unwrap_or(VectorParameterStudy::NAME), kwargs)?;
        Ok(Self::with_method(method))
    }

    /// Wraps an already constructed descriptor with default file paths.
    pub fn with_method(method: Box<dyn Method>) -> Self {
        Self {
            input_file: PathBuf::from(DEFAULT_INPUT_FILE),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            executable: PathBuf::from(DEFAULT_EXECUTABLE),
            method,
        }
    }

    /// Builds an experiment from a configuration mapping.
    ///
    /// The optional `method` key selects the variant; every other key is a
    /// field of that variant.
    pub fn from_mapping(mut mapping: Mapping) -> Result<Self, DakotaError> {
        let name = match mapping.remove(METHOD_KEY) {
            None => None,
            Some(Value::String(name)) => Some(name),
            Some(other) => {
                return Err(DakotaError::Config(
                    ErrorInfo::new("dakota_exp.method_key", "method must be a string")
                        .with_context("value", format!("{other:?}")),
                ))
            }
        };
        Self::new(name.as_deref(), mapping)
    }

    /// Loads an experiment from a YAML configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DakotaError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|err| io_error("dakota_exp.config_open", path, err))?;
        debug!(path = %path.display(), "loading configuration");
        Self::from_reader(file)
    }

    /// Loads an experiment from an open YAML source.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DakotaError> {
        Self::from_mapping(mapping_from_yaml_reader(reader)?)
    }

    /// Loads an experiment from YAML text.
    pub fn from_yaml_str(text: &str) -> Result<Self, DakotaError> {
        Self::from_mapping(mapping_from_yaml_str(text)?)
    }

    /// Overrides the Dakota binary.
    pub fn with_executable(mut self, executable: impl Into<PathBuf>) -> Self {
        self.executable = executable.into();
        self
    }

    /// The active method descriptor.
    pub fn method(&self) -> &dyn Method {
        self.method.as_ref()
    }

    /// Mutable access to the active method descriptor.
    pub fn method_mut(&mut self) -> &mut dyn Method {
        self.method.as_mut()
    }

    /// The active descriptor when it is a `T`.
    pub fn method_as<T: Method>(&self) -> Option<&T> {
        self.method.downcast_ref::<T>()
    }

    /// The active descriptor mutably when it is a `T`.
    pub fn method_as_mut<T: Method>(&mut self) -> Option<&mut T> {
        self.method.downcast_mut::<T>()
    }

    /// Replaces the active descriptor, returning the previous one.
    pub fn set_method(&mut self, method: Box<dyn Method>) -> Box<dyn Method> {
        std::mem::replace(&mut self.method, method)
    }

    /// Configuration mapping of the active descriptor.
    pub fn configuration(&self) -> Result<Mapping, DakotaError> {
        export(self.method())
    }

    /// Writes the descriptor's settings as YAML.
    ///
    /// `config_file` retargets the descriptor's configuration path before
    /// writing. The descriptor is validated first so that the file always
    /// loads back. Returns the path written.
    pub fn write_configuration_file(
        &mut self,
        config_file: Option<&Path>,
    ) -> Result<PathBuf, DakotaError> {
        if let Some(path) = config_file {
            self.method.settings_mut().configuration_file = path.to_path_buf();
        }
        self.method.validate()?;
        let path = self.method.settings().configuration_file.clone();
        let text = to_yaml_string(&self.configuration()?)?;
        fs::write(&path, text).map_err(|err| io_error("dakota_exp.config_write", &path, err))?;
        info!(path = %path.display(), method = self.method.name(), "wrote configuration file");
        Ok(path)
    }

    /// The text [`Experiment::write_input_file`] writes.
    pub fn input_text(&self) -> String {
        input_text(self.method())
    }

    /// SHA-256 of the input text, hex encoded.
    pub fn input_digest(&self) -> String {
        sha256_hex(&self.input_text())
    }

    /// Writes the Dakota input file, overwriting any existing file.
    ///
    /// `input_file` retargets [`Experiment::input_file`] before writing.
    /// Returns the path written.
    pub fn write_input_file(&mut self, input_file: Option<&Path>) -> Result<PathBuf, DakotaError> {
        if let Some(path) = input_file {
            self.input_file = path.to_path_buf();
        }
        self.method.validate()?;
        let text = self.input_text();
        fs::write(&self.input_file, &text)
            .map_err(|err| io_error("dakota_exp.input_write", &self.input_file, err))?;
        info!(
            path = %self.input_file.display(),
            method = self.method.name(),
            bytes = text.len(),
            "wrote input file"
        );
        Ok(self.input_file.clone())
    }

    /// Runs Dakota against the current input file, blocking until it exits.
    pub fn run(&self) -> Result<(), DakotaError> {
        run_dakota(&self.executable, &self.input_file, &self.output_file)
    }
}
