use std::any::Any;
use std::fmt;

use dakota_core::errors::DakotaError;
use serde_yaml::{Mapping, Value};

use crate::settings::Settings;

/// Key naming the method variant in an exported configuration mapping.
pub const METHOD_KEY: &str = "method";

/// A Dakota analysis method and the parameters needed to describe it.
///
/// Every block producer is a pure function of the current field values. The
/// rendered text must match the Dakota input grammar exactly, each block
/// ending with one blank line.
pub trait Method: fmt::Debug + Any {
    /// Registry name of the method (also the Dakota method keyword).
    fn name(&self) -> &'static str;

    /// Settings shared by every method.
    fn settings(&self) -> &Settings;

    /// Mutable access to the shared settings.
    fn settings_mut(&mut self) -> &mut Settings;

    /// Global analysis settings.
    fn environment_block(&self) -> String {
        self.settings().environment_block()
    }

    /// Method specific section.
    fn method_block(&self) -> String;

    /// Variable declarations sized to the method's dimensionality.
    fn variables_block(&self) -> String;

    /// Interface naming the analysis driver.
    fn interface_block(&self) -> String {
        self.settings().interface_block()
    }

    /// Response declarations.
    fn responses_block(&self) -> String {
        self.settings().responses_block()
    }

    /// Checks that the fields describe a consistent study.
    fn validate(&self) -> Result<(), DakotaError>;

    /// Exportable fields of the descriptor, without the method key.
    fn fields(&self) -> Result<Mapping, DakotaError>;

    /// Upcast used for typed access to a concrete descriptor.
    fn as_any(&self) -> &dyn Any;

    /// Mutable counterpart of [`Method::as_any`].
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl dyn Method {
    /// Returns the concrete descriptor when it is a `T`.
    pub fn downcast_ref<T: Method>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// Returns the concrete descriptor mutably when it is a `T`.
    pub fn downcast_mut<T: Method>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }
}

/// The five blocks in input-file order.
pub fn blocks(method: &dyn Method) -> [String; 5] {
    [
        method.environment_block(),
        method.method_block(),
        method.variables_block(),
        method.interface_block(),
        method.responses_block(),
    ]
}

/// Full input file text: the blocks concatenated with no extra separators.
pub fn input_text(method: &dyn Method) -> String {
    blocks(method).concat()
}

/// Configuration mapping for a descriptor: the method key first, then every
/// exported field.
pub fn export(method: &dyn Method) -> Result<Mapping, DakotaError> {
    let mut mapping = Mapping::new();
    mapping.insert(
        Value::String(METHOD_KEY.to_string()),
        Value::String(method.name().to_string()),
    );
    for (key, value) in method.fields()? {
        mapping.insert(key, value);
    }
    Ok(mapping)
}
