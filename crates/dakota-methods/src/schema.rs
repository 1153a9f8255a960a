//! Keyword construction and export for typed descriptors.
//!
//! The recognized keys of a variant are the keys of its serialized default
//! instance, so construction and export share one schema.

use dakota_core::errors::{DakotaError, ErrorInfo};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_yaml::{Mapping, Value};

use crate::method::Method;

/// Serializes a descriptor into a flat field mapping.
pub fn to_mapping<T: Serialize>(value: &T) -> Result<Mapping, DakotaError> {
    match serde_yaml::to_value(value) {
        Ok(Value::Mapping(mapping)) => Ok(mapping),
        Ok(other) => Err(DakotaError::Config(
            ErrorInfo::new(
                "dakota_methods.export_shape",
                "descriptor did not serialize to a mapping",
            )
            .with_context("kind", value_kind(&other)),
        )),
        Err(err) => Err(DakotaError::Config(ErrorInfo::new(
            "dakota_methods.export",
            err.to_string(),
        ))),
    }
}

/// Builds a descriptor from keyword arguments, starting from its defaults.
///
/// Keys outside the variant's schema are rejected, as are values of the
/// wrong type. The result is validated before it is returned.
pub fn from_kwargs<T>(kwargs: Mapping) -> Result<T, DakotaError>
where
    T: Method + Default + Serialize + DeserializeOwned,
{
    let template = T::default();
    let known = to_mapping(&template)?;
    for key in kwargs.keys() {
        if !known.contains_key(key) {
            let recognized: Vec<&str> = known.keys().filter_map(Value::as_str).collect();
            return Err(DakotaError::Field(
                ErrorInfo::new(
                    "dakota_methods.unknown_field",
                    "unrecognized parameter for method",
                )
                .with_context("method", template.name())
                .with_context("field", key_label(key))
                .with_hint(format!("recognized fields: {}", recognized.join(", "))),
            ));
        }
    }
    let method: T = serde_yaml::from_value(Value::Mapping(kwargs)).map_err(|err| {
        DakotaError::Field(
            ErrorInfo::new("dakota_methods.invalid_field", "invalid parameter value")
                .with_context("method", template.name())
                .with_hint(err.to_string()),
        )
    })?;
    method.validate()?;
    Ok(method)
}

fn key_label(key: &Value) -> String {
    match key {
        Value::String(name) => name.clone(),
        other => format!("{other:?}"),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged",
    }
}
