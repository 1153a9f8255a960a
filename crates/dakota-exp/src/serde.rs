use std::collections::BTreeMap;
use std::io::Read;
use std::iter::FromIterator;

use dakota_core::errors::{DakotaError, ErrorInfo};
use serde::Serialize;
use serde_json::{Map, Value};
use serde_yaml::Mapping;

fn config_error(code: &str, err: impl ToString) -> DakotaError {
    DakotaError::Config(ErrorInfo::new(code, err.to_string()))
}

fn canonicalize(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let ordered = map
                .into_iter()
                .map(|(key, value)| (key, canonicalize(value)))
                .collect::<BTreeMap<_, _>>();
            Value::Object(Map::from_iter(ordered))
        }
        Value::Array(values) => Value::Array(values.into_iter().map(canonicalize).collect()),
        other => other,
    }
}

/// Serializes a value into canonical JSON bytes with deterministic ordering.
pub fn to_canonical_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, DakotaError> {
    let value =
        serde_json::to_value(value).map_err(|err| config_error("dakota_exp.json_serialize", err))?;
    let canonical = canonicalize(value);
    let mut bytes = Vec::new();
    serde_json::to_writer(&mut bytes, &canonical)
        .map_err(|err| config_error("dakota_exp.json_write", err))?;
    Ok(bytes)
}

/// Serializes a value into block-style YAML.
pub fn to_yaml_string<T: Serialize>(value: &T) -> Result<String, DakotaError> {
    serde_yaml::to_string(value).map_err(|err| config_error("dakota_exp.yaml_serialize", err))
}

/// Parses a YAML document that must be a mapping.
pub fn mapping_from_yaml_str(text: &str) -> Result<Mapping, DakotaError> {
    let value: serde_yaml::Value =
        serde_yaml::from_str(text).map_err(|err| config_error("dakota_exp.yaml_parse", err))?;
    into_mapping(value)
}

/// Reads a YAML document that must be a mapping from `reader`.
pub fn mapping_from_yaml_reader<R: Read>(reader: R) -> Result<Mapping, DakotaError> {
    let value: serde_yaml::Value = serde_yaml::from_reader(reader)
        .map_err(|err| config_error("dakota_exp.yaml_parse", err))?;
    into_mapping(value)
}

fn into_mapping(value: serde_yaml::Value) -> Result<Mapping, DakotaError> {
    match value {
        serde_yaml::Value::Mapping(mapping) => Ok(mapping),
        serde_yaml::Value::Null => Ok(Mapping::new()),
        _ => Err(DakotaError::Config(
            ErrorInfo::new(
                "dakota_exp.config_shape",
                "configuration document is not a mapping",
            )
            .with_hint("expected `key: value` pairs such as `method: sampling`"),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_json_sorts_keys() {
        let value = serde_json::json!({"b": 1, "a": {"d": 2, "c": 3}});
        let bytes = to_canonical_json_bytes(&value).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            r#"{"a":{"c":3,"d":2},"b":1}"#
        );
    }

    #[test]
    fn null_document_is_an_empty_mapping() {
        assert!(mapping_from_yaml_str("~\n").unwrap().is_empty());
    }

    #[test]
    fn sequences_are_not_configurations() {
        let err = mapping_from_yaml_str("- 1\n- 2\n").unwrap_err();
        assert_eq!(err.info().code, "dakota_exp.config_shape");
    }
}
