use dakota_core::errors::{DakotaError, ErrorInfo, EXIT_CODE_KEY, OUTPUT_KEY};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("path", "dakota.in")
        .with_context("reason", "example")
}

#[test]
fn method_error_surface() {
    let err = DakotaError::Method(sample_info("M001", "unknown method"));
    assert_eq!(err.info().code, "M001");
    assert!(err.info().context.contains_key("path"));
    assert_eq!(err.exit_code(), None);
}

#[test]
fn field_error_surface() {
    let err = DakotaError::Field(sample_info("F001", "unknown field"));
    assert_eq!(err.info().code, "F001");
    assert!(err.info().context.contains_key("reason"));
}

#[test]
fn config_error_surface() {
    let err = DakotaError::Config(sample_info("C001", "not a mapping"));
    assert_eq!(err.info().code, "C001");
    assert_eq!(err.output(), None);
}

#[test]
fn process_error_exposes_exit_code_and_output() {
    let err = DakotaError::Process(
        ErrorInfo::new("P001", "dakota exited abnormally")
            .with_context(EXIT_CODE_KEY, "3")
            .with_context(OUTPUT_KEY, "Error: missing input file"),
    );
    assert_eq!(err.exit_code(), Some(3));
    assert_eq!(err.output(), Some("Error: missing input file"));
}

#[test]
fn display_includes_context_and_hint() {
    let err = DakotaError::Io(
        ErrorInfo::new("I001", "failed to write")
            .with_context("path", "out/dakota.in")
            .with_hint("check permissions"),
    );
    let rendered = err.to_string();
    assert_eq!(
        rendered,
        "io error: failed to write (code: I001) | context: [path=out/dakota.in] | hint: check permissions"
    );
}

#[test]
fn errors_round_trip_through_json() {
    let err = DakotaError::Field(sample_info("F002", "shape mismatch").with_hint("resize"));
    let json = serde_json::to_string(&err).expect("serialize");
    let decoded: DakotaError = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, err);
}
