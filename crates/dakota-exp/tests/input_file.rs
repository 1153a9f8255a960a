use std::fs;

use dakota_core::DakotaError;
use dakota_exp::{sha256_hex, Experiment, DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE};
use dakota_methods::{method_names, CenteredParameterStudy, Method, VectorParameterStudy};
use serde_yaml::Mapping;
use tempfile::tempdir;

#[test]
fn defaults_match_dakota_conventions() {
    let experiment = Experiment::default();
    assert_eq!(experiment.input_file.to_str(), Some(DEFAULT_INPUT_FILE));
    assert_eq!(experiment.output_file.to_str(), Some(DEFAULT_OUTPUT_FILE));
    assert_eq!(experiment.method().name(), "vector_parameter_study");
}

#[test]
fn input_file_is_ordered_block_concatenation() {
    let temp = tempdir().expect("tmp dir");
    for name in method_names() {
        let mut experiment = Experiment::new(Some(name), Mapping::new()).expect("experiment");
        let path = temp.path().join(format!("{name}.in"));
        let written = experiment.write_input_file(Some(&path)).expect("write input");
        assert_eq!(written, path);
        assert_eq!(experiment.input_file, path);

        let method = experiment.method();
        let expected = [
            method.environment_block(),
            method.method_block(),
            method.variables_block(),
            method.interface_block(),
            method.responses_block(),
        ]
        .concat();
        assert_eq!(fs::read_to_string(&path).expect("read input"), expected);
    }
}

#[test]
fn rewriting_overwrites_previous_content() {
    let temp = tempdir().expect("tmp dir");
    let path = temp.path().join("dakota.in");
    fs::write(&path, "stale content that is much longer than nothing\n".repeat(200))
        .expect("seed file");

    let mut experiment = Experiment::default();
    experiment.input_file = path.clone();
    experiment.write_input_file(None).expect("first write");

    experiment
        .method_as_mut::<VectorParameterStudy>()
        .expect("vector study")
        .n_steps = 4;
    experiment.write_input_file(None).expect("second write");

    let text = fs::read_to_string(&path).expect("read input");
    assert_eq!(text, experiment.input_text());
    assert!(text.contains("    num_steps = 4\n"));
    assert!(!text.contains("stale"));
}

#[test]
fn digest_tracks_input_text() {
    let mut experiment = Experiment::default();
    let before = experiment.input_digest();
    assert_eq!(before, sha256_hex(&experiment.input_text()));
    assert_eq!(before.len(), 64);
    experiment.method_mut().settings_mut().data_file = "other.dat".into();
    assert_ne!(experiment.input_digest(), before);
}

#[test]
fn inconsistent_descriptor_is_not_written() {
    let temp = tempdir().expect("tmp dir");
    let path = temp.path().join("bad.in");
    let mut experiment =
        Experiment::new(Some("centered_parameter_study"), Mapping::new()).expect("experiment");
    experiment
        .method_as_mut::<CenteredParameterStudy>()
        .expect("centered")
        .step_vector = vec![0.1];
    let err = experiment.write_input_file(Some(&path)).unwrap_err();
    assert!(matches!(err, DakotaError::Field(ref info) if info.code == "dakota_methods.shape_mismatch"));
    assert!(!path.exists());
}

#[test]
fn replacing_the_method_changes_the_input() {
    let mut experiment = Experiment::default();
    let previous = experiment.set_method(
        dakota_methods::build_method("multidim_parameter_study", Mapping::new()).expect("build"),
    );
    assert_eq!(previous.name(), "vector_parameter_study");
    assert!(experiment
        .input_text()
        .contains("  multidim_parameter_study\n    partitions = 10 8\n"));
}

#[test]
fn unwritable_destination_is_an_io_error() {
    let temp = tempdir().expect("tmp dir");
    let path = temp.path().join("missing-dir").join("dakota.in");
    let err = Experiment::default()
        .write_input_file(Some(&path))
        .unwrap_err();
    assert!(matches!(err, DakotaError::Io(ref info) if info.code == "dakota_exp.input_write"));
}
