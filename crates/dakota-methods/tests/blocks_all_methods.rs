use dakota_methods::{blocks, input_text, methods, Method, VectorParameterStudy};
use serde_yaml::Mapping;

const SECTIONS: [&str; 5] = ["environment", "method", "variables", "interface", "responses"];

#[test]
fn every_registered_method_renders_all_sections() {
    for entry in methods() {
        let method = entry.build(Mapping::new()).expect("defaults are valid");
        assert_eq!(method.name(), entry.name);
        for (block, keyword) in blocks(method.as_ref()).iter().zip(SECTIONS) {
            assert!(!block.is_empty(), "{} {keyword} block empty", entry.name);
            assert!(
                block.starts_with(&format!("{keyword}\n")),
                "{} block does not open with {keyword}: {block:?}",
                entry.name
            );
            assert!(block.ends_with("\n\n"), "{} {keyword} block", entry.name);
        }
        assert!(method.method_block().contains(&format!("  {}\n", entry.name)));
    }
}

#[test]
fn input_text_is_plain_concatenation() {
    for entry in methods() {
        let method = entry.build(Mapping::new()).expect("defaults");
        let expected = format!(
            "{}{}{}{}{}",
            method.environment_block(),
            method.method_block(),
            method.variables_block(),
            method.interface_block(),
            method.responses_block()
        );
        assert_eq!(input_text(method.as_ref()), expected);
    }
}

#[test]
fn vector_study_tokens_span_method_and_variables() {
    let study = VectorParameterStudy {
        initial_point: vec![0.0, 0.0],
        final_point: vec![1.0, 1.0],
        n_steps: 5,
        ..VectorParameterStudy::default()
    };
    let method = study.method_block();
    assert!(method.contains("    final_point = 1 1\n"), "{method}");
    assert!(method.contains("    num_steps = 5\n"), "{method}");
    let variables = study.variables_block();
    assert!(variables.contains("    initial_point = 0 0\n"), "{variables}");
}

#[test]
fn default_input_file_matches_reference() {
    let expected = "\
environment
  tabular_data
    tabular_data_file = 'dakota.dat'

method
  vector_parameter_study
    final_point = 1.1 1.3
    num_steps = 10

variables
  continuous_design = 2
    initial_point = -0.3 0.2
    descriptors = 'x1' 'x2'

interface
  id_interface = 'CSDMS'
  direct
    analysis_driver = 'rosenbrock'

responses
  response_functions = 1
    response_descriptors = 'y1'
  no_gradients
  no_hessians

";
    let study = VectorParameterStudy::default();
    assert_eq!(input_text(&study), expected);
}

#[test]
fn variables_follow_descriptor_count() {
    let mut study = VectorParameterStudy::default();
    study.settings.variable_descriptors = vec!["a".into(), "b".into(), "c".into()];
    study.initial_point = vec![1.0, 2.0, 3.0];
    study.final_point = vec![4.0, 5.0, 6.0];
    study.validate().expect("consistent");
    assert!(study
        .variables_block()
        .contains("  continuous_design = 3\n    initial_point = 1 2 3\n    descriptors = 'a' 'b' 'c'\n"));
}
