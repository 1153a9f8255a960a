//! Token rendering for the Dakota input grammar.
//!
//! Dakota's parser is whitespace separated: list values are written on one
//! line separated by single spaces, strings are single quoted.

use std::fmt::Write;

/// Renders a single-quoted string token.
pub fn quoted(value: &str) -> String {
    format!("'{value}'")
}

/// Renders a list of single-quoted string tokens.
pub fn quoted_list<S: AsRef<str>>(values: &[S]) -> String {
    let mut out = String::new();
    for (idx, value) in values.iter().enumerate() {
        if idx > 0 {
            out.push(' ');
        }
        let _ = write!(out, "'{}'", value.as_ref());
    }
    out
}

/// Renders a list of reals using their shortest round-trip representation.
pub fn real_list(values: &[f64]) -> String {
    joined(values)
}

/// Renders a list of integers.
pub fn integer_list<T: std::fmt::Display>(values: &[T]) -> String {
    joined(values)
}

fn joined<T: std::fmt::Display>(values: &[T]) -> String {
    let mut out = String::new();
    for (idx, value) in values.iter().enumerate() {
        if idx > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{value}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reals_use_shortest_form() {
        assert_eq!(real_list(&[-0.3, 0.2]), "-0.3 0.2");
        assert_eq!(real_list(&[0.0, 1.0]), "0 1");
        assert_eq!(real_list(&[]), "");
    }

    #[test]
    fn strings_are_single_quoted() {
        assert_eq!(quoted("rosenbrock"), "'rosenbrock'");
        assert_eq!(quoted_list(&["x1", "x2"]), "'x1' 'x2'");
    }

    #[test]
    fn integers_are_space_separated() {
        assert_eq!(integer_list(&[10u32, 8]), "10 8");
    }
}
