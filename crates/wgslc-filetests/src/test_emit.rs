//! The `emit` subtest.
//!
//! Renders a fixture module to Metal and checks the expectations written
//! after its `fixture` line:
//! - `entry <stage> <name>`: the recorded entry point for that stage
//! - `error: <text>`: emission must fail with a message containing `<text>`
//! - anything else is a filecheck directive matched against the output

use wgslc_ast::Stage;
use wgslc_metal::render_metal_functions;

use crate::{
    filecheck::{is_directive, match_filecheck},
    fixtures::fixture,
    parser::{parse_test_file, TestCase},
};

/// Run every case of an `emit` test file, panicking on the first failure.
pub fn run_tests_from_file(content: &str) {
    let test_cases = parse_test_file(content);

    assert!(!test_cases.is_empty(), "No test cases found in test file");

    for case in test_cases {
        assert_eq!(case.command, "test emit", "Unexpected test command: {}", case.command);
        if let Err(e) = run_emit_test(&case) {
            panic!("Emit test `{}` failed: {}", case.fixture, e);
        }
    }
}

fn parse_stage(name: &str) -> Result<Stage, String> {
    match name {
        "vertex" => Ok(Stage::Vertex),
        "fragment" => Ok(Stage::Fragment),
        "compute" => Ok(Stage::Compute),
        _ => Err(format!("unknown stage `{}`", name)),
    }
}

/// Run a single case.
pub fn run_emit_test(case: &TestCase) -> Result<(), String> {
    let module = fixture(&case.fixture).ok_or_else(|| format!("unknown fixture `{}`", case.fixture))?;

    let mut entries = Vec::new();
    let mut expected_error = None;
    let mut directives = Vec::new();
    for line in case.expected_text.lines() {
        let trimmed = line.trim();
        if let Some(rest) = trimmed.strip_prefix("entry ") {
            let mut words = rest.split_whitespace();
            let (Some(stage), Some(name), None) = (words.next(), words.next(), words.next()) else {
                return Err(format!("malformed entry line `{}`", trimmed));
            };
            entries.push((parse_stage(stage)?, name));
        } else if let Some(text) = trimmed.strip_prefix("error:") {
            expected_error = Some(text.trim());
        } else if is_directive(trimmed) {
            directives.push(trimmed);
        } else if !trimmed.is_empty() {
            return Err(format!("unrecognized expectation `{}`", trimmed));
        }
    }

    match (render_metal_functions(&module), expected_error) {
        (Ok((output, entry_points)), None) => {
            for (stage, name) in entries {
                let actual = entry_points.get(stage);
                if actual != name {
                    return Err(format!("{} entry point is `{}`, expected `{}`", stage, actual, name));
                }
            }
            if directives.is_empty() {
                return Ok(());
            }
            match_filecheck(&output, &directives.join("\n"))
                .map_err(|e| format!("{}\n\nActual:\n{}", e, output))
        }
        (Ok((output, _)), Some(text)) => Err(format!(
            "expected an error containing `{}`, got output:\n{}",
            text, output
        )),
        (Err(err), Some(text)) => {
            let message = err.to_string();
            if message.contains(text) {
                Ok(())
            } else {
                Err(format!("error `{}` does not contain `{}`", message, text))
            }
        }
        (Err(err), None) => Err(format!("unexpected error: {}", err)),
    }
}
