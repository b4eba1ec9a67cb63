//! Filecheck directive matching using the filecheck crate.

use filecheck::{Checker, CheckerBuilder, NO_VARIABLES};

/// Build a filechecker from expected text containing directives.
pub fn build_filechecker(expected_text: &str) -> Result<Checker, String> {
    let mut builder = CheckerBuilder::new();

    for line in expected_text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        builder
            .directive(trimmed)
            .map_err(|e| format!("Failed to parse filecheck directive '{}': {}", trimmed, e))?;
    }

    Ok(builder.finish())
}

/// Match actual output against filecheck directives.
pub fn match_filecheck(actual: &str, expected_text: &str) -> Result<(), String> {
    let checker = build_filechecker(expected_text)?;

    if checker
        .check(actual, NO_VARIABLES)
        .map_err(|e| format!("Filecheck error: {}", e))?
    {
        Ok(())
    } else {
        let (_, explain) = checker
            .explain(actual, NO_VARIABLES)
            .map_err(|e| format!("Failed to get filecheck explanation: {}", e))?;

        Err(format!("Filecheck failed:\n{}", explain))
    }
}

/// Whether `line` is a directive the filecheck crate understands.
pub fn is_directive(line: &str) -> bool {
    const PREFIXES: [&str; 6] = ["check:", "sameln:", "nextln:", "unordered:", "not:", "regex:"];
    let trimmed = line.trim();
    PREFIXES.iter().any(|prefix| trimmed.starts_with(prefix))
}
