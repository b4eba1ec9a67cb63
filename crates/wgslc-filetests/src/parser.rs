//! Test file parsing

/// A test case extracted from a test file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    /// The fixture the case runs against
    pub fixture: String,
    /// The expectations (from comments), with the `;` prefix stripped
    pub expected_text: String,
    /// The test command type
    pub command: String,
}

/// Parse a test file and extract fixture sections with their expectations
pub fn parse_test_file(content: &str) -> Vec<TestCase> {
    let lines: Vec<&str> = content.lines().collect();
    let mut test_cases = Vec::new();
    let mut i = 0;

    // Parse test command from header
    let mut command = String::new();
    while i < lines.len() {
        let line = lines[i].trim();
        i += 1;
        if line.starts_with("test ") {
            command = String::from(line);
            break;
        }
    }

    while i < lines.len() {
        let line = lines[i].trim();
        let Some(fixture) = line.strip_prefix("fixture ") else {
            i += 1;
            continue;
        };
        i += 1;

        // Expectations run until the next fixture; blank lines are allowed
        // between comment lines.
        let mut expected = Vec::new();
        while i < lines.len() {
            let trimmed = lines[i].trim();
            if trimmed.starts_with("fixture ") {
                break;
            }
            if let Some(comment) = trimmed.strip_prefix(';') {
                expected.push(comment.strip_prefix(' ').unwrap_or(comment));
            }
            i += 1;
        }

        test_cases.push(TestCase {
            fixture: String::from(fixture.trim()),
            expected_text: expected.join("\n"),
            command: command.clone(),
        });
    }

    test_cases
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sections() {
        let content = "\
test emit

fixture first
; check: struct A {
; nextln: };

fixture second
; entry vertex vs

; check: vs
";
        let cases = parse_test_file(content);
        assert_eq!(cases.len(), 2);
        assert_eq!(cases[0].command, "test emit");
        assert_eq!(cases[0].fixture, "first");
        assert_eq!(cases[0].expected_text, "check: struct A {\nnextln: };");
        assert_eq!(cases[1].fixture, "second");
        assert_eq!(cases[1].expected_text, "entry vertex vs\ncheck: vs");
    }

    #[test]
    fn test_no_command() {
        assert!(parse_test_file("; nothing here\n").is_empty());
    }
}
