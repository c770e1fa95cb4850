use anyhow::{Result, bail};
use std::io::{BufRead, Write};

const EMPTY_INPUT_MESSAGE: &str = "Input cannot be empty. Please try again.";

/// Prompts until a non-blank line is entered and returns it trimmed.
pub fn prompt_required<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<String> {
    loop {
        match read_answer(input, output, prompt)? {
            Some(answer) if !answer.is_empty() => return Ok(answer),
            Some(_) => writeln!(output, "{}", EMPTY_INPUT_MESSAGE)?,
            None => bail!("input closed before a value was entered"),
        }
    }
}

/// Prompts once; a blank line or closed input gives an empty string.
pub fn prompt_optional<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<String> {
    Ok(read_answer(input, output, prompt)?.unwrap_or_default())
}

fn read_answer<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_required(stdin: &str) -> (Result<String>, String) {
        let mut input = Cursor::new(stdin.as_bytes().to_vec());
        let mut output = Vec::new();
        let result = prompt_required(&mut input, &mut output, "Title: ");
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_required_returns_trimmed_value_without_reprompt() {
        let (result, output) = run_required("  My Topic  \n");
        assert_eq!(result.unwrap(), "My Topic");
        assert_eq!(output, "Title: ");
    }

    #[test]
    fn test_required_reprompts_on_blank_lines() {
        let (result, output) = run_required("\n   \nRust\n");
        assert_eq!(result.unwrap(), "Rust");
        assert_eq!(output.matches("Title: ").count(), 3);
        assert_eq!(output.matches(EMPTY_INPUT_MESSAGE).count(), 2);
    }

    #[test]
    fn test_required_fails_when_input_closes() {
        let (result, output) = run_required("\n");
        assert!(result.is_err());
        assert_eq!(output.matches(EMPTY_INPUT_MESSAGE).count(), 1);
    }

    #[test]
    fn test_optional_accepts_empty_and_closed_input() {
        let mut output = Vec::new();

        let mut input = Cursor::new(b"\n".to_vec());
        assert_eq!(prompt_optional(&mut input, &mut output, "Details: ").unwrap(), "");

        let mut input = Cursor::new(Vec::new());
        assert_eq!(prompt_optional(&mut input, &mut output, "Details: ").unwrap(), "");
    }

    #[test]
    fn test_optional_returns_details() {
        let mut input = Cursor::new(b"mention borrowing\r\n".to_vec());
        let mut output = Vec::new();
        assert_eq!(
            prompt_optional(&mut input, &mut output, "Details: ").unwrap(),
            "mention borrowing"
        );
    }
}
