use std::io::{self, BufRead, Write};

use wordgen_generate::{ConfirmationGate, Estimate};

/// Asks on the terminal before a large run; `assume_yes` skips the question.
pub struct ConsolePrompt {
    assume_yes: bool,
}

impl ConsolePrompt {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl ConfirmationGate for ConsolePrompt {
    fn confirm(&mut self, estimate: &Estimate) -> bool {
        if self.assume_yes {
            return true;
        }

        let stdin = io::stdin();
        let mut stdout = io::stdout();
        ask(&mut stdin.lock(), &mut stdout, estimate).unwrap_or(false)
    }
}

fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    estimate: &Estimate,
) -> io::Result<bool> {
    writeln!(
        output,
        "Warning: the estimated wordlist size is {:.0} bytes (about {:.1} seconds). Continue?",
        estimate.byte_count, estimate.expected_seconds
    )?;
    write!(output, "Enter 'y' to continue and 'n' to cancel: ")?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn estimate() -> Estimate {
        Estimate {
            byte_count: 2_000_000.0,
            expected_seconds: 2.0,
        }
    }

    #[test]
    fn only_y_proceeds() {
        let cases = [
            ("y\n", true),
            ("Y\n", true),
            ("n\n", false),
            ("\n", false),
            ("yes\n", false),
        ];
        for (answer, expected) in cases {
            let mut output = Vec::new();
            let decision = ask(&mut answer.as_bytes(), &mut output, &estimate()).expect("ask");
            assert_eq!(decision, expected, "answer {answer:?}");
        }
    }

    #[test]
    fn prompt_shows_estimate() {
        let mut output = Vec::new();
        ask(&mut "n\n".as_bytes(), &mut output, &estimate()).expect("ask");
        let text = String::from_utf8(output).expect("utf8");
        assert!(text.contains("2000000 bytes"));
    }

    #[test]
    fn assume_yes_skips_prompt() {
        assert!(ConsolePrompt::new(true).confirm(&estimate()));
    }
}
