use colored::Colorize;
use larder::error::{LarderError, Result};
use larder::lifecycle::Prompt;
use std::io::{self, BufRead, Write};

/// Shows a lifecycle prompt. Notices are printed and accepted; a
/// confirmation needs `Y` on the input unless `assume_yes` is set.
pub(super) fn answer<R: BufRead, W: Write>(
    prompt: &Prompt,
    assume_yes: bool,
    input: &mut R,
    out: &mut W,
) -> Result<bool> {
    writeln!(out, "{}", prompt.title().bold()).map_err(LarderError::Io)?;
    writeln!(out, "{}", prompt.message()).map_err(LarderError::Io)?;

    match prompt {
        Prompt::Notice { .. } => Ok(true),
        Prompt::Confirm { .. } if assume_yes => Ok(true),
        Prompt::Confirm { .. } => {
            write!(out, "[Y] To proceed: ").map_err(LarderError::Io)?;
            out.flush().map_err(LarderError::Io)?;

            let mut line = String::new();
            input.read_line(&mut line).map_err(LarderError::Io)?;
            Ok(line.trim() == "Y")
        }
    }
}

pub(super) fn answer_on_terminal(prompt: &Prompt, assume_yes: bool) -> Result<bool> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();
    answer(prompt, assume_yes, &mut input, &mut out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn confirm() -> Prompt {
        Prompt::Confirm {
            title: "Item has been opened!".into(),
            message: "Proceed?".into(),
        }
    }

    #[test]
    fn only_capital_y_accepts() {
        let mut out = Vec::new();
        assert!(answer(&confirm(), false, &mut Cursor::new("Y\n"), &mut out).unwrap());
        assert!(!answer(&confirm(), false, &mut Cursor::new("y\n"), &mut out).unwrap());
        assert!(!answer(&confirm(), false, &mut Cursor::new(""), &mut out).unwrap());
    }

    #[test]
    fn yes_flag_skips_reading() {
        let mut out = Vec::new();
        assert!(answer(&confirm(), true, &mut Cursor::new(""), &mut out).unwrap());
        let printed = String::from_utf8(out).unwrap();
        assert!(!printed.contains("[Y]"));
    }

    #[test]
    fn notices_never_ask() {
        let notice = Prompt::Notice {
            title: "Item has been frozen!".into(),
            message: "The expiration date has been updated".into(),
        };
        let mut out = Vec::new();
        assert!(answer(&notice, false, &mut Cursor::new(""), &mut out).unwrap());
    }
}
