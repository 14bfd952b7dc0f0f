// ==============================================================================
// Typo Confirmation Prompt
// ==============================================================================
//
// When the classifier flags a suspected typo, the user gets one question: a
// numbered menu of the near-matching trusted names, the name they actually
// typed, and an abort option. One selection, no retry loop. The prompt is
// generic over its input/output streams so tests can drive it without a
// terminal.

use std::io::{BufRead, Write};

use crate::error::{Result, SafeinstallError};

/// Present the suspected-typo menu and block for a single selection.
///
/// Options are numbered starting at 1: first the near-match `candidates` in
/// the order the classifier reported them, then `suspect` (the name as
/// originally typed) as the final numbered option. Entering `n` (or `N`)
/// aborts.
///
/// Returns `Ok(Some(name))` for a valid numeric selection, `Ok(None)` for an
/// abort, and [`SafeinstallError::InvalidSelection`] for anything else. An
/// invalid selection is an error rather than a re-prompt: this tool sits in
/// front of an installer, and guessing at garbled input would defeat its
/// point.
pub fn select_package<R, W>(
    suspect: &str,
    candidates: &[String],
    input: R,
    mut output: W,
) -> Result<Option<String>>
where
    R: BufRead,
    W: Write,
{
    writeln!(
        output,
        "'{suspect}' looks like a typo of a trusted package. Did you mean one of these?"
    )?;
    for (i, candidate) in candidates.iter().enumerate() {
        writeln!(output, "  {}. {candidate}", i + 1)?;
    }
    writeln!(output, "  {}. {suspect} (install as typed)", candidates.len() + 1)?;
    write!(output, "Pick a number, or 'n' to abort: ")?;
    output.flush()?;

    let mut answer = String::new();
    input.take(1024).read_line(&mut answer)?;
    let answer = answer.trim();

    if answer.eq_ignore_ascii_case("n") {
        return Ok(None);
    }

    let choice: usize = answer
        .parse()
        .map_err(|_| SafeinstallError::InvalidSelection(answer.to_string()))?;

    if choice == 0 || choice > candidates.len() + 1 {
        return Err(SafeinstallError::InvalidSelection(answer.to_string()));
    }

    // The last numbered option is the suspect name itself.
    if choice == candidates.len() + 1 {
        Ok(Some(suspect.to_string()))
    } else {
        Ok(Some(candidates[choice - 1].clone()))
    }
}
