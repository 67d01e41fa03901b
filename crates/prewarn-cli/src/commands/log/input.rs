use std::io::{BufRead, Write};

use anyhow::Context;
use prewarn_core::HabitCategory;

use crate::cli::subcommands::parse_finite;

/// Read a value (and a note, unless one was given) for `category`.
///
/// The category's placeholder is the value prompt. Invalid values are
/// re-asked until a finite number is entered or input ends.
pub fn read_entry<R, W>(
    category: HabitCategory,
    note: Option<&str>,
    input: &mut R,
    prompt: &mut W,
) -> anyhow::Result<(f64, String)>
where
    R: BufRead,
    W: Write,
{
    let meta = category.meta();
    let value = loop {
        write!(prompt, "{} {} ({}): ", meta.icon, meta.placeholder, meta.unit)?;
        prompt.flush()?;
        let line = read_line(input)?.with_context(|| format!("no value entered for {category}"))?;
        match parse_finite(&line) {
            Ok(value) => break value,
            Err(reason) => writeln!(prompt, "{reason}")?,
        }
    };

    let note = if let Some(note) = note {
        note.to_string()
    } else {
        write!(prompt, "Note (optional): ")?;
        prompt.flush()?;
        read_line(input)?.unwrap_or_default()
    };

    Ok((value, note.trim().to_string()))
}

/// One line without its terminator, or `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> anyhow::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
