use std::io::{self, Write};

use wordfreq_core::{Effect, RankedEntry};

use crate::SessionText;

/// Writes one effect to `out`. Prompts are flushed so they show before the
/// next blocking read.
pub fn render_effect<W: Write>(
    out: &mut W,
    text: &SessionText,
    effect: &Effect,
) -> io::Result<()> {
    match effect {
        Effect::Banner => {
            writeln!(out, "{}", text.title)?;
            writeln!(out, "{}", text.separator)?;
            writeln!(out, "{}", text.instructions)?;
            writeln!(out)
        }
        Effect::Prompt => {
            write!(out, "{}", text.prompt)?;
            out.flush()
        }
        Effect::EmptyInputNotice => writeln!(out, "{}", text.empty_input),
        Effect::Report(entries) => render_report(out, text, entries),
    }
}

/// Header, separator, then `<rank>. <token>: <count><suffix>` per entry.
pub fn render_report<W: Write>(
    out: &mut W,
    text: &SessionText,
    entries: &[RankedEntry],
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", text.report_header)?;
    writeln!(out, "{}", text.separator)?;

    if entries.is_empty() {
        writeln!(out, "{}", text.no_words)?;
    } else {
        for entry in entries {
            writeln!(
                out,
                "{}. {}: {}{}",
                entry.rank, entry.token, entry.count, text.count_suffix
            )?;
        }
    }

    writeln!(out)
}
