//! Post-exploration reports, written to any [`Write`].

use std::io::Write;

use crate::{ClueIndex, Error, SuspectTable};

/// Lists every collected clue in ascending order.
pub fn write_clues<W: Write>(mut output: W, clues: &ClueIndex) -> Result<(), Error> {
    writeln!(output, "Pistas coletadas:")?;
    if clues.is_empty() {
        writeln!(output, "  (nenhuma)")?;
    }
    for clue in clues {
        writeln!(output, "{}", clue)?;
    }
    Ok(())
}

/// Lists every suspect followed by their clues, most recent first.
pub fn write_associations<W: Write>(mut output: W, table: &SuspectTable) -> Result<(), Error> {
    for suspect in table.iter() {
        writeln!(output, "Suspeito: {}", suspect.name())?;
        for clue in suspect.clues() {
            writeln!(output, "  Pista: {}", clue)?;
        }
    }
    Ok(())
}

/// Names the suspect with the most clues.
pub fn write_most_likely<W: Write>(mut output: W, table: &SuspectTable) -> Result<(), Error> {
    match table.report_most_associated() {
        Some(suspect) => writeln!(
            output,
            "Suspeito mais provável: {} com {} pistas.",
            suspect.name(),
            suspect.clue_count()
        )?,
        None => writeln!(output, "Nenhum suspeito encontrado.")?,
    }
    Ok(())
}
