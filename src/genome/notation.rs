//! Melody notation parsing
//!
//! Converts space-separated English note notation into [`Melody`] values.
//! A token is a note letter (`C`-`B`), optionally followed in any order by a
//! `#`/`b` modifier, an octave digit `0`-`8` (default 5), and a duration
//! letter `w`/`h`/`q`/`i`/`s` (default quarter): `"E"`, `"Dh"`, `"C#5q"`.

use crate::error::{EvoResult, EvolutionError};
use crate::genome::melody::{Melody, Note, NoteLength, MAX_PITCH};

const DEFAULT_OCTAVE: i16 = 5;

fn notation_error(token: &str, reason: &str) -> EvolutionError {
    EvolutionError::Notation {
        token: token.to_string(),
        reason: reason.to_string(),
    }
}

/// Parse a single note token
pub fn parse_note(token: &str) -> EvoResult<Note> {
    let mut chars = token.chars();
    let letter = chars
        .next()
        .ok_or_else(|| notation_error(token, "empty token"))?;

    let mut semitone: i16 = match letter {
        'C' => 0,
        'D' => 2,
        'E' => 4,
        'F' => 5,
        'G' => 7,
        'A' => 9,
        'B' => 11,
        _ => return Err(notation_error(token, "unknown note letter")),
    };

    let mut octave = DEFAULT_OCTAVE;
    let mut length = NoteLength::Quarter;

    for c in chars {
        match c {
            '0'..='8' => octave = (c as u8 - b'0') as i16,
            '#' => semitone += 1,
            'b' => semitone -= 1,
            other => {
                length = NoteLength::from_symbol(other)
                    .ok_or_else(|| notation_error(token, "unknown symbol"))?;
            }
        }
    }

    let pitch = octave * 12 + semitone;
    if pitch < 0 || pitch > MAX_PITCH as i16 {
        return Err(notation_error(token, "pitch outside the MIDI range"));
    }

    Ok(Note::new(pitch as u8, length))
}

/// Parse a space-separated sequence of note tokens into a melody
pub fn parse_melody(input: &str) -> EvoResult<Melody> {
    let notes = input
        .split_whitespace()
        .map(parse_note)
        .collect::<EvoResult<Vec<Note>>>()?;
    Ok(Melody::new(notes))
}
