//! Melody genome
//!
//! This module provides the built-in melody domain: a fixed-length sequence of
//! notes, each pairing a MIDI pitch with a duration symbol.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::genome::traits::{GeneSource, SequenceGenome};

/// Highest valid MIDI pitch
pub const MAX_PITCH: u8 = 127;

/// Duration of a note, as the usual staff notation letters
/// (whole, half, quarter, eighth, sixteenth).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoteLength {
    Whole,
    Half,
    Quarter,
    Eighth,
    Sixteenth,
}

impl NoteLength {
    /// All duration symbols, in descending length order
    pub const ALL: [NoteLength; 5] = [
        NoteLength::Whole,
        NoteLength::Half,
        NoteLength::Quarter,
        NoteLength::Eighth,
        NoteLength::Sixteenth,
    ];

    /// The single-letter symbol used in notation strings
    pub fn symbol(self) -> char {
        match self {
            NoteLength::Whole => 'w',
            NoteLength::Half => 'h',
            NoteLength::Quarter => 'q',
            NoteLength::Eighth => 'i',
            NoteLength::Sixteenth => 's',
        }
    }

    /// Parse a duration from its single-letter symbol
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'w' => Some(NoteLength::Whole),
            'h' => Some(NoteLength::Half),
            'q' => Some(NoteLength::Quarter),
            'i' => Some(NoteLength::Eighth),
            's' => Some(NoteLength::Sixteenth),
            _ => None,
        }
    }
}

/// A single note: a MIDI pitch in `[0, 127]` paired with a duration.
///
/// Notes are immutable value types; equality is structural.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Note {
    /// MIDI pitch value (0-127)
    pub pitch: u8,
    /// Duration symbol
    pub length: NoteLength,
}

impl Note {
    /// Create a new note
    ///
    /// # Panics
    /// Panics if `pitch` exceeds [`MAX_PITCH`]
    pub fn new(pitch: u8, length: NoteLength) -> Self {
        assert!(pitch <= MAX_PITCH, "MIDI pitch must be in [0, 127]");
        Self { pitch, length }
    }
}

impl std::fmt::Display for Note {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.pitch, self.length.symbol())
    }
}

/// Fixed-length melody genome
///
/// An ordered sequence of [`Note`]s. The length is fixed at construction and
/// matches the target melody for the whole run; a length mismatch is a
/// programming error, not a recoverable condition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Melody {
    notes: Vec<Note>,
}

impl Melody {
    /// Create a melody from a vector of notes
    pub fn new(notes: Vec<Note>) -> Self {
        Self { notes }
    }

    /// Get the notes of this melody
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Number of notes
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Check whether the melody has no notes
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

impl SequenceGenome for Melody {
    type Allele = Note;

    fn genes(&self) -> &[Note] {
        &self.notes
    }

    fn genes_mut(&mut self) -> &mut [Note] {
        &mut self.notes
    }

    fn from_genes(genes: Vec<Note>) -> Self {
        Self { notes: genes }
    }
}

impl std::ops::Index<usize> for Melody {
    type Output = Note;

    fn index(&self, index: usize) -> &Self::Output {
        &self.notes[index]
    }
}

impl From<Vec<Note>> for Melody {
    fn from(notes: Vec<Note>) -> Self {
        Self { notes }
    }
}

impl std::fmt::Display for Melody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, note) in self.notes.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", note)?;
        }
        Ok(())
    }
}

/// Random note generator for the melody domain
///
/// Draws a pitch uniformly from the full MIDI range and a duration uniformly
/// from the five symbols.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoteSource;

impl GeneSource<Melody> for NoteSource {
    fn random_gene<R: Rng>(&self, rng: &mut R) -> Note {
        let pitch = rng.gen_range(0..=MAX_PITCH);
        let length = NoteLength::ALL[rng.gen_range(0..NoteLength::ALL.len())];
        Note::new(pitch, length)
    }
}
