//! A monophonic sequence of absolute notes

use serde::{Deserialize, Serialize};

use crate::error::{CMajorError, Result};
use crate::pitch::name_and_octave;
use crate::scale::PitchClassSet;
use crate::transposition::{apply_transposition, describe_transposition, TranspositionResult};

/// Ordered notes, each a semitone offset from the reference C
///
/// Order and duplicates are kept; only the distinct pitch classes matter for
/// transposition. Not synchronized: callers sharing one instance across
/// threads must serialize `set_notes` against readers themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SheetMusic {
    notes: Vec<i32>,
}

impl SheetMusic {
    pub fn new(notes: Vec<i32>) -> Self {
        Self { notes }
    }

    /// Parse notes from a JSON array of integers
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self::new(parse_notes(json)?))
    }

    pub fn notes_as_int(&self) -> &[i32] {
        &self.notes
    }

    /// Display names, `<name>` in the reference octave and `<name>(<octave>)` elsewhere
    pub fn notes_as_str(&self) -> Vec<String> {
        self.notes.iter().map(|&note| name_and_octave(note).to_string()).collect()
    }

    /// Replace the whole sequence
    pub fn set_notes(&mut self, notes: Vec<i32>) {
        self.notes = notes;
    }

    /// Replace the whole sequence from a JSON array; left untouched on error
    pub fn set_notes_json(&mut self, json: &str) -> Result<()> {
        self.notes = parse_notes(json)?;
        Ok(())
    }

    pub fn pitch_classes(&self) -> PitchClassSet {
        PitchClassSet::from_notes(self.notes.iter().copied())
    }

    pub fn is_transposable_in_c_major(&self) -> bool {
        self.transposition_description().transposable
    }

    pub fn transposition_description(&self) -> TranspositionResult {
        describe_transposition(&self.pitch_classes())
    }

    /// Notes moved into C major, or the original notes (with a logged warning)
    /// when no shift fits
    pub fn transpose_in_c_major(&self) -> Result<Vec<i32>> {
        Ok(apply_transposition(&self.notes)?.into_notes())
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

impl From<Vec<i32>> for SheetMusic {
    fn from(notes: Vec<i32>) -> Self {
        Self::new(notes)
    }
}

fn parse_notes(json: &str) -> Result<Vec<i32>> {
    serde_json::from_str(json).map_err(|e| {
        CMajorError::InvalidArgument(format!("notes must be an array of integers: {e}"))
    })
}
