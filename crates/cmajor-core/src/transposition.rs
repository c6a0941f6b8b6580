//! Search for the smallest shift that moves every pitch class into C major
//!
//! The search works on the set of distinct pitch classes, so the order and
//! repetition of notes never change the answer. Only 12 shifts exist modulo
//! the octave; if none of them fits, no shift does.

use serde::{Deserialize, Serialize};

use crate::error::{CMajorError, Result};
use crate::scale::PitchClassSet;

/// Feasibility of a transposition and the shift that achieves it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranspositionResult {
    pub transposable: bool,
    /// Semitones to add (0-11). Always 0 when not transposable
    pub tones_added: u8,
}

impl TranspositionResult {
    fn accepted(shift: u8) -> Self {
        Self { transposable: true, tones_added: shift }
    }

    fn rejected() -> Self {
        Self { transposable: false, tones_added: 0 }
    }
}

/// Notes produced by applying a transposition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TranspositionOutcome {
    /// Every note moved up by `tones_added`
    Transposed { notes: Vec<i32>, tones_added: u8 },
    /// No shift fits; the original notes with the reason
    Unchanged { notes: Vec<i32>, diagnostic: String },
}

impl TranspositionOutcome {
    pub fn notes(&self) -> &[i32] {
        match self {
            Self::Transposed { notes, .. } | Self::Unchanged { notes, .. } => notes,
        }
    }

    pub fn into_notes(self) -> Vec<i32> {
        match self {
            Self::Transposed { notes, .. } | Self::Unchanged { notes, .. } => notes,
        }
    }

    pub fn is_transposed(&self) -> bool {
        matches!(self, Self::Transposed { .. })
    }

    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            Self::Transposed { .. } => None,
            Self::Unchanged { diagnostic, .. } => Some(diagnostic),
        }
    }
}

/// Shift search against a reference set of pitch classes (C major by default)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranspositionSolver {
    reference: PitchClassSet,
}

impl Default for TranspositionSolver {
    fn default() -> Self {
        Self { reference: PitchClassSet::C_MAJOR }
    }
}

impl TranspositionSolver {
    /// Solver targeting another scale
    pub fn with_reference(reference: PitchClassSet) -> Self {
        Self { reference }
    }

    pub fn reference(&self) -> PitchClassSet {
        self.reference
    }

    /// Smallest non-negative shift placing every pitch class in the reference set
    pub fn describe(&self, pitch_classes: &PitchClassSet) -> TranspositionResult {
        let mut current = *pitch_classes;

        for shift in 0..12u8 {
            if current.is_subset(&self.reference) {
                tracing::debug!(shift, "transposition found");
                return TranspositionResult::accepted(shift);
            }
            tracing::trace!(shift, "shift rejected");
            current = current.shifted(1);
        }

        TranspositionResult::rejected()
    }

    pub fn is_transposable(&self, pitch_classes: &PitchClassSet) -> bool {
        self.describe(pitch_classes).transposable
    }

    /// Shift every note by the smallest fitting amount
    ///
    /// The shift is added to the absolute notes, so each note keeps its
    /// position relative to its original octave. When no shift fits, a warning
    /// is logged and the notes come back unchanged.
    pub fn apply(&self, notes: &[i32]) -> Result<TranspositionOutcome> {
        let pitch_classes = PitchClassSet::from_notes(notes.iter().copied());
        let result = self.describe(&pitch_classes);

        if !result.transposable {
            let names: Vec<&str> = pitch_classes.iter().map(|pc| pc.name()).collect();
            let diagnostic = format!(
                "no shift moves pitch classes [{}] into the reference scale",
                names.join(", ")
            );
            tracing::warn!(
                pitch_classes = ?names,
                "notes cannot be transposed, leaving them unchanged"
            );
            return Ok(TranspositionOutcome::Unchanged { notes: notes.to_vec(), diagnostic });
        }

        let shift = result.tones_added;
        let transposed = notes
            .iter()
            .map(|&note| {
                note.checked_add(i32::from(shift))
                    .ok_or(CMajorError::NoteOutOfRange { note, shift })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(TranspositionOutcome::Transposed { notes: transposed, tones_added: shift })
    }
}

/// C-major shift search, see [`TranspositionSolver::describe`]
pub fn describe_transposition(pitch_classes: &PitchClassSet) -> TranspositionResult {
    TranspositionSolver::default().describe(pitch_classes)
}

pub fn is_transposable(pitch_classes: &PitchClassSet) -> bool {
    describe_transposition(pitch_classes).transposable
}

/// C-major transposition of a note sequence, see [`TranspositionSolver::apply`]
pub fn apply_transposition(notes: &[i32]) -> Result<TranspositionOutcome> {
    TranspositionSolver::default().apply(notes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pitch::PitchClass;

    fn describe_notes(notes: &[i32]) -> TranspositionResult {
        describe_transposition(&PitchClassSet::from_notes(notes.iter().copied()))
    }

    #[test]
    fn test_describe_transposition() {
        assert_eq!(describe_notes(&[1, 5]), TranspositionResult::accepted(4));
        assert_eq!(describe_notes(&[-12, 30]), TranspositionResult::accepted(5));
        assert_eq!(describe_notes(&[0, 2, 4, 5, 7, 9, 11]), TranspositionResult::accepted(0));
        assert_eq!(describe_notes(&[]), TranspositionResult::accepted(0));

        let rejected = describe_notes(&[0, 1, 2]);
        assert_eq!(rejected, TranspositionResult { transposable: false, tones_added: 0 });
    }

    #[test]
    fn test_shift_is_minimal_for_every_subset() {
        for mask in 0u16..4096 {
            let set: PitchClassSet = (0..12)
                .filter(|bit| mask & (1 << bit) != 0)
                .map(PitchClass::from_note)
                .collect();

            let expected = (0..12u8).find(|&t| set.shifted(t).is_subset(&PitchClassSet::C_MAJOR));
            let result = describe_transposition(&set);

            match expected {
                Some(t) => assert_eq!(result, TranspositionResult::accepted(t)),
                None => assert_eq!(result, TranspositionResult::rejected()),
            }
        }
    }

    #[test]
    fn test_describe_is_pure() {
        let set = PitchClassSet::from_notes([3, 8, 10]);
        assert_eq!(describe_transposition(&set), describe_transposition(&set));
        assert_eq!(is_transposable(&set), describe_transposition(&set).transposable);
    }

    #[test]
    fn test_apply_transposition() {
        let outcome = apply_transposition(&[-12, 30]).unwrap();
        assert_eq!(
            outcome,
            TranspositionOutcome::Transposed { notes: vec![-7, 35], tones_added: 5 }
        );
        assert_eq!(outcome.diagnostic(), None);
    }

    #[test]
    fn test_apply_infeasible_leaves_notes_unchanged() {
        let outcome = apply_transposition(&[0, 1, 2]).unwrap();
        assert!(!outcome.is_transposed());
        assert_eq!(outcome.notes(), &[0, 1, 2]);
        let diagnostic = outcome.diagnostic().unwrap();
        assert!(diagnostic.contains("C, C#/Db, D"), "{diagnostic}");
    }

    #[test]
    fn test_apply_overflow() {
        // {1, 7} needs a shift of 4, which pushes i32::MAX past the top
        assert_eq!(
            apply_transposition(&[1, i32::MAX]),
            Err(CMajorError::NoteOutOfRange { note: i32::MAX, shift: 4 })
        );
    }

    #[test]
    fn test_custom_reference() {
        let pentatonic = PitchClassSet::from_intervals(PitchClass::C, &[0, 2, 4, 7, 9]);
        let solver = TranspositionSolver::with_reference(pentatonic);
        assert_eq!(solver.reference(), pentatonic);
        assert_eq!(TranspositionSolver::default().reference(), PitchClassSet::C_MAJOR);
        // {5} -> {7} after 2 semitones; F is not in the pentatonic scale
        assert_eq!(solver.describe(&PitchClassSet::from_notes([5])).tones_added, 2);
        assert!(!solver.is_transposable(&PitchClassSet::from_notes([0, 1])));
    }
}
