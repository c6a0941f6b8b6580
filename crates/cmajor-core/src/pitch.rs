//! Pitch classes, note names and octave offsets
//!
//! Notes are absolute semitone offsets from a reference C (note 0). Notes 0-11
//! belong to the reference octave, anything above or below to higher or lower
//! octaves.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CMajorError;

/// Names of the 12 pitch classes, indexed by pitch-class value (C = 0)
pub const PITCH_CLASS_NAMES: [&str; 12] = [
    "C", "C#/Db", "D", "D#/Eb", "E", "F", "F#/Gb", "G", "G#/Ab", "A", "A#/Bb", "B",
];

/// A pitch class, always in 0..=11
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PitchClass(u8);

impl PitchClass {
    pub const C: Self = Self(0);

    /// Pitch class of an absolute note (non-negative modulo 12)
    pub fn from_note(note: i32) -> Self {
        Self(note.rem_euclid(12) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn name(self) -> &'static str {
        PITCH_CLASS_NAMES[self.0 as usize]
    }

    /// Move up by `semitones`, wrapping around the octave
    pub fn shifted(self, semitones: u8) -> Self {
        Self((self.0 + semitones % 12) % 12)
    }
}

impl TryFrom<u8> for PitchClass {
    type Error = CMajorError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > 11 {
            return Err(CMajorError::InvalidArgument(format!(
                "pitch class {value} is outside 0-11"
            )));
        }
        Ok(Self(value))
    }
}

impl From<PitchClass> for u8 {
    fn from(pc: PitchClass) -> Self {
        pc.0
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Display form of a single note: pitch-class name plus octave offset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteDescription {
    pub name: String,
    /// Octaves away from the reference octave (0 = notes 0-11)
    pub octave: i32,
}

impl fmt::Display for NoteDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.octave == 0 {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}({})", self.name, self.octave)
        }
    }
}

/// Name and octave of an absolute note
///
/// Octaves for negative notes use truncating division, one octave lower for
/// every pitch class except C: -1 and -12 are both in octave -1, -13 is in
/// octave -2.
///
/// # Example
/// ```
/// use cmajor_core::name_and_octave;
/// let desc = name_and_octave(-25);
/// assert_eq!(desc.name, "B");
/// assert_eq!(desc.octave, -3);
/// assert_eq!(desc.to_string(), "B(-3)");
/// ```
pub fn name_and_octave(note: i32) -> NoteDescription {
    let pitch_class = PitchClass::from_note(note);

    let octave = if note < 0 {
        if pitch_class == PitchClass::C {
            note / 12
        } else {
            note / 12 - 1
        }
    } else if note < 12 {
        0
    } else {
        note / 12
    };

    NoteDescription { name: pitch_class.name().to_string(), octave }
}
