//! Pitch-class sets and the C-major reference set

use serde::{Deserialize, Serialize};

use crate::error::{CMajorError, Result};
use crate::pitch::PitchClass;

/// Bits of the 12 pitch classes; bit `n` is pitch class `n`
const OCTAVE_MASK: u16 = 0x0FFF;

/// A set of distinct pitch classes
///
/// Stored as a 12-bit mask so shifting the whole set is a rotation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct PitchClassSet {
    mask: u16,
}

impl PitchClassSet {
    pub const EMPTY: Self = Self { mask: 0 };

    /// C, D, E, F, G, A, B
    pub const C_MAJOR: Self = Self { mask: 0b1010_1011_0101 };

    /// Set of the pitch classes of absolute notes, normalized modulo 12
    pub fn from_notes(notes: impl IntoIterator<Item = i32>) -> Self {
        notes.into_iter().map(PitchClass::from_note).collect()
    }

    /// Set from raw pitch-class values, which must already be in 0-11
    pub fn from_pitch_classes(values: impl IntoIterator<Item = i32>) -> Result<Self> {
        let mut set = Self::EMPTY;
        for value in values {
            let pc = u8::try_from(value)
                .ok()
                .and_then(|v| PitchClass::try_from(v).ok())
                .ok_or_else(|| {
                    CMajorError::InvalidArgument(format!("pitch class {value} is outside 0-11"))
                })?;
            set.insert(pc);
        }
        Ok(set)
    }

    /// Scale built from a root and its intervals in semitones
    ///
    /// # Example
    /// ```
    /// use cmajor_core::{PitchClass, PitchClassSet};
    /// let c_major = PitchClassSet::from_intervals(PitchClass::C, &[0, 2, 4, 5, 7, 9, 11]);
    /// assert_eq!(c_major, PitchClassSet::C_MAJOR);
    /// ```
    pub fn from_intervals(root: PitchClass, intervals: &[u8]) -> Self {
        intervals.iter().map(|&interval| root.shifted(interval)).collect()
    }

    pub fn insert(&mut self, pc: PitchClass) {
        self.mask |= 1 << pc.value();
    }

    pub fn contains(&self, pc: PitchClass) -> bool {
        self.mask & (1 << pc.value()) != 0
    }

    pub fn is_subset(&self, other: &Self) -> bool {
        self.mask & !other.mask == 0
    }

    /// Every pitch class moved up by `semitones`, wrapping around the octave
    pub fn shifted(&self, semitones: u8) -> Self {
        let s = semitones % 12;
        if s == 0 {
            return *self;
        }
        let mask = ((self.mask << s) | (self.mask >> (12 - s))) & OCTAVE_MASK;
        Self { mask }
    }

    pub fn len(&self) -> usize {
        self.mask.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.mask == 0
    }

    /// Pitch classes in ascending order
    pub fn iter(&self) -> impl Iterator<Item = PitchClass> + '_ {
        (0..12u8)
            .filter(|&v| self.mask & (1 << v) != 0)
            .filter_map(|v| PitchClass::try_from(v).ok())
    }
}

impl FromIterator<PitchClass> for PitchClassSet {
    fn from_iter<I: IntoIterator<Item = PitchClass>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for pc in iter {
            set.insert(pc);
        }
        set
    }
}

impl TryFrom<Vec<u8>> for PitchClassSet {
    type Error = CMajorError;

    fn try_from(values: Vec<u8>) -> Result<Self> {
        Self::from_pitch_classes(values.into_iter().map(i32::from))
    }
}

impl From<PitchClassSet> for Vec<u8> {
    fn from(set: PitchClassSet) -> Self {
        set.iter().map(PitchClass::value).collect()
    }
}

/// The fixed C-major reference set {0, 2, 4, 5, 7, 9, 11}
pub fn reference_set_c_major() -> PitchClassSet {
    PitchClassSet::C_MAJOR
}
