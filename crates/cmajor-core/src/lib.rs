//! cmajor-core: Pitch-class naming and C-major transposition for note sequences

mod error;
pub mod pitch;
pub mod scale;
pub mod sheet_music;
pub mod transposition;

pub use error::{CMajorError, Result};
pub use pitch::{name_and_octave, NoteDescription, PitchClass, PITCH_CLASS_NAMES};
pub use scale::{reference_set_c_major, PitchClassSet};
pub use sheet_music::SheetMusic;
pub use transposition::{
    apply_transposition, describe_transposition, is_transposable,
    TranspositionOutcome, TranspositionResult, TranspositionSolver,
};
