//! Why a character or name was turned away.
//!
//! During bulk generation these are expected and dropped one candidate at a
//! time. During single-name assessment they are returned to the caller.

use mingzi_dict::Gender;

/// A character fails the admissibility rules.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationRejection {
    #[error("no given name left after the surname")]
    EmptyName,

    #[error("{0:?} is not a single Chinese character")]
    NotIdeograph(String),

    #[error("「{0}」 is on the banned list")]
    Banned(char),

    #[error("stroke count of 「{0}」 is unknown")]
    UnknownStrokes(char),

    #[error("「{ch}」 has {strokes} strokes, too complex for a name")]
    TooComplex { ch: char, strokes: u32 },

    #[error("「{ch}」 is not used in {gender} names")]
    GenderRestricted { ch: char, gender: Gender },
}

/// Surname plus character reads as an unfortunate pun.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("「{surname}{ch}」 forms an unfortunate homophone")]
pub struct HomophoneRejection {
    pub surname: char,
    pub ch: char,
}

/// Any reason the scorer refuses a candidate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error(transparent)]
    Validation(#[from] ValidationRejection),

    #[error(transparent)]
    Homophone(#[from] HomophoneRejection),
}
