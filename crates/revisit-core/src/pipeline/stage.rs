//! Pipeline states.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A state of the validation pipeline.
///
/// Transitions are strictly linear; a failing stage jumps straight to
/// [`Stage::Done`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Idle,
    CheckingUrl,
    ProbingHead,
    ProbingPost,
    CheckingImage,
    Done,
}

impl Stage {
    /// The stage that follows this one on success.
    pub fn next(self) -> Self {
        match self {
            Self::Idle => Self::CheckingUrl,
            Self::CheckingUrl => Self::ProbingHead,
            Self::ProbingHead => Self::ProbingPost,
            Self::ProbingPost => Self::CheckingImage,
            Self::CheckingImage | Self::Done => Self::Done,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == Self::Done
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::CheckingUrl => "checking_url",
            Self::ProbingHead => "probing_head",
            Self::ProbingPost => "probing_post",
            Self::CheckingImage => "checking_image",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
