use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

pub const LIKED_GLYPH: &str = "\u{2764}\u{FE0E}";
pub const NOT_LIKED_GLYPH: &str = "\u{2661}";

/// What a like button currently shows. The flag text and glyph always move
/// together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeState {
    NotLiked,
    Liked,
}

impl LikeState {
    pub fn from_flag(flag: Option<&str>) -> Self {
        match flag {
            Some("true") => LikeState::Liked,
            _ => LikeState::NotLiked,
        }
    }

    pub fn flag(self) -> &'static str {
        match self {
            LikeState::Liked => "true",
            LikeState::NotLiked => "false",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            LikeState::Liked => LIKED_GLYPH,
            LikeState::NotLiked => NOT_LIKED_GLYPH,
        }
    }

    pub fn toggle_action(self) -> LikeAction {
        match self {
            LikeState::Liked => LikeAction::Unlike,
            LikeState::NotLiked => LikeAction::Like,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeAction {
    Like,
    Unlike,
}

impl LikeAction {
    pub fn from_flag(flag: Option<&str>) -> Self {
        LikeState::from_flag(flag).toggle_action()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LikeAction::Like => "like",
            LikeAction::Unlike => "unlike",
        }
    }

    pub fn resulting_state(self) -> LikeState {
        match self {
            LikeAction::Like => LikeState::Liked,
            LikeAction::Unlike => LikeState::NotLiked,
        }
    }

    pub fn endpoint(self, namespace: &str, pk: &str) -> String {
        let namespace = namespace.trim_matches('/');
        format!("/{namespace}/{pk}/{}/", self.as_str())
    }
}

impl fmt::Display for LikeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body returned by both the like and unlike endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct LikeResponse {
    #[serde(deserialize_with = "count")]
    pub liked_by_count: u64,
}

// Any JSON number that is a whole, non-negative count: `7` and `7.0` both read as 7.
fn count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let number = serde_json::Number::deserialize(deserializer)?;
    if let Some(count) = number.as_u64() {
        return Ok(count);
    }
    match number.as_f64() {
        Some(value) if value >= 0.0 && value.fract() == 0.0 && value < u64::MAX as f64 => {
            Ok(value as u64)
        }
        _ => Err(D::Error::custom(format!("{number} is not a like count"))),
    }
}
