use serde::{Deserialize, Serialize};

/// value used by [`NumericDefault::Zero`] fields when the source value is
/// missing or unparsable.
pub const ZERO_DEFAULT: f64 = 0.0;

/// policy applied to a numeric column when its source value is empty,
/// missing or cannot be read as a finite number.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NumericDefault {
    /// count-like and score-like fields, a bad value becomes [`ZERO_DEFAULT`]
    Zero,
    /// identifier-like and location fields, absence stays distinct from zero
    Null,
}

impl NumericDefault {
    /// applies this policy to a raw source value.
    ///
    /// # Returns
    ///
    /// the parsed value when it is a finite number. otherwise `Some(0.0)` for
    /// [`NumericDefault::Zero`] and `None` for [`NumericDefault::Null`].
    pub fn apply(&self, raw: Option<&str>) -> Option<f64> {
        match (raw.and_then(parse_finite), self) {
            (Some(value), _) => Some(value),
            (None, NumericDefault::Zero) => Some(ZERO_DEFAULT),
            (None, NumericDefault::Null) => None,
        }
    }
}

/// reads a trimmed string as a finite f64. empty strings, non-numeric tokens,
/// `NaN` and infinities all fail.
pub fn parse_finite(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}
