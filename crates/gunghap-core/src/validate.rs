//! Input validation for names
//!
//! The scoring pipeline accepts anything; these checks decide whether a pair
//! of names is worth scoring. Rules, in the order they are reported:
//! - leading and trailing whitespace is trimmed
//! - a name needs at least `min_syllables` characters
//! - every character must be a composed Hangul syllable (no inner spaces)
//! - the two names may differ in length by at most `max_length_diff`

use serde::{Deserialize, Serialize};

use crate::error::{GunghapError, Result};
use crate::syllable::is_composed_syllable;
use crate::types::Name;

/// Limits applied to a pair of names
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationRules {
    /// Minimum syllables per name
    #[serde(default = "default_min_syllables")]
    pub min_syllables: usize,

    /// Maximum difference between the two name lengths
    #[serde(default = "default_max_length_diff")]
    pub max_length_diff: usize,
}

fn default_min_syllables() -> usize {
    2
}

fn default_max_length_diff() -> usize {
    1
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            min_syllables: default_min_syllables(),
            max_length_diff: default_max_length_diff(),
        }
    }
}

impl ValidationRules {
    /// Create a rule set, rejecting a zero syllable minimum
    pub fn new(min_syllables: usize, max_length_diff: usize) -> Result<Self> {
        let rules = Self {
            min_syllables,
            max_length_diff,
        };
        rules.check()?;
        Ok(rules)
    }

    /// Check internal consistency
    pub fn check(&self) -> Result<()> {
        if self.min_syllables == 0 {
            return Err(GunghapError::InvalidRules(
                "min_syllables must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Trim surrounding whitespace
pub fn normalize_name(raw: &str) -> &str {
    raw.trim()
}

/// Validate a single name
pub fn validate_name(raw: &str, rules: &ValidationRules) -> Result<Name> {
    let name = Name::new(normalize_name(raw));

    if name.is_empty() {
        return Err(GunghapError::EmptyName);
    }
    if name.len() < rules.min_syllables {
        return Err(GunghapError::TooShort {
            min: rules.min_syllables,
            actual: name.len(),
        });
    }
    if let Some((position, found)) = name
        .iter()
        .enumerate()
        .find(|(_, c)| !is_composed_syllable(*c))
    {
        return Err(GunghapError::NonHangul { found, position });
    }

    Ok(name)
}

/// Validate a pair of names
///
/// Each name is checked on its own before the length rule applies.
pub fn validate_pair(first: &str, second: &str, rules: &ValidationRules) -> Result<(Name, Name)> {
    let first = validate_name(first, rules).map_err(|e| e.in_name(1))?;
    let second = validate_name(second, rules).map_err(|e| e.in_name(2))?;

    if first.len().abs_diff(second.len()) > rules.max_length_diff {
        return Err(GunghapError::LengthMismatch {
            first: first.len(),
            second: second.len(),
            max_diff: rules.max_length_diff,
        });
    }

    Ok((first, second))
}
