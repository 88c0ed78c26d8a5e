//! Character-class policy flags.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four boolean character-class flags shared by the generator, the
/// validator, and the proof sketch.
///
/// Depending on context these mean "include this class in the charset" or
/// "require at least one character of this class".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PolicyFlags {
    /// Lowercase letters (`a-z`)
    pub lowercase: bool,
    /// Uppercase letters (`A-Z`)
    pub uppercase: bool,
    /// Digits (`0-9`)
    pub digits: bool,
    /// Special characters
    pub special: bool,
}

impl PolicyFlags {
    /// Create flags from the four booleans.
    pub fn new(lowercase: bool, uppercase: bool, digits: bool, special: bool) -> Self {
        Self {
            lowercase,
            uppercase,
            digits,
            special,
        }
    }

    /// All four classes selected.
    pub fn all() -> Self {
        Self::new(true, true, true, true)
    }

    /// No class selected.
    pub fn none() -> Self {
        Self::default()
    }

    /// Whether at least one class is selected.
    pub fn any(&self) -> bool {
        self.lowercase || self.uppercase || self.digits || self.special
    }
}

impl fmt::Display for PolicyFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut selected = Vec::new();
        if self.lowercase {
            selected.push("lowercase");
        }
        if self.uppercase {
            selected.push("uppercase");
        }
        if self.digits {
            selected.push("digits");
        }
        if self.special {
            selected.push("special");
        }
        if selected.is_empty() {
            write!(f, "none")
        } else {
            write!(f, "{}", selected.join("+"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any() {
        assert!(!PolicyFlags::none().any());
        assert!(PolicyFlags::all().any());
        assert!(PolicyFlags::new(false, false, true, false).any());
    }

    #[test]
    fn test_display() {
        assert_eq!(PolicyFlags::none().to_string(), "none");
        assert_eq!(PolicyFlags::all().to_string(), "lowercase+uppercase+digits+special");
        assert_eq!(PolicyFlags::new(true, false, false, true).to_string(), "lowercase+special");
    }
}
