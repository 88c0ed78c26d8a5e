//! Cryptographically secure password generation and validation.
//!
//! Boundary conditions degrade to an empty or neutral value rather than
//! failing: a non-positive length or an empty charset yields an empty
//! string, and validation of an empty password is simply false.

use crate::policy::PolicyFlags;
use rand::rngs::OsRng;
use rand::Rng;

/// Lowercase character class.
pub const LOWERCASE_CHARS: &str = "abcdefghijklmnopqrstuvwxyz";
/// Uppercase character class.
pub const UPPERCASE_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Digit character class.
pub const DIGIT_CHARS: &str = "0123456789";
/// Special character class (fixed 26-character set).
pub const SPECIAL_CHARS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Password generator backed by the operating system CSPRNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct PasswordGenerator;

impl PasswordGenerator {
    /// Create a new generator.
    pub fn new() -> Self {
        Self
    }

    /// Generate a password of exactly `length` characters drawn uniformly
    /// from the union of the selected character classes.
    ///
    /// Returns an empty string when `length` is zero or no class is
    /// selected.
    pub fn generate(&self, length: usize, flags: PolicyFlags) -> String {
        if length == 0 {
            return String::new();
        }

        let charset = charset(flags);
        if charset.is_empty() {
            return String::new();
        }

        let mut rng = OsRng;
        (0..length)
            .map(|_| charset[rng.gen_range(0..charset.len())] as char)
            .collect()
    }

    /// Check that the password contains at least one character of every
    /// required class.
    ///
    /// An empty password never validates. Special means non-alphanumeric,
    /// matching the generator's special set.
    pub fn validate(&self, password: &str, required: PolicyFlags) -> bool {
        if password.is_empty() {
            return false;
        }

        if required.lowercase && !password.chars().any(|c| c.is_lowercase()) {
            return false;
        }
        if required.uppercase && !password.chars().any(|c| c.is_uppercase()) {
            return false;
        }
        if required.digits && !password.chars().any(|c| c.is_ascii_digit()) {
            return false;
        }
        if required.special && !password.chars().any(|c| !c.is_alphanumeric()) {
            return false;
        }

        true
    }
}

/// Union of the selected character classes, in fixed class order.
fn charset(flags: PolicyFlags) -> Vec<u8> {
    let mut set = Vec::new();
    if flags.lowercase {
        set.extend_from_slice(LOWERCASE_CHARS.as_bytes());
    }
    if flags.uppercase {
        set.extend_from_slice(UPPERCASE_CHARS.as_bytes());
    }
    if flags.digits {
        set.extend_from_slice(DIGIT_CHARS.as_bytes());
    }
    if flags.special {
        set.extend_from_slice(SPECIAL_CHARS.as_bytes());
    }
    set
}
