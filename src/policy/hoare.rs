//! Hoare-triple proof sketch for the generator contract.
//!
//! This is deterministic text templating over the policy flags and requested
//! length, not a proof engine. The verdict depends only on the flags and the
//! length; a supplied password feeds the informational example check but
//! never changes the verdict.

use super::PolicyFlags;
use serde::Serialize;
use std::fmt;

/// Minimum length the proof sketch accepts as secure.
pub const MIN_PROVABLE_LENGTH: usize = 8;

/// Outcome of the proof sketch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// At least one character class is selected and the length is at least 8.
    Proved,
    /// The precondition fails: no class selected or the length is below 8.
    NotProved,
}

impl Verdict {
    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Proved => "proved",
            Verdict::NotProved => "not proved",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The four rendered text blocks of the proof sketch plus the verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProofSketch {
    /// Weakest-precondition block
    pub precondition: String,
    /// Pseudocode of the generate-and-retry loop
    pub code_fragment: String,
    /// Postcondition conjunction block
    pub postcondition: String,
    /// The assembled Hoare triple
    pub triple: String,
    /// Pass/fail verdict
    pub verdict: Verdict,
    /// Human-readable verdict explanation
    pub verdict_text: String,
}

impl ProofSketch {
    /// Render the proof sketch for the given flags, requested length, and
    /// optionally an already-generated password for the example check.
    pub fn build(flags: PolicyFlags, length: usize, password: Option<&str>) -> Self {
        let postcondition_terms = postcondition_terms(flags, length);
        let postcondition_conjunction = postcondition_terms.join(" ∧ ");
        let postcondition = format!(
            "{{ P }} password := GeneratePassword() {{ Q }}\n\nQ: {}",
            postcondition_conjunction
        );

        let precondition_terms = precondition_terms(flags, length);
        let precondition_conjunction = precondition_terms.join(" ∧ ");
        let precondition = format!("P (WP): {}", precondition_conjunction);

        let code_fragment = code_fragment(flags);

        let triple = format!(
            "{{ P }} password := GeneratePassword() {{ Q }}\n\n\
             where:\n\
             \x20 P (Precondition): {}\n\
             \x20 Q (Postcondition): {}\n\n\
             Proof (WP):\n\
             \x20 WP(GeneratePassword, Q) = P'\n\
             \x20 P' ⊆ P → proved ✓",
            precondition_conjunction, postcondition_conjunction
        );

        let verdict = if flags.any() && length >= MIN_PROVABLE_LENGTH {
            Verdict::Proved
        } else {
            Verdict::NotProved
        };
        let verdict_text = verdict_text(verdict, length, password);

        Self {
            precondition,
            code_fragment,
            postcondition,
            triple,
            verdict,
            verdict_text,
        }
    }
}

fn postcondition_terms(flags: PolicyFlags, length: usize) -> Vec<String> {
    let mut terms = Vec::new();
    if flags.lowercase {
        terms.push("HasLower(password)".to_string());
    }
    if flags.uppercase {
        terms.push("HasUpper(password)".to_string());
    }
    if flags.digits {
        terms.push("HasDigit(password)".to_string());
    }
    if flags.special {
        terms.push("HasSpecial(password)".to_string());
    }
    terms.push(format!("Length(password) = {}", length));
    terms.push("NoSequential(password)".to_string());
    terms.push("NoRepeating(password)".to_string());
    terms
}

fn precondition_terms(flags: PolicyFlags, length: usize) -> Vec<String> {
    let mut terms = Vec::new();
    if flags.lowercase {
        terms.push("charSet contains lowercase letters".to_string());
    }
    if flags.uppercase {
        terms.push("charSet contains uppercase letters".to_string());
    }
    if flags.digits {
        terms.push("charSet contains digits".to_string());
    }
    if flags.special {
        terms.push("charSet contains special characters".to_string());
    }
    terms.push(format!("length >= {}", length.max(MIN_PROVABLE_LENGTH)));
    terms.push("RandomSelect is cryptographically secure".to_string());
    terms
}

fn code_fragment(flags: PolicyFlags) -> String {
    let mut lines = vec![
        "function GeneratePassword(length: int, options: Options): string".to_string(),
        "{".to_string(),
        "    charSet := \"\"".to_string(),
    ];

    if flags.lowercase {
        lines.push("    if (options.lowercase) charSet += \"a-z\"".to_string());
    }
    if flags.uppercase {
        lines.push("    if (options.uppercase) charSet += \"A-Z\"".to_string());
    }
    if flags.digits {
        lines.push("    if (options.digits) charSet += \"0-9\"".to_string());
    }
    if flags.special {
        lines.push("    if (options.special) charSet += \"!@#$%...\"".to_string());
    }

    let mut retry_conditions = Vec::new();
    if flags.lowercase {
        retry_conditions.push("!HasLower(password)");
    }
    if flags.uppercase {
        retry_conditions.push("!HasUpper(password)");
    }
    if flags.digits {
        retry_conditions.push("!HasDigit(password)");
    }
    if flags.special {
        retry_conditions.push("!HasSpecial(password)");
    }
    retry_conditions.push("HasSequential(password)");
    retry_conditions.push("HasRepeating(password)");

    lines.push(String::new());
    lines.push("    password := \"\"".to_string());
    lines.push("    do {".to_string());
    lines.push("        password = RandomSelect(charSet, length)".to_string());
    lines.push("    } while (".to_string());
    lines.push(format!("        {}", retry_conditions.join(" || ")));
    lines.push("    )".to_string());
    lines.push(String::new());
    lines.push("    return password".to_string());
    lines.push("}".to_string());

    lines.join("\n")
}

fn verdict_text(verdict: Verdict, length: usize, password: Option<&str>) -> String {
    match verdict {
        Verdict::NotProved => "✗ NOT PROVED: precondition not satisfied\n\
             Select at least one character class and a length ≥ 8"
            .to_string(),
        Verdict::Proved => {
            let mut lines = vec![
                "✓ PROVED: the generator guarantees the postcondition".to_string(),
                String::new(),
                "Proof:".to_string(),
                "1. Precondition P holds: every selected character class is included".to_string(),
                "2. The retry loop regenerates until all conditions are satisfied".to_string(),
                "3. The HasLower/HasUpper/HasDigit/HasSpecial checks guarantee required characters"
                    .to_string(),
                format!("4. Password length is {} ≥ {}", length, MIN_PROVABLE_LENGTH),
            ];

            if let Some(password) = password.filter(|p| !p.is_empty()) {
                let mark = |ok: bool| if ok { "✓" } else { "✗" };
                lines.push(String::new());
                lines.push("Check against the generated example:".to_string());
                lines.push(format!(
                    "  • HasLower: {}",
                    mark(password.chars().any(|c| c.is_lowercase()))
                ));
                lines.push(format!(
                    "  • HasUpper: {}",
                    mark(password.chars().any(|c| c.is_uppercase()))
                ));
                lines.push(format!(
                    "  • HasDigit: {}",
                    mark(password.chars().any(|c| c.is_ascii_digit()))
                ));
                lines.push(format!(
                    "  • HasSpecial: {}",
                    mark(password.chars().any(|c| !c.is_alphanumeric()))
                ));
                lines.push(format!(
                    "  • Length = {}: {}",
                    length,
                    mark(password.chars().count() == length)
                ));
            }

            lines.join("\n")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_requires_a_class_and_length() {
        let sketch = ProofSketch::build(PolicyFlags::none(), 12, None);
        assert_eq!(sketch.verdict, Verdict::NotProved);

        let sketch = ProofSketch::build(PolicyFlags::all(), 7, None);
        assert_eq!(sketch.verdict, Verdict::NotProved);

        let sketch = ProofSketch::build(PolicyFlags::new(false, false, true, false), 8, None);
        assert_eq!(sketch.verdict, Verdict::Proved);
    }

    #[test]
    fn test_verdict_ignores_supplied_password() {
        // The rule is cosmetic on purpose: a password that satisfies nothing
        // still yields a proved verdict when flags and length pass.
        let sketch = ProofSketch::build(PolicyFlags::all(), 12, Some("aaaa"));
        assert_eq!(sketch.verdict, Verdict::Proved);
    }

    #[test]
    fn test_postcondition_reflects_selected_flags() {
        let sketch = ProofSketch::build(PolicyFlags::new(true, false, true, false), 10, None);
        assert!(sketch.postcondition.contains("HasLower(password)"));
        assert!(!sketch.postcondition.contains("HasUpper(password)"));
        assert!(sketch.postcondition.contains("HasDigit(password)"));
        assert!(!sketch.postcondition.contains("HasSpecial(password)"));
        assert!(sketch.postcondition.contains("Length(password) = 10"));
    }

    #[test]
    fn test_precondition_floors_length_at_eight() {
        let sketch = ProofSketch::build(PolicyFlags::all(), 4, None);
        assert!(sketch.precondition.contains("length >= 8"));

        let sketch = ProofSketch::build(PolicyFlags::all(), 20, None);
        assert!(sketch.precondition.contains("length >= 20"));
    }

    #[test]
    fn test_code_fragment_lists_retry_conditions() {
        let sketch = ProofSketch::build(PolicyFlags::new(true, true, false, false), 12, None);
        assert!(sketch.code_fragment.contains("!HasLower(password) || !HasUpper(password)"));
        assert!(sketch.code_fragment.contains("HasSequential(password)"));
        assert!(!sketch.code_fragment.contains("!HasDigit(password)"));
    }

    #[test]
    fn test_example_check_marks_each_class() {
        let sketch = ProofSketch::build(PolicyFlags::all(), 8, Some("aB3!aB3!"));
        assert!(sketch.verdict_text.contains("HasLower: ✓"));
        assert!(sketch.verdict_text.contains("HasUpper: ✓"));
        assert!(sketch.verdict_text.contains("HasDigit: ✓"));
        assert!(sketch.verdict_text.contains("HasSpecial: ✓"));
        assert!(sketch.verdict_text.contains("Length = 8: ✓"));

        let sketch = ProofSketch::build(PolicyFlags::all(), 8, Some("abcdefgh"));
        assert!(sketch.verdict_text.contains("HasUpper: ✗"));
        assert!(sketch.verdict_text.contains("HasDigit: ✗"));
    }

    #[test]
    fn test_build_is_deterministic() {
        let a = ProofSketch::build(PolicyFlags::all(), 16, Some("aB3!aB3!aB3!aB3!"));
        let b = ProofSketch::build(PolicyFlags::all(), 16, Some("aB3!aB3!aB3!aB3!"));
        assert_eq!(a, b);
    }
}
