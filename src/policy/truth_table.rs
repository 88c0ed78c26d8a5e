//! Truth table construction for the password policy formula.
//!
//! The policy predicate is a fixed function of four boolean inputs:
//!
//! ```text
//! policy = lilsymbols ∧ largesymbols ∧ (numbers ∨ SecSymbols)
//! ```
//!
//! Note the asymmetry: the first two categories are always required while the
//! last two are alternatives. This is the canonical policy formula of the
//! system and is preserved exactly; do not "fix" it into a symmetric
//! all-categories-required predicate.

use super::normal_form;
use super::PolicyFlags;
use serde::Serialize;
use std::fmt;

/// Number of input variables in the policy formula.
pub const VARIABLE_COUNT: usize = 4;

/// Number of rows in the full truth table (2^4).
pub const ROW_COUNT: usize = 1 << VARIABLE_COUNT;

/// One of the four named boolean inputs of the policy formula.
///
/// Variable identity and display order are fixed; the rendered names match
/// the canonical form used in the DNF/CNF strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variable {
    /// Require lowercase letters
    Lilsymbols,
    /// Require uppercase letters
    Largesymbols,
    /// Require digits
    Numbers,
    /// Require special characters
    SecSymbols,
}

/// All variables in fixed display order.
pub const VARIABLES: [Variable; VARIABLE_COUNT] = [
    Variable::Lilsymbols,
    Variable::Largesymbols,
    Variable::Numbers,
    Variable::SecSymbols,
];

impl Variable {
    /// Get the canonical rendered name of this variable.
    pub fn name(&self) -> &'static str {
        match self {
            Variable::Lilsymbols => "lilsymbols",
            Variable::Largesymbols => "largesymbols",
            Variable::Numbers => "numbers",
            Variable::SecSymbols => "SecSymbols",
        }
    }

    /// Bit position of this variable in the row index.
    pub fn bit(&self) -> usize {
        match self {
            Variable::Lilsymbols => 0,
            Variable::Largesymbols => 1,
            Variable::Numbers => 2,
            Variable::SecSymbols => 3,
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One evaluated combination of the four policy inputs.
///
/// Rows are immutable value objects; `policy_result` is derived from the
/// inputs at construction time and cannot drift out of sync with them.
/// The 0/1 rendering used for display happens at the presentation boundary
/// (see [`TruthTable::report`]), not as stored fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TruthRow {
    lilsymbols: bool,
    largesymbols: bool,
    numbers: bool,
    sec_symbols: bool,
    policy_result: bool,
}

impl TruthRow {
    /// Create a row for the given input combination, evaluating the policy
    /// formula.
    pub fn new(lilsymbols: bool, largesymbols: bool, numbers: bool, sec_symbols: bool) -> Self {
        Self {
            lilsymbols,
            largesymbols,
            numbers,
            sec_symbols,
            policy_result: evaluate_policy(lilsymbols, largesymbols, numbers, sec_symbols),
        }
    }

    /// Construct a row with a forced result, bypassing the formula.
    ///
    /// Only used by tests that need tables with no true (or no false) rows.
    #[cfg(test)]
    pub(crate) fn with_result(
        lilsymbols: bool,
        largesymbols: bool,
        numbers: bool,
        sec_symbols: bool,
        policy_result: bool,
    ) -> Self {
        Self {
            lilsymbols,
            largesymbols,
            numbers,
            sec_symbols,
            policy_result,
        }
    }

    /// Whether lowercase letters are required in this combination.
    pub fn lilsymbols(&self) -> bool {
        self.lilsymbols
    }

    /// Whether uppercase letters are required in this combination.
    pub fn largesymbols(&self) -> bool {
        self.largesymbols
    }

    /// Whether digits are required in this combination.
    pub fn numbers(&self) -> bool {
        self.numbers
    }

    /// Whether special characters are required in this combination.
    pub fn sec_symbols(&self) -> bool {
        self.sec_symbols
    }

    /// The evaluated policy formula for this combination.
    pub fn policy_result(&self) -> bool {
        self.policy_result
    }

    /// Value of the given variable in this row.
    pub fn value(&self, variable: Variable) -> bool {
        match variable {
            Variable::Lilsymbols => self.lilsymbols,
            Variable::Largesymbols => self.largesymbols,
            Variable::Numbers => self.numbers,
            Variable::SecSymbols => self.sec_symbols,
        }
    }

    /// The four input values in fixed display order.
    pub fn inputs(&self) -> [bool; VARIABLE_COUNT] {
        [
            self.lilsymbols,
            self.largesymbols,
            self.numbers,
            self.sec_symbols,
        ]
    }

    /// View this combination as generator/validator policy flags.
    pub fn as_flags(&self) -> PolicyFlags {
        PolicyFlags::new(
            self.lilsymbols,
            self.largesymbols,
            self.numbers,
            self.sec_symbols,
        )
    }
}

/// Evaluate the fixed policy formula for one input combination.
pub fn evaluate_policy(
    lilsymbols: bool,
    largesymbols: bool,
    numbers: bool,
    sec_symbols: bool,
) -> bool {
    lilsymbols && largesymbols && (numbers || sec_symbols)
}

/// The full truth table of the policy formula: 16 rows covering every
/// combination of the four inputs exactly once.
///
/// Row order follows the binary counting order of a 4-bit index `i` in
/// `0..16`, where bit 0 maps to `lilsymbols`, bit 1 to `largesymbols`,
/// bit 2 to `numbers`, and bit 3 to `SecSymbols`. The table is built fresh
/// on each call and is immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TruthTable {
    rows: Vec<TruthRow>,
}

impl TruthTable {
    /// Enumerate all 16 input combinations and evaluate the policy formula
    /// for each.
    ///
    /// This operation is total and deterministic; it cannot fail and reads
    /// no external state.
    pub fn build() -> Self {
        let rows = (0..ROW_COUNT)
            .map(|i| {
                TruthRow::new(
                    i & (1 << Variable::Lilsymbols.bit()) != 0,
                    i & (1 << Variable::Largesymbols.bit()) != 0,
                    i & (1 << Variable::Numbers.bit()) != 0,
                    i & (1 << Variable::SecSymbols.bit()) != 0,
                )
            })
            .collect();
        Self { rows }
    }

    /// Wrap an explicit row set.
    ///
    /// Test-only escape hatch for exercising the degenerate normal-form
    /// cases that the fixed formula can never produce.
    #[cfg(test)]
    pub(crate) fn from_rows(rows: Vec<TruthRow>) -> Self {
        Self { rows }
    }

    /// The rows in ascending index order.
    pub fn rows(&self) -> &[TruthRow] {
        &self.rows
    }

    /// Rows where the policy formula evaluates to true.
    pub fn true_rows(&self) -> impl Iterator<Item = &TruthRow> {
        self.rows.iter().filter(|r| r.policy_result())
    }

    /// Rows where the policy formula evaluates to false.
    pub fn false_rows(&self) -> impl Iterator<Item = &TruthRow> {
        self.rows.iter().filter(|r| !r.policy_result())
    }

    /// Render the full analysis report: all 16 rows as 0/1 columns followed
    /// by the derived DNF and CNF strings.
    ///
    /// Formatting is a presentation concern; the derivations themselves come
    /// from [`normal_form::dnf`] and [`normal_form::cnf`] over this table.
    pub fn report(&self) -> String {
        let mut out = String::new();
        let rule = "=".repeat(80);
        let dash = "-".repeat(80);

        out.push_str(&rule);
        out.push_str("\nTRUTH TABLE\n");
        out.push_str("Formula: policy = lilsymbols ∧ largesymbols ∧ (numbers ∨ SecSymbols)\n");
        out.push_str(&rule);
        out.push_str("\n\n");

        out.push_str(&format!(
            "{:<12} | {:<12} | {:<8} | {:<11} | {:<10}\n",
            "lilsymbols", "largesymbols", "numbers", "SecSymbols", "policy"
        ));
        out.push_str(&dash);
        out.push('\n');

        for row in &self.rows {
            out.push_str(&format!(
                "{:<12} | {:<12} | {:<8} | {:<11} | {:<10}\n",
                row.lilsymbols as u8,
                row.largesymbols as u8,
                row.numbers as u8,
                row.sec_symbols as u8,
                row.policy_result as u8,
            ));
        }

        out.push('\n');
        out.push_str("DNF (Disjunctive Normal Form):\n");
        out.push_str(&normal_form::dnf(self));
        out.push_str("\n\n");
        out.push_str("CNF (Conjunctive Normal Form):\n");
        out.push_str(&normal_form::cnf(self));
        out.push('\n');

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_has_sixteen_rows() {
        let table = TruthTable::build();
        assert_eq!(table.rows().len(), ROW_COUNT);
    }

    #[test]
    fn test_all_combinations_distinct() {
        let table = TruthTable::build();
        let combinations: HashSet<[bool; 4]> = table.rows().iter().map(|r| r.inputs()).collect();
        assert_eq!(combinations.len(), 16);
    }

    #[test]
    fn test_row_order_follows_binary_counting() {
        let table = TruthTable::build();
        for (i, row) in table.rows().iter().enumerate() {
            assert_eq!(row.lilsymbols(), i & 1 != 0);
            assert_eq!(row.largesymbols(), i & 2 != 0);
            assert_eq!(row.numbers(), i & 4 != 0);
            assert_eq!(row.sec_symbols(), i & 8 != 0);
        }
    }

    #[test]
    fn test_formula_holds_for_every_row() {
        let table = TruthTable::build();
        for row in table.rows() {
            let expected = row.lilsymbols() && row.largesymbols() && (row.numbers() || row.sec_symbols());
            assert_eq!(row.policy_result(), expected);
        }
    }

    #[test]
    fn test_concrete_cases() {
        // All false -> false
        assert!(!TruthRow::new(false, false, false, false).policy_result());
        // Both letter classes plus digits -> true
        assert!(TruthRow::new(true, true, true, false).policy_result());
        // Both letter classes plus specials -> true
        assert!(TruthRow::new(true, true, false, true).policy_result());
        // Missing lowercase requirement -> false, no matter the rest
        assert!(!TruthRow::new(false, true, true, true).policy_result());
    }

    #[test]
    fn test_true_false_row_counts_pinned() {
        // Regression fixture obtained by exhaustive enumeration: the formula
        // is true only for row indices 7, 11 and 15.
        let table = TruthTable::build();
        assert_eq!(table.true_rows().count(), 3);
        assert_eq!(table.false_rows().count(), 13);

        let true_indices: Vec<usize> = table
            .rows()
            .iter()
            .enumerate()
            .filter(|(_, r)| r.policy_result())
            .map(|(i, _)| i)
            .collect();
        assert_eq!(true_indices, vec![7, 11, 15]);
    }

    #[test]
    fn test_build_is_idempotent() {
        assert_eq!(TruthTable::build(), TruthTable::build());
    }

    #[test]
    fn test_variable_names_and_order() {
        let names: Vec<&str> = VARIABLES.iter().map(|v| v.name()).collect();
        assert_eq!(names, vec!["lilsymbols", "largesymbols", "numbers", "SecSymbols"]);
    }

    #[test]
    fn test_row_value_accessor_matches_inputs() {
        let row = TruthRow::new(true, false, true, false);
        for (i, variable) in VARIABLES.iter().enumerate() {
            assert_eq!(row.value(*variable), row.inputs()[i]);
        }
    }

    #[test]
    fn test_report_contains_rows_and_forms() {
        let table = TruthTable::build();
        let report = table.report();
        assert!(report.contains("TRUTH TABLE"));
        assert!(report.contains("DNF (Disjunctive Normal Form):"));
        assert!(report.contains("CNF (Conjunctive Normal Form):"));
        // 16 data lines render a leading 0/1 cell
        let data_lines = report
            .lines()
            .filter(|l| l.starts_with("0 ") || l.starts_with("1 "))
            .count();
        assert_eq!(data_lines, 16);
    }
}
