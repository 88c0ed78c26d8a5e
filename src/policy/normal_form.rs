//! Canonical normal forms derived from the policy truth table.
//!
//! Both forms are pure functions of a [`TruthTable`], never recomputed from
//! the formula directly: every row contributes to exactly one form, so the
//! DNF and CNF term counts always sum to the row count.

use super::truth_table::{TruthRow, TruthTable, VARIABLES};

/// Negation prefix used when rendering literals.
const NOT: &str = "¬";

/// Derive the canonical disjunctive normal form of the table.
///
/// One conjunction term per row where the policy result is true, in
/// ascending row order. A literal is rendered bare when the variable is true
/// in the row and negated otherwise. With no true rows the constant `"0"`
/// is returned.
pub fn dnf(table: &TruthTable) -> String {
    let terms: Vec<String> = table.true_rows().map(|row| minterm(row)).collect();
    if terms.is_empty() {
        return "0".to_string();
    }
    terms.join(" | ")
}

/// Derive the canonical conjunctive normal form of the table.
///
/// One disjunction term per row where the policy result is false, in
/// ascending row order, with literal polarity inverted relative to the DNF
/// (the canonical maxterm construction). With no false rows the constant
/// `"1"` is returned.
pub fn cnf(table: &TruthTable) -> String {
    let terms: Vec<String> = table.false_rows().map(|row| maxterm(row)).collect();
    if terms.is_empty() {
        return "1".to_string();
    }
    terms.join(" & ")
}

/// Number of terms in a rendered DNF string (`0` for the false constant).
pub fn dnf_term_count(expression: &str) -> usize {
    if expression == "0" {
        0
    } else {
        expression.split(" | ").count()
    }
}

/// Number of terms in a rendered CNF string (`0` for the true constant).
pub fn cnf_term_count(expression: &str) -> usize {
    if expression == "1" {
        0
    } else {
        expression.split(" & ").count()
    }
}

fn minterm(row: &TruthRow) -> String {
    let literals: Vec<String> = VARIABLES
        .iter()
        .map(|v| literal(v.name(), row.value(*v)))
        .collect();
    format!("({})", literals.join(" & "))
}

fn maxterm(row: &TruthRow) -> String {
    let literals: Vec<String> = VARIABLES
        .iter()
        .map(|v| literal(v.name(), !row.value(*v)))
        .collect();
    format!("({})", literals.join(" | "))
}

fn literal(name: &str, positive: bool) -> String {
    if positive {
        name.to_string()
    } else {
        format!("{}{}", NOT, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::truth_table::ROW_COUNT;

    #[test]
    fn test_dnf_pinned_for_policy_formula() {
        // The formula is true for rows 7, 11 and 15 only.
        let table = TruthTable::build();
        assert_eq!(
            dnf(&table),
            "(lilsymbols & largesymbols & numbers & ¬SecSymbols) | \
             (lilsymbols & largesymbols & ¬numbers & SecSymbols) | \
             (lilsymbols & largesymbols & numbers & SecSymbols)"
        );
    }

    #[test]
    fn test_dnf_term_count_matches_true_rows() {
        let table = TruthTable::build();
        assert_eq!(dnf_term_count(&dnf(&table)), table.true_rows().count());
        assert_eq!(dnf_term_count(&dnf(&table)), 3);
    }

    #[test]
    fn test_cnf_term_count_matches_false_rows() {
        let table = TruthTable::build();
        assert_eq!(cnf_term_count(&cnf(&table)), table.false_rows().count());
        assert_eq!(cnf_term_count(&cnf(&table)), 13);
    }

    #[test]
    fn test_term_counts_sum_to_row_count() {
        let table = TruthTable::build();
        let total = dnf_term_count(&dnf(&table)) + cnf_term_count(&cnf(&table));
        assert_eq!(total, ROW_COUNT);
    }

    #[test]
    fn test_every_term_has_four_literals() {
        let table = TruthTable::build();

        for term in dnf(&table).split(" | ") {
            let inner = term.trim_matches(|c| c == '(' || c == ')');
            assert_eq!(inner.split(" & ").count(), 4, "bad DNF term: {}", term);
        }

        for term in cnf(&table).split(" & ") {
            let inner = term.trim_matches(|c| c == '(' || c == ')');
            assert_eq!(inner.split(" | ").count(), 4, "bad CNF term: {}", term);
        }
    }

    #[test]
    fn test_all_true_row_renders_unnegated_minterm() {
        let table = TruthTable::build();
        assert!(dnf(&table).contains("(lilsymbols & largesymbols & numbers & SecSymbols)"));
    }

    #[test]
    fn test_all_false_row_renders_unnegated_maxterm() {
        // Maxterm polarity is inverted, so the all-false row contributes a
        // term with every variable bare.
        let table = TruthTable::build();
        assert!(cnf(&table).contains("(lilsymbols | largesymbols | numbers | SecSymbols)"));
    }

    #[test]
    fn test_constant_false_when_no_true_rows() {
        let rows = (0..4)
            .map(|i| TruthRow::with_result(i & 1 != 0, i & 2 != 0, false, false, false))
            .collect();
        let table = TruthTable::from_rows(rows);
        assert_eq!(dnf(&table), "0");
        assert_eq!(dnf_term_count(&dnf(&table)), 0);
    }

    #[test]
    fn test_constant_true_when_no_false_rows() {
        let rows = (0..4)
            .map(|i| TruthRow::with_result(i & 1 != 0, i & 2 != 0, false, false, true))
            .collect();
        let table = TruthTable::from_rows(rows);
        assert_eq!(cnf(&table), "1");
        assert_eq!(cnf_term_count(&cnf(&table)), 0);
    }

    #[test]
    fn test_derivation_is_reproducible() {
        let table = TruthTable::build();
        assert_eq!(dnf(&table), dnf(&table));
        assert_eq!(cnf(&table), cnf(&table));
    }
}
