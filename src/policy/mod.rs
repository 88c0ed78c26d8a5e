//! Boolean policy analysis.
//!
//! This module hosts the truth-table engine for the fixed password-policy
//! formula, the canonical DNF/CNF derivations over that table, and the
//! Hoare-triple proof sketch rendered from the same four flags.

mod flags;
pub mod hoare;
pub mod normal_form;
pub mod truth_table;

pub use flags::PolicyFlags;
pub use hoare::{ProofSketch, Verdict};
pub use truth_table::{evaluate_policy, TruthRow, TruthTable, Variable};
