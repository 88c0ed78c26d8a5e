//! # Passguard
//!
//! Password generator, local vault, and boolean policy analysis toolkit.
//!
//! The analysis core enumerates the full truth table of the fixed
//! password-policy formula over its four boolean inputs and derives the
//! canonical DNF and CNF forms from that table. Around it sit a
//! cryptographically secure password generator, a file-backed vault, and a
//! Hoare-triple proof sketch for the generator contract.
//!
//! ## Quick Start
//!
//! ```rust
//! use passguard::policy::{normal_form, TruthTable};
//!
//! let table = TruthTable::build();
//! assert_eq!(table.rows().len(), 16);
//!
//! let dnf = normal_form::dnf(&table);
//! let cnf = normal_form::cnf(&table);
//! assert_eq!(
//!     normal_form::dnf_term_count(&dnf) + normal_form::cnf_term_count(&cnf),
//!     16
//! );
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod config;
pub mod error;
pub mod generator;
pub mod policy;
pub mod store;

// Re-export main types for convenience
pub use config::Config;
pub use error::{Error, Result};
pub use generator::PasswordGenerator;
pub use policy::{PolicyFlags, ProofSketch, TruthRow, TruthTable, Variable, Verdict};
pub use store::{PasswordEntry, PasswordStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
