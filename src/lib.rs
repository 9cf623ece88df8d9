//! A library for classifying whether a formula is well formed, relative to a restricted grammar for propositional formulas.
//!
//! wff_quiz is written to support exercises on formulas which are conjunctions of disjunctions over a common set of variables, such as:
//!
//! ```none
//! (A|(!B))&(B|(!A))
//! ```
//!
//! The grammar is deliberately restrictive, and is not a grammar for propositional logic in general.
//! Any formula outside of the grammar is classified by exactly one [error kind](types::err::ErrorKind), the kind of the first rule found to be violated.
//!
//! # Orientation
//!
//! The library is designed around a single [validation](procedures::validate), made of a fixed sequence of [procedures].
//! In order:
//! - A formula is [read](procedures::lex) into [tokens](structures::token).
//! - The tokens are checked against [charset and boundary rules](procedures::syntax).
//! - Redundant parentheses are [removed](procedures::debrace), and the remaining parentheses [counted](procedures::braces).
//! - The formula is [split](procedures::decompose) into top-level [groups](structures::group).
//! - The [literals](structures::literal) of each group are [compared](procedures::symmetry) across groups.
//!
//! Around the validation are two consumers:
//! - A [generator] of candidate formulas.
//! - A [quiz] which asks whether generated formulas are well formed.
//!
//! # Examples
//!
//! ```rust
//! use wff_quiz::procedures::validate::{status_code, validate};
//! use wff_quiz::types::err::ErrorKind;
//!
//! assert_eq!(validate("(A|(!B))&(B|(!A))"), Ok(()));
//!
//! // Two groups which are the same up to order.
//! assert_eq!(validate("(A|(!B))&((!B)|A)"), Err(ErrorKind::LiteralSetMismatch));
//!
//! // Groups may only be joined by conjunction.
//! assert_eq!(status_code("(A|(!B))|(B|(!A))"), 2);
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made when a rule classifies a formula, and during generation and quizzes.
//! The targets are listed in [misc::log].

pub mod config;
pub mod generator;
pub mod misc;
pub mod procedures;
pub mod quiz;
pub mod structures;
pub mod types;

pub use procedures::validate::{is_well_formed, status_code, validate};
