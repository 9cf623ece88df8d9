//! Validates a formula.
//!
//! # Overview
//!
//! A validation is a fixed sequence of procedures, each of which may classify the formula, and no later procedure is used once a formula has been classified:
//!
//! ```none
//! empty? → lex → syntax → debrace → braces → decompose → symmetry → well formed
//! ```
//!
//! - [lex](crate::procedures::lex) reads the formula, and classifies any illegal character.
//! - [syntax](crate::procedures::syntax) checks the charset and boundary rules on the tokens read.
//! - [debrace](crate::procedures::debrace) removes redundant parentheses, without classifying.
//! - [braces](crate::procedures::braces) checks parentheses are paired, *after* removal.
//! - [decompose](crate::procedures::decompose) splits the formula into top-level groups.
//! - [symmetry](crate::procedures::symmetry) compares the literals of the groups.
//!
//! A validation is a pure function of the formula.
//!
//! ```rust
//! # use wff_quiz::procedures::validate::{status_code, validate};
//! # use wff_quiz::types::err::ErrorKind;
//! assert_eq!(validate("(A|(!B))&(B|(!A))"), Ok(()));
//! assert_eq!(validate("(A|B)&(A|B)"), Err(ErrorKind::DuplicateGroup));
//! assert_eq!(status_code(""), 11);
//! ```

use crate::{
    misc::log::targets::{self},
    procedures::{braces, debrace::debrace, decompose::decompose, lex::lex, symmetry, syntax},
    types::err::{self},
};

/// Validates a formula, returning the first rule violated if the formula is not well formed.
pub fn validate(formula: &str) -> Result<(), err::ErrorKind> {
    if formula.is_empty() {
        return Err(err::ErrorKind::Empty);
    }

    let tokens = lex(formula)?;
    syntax::check(&tokens)?;

    let tokens = debrace(&tokens);
    braces::check(&tokens)?;

    let groups = decompose(&tokens)?;
    symmetry::check(&groups)?;

    log::trace!(target: targets::SYNTAX, "{formula} is well formed");
    Ok(())
}

/// The status code of a validation, with `0` for a well-formed formula.
pub fn status_code(formula: &str) -> u8 {
    match validate(formula) {
        Ok(()) => 0,
        Err(kind) => kind.code(),
    }
}

pub fn is_well_formed(formula: &str) -> bool {
    validate(formula).is_ok()
}
