//! Checks the parentheses of a formula are paired.
//!
//! Only counts are compared, so `)(` is paired.
//! Order is left to [other](crate::procedures::syntax) [rules](crate::procedures::decompose).

use crate::{
    misc::log::targets::{self},
    structures::token::Token,
    types::err::{self},
};

/// Compares the count of opening and closing parentheses.
pub fn check(tokens: &[Token]) -> Result<(), err::ErrorKind> {
    let opening = tokens.iter().filter(|token| **token == Token::Open).count();
    let closing = tokens.iter().filter(|token| **token == Token::Close).count();

    match opening.cmp(&closing) {
        std::cmp::Ordering::Equal => Ok(()),

        std::cmp::Ordering::Greater => {
            log::debug!(target: targets::GROUPS, "{opening} opening and {closing} closing parentheses");
            Err(err::ErrorKind::UnclosedBrace)
        }

        std::cmp::Ordering::Less => {
            log::debug!(target: targets::GROUPS, "{opening} opening and {closing} closing parentheses");
            Err(err::ErrorKind::UnopenedBrace)
        }
    }
}
