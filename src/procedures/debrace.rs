//! Removes redundant parentheses from a formula.
//!
//! Two kinds of parentheses are removed:
//! - A single outer layer, from the first `(` to the last `)` of the formula.
//!   So, `((A|B)|C)` becomes `(A|B)|C`, and `(A|B)&(B|C)` becomes `A|B)&(B|C`.
//! - Parentheses around a negated variable, so `(!A)` becomes `!A`.
//!
//! Removal happens before [brace pairing](crate::procedures::braces) is checked, and so removes one pair of parentheses from the count.
//! The split into [groups](crate::procedures::decompose) relies on the ragged form which follows removal of the outer layer.

use crate::{
    misc::log::targets::{self},
    procedures::lex::lex,
    structures::token::{render, Token},
    types::err::{self},
};

/// The tokens with an outer layer of parentheses and the parentheses around each negated variable removed.
pub fn debrace(tokens: &[Token]) -> Vec<Token> {
    let stripped = strip_outer(tokens);
    let unwrapped = unwrap_negations(&stripped);

    log::trace!(target: targets::NORMALIZE, "{} normalized to {}", render(tokens), render(&unwrapped));

    unwrapped
}

/// [debrace] on the text of a formula.
///
/// ```rust
/// # use wff_quiz::procedures::debrace::normalize;
/// assert_eq!(normalize("((A|(!B))|C)"), Ok("(A|!B)|C".to_string()));
/// ```
pub fn normalize(formula: &str) -> Result<String, err::ErrorKind> {
    Ok(render(&debrace(&lex(formula)?)))
}

fn strip_outer(tokens: &[Token]) -> Vec<Token> {
    let first_open = tokens.iter().position(|token| *token == Token::Open);
    let last_close = tokens.iter().rposition(|token| *token == Token::Close);

    match (first_open, last_close) {
        (Some(open), Some(close)) if open < close => tokens
            .iter()
            .enumerate()
            .filter(|(index, _)| *index != open && *index != close)
            .map(|(_, token)| *token)
            .collect(),

        _ => tokens.to_vec(),
    }
}

fn unwrap_negations(tokens: &[Token]) -> Vec<Token> {
    let mut unwrapped = Vec::with_capacity(tokens.len());
    let mut index = 0;

    while index < tokens.len() {
        match &tokens[index..] {
            [Token::Open, Token::Not, variable @ Token::Variable(_), Token::Close, ..] => {
                unwrapped.push(Token::Not);
                unwrapped.push(*variable);
                index += 4;
            }
            [token, ..] => {
                unwrapped.push(*token);
                index += 1;
            }
            [] => break,
        }
    }

    unwrapped
}
