//! Reads a formula into a stream of [tokens](crate::structures::token).
//!
//! Reading a formula is also the first rule of a validation, as any character which is not part of some token is illegal.

use crate::{
    misc::log::targets::{self},
    structures::token::Token,
    types::err::{self},
};

/// The tokens of a formula, or [IllegalCharacter](err::ErrorKind::IllegalCharacter) if some character is not part of a token.
///
/// A `-` is only legal as the first character of `->`.
pub fn lex(formula: &str) -> Result<Vec<Token>, err::ErrorKind> {
    let mut tokens = Vec::with_capacity(formula.len());
    let mut characters = formula.chars().peekable();

    while let Some(character) = characters.next() {
        let token = match character {
            'A'..='Z' => Token::Variable(character),
            '0' | '1' => Token::Digit(character),
            '!' => Token::Not,
            '|' => Token::Or,
            '&' => Token::And,
            '~' => Token::Equiv,
            '(' => Token::Open,
            ')' => Token::Close,
            '-' if characters.peek() == Some(&'>') => {
                characters.next();
                Token::Implies
            }
            _ => {
                log::debug!(target: targets::LEXER, "Illegal character {character:?} in {formula:?}");
                return Err(err::ErrorKind::IllegalCharacter);
            }
        };
        tokens.push(token);
    }

    Ok(tokens)
}
