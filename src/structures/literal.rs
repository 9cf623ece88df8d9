//! Literals are variables paired with an optional negation.
//!
//! Within a group a literal is whatever is written between two `|`, and so a literal may be malformed, e.g. `A&B`.
//! Rather than reject these when reading a group, a literal keeps its tokens and the [symmetry](crate::procedures::symmetry) rules decide.
//!
//! Two notions of equality are used:
//! - Identity equality (`==`), where both the name and the negation of the literals match.
//! - Variable equality ([Literal::same_variable]), where the names match and negation is ignored.

use crate::structures::token::{render, Token};

/// A literal, as the tokens between two disjunctions of a group.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Literal {
    tokens: Vec<Token>,
}

impl Literal {
    pub fn new(tokens: &[Token]) -> Self {
        Literal {
            tokens: tokens.to_vec(),
        }
    }

    /// A well-formed literal over `name`.
    pub fn fresh(name: char, negated: bool) -> Self {
        let mut tokens = Vec::with_capacity(2);
        if negated {
            tokens.push(Token::Not);
        }
        tokens.push(Token::Variable(name));
        Literal { tokens }
    }

    /// The text of the literal, with negation.
    pub fn text(&self) -> String {
        render(&self.tokens)
    }

    /// The text of the literal without its (first) negation.
    pub fn name(&self) -> String {
        match self.tokens.iter().position(|token| *token == Token::Not) {
            None => render(&self.tokens),
            Some(index) => self
                .tokens
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != index)
                .map(|(_, token)| token.to_string())
                .collect(),
        }
    }

    /// Whether some connective other than `|` was left inside the literal.
    pub fn has_connective(&self) -> bool {
        self.tokens
            .iter()
            .any(|token| matches!(token, Token::And | Token::Equiv | Token::Implies))
    }

    pub fn same_variable(&self, other: &Self) -> bool {
        self.name() == other.name()
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text())
    }
}

#[cfg(test)]
mod literal_tests {
    use super::*;

    #[test]
    fn negation_is_ignored_by_name() {
        let a = Literal::fresh('A', false);
        let not_a = Literal::fresh('A', true);

        assert_ne!(a, not_a);
        assert!(a.same_variable(&not_a));
        assert_eq!(not_a.name(), "A");
        assert_eq!(not_a.text(), "!A");
    }

    #[test]
    fn only_the_first_negation_is_removed() {
        let literal = Literal::new(&[Token::Not, Token::Not, Token::Variable('C')]);
        assert_eq!(literal.name(), "!C");
    }

    #[test]
    fn leftover_connectives() {
        let literal = Literal::new(&[Token::Variable('A'), Token::Implies, Token::Variable('B')]);
        assert!(literal.has_connective());
        assert_eq!(literal.name(), "A->B");
        assert!(!Literal::fresh('A', true).has_connective());
    }
}
