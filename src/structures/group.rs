//! Groups are the disjunctions joined (by conjunction) at the top level of a formula.
//!
//! A group keeps the literals in the order they were written, as the [symmetry](crate::procedures::symmetry) rules distinguish a duplicate group from a reordered group.

use crate::structures::{literal::Literal, token::Token};

/// An ordered disjunction of literals.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Group {
    literals: Vec<Literal>,
}

impl Group {
    /// Reads a group from tokens without parentheses, splitting on `|` and ignoring empty fragments.
    ///
    /// ```rust
    /// # use wff_quiz::procedures::lex::lex;
    /// # use wff_quiz::structures::group::Group;
    /// let group = Group::from_tokens(&lex("A||!B|").unwrap());
    /// assert_eq!(group.len(), 2);
    /// ```
    pub fn from_tokens(tokens: &[Token]) -> Self {
        let literals = tokens
            .split(|token| *token == Token::Or)
            .filter(|fragment| !fragment.is_empty())
            .map(Literal::new)
            .collect();
        Group { literals }
    }

    pub fn from_literals(literals: Vec<Literal>) -> Self {
        Group { literals }
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn first(&self) -> Option<&Literal> {
        self.literals.first()
    }

    /// The names of the literals, in order.
    pub fn names(&self) -> Vec<String> {
        self.literals.iter().map(|literal| literal.name()).collect()
    }

    /// Whether two literals of the group share a name, regardless of negation.
    pub fn has_duplicate_variable(&self) -> bool {
        self.literals.iter().enumerate().any(|(index, literal)| {
            self.literals[index + 1..]
                .iter()
                .any(|other| literal.same_variable(other))
        })
    }

    /// The texts of the literals, sorted.
    pub fn sorted_texts(&self) -> Vec<String> {
        let mut texts = self
            .literals
            .iter()
            .map(|literal| literal.text())
            .collect::<Vec<_>>();
        texts.sort_unstable();
        texts
    }

    /// The names of the literals, sorted.
    pub fn sorted_names(&self) -> Vec<String> {
        let mut names = self.names();
        names.sort_unstable();
        names
    }
}

impl std::fmt::Display for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let texts = self
            .literals
            .iter()
            .map(|literal| literal.text())
            .collect::<Vec<_>>();
        write!(f, "({})", texts.join("|"))
    }
}
