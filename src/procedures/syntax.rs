//! The charset and boundary rules of a formula.
//!
//! # Overview
//!
//! After a formula has been [read](crate::procedures::lex) each rule in [RULES] is checked, in order, against the tokens of the formula.
//! The first rule violated classifies the formula, and no further rules are checked.
//!
//! The order of the rules matters, as some rules are permissive on the understanding that an earlier rule would already have classified a formula.
//! For example, the [start](malformed_start) and [end](malformed_end) rules only apply to formulas without any variable or constant.
//!
//! Each rule is a predicate over the tokens of a formula which holds when the formula *violates* the rule.
//! The predicates are public to allow each rule to be examined in isolation.
//!
//! ```rust
//! # use wff_quiz::procedures::{lex::lex, syntax};
//! # use wff_quiz::types::err::ErrorKind;
//! let tokens = lex("(A|B)(A|B)").unwrap();
//! assert!(syntax::adjacent_groups(&tokens));
//! assert_eq!(syntax::check(&tokens), Err(ErrorKind::AdjacentGroups));
//! ```

use crate::{
    misc::log::targets::{self},
    structures::token::Token,
    types::err::{self},
};

/// A rule, as the kind of error reported and a predicate which holds on violation.
pub struct Rule {
    pub kind: err::ErrorKind,
    pub violated: fn(&[Token]) -> bool,
}

/// The rules checked on the tokens of a formula, in the order checked.
pub const RULES: [Rule; 9] = [
    Rule {
        kind: err::ErrorKind::MalformedStart,
        violated: malformed_start,
    },
    Rule {
        kind: err::ErrorKind::MalformedEnd,
        violated: malformed_end,
    },
    Rule {
        kind: err::ErrorKind::DigitLiteral,
        violated: digit_literal,
    },
    Rule {
        kind: err::ErrorKind::GroupNegation,
        violated: group_negation,
    },
    Rule {
        kind: err::ErrorKind::AdjacentGroups,
        violated: adjacent_groups,
    },
    Rule {
        kind: err::ErrorKind::UnseparatedVariables,
        violated: unseparated_variables,
    },
    Rule {
        kind: err::ErrorKind::NegationPlacement,
        violated: negation_placement,
    },
    Rule {
        kind: err::ErrorKind::TrivialGroup,
        violated: trivial_group,
    },
    Rule {
        kind: err::ErrorKind::BareConnective,
        violated: bare_connective,
    },
];

/// Checks each of the [RULES] in order, returning the kind of the first rule violated.
pub fn check(tokens: &[Token]) -> Result<(), err::ErrorKind> {
    match RULES.iter().find(|rule| (rule.violated)(tokens)) {
        None => Ok(()),
        Some(rule) => {
            log::debug!(target: targets::SYNTAX, "Rule {:?} violated", rule.kind);
            Err(rule.kind)
        }
    }
}

fn has_content(tokens: &[Token]) -> bool {
    tokens.iter().any(Token::is_content)
}

/// A formula without variables or constants which does not begin with `(`.
pub fn malformed_start(tokens: &[Token]) -> bool {
    tokens.first() != Some(&Token::Open) && !has_content(tokens)
}

/// A formula without variables or constants which does not end with a variable, constant, or `)` followed by `)`.
pub fn malformed_end(tokens: &[Token]) -> bool {
    let well_ended = matches!(
        tokens,
        [.., Token::Variable(_) | Token::Digit(_) | Token::Close, Token::Close]
    );
    !well_ended && !has_content(tokens)
}

/// Any use of the constants `0` or `1`.
pub fn digit_literal(tokens: &[Token]) -> bool {
    tokens.iter().any(|token| matches!(token, Token::Digit(_)))
}

/// A negation of a parenthesised group, e.g. `!(A|B)`.
pub fn group_negation(tokens: &[Token]) -> bool {
    tokens
        .windows(2)
        .any(|pair| matches!(pair, [Token::Not, Token::Open]))
}

/// A group immediately followed by a group, e.g. `(A)(B)`.
pub fn adjacent_groups(tokens: &[Token]) -> bool {
    tokens
        .windows(2)
        .any(|pair| matches!(pair, [Token::Close, Token::Open]))
}

/// Two variables with either nothing or a single token other than a connective between them, e.g. `AB` or `A!B`.
pub fn unseparated_variables(tokens: &[Token]) -> bool {
    let adjacent = tokens
        .windows(2)
        .any(|pair| matches!(pair, [Token::Variable(_), Token::Variable(_)]));

    adjacent
        || tokens.windows(3).any(|triple| match triple {
            [Token::Variable(_), between, Token::Variable(_)] => !between.is_connective(),
            _ => false,
        })
}

/// A negation of `A` or `B` which is preceded by something other than `(`, or followed by something other than `)`.
///
/// The start and the end of a formula are fine.
/// Negations of other variables are not examined.
pub fn negation_placement(tokens: &[Token]) -> bool {
    let badly_preceded = tokens.windows(3).any(|triple| match triple {
        [before, Token::Not, Token::Variable('A' | 'B')] => *before != Token::Open,
        _ => false,
    });

    let badly_followed = tokens.windows(3).any(|triple| match triple {
        [Token::Not, Token::Variable('A' | 'B'), after] => *after != Token::Close,
        _ => false,
    });

    badly_preceded || badly_followed
}

/// A formula which is a single group of one variable, or of two variables joined by something other than `|`.
///
/// The second variable may be negated, so long as it differs from the first.
pub fn trivial_group(tokens: &[Token]) -> bool {
    fn trivial_connective(token: &Token) -> bool {
        matches!(token, Token::And | Token::Equiv | Token::Implies)
    }

    match tokens {
        [Token::Open, Token::Variable(_), Token::Close] => true,

        [Token::Open, Token::Variable(_), connective, Token::Variable(_), Token::Close] => {
            trivial_connective(connective)
        }

        [Token::Open, Token::Variable(x), connective, Token::Not, Token::Variable(y), Token::Close] => {
            trivial_connective(connective) && x != y
        }

        _ => false,
    }
}

/// A variable between two connectives, e.g. `|B|`, or a formula which is two variables joined by a connective.
pub fn bare_connective(tokens: &[Token]) -> bool {
    let sandwiched = tokens.windows(3).any(|triple| match triple {
        [before, Token::Variable(_), after] => before.is_connective() && after.is_connective(),
        _ => false,
    });

    let bare = match tokens {
        [Token::Variable(_), connective, Token::Variable(_)] => connective.is_connective(),
        _ => false,
    };

    sandwiched || bare
}
