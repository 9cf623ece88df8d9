//! Splits a [normalized](crate::procedures::debrace) formula into top-level groups.
//!
//! # Overview
//!
//! Once the outer layer of parentheses has been removed, top-level groups are separated by a `)`, a connective, and a `(`.
//! For example, `(A|B)&(B|C)&(A|C)` is normalized to `A|B)&(B|C)&(A|C` which splits to:
//!
//! ```none
//! A|B   &   B|C   &   A|C
//! ```
//!
//! Each connective is kept as a fragment of its own, and each fragment then has any remaining parentheses removed.
//!
//! Only `&` may join groups.
//! A fragment which is exactly `|`, `~`, or `->` classifies the formula as [TopLevelConnective](err::ErrorKind::TopLevelConnective), and otherwise each `&` fragment is dropped.
//! The remaining fragments are read as [groups](crate::structures::group).

use crate::{
    misc::log::targets::{self},
    structures::{
        group::Group,
        token::{render, Token},
    },
    types::err::{self},
};

/// The fragments of a formula, split on each `)`, connective, `(` with the connectives kept, and all parentheses removed.
pub fn fragments(tokens: &[Token]) -> Vec<Vec<Token>> {
    let mut fragments = Vec::default();
    let mut current = Vec::default();
    let mut index = 0;

    while index < tokens.len() {
        match &tokens[index..] {
            [Token::Close, connective, Token::Open, ..] if connective.is_connective() => {
                fragments.push(std::mem::take(&mut current));
                fragments.push(vec![*connective]);
                index += 3;
            }
            [token, ..] => {
                current.push(*token);
                index += 1;
            }
            [] => break,
        }
    }
    fragments.push(current);

    fragments
        .into_iter()
        .map(|fragment| {
            fragment
                .into_iter()
                .filter(|token| !matches!(token, Token::Open | Token::Close))
                .collect()
        })
        .collect()
}

/// The top-level groups of a normalized formula.
pub fn decompose(tokens: &[Token]) -> Result<Vec<Group>, err::ErrorKind> {
    let fragments = fragments(tokens);

    let misjoined = fragments.iter().find(|fragment| {
        matches!(
            fragment.as_slice(),
            [Token::Or] | [Token::Equiv] | [Token::Implies]
        )
    });

    if let Some(connective) = misjoined {
        log::debug!(target: targets::GROUPS, "Groups joined by {}", render(connective));
        return Err(err::ErrorKind::TopLevelConnective);
    }

    let groups = fragments
        .iter()
        .filter(|fragment| !matches!(fragment.as_slice(), [Token::And]))
        .map(|fragment| Group::from_tokens(fragment))
        .collect::<Vec<_>>();

    log::trace!(target: targets::GROUPS, "{} groups", groups.len());

    Ok(groups)
}

#[cfg(test)]
mod decompose_tests {
    use super::*;
    use crate::procedures::{debrace::debrace, lex::lex};

    fn normalized(formula: &str) -> Vec<Token> {
        debrace(&lex(formula).expect("lexed"))
    }

    #[test]
    fn split_keeps_connectives() {
        let fragments = fragments(&normalized("(A|B)&((!A)|B)~(A|C)"));
        let texts = fragments.iter().map(|f| render(f)).collect::<Vec<_>>();
        assert_eq!(texts, vec!["A|B", "&", "!A|B", "~", "A|C"]);
    }

    #[test]
    fn only_conjunction_at_the_top() {
        for formula in ["(A|B)|(B|A)", "(A|B)~(B|A)", "(A|B)->(B|A)"] {
            assert_eq!(
                decompose(&normalized(formula)),
                Err(err::ErrorKind::TopLevelConnective),
                "{formula}"
            );
        }
    }

    #[test]
    fn conjunctions_are_dropped() {
        let groups = decompose(&normalized("(A|B)&(B|C)&(A|C)")).expect("decomposed");
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[1].to_string(), "(B|C)");
    }

    #[test]
    fn nested_groups_are_flattened() {
        let groups = decompose(&normalized("((A|(B|C))&(A|(B|C)))")).expect("decomposed");
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].to_string(), "(A|B|C)");
        assert_eq!(groups[0], groups[1]);
    }
}
