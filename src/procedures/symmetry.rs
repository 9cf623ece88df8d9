//! Checks the literals of each top-level group are symmetric across groups.
//!
//! # Overview
//!
//! A formula is a conjunction of disjunctions, and the disjunctions of a well-formed formula:
//! - Have the same count of literals.
//! - Are over the same variables, with no variable repeated within a disjunction.
//! - Differ in the negation of (at least) some variable.
//!
//! So, `(A|B)&((!A)|B)` is well formed, while `(A|B)&(B|A)` is not, as the groups are the same up to order.
//!
//! Each pair of groups is compared in the order written, and the first violation found classifies the formula.
//! A formula of a single group is only checked for malformed or repeated variables.

use crate::{
    misc::log::targets::{self},
    structures::{group::Group, literal::Literal},
    types::err::{self},
};

/// Checks each pair of groups, or the group of a single group formula.
pub fn check(groups: &[Group]) -> Result<(), err::ErrorKind> {
    for (index, group) in groups.iter().enumerate() {
        let others = &groups[index + 1..];
        if others.is_empty() {
            break;
        }

        if group.first().is_some_and(Literal::has_connective) {
            log::debug!(target: targets::SYMMETRY, "Group {group} is not a disjunction");
            return Err(err::ErrorKind::MalformedGroup);
        }

        for other in others {
            compare(group, other)?;
        }
    }

    if let [group] = groups {
        check_single(group)?;
    }

    Ok(())
}

/// Compares a pair of groups.
pub fn compare(group: &Group, other: &Group) -> Result<(), err::ErrorKind> {
    if group.len() != other.len() {
        log::debug!(target: targets::SYMMETRY, "Groups {group} and {other} differ in size");
        return Err(err::ErrorKind::GroupSizeMismatch);
    }

    if group == other {
        log::debug!(target: targets::SYMMETRY, "Group {group} is repeated");
        return Err(err::ErrorKind::DuplicateGroup);
    }

    if group.has_duplicate_variable() || other.has_duplicate_variable() {
        log::debug!(target: targets::SYMMETRY, "A variable is repeated in {group} or {other}");
        return Err(err::ErrorKind::MalformedGroup);
    }

    if group.sorted_texts() == other.sorted_texts() {
        log::debug!(target: targets::SYMMETRY, "Groups {group} and {other} are the same up to order");
        return Err(err::ErrorKind::LiteralSetMismatch);
    }

    if group.sorted_names() != other.sorted_names() {
        log::debug!(target: targets::SYMMETRY, "Groups {group} and {other} differ in variables");
        return Err(err::ErrorKind::LiteralSetMismatch);
    }

    Ok(())
}

fn check_single(group: &Group) -> Result<(), err::ErrorKind> {
    let malformed = group
        .names()
        .iter()
        .any(|name| name.chars().count() != 1);

    if malformed || group.has_duplicate_variable() {
        log::debug!(target: targets::SYMMETRY, "Group {group} is malformed");
        return Err(err::ErrorKind::MalformedGroup);
    }

    Ok(())
}

#[cfg(test)]
mod symmetry_tests {
    use super::*;

    fn group(literals: &[(char, bool)]) -> Group {
        Group::from_literals(
            literals
                .iter()
                .map(|(name, negated)| Literal::fresh(*name, *negated))
                .collect(),
        )
    }

    #[test]
    fn differing_negation_is_fine() {
        let groups = [
            group(&[('A', false), ('B', false)]),
            group(&[('A', true), ('B', false)]),
            group(&[('B', true), ('A', true)]),
        ];
        assert_eq!(check(&groups), Ok(()));
    }

    #[test]
    fn reordering_is_not() {
        let groups = [
            group(&[('A', false), ('B', true)]),
            group(&[('B', true), ('A', false)]),
        ];
        assert_eq!(check(&groups), Err(err::ErrorKind::LiteralSetMismatch));
    }

    #[test]
    fn size_before_duplicates() {
        let groups = [
            group(&[('A', false), ('A', true)]),
            group(&[('A', false)]),
        ];
        assert_eq!(check(&groups), Err(err::ErrorKind::GroupSizeMismatch));
    }

    #[test]
    fn duplicate_before_repeated_variable() {
        let groups = [
            group(&[('A', false), ('A', true)]),
            group(&[('A', false), ('A', true)]),
        ];
        assert_eq!(check(&groups), Err(err::ErrorKind::DuplicateGroup));

        let groups = [
            group(&[('A', false), ('A', true)]),
            group(&[('A', true), ('A', false)]),
        ];
        assert_eq!(check(&groups), Err(err::ErrorKind::MalformedGroup));
    }

    #[test]
    fn different_variables() {
        let groups = [
            group(&[('A', false), ('B', false)]),
            group(&[('A', false), ('C', false)]),
        ];
        assert_eq!(check(&groups), Err(err::ErrorKind::LiteralSetMismatch));
    }

    #[test]
    fn single_groups() {
        assert_eq!(check(&[group(&[('A', false), ('B', true)])]), Ok(()));
        assert_eq!(
            check(&[group(&[('A', false), ('A', true)])]),
            Err(err::ErrorKind::MalformedGroup)
        );
        assert_eq!(check(&[Group::default()]), Ok(()));
        assert_eq!(check(&[]), Ok(()));
    }
}
