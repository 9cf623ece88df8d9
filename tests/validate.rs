use wff_quiz::{status_code, types::err::ErrorKind, validate};

mod well_formed {
    use super::*;

    #[test]
    fn two_groups_with_permuted_negation() {
        assert_eq!(validate("(A|(!B))&(B|(!A))"), Ok(()));
    }

    #[test]
    fn every_negation_pattern() {
        assert_eq!(
            validate("(A|B)&((!A)|B)&(A|(!B))&((!A)|(!B))"),
            Ok(())
        );
    }

    #[test]
    fn single_group() {
        assert_eq!(validate("(A|B)"), Ok(()));
        assert_eq!(validate("(A|(!B))"), Ok(()));
    }

    #[test]
    fn bare_variable() {
        assert_eq!(validate("A"), Ok(()));
    }

    #[test]
    fn unwrapped_negation_of_other_variables() {
        // Only negations of A and B are required to be wrapped.
        assert_eq!(validate("(C|!D)&(D|!C)"), Ok(()));
    }
}

mod scenarios {
    use super::*;

    #[test]
    fn empty() {
        assert_eq!(validate(""), Err(ErrorKind::Empty));
        assert_eq!(status_code(""), 11);
    }

    #[test]
    fn duplicate_group() {
        assert_eq!(status_code("(A|B)&(A|B)"), 4);
        assert_eq!(status_code("(A)&(A)"), 4);
    }

    #[test]
    fn reordered_group() {
        assert_eq!(status_code("(A|B)&(B|A)"), 8);
    }

    #[test]
    fn groups_are_compared_as_written() {
        // The first and last groups are the same, though not adjacent.
        assert_eq!(status_code("(C|(!B))&(B|(!C))&(C|(!B))"), 4);
        // The first and last groups are the same up to order.
        assert_eq!(status_code("(B|A)&((!A)|B)&(A|B)"), 8);
    }

    #[test]
    fn single_literal_groups() {
        // Each group is fine alone, but the variables differ.
        assert_eq!(status_code("(A)&(B)"), 8);
        // A formula which is a single group of a single literal is too simple.
        assert_eq!(status_code("(A)"), 16);
    }

    #[test]
    fn group_sizes() {
        assert_eq!(status_code("(A|B)&(A|(!B)|C)"), 3);
        // A three literal group with bare middle variable is caught by the syntax rules first.
        assert_eq!(status_code("(A|B)&(C|D|E)"), 18);
    }

    #[test]
    fn unwrapped_negation_of_a_and_b() {
        assert_eq!(status_code("(A|!B)&(B|!A)"), 10);
        assert_eq!(status_code("(!A|B)&(A|B)"), 10);
    }

    #[test]
    fn repeated_variables() {
        assert_eq!(status_code("(A|(!A))&(A|B)"), 15);
        assert_eq!(status_code("(A|A)"), 15);
    }

    #[test]
    fn non_disjunctive_group() {
        assert_eq!(status_code("(A&(!B))&(A|B)"), 15);
    }

    #[test]
    fn multi_character_name_in_single_group() {
        assert_eq!(status_code("((!!C)|D)"), 15);
    }

    #[test]
    fn top_level_connectives() {
        assert_eq!(status_code("(A|B)|(B|A)"), 2);
        assert_eq!(status_code("(A|B)~((!A)|B)"), 2);
        assert_eq!(status_code("(A|B)->((!A)|B)"), 2);
    }

    #[test]
    fn braces() {
        assert_eq!(status_code("((A|B)"), 9);
        assert_eq!(status_code("(A|B))"), 17);
    }

    #[test]
    fn syntax() {
        assert_eq!(status_code("&"), 7);
        assert_eq!(status_code("->"), 7);
        assert_eq!(status_code("("), 5);
        assert_eq!(status_code("()"), 5);
        assert_eq!(status_code("(AB|C)"), 6);
        assert_eq!(status_code("!(A|B)"), 12);
        assert_eq!(status_code("(A|B)(B|A)"), 14);
        assert_eq!(status_code("(A&B)"), 16);
        assert_eq!(status_code("(C->!D)"), 16);
        assert_eq!(status_code("A|B"), 18);
        assert_eq!(status_code("(A|B|C)"), 18);
    }
}

mod ordering {
    use super::*;

    #[test]
    fn digits_after_charset() {
        assert_eq!(status_code("A|1"), 19);
        assert_eq!(status_code("A1"), 19);
        assert_eq!(status_code("0"), 19);
        assert_eq!(status_code("a1"), 1);
        assert_eq!(status_code("(A|1) "), 1);
    }

    #[test]
    fn digits_before_later_rules() {
        // Negated group, adjacent groups, and a trivial group, each with a constant.
        assert_eq!(status_code("!(A|1)"), 19);
        assert_eq!(status_code("(A|1)(B)"), 19);
        assert_eq!(status_code("(1)"), 19);
    }

    #[test]
    fn empty_before_everything() {
        assert_eq!(validate(""), Err(ErrorKind::Empty));
    }

    #[test]
    fn syntax_before_braces() {
        // Unbalanced, though adjacent groups are found first.
        assert_eq!(status_code("((A|B)(B|A)"), 14);
    }

    #[test]
    fn braces_after_syntax() {
        // One opening parenthesis too many, and no syntax rule violated.
        assert_eq!(status_code("(A|B)&((A|(!B))"), 9);
    }
}

#[test]
fn codes_are_stable() {
    for kind in ErrorKind::ALL {
        assert_ne!(kind.code(), 0);
        assert_ne!(kind.code(), 13);
        assert_eq!(ErrorKind::from_code(kind.code()), Some(kind));
    }
    assert_eq!(ErrorKind::ALL.len(), 18);
}
