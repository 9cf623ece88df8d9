use rand::{rngs::StdRng, SeedableRng};

use wff_quiz::{
    config::GeneratorConfig,
    generator::{generate, generate_question},
    is_well_formed,
    procedures::lex::lex,
};

#[test]
fn answers_match_validation() {
    let config = GeneratorConfig::default();
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..200 {
        let question = generate_question(&config, &mut rng).unwrap();
        assert_eq!(question.answer, is_well_formed(&question.formula));
    }
}

#[test]
fn formulas_lex() {
    let config = GeneratorConfig::default();
    let mut rng = StdRng::seed_from_u64(11);

    for groups in 1..=4 {
        for args in 1..=3 {
            let formula = generate(groups, args, &config, &mut rng).unwrap();
            assert!(lex(&formula).is_ok(), "{formula}");
            assert!(!formula.contains('0') && !formula.contains('1'));
        }
    }
}

#[test]
fn seeds_repeat() {
    let config = GeneratorConfig::default();

    let mut first = StdRng::seed_from_u64(3);
    let mut second = StdRng::seed_from_u64(3);

    for _ in 0..20 {
        assert_eq!(
            generate_question(&config, &mut first),
            generate_question(&config, &mut second)
        );
    }
}

#[test]
fn parentheses_balance() {
    let config = GeneratorConfig::default();
    let mut rng = StdRng::seed_from_u64(5);

    for _ in 0..100 {
        let question = generate_question(&config, &mut rng).unwrap();
        let opens = question.formula.matches('(').count();
        let closes = question.formula.matches(')').count();
        assert_eq!(opens, closes, "{}", question.formula);
    }
}
