//! Generates candidate formulas.
//!
//! # Overview
//!
//! A formula is generated from a count of groups and a count of arguments.
//! Each group has between two and one more than the count of arguments literals, named in order from the [alphabet](crate::config::GeneratorConfig::alphabet).
//! Each literal is negated by chance, and written as `(!X)` when negated.
//!
//! Literals of a group, and groups of a formula, are joined right-nested with connectives drawn from the [weights](crate::config::ConnectiveWeights) of the configuration:
//!
//! ```none
//! ((A|((!B)&C))|(A->B))
//! ```
//!
//! As connectives other than `|` may be drawn within a group, and connectives other than `&` may be drawn between groups, a generated formula may or may not be well formed.
//! This is intended, as the formulas are questions for a [quiz](crate::quiz).
//!
//! ```rust
//! # use rand::{rngs::StdRng, SeedableRng};
//! # use wff_quiz::config::GeneratorConfig;
//! # use wff_quiz::generator::generate;
//! let mut rng = StdRng::seed_from_u64(7);
//! let formula = generate(2, 2, &GeneratorConfig::default(), &mut rng).unwrap();
//! assert!(formula.starts_with('('));
//! ```

use rand::Rng;

use crate::{
    config::{ConnectiveWeights, GeneratorConfig},
    misc::log::targets::{self},
    procedures::validate::is_well_formed,
    types::err::{self},
};

/// A formula, and whether the formula is well formed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Question {
    pub formula: String,
    pub answer: bool,
}

/// Generates a formula of `groups` groups with literals drawn relative to `args`.
pub fn generate(
    groups: usize,
    args: usize,
    config: &GeneratorConfig,
    rng: &mut impl Rng,
) -> Result<String, err::GenerateError> {
    config.check()?;

    if groups == 0 || args == 0 {
        return Err(err::GenerateError::ZeroCount);
    }
    if args + 1 > config.alphabet.len() {
        return Err(err::GenerateError::AlphabetExhausted);
    }

    let mut formula = String::default();

    for index in 0..groups {
        let last = index + 1 == groups;
        if !last {
            formula.push('(');
        }

        let literal_count = args - rng.gen_range(1..=args) + 2;
        formula.push_str(&generate_group(literal_count, config, rng));

        if !last {
            push_connective(&mut formula, &config.outer, rng);
        }
    }

    for _ in 1..groups {
        formula.push(')');
    }

    log::trace!(target: targets::GENERATOR, "Generated {formula}");
    Ok(formula)
}

fn generate_group(literal_count: usize, config: &GeneratorConfig, rng: &mut impl Rng) -> String {
    let mut group = String::default();

    for (index, name) in config.alphabet.iter().take(literal_count).enumerate() {
        let last = index + 1 == literal_count;
        if !last {
            group.push('(');
        }

        match rng.gen_bool(config.negation_chance) {
            true => {
                group.push_str("(!");
                group.push(*name);
                group.push(')');
            }
            false => group.push(*name),
        }

        if !last {
            push_connective(&mut group, &config.inner, rng);
        }
    }

    for _ in 1..literal_count {
        group.push(')');
    }

    group
}

fn push_connective(formula: &mut String, weights: &ConnectiveWeights, rng: &mut impl Rng) {
    let connective = weights.connective(rng.gen::<f64>());
    formula.push_str(&connective.to_string());
}

/// Generates a question, with a count of arguments drawn from `1..=max_args` and a count of groups from `1..=2^args`.
pub fn generate_question(
    config: &GeneratorConfig,
    rng: &mut impl Rng,
) -> Result<Question, err::GenerateError> {
    config.check()?;

    let args = rng.gen_range(1..=config.max_args.value);
    let group_limit = u32::try_from(args)
        .ok()
        .and_then(|shift| 1_usize.checked_shl(shift))
        .ok_or(err::GenerateError::AlphabetExhausted)?;
    let groups = rng.gen_range(1..=group_limit);

    let formula = generate(groups, args, config, rng)?;
    let answer = is_well_formed(&formula);

    log::debug!(target: targets::GENERATOR, "Question {formula} with answer {answer}");
    Ok(Question { formula, answer })
}

#[cfg(test)]
mod generator_tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn only(connective: char) -> ConnectiveWeights {
        let mut weights = ConnectiveWeights {
            or: 0.0,
            and: 0.0,
            equiv: 0.0,
            implies: 0.0,
        };
        match connective {
            '|' => weights.or = 1.0,
            '&' => weights.and = 1.0,
            _ => panic!("unexpected connective"),
        }
        weights
    }

    #[test]
    fn shape_without_chance() {
        let config = GeneratorConfig {
            inner: only('|'),
            outer: only('&'),
            negation_chance: 0.0,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(0);

        // With one argument every group has exactly two literals.
        let formula = generate(3, 1, &config, &mut rng).unwrap();
        assert_eq!(formula, "((A|B)&((A|B)&(A|B)))");
    }

    #[test]
    fn negation_is_wrapped() {
        let config = GeneratorConfig {
            inner: only('|'),
            negation_chance: 1.0,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(0);

        assert_eq!(generate(1, 1, &config, &mut rng).unwrap(), "((!A)|(!B))");
    }

    #[test]
    fn counts() {
        let config = GeneratorConfig::default();
        let mut rng = StdRng::seed_from_u64(0);

        assert_eq!(generate(0, 1, &config, &mut rng), Err(err::GenerateError::ZeroCount));
        assert_eq!(generate(1, 0, &config, &mut rng), Err(err::GenerateError::ZeroCount));
        assert_eq!(
            generate(1, 4, &config, &mut rng),
            Err(err::GenerateError::AlphabetExhausted)
        );
    }

    #[test]
    fn unchecked_config_is_an_error() {
        let mut rng = StdRng::seed_from_u64(0);

        let config = GeneratorConfig {
            negation_chance: 1.5,
            ..Default::default()
        };
        assert_eq!(
            generate(1, 1, &config, &mut rng),
            Err(err::GenerateError::Config(err::ConfigError::OutOfBounds("negation_chance")))
        );

        let mut config = GeneratorConfig::default();
        config.max_args.value = 70;
        assert_eq!(
            generate_question(&config, &mut rng),
            Err(err::GenerateError::Config(err::ConfigError::OutOfBounds("max_args")))
        );

        // Within the bounds of the option, though beyond the alphabet.
        let mut config = GeneratorConfig::default();
        config.alphabet.truncate(2);
        config.max_args.value = 2;
        assert_eq!(
            generate_question(&config, &mut rng),
            Err(err::GenerateError::Config(err::ConfigError::OutOfBounds("max_args")))
        );

        let mut config = GeneratorConfig::default();
        config.inner.or = 0.5;
        assert_eq!(
            generate(1, 1, &config, &mut rng),
            Err(err::GenerateError::Config(err::ConfigError::Weights))
        );
    }
}
