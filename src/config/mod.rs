/*!
Configuration of the generator and of a quiz.

The validator has no configuration, as the grammar of a formula is fixed.

Numeric options which are set from the command line are [ConfigOption]s, and so carry their bounds.
Defaults are in [defaults].
*/

mod config_option;
pub use config_option::ConfigOption;

pub mod defaults;

use crate::{
    structures::token::Token,
    types::err::{self},
};

/// The primary configuration structure.
#[derive(Clone, Debug, Default)]
pub struct Config {
    pub generator: GeneratorConfig,
    pub quiz: QuizConfig,
}

/// Configuration of the [generator](crate::generator).
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    /// The variables used, in order of use.
    pub alphabet: Vec<char>,

    /// Weights of the connectives between the literals of a group.
    pub inner: ConnectiveWeights,

    /// Weights of the connectives between groups.
    pub outer: ConnectiveWeights,

    /// The probability of negating a literal.
    pub negation_chance: f64,

    /// The largest count of arguments drawn for a question.
    /// A group has at most one more literal than this, and so the bound is one less than the size of the alphabet.
    pub max_args: ConfigOption<usize>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        use defaults::*;
        GeneratorConfig {
            alphabet: ALPHABET.to_vec(),
            inner: INNER_WEIGHTS,
            outer: OUTER_WEIGHTS,
            negation_chance: NEGATION_CHANCE,
            max_args: ConfigOption {
                name: "max_args",
                min: 1,
                max: ALPHABET.len() - 1,
                value: MAX_ARGS,
            },
        }
    }
}

impl GeneratorConfig {
    /// Checks the weights and probabilities of the configuration, and that `max_args` fits the alphabet.
    pub fn check(&self) -> Result<(), err::ConfigError> {
        self.inner.check()?;
        self.outer.check()?;
        if !(0.0..=1.0).contains(&self.negation_chance) {
            return Err(err::ConfigError::OutOfBounds("negation_chance"));
        }

        let (min, max) = self.max_args.min_max();
        let args = self.max_args.value;
        if args < min || args > max || args >= self.alphabet.len() {
            return Err(err::ConfigError::OutOfBounds(self.max_args.name));
        }
        Ok(())
    }
}

/// Configuration of a [quiz](crate::quiz).
#[derive(Clone, Debug)]
pub struct QuizConfig {
    /// The count of questions in a session.
    pub questions: ConfigOption<usize>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        QuizConfig {
            questions: ConfigOption {
                name: "questions",
                min: 1,
                max: defaults::QUESTIONS_MAX,
                value: defaults::QUESTIONS,
            },
        }
    }
}

/// The probability of drawing each connective.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConnectiveWeights {
    pub or: f64,
    pub and: f64,
    pub equiv: f64,
    pub implies: f64,
}

impl ConnectiveWeights {
    /// Checks each weight is non-negative and the weights sum to one.
    pub fn check(&self) -> Result<(), err::ConfigError> {
        let weights = [self.or, self.and, self.equiv, self.implies];
        let total: f64 = weights.iter().sum();

        match weights.iter().all(|weight| *weight >= 0.0) && (total - 1.0).abs() < 1e-9 {
            true => Ok(()),
            false => Err(err::ConfigError::Weights),
        }
    }

    /// The connective for a draw from `[0, 1)`.
    ///
    /// The interval is divided from the top, in the order `|`, `&`, `~`, with `->` at the bottom.
    ///
    /// ```rust
    /// # use wff_quiz::config::defaults::INNER_WEIGHTS;
    /// # use wff_quiz::structures::token::Token;
    /// assert_eq!(INNER_WEIGHTS.connective(0.2), Token::Or);
    /// assert_eq!(INNER_WEIGHTS.connective(0.15), Token::And);
    /// assert_eq!(INNER_WEIGHTS.connective(0.05), Token::Equiv);
    /// assert_eq!(INNER_WEIGHTS.connective(0.01), Token::Implies);
    /// ```
    pub fn connective(&self, draw: f64) -> Token {
        let or_floor = 1.0 - self.or;
        let and_floor = or_floor - self.and;

        if draw >= or_floor {
            Token::Or
        } else if draw >= and_floor {
            Token::And
        } else if draw >= self.implies {
            Token::Equiv
        } else {
            Token::Implies
        }
    }
}

impl std::fmt::Display for ConnectiveWeights {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "| {:.2}, & {:.2}, ~ {:.2}, -> {:.2}",
            self.or, self.and, self.equiv, self.implies
        )
    }
}
