//! Error types used in the library.
//!
//! - [ErrorKind] is the classification of a formula which is not well formed.
//!   These are expected outcomes of a validation rather than failures, and each names exactly one violated rule.
//! - The remaining enums are errors of the generator, the configuration, and the quiz.
//!
//! Names of the error enums are often used with a prefix, and so throughout the library err::{self} is used to write `err::ErrorKind`, etc.

/// The rule a formula violates.
///
/// The discriminants are stable and are used as status codes, with `0` reserved for a well-formed formula.
/// The code 13 is reserved and no rule produces it.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorKind {
    /// A character outside of `A`–`Z`, `(`, `)`, `|`, `&`, `!`, `~`, `0`, `1`, and `->`.
    IllegalCharacter = 1,

    /// Top-level groups joined by something other than `&`.
    TopLevelConnective = 2,

    /// Two groups with a different count of literals.
    GroupSizeMismatch = 3,

    /// Two groups with the same literals in the same order.
    DuplicateGroup = 4,

    /// The formula ends without a variable or closing parenthesis.
    MalformedEnd = 5,

    /// Two variables without a connective between them.
    UnseparatedVariables = 6,

    /// The formula starts without an opening parenthesis.
    MalformedStart = 7,

    /// Two groups over different variables, or two groups which are the same up to order.
    LiteralSetMismatch = 8,

    /// More opening than closing parentheses.
    UnclosedBrace = 9,

    /// A negation not isolated by parentheses.
    NegationPlacement = 10,

    /// An empty formula.
    Empty = 11,

    /// A negation applied to a parenthesised group.
    GroupNegation = 12,

    /// Two groups without a connective between them.
    AdjacentGroups = 14,

    /// A group which is not a disjunction of distinct single-character variables.
    MalformedGroup = 15,

    /// A single group of one or two literals.
    TrivialGroup = 16,

    /// More closing than opening parentheses.
    UnopenedBrace = 17,

    /// A connective between bare variables, outside of a group.
    BareConnective = 18,

    /// A constant `0` or `1`.
    DigitLiteral = 19,
}

impl ErrorKind {
    /// Every kind, in order of discriminant.
    pub const ALL: [ErrorKind; 18] = [
        ErrorKind::IllegalCharacter,
        ErrorKind::TopLevelConnective,
        ErrorKind::GroupSizeMismatch,
        ErrorKind::DuplicateGroup,
        ErrorKind::MalformedEnd,
        ErrorKind::UnseparatedVariables,
        ErrorKind::MalformedStart,
        ErrorKind::LiteralSetMismatch,
        ErrorKind::UnclosedBrace,
        ErrorKind::NegationPlacement,
        ErrorKind::Empty,
        ErrorKind::GroupNegation,
        ErrorKind::AdjacentGroups,
        ErrorKind::MalformedGroup,
        ErrorKind::TrivialGroup,
        ErrorKind::UnopenedBrace,
        ErrorKind::BareConnective,
        ErrorKind::DigitLiteral,
    ];

    /// The status code of the kind.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// The kind with the given status code, if any.
    ///
    /// ```rust
    /// # use wff_quiz::types::err::ErrorKind;
    /// assert_eq!(ErrorKind::from_code(4), Some(ErrorKind::DuplicateGroup));
    /// assert_eq!(ErrorKind::from_code(13), None);
    /// assert_eq!(ErrorKind::from_code(0), None);
    /// ```
    pub fn from_code(code: u8) -> Option<Self> {
        ErrorKind::ALL.into_iter().find(|kind| kind.code() == code)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?} ({})", self.code())
    }
}

/// Errors when generating a formula.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GenerateError {
    /// A request for zero groups or zero arguments.
    ZeroCount,

    /// More variables were required than the alphabet provides.
    AlphabetExhausted,

    /// The generator configuration failed its check.
    Config(ConfigError),
}

impl From<ConfigError> for GenerateError {
    fn from(e: ConfigError) -> Self {
        GenerateError::Config(e)
    }
}

/// Errors when configuring the generator or the quiz.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// A value outside the bounds of the named option.
    OutOfBounds(&'static str),

    /// Connective weights which are negative or do not sum to one.
    Weights,
}

/// Errors during a quiz.
#[derive(Debug)]
pub enum QuizError {
    Generate(GenerateError),
    Config(ConfigError),

    /// The surface failed to read or write.
    Surface(std::io::Error),
}

impl From<GenerateError> for QuizError {
    fn from(e: GenerateError) -> Self {
        QuizError::Generate(e)
    }
}

impl From<ConfigError> for QuizError {
    fn from(e: ConfigError) -> Self {
        QuizError::Config(e)
    }
}

impl From<std::io::Error> for QuizError {
    fn from(e: std::io::Error) -> Self {
        QuizError::Surface(e)
    }
}
