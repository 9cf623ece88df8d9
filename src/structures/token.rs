//! Tokens of a formula.
//!
//! A formula is read into a stream of tokens by the [lexer](crate::procedures::lex), and each rule of a validation is a predicate over (some part of) the stream.
//! Tokens are small and `Copy`, so streams are passed around as slices and rebuilt as vectors when a procedure rewrites them.
//!
//! ```rust
//! # use wff_quiz::procedures::lex::lex;
//! # use wff_quiz::structures::token::{render, Token};
//! let tokens = lex("(A->!B)").unwrap();
//! assert_eq!(tokens[2], Token::Implies);
//! assert_eq!(render(&tokens), "(A->!B)");
//! ```

/// A token of a formula.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Token {
    /// An uppercase ASCII letter.
    Variable(char),

    /// One of the (reserved) constants `0` or `1`.
    Digit(char),

    /// `!`
    Not,

    /// `|`
    Or,

    /// `&`
    And,

    /// `~`
    Equiv,

    /// `->`
    Implies,

    /// `(`
    Open,

    /// `)`
    Close,
}

impl Token {
    /// Whether the token is one of the four binary connectives.
    pub fn is_connective(&self) -> bool {
        matches!(self, Token::Or | Token::And | Token::Equiv | Token::Implies)
    }

    /// Whether the token is a variable or a constant.
    pub fn is_content(&self) -> bool {
        matches!(self, Token::Variable(_) | Token::Digit(_))
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Variable(c) | Self::Digit(c) => write!(f, "{c}"),
            Self::Not => write!(f, "!"),
            Self::Or => write!(f, "|"),
            Self::And => write!(f, "&"),
            Self::Equiv => write!(f, "~"),
            Self::Implies => write!(f, "->"),
            Self::Open => write!(f, "("),
            Self::Close => write!(f, ")"),
        }
    }
}

/// The source text of a stream of tokens.
pub fn render(tokens: &[Token]) -> String {
    tokens.iter().map(|token| token.to_string()).collect()
}
