/*!
Miscellaneous items related to [logging](log).

Calls to the log macro are made throughout the library, mostly to trace which rule classified a formula.

Note, no log implementation is provided by the library.
The binary installs one when built with the `log` feature.
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [tokenizing](crate::procedures::lex)
    pub const LEXER: &str = "lexer";

    /// Logs related to the [syntax rules](crate::procedures::syntax)
    pub const SYNTAX: &str = "syntax";

    /// Logs related to [normalization](crate::procedures::debrace)
    pub const NORMALIZE: &str = "normalize";

    /// Logs related to [brace pairing](crate::procedures::braces) and [groups](crate::procedures::decompose)
    pub const GROUPS: &str = "groups";

    /// Logs related to [literal sets](crate::procedures::symmetry)
    pub const SYMMETRY: &str = "symmetry";

    /// Logs related to the [generator](crate::generator)
    pub const GENERATOR: &str = "generator";

    /// Logs related to a [quiz](crate::quiz)
    pub const QUIZ: &str = "quiz";
}
