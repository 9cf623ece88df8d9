//! Messages for each status code.

/// Indexed by status code.
const MESSAGES: [&str; 20] = [
    "The formula is well formed.",
    "The formula contains a character outside of A-Z, (, ), |, &, !, ~, ->, 0 and 1.",
    "Groups may only be joined by &.",
    "Every group must have the same count of literals.",
    "Two groups are the same.",
    "The formula must end with a variable or a closing parenthesis.",
    "Two variables are not separated by a connective.",
    "The formula must begin with an opening parenthesis.",
    "Every group must be over the same variables, and no two groups may be the same up to order.",
    "A parenthesis is not closed.",
    "A negation must be wrapped in parentheses, as in (!A).",
    "The formula is empty.",
    "Only a variable may be negated, not a group.",
    "Reserved.",
    "Two groups are not joined by a connective.",
    "A group must be a disjunction of distinct variables.",
    "A formula of a single group of one or two variables is too simple.",
    "A parenthesis is closed without being opened.",
    "Connectives between bare variables must be inside a group.",
    "The constants 0 and 1 are not allowed.",
];

pub fn message(code: u8) -> &'static str {
    MESSAGES
        .get(code as usize)
        .copied()
        .unwrap_or("Unknown status code.")
}
