use crate::config::ConnectiveWeights;

/// The variables of a generated formula, in order of use.
pub const ALPHABET: [char; 4] = ['A', 'B', 'C', 'D'];

/// Connectives between the literals of a group.
pub const INNER_WEIGHTS: ConnectiveWeights = ConnectiveWeights {
    or: 0.8,
    and: 0.1,
    equiv: 0.05,
    implies: 0.05,
};

/// Connectives between groups.
pub const OUTER_WEIGHTS: ConnectiveWeights = ConnectiveWeights {
    or: 0.7,
    and: 0.1,
    equiv: 0.1,
    implies: 0.1,
};

pub const NEGATION_CHANCE: f64 = 0.5;

pub const MAX_ARGS: usize = 3;

pub const QUESTIONS: usize = 10;
pub const QUESTIONS_MAX: usize = 100;
