//! A quiz on whether generated formulas are well formed.
//!
//! # Overview
//!
//! A quiz is a [Session] of a fixed count of questions.
//! For each question a formula is [generated](crate::generator), shown on some [Surface], and a true/false answer is read from the surface.
//! The answer is compared with a [validation](crate::procedures::validate) made when the question was generated.
//!
//! After the last question the score, `10 × correct / total`, is shown.
//!
//! The state of a quiz is held in the session, and a fresh session is made for each quiz.
//! [run] drives a session over a surface, though a session may also be driven directly:
//!
//! ```rust
//! # use wff_quiz::generator::Question;
//! # use wff_quiz::quiz::Session;
//! let mut session = Session::new(2);
//!
//! session.begin(Question { formula: "(A|B)&(A|B)".to_string(), answer: false });
//! assert!(session.answer(false).is_some_and(|verdict| verdict.correct));
//! session.advance();
//!
//! session.begin(Question { formula: "(A|(!B))&(B|(!A))".to_string(), answer: true });
//! assert!(session.answer(false).is_some_and(|verdict| !verdict.correct));
//! session.advance();
//!
//! assert!(session.is_finished());
//! assert_eq!(session.score().value(), 5.0);
//! ```

use rand::Rng;

use crate::{
    config::Config,
    generator::{generate_question, Question},
    misc::log::targets::{self},
    types::err::{self},
};

/// The outcome of answering a question.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Verdict {
    /// Whether the answer given was correct.
    pub correct: bool,

    /// Whether the formula was well formed.
    pub answer: bool,
}

/// The count of correct answers of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
}

impl Score {
    /// The score out of ten.
    pub fn value(&self) -> f64 {
        match self.total {
            0 => 0.0,
            total => 10.0 * self.correct as f64 / total as f64,
        }
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}", self.value())
    }
}

/// The state of a quiz.
#[derive(Clone, Debug)]
pub struct Session {
    length: usize,
    index: usize,
    correct: usize,
    current: Option<Question>,
    answered: bool,
}

impl Session {
    pub fn new(length: usize) -> Self {
        Session {
            length,
            index: 0,
            correct: 0,
            current: None,
            answered: false,
        }
    }

    /// Returns the session to the state it was created in.
    pub fn reset(&mut self) {
        *self = Session::new(self.length);
    }

    /// Poses a question.
    pub fn begin(&mut self, question: Question) {
        self.current = Some(question);
        self.answered = false;
    }

    pub fn current(&self) -> Option<&Question> {
        self.current.as_ref()
    }

    /// Answers the current question, if there is an unanswered question.
    pub fn answer(&mut self, guess: bool) -> Option<Verdict> {
        if self.answered {
            return None;
        }
        let question = self.current.as_ref()?;

        let verdict = Verdict {
            correct: guess == question.answer,
            answer: question.answer,
        };
        if verdict.correct {
            self.correct += 1;
        }
        self.answered = true;

        log::debug!(target: targets::QUIZ, "Question {} answered {guess}: {verdict:?}", self.number());
        Some(verdict)
    }

    /// Moves to the next question.
    pub fn advance(&mut self) {
        if self.index < self.length {
            self.index += 1;
        }
        self.current = None;
        self.answered = false;
    }

    pub fn is_finished(&self) -> bool {
        self.index >= self.length
    }

    /// The number of the current question, from one.
    pub fn number(&self) -> usize {
        self.index + 1
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn correct(&self) -> usize {
        self.correct
    }

    pub fn score(&self) -> Score {
        Score {
            correct: self.correct,
            total: self.length,
        }
    }
}

/// Somewhere to show questions, and from which to read answers.
pub trait Surface {
    /// Shows question `number` of `total`.
    fn show_question(&mut self, number: usize, total: usize, formula: &str) -> std::io::Result<()>;

    /// Reads whether the current formula is well formed.
    fn read_answer(&mut self) -> std::io::Result<bool>;

    fn show_verdict(&mut self, verdict: &Verdict) -> std::io::Result<()>;

    fn show_score(&mut self, score: &Score) -> std::io::Result<()>;
}

/// Runs a quiz on a surface, returning the score.
pub fn run(
    config: &Config,
    rng: &mut impl Rng,
    surface: &mut impl Surface,
) -> Result<Score, err::QuizError> {
    config.generator.check()?;

    let mut session = Session::new(config.quiz.questions.value);

    while !session.is_finished() {
        let question = generate_question(&config.generator, rng)?;
        surface.show_question(session.number(), session.length(), &question.formula)?;
        session.begin(question);

        let guess = surface.read_answer()?;
        if let Some(verdict) = session.answer(guess) {
            surface.show_verdict(&verdict)?;
        }

        session.advance();
    }

    let score = session.score();
    log::info!(target: targets::QUIZ, "Scored {score} ({} of {})", score.correct, score.total);
    surface.show_score(&score)?;

    Ok(score)
}
