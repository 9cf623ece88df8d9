use clap::{Parser, Subcommand};

use wff_quiz::config::{Config, ConfigOption};

/// Classify well-formed formulas, generate candidates, or take a quiz.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Print this help as markdown.
    #[arg(long, hide = true)]
    pub markdown_help: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Classify each formula, printing the status code and a message.
    ///
    /// Exits with 0 if every formula is well formed, and 1 otherwise.
    Check {
        /// The formulas to classify.
        #[arg(required = true)]
        formulas: Vec<String>,

        /// Print only the status codes.
        #[arg(short, long)]
        quiet: bool,
    },

    /// Generate candidate formulas.
    Generate {
        /// The count of top-level groups.
        #[arg(short, long, default_value_t = 2)]
        groups: usize,

        /// The count of arguments, each group has between 2 and args + 1 literals.
        #[arg(short, long, default_value_t = 2)]
        args: usize,

        /// The count of formulas to generate.
        #[arg(short, long, default_value_t = 1)]
        count: usize,

        /// Seed for the generator.
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print whether each formula is well formed.
        #[arg(long)]
        answers: bool,
    },

    /// Answer whether generated formulas are well formed.
    Quiz {
        /// The count of questions.
        #[arg(short, long)]
        questions: Option<usize>,

        /// The largest count of arguments drawn for a question.
        #[arg(short, long)]
        max_args: Option<usize>,

        /// Seed for the generator.
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

/// Updates the config with the options of a quiz.
///
/// If an option is out of bounds a message is sent and the process is terminated.
pub fn config_from_quiz(questions: Option<usize>, max_args: Option<usize>) -> Config {
    let mut config = Config::default();

    if let Some(value) = questions {
        set_or_exit(&mut config.quiz.questions, value);
    }

    if let Some(value) = max_args {
        set_or_exit(&mut config.generator.max_args, value);
    }

    config
}

fn set_or_exit(option: &mut ConfigOption<usize>, value: usize) {
    let (min, max) = option.min_max();
    match option.set(value) {
        Ok(()) => log::info!("{} set to: {value}", option.name),
        Err(_) => {
            println!("{} requires a value between {min} and {max}", option.name);
            std::process::exit(1);
        }
    }
}
