#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use std::io::Write;

use clap::{CommandFactory, Parser};
use rand::{rngs::StdRng, SeedableRng};

use wff_quiz::{
    config::GeneratorConfig,
    generator::generate,
    quiz::{self},
    status_code,
    types::err::{self},
};

mod messages;
mod parse;
mod terminal;

use parse::{Args, Command};
use terminal::{print_colored, TerminalSurface, MALFORMED, WELL_FORMED};

fn main() {
    #[cfg(feature = "log")]
    init_logging();

    let args = Args::parse();

    if args.markdown_help {
        clap_markdown::print_help_markdown::<Args>();
        return;
    }

    match args.command {
        None => {
            if Args::command().print_help().is_err() {
                std::process::exit(2);
            }
        }

        Some(Command::Check { formulas, quiet }) => {
            let all_well_formed = check(&formulas, quiet);
            std::process::exit(if all_well_formed { 0 } else { 1 });
        }

        Some(Command::Generate {
            groups,
            args,
            count,
            seed,
            answers,
        }) => {
            let config = GeneratorConfig::default();
            let mut rng = rng_from(seed);

            for _ in 0..count {
                match generate(groups, args, &config, &mut rng) {
                    Ok(formula) if answers => println!("{formula} {}", status_code(&formula)),
                    Ok(formula) => println!("{formula}"),
                    Err(e) => {
                        println!("Failed to generate: {e:?}");
                        std::process::exit(1);
                    }
                }
            }
        }

        Some(Command::Quiz {
            questions,
            max_args,
            seed,
        }) => {
            let config = parse::config_from_quiz(questions, max_args);
            let mut rng = rng_from(seed);

            let stdin = std::io::stdin();
            let mut surface = TerminalSurface::new(stdin.lock(), std::io::stdout());

            match quiz::run(&config, &mut rng, &mut surface) {
                Ok(_) => {}
                Err(err::QuizError::Surface(e))
                    if e.kind() == std::io::ErrorKind::UnexpectedEof =>
                {
                    println!("\nQuiz abandoned.");
                }
                Err(e) => {
                    println!("Quiz error: {e:?}");
                    std::process::exit(2);
                }
            }
        }
    }
}

/// Prints the status of each formula, returning whether every formula is well formed.
fn check(formulas: &[String], quiet: bool) -> bool {
    let mut stdout = std::io::stdout();
    let mut all_well_formed = true;

    for formula in formulas {
        let code = status_code(formula);
        all_well_formed &= code == 0;

        let written = match quiet {
            true => writeln!(stdout, "{code}"),
            false => {
                let color = if code == 0 { WELL_FORMED } else { MALFORMED };
                let line = format!("{formula} {code} {}", messages::message(code));
                print_colored(&mut stdout, color, &line)
            }
        };

        if written.is_err() {
            std::process::exit(2);
        }
    }

    all_well_formed
}

fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

#[cfg(feature = "log")]
fn init_logging() {
    use log4rs::{
        append::console::{ConsoleAppender, Target},
        config::{Appender, Config, Root},
        encode::pattern::PatternEncoder,
    };

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{l} {t} - {m}{n}")))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(log::LevelFilter::Trace));

    match config {
        Ok(config) => {
            if let Err(e) = log4rs::init_config(config) {
                eprintln!("Failed to start logging: {e}");
            }
        }
        Err(e) => eprintln!("Failed to configure logging: {e}"),
    }
}
