use std::io::{BufRead, Write};

use crossterm::{
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
};

use wff_quiz::quiz::{Score, Surface, Verdict};

pub const WELL_FORMED: Color = Color::Rgb {
    r: 0xb9,
    g: 0xfd,
    b: 0xc5,
};

pub const MALFORMED: Color = Color::Rgb {
    r: 0xee,
    g: 0xbe,
    b: 0xbe,
};

/// Writes `text` in `color`, followed by a newline.
pub fn print_colored(out: &mut impl Write, color: Color, text: &str) -> std::io::Result<()> {
    queue!(out, SetForegroundColor(color), Print(text), ResetColor, Print("\n"))?;
    out.flush()
}

/// A quiz on a terminal, with answers read a line at a time.
pub struct TerminalSurface<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalSurface<R, W> {
    pub fn new(input: R, output: W) -> Self {
        TerminalSurface { input, output }
    }
}

impl<R: BufRead, W: Write> Surface for TerminalSurface<R, W> {
    fn show_question(&mut self, number: usize, total: usize, formula: &str) -> std::io::Result<()> {
        queue!(
            self.output,
            Print(format!("\nQuestion {number} of {total}\n")),
            SetAttribute(Attribute::Bold),
            Print(formula),
            SetAttribute(Attribute::Reset),
            Print("\nWell formed? [t/f] ")
        )?;
        self.output.flush()
    }

    fn read_answer(&mut self) -> std::io::Result<bool> {
        let mut buffer = String::default();
        loop {
            buffer.clear();
            if self.input.read_line(&mut buffer)? == 0 {
                return Err(std::io::Error::from(std::io::ErrorKind::UnexpectedEof));
            }

            match buffer.trim().to_lowercase().as_str() {
                "t" | "true" | "y" | "yes" => return Ok(true),
                "f" | "false" | "n" | "no" => return Ok(false),
                _ => {
                    write!(self.output, "Answer t or f: ")?;
                    self.output.flush()?;
                }
            }
        }
    }

    fn show_verdict(&mut self, verdict: &Verdict) -> std::io::Result<()> {
        let (color, text) = match verdict.correct {
            true => (WELL_FORMED, "Correct"),
            false => (MALFORMED, "Incorrect"),
        };
        let shape = match verdict.answer {
            true => "well formed",
            false => "not well formed",
        };
        print_colored(&mut self.output, color, &format!("{text}, the formula is {shape}."))
    }

    fn show_score(&mut self, score: &Score) -> std::io::Result<()> {
        queue!(
            self.output,
            Print(format!(
                "\n{} of {} correct, score: ",
                score.correct, score.total
            )),
            SetAttribute(Attribute::Bold),
            Print(score.to_string()),
            SetAttribute(Attribute::Reset),
            Print("\n")
        )?;
        self.output.flush()
    }
}
