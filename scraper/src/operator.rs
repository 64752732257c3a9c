use std::io::{self, BufRead, StdinLock, Stdout, Write};

use log::warn;

use crate::driver::ScrapeRange;
use crate::error::{Result, ScrapeError};

/// The person at the terminal, asked to pick a range or resume one.
pub trait Operator {
    fn ask_range(&mut self) -> Result<ScrapeRange>;
    fn confirm_resume(&mut self, last_processed: u64) -> Result<bool>;
}

/// Text prompts over any reader/writer pair.
pub struct PromptOperator<R, W> {
    input: R,
    output: W,
}

impl PromptOperator<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        PromptOperator::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> PromptOperator<R, W> {
    pub fn new(input: R, output: W) -> Self {
        PromptOperator { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ScrapeError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    fn ask_number(&mut self, question: &str) -> Result<u64> {
        loop {
            let answer = self.prompt(question)?;
            match answer.parse::<u64>() {
                Ok(number) => return Ok(number),
                Err(_) => writeln!(self.output, "Invalid number: {:?}", answer)?,
            }
        }
    }
}

impl<R: BufRead, W: Write> Operator for PromptOperator<R, W> {
    fn ask_range(&mut self) -> Result<ScrapeRange> {
        let start = self.ask_number("Enter the starting number: ")?;
        let end = self.ask_number("Enter the ending number: ")?;
        if start > end {
            warn!("Starting number {} is after ending number {}", start, end);
        }
        Ok(ScrapeRange { start, end })
    }

    fn confirm_resume(&mut self, last_processed: u64) -> Result<bool> {
        writeln!(
            self.output,
            "Existing progress found. Last processed: {}",
            last_processed
        )?;
        let answer = self
            .prompt("Do you want to continue from the last progress? (y/n): ")?
            .to_lowercase();
        Ok(answer == "y" || answer == "yes")
    }
}
