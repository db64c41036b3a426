//! Interactive entry of deck parameters.

use std::io::{BufRead, Write};

use anyhow::{bail, Context};

use crate::deck::DeckParameters;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Answer {
    Value(u32),
    Retry,
}

/// Empty input takes the default.
pub fn parse_answer(line: &str, default: u32) -> Answer {
    let line = line.trim();
    if line.is_empty() {
        return Answer::Value(default);
    }
    match line.parse() {
        Ok(n) => Answer::Value(n),
        Err(_) => Answer::Retry,
    }
}

/// Asks one question until it gets a number back.
pub fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
    default: u32,
) -> anyhow::Result<u32> {
    loop {
        write!(output, "{question}/{default}: ")?;
        output.flush()?;
        let mut line = String::new();
        let read = input
            .read_line(&mut line)
            .with_context(|| format!("reading {question}"))?;
        if read == 0 {
            bail!("input closed before {question} was given");
        }
        match parse_answer(&line, default) {
            Answer::Value(n) => return Ok(n),
            Answer::Retry => {
                log::warn!("{:?} is not a whole number", line.trim());
                writeln!(output, "Please enter a whole number.")?;
            }
        }
    }
}

pub fn ask_deck<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    defaults: DeckParameters,
) -> anyhow::Result<DeckParameters> {
    let rank = ask(input, output, "Number of ranks", defaults.rank)?;
    let suit = ask(input, output, "Number of suits", defaults.suit)?;
    let duplicate = ask(input, output, "Copies of each card", defaults.duplicate)?;
    let hand_size = ask(input, output, "Cards in a hand", defaults.hand_size)?;
    Ok(DeckParameters::new(rank, suit, duplicate, hand_size))
}
