use crate::errors::{Error, Result};
use crate::grammar::Terminal;

/// A left-to-right cursor over tokenized input, terminated by the
/// end-of-input marker
pub struct Reader {
    input: Vec<Terminal>,
    cursor: usize,
}

impl Reader {
    /// Classifies every character of the input and appends the end-of-input
    /// marker. Fails on the first character outside the alphabet.
    pub fn new(input: &str) -> Result<Reader> {
        let mut terminals = Vec::with_capacity(input.len() + 1);

        for (i, c) in input.chars().enumerate() {
            let Some(t) = Terminal::from_char(c) else {
                return Err(Error::UnknownInputSymbol {
                    character: c,
                    position: i + 1,
                });
            };
            terminals.push(t);
        }
        terminals.push(Terminal::EndOfInput);

        Ok(Reader {
            input: terminals,
            cursor: 0,
        })
    }

    /// Returns the next input terminal without consuming it
    pub fn lookahead(&self) -> Option<Terminal> {
        self.input.get(self.cursor).copied()
    }

    /// Consumes and returns the next input terminal
    pub fn next(&mut self) -> Option<Terminal> {
        let lookahead = self.lookahead();
        if lookahead.is_some() {
            self.cursor += 1;
        }

        lookahead
    }

    /// Returns the 1-based position of the next input terminal
    pub fn position(&self) -> usize {
        self.cursor + 1
    }

    /// Returns the input not yet consumed
    pub fn remaining(&self) -> &[Terminal] {
        &self.input[self.cursor..]
    }

    pub fn is_empty(&self) -> bool {
        self.cursor >= self.input.len()
    }
}
