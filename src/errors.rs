use crate::grammar::{NonTerminal, Terminal};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum Error {
    #[error("grammar is not LL(1): duplicate production for non-terminal {state} with lookahead '{terminal}'")]
    DuplicateTransition { state: NonTerminal, terminal: Terminal },

    #[error("no input supplied")]
    EmptyInput,

    #[error("incomplete derivation: {stack} symbol(s) left on the stack, {input} input symbol(s) left")]
    IncompleteDerivation { stack: usize, input: usize },

    #[error("no production for non-terminal {state} with lookahead '{terminal}'")]
    NoProduction { state: NonTerminal, terminal: Terminal },

    #[error("failed to match terminal at position {position}: expected '{expected}', got '{found}'")]
    TerminalMismatch {
        expected: Terminal,
        found: Terminal,
        position: usize,
    },

    #[error("unknown input symbol '{}' at position {position}", .character.escape_default())]
    UnknownInputSymbol { character: char, position: usize },
}
