use crate::grammar::{NonTerminal, Symbol, Terminal};

/// The symbol stack of the pushdown automaton. The top of the stack is the
/// end of the underlying vector.
pub struct Stack {
    elements: Vec<Symbol>,
}

impl Stack {
    /// Creates a new stack holding the end-of-input marker with the start
    /// state above it
    pub fn new(start: NonTerminal) -> Stack {
        Stack {
            elements: vec![
                Symbol::Terminal(Terminal::EndOfInput),
                Symbol::NonTerminal(start),
            ],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns the symbol at the top of the stack
    pub fn peek(&self) -> Option<Symbol> {
        self.elements.last().copied()
    }

    /// Pops the symbol at the top of the stack
    pub fn pop(&mut self) -> Option<Symbol> {
        self.elements.pop()
    }

    /// Pushes the body of a production in reverse, so that its first symbol
    /// ends up on top
    pub fn push_body(&mut self, body: &[Symbol]) {
        self.elements.extend(body.iter().rev());
    }

    /// Returns the stack contents, bottom first
    pub fn symbols(&self) -> &[Symbol] {
        &self.elements
    }
}
