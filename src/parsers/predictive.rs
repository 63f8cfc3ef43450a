use super::derivation::Derivation;
use super::reader::Reader;
use super::stack::Stack;
use super::trace::{Observer, Silent};
use crate::errors::{Error, Result};
use crate::grammar::{NonTerminal, Symbol, TransitionTable};

/// A table-driven pushdown automaton for LL(1) grammars
pub struct Parser<'t> {
    table: &'t TransitionTable,
}

impl<'t> Parser<'t> {
    /// Creates a new parser driven by the given transition table
    pub fn new(table: &'t TransitionTable) -> Parser<'t> {
        Parser { table }
    }

    /// Returns true if the input belongs to the language
    pub fn accepts(&self, input: &str) -> bool {
        self.parse(input).is_ok()
    }

    /// Parses an input string, returning the derivation on acceptance
    pub fn parse(&self, input: &str) -> Result<Derivation> {
        self.parse_traced(input, &mut Silent)
    }

    /// Parses an input string, passing a snapshot of the stack and the
    /// remaining input to the observer before the first step and after every
    /// step. Snapshots taken before an error remain valid history.
    pub fn parse_traced<O: Observer + ?Sized>(
        &self,
        input: &str,
        observer: &mut O,
    ) -> Result<Derivation> {
        // Algorithm adapted from Aho et al (2007) p.227, with the
        // end-of-input marker kept on the stack so that it must be matched
        // like any other terminal

        let mut reader = Reader::new(input)?;
        let mut stack = Stack::new(NonTerminal::START);
        let mut derivation = Derivation::new();

        observer.observe(stack.symbols(), reader.remaining());

        while let (Some(top), Some(lookahead)) = (stack.peek(), reader.lookahead()) {
            stack.pop();

            match top {
                // Push the body of the production selected by the lookahead
                // in reverse order, so that its first symbol comes off the
                // stack first
                Symbol::NonTerminal(state) => {
                    let body = self.table.lookup(state, lookahead)?;
                    stack.push_body(body);
                    derivation.push(state, body);
                }
                Symbol::Terminal(expected) => {
                    if expected != lookahead {
                        return Err(Error::TerminalMismatch {
                            expected,
                            found: lookahead,
                            position: reader.position(),
                        });
                    }
                    reader.next();
                }
                // An ϵ-production consumes a step but no input
                Symbol::Empty => (),
            }

            observer.observe(stack.symbols(), reader.remaining());
        }

        // The derivation is complete only if the stack and the input ran out
        // together
        if !stack.is_empty() || !reader.is_empty() {
            return Err(Error::IncompleteDerivation {
                stack: stack.len(),
                input: reader.remaining().len(),
            });
        }

        Ok(derivation)
    }
}
