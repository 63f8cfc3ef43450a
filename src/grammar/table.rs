use super::{NonTerminal, Production, Symbol, Terminal};
use crate::errors::{Error, Result};
use prettytable::{Cell, Row, Table};
use std::collections::HashMap;
use std::fmt;

/// An LL(1) transition table, mapping a non-terminal and a lookahead
/// terminal to the body of the production to expand it with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionTable {
    transitions: HashMap<(NonTerminal, Terminal), Vec<Symbol>>,
}

impl TransitionTable {
    /// Returns the table for the expression grammar:
    ///
    /// ```text
    /// A → B D
    /// D → - B D | ϵ
    /// B → C E
    /// E → * C E | ϵ
    /// C → a | b | c | ( A )
    /// ```
    pub fn new() -> TransitionTable {
        use NonTerminal::{A, B, C, D, E};
        use Terminal::*;

        let nt = Symbol::NonTerminal;
        let t = Symbol::Terminal;

        let mut entries = Vec::new();

        for lookahead in [IdentA, IdentB, IdentC, OpenParen] {
            entries.push((A, lookahead, vec![nt(B), nt(D)]));
            entries.push((B, lookahead, vec![nt(C), nt(E)]));
        }

        entries.push((D, Minus, vec![t(Minus), nt(B), nt(D)]));
        for lookahead in [CloseParen, EndOfInput] {
            entries.push((D, lookahead, vec![Symbol::Empty]));
        }

        entries.push((E, Star, vec![t(Star), nt(C), nt(E)]));
        for lookahead in [Minus, CloseParen, EndOfInput] {
            entries.push((E, lookahead, vec![Symbol::Empty]));
        }

        for ident in [IdentA, IdentB, IdentC] {
            entries.push((C, ident, vec![t(ident)]));
        }
        entries.push((C, OpenParen, vec![t(OpenParen), nt(A), t(CloseParen)]));

        TransitionTable {
            transitions: entries
                .into_iter()
                .map(|(state, lookahead, body)| ((state, lookahead), body))
                .collect(),
        }
    }

    /// Creates a table from arbitrary entries. Fails if two entries share a
    /// key, since the lookahead would no longer select a unique production.
    pub fn from_entries<I>(entries: I) -> Result<TransitionTable>
    where
        I: IntoIterator<Item = (NonTerminal, Terminal, Vec<Symbol>)>,
    {
        let mut transitions = HashMap::new();

        for (state, terminal, body) in entries {
            if transitions.insert((state, terminal), body).is_some() {
                return Err(Error::DuplicateTransition { state, terminal });
            }
        }

        Ok(TransitionTable { transitions })
    }

    /// Returns the production body to push for a non-terminal under the given
    /// lookahead
    pub fn lookup(&self, state: NonTerminal, terminal: Terminal) -> Result<&[Symbol]> {
        self.transitions
            .get(&(state, terminal))
            .map(Vec::as_slice)
            .ok_or(Error::NoProduction { state, terminal })
    }

    /// Returns the number of entries in the table
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Returns all entries, sorted by non-terminal and then by terminal
    pub fn entries(&self) -> Vec<(NonTerminal, Terminal, &[Symbol])> {
        let mut entries: Vec<_> = self
            .transitions
            .iter()
            .map(|(&(state, terminal), body)| (state, terminal, body.as_slice()))
            .collect();
        entries.sort_by_key(|&(state, terminal, _)| (state, terminal));

        entries
    }

    /// Returns the distinct productions encoded by the table, grouped by head
    /// in non-terminal order, with the bodies of each head in order of first
    /// appearance across the terminals
    pub fn productions(&self) -> Vec<Production> {
        let mut productions: Vec<Production> = Vec::new();

        for (head, _, body) in self.entries() {
            let seen = productions
                .iter()
                .any(|p| p.head == head && p.body.as_slice() == body);
            if !seen {
                productions.push(Production {
                    head,
                    body: body.to_vec(),
                });
            }
        }

        productions
    }
}

impl Default for TransitionTable {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TransitionTable {
    /// Formats the table as a grid with a row per non-terminal and a column
    /// per terminal
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut table = Table::new();

        table.add_row(Row::new(
            std::iter::once(Cell::new(""))
                .chain(Terminal::ALL.iter().map(|t| Cell::new(&t.to_string())))
                .collect(),
        ));

        for state in NonTerminal::ALL {
            table.add_row(Row::new(
                std::iter::once(Cell::new(state.name()))
                    .chain(Terminal::ALL.iter().map(|&t| {
                        let text = match self.transitions.get(&(state, t)) {
                            Some(body) => super::format_symbols(body),
                            None => String::new(),
                        };
                        Cell::new(&text)
                    }))
                    .collect(),
            ));
        }

        write!(f, "{}", table)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use Terminal::*;

    #[test]
    fn test_lookup() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let table = TransitionTable::new();

        assert_eq!(
            table.lookup(NonTerminal::A, OpenParen)?,
            &[
                Symbol::NonTerminal(NonTerminal::B),
                Symbol::NonTerminal(NonTerminal::D)
            ]
        );
        assert_eq!(
            table.lookup(NonTerminal::C, OpenParen)?,
            &[
                Symbol::Terminal(OpenParen),
                Symbol::NonTerminal(NonTerminal::A),
                Symbol::Terminal(CloseParen)
            ]
        );
        assert_eq!(table.lookup(NonTerminal::E, Minus)?, &[Symbol::Empty]);
        assert_eq!(
            table.lookup(NonTerminal::A, EndOfInput),
            Err(Error::NoProduction {
                state: NonTerminal::A,
                terminal: EndOfInput
            })
        );
        assert_eq!(
            table.lookup(NonTerminal::D, Star),
            Err(Error::NoProduction {
                state: NonTerminal::D,
                terminal: Star
            })
        );

        Ok(())
    }

    #[test]
    fn test_fixture() {
        let table = TransitionTable::new();
        let rendered: Vec<String> = table
            .entries()
            .into_iter()
            .map(|(state, t, body)| format!("{state},{t} → {}", crate::grammar::format_symbols(body)))
            .collect();

        assert_eq!(
            rendered,
            vec![
                "A,a → BD",
                "A,b → BD",
                "A,c → BD",
                "A,( → BD",
                "B,a → CE",
                "B,b → CE",
                "B,c → CE",
                "B,( → CE",
                "C,a → a",
                "C,b → b",
                "C,c → c",
                "C,( → (A)",
                "D,- → -BD",
                "D,) → ϵ",
                "D,$ → ϵ",
                "E,- → ϵ",
                "E,* → *CE",
                "E,) → ϵ",
                "E,$ → ϵ",
            ]
        );
        assert_eq!(table.len(), 19);
    }

    #[test]
    fn test_productions() {
        let rendered: Vec<String> = TransitionTable::new()
            .productions()
            .iter()
            .map(ToString::to_string)
            .collect();

        assert_eq!(
            rendered,
            vec![
                "A → BD", "B → CE", "C → a", "C → b", "C → c", "C → (A)", "D → -BD", "D → ϵ",
                "E → ϵ", "E → *CE",
            ]
        );
    }

    #[test]
    fn test_duplicate_entry() {
        let result = TransitionTable::from_entries([
            (NonTerminal::A, IdentA, vec![Symbol::Terminal(IdentA)]),
            (NonTerminal::A, IdentA, vec![Symbol::Empty]),
        ]);

        assert_eq!(
            result,
            Err(Error::DuplicateTransition {
                state: NonTerminal::A,
                terminal: IdentA
            })
        );
    }

    #[test]
    fn test_display() {
        let output = TransitionTable::new().to_string();

        assert!(output.contains("(A)"));
        assert!(output.contains("-BD"));
        assert_eq!(output.matches('ϵ').count(), 5);
    }
}
