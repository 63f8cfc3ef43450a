mod symbol;
mod table;

pub use symbol::{format_symbols, format_terminals, NonTerminal, Symbol, Terminal};
pub use table::TransitionTable;

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
/// A production of the expression grammar
pub struct Production {
    pub head: NonTerminal,
    pub body: Vec<Symbol>,
}

impl Production {
    /// Returns true if the production is an ϵ-production
    pub fn is_e(&self) -> bool {
        self.body.iter().all(|s| *s == Symbol::Empty)
    }
}

impl fmt::Display for Production {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} → {}", self.head, format_symbols(&self.body))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_is_e() {
        let p = Production {
            head: NonTerminal::D,
            body: vec![Symbol::Empty],
        };
        assert!(p.is_e());
        assert_eq!(p.to_string(), "D → ϵ");

        let p = Production {
            head: NonTerminal::C,
            body: vec![Symbol::Terminal(Terminal::IdentB)],
        };
        assert!(!p.is_e());
    }
}
