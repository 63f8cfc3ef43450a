use crate::grammar::{NonTerminal, Production, Symbol};

/// The productions applied during a successful parse, in the order the
/// automaton expanded them. Since the leftmost pending non-terminal is always
/// expanded first, this is a leftmost derivation of the input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Derivation {
    pub productions: Vec<Production>,
}

impl Derivation {
    pub fn new() -> Derivation {
        Derivation {
            productions: Vec::new(),
        }
    }

    /// Records the expansion of a non-terminal
    pub fn push(&mut self, head: NonTerminal, body: &[Symbol]) {
        self.productions.push(Production {
            head,
            body: body.to_vec(),
        });
    }

    pub fn len(&self) -> usize {
        self.productions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.productions.is_empty()
    }

    /// Returns each sentential form of the derivation, beginning with the
    /// start state on its own and ending with the derived terminals
    pub fn sentential_forms(&self) -> Vec<Vec<Symbol>> {
        let mut form = vec![Symbol::NonTerminal(NonTerminal::START)];
        let mut forms = vec![form.clone()];

        for p in &self.productions {
            let Some(i) = form
                .iter()
                .position(|s| matches!(s, Symbol::NonTerminal(_)))
            else {
                break;
            };
            if form[i] != Symbol::NonTerminal(p.head) {
                break;
            }

            let body = p.body.iter().filter(|s| **s != Symbol::Empty).copied();
            form.splice(i..=i, body);
            forms.push(form.clone());
        }

        forms
    }

    /// Returns the derived string, which reconstructs the accepted input
    pub fn frontier(&self) -> String {
        self.sentential_forms()
            .last()
            .map(|form| {
                form.iter()
                    .filter_map(|s| match s {
                        Symbol::Terminal(t) => Some(t.as_char()),
                        _ => None,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::grammar::{format_symbols, Terminal};

    #[test]
    fn test_sentential_forms() {
        let mut d = Derivation::new();
        d.push(
            NonTerminal::A,
            &[
                Symbol::NonTerminal(NonTerminal::B),
                Symbol::NonTerminal(NonTerminal::D),
            ],
        );
        d.push(
            NonTerminal::B,
            &[
                Symbol::NonTerminal(NonTerminal::C),
                Symbol::NonTerminal(NonTerminal::E),
            ],
        );
        d.push(NonTerminal::C, &[Symbol::Terminal(Terminal::IdentC)]);
        d.push(NonTerminal::E, &[Symbol::Empty]);
        d.push(NonTerminal::D, &[Symbol::Empty]);

        let forms: Vec<String> = d
            .sentential_forms()
            .iter()
            .map(|f| format_symbols(f))
            .collect();

        assert_eq!(forms, vec!["A", "BD", "CED", "cED", "cD", "c"]);
        assert_eq!(d.frontier(), "c");
        assert_eq!(d.len(), 5);
    }

    #[test]
    fn test_empty_derivation() {
        let d = Derivation::default();

        assert!(d.is_empty());
        assert_eq!(d.sentential_forms().len(), 1);
        assert_eq!(d.frontier(), "");
    }
}
