use crate::grammar::{format_symbols, NonTerminal, TransitionTable};

/// Formats the grammar encoded by the table, with one line per non-terminal
/// and its alternatives separated by bars
pub fn format_grammar(table: &TransitionTable) -> Vec<String> {
    let productions = table.productions();
    let mut lines = Vec::new();

    for nt in NonTerminal::ALL {
        let bodies: Vec<String> = productions
            .iter()
            .filter(|p| p.head == nt)
            .map(|p| format_symbols(&p.body))
            .collect();

        if !bodies.is_empty() {
            lines.push(format!("{} → {}", nt, bodies.join(" | ")));
        }
    }

    lines
}

/// Outputs the grammar encoded by the table
pub fn output(table: &TransitionTable) {
    for line in format_grammar(table) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_format_grammar() {
        assert_eq!(
            format_grammar(&TransitionTable::new()),
            vec![
                "A → BD",
                "B → CE",
                "C → a | b | c | (A)",
                "D → -BD | ϵ",
                "E → ϵ | *CE",
            ]
        );
    }
}
