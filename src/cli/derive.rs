use crate::grammar::{format_symbols, TransitionTable};
use crate::parsers::Parser;

/// Outputs the numbered sentential forms of a leftmost derivation of the input
pub fn output(
    table: &TransitionTable,
    input: &str,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let forms = Parser::new(table).parse(input)?.sentential_forms();
    let width = (forms.len().checked_ilog10().unwrap_or(0) + 1) as usize;

    for (i, form) in forms.iter().enumerate() {
        println!("{:>w$}: {}", i + 1, format_symbols(form), w = width);
    }

    Ok(())
}
