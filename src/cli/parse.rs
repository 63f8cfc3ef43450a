use crate::grammar::TransitionTable;
use crate::parsers::{Parser, TraceWriter};

/// Parses the input, writing the trace to stdout unless quiet, and reports
/// acceptance. Rejection is returned as an error.
pub fn output(
    table: &TransitionTable,
    input: &str,
    quiet: bool,
    width: usize,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let parser = Parser::new(table);

    let result = if quiet {
        parser.parse(input)
    } else {
        let mut writer = TraceWriter::with_width(std::io::stdout().lock(), width);
        let result = parser.parse_traced(input, &mut writer);
        writer.finish()?;
        result
    };

    result?;
    println!("accepted");

    Ok(())
}
