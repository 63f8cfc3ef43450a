use crate::grammar::TransitionTable;

/// Outputs the transition table as a grid
pub fn output(table: &TransitionTable) {
    print!("{}", table);
}
