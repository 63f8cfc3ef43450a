use clap::Parser;
use pda::cli::args::{Commands, Options};
use pda::cli::{common, derive, parse, productions, table};
use pda::grammar::TransitionTable;

fn main() {
    let options = Options::parse();
    let transitions = TransitionTable::new();

    let result = match options.command.unwrap_or_default() {
        Commands::Parse {
            input,
            quiet,
            width,
        } => common::input_or_stdin(input)
            .and_then(|input| parse::output(&transitions, &input, quiet, width)),
        Commands::Derive { input } => {
            common::input_or_stdin(input).and_then(|input| derive::output(&transitions, &input))
        }
        Commands::Productions => {
            productions::output(&transitions);
            Ok(())
        }
        Commands::Table => {
            table::output(&transitions);
            Ok(())
        }
    };

    if let Err(e) = result {
        println!("ERROR: {e}");
        std::process::exit(1);
    }
}
