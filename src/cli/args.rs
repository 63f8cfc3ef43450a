use crate::parsers::trace::DEFAULT_WIDTH;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(version, about, long_about = None)]
/// Command line options for the pda tool
pub struct Options {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
/// Commands for the pda tool
pub enum Commands {
    /// Parses a line of input, tracing the stack and remaining input
    Parse {
        /// Input to parse, instead of a line read from stdin
        #[arg(long)]
        input: Option<String>,

        /// Only report the outcome
        #[arg(short, long)]
        quiet: bool,

        /// Width of the stack column in the trace
        #[arg(long, default_value_t = DEFAULT_WIDTH)]
        width: usize,
    },
    /// Prints the leftmost derivation of an accepted input
    Derive {
        #[arg(long)]
        input: Option<String>,
    },
    /// Prints the grammar encoded by the transition table
    Productions,
    /// Prints the transition table
    Table,
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Parse {
            input: None,
            quiet: false,
            width: DEFAULT_WIDTH,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_options() {
        let options = Options::parse_from(["pda", "parse", "--input", "a-b", "-q"]);
        let Some(Commands::Parse {
            input,
            quiet,
            width,
        }) = options.command
        else {
            panic!("expected parse command");
        };

        assert_eq!(input.as_deref(), Some("a-b"));
        assert!(quiet);
        assert_eq!(width, DEFAULT_WIDTH);
    }

    #[test]
    fn test_no_command() {
        let options = Options::parse_from(["pda"]);
        assert!(options.command.is_none());
    }
}
