pub mod args;
pub mod common;
pub mod derive;
pub mod parse;
pub mod productions;
pub mod table;
