use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// An input symbol of the expression language, including the end-of-input
/// marker
pub enum Terminal {
    IdentA,
    IdentB,
    IdentC,
    Minus,
    Star,
    OpenParen,
    CloseParen,
    EndOfInput,
}

impl Terminal {
    /// All terminals, in table column order
    pub const ALL: [Terminal; 8] = [
        Terminal::IdentA,
        Terminal::IdentB,
        Terminal::IdentC,
        Terminal::Minus,
        Terminal::Star,
        Terminal::OpenParen,
        Terminal::CloseParen,
        Terminal::EndOfInput,
    ];

    /// Classifies a character of user input. The end-of-input marker is
    /// synthetic, so '$' is never recognized here.
    pub fn from_char(c: char) -> Option<Terminal> {
        match c {
            'a' => Some(Terminal::IdentA),
            'b' => Some(Terminal::IdentB),
            'c' => Some(Terminal::IdentC),
            '-' => Some(Terminal::Minus),
            '*' => Some(Terminal::Star),
            '(' => Some(Terminal::OpenParen),
            ')' => Some(Terminal::CloseParen),
            _ => None,
        }
    }

    /// Returns the character this terminal matches
    pub fn as_char(self) -> char {
        match self {
            Terminal::IdentA => 'a',
            Terminal::IdentB => 'b',
            Terminal::IdentC => 'c',
            Terminal::Minus => '-',
            Terminal::Star => '*',
            Terminal::OpenParen => '(',
            Terminal::CloseParen => ')',
            Terminal::EndOfInput => '$',
        }
    }
}

impl fmt::Display for Terminal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// A grammar state which must be expanded through the transition table
pub enum NonTerminal {
    /// Expression
    A,
    /// Term
    B,
    /// Factor
    C,
    /// Rest of an expression: further `-` operands, or nothing
    D,
    /// Rest of a term: further `*` operands, or nothing
    E,
}

impl NonTerminal {
    pub const ALL: [NonTerminal; 5] = [
        NonTerminal::A,
        NonTerminal::B,
        NonTerminal::C,
        NonTerminal::D,
        NonTerminal::E,
    ];

    /// The state every derivation starts from
    pub const START: NonTerminal = NonTerminal::A;

    pub fn name(self) -> &'static str {
        match self {
            NonTerminal::A => "A",
            NonTerminal::B => "B",
            NonTerminal::C => "C",
            NonTerminal::D => "D",
            NonTerminal::E => "E",
        }
    }
}

impl fmt::Display for NonTerminal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// A symbol in the body of a production, or on the automaton's stack
pub enum Symbol {
    Terminal(Terminal),
    NonTerminal(NonTerminal),
    Empty,
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Symbol::Terminal(t) => fmt::Display::fmt(t, f),
            Symbol::NonTerminal(nt) => fmt::Display::fmt(nt, f),
            Symbol::Empty => f.write_str("ϵ"),
        }
    }
}

/// Concatenates the text of a sequence of symbols, left to right
pub fn format_symbols(symbols: &[Symbol]) -> String {
    symbols.iter().map(ToString::to_string).collect()
}

/// Concatenates the characters of a sequence of terminals, left to right
pub fn format_terminals(terminals: &[Terminal]) -> String {
    terminals.iter().map(|t| t.as_char()).collect()
}
