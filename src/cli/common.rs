use crate::errors::Error;
use std::io::BufRead;

/// Reads a single line of input, without its line terminator. Reaching the
/// end of the stream before anything is read means no input was supplied.
pub fn read_line<R: BufRead>(
    mut reader: R,
) -> std::result::Result<String, Box<dyn std::error::Error>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(Error::EmptyInput.into());
    }

    Ok(line.trim_end_matches(['\n', '\r']).to_string())
}

/// Returns the input given on the command line, or else a line read from
/// stdin
pub fn input_or_stdin(
    input: Option<String>,
) -> std::result::Result<String, Box<dyn std::error::Error>> {
    match input {
        Some(s) => Ok(s),
        None => read_line(std::io::stdin().lock()),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_line() -> std::result::Result<(), Box<dyn std::error::Error>> {
        assert_eq!(read_line(Cursor::new("a-b\r\nc\n"))?, "a-b");
        assert_eq!(read_line(Cursor::new("(a)"))?, "(a)");
        assert_eq!(read_line(Cursor::new("\n"))?, "");

        Ok(())
    }

    #[test]
    fn test_no_input() {
        let Err(e) = read_line(Cursor::new("")) else {
            panic!("no error");
        };

        assert_eq!(e.downcast_ref::<Error>(), Some(&Error::EmptyInput));
    }
}
