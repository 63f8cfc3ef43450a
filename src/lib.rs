pub mod cli;
pub mod errors;
pub mod grammar;
pub mod parsers;

#[cfg(test)]
mod test {
    use crate::errors::Result;

    /// Helper function to verify the text of an error
    pub fn assert_error_text<T>(result: Result<T>, want: &str) {
        match result {
            Err(e) => {
                assert_eq!(e.to_string(), want);
            }
            Ok(_) => {
                panic!("no error");
            }
        }
    }
}
