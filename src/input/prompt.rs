use std::io::{self, BufRead, Write};

use crate::domain::party_size::{PartySize, parse_party_size};
use crate::error::{Error, Result};

const PROMPT: &str = "Party size: ";

/// Asks for a party size until a valid one is entered.
///
/// Invalid answers print `Invalid Input` and re-prompt. End of input yields
/// an `UnexpectedEof` I/O error since no answer will ever arrive.
pub fn prompt_party_size<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<PartySize> {
    let mut line = String::new();

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(Error::IoError(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed before a party size was entered")));
        }

        match parse_party_size(&line) {
            Ok(party_size) => return Ok(party_size),
            Err(e) => {
                log::warn!("{}", e);
                writeln!(output, "Invalid Input\n")?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_retries_until_valid() {
        let mut input = Cursor::new("abc\n0\n-2\n 5 \n");
        let mut output = Vec::new();

        let party_size = prompt_party_size(&mut input, &mut output).unwrap();

        assert_eq!(party_size.get(), 5);
        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches(PROMPT).count(), 4);
        assert_eq!(text.matches("Invalid Input").count(), 3);
    }

    #[test]
    fn test_prompt_fails_on_end_of_input() {
        let mut input = Cursor::new("nope\n");
        let mut output = Vec::new();

        match prompt_party_size(&mut input, &mut output) {
            Err(Error::IoError(e)) => assert_eq!(e.kind(), io::ErrorKind::UnexpectedEof),
            other => panic!("Expected UnexpectedEof, got {:?}", other),
        }
    }
}
