use std::fmt::Display;
use std::io::{self, BufRead, Write};

/// Line-oriented prompt/response over a pair of streams.
///
/// The session runs against stdin/stdout in the binary and against
/// in-memory buffers in tests.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `label` and read one line, without its line ending.
    ///
    /// Returns `None` once input is exhausted.
    pub fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Like [`Console::prompt`], but end of input is an `UnexpectedEof` error.
    pub fn ask(&mut self, label: &str) -> io::Result<String> {
        self.prompt(label)?
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"))
    }

    pub fn say(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_strips_line_endings() {
        let mut console = Console::new(Cursor::new("Totoro\r\nMei\n"), Vec::new());
        assert_eq!(console.prompt("Title: ").unwrap(), Some("Totoro".to_string()));
        assert_eq!(console.prompt("Name: ").unwrap(), Some("Mei".to_string()));
        assert_eq!(console.prompt("Name: ").unwrap(), None);
        assert_eq!(console.into_output(), b"Title: Name: Name: ");
    }

    #[test]
    fn test_prompt_keeps_inner_whitespace() {
        let mut console = Console::new(Cursor::new("  Howl's Moving Castle \n"), Vec::new());
        assert_eq!(
            console.prompt("").unwrap(),
            Some("  Howl's Moving Castle ".to_string())
        );
    }

    #[test]
    fn test_ask_at_end_of_input() {
        let mut console = Console::new(Cursor::new(""), Vec::new());
        let err = console.ask("Title: ").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_blank_line_is_not_end_of_input() {
        let mut console = Console::new(Cursor::new("\n"), Vec::new());
        assert_eq!(console.prompt("").unwrap(), Some(String::new()));
    }
}
