//! Line-oriented input for the move prompt.

use std::io::{self, BufRead};

/// Source of one line of human input per prompt
pub trait LineSource {
    /// Read one line without its line terminator. `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

// Bytes that are not UTF-8 are replaced rather than rejected, so a garbled
// line is just another invalid choice.
fn read_one<R: BufRead + ?Sized>(reader: &mut R) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    if reader.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    while matches!(buf.last(), Some(b'\n' | b'\r')) {
        buf.pop();
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

/// Process stdin, locked only for the duration of each read
#[derive(Debug, Default)]
pub struct StdinSource;

impl LineSource for StdinSource {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let stdin = io::stdin();
        let mut handle = stdin.lock();
        read_one(&mut handle)
    }
}

/// Any buffered reader, e.g. a pipe or a scripted `Cursor`
#[derive(Debug)]
pub struct ReaderSource<R>(R);

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self(reader)
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        read_one(&mut self.0)
    }
}

/// Scripted input from a fixed list of lines
impl LineSource for std::collections::VecDeque<String> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.pop_front())
    }
}
