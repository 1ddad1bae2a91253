use std::io::{self, BufRead, Write};
use termion::event::Key;
use termion::input::TermRead;
use termion::raw::IntoRawMode;

/// Somewhere lines of input come from.
pub trait LineSource {
    /// Shows `prompt` and blocks until a full line is available.
    ///
    /// Returns `Ok(None)` at end of input. The line has no trailing newline.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Interactive line editor on the controlling terminal.
///
/// Handles Backspace, Enter, Ctrl-C (drops the current line) and Ctrl-D on an
/// empty line (end of input). Raw mode is only held while a line is being read,
/// so commands run with the terminal in its normal state.
#[derive(Debug, Default)]
pub struct Terminal;

impl Terminal {
    pub fn new() -> Self {
        Terminal
    }
}

impl LineSource for Terminal {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        print!("{}", prompt);
        io::stdout().flush()?;

        // Enter raw mode to handle input character by character
        let mut stdout = io::stdout().into_raw_mode()?;
        let mut buffer = String::new();

        for key in io::stdin().keys() {
            let key = match key {
                Ok(key) => key,
                // termion reports bytes it cannot decode as `Other`
                Err(e) if e.kind() == io::ErrorKind::Other => Key::Char(char::REPLACEMENT_CHARACTER),
                Err(e) => return Err(e),
            };
            match key {
                Key::Ctrl('c') => {
                    write!(stdout, "\r\n")?;
                    return Ok(Some(String::new()));
                }
                Key::Ctrl('d') if buffer.is_empty() => {
                    write!(stdout, "\r\n")?;
                    return Ok(None);
                }
                Key::Char('\n') | Key::Char('\r') => {
                    write!(stdout, "\r\n")?;
                    return Ok(Some(buffer));
                }
                Key::Backspace => {
                    if buffer.pop().is_some() {
                        // Move cursor back, erase char with space, move back again
                        write!(stdout, "\x08 \x08")?;
                        stdout.flush()?;
                    }
                }
                Key::Char(c) => {
                    buffer.push(c);
                    write!(stdout, "{}", c)?;
                    stdout.flush()?;
                }
                _ => {}
            }
        }

        // stdin closed mid-line
        write!(stdout, "\r\n")?;
        Ok((!buffer.is_empty()).then_some(buffer))
    }
}

/// Reads lines from any buffered reader, e.g. a pipe or a file.
///
/// The prompt is still written to `prompt_out` so transcripts look the same as
/// an interactive session.
pub struct Buffered<R, W> {
    reader: R,
    prompt_out: W,
}

impl<R: BufRead, W: Write> Buffered<R, W> {
    pub fn new(reader: R, prompt_out: W) -> Self {
        Buffered { reader, prompt_out }
    }
}

impl<R: BufRead, W: Write> LineSource for Buffered<R, W> {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.prompt_out, "{}", prompt)?;
        self.prompt_out.flush()?;

        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        // Undecodable bytes become U+FFFD instead of failing the read.
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}
