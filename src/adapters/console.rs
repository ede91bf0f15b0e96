use crate::domain::ports::Console;
use crate::utils::error::Result;
use std::io::{self, BufRead, Write};

/// Real terminal backed by stdin/stdout.
#[derive(Debug, Default)]
pub struct StdConsole;

impl StdConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdConsole {
    fn prompt(&mut self, text: &str) -> Result<String> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        write!(out, "{}", text)?;
        out.flush()?;
        drop(out);

        let mut line = String::new();
        let bytes_read = io::stdin().lock().read_line(&mut line)?;
        // The dialogue cannot continue without input; a closed stream is fatal.
        if bytes_read == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "console input closed",
            )
            .into());
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    fn write_line(&mut self, text: &str) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        writeln!(out, "{}", text)?;
        Ok(())
    }
}
