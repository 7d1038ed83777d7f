use crate::domain::ports::Console;
use std::io::{self, Stderr, Stdout, Write};

/// The process's real stdout/stderr.
pub struct StdConsole {
    stdout: Stdout,
    stderr: Stderr,
}

impl StdConsole {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            stderr: io::stderr(),
        }
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for StdConsole {
    fn print(&mut self, text: &str) -> io::Result<()> {
        let mut out = self.stdout.lock();
        out.write_all(text.as_bytes())?;
        // a partial line has to be visible before the caller starts waiting
        out.flush()
    }

    fn println(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.stdout.lock(), "{}", text)
    }

    fn eprintln(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.stderr.lock(), "{}", text)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stdout.flush()?;
        self.stderr.flush()
    }
}
