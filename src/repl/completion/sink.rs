//! Output sinks for completion hints

use std::io::{self, Write};

/// Append-only line output used to print completion hints
pub trait HintSink: Send {
    fn print_line(&mut self, line: &str) -> io::Result<()>;
}

/// Prints hints to standard output
///
/// Hints are printed from inside the line editor while the terminal is in
/// raw mode, so every line ends with `\r\n`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl HintSink for StdoutSink {
    fn print_line(&mut self, line: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        write_raw_line(&mut stdout, line)?;
        stdout.flush()
    }
}

fn write_raw_line<W: Write + ?Sized>(out: &mut W, line: &str) -> io::Result<()> {
    write!(out, "{line}\r\n")
}

/// Prints hints to any writer
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: W,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> HintSink for WriterSink<W> {
    fn print_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{line}")
    }
}

/// Collects hint lines in memory
#[derive(Debug, Default, Clone)]
pub struct BufferSink {
    lines: Vec<String>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl HintSink for BufferSink {
    fn print_line(&mut self, line: &str) -> io::Result<()> {
        self.lines.push(line.to_string());
        Ok(())
    }
}
