use std::collections::VecDeque;
use std::fs;
use std::io::{BufRead, ErrorKind, Write};
use std::path::Path;

use tracing::{debug, warn};

use super::{Listener, Speaker};
use crate::error::{Error, Result};

/// Typed lines standing in for a speech recognizer.
pub struct ConsoleListener<R> {
    input: R,
    closed: bool,
}

impl<R: BufRead> ConsoleListener<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            closed: false,
        }
    }
}

impl<R: BufRead> Listener for ConsoleListener<R> {
    fn listen(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => {
                self.closed = true;
                None
            }
            Ok(_) => {
                let line = line.trim();
                (!line.is_empty()).then(|| line.to_string())
            }
            // A garbled line is consumed; the next read starts on the following one.
            Err(err) if err.kind() == ErrorKind::InvalidData => {
                warn!(%err, "unreadable transcript");
                None
            }
            Err(err) => {
                warn!(%err, "reading input");
                self.closed = true;
                None
            }
        }
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}

/// Replays a fixed list of transcripts. An empty line is a failed transcription;
/// lines starting with `#` are skipped.
#[derive(Debug, Clone, Default)]
pub struct ScriptListener {
    lines: VecDeque<String>,
    exhausted: bool,
}

impl ScriptListener {
    pub fn from_lines<I, T>(lines: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let lines = lines
            .into_iter()
            .map(Into::into)
            .filter(|l: &String| !l.trim_start().starts_with('#'))
            .collect();
        Self {
            lines,
            exhausted: false,
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_lines(text.lines()))
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl Listener for ScriptListener {
    fn listen(&mut self) -> Option<String> {
        let Some(line) = self.lines.pop_front() else {
            self.exhausted = true;
            return None;
        };
        debug!(line = %line, "script");
        let line = line.trim();
        (!line.is_empty()).then(|| line.to_string())
    }

    /// Closed once a read found nothing left, so a trailing blank line is still a retry.
    fn is_closed(&self) -> bool {
        self.exhausted
    }
}

/// Writes speech as text lines.
pub struct ConsoleSpeaker<W> {
    out: W,
}

impl<W: Write> ConsoleSpeaker<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Speaker for ConsoleSpeaker<W> {
    fn speak(&mut self, text: &str) {
        if let Err(err) = writeln!(self.out, "{text}").and_then(|_| self.out.flush()) {
            warn!(%err, "writing speech");
        }
    }

    fn display(&mut self, board: &str) {
        if let Err(err) = write!(self.out, "\n{board}\n").and_then(|_| self.out.flush()) {
            warn!(%err, "writing board");
        }
    }
}
