use core::fmt;
use std::io::{self, Write};

use serde::Serialize;

use crate::cli::Report;
use crate::Answer;

/// Where runner output goes, either as plain text or JSON lines.
pub(crate) struct Output<O> {
    out: O,
    kind: OutputKind,
}

pub(crate) enum OutputKind {
    Json,
    Normal,
}

impl<O> Output<O>
where
    O: Write,
{
    pub(crate) fn new(out: O, kind: OutputKind) -> Self {
        Self { out, kind }
    }

    pub(crate) fn info(&mut self, m: impl fmt::Display) -> io::Result<()> {
        self.message(MessageKind::Info, m)
    }

    pub(crate) fn error(&mut self, m: impl fmt::Display) -> io::Result<()> {
        self.message(MessageKind::Error, m)
    }

    pub(crate) fn answer(&mut self, answer: &Answer) -> io::Result<()> {
        self.line(LineType::Answer, answer)
    }

    pub(crate) fn report(&mut self, report: &Report) -> io::Result<()> {
        self.line(LineType::Report, report)
    }

    fn message(&mut self, kind: MessageKind, m: impl fmt::Display) -> io::Result<()> {
        let message = Message {
            kind,
            output: m.to_string(),
        };

        self.line(LineType::Message, &message)
    }

    fn line<T>(&mut self, ty: LineType, data: &T) -> io::Result<()>
    where
        T: fmt::Display + Serialize,
    {
        match &self.kind {
            OutputKind::Json => {
                serde_json::to_writer(&mut self.out, &Line { ty, data })?;
                writeln!(self.out)
            }
            OutputKind::Normal => writeln!(self.out, "{data}"),
        }
    }

    #[cfg(test)]
    pub(crate) fn into_inner(self) -> O {
        self.out
    }
}

#[derive(Serialize)]
struct Line<'a, T> {
    #[serde(rename = "type")]
    ty: LineType,
    data: &'a T,
}

#[derive(Serialize)]
#[serde(rename_all = "kebab-case")]
enum LineType {
    Answer,
    Message,
    Report,
}

#[derive(Serialize)]
#[serde(rename_all = "kebab-case")]
enum MessageKind {
    Info,
    Error,
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageKind::Info => write!(f, "info"),
            MessageKind::Error => write!(f, "error"),
        }
    }
}

#[derive(Serialize)]
struct Message {
    kind: MessageKind,
    output: String,
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.output)
    }
}
