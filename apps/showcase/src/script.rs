//! Line-oriented scripts that drive a [`Session`](crate::session::Session).
//!
//! ```text
//! # comments and blank lines are skipped
//! goto content
//! click Increment
//! tap 200 400
//! wait 500
//! snapshot
//! back
//! ```

use std::fmt;

use motion_ui_graphics::Point;

use crate::navigation::ScreenId;

/// Script run when the binary gets no script path.
pub const WALKTHROUGH: &str = include_str!("../scripts/walkthrough.txt");

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Goto(ScreenId),
    Back,
    Tap(Point),
    Click(String),
    Wait(u64),
    Snapshot,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Goto(id) => write!(f, "goto {}", id.slug()),
            Command::Back => f.write_str("back"),
            Command::Tap(point) => write!(f, "tap {} {}", point.x, point.y),
            Command::Click(label) => write!(f, "click {label}"),
            Command::Wait(millis) => write!(f, "wait {millis}"),
            Command::Snapshot => f.write_str("snapshot"),
        }
    }
}

/// A command with the 1-based line it came from.
#[derive(Clone, Debug, PartialEq)]
pub struct ScriptLine {
    pub line: usize,
    pub command: Command,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct Script {
    lines: Vec<ScriptLine>,
}

impl Script {
    pub fn parse(source: &str) -> Result<Self, ScriptError> {
        let mut lines = Vec::new();
        for (index, raw) in source.lines().enumerate() {
            let line = index + 1;
            let text = raw.trim();
            if text.is_empty() || text.starts_with('#') {
                continue;
            }
            let command = parse_command(text).map_err(|kind| ScriptError { line, kind })?;
            lines.push(ScriptLine { line, command });
        }
        Ok(Self { lines })
    }

    pub fn walkthrough() -> Result<Self, ScriptError> {
        Self::parse(WALKTHROUGH)
    }

    pub fn lines(&self) -> &[ScriptLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

fn parse_command(text: &str) -> Result<Command, ScriptErrorKind> {
    let (name, rest) = match text.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (text, ""),
    };
    match name {
        "goto" => {
            let slug = required(rest, "screen")?;
            ScreenId::from_slug(slug)
                .map(Command::Goto)
                .ok_or_else(|| ScriptErrorKind::UnknownScreen(slug.to_string()))
        }
        "back" => Ok(Command::Back),
        "tap" => {
            let mut parts = rest.split_whitespace();
            let x = number(parts.next(), "x")?;
            let y = number(parts.next(), "y")?;
            Ok(Command::Tap(Point::new(x, y)))
        }
        "click" => required(rest, "label").map(|label| Command::Click(label.to_string())),
        "wait" => {
            let raw = required(rest, "millis")?;
            raw.parse()
                .map(Command::Wait)
                .map_err(|_| ScriptErrorKind::InvalidArgument {
                    name: "millis",
                    value: raw.to_string(),
                })
        }
        "snapshot" => Ok(Command::Snapshot),
        other => Err(ScriptErrorKind::UnknownCommand(other.to_string())),
    }
}

fn required<'a>(rest: &'a str, name: &'static str) -> Result<&'a str, ScriptErrorKind> {
    if rest.is_empty() {
        Err(ScriptErrorKind::MissingArgument(name))
    } else {
        Ok(rest)
    }
}

fn number(raw: Option<&str>, name: &'static str) -> Result<f32, ScriptErrorKind> {
    let raw = raw.ok_or(ScriptErrorKind::MissingArgument(name))?;
    raw.parse().map_err(|_| ScriptErrorKind::InvalidArgument {
        name,
        value: raw.to_string(),
    })
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScriptErrorKind {
    UnknownCommand(String),
    MissingArgument(&'static str),
    InvalidArgument { name: &'static str, value: String },
    UnknownScreen(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptError {
    pub line: usize,
    pub kind: ScriptErrorKind,
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: ", self.line)?;
        match &self.kind {
            ScriptErrorKind::UnknownCommand(name) => write!(f, "unknown command '{name}'"),
            ScriptErrorKind::MissingArgument(name) => write!(f, "missing argument <{name}>"),
            ScriptErrorKind::InvalidArgument { name, value } => {
                write!(f, "invalid <{name}> '{value}'")
            }
            ScriptErrorKind::UnknownScreen(slug) => write!(f, "unknown screen '{slug}'"),
        }
    }
}

impl std::error::Error for ScriptError {}

#[cfg(test)]
#[path = "tests/script_tests.rs"]
mod tests;
