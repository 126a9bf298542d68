//! Error types and source positions for the AST core
//!
//! Source-program errors are reported by the parser and the analyzer; the only errors raised here
//! are internal defects: an operation applied to a node of the wrong kind, or a name-table lookup
//! with a discriminant outside the table. They abort the compilation.

use colored::*;
use serde::Serialize;
use std::fmt;

use crate::debug_println;

/// Source location captured when a node is created
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    pub file: Option<String>,
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self {
            file: None,
            line,
            column,
        }
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.file {
            Some(file) => write!(f, "{}:{}:{}", file, self.line, self.column),
            None => write!(f, "{}:{}", self.line, self.column),
        }
    }
}

/// Error context providing additional information
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    pub pos: Option<Position>,
    pub note: Option<String>,
    pub help: Option<String>,
}

/// Main error type of the AST core
#[derive(Debug, Clone)]
pub struct AstError {
    pub kind: ErrorKind,
    pub message: String,
    pub context: ErrorContext,
}

impl AstError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        let message = message.into();
        if kind.is_internal() {
            debug_println!("error", "{}: {}", kind, message);
        }
        Self {
            kind,
            message,
            context: ErrorContext::default(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InternalError, message)
    }

    /// An operation reserved for one node kind was applied to another
    pub fn kind_mismatch(
        operation: &str,
        expected: impl fmt::Display,
        found: impl fmt::Display,
    ) -> Self {
        Self::new(
            ErrorKind::KindMismatch,
            format!("{} expects {} node, found {}", operation, expected, found),
        )
    }

    pub fn with_pos(mut self, pos: Position) -> Self {
        self.context.pos = Some(pos);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.context.note = Some(note.into());
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.context.help = Some(help.into());
        self
    }

    pub fn is_internal(&self) -> bool {
        self.kind.is_internal()
    }
}

/// Categories of errors that can occur
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InternalError,
    KindMismatch,
    InvalidOrdinal,
    SerializationError,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InternalError => "internal error",
            ErrorKind::KindMismatch => "node kind mismatch",
            ErrorKind::InvalidOrdinal => "invalid discriminant",
            ErrorKind::SerializationError => "serialization error",
        }
    }

    /// Internal defects mean the parser or analyzer is malformed, not the input program
    pub fn is_internal(&self) -> bool {
        !matches!(self, ErrorKind::SerializationError)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for AstError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.context.pos {
            Some(pos) => write!(f, "{}: {}: {}", pos, self.kind, self.message)?,
            None => write!(f, "{}: {}", self.kind, self.message)?,
        }

        if let Some(note) = &self.context.note {
            write!(f, "\nnote: {}", note)?;
        }

        if let Some(help) = &self.context.help {
            write!(f, "\nhelp: {}", help)?;
        }

        Ok(())
    }
}

impl std::error::Error for AstError {}

impl From<serde_json::Error> for AstError {
    fn from(err: serde_json::Error) -> Self {
        AstError::new(ErrorKind::SerializationError, err.to_string())
    }
}

/// Result type for AST operations
pub type Result<T> = std::result::Result<T, AstError>;

/// Format error with source code snippet
pub struct ErrorFormatter<'a> {
    error: &'a AstError,
    source: &'a str,
    filename: Option<&'a str>,
    use_color: bool,
}

impl<'a> ErrorFormatter<'a> {
    pub fn new(error: &'a AstError, source: &'a str) -> Self {
        Self {
            error,
            source,
            filename: None,
            use_color: true,
        }
    }

    pub fn with_filename(mut self, filename: &'a str) -> Self {
        self.filename = Some(filename);
        self
    }

    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    pub fn format(&self) -> String {
        let mut output = String::new();

        if let Some(pos) = &self.error.context.pos {
            let location = match self.filename.or(pos.file.as_deref()) {
                Some(filename) => format!("{}:{}:{}", filename, pos.line, pos.column),
                None => format!("{}:{}", pos.line, pos.column),
            };
            output.push_str(&self.paint(location, |s| s.bold()));
            output.push_str(": ");
        }

        let label = if self.error.is_internal() {
            format!("{} (this is a compiler bug)", self.error.kind)
        } else {
            self.error.kind.to_string()
        };
        output.push_str(&self.paint(label, |s| s.red().bold()));
        output.push_str(&format!(": {}\n", self.error.message));

        if let Some(pos) = &self.error.context.pos {
            if let Some(snippet) = self.extract_snippet(pos) {
                output.push_str(&snippet);
            }
        }

        if let Some(note) = &self.error.context.note {
            let note_label = self.paint("note".to_string(), |s| s.blue().bold());
            output.push_str(&format!("\n{}: {}", note_label, note));
        }

        if let Some(help) = &self.error.context.help {
            let help_label = self.paint("help".to_string(), |s| s.green().bold());
            output.push_str(&format!("\n{}: {}", help_label, help));
        }

        output
    }

    fn paint(&self, text: String, style: impl Fn(&str) -> ColoredString) -> String {
        if self.use_color {
            style(&text).to_string()
        } else {
            text
        }
    }

    fn extract_snippet(&self, pos: &Position) -> Option<String> {
        // Lines are 1-based
        if pos.line == 0 {
            return None;
        }
        let line = self.source.lines().nth(pos.line - 1)?;

        let line_num = pos.line.to_string();
        let gutter = " ".repeat(line_num.len());
        let separator = self.paint("|".to_string(), |s| s.blue());

        let mut snippet = format!(
            "{} {} {}\n",
            self.paint(line_num, |s| s.blue().bold()),
            separator,
            line
        );

        let pointer_padding = " ".repeat(pos.column.saturating_sub(1));
        let pointer = self.paint("^".to_string(), |s| s.red().bold());
        snippet.push_str(&format!(
            "{} {} {}{}",
            gutter, separator, pointer_padding, pointer
        ));

        Some(snippet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_display() {
        assert_eq!(Position::new(3, 7).to_string(), "3:7");
        assert_eq!(
            Position::new(3, 7).with_file("token.sc").to_string(),
            "token.sc:3:7"
        );
    }

    #[test]
    fn test_error_display_with_context() {
        let err = AstError::internal("else block attached twice")
            .with_pos(Position::new(4, 2))
            .with_note("the parser attached an else clause to a finished IF");

        assert_eq!(
            err.to_string(),
            "4:2: internal error: else block attached twice\nnote: the parser attached an else clause to a finished IF"
        );
    }

    #[test]
    fn test_serialization_errors_are_not_internal() {
        assert!(ErrorKind::InternalError.is_internal());
        assert!(ErrorKind::KindMismatch.is_internal());
        assert!(ErrorKind::InvalidOrdinal.is_internal());
        assert!(!ErrorKind::SerializationError.is_internal());
    }
}
