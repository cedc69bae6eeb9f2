//! # Error and Result for this crate
//!
//! This crate defines a common [Error] structure that parsing failures are converted into. The
//! two failure kinds, scanning ([`LexError`]) and grammar ([`SyntaxError`]), are kept on the
//! error as its [ErrorType] so callers can tell them apart and inspect the details.

use crate::ast::{ASTKind, LexError, TokenKind};
use logos::Span;
use std::{error, fmt, result};

/// This crate's result type using the [Error] structure.
pub type Result<T> = result::Result<T, Error>;

/// A failure of the grammar engine to reduce the next token against any pending production.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct SyntaxError {
    /// The AST node that was being parsed.
    pub node: ASTKind,
    /// The kind of the unexpected token.
    pub found: TokenKind,
    /// The literal text of the unexpected token.
    pub text: String,
    pub span: Span,
    /// The token kinds that would have been accepted instead. Empty when the token had the
    /// right kind but an invalid value, e.g. an integer that is out of range.
    pub expected: &'static [TokenKind],
    /// Why a token of an accepted kind was still rejected.
    pub reason: Option<&'static str>,
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid {}: unexpected {}", self.node, self.found)?;
        if !self.text.is_empty() && !self.found.is_fixed() {
            write!(f, " {:?}", self.text)?;
        }
        if let Some(reason) = self.reason {
            write!(f, ", {}", reason)?;
        }
        if let Some((last, rest)) = self.expected.split_last() {
            f.write_str(", expected ")?;
            for kind in rest {
                write!(f, "{}, ", kind)?;
            }
            if !rest.is_empty() {
                f.write_str("or ")?;
            }
            write!(f, "{}", last)?;
        }
        Ok(())
    }
}

impl error::Error for SyntaxError {}

/// Which stage of parsing failed, with its details.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ErrorType {
    Lex(LexError),
    Syntax(SyntaxError),
}

impl ErrorType {
    #[inline]
    pub fn span(&self) -> Span {
        match self {
            ErrorType::Lex(error) => error.span.clone(),
            ErrorType::Syntax(error) => error.span.clone(),
        }
    }
}

impl From<LexError> for ErrorType {
    fn from(error: LexError) -> Self {
        ErrorType::Lex(error)
    }
}

impl From<SyntaxError> for ErrorType {
    fn from(error: SyntaxError) -> Self {
        ErrorType::Syntax(error)
    }
}

/// This crate's error structure which internal errors are converted into.
///
/// The error is split into a general message and a context string. The context string is
/// populated with a snippet of the source text that points at the offending span.
///
/// The Error implements both the [`fmt::Display`] and [`fmt::Debug`] traits. It also implements
/// [`error::Error`] so that it can be used with existing patterns for error handling.
#[derive(PartialEq, Eq, Clone)]
pub struct Error {
    pub(crate) message: String,
    pub(crate) location: Option<Location>,
    pub(crate) context: Option<String>,
    pub(crate) error_type: ErrorType,
}

impl Error {
    /// Create a new Error for a failure in `source`, locating it and capturing a snippet.
    pub fn new<E: Into<ErrorType>>(source: &str, error: E) -> Self {
        let error_type = error.into();
        let span = error_type.span();
        let message = match &error_type {
            ErrorType::Lex(error) => error.to_string(),
            ErrorType::Syntax(error) => error.to_string(),
        };
        Self {
            message,
            location: Some(get_location(source, span.clone())),
            context: Some(print_span(source, span)),
            error_type,
        }
    }

    /// Returns the message of the current error. The context is discarded.
    pub fn message(&self) -> &str {
        self.message.as_ref()
    }

    /// Returns the location of the current error.
    pub fn location(&self) -> &Option<Location> {
        &self.location
    }

    /// Returns the stage that failed along with its details.
    pub fn error_type(&self) -> &ErrorType {
        &self.error_type
    }

    #[inline]
    pub fn is_lex_error(&self) -> bool {
        matches!(self.error_type, ErrorType::Lex(_))
    }

    #[inline]
    pub fn is_syntax_error(&self) -> bool {
        matches!(self.error_type, ErrorType::Syntax(_))
    }

    /// Formats this error, with the option to include the context information as well,
    /// which will cause the string to be multi-line.
    pub fn print(&self, include_ctx: bool) -> String {
        let formatted = match self.error_type {
            ErrorType::Lex(_) => format!("Lex Error: {}", self.message),
            ErrorType::Syntax(_) => format!("Syntax Error: {}", self.message),
        };

        match self.context {
            Some(ref context) if include_ctx => format!("{}\n{}", formatted, context),
            _ => formatted,
        }
    }
}

pub(crate) fn print_span(source: &str, span: Span) -> String {
    let start = span.start.min(source.len());
    let end = span.end.clamp(start, source.len());

    let line_start = source[..start].rfind('\n').map_or(0, |idx| idx + 1);
    // Include the line before the offending one for context
    let snippet_start = match line_start {
        0 => 0,
        _ => source[..line_start - 1].rfind('\n').map_or(0, |idx| idx + 1),
    };
    let snippet_end = source[start..]
        .find('\n')
        .map_or(source.len(), |idx| idx + start);

    let first_line = source[..snippet_start].matches('\n').count() + 1;
    let snippet = &source[snippet_start..snippet_end];
    let line_num_pad = (first_line + snippet.matches('\n').count()).to_string().len();

    let mut out = String::new();
    for (index, line) in snippet.split('\n').enumerate() {
        if index > 0 {
            out.push('\n');
        }
        let line_num = (first_line + index).to_string();
        out.push_str(&" ".repeat(line_num_pad - line_num.len() + 1));
        out.push_str(&line_num);
        out.push_str(" | ");
        out.push_str(line.trim_end_matches('\r'));
    }
    if !source[start..end].contains('\n') {
        out.push('\n');
        out.push_str(&" ".repeat(line_num_pad + 1));
        out.push_str(" | ");
        out.push_str(&" ".repeat(source[line_start..start].chars().count()));
        out.push_str(&"^".repeat(source[start..end].chars().count().max(1)));
    };

    out
}

/// A 1-based line and column position in a source text.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

pub(crate) fn get_location(source: &str, span: Span) -> Location {
    let start = span.start.min(source.len());
    let line_start = source[..start].rfind('\n').map_or(0, |idx| idx + 1);
    Location {
        line: source[..start].matches('\n').count() + 1,
        column: source[line_start..start].chars().count() + 1,
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.print(true))
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\n{}\n", self)
    }
}

impl error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::{get_location, print_span, Location, SyntaxError};
    use crate::ast::{ASTKind, TokenKind};

    #[test]
    fn locations() {
        assert_eq!(get_location("{ a }", 2..3), Location { line: 1, column: 3 });
        assert_eq!(
            get_location("{\n  a\n  $\n}", 8..9),
            Location { line: 3, column: 3 }
        );
        assert_eq!(get_location("", 0..0), Location { line: 1, column: 1 });
    }

    #[test]
    fn spans() {
        assert_eq!(print_span("{ a % }", 4..5), " 1 | { a % }\n   |     ^");
        assert_eq!(
            print_span("{\n  a\n  $\n}", 8..9),
            " 2 |   a\n 3 |   $\n   |   ^"
        );
        assert_eq!(print_span("{ a", 3..3), " 1 | { a\n   |    ^");
    }

    #[test]
    fn syntax_error_display() {
        let mut error = SyntaxError {
            node: ASTKind::List,
            found: TokenKind::BraceClose,
            text: "}".to_string(),
            span: 3..4,
            expected: &[TokenKind::BracketClose],
            reason: None,
        };
        assert_eq!(error.to_string(), "Invalid List: unexpected \"}\", expected \"]\"");

        error.found = TokenKind::Name;
        error.text = "abc".to_string();
        error.expected = &[TokenKind::Name, TokenKind::BracketClose];
        assert_eq!(
            error.to_string(),
            "Invalid List: unexpected Name \"abc\", expected Name, or \"]\""
        );

        error.found = TokenKind::End;
        error.text = String::new();
        assert!(error.to_string().starts_with("Invalid List: unexpected End of Input, "));

        error.found = TokenKind::BracketOpen;
        error.text = "[".to_string();
        error.expected = &[];
        error.reason = Some("nesting is too deep");
        assert_eq!(
            error.to_string(),
            "Invalid List: unexpected \"[\", nesting is too deep"
        );
    }
}
