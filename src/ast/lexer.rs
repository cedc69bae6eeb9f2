//! # Scanner
//!
//! The scanner turns source text into a lazy stream of [Token]s. It keeps an explicit stack of
//! lexical [Mode]s, since the contents of a string are scanned under different rules than the
//! structural GraphQL syntax around it. Each mode has its own `logos` rule table and the scanner
//! morphs its lexer between them whenever a string delimiter pushes or pops a mode.

use logos::{Lexer, Logos, Span};
use std::fmt;

/// The lexical mode the scanner is in.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Mode {
    /// Structural GraphQL syntax
    Default,
    /// The body of a `"` delimited string
    String,
    /// The body of a `"""` delimited block string
    BlockString,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Default => f.write_str("default"),
            Mode::String => f.write_str("string"),
            Mode::BlockString => f.write_str("block string"),
        }
    }
}

/// The lexical category of a [Token].
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum TokenKind {
    Name,
    Query,
    True,
    False,
    Null,
    ZeroValue,
    IntegerPart,
    FractionalPart,
    ExponentPart,
    Exclam,
    Dollar,
    ParenOpen,
    ParenClose,
    Ellipsis,
    Colon,
    Equal,
    At,
    BracketOpen,
    BracketClose,
    BraceOpen,
    Pipe,
    BraceClose,
    StringDelimiter,
    BlockStringDelimiter,
    EscapedChar,
    QuoteChar,
    StringSource,
    /// Token indicates the end of the input
    End,
}

impl TokenKind {
    /// Whether this kind may stand in for a name. Keywords are only reserved in value position.
    #[inline]
    pub fn is_name(self) -> bool {
        matches!(
            self,
            TokenKind::Name | TokenKind::Query | TokenKind::True | TokenKind::False | TokenKind::Null
        )
    }

    /// Whether every token of this kind has the same text, i.e. keywords and punctuators.
    #[inline]
    pub fn is_fixed(self) -> bool {
        matches!(
            self,
            TokenKind::Query
                | TokenKind::True
                | TokenKind::False
                | TokenKind::Null
                | TokenKind::Exclam
                | TokenKind::Dollar
                | TokenKind::ParenOpen
                | TokenKind::ParenClose
                | TokenKind::Ellipsis
                | TokenKind::Colon
                | TokenKind::Equal
                | TokenKind::At
                | TokenKind::BracketOpen
                | TokenKind::BracketClose
                | TokenKind::BraceOpen
                | TokenKind::Pipe
                | TokenKind::BraceClose
        )
    }

    #[inline]
    fn is_numeric(self) -> bool {
        matches!(
            self,
            TokenKind::ZeroValue | TokenKind::IntegerPart | TokenKind::FractionalPart
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Name => f.write_str("Name"),
            TokenKind::Query => f.write_str("\"query\""),
            TokenKind::True => f.write_str("\"true\""),
            TokenKind::False => f.write_str("\"false\""),
            TokenKind::Null => f.write_str("\"null\""),
            TokenKind::ZeroValue => f.write_str("Zero"),
            TokenKind::IntegerPart => f.write_str("Integer Part"),
            TokenKind::FractionalPart => f.write_str("Fractional Part"),
            TokenKind::ExponentPart => f.write_str("Exponent Part"),
            TokenKind::Exclam => f.write_str("\"!\""),
            TokenKind::Dollar => f.write_str("\"$\""),
            TokenKind::ParenOpen => f.write_str("\"(\""),
            TokenKind::ParenClose => f.write_str("\")\""),
            TokenKind::Ellipsis => f.write_str("\"...\""),
            TokenKind::Colon => f.write_str("\":\""),
            TokenKind::Equal => f.write_str("\"=\""),
            TokenKind::At => f.write_str("\"@\""),
            TokenKind::BracketOpen => f.write_str("\"[\""),
            TokenKind::BracketClose => f.write_str("\"]\""),
            TokenKind::BraceOpen => f.write_str("\"{\""),
            TokenKind::Pipe => f.write_str("\"|\""),
            TokenKind::BraceClose => f.write_str("\"}\""),
            TokenKind::StringDelimiter => f.write_str("String Delimiter"),
            TokenKind::BlockStringDelimiter => f.write_str("Block String Delimiter"),
            TokenKind::EscapedChar => f.write_str("Escaped Character"),
            TokenKind::QuoteChar => f.write_str("Quote"),
            TokenKind::StringSource => f.write_str("String Characters"),
            TokenKind::End => f.write_str("End of Input"),
        }
    }
}

/// A scanned token: its kind, the literal slice of source text and where that slice is.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub span: Span,
}

impl<'a> Token<'a> {
    #[inline]
    pub(crate) fn end(offset: usize) -> Self {
        Token {
            kind: TokenKind::End,
            text: "",
            span: offset..offset,
        }
    }
}

/// Why the scanner gave up.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum LexErrorKind {
    /// No rule of the current mode matches the input at the cursor.
    Unrecognized,
    /// The input ended while a string or block string was still open.
    Unterminated,
}

/// A scanning failure, carrying the offending span and the mode the scanner was in.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub mode: Mode,
    pub span: Span,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            LexErrorKind::Unrecognized => write!(f, "Unrecognized input in {} mode", self.mode),
            LexErrorKind::Unterminated => write!(f, "Unterminated {}", self.mode),
        }
    }
}

impl std::error::Error for LexError {}

const KEYWORDS: [(&str, TokenKind); 4] = [
    ("query", TokenKind::Query),
    ("true", TokenKind::True),
    ("false", TokenKind::False),
    ("null", TokenKind::Null),
];

#[inline]
fn keyword(name: &str) -> Option<TokenKind> {
    KEYWORDS
        .iter()
        .find(|(keyword, _)| *keyword == name)
        .map(|(_, kind)| *kind)
}

#[derive(Logos, Debug, PartialEq, Clone, Copy)]
enum DefaultToken {
    #[regex(r"[_a-zA-Z][_0-9a-zA-Z]*")]
    Name,

    #[regex(r"-?0")]
    ZeroValue,

    #[regex(r"-?[1-9][0-9]*")]
    IntegerPart,

    #[regex(r"\.[0-9]+")]
    FractionalPart,

    #[regex(r"[eE][+-]?[0-9]+", priority = 3)]
    ExponentPart,

    #[token("!")]
    Exclam,

    #[token("$")]
    Dollar,

    #[token("(")]
    ParenOpen,

    #[token(")")]
    ParenClose,

    #[token("...")]
    Ellipsis,

    #[token(":")]
    Colon,

    #[token("=")]
    Equal,

    #[token("@")]
    At,

    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    #[token("{")]
    BraceOpen,

    #[token("|")]
    Pipe,

    #[token("}")]
    BraceClose,

    // One to three quotes, told apart by length so logos never backtracks
    #[regex(r#"""?"?"#)]
    Quotes,

    #[error]
    #[regex(r"([,\t \n\r\x{FEFF}]+|#[^\n\r]*)+", logos::skip)]
    Error,
}

#[derive(Logos, Debug, PartialEq, Clone, Copy)]
enum StringToken {
    #[token("\"")]
    Delimiter,

    #[regex(r#"\\["\\/bfnrt]"#)]
    EscapedChar,

    #[regex(r#"[^\x00-\x08\x0B\x0C\x0E-\x1F"\\]+"#)]
    Source,

    #[error]
    Error,
}

#[derive(Logos, Debug, PartialEq, Clone, Copy)]
enum BlockStringToken {
    #[regex(r#"""?"?"#)]
    Quotes,

    #[regex(r#"\\["\\/bfnrt]"#)]
    EscapedChar,

    #[regex(r#"[^\x00-\x08\x0B\x0C\x0E-\x1F"\\]+"#)]
    Source,

    #[error]
    Error,
}

/// What a matched rule does to the mode stack.
#[derive(Debug, PartialEq, Clone, Copy)]
enum Transition {
    Stay,
    Push(Mode),
    Pop,
    /// `""`: a string that opens and closes in one match.
    Enclose,
}

type Rule = Option<(TokenKind, Transition)>;

fn default_rule(token: DefaultToken, text: &str) -> Rule {
    let kind = match token {
        DefaultToken::Name => keyword(text).unwrap_or(TokenKind::Name),
        DefaultToken::ZeroValue => TokenKind::ZeroValue,
        DefaultToken::IntegerPart => TokenKind::IntegerPart,
        DefaultToken::FractionalPart => TokenKind::FractionalPart,
        DefaultToken::ExponentPart => TokenKind::ExponentPart,
        DefaultToken::Exclam => TokenKind::Exclam,
        DefaultToken::Dollar => TokenKind::Dollar,
        DefaultToken::ParenOpen => TokenKind::ParenOpen,
        DefaultToken::ParenClose => TokenKind::ParenClose,
        DefaultToken::Ellipsis => TokenKind::Ellipsis,
        DefaultToken::Colon => TokenKind::Colon,
        DefaultToken::Equal => TokenKind::Equal,
        DefaultToken::At => TokenKind::At,
        DefaultToken::BracketOpen => TokenKind::BracketOpen,
        DefaultToken::BracketClose => TokenKind::BracketClose,
        DefaultToken::BraceOpen => TokenKind::BraceOpen,
        DefaultToken::Pipe => TokenKind::Pipe,
        DefaultToken::BraceClose => TokenKind::BraceClose,
        DefaultToken::Quotes => {
            return Some(match text.len() {
                3 => (
                    TokenKind::BlockStringDelimiter,
                    Transition::Push(Mode::BlockString),
                ),
                2 => (TokenKind::StringDelimiter, Transition::Enclose),
                _ => (TokenKind::StringDelimiter, Transition::Push(Mode::String)),
            })
        }
        DefaultToken::Error => return None,
    };
    Some((kind, Transition::Stay))
}

fn string_rule(token: StringToken) -> Rule {
    match token {
        StringToken::Delimiter => Some((TokenKind::StringDelimiter, Transition::Pop)),
        StringToken::EscapedChar => Some((TokenKind::EscapedChar, Transition::Stay)),
        StringToken::Source => Some((TokenKind::StringSource, Transition::Stay)),
        StringToken::Error => None,
    }
}

fn block_string_rule(token: BlockStringToken, text: &str) -> Rule {
    match token {
        BlockStringToken::Quotes if text.len() == 3 => {
            Some((TokenKind::BlockStringDelimiter, Transition::Pop))
        }
        BlockStringToken::Quotes => Some((TokenKind::QuoteChar, Transition::Stay)),
        BlockStringToken::EscapedChar => Some((TokenKind::EscapedChar, Transition::Stay)),
        BlockStringToken::Source => Some((TokenKind::StringSource, Transition::Stay)),
        BlockStringToken::Error => None,
    }
}

struct Step<'a> {
    rule: Rule,
    text: &'a str,
    span: Span,
}

enum ModeLexer<'a> {
    Default(Lexer<'a, DefaultToken>),
    String(Lexer<'a, StringToken>),
    BlockString(Lexer<'a, BlockStringToken>),
}

impl<'a> ModeLexer<'a> {
    fn advance(&mut self) -> Option<Step<'a>> {
        match self {
            ModeLexer::Default(lex) => {
                let token = lex.next()?;
                let text = lex.slice();
                Some(Step {
                    rule: default_rule(token, text),
                    text,
                    span: lex.span(),
                })
            }
            ModeLexer::String(lex) => {
                let token = lex.next()?;
                Some(Step {
                    rule: string_rule(token),
                    text: lex.slice(),
                    span: lex.span(),
                })
            }
            ModeLexer::BlockString(lex) => {
                let token = lex.next()?;
                let text = lex.slice();
                Some(Step {
                    rule: block_string_rule(token, text),
                    text,
                    span: lex.span(),
                })
            }
        }
    }

    fn source(&self) -> &'a str {
        match self {
            ModeLexer::Default(lex) => lex.source(),
            ModeLexer::String(lex) => lex.source(),
            ModeLexer::BlockString(lex) => lex.source(),
        }
    }

    fn morph(self, mode: Mode) -> Self {
        match self {
            ModeLexer::Default(lex) => switch(lex, mode),
            ModeLexer::String(lex) => switch(lex, mode),
            ModeLexer::BlockString(lex) => switch(lex, mode),
        }
    }
}

fn switch<'a, T>(lex: Lexer<'a, T>, mode: Mode) -> ModeLexer<'a>
where
    T: Logos<'a, Source = str, Extras = ()>,
{
    match mode {
        Mode::Default => ModeLexer::Default(lex.morph()),
        Mode::String => ModeLexer::String(lex.morph()),
        Mode::BlockString => ModeLexer::BlockString(lex.morph()),
    }
}

/// A lazy, finite stream of tokens over one source text.
///
/// Once the input is exhausted or an error has been yielded the scanner only returns `None`;
/// scanning the same text again requires a fresh [tokenize] call.
pub struct Scanner<'a> {
    lexer: Option<ModeLexer<'a>>,
    /// Open modes above the implicit default mode, with the offset of their opening delimiter.
    modes: Vec<(Mode, usize)>,
    pending: Option<Token<'a>>,
    last: Option<(TokenKind, usize)>,
}

/// Start scanning `source` in the default mode.
pub fn tokenize(source: &str) -> Scanner<'_> {
    Scanner {
        lexer: Some(ModeLexer::Default(DefaultToken::lexer(source))),
        modes: Vec::new(),
        pending: None,
        last: None,
    }
}

impl<'a> Scanner<'a> {
    /// The mode on top of the stack.
    #[inline]
    pub fn mode(&self) -> Mode {
        self.modes.last().map_or(Mode::Default, |(mode, _)| *mode)
    }

    fn switch_to(&mut self, mode: Mode) {
        if let Some(lexer) = self.lexer.take() {
            self.lexer = Some(lexer.morph(mode));
        }
    }

    /// An exponent-shaped name like `e10` only counts as an exponent directly after a number.
    fn classify(&self, kind: TokenKind, text: &str, span: &Span) -> TokenKind {
        if kind != TokenKind::ExponentPart {
            return kind;
        }
        let follows_number = matches!(
            self.last,
            Some((last, end)) if last.is_numeric() && end == span.start
        );
        if !follows_number && text[1..].bytes().all(|b| b.is_ascii_digit()) {
            TokenKind::Name
        } else {
            kind
        }
    }

    fn emit(&mut self, token: Token<'a>) -> Option<Result<Token<'a>, LexError>> {
        self.last = Some((token.kind, token.span.end));
        Some(Ok(token))
    }

    fn fail(&mut self, kind: LexErrorKind, span: Span) -> Option<Result<Token<'a>, LexError>> {
        let mode = self.mode();
        self.lexer = None;
        self.pending = None;
        Some(Err(LexError { kind, mode, span }))
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Result<Token<'a>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(token) = self.pending.take() {
            return self.emit(token);
        }

        let lexer = self.lexer.as_mut()?;
        let step = match lexer.advance() {
            Some(step) => step,
            None => {
                let end = lexer.source().len();
                return match self.modes.last().map(|(_, open)| *open) {
                    Some(open) => self.fail(LexErrorKind::Unterminated, open..end),
                    None => {
                        self.lexer = None;
                        None
                    }
                };
            }
        };

        let (kind, transition) = match step.rule {
            Some(rule) => rule,
            None => return self.fail(LexErrorKind::Unrecognized, step.span),
        };

        match transition {
            Transition::Stay => {}
            Transition::Push(mode) => {
                self.modes.push((mode, step.span.start));
                self.switch_to(mode);
            }
            Transition::Pop => {
                self.modes.pop();
                let mode = self.mode();
                self.switch_to(mode);
            }
            Transition::Enclose => {
                let split = step.span.start + 1;
                self.pending = Some(Token {
                    kind,
                    text: &step.text[1..],
                    span: split..step.span.end,
                });
                return self.emit(Token {
                    kind,
                    text: &step.text[..1],
                    span: step.span.start..split,
                });
            }
        }

        let kind = self.classify(kind, step.text, &step.span);
        self.emit(Token {
            kind,
            text: step.text,
            span: step.span,
        })
    }
}

impl<'a> std::iter::FusedIterator for Scanner<'a> {}

#[cfg(test)]
mod tests {
    use super::{tokenize, LexError, LexErrorKind, Mode, TokenKind};

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source)
            .map(|token| token.map(|token| token.kind))
            .collect::<Result<Vec<_>, _>>()
            .unwrap()
    }

    fn texts(source: &str) -> Vec<&str> {
        tokenize(source).map(|token| token.unwrap().text).collect()
    }

    fn error(source: &str) -> LexError {
        tokenize(source)
            .find_map(|token| token.err())
            .expect("expected a lex error")
    }

    #[test]
    fn empty() {
        assert_eq!(kinds(""), vec![]);
        assert_eq!(kinds(",,  \t\n\u{feff} # comment\n"), vec![]);
        assert_eq!(kinds("# trailing comment without newline"), vec![]);
    }

    #[test]
    fn punctuators() {
        assert_eq!(
            kinds("! $ ( ) ... : = @ [ ] { | }"),
            vec![
                TokenKind::Exclam,
                TokenKind::Dollar,
                TokenKind::ParenOpen,
                TokenKind::ParenClose,
                TokenKind::Ellipsis,
                TokenKind::Colon,
                TokenKind::Equal,
                TokenKind::At,
                TokenKind::BracketOpen,
                TokenKind::BracketClose,
                TokenKind::BraceOpen,
                TokenKind::Pipe,
                TokenKind::BraceClose,
            ]
        );
    }

    #[test]
    fn names_and_keywords() {
        assert_eq!(
            kinds("hello query true false null queryable _nullish"),
            vec![
                TokenKind::Name,
                TokenKind::Query,
                TokenKind::True,
                TokenKind::False,
                TokenKind::Null,
                TokenKind::Name,
                TokenKind::Name,
            ]
        );
        assert_eq!(texts("# comment\n hello"), vec!["hello"]);
    }

    #[test]
    fn numbers() {
        assert_eq!(
            kinds("0 -0 1 -12"),
            vec![
                TokenKind::ZeroValue,
                TokenKind::ZeroValue,
                TokenKind::IntegerPart,
                TokenKind::IntegerPart,
            ]
        );
        assert_eq!(
            kinds("1.5e-3"),
            vec![
                TokenKind::IntegerPart,
                TokenKind::FractionalPart,
                TokenKind::ExponentPart,
            ]
        );
        assert_eq!(texts("-1.25E+10"), vec!["-1", ".25", "E+10"]);
        assert_eq!(
            kinds("007"),
            vec![
                TokenKind::ZeroValue,
                TokenKind::ZeroValue,
                TokenKind::IntegerPart,
            ]
        );
    }

    #[test]
    fn exponent_shaped_names() {
        assert_eq!(kinds("1e3"), vec![TokenKind::IntegerPart, TokenKind::ExponentPart]);
        assert_eq!(kinds("e3"), vec![TokenKind::Name]);
        assert_eq!(kinds("1 e3"), vec![TokenKind::IntegerPart, TokenKind::Name]);
        assert_eq!(kinds("e3x"), vec![TokenKind::Name]);
    }

    #[test]
    fn strings() {
        assert_eq!(
            kinds(r#""hello \"world\"""#),
            vec![
                TokenKind::StringDelimiter,
                TokenKind::StringSource,
                TokenKind::EscapedChar,
                TokenKind::StringSource,
                TokenKind::EscapedChar,
                TokenKind::StringDelimiter,
            ]
        );
        assert_eq!(
            texts(r#"{ "a b" }"#),
            vec!["{", "\"", "a b", "\"", "}"]
        );
    }

    #[test]
    fn empty_string() {
        let tokens: Vec<_> = tokenize(r#"a: "" b"#).map(Result::unwrap).collect();
        assert_eq!(tokens[2].kind, TokenKind::StringDelimiter);
        assert_eq!(tokens[2].span, 3..4);
        assert_eq!(tokens[3].kind, TokenKind::StringDelimiter);
        assert_eq!(tokens[3].span, 4..5);
        assert_eq!(tokens[4].kind, TokenKind::Name);
    }

    #[test]
    fn strings_do_not_lex_structure() {
        assert_eq!(
            kinds(r#""{ query: 1 }""#),
            vec![
                TokenKind::StringDelimiter,
                TokenKind::StringSource,
                TokenKind::StringDelimiter,
            ]
        );
    }

    #[test]
    fn block_strings() {
        assert_eq!(
            texts(r#""""say "hi"" now""" x"#),
            vec!["\"\"\"", "say ", "\"", "hi", "\"\"", " now", "\"\"\"", "x"]
        );
        assert_eq!(
            kinds(r#""""""""#),
            vec![
                TokenKind::BlockStringDelimiter,
                TokenKind::BlockStringDelimiter,
            ]
        );
        assert_eq!(
            kinds("\"\"\"line\nline\"\"\""),
            vec![
                TokenKind::BlockStringDelimiter,
                TokenKind::StringSource,
                TokenKind::BlockStringDelimiter,
            ]
        );
    }

    #[test]
    fn scanner_is_fused() {
        let mut scanner = tokenize("a");
        assert!(scanner.next().is_some());
        assert_eq!(scanner.next(), None);
        assert_eq!(scanner.next(), None);
    }

    #[test]
    fn mode_stack() {
        let mut scanner = tokenize(r#"a "b" c"#);
        assert_eq!(scanner.mode(), Mode::Default);
        scanner.next();
        scanner.next();
        assert_eq!(scanner.mode(), Mode::String);
        scanner.next();
        scanner.next();
        assert_eq!(scanner.mode(), Mode::Default);
    }

    #[test]
    fn unrecognized_input() {
        let err = error("{ a % }");
        assert_eq!(err.kind, LexErrorKind::Unrecognized);
        assert_eq!(err.mode, Mode::Default);
        assert_eq!(err.span, 4..5);
    }

    #[test]
    fn bad_escapes() {
        let err = error(r#""\q""#);
        assert_eq!(err.kind, LexErrorKind::Unrecognized);
        assert_eq!(err.mode, Mode::String);

        let err = error(r#""""\q""""#);
        assert_eq!(err.mode, Mode::BlockString);
    }

    #[test]
    fn control_characters() {
        let err = error("\"a\u{1}b\"");
        assert_eq!(err.kind, LexErrorKind::Unrecognized);
        assert_eq!(err.mode, Mode::String);

        let err = error("\"\"\"a\u{1}b\"\"\"");
        assert_eq!(err.kind, LexErrorKind::Unrecognized);
        assert_eq!(err.mode, Mode::BlockString);

        // Tab, DEL and line breaks are plain string characters
        assert_eq!(
            kinds("\"a\tb\u{7f}\""),
            vec![
                TokenKind::StringDelimiter,
                TokenKind::StringSource,
                TokenKind::StringDelimiter
            ]
        );
    }

    #[test]
    fn unterminated_strings() {
        let err = error(r#"a: "abc"#);
        assert_eq!(err.kind, LexErrorKind::Unterminated);
        assert_eq!(err.mode, Mode::String);
        assert_eq!(err.span, 3..7);

        let err = error(r#""""abc"" "#);
        assert_eq!(err.kind, LexErrorKind::Unterminated);
        assert_eq!(err.mode, Mode::BlockString);

        let mut scanner = tokenize("\"");
        assert!(matches!(scanner.next(), Some(Ok(_))));
        assert!(matches!(scanner.next(), Some(Err(_))));
        assert_eq!(scanner.next(), None);
    }
}
