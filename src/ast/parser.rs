use super::ast::*;
use super::ast_kind::ASTKind;
use super::lexer::{tokenize, Scanner, Token, TokenKind};
use crate::error::{Error, ErrorType, Result, SyntaxError};
use bumpalo::collections::{String as BumpString, Vec};
use logos::Span;

type ParseResult<T> = std::result::Result<T, ErrorType>;

const NONE: &[TokenKind] = &[];
const END: &[TokenKind] = &[TokenKind::End];
const NAME: &[TokenKind] = &[TokenKind::Name];
const INT: &[TokenKind] = &[TokenKind::ZeroValue, TokenKind::IntegerPart];
const FLOAT_FRAGMENT: &[TokenKind] = &[TokenKind::FractionalPart, TokenKind::ExponentPart];
const BOOLEAN: &[TokenKind] = &[TokenKind::True, TokenKind::False];
const STRING_START: &[TokenKind] = &[TokenKind::StringDelimiter, TokenKind::BlockStringDelimiter];
const STRING_PART: &[TokenKind] = &[
    TokenKind::StringSource,
    TokenKind::EscapedChar,
    TokenKind::StringDelimiter,
];
const BLOCK_STRING_PART: &[TokenKind] = &[
    TokenKind::StringSource,
    TokenKind::EscapedChar,
    TokenKind::QuoteChar,
    TokenKind::BlockStringDelimiter,
];
const VALUE: &[TokenKind] = &[
    TokenKind::ZeroValue,
    TokenKind::IntegerPart,
    TokenKind::StringDelimiter,
    TokenKind::BlockStringDelimiter,
    TokenKind::True,
    TokenKind::False,
    TokenKind::Null,
    TokenKind::BracketOpen,
    TokenKind::BraceOpen,
];
const LIST_ITEM: &[TokenKind] = &[
    TokenKind::ZeroValue,
    TokenKind::IntegerPart,
    TokenKind::StringDelimiter,
    TokenKind::BlockStringDelimiter,
    TokenKind::True,
    TokenKind::False,
    TokenKind::Null,
    TokenKind::BracketOpen,
    TokenKind::BraceOpen,
    TokenKind::BracketClose,
];
const OBJECT_ITEM: &[TokenKind] = &[TokenKind::Name, TokenKind::BraceClose];
const ARGUMENT_ITEM: &[TokenKind] = &[TokenKind::Name, TokenKind::ParenClose];
const SELECTION_ITEM: &[TokenKind] = &[TokenKind::Name, TokenKind::BraceClose];
const OPERATION: &[TokenKind] = &[TokenKind::Query, TokenKind::BraceOpen];

/// How many lists, objects and selection sets may be nested inside each other.
const MAX_DEPTH: usize = 128;

/// Builds the error for a token that no pending production accepts.
fn unexpected(node: ASTKind, token: &Token<'_>, expected: &'static [TokenKind]) -> ErrorType {
    ErrorType::Syntax(SyntaxError {
        node,
        found: token.kind,
        text: token.text.to_string(),
        span: token.span.clone(),
        expected,
        reason: None,
    })
}

/// Builds the error for a token of an acceptable kind that still can't be used.
fn rejected(node: ASTKind, token: &Token<'_>, reason: &'static str) -> ErrorType {
    ErrorType::Syntax(SyntaxError {
        node,
        found: token.kind,
        text: token.text.to_string(),
        span: token.span.clone(),
        expected: NONE,
        reason: Some(reason),
    })
}

pub(crate) mod private {
    use super::*;

    /// Private Parser context state that's kept to keep track of the current parser's progress and
    /// state. This contains the AST context's arena and a [Scanner] with one token of lookahead.
    pub struct ParserContext<'a> {
        pub(crate) arena: &'a bumpalo::Bump,
        pub(crate) peek: Option<Token<'a>>,
        pub(crate) iter: Scanner<'a>,
        pub(crate) source: &'a str,
        pub(crate) depth: usize,
    }

    impl<'a> ParserContext<'a> {
        /// Create a new Parser context for a given AST context and initialize it with an input source
        /// string to parse from.
        pub(crate) fn new(ctx: &'a ASTContext, source: &'a str) -> Self {
            ParserContext {
                arena: &ctx.arena,
                peek: None,
                iter: tokenize(source),
                source,
                depth: 0,
            }
        }

        /// Pulls a token from the scanner. An exhausted scanner keeps yielding end tokens.
        fn pull(&mut self) -> ParseResult<Token<'a>> {
            match self.iter.next() {
                Some(Ok(token)) => Ok(token),
                Some(Err(error)) => Err(ErrorType::Lex(error)),
                None => Ok(Token::end(self.source.len())),
            }
        }

        #[inline]
        pub(crate) fn next(&mut self) -> ParseResult<Token<'a>> {
            match self.peek.take() {
                Some(token) => Ok(token),
                None => self.pull(),
            }
        }

        #[inline]
        pub(crate) fn peek(&mut self) -> ParseResult<&Token<'a>> {
            let token = match self.peek.take() {
                Some(token) => token,
                None => self.pull()?,
            };
            let token: &Token<'a> = self.peek.insert(token);
            Ok(token)
        }

        #[inline]
        pub(crate) fn peek_kind(&mut self) -> ParseResult<TokenKind> {
            self.peek().map(|token| token.kind)
        }

        /// Consumes the next token only if it has the given kind.
        #[inline]
        pub(crate) fn eat(&mut self, kind: TokenKind) -> ParseResult<bool> {
            if self.peek_kind()? == kind {
                self.next()?;
                Ok(true)
            } else {
                Ok(false)
            }
        }

        /// Consumes the next token only if it has the given kind and starts right at `offset`,
        /// with no separator in between.
        pub(crate) fn eat_adjacent(
            &mut self,
            kind: TokenKind,
            offset: usize,
        ) -> ParseResult<Option<Token<'a>>> {
            let token = self.peek()?;
            if token.kind == kind && token.span.start == offset {
                self.next().map(Some)
            } else {
                Ok(None)
            }
        }

        pub(crate) fn expect(
            &mut self,
            kind: TokenKind,
            node: ASTKind,
            expected: &'static [TokenKind],
        ) -> ParseResult<Token<'a>> {
            let token = self.next()?;
            if token.kind == kind {
                Ok(token)
            } else {
                Err(unexpected(node, &token, expected))
            }
        }

        /// Consumes a name. Keywords are names wherever a name is expected.
        pub(crate) fn expect_name(&mut self, node: ASTKind) -> ParseResult<&'a str> {
            let token = self.next()?;
            if token.kind.is_name() {
                Ok(token.text)
            } else {
                Err(unexpected(node, &token, NAME))
            }
        }

        /// Runs `parse` one nesting level deeper. Fails on the opening token once nesting
        /// exceeds [MAX_DEPTH], which bounds the recursion on deeply nested input.
        pub(crate) fn nested<T>(
            &mut self,
            node: ASTKind,
            parse: impl FnOnce(&mut Self) -> ParseResult<T>,
        ) -> ParseResult<T> {
            if self.depth >= MAX_DEPTH {
                let token = self.next()?;
                return Err(rejected(node, &token, "nesting is too deep"));
            }
            self.depth += 1;
            let result = parse(self);
            self.depth -= 1;
            result
        }

        /// Requires that no input is left.
        pub(crate) fn finish(&mut self, node: ASTKind) -> ParseResult<()> {
            let token = self.next()?;
            match token.kind {
                TokenKind::End => Ok(()),
                _ => Err(unexpected(node, &token, END)),
            }
        }
    }

    /// (Private) Trait for parsing AST Nodes from a Parser Context.
    /// The [`super::ParseNode`] trait implements the public `parse` method instead.
    pub trait ParseNode<'a>: Sized {
        /// The node reported when the input continues past this node.
        const KIND: ASTKind;

        fn new_with_ctx(ctx: &mut ParserContext<'a>) -> ParseResult<Self>;
    }
}

/// Trait for parsing AST Nodes from source texts using recursive descent over a [Scanner].
///
/// This trait is implemented by all AST Nodes and can hence be used to granularly parse GraphQL language.
/// However, mostly this will be used via `Document::parse` or [parse].
pub trait ParseNode<'a>: private::ParseNode<'a> {
    /// Parse an input source text into the implementor's AST Node structure and allocate the
    /// resulting AST into the current AST Context's arena.
    ///
    /// The whole input must be consumed by the node; trailing tokens are a syntax error.
    fn parse<T: ToString>(ctx: &'a ASTContext, source: T) -> Result<&'a Self> {
        let source = ctx.alloc_string(source.to_string());
        let mut parser_ctx = private::ParserContext::new(ctx, source);
        let result = Self::new_with_ctx(&mut parser_ctx)
            .and_then(|node| parser_ctx.finish(Self::KIND).map(|()| node));
        match result {
            Ok(value) => Ok(ctx.alloc(value)),
            Err(error) => Err(Error::new(source, error)),
        }
    }
}

impl<'a, T: private::ParseNode<'a>> ParseNode<'a> for T {}

/// Parses a GraphQL document and allocates its tree into the AST context's arena.
///
/// This is the same as calling `Document::parse`.
#[inline]
pub fn parse<'a>(ctx: &'a ASTContext, source: &str) -> Result<&'a Document<'a>> {
    Document::parse(ctx, source)
}

fn int_part<'a>(ctx: &mut private::ParserContext<'a>, node: ASTKind) -> ParseResult<Token<'a>> {
    let token = ctx.next()?;
    match token.kind {
        TokenKind::ZeroValue | TokenKind::IntegerPart => Ok(token),
        _ => Err(unexpected(node, &token, INT)),
    }
}

fn parse_int(token: &Token<'_>) -> ParseResult<i64> {
    lexical_core::parse::<i64>(token.text.as_bytes())
        .map_err(|_| rejected(ASTKind::Int, token, "integer is out of range"))
}

/// Joins the fractional and exponent fragments directly following `int` onto its text.
/// Returns `None` when neither fragment follows, i.e. when `int` is a plain integer.
fn float_text<'a>(
    ctx: &mut private::ParserContext<'a>,
    int: &Token<'a>,
) -> ParseResult<Option<(String, Span)>> {
    let fractional = ctx.eat_adjacent(TokenKind::FractionalPart, int.span.end)?;
    let fractional_end = fractional.as_ref().map_or(int.span.end, |token| token.span.end);
    let exponent = ctx.eat_adjacent(TokenKind::ExponentPart, fractional_end)?;
    if fractional.is_none() && exponent.is_none() {
        return Ok(None);
    }

    let mut text = String::from(int.text);
    let mut end = int.span.end;
    for fragment in [fractional, exponent].iter().flatten() {
        text.push_str(fragment.text);
        end = fragment.span.end;
    }
    Ok(Some((text, int.span.start..end)))
}

/// Parses joined float text. Values that overflow to infinity are rejected, since they
/// could not be written back as a float literal.
fn parse_float(text: &str, span: Span) -> ParseResult<f64> {
    match lexical_core::parse::<f64>(text.as_bytes()) {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(rejected(
            ASTKind::Float,
            &Token {
                kind: TokenKind::IntegerPart,
                text,
                span,
            },
            "float is out of range",
        )),
    }
}

fn decode_escape(text: &str) -> Option<char> {
    match text.as_bytes().get(1)? {
        b'"' => Some('"'),
        b'\\' => Some('\\'),
        b'/' => Some('/'),
        b'b' => Some('\u{0008}'),
        b'f' => Some('\u{000C}'),
        b'n' => Some('\n'),
        b'r' => Some('\r'),
        b't' => Some('\t'),
        _ => None,
    }
}

impl<'a> private::ParseNode<'a> for BooleanValue {
    const KIND: ASTKind = ASTKind::Boolean;

    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<BooleanValue> {
        let token = ctx.next()?;
        match token.kind {
            TokenKind::True => Ok(BooleanValue { value: true }),
            TokenKind::False => Ok(BooleanValue { value: false }),
            _ => Err(unexpected(ASTKind::Boolean, &token, BOOLEAN)),
        }
    }
}

impl<'a> private::ParseNode<'a> for NullValue {
    const KIND: ASTKind = ASTKind::Null;

    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<NullValue> {
        ctx.expect(TokenKind::Null, ASTKind::Null, &[TokenKind::Null])?;
        Ok(NullValue)
    }
}

impl<'a> private::ParseNode<'a> for IntValue {
    const KIND: ASTKind = ASTKind::Int;

    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<IntValue> {
        let token = int_part(ctx, ASTKind::Int)?;
        Ok(IntValue {
            value: parse_int(&token)?,
        })
    }
}

impl<'a> private::ParseNode<'a> for FloatValue {
    const KIND: ASTKind = ASTKind::Float;

    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<FloatValue> {
        let int = int_part(ctx, ASTKind::Float)?;
        match float_text(ctx, &int)? {
            Some((text, span)) => Ok(FloatValue {
                value: parse_float(&text, span)?,
            }),
            None => {
                let token = ctx.next()?;
                Err(unexpected(ASTKind::Float, &token, FLOAT_FRAGMENT))
            }
        }
    }
}

impl<'a> private::ParseNode<'a> for StringValue<'a> {
    const KIND: ASTKind = ASTKind::String;

    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<StringValue<'a>> {
        let open = ctx.next()?;
        let (block, expected) = match open.kind {
            TokenKind::StringDelimiter => (false, STRING_PART),
            TokenKind::BlockStringDelimiter => (true, BLOCK_STRING_PART),
            _ => return Err(unexpected(ASTKind::String, &open, STRING_START)),
        };

        let mut value = BumpString::new_in(ctx.arena);
        loop {
            let token = ctx.next()?;
            match token.kind {
                kind if kind == open.kind => break,
                TokenKind::StringSource => value.push_str(token.text),
                TokenKind::QuoteChar if block => value.push_str(token.text),
                TokenKind::EscapedChar => match decode_escape(token.text) {
                    Some(decoded) => value.push(decoded),
                    None => return Err(unexpected(ASTKind::String, &token, NONE)),
                },
                _ => return Err(unexpected(ASTKind::String, &token, expected)),
            }
        }

        Ok(StringValue {
            value: value.into_bump_str(),
        })
    }
}

impl<'a> private::ParseNode<'a> for Value<'a> {
    const KIND: ASTKind = ASTKind::Value;

    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<Value<'a>> {
        match ctx.peek_kind()? {
            TokenKind::ZeroValue | TokenKind::IntegerPart => {
                let int = int_part(ctx, ASTKind::Value)?;
                match float_text(ctx, &int)? {
                    Some((text, span)) => parse_float(&text, span).map(Value::Float),
                    None => parse_int(&int).map(Value::Int),
                }
            }
            TokenKind::StringDelimiter | TokenKind::BlockStringDelimiter => {
                StringValue::new_with_ctx(ctx).map(Value::from)
            }
            TokenKind::True | TokenKind::False => BooleanValue::new_with_ctx(ctx).map(Value::from),
            TokenKind::Null => NullValue::new_with_ctx(ctx).map(Value::from),
            TokenKind::BracketOpen => ListValue::new_with_ctx(ctx).map(Value::List),
            TokenKind::BraceOpen => ObjectValue::new_with_ctx(ctx).map(Value::Object),
            _ => {
                let token = ctx.next()?;
                Err(unexpected(ASTKind::Value, &token, VALUE))
            }
        }
    }
}

impl<'a> private::ParseNode<'a> for ListValue<'a> {
    const KIND: ASTKind = ASTKind::List;

    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<ListValue<'a>> {
        ctx.nested(ASTKind::List, |ctx| {
            ctx.expect(TokenKind::BracketOpen, ASTKind::List, &[TokenKind::BracketOpen])?;
            let mut children = Vec::new_in(ctx.arena);
            loop {
                match ctx.peek_kind()? {
                    TokenKind::BracketClose => {
                        ctx.next()?;
                        break;
                    }
                    kind if VALUE.contains(&kind) => children.push(Value::new_with_ctx(ctx)?),
                    _ => {
                        let token = ctx.next()?;
                        return Err(unexpected(ASTKind::List, &token, LIST_ITEM));
                    }
                }
            }
            Ok(ListValue { children })
        })
    }
}

impl<'a> private::ParseNode<'a> for ObjectField<'a> {
    const KIND: ASTKind = ASTKind::ObjectField;

    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<ObjectField<'a>> {
        let name = ctx.expect_name(ASTKind::ObjectField)?;
        ctx.expect(TokenKind::Colon, ASTKind::ObjectField, &[TokenKind::Colon])?;
        let value = Value::new_with_ctx(ctx)?;
        Ok(ObjectField { name, value })
    }
}

impl<'a> private::ParseNode<'a> for ObjectValue<'a> {
    const KIND: ASTKind = ASTKind::Object;

    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<ObjectValue<'a>> {
        ctx.nested(ASTKind::Object, |ctx| {
            ctx.expect(TokenKind::BraceOpen, ASTKind::Object, &[TokenKind::BraceOpen])?;
            if ctx.eat(TokenKind::BraceClose)? {
                return Ok(ObjectValue::new_in(ctx.arena));
            }

            let field = ObjectField::new_with_ctx(ctx)?;
            let mut object = ObjectValue::from_field_in(field, ctx.arena);
            loop {
                match ctx.peek_kind()? {
                    TokenKind::BraceClose => {
                        ctx.next()?;
                        break;
                    }
                    kind if kind.is_name() => {
                        object.insert(ObjectField::new_with_ctx(ctx)?);
                    }
                    _ => {
                        let token = ctx.next()?;
                        return Err(unexpected(ASTKind::Object, &token, OBJECT_ITEM));
                    }
                }
            }
            Ok(object)
        })
    }
}

impl<'a> private::ParseNode<'a> for Argument<'a> {
    const KIND: ASTKind = ASTKind::Argument;

    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<Argument<'a>> {
        let name = ctx.expect_name(ASTKind::Argument)?;
        ctx.expect(TokenKind::Colon, ASTKind::Argument, &[TokenKind::Colon])?;
        let value = Value::new_with_ctx(ctx)?;
        Ok(Argument { name, value })
    }
}

impl<'a> private::ParseNode<'a> for Arguments<'a> {
    const KIND: ASTKind = ASTKind::Arguments;

    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<Arguments<'a>> {
        ctx.expect(TokenKind::ParenOpen, ASTKind::Arguments, &[TokenKind::ParenOpen])?;
        let mut children = Vec::new_in(ctx.arena);
        children.push(Argument::new_with_ctx(ctx)?);
        loop {
            match ctx.peek_kind()? {
                TokenKind::ParenClose => {
                    ctx.next()?;
                    break;
                }
                kind if kind.is_name() => children.push(Argument::new_with_ctx(ctx)?),
                _ => {
                    let token = ctx.next()?;
                    return Err(unexpected(ASTKind::Arguments, &token, ARGUMENT_ITEM));
                }
            }
        }
        Ok(Arguments { children })
    }
}

impl<'a> private::ParseNode<'a> for Field<'a> {
    const KIND: ASTKind = ASTKind::Field;

    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<Field<'a>> {
        let name_or_alias = ctx.expect_name(ASTKind::Field)?;
        let (alias, name) = if ctx.eat(TokenKind::Colon)? {
            (Some(name_or_alias), ctx.expect_name(ASTKind::Field)?)
        } else {
            (None, name_or_alias)
        };

        let arguments = match ctx.peek_kind()? {
            TokenKind::ParenOpen => Some(Arguments::new_with_ctx(ctx)?),
            _ => None,
        };
        let selection_set = match ctx.peek_kind()? {
            TokenKind::BraceOpen => Some(SelectionSet::new_with_ctx(ctx)?),
            _ => None,
        };

        Ok(Field {
            alias,
            name,
            arguments,
            directives: None,
            selection_set,
        })
    }
}

impl<'a> private::ParseNode<'a> for Selection<'a> {
    const KIND: ASTKind = ASTKind::Selection;

    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<Selection<'a>> {
        if ctx.peek_kind()?.is_name() {
            Field::new_with_ctx(ctx).map(Selection::Field)
        } else {
            let token = ctx.next()?;
            Err(unexpected(ASTKind::Selection, &token, NAME))
        }
    }
}

impl<'a> private::ParseNode<'a> for SelectionSet<'a> {
    const KIND: ASTKind = ASTKind::SelectionSet;

    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<SelectionSet<'a>> {
        ctx.nested(ASTKind::SelectionSet, |ctx| {
            ctx.expect(TokenKind::BraceOpen, ASTKind::SelectionSet, &[TokenKind::BraceOpen])?;
            let mut selections = Vec::new_in(ctx.arena);
            selections.push(Selection::new_with_ctx(ctx)?);
            loop {
                match ctx.peek_kind()? {
                    TokenKind::BraceClose => {
                        ctx.next()?;
                        break;
                    }
                    kind if kind.is_name() => selections.push(Selection::new_with_ctx(ctx)?),
                    _ => {
                        let token = ctx.next()?;
                        return Err(unexpected(ASTKind::SelectionSet, &token, SELECTION_ITEM));
                    }
                }
            }
            Ok(SelectionSet { selections })
        })
    }
}

impl<'a> private::ParseNode<'a> for OperationKind {
    const KIND: ASTKind = ASTKind::OperationKind;

    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<OperationKind> {
        ctx.expect(TokenKind::Query, ASTKind::OperationKind, &[TokenKind::Query])?;
        Ok(OperationKind::Query)
    }
}

impl<'a> private::ParseNode<'a> for OperationDefinition<'a> {
    const KIND: ASTKind = ASTKind::OperationDefinition;

    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<OperationDefinition<'a>> {
        let (operation, name) = match ctx.peek_kind()? {
            TokenKind::BraceOpen => (OperationKind::Query, None),
            TokenKind::Query => {
                let operation = OperationKind::new_with_ctx(ctx)?;
                let name = if ctx.peek_kind()?.is_name() {
                    Some(ctx.expect_name(ASTKind::OperationDefinition)?)
                } else {
                    None
                };
                (operation, name)
            }
            _ => {
                let token = ctx.next()?;
                return Err(unexpected(ASTKind::OperationDefinition, &token, OPERATION));
            }
        };
        let selection_set = SelectionSet::new_with_ctx(ctx)?;
        Ok(OperationDefinition {
            operation,
            name,
            variable_definitions: None,
            directives: None,
            selection_set,
        })
    }
}

impl<'a> private::ParseNode<'a> for ExecutableDefinition<'a> {
    const KIND: ASTKind = ASTKind::ExecutableDefinition;

    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<ExecutableDefinition<'a>> {
        OperationDefinition::new_with_ctx(ctx).map(ExecutableDefinition::Operation)
    }
}

impl<'a> private::ParseNode<'a> for Definition<'a> {
    const KIND: ASTKind = ASTKind::Definition;

    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<Definition<'a>> {
        ExecutableDefinition::new_with_ctx(ctx).map(Definition::Executable)
    }
}

impl<'a> private::ParseNode<'a> for Document<'a> {
    const KIND: ASTKind = ASTKind::Document;

    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<Document<'a>> {
        let mut definitions = Vec::new_in(ctx.arena);
        definitions.push(Definition::new_with_ctx(ctx)?);
        while ctx.peek_kind()? != TokenKind::End {
            definitions.push(Definition::new_with_ctx(ctx)?);
        }
        Ok(Document { definitions })
    }
}
