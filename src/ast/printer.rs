use super::ast::*;
use std::{fmt, fmt::Write};

/// Trait for rendering AST Nodes to a new String allocated on the heap.
/// This is implemented by all AST Nodes and can hence be used to granularly render GraphQL language.
/// However, mostly this will be used via [render] on a parsed `Document`.
///
/// Rendering is a separate pass over a finished tree. Each node formats itself at the nesting
/// `level` it's handed and passes `level + 1` down to the selections of a [`SelectionSet`], so
/// no node stores its own indentation.
///
/// For convenience when debugging, AST Nodes that implement `RenderNode` also implement the
/// [`fmt::Display`] trait.
pub trait RenderNode {
    /// Write an AST node to a buffer implementing the [Write] trait.
    ///
    /// The `level` indicates the level of nesting, which increases with each [`SelectionSet`]
    /// and is typically initialized as zero (`0`).
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result;

    /// Render an AST Node to source text as a String allocated on the heap.
    fn render(&self) -> String {
        let mut buf = String::new();
        match self.write_to_buffer(0, &mut buf) {
            Ok(()) => buf,
            _ => "".to_string(),
        }
    }
}

/// Renders any AST Node to its canonical, indented text starting at the top level.
#[inline]
pub fn render<N: RenderNode + ?Sized>(node: &N) -> String {
    node.render()
}

impl<'a> fmt::Display for dyn RenderNode + 'a {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to_buffer(0, f)
    }
}

macro_rules! impl_display {
    ($($node:ty),* $(,)?) => {
        $(
            impl fmt::Display for $node {
                #[inline]
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    self.write_to_buffer(0, f)
                }
            }
        )*
    };
}

impl_display!(
    IntValue,
    FloatValue,
    StringValue<'_>,
    BooleanValue,
    NullValue,
    ListValue<'_>,
    ObjectField<'_>,
    ObjectValue<'_>,
    Value<'_>,
    Argument<'_>,
    Arguments<'_>,
    Field<'_>,
    Selection<'_>,
    SelectionSet<'_>,
    OperationKind,
    OperationDefinition<'_>,
    ExecutableDefinition<'_>,
    Definition<'_>,
    Document<'_>,
);

impl RenderNode for IntValue {
    #[inline]
    fn write_to_buffer(&self, _level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write!(buffer, "{}", self.value)
    }
}

/// Floats always keep a fractional part or an exponent so that they scan as floats again.
#[inline]
fn write_float(value: f64, buffer: &mut dyn Write) -> fmt::Result {
    write!(buffer, "{:?}", value)
}

impl RenderNode for FloatValue {
    #[inline]
    fn write_to_buffer(&self, _level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write_float(self.value, buffer)
    }
}

/// Writes a single-line, quoted string with its special characters escaped.
fn write_string(value: &str, buffer: &mut dyn Write) -> fmt::Result {
    buffer.write_char('"')?;
    for c in value.chars() {
        match c {
            '"' => buffer.write_str("\\\"")?,
            '\\' => buffer.write_str(r"\\")?,
            '\u{0008}' => buffer.write_str(r"\b")?,
            '\u{000C}' => buffer.write_str(r"\f")?,
            '\n' => buffer.write_str(r"\n")?,
            '\r' => buffer.write_str(r"\r")?,
            '\t' => buffer.write_str(r"\t")?,
            // Only reachable for values not built by the parser
            c if c < ' ' => write!(buffer, "\\u{:04X}", c as u32)?,
            c => buffer.write_char(c)?,
        }
    }
    buffer.write_char('"')
}

impl<'a> RenderNode for StringValue<'a> {
    #[inline]
    fn write_to_buffer(&self, _level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write_string(self.value, buffer)
    }
}

impl RenderNode for BooleanValue {
    #[inline]
    fn write_to_buffer(&self, _level: usize, buffer: &mut dyn Write) -> fmt::Result {
        match self.value {
            true => buffer.write_str("true"),
            false => buffer.write_str("false"),
        }
    }
}

impl RenderNode for NullValue {
    #[inline]
    fn write_to_buffer(&self, _level: usize, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_str("null")
    }
}

impl<'a> RenderNode for Value<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        match self {
            Value::Int(value) => write!(buffer, "{}", value),
            Value::Float(value) => write_float(*value, buffer),
            Value::String(value) => write_string(value, buffer),
            Value::Boolean(value) => BooleanValue { value: *value }.write_to_buffer(level, buffer),
            Value::List(value) => value.write_to_buffer(level, buffer),
            Value::Object(value) => value.write_to_buffer(level, buffer),
            Value::Null => NullValue.write_to_buffer(level, buffer),
        }
    }
}

impl<'a> RenderNode for ObjectField<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write!(buffer, "{}: ", self.name)?;
        self.value.write_to_buffer(level, buffer)
    }
}

impl<'a> RenderNode for ObjectValue<'a> {
    /// Fields are written ordered by name, since the underlying map has no order.
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_str("{")?;
        let mut first = true;
        for (name, value) in self.sorted_fields() {
            if first {
                first = false;
            } else {
                buffer.write_str(", ")?;
            }
            write!(buffer, "{}: ", name)?;
            value.write_to_buffer(level, buffer)?;
        }
        buffer.write_str("}")
    }
}

impl<'a> RenderNode for ListValue<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_str("[")?;
        let mut first = true;
        for value in self.children.iter() {
            if first {
                first = false;
            } else {
                buffer.write_str(", ")?;
            }
            value.write_to_buffer(level, buffer)?;
        }
        buffer.write_str("]")
    }
}

impl<'a> RenderNode for Argument<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write!(buffer, "{}: ", self.name)?;
        self.value.write_to_buffer(level, buffer)
    }
}

impl<'a> RenderNode for Arguments<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        buffer.write_str("(")?;
        let mut first = true;
        for argument in self.children.iter() {
            if first {
                first = false;
            } else {
                buffer.write_str(", ")?;
            }
            argument.write_to_buffer(level, buffer)?;
        }
        buffer.write_str(")")
    }
}

impl<'a> RenderNode for SelectionSet<'a> {
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        let level = level + 1;
        buffer.write_str("{")?;
        for selection in self.selections.iter() {
            buffer.write_char('\n')?;
            write_indent(level, buffer)?;
            selection.write_to_buffer(level, buffer)?;
        }
        buffer.write_char('\n')?;
        write_indent(level - 1, buffer)?;
        buffer.write_char('}')
    }
}

impl<'a> RenderNode for Selection<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        match self {
            Selection::Field(field) => field.write_to_buffer(level, buffer),
        }
    }
}

impl<'a> RenderNode for Field<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        if let Some(alias) = self.alias {
            write!(buffer, "{}: {}", alias, self.name)?;
        } else {
            buffer.write_str(self.name)?;
        };
        if let Some(arguments) = &self.arguments {
            arguments.write_to_buffer(level, buffer)?;
        }
        if let Some(selection_set) = &self.selection_set {
            buffer.write_str(" ")?;
            selection_set.write_to_buffer(level, buffer)?;
        }
        Ok(())
    }
}

impl RenderNode for OperationKind {
    #[inline]
    fn write_to_buffer(&self, _level: usize, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_str(self.as_str())
    }
}

impl<'a> RenderNode for OperationDefinition<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        if !self.is_shorthand() {
            self.operation.write_to_buffer(level, buffer)?;
            if let Some(name) = self.name {
                write!(buffer, " {}", name)?;
            }
            buffer.write_str(" ")?;
        }
        self.selection_set.write_to_buffer(level, buffer)
    }
}

impl<'a> RenderNode for ExecutableDefinition<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        match self {
            ExecutableDefinition::Operation(operation) => operation.write_to_buffer(level, buffer),
        }
    }
}

impl<'a> RenderNode for Definition<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        match self {
            Definition::Executable(executable) => executable.write_to_buffer(level, buffer),
        }
    }
}

impl<'a> RenderNode for Document<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        let mut first = true;
        for definition in self.definitions.iter() {
            if first {
                first = false;
            } else {
                buffer.write_str("\n\n")?;
            }
            definition.write_to_buffer(level, buffer)?;
        }
        Ok(())
    }
}

#[inline(always)]
fn write_indent(level: usize, buffer: &mut dyn Write) -> fmt::Result {
    for _ in 0..level {
        buffer.write_str("  ")?
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::*;

    #[test]
    fn values() {
        let ctx = ASTContext::new();
        let ast = Value::parse(&ctx, "{ b: [1, 2], a: true }");
        assert_eq!(ast.unwrap().render(), "{a: true, b: [1, 2]}");
        let ast = Value::parse(&ctx, "123.23");
        assert_eq!(ast.unwrap().render(), "123.23");
        let ast = Value::parse(&ctx, "1e3");
        assert_eq!(ast.unwrap().render(), "1000.0");
        let ast = Value::parse(&ctx, "-0");
        assert_eq!(ast.unwrap().render(), "0");
        let ast = Value::parse(&ctx, "[[], {}, null]");
        assert_eq!(ast.unwrap().render(), "[[], {}, null]");

        for source in ["1.5e308", "-2e-300", "0.1"] {
            let value = Value::parse(&ctx, source).unwrap();
            assert_eq!(Value::parse(&ctx, value.render()).unwrap(), value);
        }
    }

    #[test]
    fn strings() {
        let ctx = ASTContext::new();
        let ast = Value::parse(&ctx, r#""quote \" slash \\ \/ tab \t""#);
        assert_eq!(ast.unwrap().render(), r#""quote \" slash \\ / tab \t""#);

        let ast = Value::parse(&ctx, "\"\"\"\n  block \"quoted\"\n\"\"\"");
        assert_eq!(ast.unwrap().render(), r#""\n  block \"quoted\"\n""#);

        let node = StringValue::new(&ctx, "bell \u{7}");
        assert_eq!(node.render(), r#""bell \u0007""#);

        // DEL and non-ASCII characters are written as they are
        let document = parse(&ctx, "{ a(x: \"a\u{7f}b \u{1F600}\") }").unwrap();
        let rendered = document.render();
        assert_eq!(rendered, "{\n  a(x: \"a\u{7f}b \u{1F600}\")\n}");
        assert_eq!(parse(&ctx, rendered.as_str()).unwrap(), document);
    }

    #[test]
    fn arguments() {
        let ctx = ASTContext::new();
        let ast = Arguments::parse(&ctx, "(a:1)");
        assert_eq!(ast.unwrap().render(), "(a: 1)");
        let ast = Arguments::parse(&ctx, "(a:1 b:\"2\")");
        assert_eq!(ast.unwrap().render(), "(a: 1, b: \"2\")");
    }

    #[test]
    fn field() {
        let ctx = ASTContext::new();
        let ast = Field::parse(&ctx, "field { child }");
        assert_eq!(ast.unwrap().render(), "field {\n  child\n}");
        let ast = Field::parse(&ctx, "field { child { child } }");
        assert_eq!(
            ast.unwrap().render(),
            "field {\n  child {\n    child\n  }\n}"
        );
        let ast = Field::parse(&ctx, "alias : field");
        assert_eq!(ast.unwrap().render(), "alias: field");
        let ast = Field::parse(&ctx, "field (test: true)");
        assert_eq!(ast.unwrap().render(), "field(test: true)");
        let ast = Field::parse(&ctx, "alias: field (test: true) { a }");
        assert_eq!(ast.unwrap().render(), "alias: field(test: true) {\n  a\n}");
    }

    #[test]
    fn operation_definition() {
        let ctx = ASTContext::new();
        let ast = OperationDefinition::parse(
            &ctx,
            r#"
            query {
              field
            }
        "#,
        );
        assert_eq!(ast.unwrap().render(), "{\n  field\n}");

        let ast = OperationDefinition::parse(
            &ctx,
            r#"
            query Name {
              field
            }
        "#,
        );
        assert_eq!(ast.unwrap().render(), "query Name {\n  field\n}");
    }

    #[test]
    fn nested_indentation() {
        let ctx = ASTContext::new();
        let document = parse(&ctx, "{ a { b } }").unwrap();
        let text = render(document);
        assert_eq!(text, "{\n  a {\n    b\n  }\n}");

        let indent = |name: &str| {
            let line = text.lines().find(|line| line.trim_start().starts_with(name));
            line.map(|line| line.len() - line.trim_start().len())
        };
        assert_eq!(indent("a"), Some(2));
        assert_eq!(indent("b"), Some(4));
    }

    #[test]
    fn display() {
        let ctx = ASTContext::new();
        let document = parse(&ctx, "query A { a } { b }").unwrap();
        assert_eq!(document.to_string(), "query A {\n  a\n}\n\n{\n  b\n}");
        let node: &dyn RenderNode = document;
        assert_eq!(format!("{}", node), document.render());
    }

    #[test]
    fn rendering_is_stable() {
        let ctx = ASTContext::new();
        let source = r#"query Q { a: b(x: [1, 2.5, "s\n"], y: {z: null, w: false}) { c d } }"#;
        let first = render(parse(&ctx, source).unwrap());
        let second = render(parse(&ctx, first.as_str()).unwrap());
        assert_eq!(first, second);
        assert_eq!(parse(&ctx, source).unwrap(), parse(&ctx, first.as_str()).unwrap());
    }

    #[test]
    fn kitchen_sink() {
        let ctx = ASTContext::new();
        let query = include_str!("../../fixture/kitchen_sink.graphql");
        let ast = Document::parse(&ctx, query);
        let expected = indoc::indoc! {r#"
            query queryName {
              whoever123is: node(id: [123, 456]) {
                id
                field2 {
                  id
                  alias: field1(first: 10, after: "cursor") {
                    id
                  }
                }
              }
            }

            {
              like(story: 123, ratio: -1500.0, zero: 0) {
                story {
                  id
                }
              }
            }

            query objects {
              foo(size: {a: [1, [2, 3], {}], b: 2}, empty: [], str: "tab\tquote\"", block: "\n  block \"string\" text\n  ")
            }

            query teeny {
              unnamed(truthy: true, falsey: false, nullish: null)
              query
            }"#};
        assert_eq!(ast.unwrap().render(), expected);
    }
}
