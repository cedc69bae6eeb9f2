use bumpalo::collections::Vec;
use hashbrown::{hash_map::DefaultHashBuilder, HashMap};

/// A context for a GraphQL document which holds an arena allocator.
///
/// For the duration of parsing, storing, and rendering an AST it's performant and convenient to
/// allocate memory in one chunk for the AST's nodes. This context represents the lifetime of an
/// AST: every node of a parsed tree borrows from it, and the whole tree is dropped at once when
/// the context goes out of scope.
pub struct ASTContext {
    /// An arena allocator that holds the memory allocated for the AST Context's lifetime
    pub arena: bumpalo::Bump,
}

impl ASTContext {
    /// Create a new AST context with a preallocated arena.
    pub fn new() -> Self {
        let arena = bumpalo::Bump::new();
        ASTContext { arena }
    }

    /// Put the value of `item` onto the arena and return a reference to it.
    #[inline]
    pub fn alloc<T>(&self, item: T) -> &T {
        self.arena.alloc(item)
    }

    /// Allocate an `&str` slice onto the arena and return a reference to it.
    #[inline]
    pub fn alloc_str(&self, str: &str) -> &str {
        self.arena.alloc_str(str)
    }

    /// Puts a `String` onto the arena and returns a reference to it to tie the `String`'s lifetime
    /// to this AST context without reallocating or copying it.
    #[inline]
    pub fn alloc_string(&self, str: String) -> &str {
        self.arena.alloc(str)
    }
}

impl Default for ASTContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Map of an Object value's field names to their values, allocated in the AST Context's arena.
pub type ObjectMap<'a> = HashMap<&'a str, Value<'a>, DefaultHashBuilder, &'a bumpalo::Bump>;

/// AST Node of an integer value.
///
/// A signed integer without leading zeros. `0` and `-0` are spelled with a dedicated token.
/// [Reference](https://spec.graphql.org/October2021/#sec-Int-Value)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct IntValue {
    pub value: i64,
}

/// AST Node of a floating point value.
///
/// The value is composed by joining the integer, fractional and exponent fragments of the source
/// text before parsing the joined text, so signs and exponents are handled by the float parser.
/// [Reference](https://spec.graphql.org/October2021/#sec-Float-Value)
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct FloatValue {
    pub value: f64,
}

/// AST Node of a string value.
///
/// Escape sequences are decoded while parsing, so `value` holds the resolved contents of either
/// a single-line or a block string.
/// [Reference](https://spec.graphql.org/October2021/#sec-String-Value)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct StringValue<'a> {
    pub value: &'a str,
}

impl<'a> StringValue<'a> {
    pub fn new<S: AsRef<str>>(ctx: &'a ASTContext, str: S) -> Self {
        StringValue {
            value: ctx.alloc_str(str.as_ref()),
        }
    }
}

/// AST Node of a boolean value
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Boolean-Value)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct BooleanValue {
    pub value: bool,
}

/// AST Node of the `null` literal, which carries no payload.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Null-Value)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct NullValue;

/// AST Node for a List of values.
///
/// Lists in GraphQL are ordered sequences and serialize to JSON arrays. Its children are the
/// unwrapped [Value]s of its elements.
/// [Reference](https://spec.graphql.org/October2021/#sec-List-Value)
#[derive(Debug, PartialEq, Clone)]
pub struct ListValue<'a> {
    pub children: Vec<'a, Value<'a>>,
}

impl<'a> ListValue<'a> {
    /// Checks whether this List contains any values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.children.len()
    }
}

/// AST Node for a field of an Object value.
///
/// This is only the seed from which an [ObjectValue] is started and which it's extended by.
/// [Reference](https://spec.graphql.org/October2021/#ObjectField)
#[derive(Debug, PartialEq, Clone)]
pub struct ObjectField<'a> {
    pub name: &'a str,
    pub value: Value<'a>,
}

/// AST Node for an Object value, which maps field names to values.
///
/// Objects in GraphQL are unordered, keyed input values and serialize to JSON objects. When a
/// name is repeated the last field wins.
/// [Reference](https://spec.graphql.org/October2021/#sec-Input-Object-Values)
#[derive(Debug, PartialEq, Clone)]
pub struct ObjectValue<'a> {
    pub fields: ObjectMap<'a>,
}

impl<'a> ObjectValue<'a> {
    /// Creates an empty Object allocated in the given arena.
    #[inline]
    pub fn new_in(arena: &'a bumpalo::Bump) -> Self {
        ObjectValue {
            fields: HashMap::new_in(arena),
        }
    }

    /// Creates an Object seeded with a first field.
    #[inline]
    pub fn from_field_in(field: ObjectField<'a>, arena: &'a bumpalo::Bump) -> Self {
        let mut object = ObjectValue::new_in(arena);
        object.insert(field);
        object
    }

    /// Adds a field, replacing and returning the value of an earlier field with the same name.
    #[inline]
    pub fn insert(&mut self, field: ObjectField<'a>) -> Option<Value<'a>> {
        self.fields.insert(field.name, field.value)
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&Value<'a>> {
        self.fields.get(name)
    }

    /// Checks whether this Object contains any fields.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns the fields ordered by name, which is how Objects are rendered.
    pub fn sorted_fields(&self) -> std::vec::Vec<(&'a str, &Value<'a>)> {
        let mut fields: std::vec::Vec<_> =
            self.fields.iter().map(|(name, value)| (*name, value)).collect();
        fields.sort_unstable_by(|a, b| a.0.cmp(b.0));
        fields
    }
}

/// AST Node of possible input values in GraphQL.
///
/// This is the "value of values": each literal node converts into the payload it carries, so
/// consumers match on the payload instead of on which literal produced it.
/// [Reference](https://spec.graphql.org/October2021/#sec-Input-Values)
#[derive(Debug, PartialEq, Clone)]
pub enum Value<'a> {
    Int(i64),
    Float(f64),
    String(&'a str),
    Boolean(bool),
    List(ListValue<'a>),
    Object(ObjectValue<'a>),
    /// Representing JSON-like `null` values
    Null,
}

impl<'a> Value<'a> {
    #[inline]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the value as a float, widening integers.
    #[inline]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(value) => Some(*value),
            Value::Int(value) => Some(*value as f64),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Value::String(value) => Some(value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(value) => Some(*value),
            _ => None,
        }
    }

    #[inline]
    pub fn as_list(&self) -> Option<&ListValue<'a>> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    #[inline]
    pub fn as_object(&self) -> Option<&ObjectValue<'a>> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

/// AST Node for an Argument, which carries a name and a value.
///
/// [Reference](https://spec.graphql.org/October2021/#Argument)
#[derive(Debug, PartialEq, Clone)]
pub struct Argument<'a> {
    pub name: &'a str,
    pub value: Value<'a>,
}

/// AST Node for a list of Arguments, which are similar to parameterized inputs to a function.
///
/// A parsed list of Arguments is never empty, `()` is rejected by the parser.
/// [Reference](https://spec.graphql.org/October2021/#Arguments)
#[derive(Debug, PartialEq, Clone)]
pub struct Arguments<'a> {
    pub children: Vec<'a, Argument<'a>>,
}

impl<'a> Arguments<'a> {
    /// Checks whether this list of Arguments contains any values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns the value of the first argument with the given name.
    pub fn get(&self, name: &str) -> Option<&Value<'a>> {
        self.children
            .iter()
            .find(|argument| argument.name == name)
            .map(|argument| &argument.value)
    }
}

/// Placeholder for Directives.
///
/// The grammar has no production for directives yet, so parsed nodes always carry `None`.
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Directives)
#[derive(Debug, PartialEq, Clone)]
pub struct Directives<'a> {
    /// Directive names, without the `@` prefix
    pub children: Vec<'a, &'a str>,
}

/// Placeholder for Variable Definitions.
///
/// The grammar has no production for variable definitions yet, so parsed operations always
/// carry `None`.
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Variables)
#[derive(Debug, PartialEq, Clone)]
pub struct VariableDefinitions<'a> {
    /// Variable names, without the `$` prefix
    pub children: Vec<'a, &'a str>,
}

/// AST Node for Selection Sets, which provide a way to select more information on a given parent.
///
/// A parsed Selection Set always holds at least one selection.
/// [Reference](https://spec.graphql.org/October2021/#sec-Selection-Sets)
#[derive(Debug, PartialEq, Clone)]
pub struct SelectionSet<'a> {
    pub selections: Vec<'a, Selection<'a>>,
}

impl<'a> SelectionSet<'a> {
    /// Checks whether this Selection Set contains any selections.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.selections.len()
    }

    /// Iterates over the fields of this Selection Set in order.
    pub fn fields(&self) -> impl Iterator<Item = &Field<'a>> {
        self.selections.iter().map(Selection::field)
    }
}

/// AST Node for Fields, which can be likened to functions or properties on a parent object.
///
/// In JSON this would represent a property in a JSON object.
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Fields)
#[derive(Debug, PartialEq, Clone)]
pub struct Field<'a> {
    /// A Field's `alias`, which is used to request information under a different name than the
    /// Field's `name`.
    pub alias: Option<&'a str>,
    /// A Field's `name`, which represents a resolver on a GraphQL schema's object type.
    pub name: &'a str,
    /// Arguments that are passed to a Field, `None` when the field takes none.
    pub arguments: Option<Arguments<'a>>,
    /// Always `None`, see [Directives].
    pub directives: Option<Directives<'a>>,
    /// A sub-Selection Set below this field. Fields without one are leaf fields.
    pub selection_set: Option<SelectionSet<'a>>,
}

impl<'a> Field<'a> {
    /// Get the alias of the field, if present, otherwise get the name.
    #[inline]
    pub fn alias_or_name(&self) -> &'a str {
        self.alias.unwrap_or(self.name)
    }

    /// Whether this field has no sub-selections.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.selection_set.is_none()
    }

    /// Creates a new leaf field with the given `name`.
    #[inline]
    pub fn new_leaf(name: &'a str) -> Self {
        Field {
            alias: None,
            name,
            arguments: None,
            directives: None,
            selection_set: None,
        }
    }
}

/// AST Node of a selection as contained inside a [`SelectionSet`].
///
/// Fragment spreads and inline fragments aren't supported, so a Selection wraps a single Field.
/// [Reference](https://spec.graphql.org/October2021/#Selection)
#[derive(Debug, PartialEq, Clone)]
pub enum Selection<'a> {
    Field(Field<'a>),
}

impl<'a> Selection<'a> {
    /// Returns the wrapped [`Field`].
    #[inline]
    pub fn field(&self) -> &Field<'a> {
        match self {
            Selection::Field(field) => field,
        }
    }
}

/// A Kind of Operation.
///
/// Only queries are part of the supported language, and an Operation without a keyword is a
/// query too.
/// [Reference](https://spec.graphql.org/October2021/#OperationType)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Default)]
pub enum OperationKind {
    #[default]
    Query,
}

impl OperationKind {
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Query => "query",
        }
    }
}

/// AST Node for an Operation Definition, which defines the entrypoint for a GraphQL request.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Operations)
#[derive(Debug, PartialEq, Clone)]
pub struct OperationDefinition<'a> {
    pub operation: OperationKind,
    /// The optional name following the `query` keyword.
    pub name: Option<&'a str>,
    /// Always `None`, see [VariableDefinitions].
    pub variable_definitions: Option<VariableDefinitions<'a>>,
    /// Always `None`, see [Directives].
    pub directives: Option<Directives<'a>>,
    pub selection_set: SelectionSet<'a>,
}

impl<'a> OperationDefinition<'a> {
    /// Whether this operation can be written in the `{ ... }` shorthand form.
    #[inline]
    pub fn is_shorthand(&self) -> bool {
        self.operation == OperationKind::Query
            && self.name.is_none()
            && self.variable_definitions.is_none()
            && self.directives.is_none()
    }
}

/// AST Node of an Executable Definition, as opposed to schema or type definitions.
///
/// [Reference](https://spec.graphql.org/October2021/#ExecutableDefinition)
#[derive(Debug, PartialEq, Clone)]
pub enum ExecutableDefinition<'a> {
    Operation(OperationDefinition<'a>),
}

impl<'a> ExecutableDefinition<'a> {
    #[inline]
    pub fn operation(&self) -> &OperationDefinition<'a> {
        match self {
            ExecutableDefinition::Operation(operation) => operation,
        }
    }
}

/// AST Node of a top-level Definition of a [Document].
///
/// [Reference](https://spec.graphql.org/October2021/#Definition)
#[derive(Debug, PartialEq, Clone)]
pub enum Definition<'a> {
    Executable(ExecutableDefinition<'a>),
}

impl<'a> Definition<'a> {
    /// Helper method to return the [`OperationDefinition`] this Definition wraps.
    #[inline]
    pub fn operation(&self) -> Option<&OperationDefinition<'a>> {
        match self {
            Definition::Executable(executable) => Some(executable.operation()),
        }
    }
}

/// AST Root Node for a GraphQL query language document. This contains one or more definitions.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Document)
#[derive(Debug, PartialEq, Clone)]
pub struct Document<'a> {
    pub definitions: Vec<'a, Definition<'a>>,
}

impl<'a> Document<'a> {
    /// Checks whether this document contains any definitions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Iterates over all operations in this document in order.
    pub fn operations(&self) -> impl Iterator<Item = &OperationDefinition<'a>> {
        self.definitions.iter().filter_map(Definition::operation)
    }

    /// Returns the first operation of this document.
    #[inline]
    pub fn operation(&self) -> Option<&OperationDefinition<'a>> {
        self.operations().next()
    }
}
