use std::fmt;

/// An enum of identifiers representing AST nodes.
///
/// This enum can be printed using the [`fmt::Display`] trait.
/// When parsing this enum is used to indicate what AST node encountered a parsing error.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum ASTKind {
    /// See: [crate::ast::Document]
    Document,
    /// See: [crate::ast::Definition]
    Definition,
    /// See: [crate::ast::ExecutableDefinition]
    ExecutableDefinition,
    /// See: [crate::ast::OperationDefinition]
    OperationDefinition,
    /// See: [crate::ast::OperationKind]
    OperationKind,
    /// See: [crate::ast::SelectionSet]
    SelectionSet,
    /// See: [crate::ast::Selection]
    Selection,
    /// See: [crate::ast::Field]
    Field,
    /// See: [crate::ast::Arguments]
    Arguments,
    /// See: [crate::ast::Argument]
    Argument,
    /// See: [crate::ast::Value]
    Value,
    /// See: [crate::ast::IntValue]
    Int,
    /// See: [crate::ast::FloatValue]
    Float,
    /// See: [crate::ast::StringValue]
    String,
    /// See: [crate::ast::BooleanValue]
    Boolean,
    /// See: [crate::ast::NullValue]
    Null,
    /// See: [crate::ast::ListValue]
    List,
    /// See: [crate::ast::ObjectValue]
    Object,
    /// See: [crate::ast::ObjectField]
    ObjectField,
}

impl fmt::Display for ASTKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ASTKind::Document => f.write_str("Document"),
            ASTKind::Definition => f.write_str("Definition"),
            ASTKind::ExecutableDefinition => f.write_str("Executable Definition"),
            ASTKind::OperationDefinition => f.write_str("Operation Definition"),
            ASTKind::OperationKind => f.write_str("Operation Kind"),
            ASTKind::SelectionSet => f.write_str("Selection Set"),
            ASTKind::Selection => f.write_str("Selection"),
            ASTKind::Field => f.write_str("Field"),
            ASTKind::Arguments => f.write_str("Arguments"),
            ASTKind::Argument => f.write_str("Argument"),
            ASTKind::Value => f.write_str("Value"),
            ASTKind::Int => f.write_str("Integer"),
            ASTKind::Float => f.write_str("Float"),
            ASTKind::String => f.write_str("String"),
            ASTKind::Boolean => f.write_str("Boolean"),
            ASTKind::Null => f.write_str("Null"),
            ASTKind::List => f.write_str("List"),
            ASTKind::Object => f.write_str("Object"),
            ASTKind::ObjectField => f.write_str("Object Field"),
        }
    }
}
