//! # GraphQL Executable Document AST
//!
//! The `gql_tree::ast` module contains the scanner, the grammar engine, the AST they produce and
//! the renderer that turns an AST back into indented text. The supported language is a practical
//! subset of executable GraphQL: query operations with nested field selections, aliases,
//! arguments and literal values.
//! [Reference](https://spec.graphql.org/October2021/#sec-Language)
//!
//! It's easiest to use this module by importing all of it, however, its main parts are:
//! - [`ASTContext`], a context containing an arena that defines the lifetime for an AST
//! - [`tokenize`], which scans source text into a stream of [`Token`]s
//! - [`ParseNode`], a trait using which AST Nodes are parsed from source text
//! - [`RenderNode`], a trait using which AST Nodes are rendered into indented text
//!
//! The following workflow describes the minimum that's done using this module and while an AST
//! Context is active in the given scope.
//!
//! ```
//! use gql_tree::ast::*;
//!
//! // Create an AST Context for a document
//! let ctx = ASTContext::new();
//!
//! // Parse a source text into a Document AST root node
//! let ast = parse(&ctx, "{ field(id: 1) { child } }").unwrap();
//!
//! // Render the Document node to an output String
//! let output = render(ast);
//! assert_eq!(output, "{\n  field(id: 1) {\n    child\n  }\n}");
//! ```

#[allow(clippy::module_inception)]
mod ast;

mod ast_conversion;
mod ast_kind;
mod lexer;
mod parser;
mod printer;

pub use ast::*;
pub use ast_kind::ASTKind;
pub use lexer::{tokenize, LexError, LexErrorKind, Mode, Scanner, Token, TokenKind};
pub use parser::{parse, ParseNode};
pub use printer::{render, RenderNode};
