//! `gql_tree`
//! =========
//!
//! _A small GraphQL executable-document scanner, parser and tree renderer._
//!
//! The **`gql_tree`** library turns the text of a GraphQL query into an arena-allocated AST and
//! renders that AST back into canonical, indented text. It handles the part of GraphQL that
//! clients send: query operations, nested selection sets, aliased fields, arguments and literal
//! values, including escaped strings, block strings, lists and objects.
//!
//! Parsing happens in two stages. A multi-mode scanner splits the source into tokens, switching
//! rules when it enters a string or a block string. A recursive descent grammar engine then
//! reduces those tokens into the nodes of the [ast] module. Failures of either stage are returned
//! as an [error::Error] that points at the offending span.
//!
//! The crate doesn't validate queries against a schema and doesn't execute them.
//!
//! ```
//! use gql_tree::ast::ASTContext;
//!
//! let ctx = ASTContext::new();
//! let document = gql_tree::parse(&ctx, "query Hero { hero { name } }").unwrap();
//! assert_eq!(gql_tree::render(document), "query Hero {\n  hero {\n    name\n  }\n}");
//! ```
//!
//! [A good place to start learning more about this crate is the `ast` module...](ast)

pub mod ast;
pub mod error;

pub use ast::{parse, render};
pub use bumpalo;

#[cfg(feature = "json")]
pub mod json;
