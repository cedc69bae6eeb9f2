//! # JSON Conversion
//!
//! The `gql_tree::json` module converts between AST values and `serde_json` values.
//!
//! The [ValueFromNode] trait allows conversion to `serde_json` values using a `to_json` method on
//! any given value node, and [`Value`](crate::ast::Value) also implements `serde::Serialize`
//! directly. Going the other way, [value_from_json] builds an AST value from JSON inside an
//! [`ASTContext`](crate::ast::ASTContext).

extern crate serde;
extern crate serde_json;

mod conversion;
mod values;

pub use conversion::*;
pub use values::*;
