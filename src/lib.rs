//! AST core of the contract language front-end
//!
//! The parser builds trees through the `Expr::new_*` and `Stmt::new_*` constructors, semantic
//! analysis fills in node metadata, and diagnostics tooling renders trees with `dump` or
//! `to_json`.

pub mod ast;
pub mod config;
pub mod debug;
pub mod error;

pub use ast::*;
pub use config::*;
pub use error::{AstError, ErrorFormatter, ErrorKind, Position, Result};
