//! Abstract syntax tree of the contract language
//!
//! Every node is a [`Node`]: a payload enum whose variant is the node's discriminant, the source
//! position captured at construction, and a metadata slot that starts empty and is written by
//! semantic analysis. The payload is only reachable by shared reference, so a node's kind and
//! children cannot change once it is built; the few post-construction operations the parser
//! needs (tuple append, else/elif/case attach, literal value) check the kind they apply to.

mod dump;
mod expr;
mod kinds;
mod meta;
pub mod query;
mod stmt;
mod traversal;

pub use dump::Dumper;
pub use expr::*;
pub use kinds::{DdlKind, ExpKind, OpKind, SqlKind, StmtKind, TypeKind};
pub use meta::{ExpMeta, StmtMeta, Value};
pub use stmt::*;
pub use traversal::{ExprExt, StmtExt};

use serde::Serialize;

use crate::error::Position;

/// Shared node header wrapping a kind-specific payload
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node<T, M> {
    node: T,
    pos: Position,
    meta: M,
}

impl<T, M: Default> Node<T, M> {
    pub(crate) fn new(node: T, pos: Position) -> Self {
        Self {
            node,
            pos,
            meta: M::default(),
        }
    }
}

impl<T, M> Node<T, M> {
    /// The payload; its variant is the node's discriminant
    pub fn node(&self) -> &T {
        &self.node
    }

    pub(crate) fn node_mut(&mut self) -> &mut T {
        &mut self.node
    }

    pub fn pos(&self) -> &Position {
        &self.pos
    }

    pub fn meta(&self) -> &M {
        &self.meta
    }

    pub fn meta_mut(&mut self) -> &mut M {
        &mut self.meta
    }
}
