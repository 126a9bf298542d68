//! Literal values and the per-node metadata filled in by semantic analysis

use serde::Serialize;
use std::fmt;

use super::TypeKind;

/// Value of a literal or of a constant-folded expression
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub enum Value {
    /// Not yet set by the literal-parsing step
    #[default]
    Unset,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl Value {
    pub fn is_unset(&self) -> bool {
        matches!(self, Value::Unset)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Unset => f.write_str("<unset>"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{:?}", x),
            Value::Str(s) => write!(f, "{:?}", s),
        }
    }
}

/// Semantic facts attached to an expression after construction
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExpMeta {
    /// Resolved type, `TypeKind::None` until checked
    pub ty: TypeKind,
    /// Constant-folded value, if the expression is constant
    pub value: Option<Value>,
    pub is_lval: bool,
    pub checked: bool,
}

impl ExpMeta {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// One-line rendering of the filled slots, `None` when nothing is set
    pub fn summary(&self) -> Option<String> {
        let mut parts = Vec::new();
        if !self.ty.is_none() {
            parts.push(format!("type={}", self.ty));
        }
        if let Some(value) = &self.value {
            parts.push(format!("value={}", value));
        }
        if self.is_lval {
            parts.push("lval".to_string());
        }
        if self.checked {
            parts.push("checked".to_string());
        }
        (!parts.is_empty()).then(|| parts.join(", "))
    }
}

/// Semantic facts attached to a statement after construction
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StmtMeta {
    pub checked: bool,
}

impl StmtMeta {
    pub fn is_empty(&self) -> bool {
        !self.checked
    }

    pub fn summary(&self) -> Option<String> {
        self.checked.then(|| "checked".to_string())
    }
}
