//! Expression nodes
//!
//! Constructors take their operands by value and box them, so every child is owned by exactly
//! one parent. Required operands are plain `Expr` parameters; only the slots the grammar leaves
//! optional are `Option`.

use serde::Serialize;

use super::{ExpKind, ExpMeta, Node, OpKind, SqlKind, TypeKind, Value};
use crate::error::{AstError, Position, Result};

pub type Expr = Node<ExprNode, ExpMeta>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ExprNode {
    Null,
    Id(IdExp),
    Lit(LitExp),
    Type(TypeExp),
    Array(ArrayExp),
    Op(OpExp),
    Access(AccessExp),
    Call(CallExp),
    Sql(SqlExp),
    Ternary(TernaryExp),
    Tuple(TupleExp),
}

impl ExprNode {
    pub fn kind(&self) -> ExpKind {
        match self {
            ExprNode::Null => ExpKind::Null,
            ExprNode::Id(_) => ExpKind::Id,
            ExprNode::Lit(_) => ExpKind::Lit,
            ExprNode::Type(_) => ExpKind::Type,
            ExprNode::Array(_) => ExpKind::Array,
            ExprNode::Op(_) => ExpKind::Op,
            ExprNode::Access(_) => ExpKind::Access,
            ExprNode::Call(_) => ExpKind::Call,
            ExprNode::Sql(_) => ExpKind::Sql,
            ExprNode::Ternary(_) => ExpKind::Ternary,
            ExprNode::Tuple(_) => ExpKind::Tuple,
        }
    }
}

/// Unresolved identifier reference
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IdExp {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LitExp {
    pub val: Value,
}

/// Type expression; `key` and `value` are the parameters of container types such as `map(K, V)`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeExp {
    pub ty: TypeKind,
    /// Name of a user-defined type
    pub name: Option<String>,
    pub key: Option<Box<Expr>>,
    pub value: Option<Box<Expr>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArrayExp {
    pub target: Box<Expr>,
    pub index: Box<Expr>,
}

/// Operator application; `right` is absent for unary operators
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpExp {
    pub kind: OpKind,
    pub left: Box<Expr>,
    pub right: Option<Box<Expr>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccessExp {
    pub target: Box<Expr>,
    pub field: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CallExp {
    pub callee: Box<Expr>,
    pub args: Vec<Expr>,
}

/// Embedded DML fragment, kept as raw text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SqlExp {
    pub kind: SqlKind,
    pub sql: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TernaryExp {
    pub cond: Box<Expr>,
    pub then_exp: Box<Expr>,
    pub else_exp: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TupleExp {
    pub elems: Vec<Expr>,
}

impl Node<ExprNode, ExpMeta> {
    pub fn new_null(pos: Position) -> Self {
        Self::new(ExprNode::Null, pos)
    }

    pub fn new_id(name: impl Into<String>, pos: Position) -> Self {
        Self::new(ExprNode::Id(IdExp { name: name.into() }), pos)
    }

    /// Literal whose value is filled in later with [`Expr::set_lit_value`]
    pub fn new_lit(pos: Position) -> Self {
        Self::new(ExprNode::Lit(LitExp { val: Value::Unset }), pos)
    }

    pub fn new_type(
        ty: TypeKind,
        name: Option<String>,
        key: Option<Expr>,
        value: Option<Expr>,
        pos: Position,
    ) -> Self {
        Self::new(
            ExprNode::Type(TypeExp {
                ty,
                name,
                key: key.map(Box::new),
                value: value.map(Box::new),
            }),
            pos,
        )
    }

    pub fn new_array(target: Expr, index: Expr, pos: Position) -> Self {
        Self::new(
            ExprNode::Array(ArrayExp {
                target: Box::new(target),
                index: Box::new(index),
            }),
            pos,
        )
    }

    pub fn new_op(kind: OpKind, left: Expr, right: Option<Expr>, pos: Position) -> Self {
        Self::new(
            ExprNode::Op(OpExp {
                kind,
                left: Box::new(left),
                right: right.map(Box::new),
            }),
            pos,
        )
    }

    pub fn new_access(target: Expr, field: Expr, pos: Position) -> Self {
        Self::new(
            ExprNode::Access(AccessExp {
                target: Box::new(target),
                field: Box::new(field),
            }),
            pos,
        )
    }

    pub fn new_call(callee: Expr, args: Vec<Expr>, pos: Position) -> Self {
        Self::new(
            ExprNode::Call(CallExp {
                callee: Box::new(callee),
                args,
            }),
            pos,
        )
    }

    pub fn new_sql(kind: SqlKind, sql: impl Into<String>, pos: Position) -> Self {
        Self::new(
            ExprNode::Sql(SqlExp {
                kind,
                sql: sql.into(),
            }),
            pos,
        )
    }

    pub fn new_ternary(cond: Expr, then_exp: Expr, else_exp: Expr, pos: Position) -> Self {
        Self::new(
            ExprNode::Ternary(TernaryExp {
                cond: Box::new(cond),
                then_exp: Box::new(then_exp),
                else_exp: Box::new(else_exp),
            }),
            pos,
        )
    }

    /// Tuple with zero or one element; the rest are appended with [`Expr::add_elem`]
    pub fn new_tuple(elem: Option<Expr>, pos: Position) -> Self {
        Self::new(
            ExprNode::Tuple(TupleExp {
                elems: elem.into_iter().collect(),
            }),
            pos,
        )
    }

    pub fn kind(&self) -> ExpKind {
        self.node().kind()
    }

    pub fn is_null(&self) -> bool {
        self.kind() == ExpKind::Null
    }

    pub fn is_id(&self) -> bool {
        self.kind() == ExpKind::Id
    }

    pub fn is_lit(&self) -> bool {
        self.kind() == ExpKind::Lit
    }

    pub fn is_type(&self) -> bool {
        self.kind() == ExpKind::Type
    }

    pub fn is_array(&self) -> bool {
        self.kind() == ExpKind::Array
    }

    pub fn is_op(&self) -> bool {
        self.kind() == ExpKind::Op
    }

    pub fn is_access(&self) -> bool {
        self.kind() == ExpKind::Access
    }

    pub fn is_call(&self) -> bool {
        self.kind() == ExpKind::Call
    }

    pub fn is_sql(&self) -> bool {
        self.kind() == ExpKind::Sql
    }

    pub fn is_ternary(&self) -> bool {
        self.kind() == ExpKind::Ternary
    }

    pub fn is_tuple(&self) -> bool {
        self.kind() == ExpKind::Tuple
    }

    /// Appends the next element of a comma-separated list to a TUPLE
    pub fn add_elem(&mut self, elem: Expr) -> Result<()> {
        let kind = self.kind();
        match self.node_mut() {
            ExprNode::Tuple(tuple) => {
                tuple.elems.push(elem);
                Ok(())
            }
            _ => Err(AstError::kind_mismatch("tuple append", ExpKind::Tuple, kind)
                .with_pos(self.pos().clone())),
        }
    }

    /// Stores the value decoded by the literal-parsing step into a LIT
    pub fn set_lit_value(&mut self, val: Value) -> Result<()> {
        let kind = self.kind();
        match self.node_mut() {
            ExprNode::Lit(lit) => {
                lit.val = val;
                Ok(())
            }
            _ => Err(AstError::kind_mismatch("literal assignment", ExpKind::Lit, kind)
                .with_pos(self.pos().clone())),
        }
    }

    /// Direct sub-expressions, in source order
    pub fn children(&self) -> Vec<&Expr> {
        match self.node() {
            ExprNode::Null | ExprNode::Id(_) | ExprNode::Lit(_) | ExprNode::Sql(_) => vec![],
            ExprNode::Type(ty) => ty.key.iter().chain(ty.value.iter()).map(|e| &**e).collect(),
            ExprNode::Array(arr) => vec![&*arr.target, &*arr.index],
            ExprNode::Op(op) => {
                let mut children = vec![&*op.left];
                children.extend(op.right.as_deref());
                children
            }
            ExprNode::Access(acc) => vec![&*acc.target, &*acc.field],
            ExprNode::Call(call) => {
                let mut children = vec![&*call.callee];
                children.extend(call.args.iter());
                children
            }
            ExprNode::Ternary(tern) => vec![&*tern.cond, &*tern.then_exp, &*tern.else_exp],
            ExprNode::Tuple(tup) => tup.elems.iter().collect(),
        }
    }

    /// Mutable access to the direct sub-expressions, for metadata passes
    pub fn children_mut(&mut self) -> Vec<&mut Expr> {
        match self.node_mut() {
            ExprNode::Null | ExprNode::Id(_) | ExprNode::Lit(_) | ExprNode::Sql(_) => vec![],
            ExprNode::Type(ty) => ty
                .key
                .iter_mut()
                .chain(ty.value.iter_mut())
                .map(|e| &mut **e)
                .collect(),
            ExprNode::Array(arr) => vec![&mut *arr.target, &mut *arr.index],
            ExprNode::Op(op) => {
                let mut children = vec![&mut *op.left];
                children.extend(op.right.as_deref_mut());
                children
            }
            ExprNode::Access(acc) => vec![&mut *acc.target, &mut *acc.field],
            ExprNode::Call(call) => {
                let mut children = vec![&mut *call.callee];
                children.extend(call.args.iter_mut());
                children
            }
            ExprNode::Ternary(tern) => vec![
                &mut *tern.cond,
                &mut *tern.then_exp,
                &mut *tern.else_exp,
            ],
            ExprNode::Tuple(tup) => tup.elems.iter_mut().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos() -> Position {
        Position::new(1, 1)
    }

    #[test]
    fn test_unary_op_has_no_right_operand() {
        let not = Expr::new_op(OpKind::Not, Expr::new_id("ok", pos()), None, pos());
        match not.node() {
            ExprNode::Op(op) => {
                assert_eq!(op.kind, OpKind::Not);
                assert!(op.right.is_none());
            }
            other => panic!("expected OP, got {:?}", other.kind()),
        }
        assert_eq!(not.children().len(), 1);
    }

    #[test]
    fn test_add_elem_rejects_non_tuple() {
        let mut id = Expr::new_id("x", Position::new(2, 5));
        let err = id.add_elem(Expr::new_lit(pos())).unwrap_err();
        assert!(err.is_internal());
        assert_eq!(err.context.pos, Some(Position::new(2, 5)));
        assert!(err.message.contains("expects TUPLE node, found ID"));
    }

    #[test]
    fn test_set_lit_value() {
        let mut lit = Expr::new_lit(pos());
        lit.set_lit_value(Value::Int(7)).unwrap();
        assert_eq!(
            lit.node(),
            &ExprNode::Lit(LitExp { val: Value::Int(7) })
        );
        assert!(Expr::new_null(pos()).set_lit_value(Value::Bool(true)).is_err());
    }

    #[test]
    fn test_type_children_skip_absent_parameters() {
        let map = Expr::new_type(
            TypeKind::Map,
            None,
            Some(Expr::new_type(TypeKind::String, None, None, None, pos())),
            Some(Expr::new_type(TypeKind::Int64, None, None, None, pos())),
            pos(),
        );
        assert_eq!(map.children().len(), 2);

        let named = Expr::new_type(TypeKind::Struct, Some("Account".to_string()), None, None, pos());
        assert!(named.children().is_empty());
    }
}
