#![allow(dead_code)]

pub mod snapshot_utils;

use contract_ast::{Block, Expr, OpKind, Position, Stmt, Value};

/// Position on line 1 of the test source
pub fn at(column: usize) -> Position {
    Position::new(1, column)
}

pub fn pos() -> Position {
    at(1)
}

pub fn id(name: &str) -> Expr {
    Expr::new_id(name, pos())
}

/// LIT node with its value already decoded, as the literal-parsing step leaves it
pub fn lit(value: Value) -> Expr {
    let mut lit = Expr::new_lit(pos());
    lit.set_lit_value(value).expect("LIT accepts a value");
    lit
}

pub fn int(value: i64) -> Expr {
    lit(Value::Int(value))
}

pub fn binary(kind: OpKind, left: Expr, right: Expr) -> Expr {
    Expr::new_op(kind, left, Some(right), pos())
}

pub fn block(stmts: Vec<Stmt>) -> Block {
    Block::from_stmts(stmts, pos())
}

pub fn ret(arg: Expr) -> Stmt {
    Stmt::new_return(Some(arg), pos())
}

/// `if (x > 0) { return x; } else { return 0; }`
pub fn if_positive_return() -> Stmt {
    let cond = binary(OpKind::Gt, id("x"), int(0));
    let mut if_stmt = Stmt::new_if(cond, block(vec![ret(id("x"))]), pos());
    if_stmt
        .set_else(block(vec![ret(int(0))]))
        .expect("IF accepts an else block");
    if_stmt
}

/// `a + b * c`
pub fn sum_of_product() -> Expr {
    binary(
        OpKind::Add,
        id("a"),
        binary(OpKind::Mul, id("b"), id("c")),
    )
}
