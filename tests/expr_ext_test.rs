mod common;

use common::{binary, id, int, pos, sum_of_product};
use contract_ast::{ExpKind, Expr, ExprExt, ExprNode, OpKind, TypeKind, Value};

fn label(e: &Expr) -> String {
    match e.node() {
        ExprNode::Id(id) => id.name.clone(),
        ExprNode::Op(op) => op.kind.to_string(),
        ExprNode::Lit(lit) => lit.val.to_string(),
        other => other.kind().to_string(),
    }
}

#[test]
fn test_walk_pre_order() {
    let expr = sum_of_product();

    let mut visited = Vec::new();
    let result = expr.walk(&mut |e| {
        visited.push(label(e));
        Ok::<(), ()>(())
    });

    assert!(result.is_ok());
    assert_eq!(visited, vec!["ADD", "a", "MUL", "b", "c"]);
}

#[test]
fn test_walk_post_order() {
    let expr = sum_of_product();

    let mut visited = Vec::new();
    let result = expr.walk_post(&mut |e| {
        visited.push(label(e));
        Ok::<(), ()>(())
    });

    assert!(result.is_ok());
    assert_eq!(visited, vec!["a", "b", "c", "MUL", "ADD"]);
}

#[test]
fn test_walk_early_exit() {
    let expr = sum_of_product();

    let mut visited = Vec::new();
    let result = expr.walk(&mut |e| {
        visited.push(label(e));
        if e.kind() == ExpKind::Op && label(e) == "MUL" {
            Err("found multiplication")
        } else {
            Ok(())
        }
    });

    assert_eq!(result, Err("found multiplication"));
    assert_eq!(visited, vec!["ADD", "a", "MUL"]);
}

#[test]
fn test_walk_mut_fills_metadata() {
    let mut expr = binary(OpKind::Add, int(1), int(2));

    let result = expr.walk_mut(&mut |e| {
        let folded = match e.node() {
            ExprNode::Lit(lit) => Some(lit.val.clone()),
            _ => None,
        };
        let meta = e.meta_mut();
        meta.ty = TypeKind::Int64;
        meta.value = folded;
        meta.checked = true;
        Ok::<(), ()>(())
    });
    assert!(result.is_ok());

    assert!(expr.meta().checked);
    assert_eq!(expr.meta().value, None);
    let children = expr.children();
    assert_eq!(children[0].meta().value, Some(Value::Int(1)));
    assert_eq!(children[1].meta().value, Some(Value::Int(2)));
    assert_eq!(children[1].meta().ty, TypeKind::Int64);
}

#[test]
fn test_find_subexpressions() {
    let call = Expr::new_call(id("f"), vec![sum_of_product(), id("d")], pos());

    let ids = call.find_subexpressions(|e| e.is_id());
    let names: Vec<_> = ids.iter().map(|e| label(e)).collect();
    assert_eq!(names, vec!["f", "a", "b", "c", "d"]);

    assert!(call.find_subexpressions(|e| e.is_sql()).is_empty());
}

#[test]
fn test_any_subexpr() {
    let expr = Expr::new_ternary(id("c"), sum_of_product(), Expr::new_null(pos()), pos());

    assert!(expr.any_subexpr(|e| e.is_null()));
    assert!(expr.any_subexpr(|e| label(e) == "MUL"));
    assert!(!expr.any_subexpr(|e| e.is_tuple()));
}
