use super::{Block, DdlStmt, Expr, ExprExt, ExprNode, SqlExp, Stmt, StmtExt, StmtNode};
use std::collections::HashSet;

/// Query API for common AST traversal patterns
pub struct AstQuery;

impl AstQuery {
    /// Check if an expression contains any function calls
    pub fn contains_calls(expr: &Expr) -> bool {
        expr.any_subexpr(|e| e.is_call())
    }

    /// Get all identifiers referenced in an expression
    pub fn collect_identifiers(expr: &Expr) -> HashSet<String> {
        let mut ids = HashSet::new();
        let _ = expr.walk(&mut |e| {
            if let ExprNode::Id(id) = e.node() {
                ids.insert(id.name.clone());
            }
            Ok::<(), ()>(())
        });
        ids
    }

    /// Count the number of function calls in an expression
    pub fn count_calls(expr: &Expr) -> usize {
        expr.find_subexpressions(|e| e.is_call()).len()
    }

    /// Every embedded SQL fragment in a statement tree, in walk order
    pub fn sql_fragments(stmt: &Stmt) -> Vec<&SqlExp> {
        let mut fragments = Vec::new();
        Self::collect_sql(stmt, &mut fragments);
        fragments
    }

    fn collect_sql<'a>(stmt: &'a Stmt, acc: &mut Vec<&'a SqlExp>) {
        for expr in stmt.exprs() {
            for sub in expr.find_subexpressions(|e| e.is_sql()) {
                if let ExprNode::Sql(sql) = sub.node() {
                    acc.push(sql);
                }
            }
        }
        for child in stmt.child_stmts() {
            Self::collect_sql(child, acc);
        }
    }

    /// Every DDL statement in a block, including nested scopes
    pub fn ddl_statements(blk: &Block) -> Vec<&DdlStmt> {
        blk.iter()
            .flat_map(|stmt| stmt.find_statements(|s| s.is_ddl()))
            .filter_map(|stmt| match stmt.node() {
                StmtNode::Ddl(ddl) => Some(ddl),
                _ => None,
            })
            .collect()
    }
}
