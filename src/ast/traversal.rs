//! AST traversal traits for walking expression and statement trees.
//!
//! Visitors return `Result` so a walk can stop early by returning `Err`. The `_mut` walks hand
//! out `&mut` nodes for passes that fill in metadata.

use super::{Expr, Stmt};

pub trait ExprExt {
    /// Walk the expression tree in pre-order
    ///
    /// Calls visitor on current node before its children. Return Err to stop early.
    fn walk<F, E>(&self, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(&Expr) -> Result<(), E>;

    /// Walk the expression tree in post-order
    ///
    /// Calls visitor on children before current node. Useful for bottom-up analysis.
    fn walk_post<F, E>(&self, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(&Expr) -> Result<(), E>;

    /// Walk the expression tree in pre-order with mutable access
    fn walk_mut<F, E>(&mut self, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(&mut Expr) -> Result<(), E>;

    /// Find all sub-expressions matching a predicate
    fn find_subexpressions<F>(&self, predicate: F) -> Vec<&Expr>
    where
        F: Fn(&Expr) -> bool;

    /// Check if any sub-expression matches a predicate
    ///
    /// Short-circuits on first match.
    fn any_subexpr<F>(&self, predicate: F) -> bool
    where
        F: Fn(&Expr) -> bool;
}

impl ExprExt for Expr {
    fn walk<F, E>(&self, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(&Expr) -> Result<(), E>,
    {
        visitor(self)?;
        for child in self.children() {
            child.walk(visitor)?;
        }
        Ok(())
    }

    fn walk_post<F, E>(&self, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(&Expr) -> Result<(), E>,
    {
        for child in self.children() {
            child.walk_post(visitor)?;
        }
        visitor(self)
    }

    fn walk_mut<F, E>(&mut self, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(&mut Expr) -> Result<(), E>,
    {
        visitor(self)?;
        for child in self.children_mut() {
            child.walk_mut(visitor)?;
        }
        Ok(())
    }

    fn find_subexpressions<F>(&self, predicate: F) -> Vec<&Expr>
    where
        F: Fn(&Expr) -> bool,
    {
        // children pushed in reverse so the matches come out in pre-order
        let mut matches = Vec::new();
        let mut pending = vec![self];
        while let Some(expr) = pending.pop() {
            if predicate(expr) {
                matches.push(expr);
            }
            pending.extend(expr.children().into_iter().rev());
        }
        matches
    }

    fn any_subexpr<F>(&self, predicate: F) -> bool
    where
        F: Fn(&Expr) -> bool,
    {
        let mut found = false;
        let _ = self.walk(&mut |expr| {
            if predicate(expr) {
                found = true;
                Err(()) // Early exit
            } else {
                Ok(())
            }
        });
        found
    }
}

/// Extension trait for statement traversal
pub trait StmtExt {
    /// Walk the statement tree in pre-order
    ///
    /// Calls visitor on each statement before its children. Return Err to stop early.
    fn walk<F, E>(&self, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(&Stmt) -> Result<(), E>;

    /// Walk the statement tree in post-order
    fn walk_post<F, E>(&self, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(&Stmt) -> Result<(), E>;

    /// Find all sub-statements matching a predicate
    fn find_statements<F>(&self, predicate: F) -> Vec<&Stmt>
    where
        F: Fn(&Stmt) -> bool;

    /// Walk every expression within this statement tree, each in pre-order
    fn walk_expressions<F, E>(&self, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(&Expr) -> Result<(), E>;

    /// Mutable counterpart of `walk_expressions`
    fn walk_expressions_mut<F, E>(&mut self, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(&mut Expr) -> Result<(), E>;

    /// Returns true if the statement or any sub-statement contains a return.
    fn can_exit_early(&self) -> bool;
}

impl StmtExt for Stmt {
    fn walk<F, E>(&self, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(&Stmt) -> Result<(), E>,
    {
        visitor(self)?;
        for child in self.child_stmts() {
            child.walk(visitor)?;
        }
        Ok(())
    }

    fn walk_post<F, E>(&self, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(&Stmt) -> Result<(), E>,
    {
        for child in self.child_stmts() {
            child.walk_post(visitor)?;
        }
        visitor(self)
    }

    fn find_statements<F>(&self, predicate: F) -> Vec<&Stmt>
    where
        F: Fn(&Stmt) -> bool,
    {
        let mut matches = Vec::new();
        let mut pending = vec![self];
        while let Some(stmt) = pending.pop() {
            if predicate(stmt) {
                matches.push(stmt);
            }
            pending.extend(stmt.child_stmts().into_iter().rev());
        }
        matches
    }

    fn walk_expressions<F, E>(&self, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(&Expr) -> Result<(), E>,
    {
        for expr in self.exprs() {
            expr.walk(visitor)?;
        }
        for child in self.child_stmts() {
            child.walk_expressions(visitor)?;
        }
        Ok(())
    }

    fn walk_expressions_mut<F, E>(&mut self, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(&mut Expr) -> Result<(), E>,
    {
        for expr in self.exprs_mut() {
            expr.walk_mut(visitor)?;
        }
        for child in self.child_stmts_mut() {
            child.walk_expressions_mut(visitor)?;
        }
        Ok(())
    }

    fn can_exit_early(&self) -> bool {
        self.is_return() || self.child_stmts().iter().any(|s| s.can_exit_early())
    }
}
