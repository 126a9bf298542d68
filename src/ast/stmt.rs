//! Statement nodes and blocks

use serde::Serialize;

use super::{DdlKind, Expr, Node, StmtKind, StmtMeta};
use crate::debug_println;
use crate::error::{AstError, Position, Result};

pub type Stmt = Node<StmtNode, StmtMeta>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum StmtNode {
    Null,
    Exp(ExpStmt),
    If(IfStmt),
    For(ForStmt),
    Switch(SwitchStmt),
    Case(CaseStmt),
    Continue,
    Break,
    Return(ReturnStmt),
    Ddl(DdlStmt),
    Blk(Block),
}

impl StmtNode {
    pub fn kind(&self) -> StmtKind {
        match self {
            StmtNode::Null => StmtKind::Null,
            StmtNode::Exp(_) => StmtKind::Exp,
            StmtNode::If(_) => StmtKind::If,
            StmtNode::For(_) => StmtKind::For,
            StmtNode::Switch(_) => StmtKind::Switch,
            StmtNode::Case(_) => StmtKind::Case,
            StmtNode::Continue => StmtKind::Continue,
            StmtNode::Break => StmtKind::Break,
            StmtNode::Return(_) => StmtKind::Return,
            StmtNode::Ddl(_) => StmtKind::Ddl,
            StmtNode::Blk(_) => StmtKind::Blk,
        }
    }
}

/// Ordered statements of one lexical scope
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Block {
    pub pos: Position,
    stmts: Vec<Stmt>,
}

impl Block {
    pub fn new(pos: Position) -> Self {
        Self {
            pos,
            stmts: Vec::new(),
        }
    }

    pub fn from_stmts(stmts: Vec<Stmt>, pos: Position) -> Self {
        Self { pos, stmts }
    }

    pub fn push(&mut self, stmt: Stmt) {
        self.stmts.push(stmt);
    }

    /// Moves every statement of `other` to the end of this block; `other`'s position is dropped
    pub fn append(&mut self, other: Block) {
        self.stmts.extend(other.stmts);
    }

    pub fn len(&self) -> usize {
        self.stmts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stmts.is_empty()
    }

    pub fn stmts(&self) -> &[Stmt] {
        &self.stmts
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Stmt> {
        self.stmts.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Stmt> {
        self.stmts.iter_mut()
    }
}

impl Extend<Stmt> for Block {
    fn extend<I: IntoIterator<Item = Stmt>>(&mut self, iter: I) {
        self.stmts.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Block {
    type Item = &'a Stmt;
    type IntoIter = std::slice::Iter<'a, Stmt>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpStmt {
    pub exp: Expr,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IfStmt {
    pub cond: Expr,
    pub if_blk: Block,
    pub elifs: Vec<ElifClause>,
    pub else_blk: Option<Block>,
}

/// One `else if` arm of an IF statement
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElifClause {
    pub cond: Expr,
    pub blk: Block,
    pub pos: Position,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForStmt {
    pub init: Option<Expr>,
    pub cond: Option<Expr>,
    pub step: Option<Expr>,
    pub blk: Block,
}

/// SWITCH statement; every entry of `cases` is a CASE statement
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwitchStmt {
    pub cond: Expr,
    pub cases: Vec<Stmt>,
}

/// CASE arm; an absent `val` is the default arm
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseStmt {
    pub val: Option<Expr>,
    pub stmts: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReturnStmt {
    pub arg: Option<Expr>,
}

/// Embedded DDL statement, kept as raw text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DdlStmt {
    pub kind: DdlKind,
    pub ddl: String,
}

impl Node<StmtNode, StmtMeta> {
    pub fn new_null(pos: Position) -> Self {
        Self::new(StmtNode::Null, pos)
    }

    pub fn new_exp(exp: Expr, pos: Position) -> Self {
        Self::new(StmtNode::Exp(ExpStmt { exp }), pos)
    }

    /// IF without else or elif arms; those are attached with [`Stmt::set_else`] and
    /// [`Stmt::add_elif`] as the parser reaches them
    pub fn new_if(cond: Expr, if_blk: Block, pos: Position) -> Self {
        Self::new(
            StmtNode::If(IfStmt {
                cond,
                if_blk,
                elifs: Vec::new(),
                else_blk: None,
            }),
            pos,
        )
    }

    pub fn new_for(
        init: Option<Expr>,
        cond: Option<Expr>,
        step: Option<Expr>,
        blk: Block,
        pos: Position,
    ) -> Self {
        Self::new(
            StmtNode::For(ForStmt {
                init,
                cond,
                step,
                blk,
            }),
            pos,
        )
    }

    /// Builds a SWITCH; every arm goes through the same CASE check as `add_case`
    pub fn new_switch(cond: Expr, cases: Vec<Stmt>, pos: Position) -> Result<Self> {
        let arms = Vec::with_capacity(cases.len());
        let mut switch = Self::new(StmtNode::Switch(SwitchStmt { cond, cases: arms }), pos);
        for case in cases {
            switch.add_case(case)?;
        }
        Ok(switch)
    }

    pub fn new_case(val: Option<Expr>, stmts: Vec<Stmt>, pos: Position) -> Self {
        Self::new(StmtNode::Case(CaseStmt { val, stmts }), pos)
    }

    pub fn new_return(arg: Option<Expr>, pos: Position) -> Self {
        Self::new(StmtNode::Return(ReturnStmt { arg }), pos)
    }

    pub fn new_ddl(kind: DdlKind, ddl: impl Into<String>, pos: Position) -> Self {
        Self::new(
            StmtNode::Ddl(DdlStmt {
                kind,
                ddl: ddl.into(),
            }),
            pos,
        )
    }

    pub fn new_blk(blk: Block, pos: Position) -> Self {
        Self::new(StmtNode::Blk(blk), pos)
    }

    pub fn new_continue(pos: Position) -> Self {
        Self::new(StmtNode::Continue, pos)
    }

    pub fn new_break(pos: Position) -> Self {
        Self::new(StmtNode::Break, pos)
    }

    pub fn kind(&self) -> StmtKind {
        self.node().kind()
    }

    pub fn is_null(&self) -> bool {
        self.kind() == StmtKind::Null
    }

    pub fn is_exp(&self) -> bool {
        self.kind() == StmtKind::Exp
    }

    pub fn is_if(&self) -> bool {
        self.kind() == StmtKind::If
    }

    pub fn is_for(&self) -> bool {
        self.kind() == StmtKind::For
    }

    pub fn is_switch(&self) -> bool {
        self.kind() == StmtKind::Switch
    }

    pub fn is_case(&self) -> bool {
        self.kind() == StmtKind::Case
    }

    pub fn is_continue(&self) -> bool {
        self.kind() == StmtKind::Continue
    }

    pub fn is_break(&self) -> bool {
        self.kind() == StmtKind::Break
    }

    pub fn is_return(&self) -> bool {
        self.kind() == StmtKind::Return
    }

    pub fn is_ddl(&self) -> bool {
        self.kind() == StmtKind::Ddl
    }

    pub fn is_blk(&self) -> bool {
        self.kind() == StmtKind::Blk
    }

    /// Attaches the trailing `else` block of an IF; an IF takes at most one
    pub fn set_else(&mut self, blk: Block) -> Result<()> {
        let kind = self.kind();
        let pos = self.pos().clone();
        match self.node_mut() {
            StmtNode::If(if_stmt) if if_stmt.else_blk.is_some() => {
                Err(AstError::internal("else block attached twice to the same IF").with_pos(pos))
            }
            StmtNode::If(if_stmt) => {
                debug_println!("stmt", "else block attached to IF at {}", pos);
                if_stmt.else_blk = Some(blk);
                Ok(())
            }
            _ => Err(AstError::kind_mismatch("else attach", StmtKind::If, kind).with_pos(pos)),
        }
    }

    /// Appends an `else if` arm; arms must be added before the `else` block
    pub fn add_elif(&mut self, cond: Expr, blk: Block, elif_pos: Position) -> Result<()> {
        let kind = self.kind();
        let pos = self.pos().clone();
        match self.node_mut() {
            StmtNode::If(if_stmt) if if_stmt.else_blk.is_some() => Err(AstError::internal(
                "elif arm appended after the else block",
            )
            .with_pos(elif_pos)
            .with_note(format!("the IF statement starts at {}", pos))),
            StmtNode::If(if_stmt) => {
                debug_println!("stmt", "elif arm at {} attached to IF at {}", elif_pos, pos);
                if_stmt.elifs.push(ElifClause {
                    cond,
                    blk,
                    pos: elif_pos,
                });
                Ok(())
            }
            _ => Err(AstError::kind_mismatch("elif append", StmtKind::If, kind).with_pos(pos)),
        }
    }

    /// Appends a CASE arm to a SWITCH
    pub fn add_case(&mut self, case: Stmt) -> Result<()> {
        let kind = self.kind();
        let pos = self.pos().clone();
        if !case.is_case() {
            return Err(
                AstError::kind_mismatch("switch arm append", StmtKind::Case, case.kind())
                    .with_pos(case.pos().clone()),
            );
        }
        match self.node_mut() {
            StmtNode::Switch(switch) => {
                switch.cases.push(case);
                Ok(())
            }
            _ => Err(AstError::kind_mismatch("switch arm append", StmtKind::Switch, kind)
                .with_pos(pos)),
        }
    }

    /// Statements nested directly inside this one, in source order
    pub fn child_stmts(&self) -> Vec<&Stmt> {
        match self.node() {
            StmtNode::If(if_stmt) => {
                let mut children: Vec<&Stmt> = if_stmt.if_blk.iter().collect();
                for elif in &if_stmt.elifs {
                    children.extend(elif.blk.iter());
                }
                if let Some(else_blk) = &if_stmt.else_blk {
                    children.extend(else_blk.iter());
                }
                children
            }
            StmtNode::For(for_stmt) => for_stmt.blk.iter().collect(),
            StmtNode::Switch(switch) => switch.cases.iter().collect(),
            StmtNode::Case(case) => case.stmts.iter().collect(),
            StmtNode::Blk(blk) => blk.iter().collect(),
            StmtNode::Null
            | StmtNode::Exp(_)
            | StmtNode::Continue
            | StmtNode::Break
            | StmtNode::Return(_)
            | StmtNode::Ddl(_) => vec![],
        }
    }

    pub fn child_stmts_mut(&mut self) -> Vec<&mut Stmt> {
        match self.node_mut() {
            StmtNode::If(if_stmt) => {
                let mut children: Vec<&mut Stmt> = if_stmt.if_blk.iter_mut().collect();
                for elif in &mut if_stmt.elifs {
                    children.extend(elif.blk.iter_mut());
                }
                if let Some(else_blk) = &mut if_stmt.else_blk {
                    children.extend(else_blk.iter_mut());
                }
                children
            }
            StmtNode::For(for_stmt) => for_stmt.blk.iter_mut().collect(),
            StmtNode::Switch(switch) => switch.cases.iter_mut().collect(),
            StmtNode::Case(case) => case.stmts.iter_mut().collect(),
            StmtNode::Blk(blk) => blk.iter_mut().collect(),
            StmtNode::Null
            | StmtNode::Exp(_)
            | StmtNode::Continue
            | StmtNode::Break
            | StmtNode::Return(_)
            | StmtNode::Ddl(_) => vec![],
        }
    }

    /// Expressions owned by this statement itself, excluding nested statements
    pub fn exprs(&self) -> Vec<&Expr> {
        match self.node() {
            StmtNode::Exp(exp_stmt) => vec![&exp_stmt.exp],
            StmtNode::If(if_stmt) => {
                let mut exprs = vec![&if_stmt.cond];
                exprs.extend(if_stmt.elifs.iter().map(|elif| &elif.cond));
                exprs
            }
            StmtNode::For(for_stmt) => [&for_stmt.init, &for_stmt.cond, &for_stmt.step]
                .into_iter()
                .flatten()
                .collect(),
            StmtNode::Switch(switch) => vec![&switch.cond],
            StmtNode::Case(case) => case.val.iter().collect(),
            StmtNode::Return(ret) => ret.arg.iter().collect(),
            StmtNode::Null
            | StmtNode::Continue
            | StmtNode::Break
            | StmtNode::Ddl(_)
            | StmtNode::Blk(_) => vec![],
        }
    }

    pub fn exprs_mut(&mut self) -> Vec<&mut Expr> {
        match self.node_mut() {
            StmtNode::Exp(exp_stmt) => vec![&mut exp_stmt.exp],
            StmtNode::If(if_stmt) => {
                let mut exprs = vec![&mut if_stmt.cond];
                exprs.extend(if_stmt.elifs.iter_mut().map(|elif| &mut elif.cond));
                exprs
            }
            StmtNode::For(for_stmt) => [
                for_stmt.init.as_mut(),
                for_stmt.cond.as_mut(),
                for_stmt.step.as_mut(),
            ]
            .into_iter()
            .flatten()
            .collect(),
            StmtNode::Switch(switch) => vec![&mut switch.cond],
            StmtNode::Case(case) => case.val.iter_mut().collect(),
            StmtNode::Return(ret) => ret.arg.iter_mut().collect(),
            StmtNode::Null
            | StmtNode::Continue
            | StmtNode::Break
            | StmtNode::Ddl(_)
            | StmtNode::Blk(_) => vec![],
        }
    }
}
