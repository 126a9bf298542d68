//! Indented text dumps and JSON export of the tree
//!
//! A dump prints one node per line, `indent_width` spaces per nesting level. The first token of
//! a line is the node's name from the kind tables; operator, SQL and DDL kinds follow on the same
//! line. Multi-part statements introduce their parts with `then:`, `elif:`, `else:`, `init:`,
//! `cond:`, `step:` and `body:` label lines.

use serde::Serialize;

use super::{Block, Expr, ExprNode, Stmt, StmtNode};
use crate::config::DumpConfig;
use crate::debug_println;
use crate::error::{Position, Result};

/// Accumulates the text dump of a tree
pub struct Dumper<'a> {
    config: &'a DumpConfig,
    output: String,
}

impl<'a> Dumper<'a> {
    pub fn new(config: &'a DumpConfig) -> Self {
        Self {
            config,
            output: String::new(),
        }
    }

    pub fn finish(self) -> String {
        self.output
    }

    fn line(&mut self, depth: usize, text: &str, pos: Option<&Position>, meta: Option<String>) {
        let width = depth * self.config.indent_width;
        self.output.push_str(&" ".repeat(width));
        self.output.push_str(text);
        if self.config.show_positions {
            if let Some(pos) = pos {
                self.output.push_str(&format!(" @{}", pos));
            }
        }
        if self.config.show_meta {
            if let Some(meta) = meta {
                self.output.push_str(&format!(" [{}]", meta));
            }
        }
        self.output.push('\n');
    }

    fn label(&mut self, depth: usize, label: &str) {
        self.line(depth, label, None, None);
    }

    pub fn expr(&mut self, expr: &Expr, depth: usize) {
        let kind = expr.kind();
        let text = match expr.node() {
            ExprNode::Id(id) => format!("{} {}", kind, id.name),
            ExprNode::Lit(lit) => format!("{} {}", kind, lit.val),
            ExprNode::Type(ty) => match &ty.name {
                Some(name) => format!("{} {} {}", kind, ty.ty, name),
                None => format!("{} {}", kind, ty.ty),
            },
            ExprNode::Op(op) => format!("{} {}", kind, op.kind),
            ExprNode::Sql(sql) => format!("{} {} {:?}", kind, sql.kind, sql.sql),
            ExprNode::Null
            | ExprNode::Array(_)
            | ExprNode::Access(_)
            | ExprNode::Call(_)
            | ExprNode::Ternary(_)
            | ExprNode::Tuple(_) => kind.to_string(),
        };
        self.line(depth, &text, Some(expr.pos()), expr.meta().summary());

        for child in expr.children() {
            self.expr(child, depth + 1);
        }
    }

    pub fn stmt(&mut self, stmt: &Stmt, depth: usize) {
        let kind = stmt.kind();
        let pos = Some(stmt.pos());
        let meta = stmt.meta().summary();

        match stmt.node() {
            StmtNode::Null | StmtNode::Continue | StmtNode::Break => {
                self.line(depth, kind.name(), pos, meta);
            }
            StmtNode::Exp(exp_stmt) => {
                self.line(depth, kind.name(), pos, meta);
                self.expr(&exp_stmt.exp, depth + 1);
            }
            StmtNode::If(if_stmt) => {
                self.line(depth, kind.name(), pos, meta);
                self.expr(&if_stmt.cond, depth + 1);
                self.label(depth + 1, "then:");
                self.stmts(&if_stmt.if_blk, depth + 2);
                for elif in &if_stmt.elifs {
                    self.line(depth + 1, "elif:", Some(&elif.pos), None);
                    self.expr(&elif.cond, depth + 2);
                    self.label(depth + 2, "then:");
                    self.stmts(&elif.blk, depth + 3);
                }
                if let Some(else_blk) = &if_stmt.else_blk {
                    self.label(depth + 1, "else:");
                    self.stmts(else_blk, depth + 2);
                }
            }
            StmtNode::For(for_stmt) => {
                self.line(depth, kind.name(), pos, meta);
                let parts = [
                    ("init:", &for_stmt.init),
                    ("cond:", &for_stmt.cond),
                    ("step:", &for_stmt.step),
                ];
                for (label, part) in parts {
                    if let Some(exp) = part {
                        self.label(depth + 1, label);
                        self.expr(exp, depth + 2);
                    }
                }
                self.label(depth + 1, "body:");
                self.stmts(&for_stmt.blk, depth + 2);
            }
            StmtNode::Switch(switch) => {
                self.line(depth, kind.name(), pos, meta);
                self.expr(&switch.cond, depth + 1);
                for case in &switch.cases {
                    self.stmt(case, depth + 1);
                }
            }
            StmtNode::Case(case) => {
                match &case.val {
                    Some(val) => {
                        self.line(depth, kind.name(), pos, meta);
                        self.expr(val, depth + 1);
                    }
                    None => self.line(depth, &format!("{} default", kind), pos, meta),
                }
                self.label(depth + 1, "body:");
                for stmt in &case.stmts {
                    self.stmt(stmt, depth + 2);
                }
            }
            StmtNode::Return(ret) => {
                self.line(depth, kind.name(), pos, meta);
                if let Some(arg) = &ret.arg {
                    self.expr(arg, depth + 1);
                }
            }
            StmtNode::Ddl(ddl) => {
                let text = format!("{} {} {:?}", kind, ddl.kind, ddl.ddl);
                self.line(depth, &text, pos, meta);
            }
            StmtNode::Blk(blk) => {
                self.line(depth, kind.name(), pos, meta);
                self.stmts(blk, depth + 1);
            }
        }
    }

    pub fn stmts(&mut self, blk: &Block, depth: usize) {
        for stmt in blk {
            self.stmt(stmt, depth);
        }
    }
}

impl Expr {
    /// Dump with the default configuration, starting at nesting level `indent`
    pub fn dump(&self, indent: usize) -> String {
        self.dump_with(indent, &DumpConfig::default())
    }

    pub fn dump_with(&self, indent: usize, config: &DumpConfig) -> String {
        let mut dumper = Dumper::new(config);
        dumper.expr(self, indent);
        dumper.finish()
    }

    pub fn to_json(&self) -> Result<String> {
        export_json(self, "expression")
    }
}

impl Stmt {
    pub fn dump(&self, indent: usize) -> String {
        self.dump_with(indent, &DumpConfig::default())
    }

    pub fn dump_with(&self, indent: usize, config: &DumpConfig) -> String {
        let mut dumper = Dumper::new(config);
        dumper.stmt(self, indent);
        dumper.finish()
    }

    pub fn to_json(&self) -> Result<String> {
        export_json(self, "statement")
    }
}

impl Block {
    pub fn dump(&self, indent: usize) -> String {
        self.dump_with(indent, &DumpConfig::default())
    }

    pub fn dump_with(&self, indent: usize, config: &DumpConfig) -> String {
        let mut dumper = Dumper::new(config);
        dumper.stmts(self, indent);
        dumper.finish()
    }

    pub fn to_json(&self) -> Result<String> {
        export_json(self, "block")
    }
}

fn export_json<T: Serialize>(node: &T, what: &str) -> Result<String> {
    let json = serde_json::to_string_pretty(node)?;
    debug_println!("dump", "exported {} as {} bytes of JSON", what, json.len());
    Ok(json)
}
