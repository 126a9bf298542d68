/// Rendering options for AST dumps
#[derive(Debug, Clone)]
pub struct DumpConfig {
    /// Spaces per nesting level
    pub indent_width: usize,
    /// Append `@line:col` to every node line
    pub show_positions: bool,
    /// Append a `[...]` summary of non-empty metadata
    pub show_meta: bool,
}

impl DumpConfig {
    pub fn with_indent_width(mut self, indent_width: usize) -> Self {
        self.indent_width = indent_width;
        self
    }

    pub fn with_positions(mut self) -> Self {
        self.show_positions = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.show_meta = true;
        self
    }
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self {
            indent_width: 2,
            show_positions: false,
            show_meta: false,
        }
    }
}
