//! Renderer configuration.

/// Spaces per indentation level.
pub const DEFAULT_INDENT_WIDTH: usize = 4;

/// Deepest expression or block nesting the renderer will follow.
pub const DEFAULT_MAX_DEPTH: usize = 4096;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CodegenOptions {
    pub indent_width: usize,
    pub max_depth: usize,
}

impl CodegenOptions {
    pub const fn new() -> Self {
        CodegenOptions {
            indent_width: DEFAULT_INDENT_WIDTH,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Set the indentation width. Zero is raised to one so nested levels
    /// still indent more than their parent.
    #[must_use]
    pub const fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = if width == 0 { 1 } else { width };
        self
    }

    #[must_use]
    pub const fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }
}

impl Default for CodegenOptions {
    fn default() -> Self {
        Self::new()
    }
}
