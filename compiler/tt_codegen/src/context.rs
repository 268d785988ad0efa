//! Rendering state: output buffer, indentation and collected diagnostics.

use tt_ir::ExprArena;

use crate::{CodegenError, CodegenOptions, Diagnostic};

pub struct CodegenContext<'a> {
    arena: &'a ExprArena,
    options: CodegenOptions,
    /// Current indentation level.
    indent: usize,
    /// Current block nesting, checked against `options.max_depth`.
    depth: usize,
    output: String,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> CodegenContext<'a> {
    pub fn new(arena: &'a ExprArena, options: CodegenOptions) -> Self {
        Self {
            arena,
            options,
            indent: 0,
            depth: 0,
            output: String::with_capacity(1024),
            diagnostics: Vec::new(),
        }
    }

    #[inline]
    pub fn arena(&self) -> &'a ExprArena {
        self.arena
    }

    #[inline]
    pub fn options(&self) -> CodegenOptions {
        self.options
    }

    #[inline]
    pub fn indent_level(&self) -> usize {
        self.indent
    }

    pub fn indent(&mut self) {
        self.indent += 1;
    }

    pub fn dedent(&mut self) {
        debug_assert!(self.indent > 0, "dedent called with zero indent");
        self.indent = self.indent.saturating_sub(1);
    }

    /// Run `f` one level deeper. Indentation is restored even when `f` fails.
    pub fn nested<F>(&mut self, f: F) -> Result<(), CodegenError>
    where
        F: FnOnce(&mut Self) -> Result<(), CodegenError>,
    {
        if self.depth >= self.options.max_depth {
            return Err(CodegenError::NestingTooDeep {
                limit: self.options.max_depth,
            });
        }
        self.depth += 1;
        self.indent();
        let result = f(self);
        self.dedent();
        self.depth -= 1;
        result
    }

    fn write_indent(&mut self) {
        let width = self.indent * self.options.indent_width;
        self.output.extend(std::iter::repeat(' ').take(width));
    }

    /// Write an indented line.
    pub fn writeln(&mut self, s: &str) {
        self.write_indent();
        self.output.push_str(s);
        self.output.push('\n');
    }

    /// Record a misuse diagnostic and log it.
    pub fn report(&mut self, diagnostic: Diagnostic) {
        tracing::warn!(%diagnostic, "kernel builder misuse");
        self.diagnostics.push(diagnostic);
    }

    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.output)
    }

    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }
}
