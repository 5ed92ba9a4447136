//! Code builder: an ordered line buffer with indent tracking.

use eyre::{Result, bail};

use super::Indent;

/// Buffers generated lines with explicit indent tracking.
///
/// One builder owns one file's content at a time; callers must not share a
/// builder across files without finishing it first, or content bleeds
/// between outputs.
///
/// Decrementing the indent below zero is a logic error. It is recorded and
/// reported by [`CodeBuilder::finish`] rather than silently clamped, so a
/// malformed emitter fails the generation run instead of producing
/// mis-indented output.
///
/// # Example
///
/// ```
/// use smelt_codegen::CodeBuilder;
///
/// let mut builder = CodeBuilder::swift();
/// builder
///     .line("public struct Widget {")
///     .indent()
///     .line("public let id: String")
///     .dedent()
///     .line("}");
///
/// let code = builder.finish().unwrap();
/// assert_eq!(code, "public struct Widget {\n    public let id: String\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
    underflowed: bool,
}

impl CodeBuilder {
    /// Create a new builder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
            underflowed: false,
        }
    }

    /// Create a new builder with 4-space indentation (the Swift default).
    pub fn swift() -> Self {
        Self::new(Indent::SWIFT)
    }

    /// Add a line of code with current indentation.
    pub fn line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (no indentation).
    pub fn blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Add raw text without indentation or trailing newline.
    pub fn raw(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(s);
        self
    }

    /// Add a documentation comment line (`/// text`).
    pub fn doc(&mut self, text: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str("///");
        if !text.is_empty() {
            self.buffer.push(' ');
            self.buffer.push_str(text);
        }
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level. Underflow is recorded and reported by
    /// [`CodeBuilder::finish`].
    pub fn dedent(&mut self) -> &mut Self {
        match self.indent_level.checked_sub(1) {
            Some(level) => self.indent_level = level,
            None => self.underflowed = true,
        }
        self
    }

    /// Add a `header { ... }` block with automatic indentation and a
    /// closing brace.
    pub fn block(&mut self, header: &str, f: impl FnOnce(&mut Self)) -> &mut Self {
        self.line(header);
        self.indent();
        f(self);
        self.dedent();
        self.line("}")
    }

    /// Conditionally add content.
    pub fn when(&mut self, condition: bool, f: impl FnOnce(&mut Self)) -> &mut Self {
        if condition {
            f(self);
        }
        self
    }

    /// Iterate and add content for each item.
    pub fn each<T>(
        &mut self,
        items: impl IntoIterator<Item = T>,
        f: impl Fn(&mut Self, T),
    ) -> &mut Self {
        for item in items {
            f(self, item);
        }
        self
    }

    /// Get the current indentation level.
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// Get a reference to the buffered content so far.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Consume the builder and return the generated code.
    ///
    /// # Errors
    ///
    /// Fails if any `dedent` underflowed the indent level.
    pub fn finish(self) -> Result<String> {
        if self.underflowed {
            bail!("indentation underflow: dedent called at indent level zero");
        }
        Ok(self.buffer)
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::swift()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let mut builder = CodeBuilder::swift();
        builder.line("let x = 1");
        assert_eq!(builder.finish().unwrap(), "let x = 1\n");
    }

    #[test]
    fn test_indentation() {
        let mut builder = CodeBuilder::swift();
        builder
            .line("func main() {")
            .indent()
            .line("print(\"Hello\")")
            .dedent()
            .line("}");

        assert_eq!(
            builder.finish().unwrap(),
            "func main() {\n    print(\"Hello\")\n}\n"
        );
    }

    #[test]
    fn test_block() {
        let mut builder = CodeBuilder::swift();
        builder.block("extension Widget {", |b| {
            b.line("func describe() {}");
        });

        assert_eq!(
            builder.finish().unwrap(),
            "extension Widget {\n    func describe() {}\n}\n"
        );
    }

    #[test]
    fn test_blank_and_doc() {
        let mut builder = CodeBuilder::swift();
        builder
            .doc("A widget.")
            .line("public struct Widget {}")
            .blank();

        assert_eq!(
            builder.finish().unwrap(),
            "/// A widget.\npublic struct Widget {}\n\n"
        );
    }

    #[test]
    fn test_conditional() {
        let mut with_attr = CodeBuilder::swift();
        with_attr
            .when(true, |b| {
                b.line("@discardableResult");
            })
            .line("func run() {}");
        assert_eq!(
            with_attr.finish().unwrap(),
            "@discardableResult\nfunc run() {}\n"
        );

        let mut without_attr = CodeBuilder::swift();
        without_attr
            .when(false, |b| {
                b.line("@discardableResult");
            })
            .line("func run() {}");
        assert_eq!(without_attr.finish().unwrap(), "func run() {}\n");
    }

    #[test]
    fn test_each() {
        let mut builder = CodeBuilder::swift();
        builder
            .line("enum Color {")
            .indent()
            .each(["red", "green", "blue"], |b, color| {
                b.line(&format!("case {}", color));
            })
            .dedent()
            .line("}");

        assert_eq!(
            builder.finish().unwrap(),
            "enum Color {\n    case red\n    case green\n    case blue\n}\n"
        );
    }

    #[test]
    fn test_dedent_underflow_is_reported_at_finish() {
        let mut builder = CodeBuilder::swift();
        builder.line("}").dedent().line("stray");

        let err = builder.finish().unwrap_err();
        assert!(err.to_string().contains("indentation underflow"));
    }

    #[test]
    fn test_underflow_sticks_even_after_reindent() {
        let mut builder = CodeBuilder::swift();
        builder.dedent().indent().line("body");
        assert!(builder.finish().is_err());
    }
}
