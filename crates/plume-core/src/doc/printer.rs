//! Printer for converting the Document IR to formatted strings
//!
//! Tokens take a fast path with bulk string operations; dynamic text is
//! processed character by character so Unicode widths are tracked correctly.
//! Indentation is written lazily at the start of the first non-empty content
//! on each line, so blank lines never carry trailing whitespace.

use super::document::Document;
use crate::config::LayoutOptions;
use unicode_width::UnicodeWidthChar;

/// Print result
pub type PrintResult = Result<String, PrintError>;

/// Print error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PrintError {
    /// A `Token` built without the builder carried a line break
    #[error("Token {token:?} contains a line break; use HardLine instead")]
    LineBreakInToken { token: &'static str },
}

/// Printer configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrinterOptions {
    /// Number of columns per indentation level
    pub indent_width: usize,

    /// Whether to indent with one tab per level
    pub use_tabs: bool,
}

impl Default for PrinterOptions {
    fn default() -> Self {
        Self {
            indent_width: 2,
            use_tabs: false,
        }
    }
}

impl From<&LayoutOptions> for PrinterOptions {
    fn from(layout: &LayoutOptions) -> Self {
        Self {
            indent_width: layout.tab_width,
            use_tabs: layout.use_tabs,
        }
    }
}

impl PrinterOptions {
    /// The literal text of one indentation unit
    pub fn indent_unit(&self) -> String {
        if self.use_tabs {
            "\t".to_string()
        } else {
            " ".repeat(self.indent_width)
        }
    }
}

/// Document printer with fast/slow path separation
pub struct Printer {
    options: PrinterOptions,
    buffer: String,
    current_line_width: u32,
    indent_level: usize,
    line_number: usize,
    pending_indent: bool,
}

impl Printer {
    /// Create a new printer with the given options
    pub fn new(options: PrinterOptions) -> Self {
        Self {
            options,
            buffer: String::with_capacity(1024),
            current_line_width: 0,
            indent_level: 0,
            line_number: 1,
            pending_indent: false,
        }
    }

    /// Print a document to a string
    pub fn print(&mut self, document: &Document) -> PrintResult {
        self.print_element(document)?;
        Ok(std::mem::take(&mut self.buffer))
    }

    fn print_element(&mut self, element: &Document) -> Result<(), PrintError> {
        match element {
            Document::Token(token) => {
                if token.contains(['\n', '\r']) {
                    return Err(PrintError::LineBreakInToken { token: *token });
                }
                if token.is_empty() {
                    return Ok(());
                }
                self.flush_indent();
                self.buffer.push_str(token);
                self.current_line_width += token.len() as u32;
            }

            Document::Text(text) => {
                for c in text.chars() {
                    let width = match c {
                        '\n' => {
                            self.new_line();
                            continue;
                        }
                        '\r' => continue,
                        '\t' => self.options.indent_width as u32,
                        c => c.width().unwrap_or(0) as u32,
                    };
                    self.flush_indent();
                    self.buffer.push(c);
                    self.current_line_width += width;
                }
            }

            Document::Space => {
                self.flush_indent();
                self.buffer.push(' ');
                self.current_line_width += 1;
            }

            Document::HardLine => self.new_line(),

            Document::Indent(elements) => {
                self.indent_level += 1;
                let result = elements.iter().try_for_each(|e| self.print_element(e));
                self.indent_level -= 1;
                result?;
            }

            Document::Group(elements) | Document::Sequence(elements) => {
                for elem in elements {
                    self.print_element(elem)?;
                }
            }
        }

        Ok(())
    }

    fn new_line(&mut self) {
        self.buffer.push('\n');
        self.current_line_width = 0;
        self.line_number += 1;
        self.pending_indent = true;
    }

    /// Write current indentation to buffer if a line was just started
    fn flush_indent(&mut self) {
        if !self.pending_indent {
            return;
        }
        self.pending_indent = false;
        let unit = self.options.indent_unit();
        self.buffer.push_str(&unit.repeat(self.indent_level));
        self.current_line_width += (self.indent_level * self.options.indent_width) as u32;
    }

    /// Get current line number
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Get current line width
    pub fn current_line_width(&self) -> u32 {
        self.current_line_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doc::{hard_line, indent, sequence, space, text, token};

    fn print_with(options: PrinterOptions, document: &Document) -> String {
        Printer::new(options).print(document).unwrap()
    }

    #[test]
    fn test_token_fast_path() {
        let doc = sequence(vec![token("import"), space(), token("{"), token("}")]);
        assert_eq!(print_with(PrinterOptions::default(), &doc), "import {}");
    }

    #[test]
    fn test_text_slow_path_tracks_unicode_width() {
        let mut printer = Printer::new(PrinterOptions::default());
        let doc = sequence(vec![text("Hello"), space(), text("世界")]);
        assert_eq!(printer.print(&doc).unwrap(), "Hello 世界");
        assert_eq!(printer.current_line_width(), 10);
    }

    #[test]
    fn test_indent_applies_after_hard_line() {
        let doc = sequence(vec![
            token("{"),
            indent(vec![hard_line(), text("a"), token(",")]),
            hard_line(),
            token("}"),
        ]);
        assert_eq!(print_with(PrinterOptions::default(), &doc), "{\n  a,\n}");
    }

    #[test]
    fn test_nested_indent_with_custom_width() {
        let options = PrinterOptions {
            indent_width: 4,
            use_tabs: false,
        };
        let doc = sequence(vec![
            token("{"),
            indent(vec![indent(vec![hard_line(), text("a")])]),
            indent(vec![hard_line(), token("}")]),
        ]);
        assert_eq!(print_with(options, &doc), "{\n        a\n    }");
    }

    #[test]
    fn test_tab_indentation() {
        let options = PrinterOptions {
            indent_width: 8,
            use_tabs: true,
        };
        let doc = indent(vec![indent(vec![hard_line(), text("a")])]);
        assert_eq!(print_with(options, &doc), "\n\t\ta");
    }

    #[test]
    fn test_blank_lines_carry_no_indentation() {
        let doc = indent(vec![hard_line(), hard_line(), text("a")]);
        assert_eq!(print_with(PrinterOptions::default(), &doc), "\n\n  a");
    }

    #[test]
    fn test_line_number_tracking() {
        let mut printer = Printer::new(PrinterOptions::default());
        assert_eq!(printer.line_number(), 1);
        let doc = sequence(vec![
            token("a"),
            hard_line(),
            text("b\nc"),
            hard_line(),
            token("d"),
        ]);
        assert_eq!(printer.print(&doc).unwrap(), "a\nb\nc\nd");
        assert_eq!(printer.line_number(), 4);
    }

    #[test]
    fn test_rejects_hand_built_token_with_newline() {
        let doc = Document::Token("a\nb");
        let err = Printer::new(PrinterOptions::default())
            .print(&doc)
            .unwrap_err();
        assert_eq!(err, PrintError::LineBreakInToken { token: "a\nb" });
    }

    #[test]
    fn test_options_from_layout() {
        let layout = LayoutOptions {
            tab_width: 4,
            use_tabs: true,
            ..LayoutOptions::default()
        };
        let options = PrinterOptions::from(&layout);
        assert_eq!(options.indent_width, 4);
        assert!(options.use_tabs);
        assert_eq!(options.indent_unit(), "\t");
        assert_eq!(PrinterOptions::default().indent_unit(), "  ");
    }
}
