//! Low-level script emission.
//!
//! The compiler's output is a deterministic chart-specification script.
//! [`ScriptWriter`] owns the indentation discipline so every block in the
//! document is emitted the same way; [`wrap_html`] adds the standalone page
//! around the bare script when requested.

use std::fmt::Write as _;

const INDENT: &str = "  ";

/// Accumulates the output document line by line.
pub(crate) struct ScriptWriter {
    buf: String,
    indent: usize,
}

impl ScriptWriter {
    pub fn new() -> Self {
        Self {
            buf: String::new(),
            indent: 0,
        }
    }

    /// Emit one line at the current indentation.
    pub fn line(&mut self, text: impl AsRef<str>) {
        for _ in 0..self.indent {
            self.buf.push_str(INDENT);
        }
        self.buf.push_str(text.as_ref());
        self.buf.push('\n');
    }

    /// Emit a block opener and indent.
    pub fn open(&mut self, text: impl AsRef<str>) {
        self.line(text);
        self.indent += 1;
    }

    /// Dedent and emit a block closer.
    pub fn close(&mut self, text: impl AsRef<str>) {
        debug_assert!(self.indent > 0);
        self.indent = self.indent.saturating_sub(1);
        self.line(text);
    }

    pub fn finish(self) -> String {
        self.buf
    }
}

/// Quote a text value as a script string literal.
///
/// Slashes are escaped so a value containing `</script>` cannot terminate
/// the inline script block of the standalone page.
pub(crate) fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '/' => out.push_str("\\/"),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// Wrap a bare script in a minimal standalone page with a render target div
/// sized to the view dimensions.
pub(crate) fn wrap_html(script: &str, target: &str, width: u32, height: u32) -> String {
    let mut page = String::new();
    // write! to a String cannot fail.
    let _ = write!(
        page,
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"utf-8\"/>\n\
         <script src=\"https://cdn.plot.ly/plotly-2.27.0.min.js\"></script>\n\
         </head>\n\
         <body>\n\
         <div id=\"{target}\" style=\"width:{width}px;height:{height}px;\"></div>\n\
         <script>\n\
         {script}\
         </script>\n\
         </body>\n\
         </html>\n"
    );
    page
}
