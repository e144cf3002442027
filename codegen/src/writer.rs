/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::docs;

const INDENT: &str = "    ";

/// Line-oriented writer for generated Rust source.
#[derive(Debug, Default)]
pub struct RustWriter {
    buf: String,
    indent: usize,
}

impl RustWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes one line at the current indentation. Empty lines carry no indentation.
    pub fn line(&mut self, line: impl AsRef<str>) -> &mut Self {
        let line = line.as_ref();
        if !line.is_empty() {
            for _ in 0..self.indent {
                self.buf.push_str(INDENT);
            }
            self.buf.push_str(line);
        }
        self.buf.push('\n');
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.line("")
    }

    /// Writes `header {`, the indented body, and the closing brace.
    pub fn block(&mut self, header: impl AsRef<str>, body: impl FnOnce(&mut Self)) -> &mut Self {
        self.block_closed_by(header, "}", body)
    }

    /// Like [`RustWriter::block`] with a custom closing line, e.g. `},` or `});`.
    pub fn block_closed_by(
        &mut self,
        header: impl AsRef<str>,
        close: &str,
        body: impl FnOnce(&mut Self),
    ) -> &mut Self {
        self.line(format!("{} {{", header.as_ref()));
        self.indent += 1;
        body(self);
        self.indent -= 1;
        self.line(close)
    }

    /// Writes `///` doc comments for documentation HTML, if there is any.
    pub fn docs(&mut self, html: Option<&str>) -> &mut Self {
        if let Some(html) = html {
            for line in docs::to_markdown(html) {
                if line.is_empty() {
                    self.line("///");
                } else {
                    self.line(format!("/// {}", line));
                }
            }
        }
        self
    }

    /// Writes a literal doc comment line.
    pub fn doc(&mut self, text: impl AsRef<str>) -> &mut Self {
        match text.as_ref() {
            "" => self.line("///"),
            text => self.line(format!("/// {}", text)),
        }
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}

#[cfg(test)]
mod test {
    use super::RustWriter;
    use pretty_assertions::assert_eq;

    #[test]
    fn nested_blocks() {
        let mut writer = RustWriter::new();
        writer.docs(Some("<p>Defines a job.</p><p>Second.</p>"));
        writer.block("pub struct Job", |w| {
            w.line("pub name: std::option::Option<std::string::String>,");
        });
        writer.blank();
        writer.block("impl Job", |w| {
            w.block_closed_by("match x", "};", |w| {
                w.line("_ => {}");
            });
        });
        assert_eq!(
            writer.into_string(),
            "/// Defines a job.\n///\n/// Second.\npub struct Job {\n    pub name: std::option::Option<std::string::String>,\n}\n\nimpl Job {\n    match x {\n        _ => {}\n    };\n}\n"
        );
    }
}
