//! Line-oriented markdown document builder.

/// A markdown document assembled line by line.
///
/// Lines are joined with `\n` on render; no trailing newline is added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkdownDoc {
    lines: Vec<String>,
}

impl MarkdownDoc {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a level-1 heading.
    pub fn title(&mut self, text: impl AsRef<str>) -> &mut Self {
        self.heading(1, text)
    }

    /// Adds a heading at the given level (clamped to 1..=6).
    pub fn heading(&mut self, level: usize, text: impl AsRef<str>) -> &mut Self {
        let hashes = "#".repeat(level.clamp(1, 6));
        self.lines.push(format!("{} {}", hashes, text.as_ref()));
        self
    }

    /// Adds a top-level bullet.
    pub fn bullet(&mut self, text: impl AsRef<str>) -> &mut Self {
        self.lines.push(format!("- {}", text.as_ref()));
        self
    }

    /// Adds a bullet nested one level (two spaces).
    pub fn sub_bullet(&mut self, text: impl AsRef<str>) -> &mut Self {
        self.lines.push(format!("  - {}", text.as_ref()));
        self
    }

    /// Adds a raw line.
    pub fn line(&mut self, text: impl Into<String>) -> &mut Self {
        self.lines.push(text.into());
        self
    }

    /// Adds an empty line.
    pub fn blank(&mut self) -> &mut Self {
        self.lines.push(String::new());
        self
    }

    /// Adds a fenced code block. The body is trimmed of surrounding whitespace.
    pub fn fenced(&mut self, language: &str, body: &str) -> &mut Self {
        self.lines.push(format!("```{}", language));
        self.lines.push(body.trim().to_string());
        self.lines.push("```".to_string());
        self
    }

    /// Number of lines so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Renders the document.
    #[must_use]
    pub fn render(&self) -> String {
        self.lines.join("\n")
    }
}

impl std::fmt::Display for MarkdownDoc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
