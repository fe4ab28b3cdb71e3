//! Advisory diagnostic messages.
//!
//! The resolution pipeline never aborts on filesystem-absence
//! conditions; it records what happened here instead. Diagnostics ride
//! along with the result and must never influence the computed link
//! set.

use std::fmt;
use std::path::PathBuf;

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Note,
}

impl Severity {
    fn label(self, color: bool) -> &'static str {
        match (self, color) {
            (Severity::Error, false) => "error",
            (Severity::Warning, false) => "warning",
            (Severity::Note, false) => "note",
            (Severity::Error, true) => "\x1b[1;31merror\x1b[0m",
            (Severity::Warning, true) => "\x1b[1;33mwarning\x1b[0m",
            (Severity::Note, true) => "\x1b[1;36mnote\x1b[0m",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label(false))
    }
}

/// A diagnostic message with optional context and suggestions.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Severity level
    pub severity: Severity,
    /// Primary message
    pub message: String,
    /// Additional context lines
    pub context: Vec<String>,
    /// Suggested fixes
    pub suggestions: Vec<String>,
    /// Related file or directory path
    pub location: Option<PathBuf>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Severity::Error.diagnostic(message)
    }

    /// Create a new warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Severity::Warning.diagnostic(message)
    }

    /// Create a new informational note.
    pub fn note(message: impl Into<String>) -> Self {
        Severity::Note.diagnostic(message)
    }

    /// Add context to the diagnostic.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context.push(context.into());
        self
    }

    /// Add a suggestion for fixing the issue.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Add a file or directory location.
    pub fn with_location(mut self, path: impl Into<PathBuf>) -> Self {
        self.location = Some(path.into());
        self
    }

    /// Format the diagnostic for terminal output.
    pub fn format(&self, color: bool) -> String {
        let mut lines = vec![format!("{}: {}", self.severity.label(color), self.message)];

        if let Some(ref path) = self.location {
            lines.push(format!("  --> {}", path.display()));
        }
        lines.extend(self.context.iter().map(|ctx| format!("  {}", ctx)));

        let help = if color { "\x1b[1;32mhelp\x1b[0m" } else { "help" };
        lines.extend(
            self.suggestions
                .iter()
                .map(|suggestion| format!("{}: {}", help, suggestion)),
        );

        lines.push(String::new());
        lines.join("\n")
    }
}

impl Severity {
    /// Create an empty diagnostic of this severity.
    pub fn diagnostic(self, message: impl Into<String>) -> Diagnostic {
        Diagnostic {
            severity: self,
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
            location: None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(false))
    }
}

/// Print a diagnostic to stderr.
pub fn emit(diagnostic: &Diagnostic, color: bool) {
    eprint!("{}", diagnostic.format(color));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_formatting() {
        let diag = Diagnostic::warning("using release build of `draco`")
            .with_context("debug archive not found: dracod.lib")
            .with_suggestion("build the Debug third-party artifacts, or switch to Development");

        let output = diag.format(false);
        assert!(output.contains("warning: using release build"));
        assert!(output.contains("dracod.lib"));
        assert!(output.contains("help: build the Debug"));
        assert!(output.ends_with('\n'));
    }

    #[test]
    fn test_diagnostic_location() {
        let diag = Diagnostic::note("library directory does not exist")
            .with_location("/some/ThirdParty/Lib/Release");

        let output = diag.format(false);
        assert!(output.contains("note: library directory"));
        assert!(output.contains("--> /some/ThirdParty/Lib/Release"));
    }

    #[test]
    fn test_color_labels_wrap_plain_text() {
        let diag = Diagnostic::error("boom");
        assert!(diag.format(true).contains("error"));
    }
}
