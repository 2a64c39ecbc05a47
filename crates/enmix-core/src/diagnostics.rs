//! Diagnostics for validating a generated series.
//!
//! Collects warnings and errors with a category and an optional year
//! reference, so `enmix validate` can report exactly which record broke
//! which invariant. Serializable for JSON output.

use serde::Serialize;

/// Severity level for diagnostic issues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Unusual but the operation continued
    Warning,
    /// Invariant violation
    Error,
}

/// A single diagnostic issue encountered during validation
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticIssue {
    pub severity: Severity,
    /// Category for grouping (e.g., "structure", "ordering", "share")
    pub category: String,
    /// Human-readable description of the issue
    pub message: String,
    /// Year of the offending record, if the issue is record-scoped
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

impl DiagnosticIssue {
    pub fn new(severity: Severity, category: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            category: category.into(),
            message: message.into(),
            year: None,
        }
    }

    /// Tag the issue with the year it refers to
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }
}

impl std::fmt::Display for DiagnosticIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let severity = match self.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };

        write!(f, "[{}:{}] {}", severity, self.category, self.message)?;

        if let Some(year) = self.year {
            write!(f, " (year {})", year)?;
        }

        Ok(())
    }
}

/// Collection of diagnostic issues for a validation pass
#[derive(Debug, Clone, Default, Serialize)]
pub struct Diagnostics {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<DiagnosticIssue>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a warning with category and message
    pub fn add_warning(&mut self, category: &str, message: &str) {
        self.issues
            .push(DiagnosticIssue::new(Severity::Warning, category, message));
    }

    /// Add an error with category and message
    pub fn add_error(&mut self, category: &str, message: &str) {
        self.issues
            .push(DiagnosticIssue::new(Severity::Error, category, message));
    }

    /// Add an error tagged with the offending year
    pub fn add_error_for_year(&mut self, category: &str, message: &str, year: i32) {
        self.issues
            .push(DiagnosticIssue::new(Severity::Error, category, message).with_year(year));
    }

    /// Count warning issues
    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
            .count()
    }

    /// Count error issues
    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .count()
    }

    /// Check if there are any issues
    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(|i| i.severity == Severity::Error)
    }

    /// Get only error issues
    pub fn errors(&self) -> impl Iterator<Item = &DiagnosticIssue> {
        self.issues.iter().filter(|i| i.severity == Severity::Error)
    }

    /// Get only warning issues
    pub fn warnings(&self) -> impl Iterator<Item = &DiagnosticIssue> {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
    }

    /// Get summary string
    pub fn summary(&self) -> String {
        let warnings = self.warning_count();
        let errors = self.error_count();

        match (warnings, errors) {
            (0, 0) => "No issues".to_string(),
            (w, 0) => format!("{} warning{}", w, if w == 1 { "" } else { "s" }),
            (0, e) => format!("{} error{}", e, if e == 1 { "" } else { "s" }),
            (w, e) => format!(
                "{} warning{}, {} error{}",
                w,
                if w == 1 { "" } else { "s" },
                e,
                if e == 1 { "" } else { "s" }
            ),
        }
    }
}

impl std::fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Diagnostics: {}", self.summary())?;
        for issue in &self.issues {
            writeln!(f, "  {}", issue)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostics_counts() {
        let mut diag = Diagnostics::new();
        diag.add_warning("structure", "test warning");
        diag.add_error("share", "test error");
        diag.add_error_for_year("ordering", "out of order", 1999);

        assert_eq!(diag.warning_count(), 1);
        assert_eq!(diag.error_count(), 2);
        assert!(diag.has_issues());
        assert!(diag.has_errors());
    }

    #[test]
    fn test_diagnostic_issue_display() {
        let issue = DiagnosticIssue::new(Severity::Error, "share", "share exceeds 100%")
            .with_year(2022);

        let display = format!("{}", issue);
        assert!(display.contains("error"));
        assert!(display.contains("share"));
        assert!(display.contains("year 2022"));
    }

    #[test]
    fn test_diagnostics_summary() {
        let mut diag = Diagnostics::new();
        assert_eq!(diag.summary(), "No issues");

        diag.add_warning("structure", "warning");
        assert_eq!(diag.summary(), "1 warning");

        diag.add_error("structure", "error");
        assert_eq!(diag.summary(), "1 warning, 1 error");

        diag.add_error("structure", "another error");
        assert_eq!(diag.summary(), "1 warning, 2 errors");
    }

    #[test]
    fn test_diagnostics_serialization() {
        let mut diag = Diagnostics::new();
        diag.add_error_for_year("share", "share exceeds 100%", 2022);

        let json = serde_json::to_string_pretty(&diag).unwrap();
        assert!(json.contains("\"error\""));
        assert!(json.contains("\"year\": 2022"));
    }
}
