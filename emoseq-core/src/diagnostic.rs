//! Non-fatal diagnostics
//!
//! Catalogue lookups for missing categories report through a
//! [`DiagnosticSink`] instead of failing, so callers decide where the
//! message ends up.

use std::fmt;
use std::sync::Mutex;

use serde::Serialize;

/// What went wrong
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticKind {
    /// A catalogue group or subgroup name that is not present
    UnknownCategory,
}

/// One diagnostic event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// The requested category name
    pub category: String,
    /// The name existed in an earlier catalogue edition
    pub retired: bool,
}

impl Diagnostic {
    pub fn unknown_category(category: impl Into<String>, retired: bool) -> Self {
        Self {
            kind: DiagnosticKind::UnknownCategory,
            category: category.into(),
            retired,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DiagnosticKind::UnknownCategory if self.retired => {
                write!(f, "The category of {} does not exist anymore", self.category)
            }
            DiagnosticKind::UnknownCategory => {
                write!(f, "The category of {} is not part of the catalogue", self.category)
            }
        }
    }
}

/// Receiver for diagnostics
pub trait DiagnosticSink: Send + Sync {
    fn emit(&self, diagnostic: &Diagnostic);
}

/// Emits diagnostics as `tracing` warnings
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, diagnostic: &Diagnostic) {
        tracing::warn!(
            kind = ?diagnostic.kind,
            category = %diagnostic.category,
            retired = diagnostic.retired,
            "{diagnostic}"
        );
    }
}

/// Prints one line per diagnostic to stderr
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn emit(&self, diagnostic: &Diagnostic) {
        eprintln!("Warning(emoseq): {diagnostic}");
    }
}

/// Keeps every diagnostic it receives
#[derive(Debug, Default)]
pub struct CollectingSink {
    diagnostics: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Diagnostics received so far
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics
            .lock()
            .map(|d| d.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    /// Remove and return the collected diagnostics
    pub fn take(&self) -> Vec<Diagnostic> {
        match self.diagnostics.lock() {
            Ok(mut d) => std::mem::take(&mut *d),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

impl DiagnosticSink for CollectingSink {
    fn emit(&self, diagnostic: &Diagnostic) {
        match self.diagnostics.lock() {
            Ok(mut d) => d.push(diagnostic.clone()),
            Err(poisoned) => poisoned.into_inner().push(diagnostic.clone()),
        }
    }
}
