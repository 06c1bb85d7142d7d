//! Non-fatal diagnostics carried alongside decoded values

use crate::format::SampleLayout;

/// A warning raised while decoding that did not prevent a result
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Diagnostic {
    /// Grid dimensions were unknown so the decoded count was not checked
    UnvalidatedCount { layout: SampleLayout, decoded: usize },
    /// The relaxed pass accepted a layout whose count differs from the grid
    CountMismatch {
        layout: SampleLayout,
        decoded: usize,
        expected: u64,
    },
    /// A text payload holds a different number of values than the grid has cells
    ValueCountMismatch { decoded: usize, expected: u64 },
    /// A property was left out of a batch read
    PropertySkipped { id: String, reason: String },
}

impl core::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Diagnostic::UnvalidatedCount { layout, decoded } => write!(
                f,
                "loaded {decoded} values as {layout} (could not validate count)"
            ),
            Diagnostic::CountMismatch {
                layout,
                decoded,
                expected,
            } => write!(
                f,
                "loaded {decoded} values as {layout}, but expected {expected} values"
            ),
            Diagnostic::ValueCountMismatch { decoded, expected } => {
                write!(f, "loaded {decoded} text values, but expected {expected} values")
            }
            Diagnostic::PropertySkipped { id, reason } => {
                write!(f, "failed to read property {id}: {reason}")
            }
        }
    }
}

/// A value together with the diagnostics produced while computing it
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnosed<T> {
    pub value: T,
    pub diagnostics: Vec<Diagnostic>,
}

impl<T> Diagnosed<T> {
    /// A value with no diagnostics
    pub fn clean(value: T) -> Self {
        Self {
            value,
            diagnostics: Vec::new(),
        }
    }

    /// A value with a single diagnostic
    pub fn with(value: T, diagnostic: Diagnostic) -> Self {
        Self {
            value,
            diagnostics: vec![diagnostic],
        }
    }

    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Transform the value, keeping the diagnostics
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Diagnosed<U> {
        Diagnosed {
            value: f(self.value),
            diagnostics: self.diagnostics,
        }
    }

    pub fn into_parts(self) -> (T, Vec<Diagnostic>) {
        (self.value, self.diagnostics)
    }
}
