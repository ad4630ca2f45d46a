//! Error types for reading stroke order documents

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// A source document that cannot be turned into a usable tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    #[error("malformed document at {span:?}: {message}")]
    Syntax { span: Span, message: String },

    #[error("document has no <svg> element")]
    MissingSvg,
}

impl DocumentError {
    pub(crate) fn syntax(span: Span, message: impl Into<String>) -> Self {
        Self::Syntax {
            span,
            message: message.into(),
        }
    }

    /// Byte range the error points at, if any
    pub fn span(&self) -> Option<Span> {
        match self {
            DocumentError::Syntax { span, .. } => Some(span.clone()),
            DocumentError::MissingSvg => None,
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let span = self.span().unwrap_or(0..0);
        let message = match self {
            DocumentError::Syntax { message, .. } => message.clone(),
            DocumentError::MissingSvg => self.to_string(),
        };

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message(&message)
            .with_label(
                Label::new((filename, span))
                    .with_message(message)
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.to_string(),
        }
    }
}

/// Convert a tokenizer position (1-based row and column) into a byte offset
pub(crate) fn offset_of(source: &str, row: u32, col: u32) -> usize {
    let mut offset = 0;
    for (index, line) in source.split_inclusive('\n').enumerate() {
        if index + 1 == row as usize {
            let column = line
                .char_indices()
                .nth(col.saturating_sub(1) as usize)
                .map(|(i, _)| i)
                .unwrap_or(line.len());
            return offset + column;
        }
        offset += line.len();
    }
    source.len()
}
