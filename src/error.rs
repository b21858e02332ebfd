//! Error values surfaced through the upload callbacks.
//!
//! Nothing here is ever raised through the render tree. Rejections and
//! engine failures are logged and handed to the owner's `on_error` callback
//! when one is supplied, and otherwise dropped.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// The rule a rejected file violated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RejectionReason {
    InvalidType,
    TooManyFiles,
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidType => write!(f, "file type is not accepted"),
            Self::TooManyFiles => write!(f, "too many files"),
        }
    }
}

/// One offending file from a rejected selection.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FileRejection {
    pub file: String,
    pub reason: RejectionReason,
}

impl FileRejection {
    pub fn new(file: impl Into<String>, reason: RejectionReason) -> Self {
        Self { file: file.into(), reason }
    }
}

impl fmt::Display for FileRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.file, self.reason)
    }
}

/// Everything that can go wrong with a selection.
#[derive(Clone, Debug, PartialEq, Error, Serialize)]
pub enum UploadError {
    /// The selection violated the accept patterns or the file-count limit.
    #[error("{message}")]
    Rejected {
        message: String,
        rejections: Vec<FileRejection>,
    },
    /// The native file dialog could not be driven.
    #[error("file dialog failed: {0}")]
    Dialog(String),
}

impl UploadError {
    /// Build a rejection error, pluralizing the message by how many files
    /// were rejected rather than how many were dropped.
    pub fn rejected(rejections: Vec<FileRejection>) -> Self {
        Self::Rejected {
            message: rejection_message(rejections.len()),
            rejections,
        }
    }

    /// The per-file details of a rejection, if this is one.
    pub fn rejections(&self) -> Option<&[FileRejection]> {
        match self {
            Self::Rejected { rejections, .. } => Some(rejections),
            Self::Dialog(_) => None,
        }
    }
}

fn rejection_message(rejected: usize) -> String {
    if rejected > 1 {
        "Invalid file types".to_string()
    } else {
        "Invalid file type".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_rejection_message_is_singular() {
        let err = UploadError::rejected(vec![FileRejection::new(
            "doc.pdf",
            RejectionReason::InvalidType,
        )]);
        assert_eq!(err.to_string(), "Invalid file type");
    }

    #[test]
    fn multiple_rejections_pluralize_the_message() {
        let err = UploadError::rejected(vec![
            FileRejection::new("a.png", RejectionReason::TooManyFiles),
            FileRejection::new("b.png", RejectionReason::TooManyFiles),
        ]);
        assert_eq!(err.to_string(), "Invalid file types");
    }

    #[test]
    fn rejections_are_kept_in_order() {
        let err = UploadError::rejected(vec![
            FileRejection::new("b.exe", RejectionReason::InvalidType),
            FileRejection::new("a.exe", RejectionReason::InvalidType),
        ]);
        let files: Vec<&str> =
            err.rejections().unwrap().iter().map(|r| r.file.as_str()).collect();
        assert_eq!(files, ["b.exe", "a.exe"]);
    }

    #[test]
    fn dialog_errors_carry_no_rejections() {
        let err = UploadError::Dialog("window closed".into());
        assert!(err.rejections().is_none());
        assert_eq!(err.to_string(), "file dialog failed: window closed");
    }

    #[test]
    fn rejection_details_serialize_for_display() {
        let rejection = FileRejection::new("doc.pdf", RejectionReason::InvalidType);
        let json = serde_json::to_string(&rejection).unwrap();
        assert_eq!(json, r#"{"file":"doc.pdf","reason":"invalid-type"}"#);
    }
}
