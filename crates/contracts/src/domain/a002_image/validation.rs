//! File-selection rules for the event image drop zone.
//!
//! Runs before any network call: a rejected selection never reaches the
//! upload endpoint.

use crate::domain::common::Notice;

/// MIME types accepted by the drop zone.
pub const ACCEPTED_MIME_TYPES: [&str; 4] = ["image/jpeg", "image/png", "image/jpg", "image/gif"];

/// Maximum image size in bytes (inclusive).
pub const MAX_IMAGE_SIZE: u64 = 10_000_000;

/// Maximum number of files per selection.
pub const MAX_FILES: usize = 1;

pub const FILE_TOO_LARGE_MESSAGE: &str = "File is larger than 10 MB";
pub const TOO_MANY_FILES_MESSAGE: &str = "Too many files";

/// Value for the `accept` attribute of the file input.
pub fn accept_attribute() -> String {
    ACCEPTED_MIME_TYPES.join(", ")
}

/// A file picked or dropped by the user.
///
/// `handle` is whatever the caller needs to upload it later (a browser
/// `File` in the frontend, `()` in tests).
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile<F> {
    pub name: String,
    pub mime_type: String,
    pub size: u64,
    pub handle: F,
}

/// Why a selection was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileRejection {
    InvalidType,
    TooLarge,
    TooMany,
}

impl FileRejection {
    /// User-facing message for this rejection.
    pub fn message(&self) -> String {
        match self {
            FileRejection::InvalidType => format!("File type must be {}", accept_attribute()),
            FileRejection::TooLarge => FILE_TOO_LARGE_MESSAGE.to_string(),
            FileRejection::TooMany => TOO_MANY_FILES_MESSAGE.to_string(),
        }
    }

    pub fn to_notice(&self) -> Notice {
        Notice::error(self.message())
    }
}

/// Check a single file's type and size.
pub fn validate_file(mime_type: &str, size: u64) -> Vec<FileRejection> {
    let mut rejections = Vec::new();

    let mime = mime_type.trim().to_ascii_lowercase();
    if !ACCEPTED_MIME_TYPES.contains(&mime.as_str()) {
        rejections.push(FileRejection::InvalidType);
    }
    if size > MAX_IMAGE_SIZE {
        rejections.push(FileRejection::TooLarge);
    }

    rejections
}

/// Validated selection: the file to upload (if any) plus the reasons the
/// other files were turned away.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionReport<F> {
    pub accepted: Option<SelectedFile<F>>,
    pub rejections: Vec<FileRejection>,
}

impl<F> SelectionReport<F> {
    /// Nothing picked and nothing rejected (e.g. the picker was cancelled).
    pub fn is_empty(&self) -> bool {
        self.accepted.is_none() && self.rejections.is_empty()
    }
}

/// Validate a whole selection.
///
/// Every file is checked on its own first; the count limit applies only to
/// the files that passed. More than `MAX_FILES` passing files turns the
/// whole passing set away with a single `TooMany`.
pub fn validate_selection<F>(files: Vec<SelectedFile<F>>) -> SelectionReport<F> {
    let mut passed = Vec::new();
    let mut rejections = Vec::new();

    for file in files {
        let failed = validate_file(&file.mime_type, file.size);
        if failed.is_empty() {
            passed.push(file);
        } else {
            rejections.extend(failed);
        }
    }

    if passed.len() > MAX_FILES {
        rejections.push(FileRejection::TooMany);
        passed.clear();
    }

    SelectionReport {
        accepted: passed.into_iter().next(),
        rejections,
    }
}
