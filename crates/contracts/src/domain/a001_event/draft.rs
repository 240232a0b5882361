//! Event draft state machine
//!
//! Drives the "new event" admin form: one image slot plus a submission
//! phase. The frontend owns the form fields and the network calls; this
//! type decides which transitions are legal and what the user is told.
//!
//! ```text
//!            select ok               200 + link
//!   Empty ──────────────► Uploading ────────────► Ready
//!     ▲                      │                    │  ▲
//!     │   upload failed      │            remove  │  │ delete failed
//!     └──────────────────────┘                    ▼  │
//!     └─────────────────────────────────────── Deleting
//!                      delete confirmed
//! ```

use super::aggregate::{CreateEventRequest, CreateEventResponse};
use crate::domain::a002_image::validation::{self, SelectedFile};
use crate::domain::a002_image::ImageReference;
use crate::domain::common::{ApiError, Notice};
use thiserror::Error;

pub const UPLOAD_SUCCESS_MESSAGE: &str = "Image upload successfully!";
pub const UPLOAD_FAILED_MESSAGE: &str = "Image upload failed, try again...";
pub const DELETE_FAILED_MESSAGE: &str = "Erro ao deletar a imagem, tenta novamente...";
pub const REDIRECT_MESSAGE: &str = "Você será redirecionado!";

/// Delay between the "created" notice and the redirect.
pub const REDIRECT_DELAY_MS: u32 = 2000;
/// Where the admin lands after creating an event.
pub const REDIRECT_ROUTE: &str = "/admin";

// ============================================================================
// State
// ============================================================================

/// Uploaded image together with the local preview it was picked with.
///
/// Kept as one value so the reference and the preview are always cleared
/// together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedImage {
    pub reference: ImageReference,
    pub local_preview: String,
}

/// Image slot of the draft.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ImageState {
    #[default]
    Empty,
    Uploading {
        local_preview: String,
    },
    Ready(UploadedImage),
    Deleting(UploadedImage),
}

impl ImageState {
    /// An upload or a delete is in flight
    pub fn is_busy(&self) -> bool {
        matches!(self, ImageState::Uploading { .. } | ImageState::Deleting(_))
    }

    /// URL to render. The remote link wins over the local blob once known.
    pub fn preview_url(&self) -> Option<&str> {
        match self {
            ImageState::Empty => None,
            ImageState::Uploading { local_preview } => Some(local_preview),
            ImageState::Ready(img) | ImageState::Deleting(img) => Some(&img.reference.image_link),
        }
    }

    /// Reference of the uploaded image, if the upload has completed.
    pub fn image(&self) -> Option<&ImageReference> {
        match self {
            ImageState::Ready(img) | ImageState::Deleting(img) => Some(&img.reference),
            _ => None,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            ImageState::Empty => "Empty",
            ImageState::Uploading { .. } => "Uploading",
            ImageState::Ready(_) => "Ready",
            ImageState::Deleting(_) => "Deleting",
        }
    }
}

/// Submission phase of the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    /// Event created; waiting for the delayed redirect.
    Redirecting,
}

/// Illegal transition requested by the UI.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("another operation is in progress")]
    Busy,
    #[error("an image is already attached")]
    ImageAlreadyPresent,
    #[error("no uploaded image")]
    NoImage,
    #[error("title is required")]
    MissingTitle,
    #[error("description is required")]
    MissingDescription,
    /// A completion arrived for an operation that is no longer in flight.
    #[error("no matching operation in flight")]
    Stale,
}

// ============================================================================
// Outcomes
// ============================================================================

/// Result of validating a file selection.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionOutcome<F> {
    /// Nothing picked (dialog cancelled, empty drop)
    Nothing,
    /// Upload this file; `notices` cover the other files of the batch
    Accepted {
        file: SelectedFile<F>,
        notices: Vec<Notice>,
    },
    /// Show these notices; no network call
    Rejected(Vec<Notice>),
}

/// Result of an upload/delete completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub notice: Notice,
    /// Local preview no longer referenced by the draft (to be released)
    pub released_preview: Option<String>,
}

/// Delayed navigation after a successful create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub after_ms: u32,
    pub notice: Notice,
    pub route: &'static str,
}

/// Result of the create-event call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Show `notice` now, then follow `redirect`
    Created { notice: Notice, redirect: Redirect },
    /// Nothing is shown to the user; the error is only logged
    Failed(ApiError),
}

// ============================================================================
// Draft
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventDraft {
    image: ImageState,
    submit: SubmitState,
}

impl EventDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn image(&self) -> &ImageState {
        &self.image
    }

    pub fn submit_state(&self) -> SubmitState {
        self.submit
    }

    pub fn preview_url(&self) -> Option<&str> {
        self.image.preview_url()
    }

    /// Upload, delete or submission in flight: every trigger is disabled.
    pub fn actions_disabled(&self) -> bool {
        self.image.is_busy() || self.submit != SubmitState::Idle
    }

    /// Fields are only checked for emptiness; a lone space passes.
    pub fn can_submit(&self, title: &str, description: &str) -> bool {
        !self.actions_disabled()
            && !title.is_empty()
            && !description.is_empty()
            && matches!(self.image, ImageState::Ready(_))
    }

    // === Image ===

    /// Validate a file selection. Rejections carry one notice per failed rule.
    pub fn select_files<F>(
        &self,
        files: Vec<SelectedFile<F>>,
    ) -> Result<SelectionOutcome<F>, DraftError> {
        if self.actions_disabled() {
            return Err(DraftError::Busy);
        }
        if !matches!(self.image, ImageState::Empty) {
            return Err(DraftError::ImageAlreadyPresent);
        }

        let report = validation::validate_selection(files);
        let notices: Vec<Notice> = report.rejections.iter().map(|r| r.to_notice()).collect();
        match report.accepted {
            Some(file) => {
                log::debug!("accepted {} ({} bytes)", file.name, file.size);
                Ok(SelectionOutcome::Accepted { file, notices })
            }
            None if notices.is_empty() => Ok(SelectionOutcome::Nothing),
            None => Ok(SelectionOutcome::Rejected(notices)),
        }
    }

    /// Empty → Uploading, showing `local_preview` until the upload returns.
    pub fn begin_upload(&mut self, local_preview: String) -> Result<(), DraftError> {
        if self.actions_disabled() {
            return Err(DraftError::Busy);
        }
        if !matches!(self.image, ImageState::Empty) {
            return Err(DraftError::ImageAlreadyPresent);
        }

        self.image = ImageState::Uploading { local_preview };
        log::debug!("image: Empty -> Uploading");
        Ok(())
    }

    /// Uploading → Ready on success, Uploading → Empty on failure.
    pub fn finish_upload(
        &mut self,
        result: Result<ImageReference, ApiError>,
    ) -> Result<Transition, DraftError> {
        let local_preview = match std::mem::take(&mut self.image) {
            ImageState::Uploading { local_preview } => local_preview,
            other => {
                log::warn!("upload completion ignored in state {}", other.name());
                self.image = other;
                return Err(DraftError::Stale);
            }
        };

        match result {
            Ok(reference) => {
                log::debug!("image: Uploading -> Ready ({})", reference.image_hash);
                self.image = ImageState::Ready(UploadedImage {
                    reference,
                    local_preview,
                });
                Ok(Transition {
                    notice: Notice::success(UPLOAD_SUCCESS_MESSAGE),
                    released_preview: None,
                })
            }
            Err(e) => {
                log::warn!("image upload failed: {}", e);
                Ok(Transition {
                    notice: Notice::error(UPLOAD_FAILED_MESSAGE),
                    released_preview: Some(local_preview),
                })
            }
        }
    }

    /// Ready → Deleting. Returns the hash to delete.
    pub fn begin_delete(&mut self) -> Result<String, DraftError> {
        if self.actions_disabled() {
            return Err(DraftError::Busy);
        }

        match std::mem::take(&mut self.image) {
            ImageState::Ready(img) => {
                let hash = img.reference.image_hash.clone();
                self.image = ImageState::Deleting(img);
                log::debug!("image: Ready -> Deleting ({})", hash);
                Ok(hash)
            }
            other => {
                self.image = other;
                Err(DraftError::NoImage)
            }
        }
    }

    /// Deleting → Empty on confirmation, Deleting → Ready on failure.
    ///
    /// `result` carries the backend's confirmation message.
    pub fn finish_delete(
        &mut self,
        result: Result<String, ApiError>,
    ) -> Result<Transition, DraftError> {
        let img = match std::mem::take(&mut self.image) {
            ImageState::Deleting(img) => img,
            other => {
                log::warn!("delete completion ignored in state {}", other.name());
                self.image = other;
                return Err(DraftError::Stale);
            }
        };

        match result {
            Ok(message) => {
                log::debug!("image: Deleting -> Empty");
                Ok(Transition {
                    notice: Notice::success(message),
                    released_preview: Some(img.local_preview),
                })
            }
            Err(e) => {
                log::warn!("image delete failed: {}", e);
                self.image = ImageState::Ready(img);
                Ok(Transition {
                    notice: Notice::error(DELETE_FAILED_MESSAGE),
                    released_preview: None,
                })
            }
        }
    }

    // === Submission ===

    /// Idle → Submitting. Returns the create-event payload.
    pub fn begin_submit(
        &mut self,
        title: &str,
        description: &str,
    ) -> Result<CreateEventRequest, DraftError> {
        if self.actions_disabled() {
            return Err(DraftError::Busy);
        }
        if title.is_empty() {
            return Err(DraftError::MissingTitle);
        }
        if description.is_empty() {
            return Err(DraftError::MissingDescription);
        }
        let ImageState::Ready(img) = &self.image else {
            return Err(DraftError::NoImage);
        };

        let request = CreateEventRequest {
            title: title.to_string(),
            description: description.to_string(),
            image: img.reference.clone(),
        };
        self.submit = SubmitState::Submitting;
        Ok(request)
    }

    /// Submitting → Redirecting on success, back to Idle on failure.
    pub fn finish_submit(
        &mut self,
        result: Result<CreateEventResponse, ApiError>,
    ) -> Result<SubmitOutcome, DraftError> {
        if self.submit != SubmitState::Submitting {
            log::warn!("create completion ignored in state {:?}", self.submit);
            return Err(DraftError::Stale);
        }

        match result {
            Ok(resp) => {
                self.submit = SubmitState::Redirecting;
                Ok(SubmitOutcome::Created {
                    notice: Notice::success(resp.message),
                    redirect: Redirect {
                        after_ms: REDIRECT_DELAY_MS,
                        notice: Notice::success(REDIRECT_MESSAGE),
                        route: REDIRECT_ROUTE,
                    },
                })
            }
            Err(e) => {
                // TODO: surface create failures once the backend's error body is agreed on
                log::error!("event creation failed: {}", e);
                self.submit = SubmitState::Idle;
                Ok(SubmitOutcome::Failed(e))
            }
        }
    }

    /// Drop the image slot in one step (form teardown).
    ///
    /// The remote image is left untouched. Returns the local preview to release.
    pub fn clear(&mut self) -> Option<String> {
        self.submit = SubmitState::Idle;
        match std::mem::take(&mut self.image) {
            ImageState::Empty => None,
            ImageState::Uploading { local_preview } => Some(local_preview),
            ImageState::Ready(img) | ImageState::Deleting(img) => Some(img.local_preview),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::NoticeKind;
    use serde_json::json;

    fn file(name: &str, mime: &str, size: u64) -> SelectedFile<()> {
        SelectedFile {
            name: name.to_string(),
            mime_type: mime.to_string(),
            size,
            handle: (),
        }
    }

    fn uploaded() -> ImageReference {
        ImageReference {
            image_link: "https://i.imgur.com/x.png".into(),
            image_hash: "abc123".into(),
        }
    }

    fn ready_draft() -> EventDraft {
        let mut draft = EventDraft::new();
        draft.begin_upload("blob:local-1".into()).unwrap();
        draft.finish_upload(Ok(uploaded())).unwrap();
        draft
    }

    #[test]
    fn test_disallowed_type_never_accepted() {
        let draft = EventDraft::new();
        for mime in ["application/pdf", "video/mp4", "image/bmp"] {
            let outcome = draft.select_files(vec![file("doc", mime, 100)]).unwrap();
            assert_eq!(
                outcome,
                SelectionOutcome::Rejected(vec![Notice::error(
                    "File type must be image/jpeg, image/png, image/jpg, image/gif"
                )])
            );
        }
        assert_eq!(draft.image(), &ImageState::Empty);
    }

    #[test]
    fn test_too_large_never_accepted() {
        let draft = EventDraft::new();
        let outcome = draft
            .select_files(vec![file("big.png", "image/png", 10_000_001)])
            .unwrap();
        assert_eq!(
            outcome,
            SelectionOutcome::Rejected(vec![Notice::error("File is larger than 10 MB")])
        );
    }

    #[test]
    fn test_mixed_batch_uploads_valid_file_and_reports_the_rest() {
        let draft = EventDraft::new();
        let outcome = draft
            .select_files(vec![
                file("photo.png", "image/png", 10),
                file("doc.pdf", "application/pdf", 10),
            ])
            .unwrap();
        let SelectionOutcome::Accepted { file, notices } = outcome else {
            panic!("the png must be accepted");
        };
        assert_eq!(file.name, "photo.png");
        assert_eq!(
            notices,
            vec![Notice::error(
                "File type must be image/jpeg, image/png, image/jpg, image/gif"
            )]
        );
    }

    #[test]
    fn test_two_valid_files_rejected_as_too_many() {
        let draft = EventDraft::new();
        let outcome = draft
            .select_files(vec![
                file("a.png", "image/png", 10),
                file("b.png", "image/png", 10),
            ])
            .unwrap();
        assert_eq!(
            outcome,
            SelectionOutcome::Rejected(vec![Notice::error("Too many files")])
        );
    }

    #[test]
    fn test_selection_refused_when_not_empty() {
        let draft = ready_draft();
        assert_eq!(
            draft.select_files(vec![file("a.png", "image/png", 10)]),
            Err(DraftError::ImageAlreadyPresent)
        );

        let mut uploading = EventDraft::new();
        uploading.begin_upload("blob:1".into()).unwrap();
        assert_eq!(
            uploading.select_files(vec![file("a.png", "image/png", 10)]),
            Err(DraftError::Busy)
        );
    }

    #[test]
    fn test_local_preview_shown_while_uploading() {
        let mut draft = EventDraft::new();
        draft.begin_upload("blob:local-1".into()).unwrap();
        assert_eq!(draft.preview_url(), Some("blob:local-1"));
        assert!(draft.actions_disabled());
        assert_eq!(draft.begin_upload("blob:2".into()), Err(DraftError::Busy));
        assert_eq!(draft.begin_delete(), Err(DraftError::Busy));
    }

    #[test]
    fn test_upload_success_stores_exact_reference() {
        let draft = ready_draft();
        assert_eq!(draft.image().image(), Some(&uploaded()));
        assert_eq!(draft.preview_url(), Some("https://i.imgur.com/x.png"));
        assert!(!draft.actions_disabled());
    }

    #[test]
    fn test_upload_failure_reverts_to_empty() {
        let mut draft = EventDraft::new();
        draft.begin_upload("blob:local-1".into()).unwrap();
        let t = draft.finish_upload(Err(ApiError::Status(500))).unwrap();

        assert_eq!(t.notice, Notice::error(UPLOAD_FAILED_MESSAGE));
        assert_eq!(t.released_preview.as_deref(), Some("blob:local-1"));
        assert_eq!(draft.image(), &ImageState::Empty);
        assert_eq!(draft.preview_url(), None);
        assert!(!draft.actions_disabled());
    }

    #[test]
    fn test_stale_completions_are_ignored() {
        let mut draft = ready_draft();
        let before = draft.clone();
        assert_eq!(
            draft.finish_upload(Ok(uploaded())),
            Err(DraftError::Stale)
        );
        assert_eq!(
            draft.finish_delete(Ok("x".into())),
            Err(DraftError::Stale)
        );
        assert_eq!(
            draft.finish_submit(Ok(CreateEventResponse {
                message: "x".into()
            })),
            Err(DraftError::Stale)
        );
        assert_eq!(draft, before);
    }

    #[test]
    fn test_submit_disabled_while_busy() {
        let mut uploading = EventDraft::new();
        uploading.begin_upload("blob:1".into()).unwrap();
        assert!(!uploading.can_submit("Festa", "Aniversário"));

        let mut deleting = ready_draft();
        deleting.begin_delete().unwrap();
        assert!(!deleting.can_submit("Festa", "Aniversário"));

        let mut submitting = ready_draft();
        submitting.begin_submit("Festa", "Aniversário").unwrap();
        assert!(!submitting.can_submit("Festa", "Aniversário"));
        assert_eq!(
            submitting.begin_submit("Festa", "Aniversário"),
            Err(DraftError::Busy)
        );
    }

    #[test]
    fn test_submit_requires_fields_and_image() {
        let draft = ready_draft();
        assert!(!draft.can_submit("", "Aniversário"));
        assert!(!draft.can_submit("Festa", ""));
        assert!(draft.can_submit("Festa", "Aniversário"));

        let mut empty = EventDraft::new();
        assert!(!empty.can_submit("Festa", "Aniversário"));
        assert_eq!(
            empty.begin_submit("Festa", "Aniversário"),
            Err(DraftError::NoImage)
        );
        let mut ready = ready_draft();
        assert_eq!(ready.begin_submit("", "x"), Err(DraftError::MissingTitle));
        assert_eq!(
            ready.begin_submit("x", ""),
            Err(DraftError::MissingDescription)
        );
    }

    #[test]
    fn test_whitespace_only_fields_pass() {
        let mut draft = ready_draft();
        assert!(draft.can_submit(" ", " "));
        let req = draft.begin_submit(" ", " ").unwrap();
        assert_eq!(req.title, " ");
    }

    #[test]
    fn test_delete_clears_reference_and_preview_together() {
        let mut draft = ready_draft();
        assert_eq!(draft.begin_delete().unwrap(), "abc123");
        // Still showing the image while the delete is pending
        assert_eq!(draft.preview_url(), Some("https://i.imgur.com/x.png"));

        let t = draft
            .finish_delete(Ok("Imagem deletada com sucesso!".into()))
            .unwrap();
        assert_eq!(t.notice, Notice::success("Imagem deletada com sucesso!"));
        assert_eq!(t.released_preview.as_deref(), Some("blob:local-1"));
        assert_eq!(draft.preview_url(), None);
        assert_eq!(draft.image().image(), None);
        assert_eq!(draft.image(), &ImageState::Empty);
    }

    #[test]
    fn test_delete_failure_keeps_reference() {
        let mut draft = ready_draft();
        draft.begin_delete().unwrap();
        let t = draft
            .finish_delete(Err(ApiError::Network("offline".into())))
            .unwrap();

        assert_eq!(t.notice, Notice::error(DELETE_FAILED_MESSAGE));
        assert_eq!(t.released_preview, None);
        assert_eq!(draft.image().image(), Some(&uploaded()));
        assert!(!draft.actions_disabled());
    }

    #[test]
    fn test_delete_without_image() {
        let mut draft = EventDraft::new();
        assert_eq!(draft.begin_delete(), Err(DraftError::NoImage));
        assert_eq!(draft.image(), &ImageState::Empty);
    }

    #[test]
    fn test_create_failure_is_silent_and_retryable() {
        let mut draft = ready_draft();
        draft.begin_submit("Festa", "Aniversário").unwrap();
        let outcome = draft.finish_submit(Err(ApiError::Status(500))).unwrap();

        assert_eq!(outcome, SubmitOutcome::Failed(ApiError::Status(500)));
        assert_eq!(draft.submit_state(), SubmitState::Idle);
        assert!(draft.can_submit("Festa", "Aniversário"));
    }

    #[test]
    fn test_clear_releases_everything() {
        let mut draft = ready_draft();
        assert_eq!(draft.clear().as_deref(), Some("blob:local-1"));
        assert_eq!(draft, EventDraft::new());
        assert_eq!(draft.clear(), None);
    }

    // --- End-to-end flows ---

    #[test]
    fn test_flow_upload_png_then_fill_fields() {
        let mut draft = EventDraft::new();
        let outcome = draft
            .select_files(vec![file("photo.png", "image/png", 2_000_000)])
            .unwrap();
        assert!(matches!(
            outcome,
            SelectionOutcome::Accepted { ref file, ref notices }
                if file.name == "photo.png" && notices.is_empty()
        ));

        draft.begin_upload("blob:photo".into()).unwrap();
        let body = r#"{"image_link":"https://i.imgur.com/x.png","image_hash":"abc123"}"#;
        let result = crate::domain::a002_image::aggregate::parse_upload_response(200, body);
        let t = draft.finish_upload(result).unwrap();

        assert_eq!(t.notice.kind, NoticeKind::Success);
        assert_eq!(draft.preview_url(), Some("https://i.imgur.com/x.png"));
        assert!(!draft.can_submit("", ""));
        assert!(!draft.can_submit("Festa", ""));
        assert!(draft.can_submit("Festa", "Aniversário"));
    }

    #[test]
    fn test_flow_pdf_rejected() {
        let draft = EventDraft::new();
        let outcome = draft
            .select_files(vec![file("doc.pdf", "application/pdf", 50_000)])
            .unwrap();
        let SelectionOutcome::Rejected(notices) = outcome else {
            panic!("pdf must be rejected");
        };
        assert_eq!(notices.len(), 1);
        assert_eq!(
            notices[0].text,
            crate::domain::a002_image::FileRejection::InvalidType.message()
        );
        assert_eq!(draft.image(), &ImageState::Empty);
    }

    #[test]
    fn test_flow_create_event_and_redirect() {
        let mut draft = ready_draft();
        let req = draft.begin_submit("Festa", "Aniversário").unwrap();
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({
                "title": "Festa",
                "description": "Aniversário",
                "image_link": "https://i.imgur.com/x.png",
                "image_hash": "abc123"
            })
        );

        let resp = crate::domain::a001_event::aggregate::parse_create_response(
            200,
            r#"{"message":"Evento criado!"}"#,
        );
        let outcome = draft.finish_submit(resp).unwrap();
        assert_eq!(
            outcome,
            SubmitOutcome::Created {
                notice: Notice::success("Evento criado!"),
                redirect: Redirect {
                    after_ms: 2000,
                    notice: Notice::success("Você será redirecionado!"),
                    route: "/admin",
                },
            }
        );
        assert_eq!(draft.submit_state(), SubmitState::Redirecting);
        assert!(draft.actions_disabled());
    }

    #[test]
    fn test_flow_remove_image() {
        let mut draft = ready_draft();
        let hash = draft.begin_delete().unwrap();
        assert_eq!(hash, "abc123");

        let result = crate::domain::a002_image::aggregate::parse_delete_response(
            200,
            r#"{"message":"Imagem deletada com sucesso!"}"#,
        );
        draft.finish_delete(result).unwrap();
        assert_eq!(draft.preview_url(), None);
        assert_eq!(draft.image().image(), None);
    }
}
