//! New Event - View Model
//!
//! Form fields are plain RwSignals for THAW two-way binding. The image slot
//! and submission phase live in one `EventDraft` signal; every network call
//! starts from a `begin_*` transition and ends in the matching `finish_*`.

use super::model;
use crate::shared::notify::notify;
use contracts::domain::a001_event::draft::{DraftError, Redirect, UPLOAD_FAILED_MESSAGE};
use contracts::domain::a001_event::{EventDraft, SelectionOutcome, SubmitOutcome};
use contracts::domain::a002_image::SelectedFile;
use contracts::domain::common::Notice;
use leptos::prelude::*;
use std::time::Duration;
use thaw::ToasterInjection;
use web_sys::File;

pub const TITLE_REQUIRED_MESSAGE: &str = "Nome do evento necessário!";
pub const DESCRIPTION_REQUIRED_MESSAGE: &str = "Descrição do evento necessária!";

#[derive(Clone, Copy)]
pub struct NewEventVm {
    // === Form fields ===
    pub title: RwSignal<String>,
    pub description: RwSignal<String>,
    pub title_touched: RwSignal<bool>,
    pub description_touched: RwSignal<bool>,

    // === Workflow state ===
    pub draft: RwSignal<EventDraft>,
    /// Set when the delayed redirect fires; the view navigates on it
    pub redirect_to: RwSignal<Option<&'static str>>,
    redirect_timer: StoredValue<Option<TimeoutHandle>>,
}

impl NewEventVm {
    pub fn new() -> Self {
        Self {
            title: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            title_touched: RwSignal::new(false),
            description_touched: RwSignal::new(false),
            draft: RwSignal::new(EventDraft::new()),
            redirect_to: RwSignal::new(None),
            redirect_timer: StoredValue::new(None),
        }
    }

    // === Derived signals ===

    /// Remote link once uploaded, local blob before that.
    pub fn preview_url(&self) -> Signal<Option<String>> {
        let draft = self.draft;
        Signal::derive(move || draft.with(|d| d.preview_url().map(str::to_string)))
    }

    pub fn actions_disabled(&self) -> Signal<bool> {
        let draft = self.draft;
        Signal::derive(move || draft.with(|d| d.actions_disabled()))
    }

    pub fn is_submit_disabled(&self) -> Signal<bool> {
        let draft = self.draft;
        let title = self.title;
        let description = self.description;
        Signal::derive(move || {
            let title = title.get();
            let description = description.get();
            !draft.with(|d| d.can_submit(&title, &description))
        })
    }

    pub fn title_error(&self) -> Signal<Option<&'static str>> {
        let title = self.title;
        let touched = self.title_touched;
        Signal::derive(move || {
            (touched.get() && title.with(|t| t.is_empty())).then_some(TITLE_REQUIRED_MESSAGE)
        })
    }

    pub fn description_error(&self) -> Signal<Option<&'static str>> {
        let description = self.description;
        let touched = self.description_touched;
        Signal::derive(move || {
            (touched.get() && description.with(|d| d.is_empty()))
                .then_some(DESCRIPTION_REQUIRED_MESSAGE)
        })
    }

    // === Commands ===

    /// Validate the picked files and start the upload of the accepted one.
    pub fn select_files(&self, files: Vec<SelectedFile<File>>, toaster: ToasterInjection) {
        let outcome = self.draft.with_untracked(|d| d.select_files(files));
        let file = match outcome {
            Ok(SelectionOutcome::Accepted { file, notices }) => {
                for notice in notices {
                    notify(&toaster, notice);
                }
                file
            }
            Ok(SelectionOutcome::Nothing) => return,
            Ok(SelectionOutcome::Rejected(notices)) => {
                for notice in notices {
                    notify(&toaster, notice);
                }
                return;
            }
            Err(e) => {
                log::warn!("file selection ignored: {}", e);
                return;
            }
        };

        let local_preview = match model::create_local_preview(&file.handle) {
            Ok(url) => url,
            Err(e) => {
                log::error!("failed to create preview for {}: {}", file.name, e);
                notify(&toaster, Notice::error(UPLOAD_FAILED_MESSAGE));
                return;
            }
        };

        let started = self
            .draft
            .try_update(|d| d.begin_upload(local_preview.clone()));
        if !matches!(started, Some(Ok(()))) {
            log::warn!("upload not started: {:?}", started);
            model::release_local_preview(&local_preview);
            return;
        }

        let draft = self.draft;
        wasm_bindgen_futures::spawn_local(async move {
            let result = model::upload_image(file.handle).await;
            match draft.try_update(|d| d.finish_upload(result)) {
                Some(Ok(transition)) => {
                    if let Some(url) = transition.released_preview {
                        model::release_local_preview(&url);
                    }
                    notify(&toaster, transition.notice);
                }
                Some(Err(e)) => log::warn!("upload result dropped: {}", e),
                None => log::warn!("upload finished after the form was closed"),
            }
        });
    }

    /// Delete the uploaded image on the image host.
    pub fn remove_image(&self, toaster: ToasterInjection) {
        let image_hash = match self.draft.try_update(|d| d.begin_delete()) {
            Some(Ok(hash)) => hash,
            Some(Err(e)) => {
                log::warn!("remove ignored: {}", e);
                return;
            }
            None => return,
        };

        let draft = self.draft;
        wasm_bindgen_futures::spawn_local(async move {
            let result = model::delete_image(&image_hash).await;
            match draft.try_update(|d| d.finish_delete(result)) {
                Some(Ok(transition)) => {
                    if let Some(url) = transition.released_preview {
                        model::release_local_preview(&url);
                    }
                    notify(&toaster, transition.notice);
                }
                Some(Err(e)) => log::warn!("delete result dropped: {}", e),
                None => log::warn!("delete finished after the form was closed"),
            }
        });
    }

    /// Create the event; on success notify, wait, notify again and navigate.
    pub fn submit(&self, toaster: ToasterInjection) {
        self.title_touched.set(true);
        self.description_touched.set(true);

        let title = self.title.get_untracked();
        let description = self.description.get_untracked();
        let request = match self.draft.try_update(|d| d.begin_submit(&title, &description)) {
            Some(Ok(request)) => request,
            Some(Err(DraftError::Busy)) | None => return,
            Some(Err(e)) => {
                log::debug!("submit refused: {}", e);
                return;
            }
        };

        let this = *self;
        wasm_bindgen_futures::spawn_local(async move {
            let result = model::create_event(&request).await;
            match this.draft.try_update(|d| d.finish_submit(result)) {
                Some(Ok(SubmitOutcome::Created { notice, redirect })) => {
                    notify(&toaster, notice);
                    this.schedule_redirect(redirect, toaster);
                }
                // Logged by the draft, nothing shown to the user
                Some(Ok(SubmitOutcome::Failed(_))) => {}
                Some(Err(e)) => log::warn!("create result dropped: {}", e),
                None => log::warn!("event created after the form was closed"),
            }
        });
    }

    fn schedule_redirect(&self, redirect: Redirect, toaster: ToasterInjection) {
        let Redirect {
            after_ms,
            notice,
            route,
        } = redirect;
        let redirect_to = self.redirect_to;

        let handle = set_timeout_with_handle(
            move || {
                notify(&toaster, notice);
                redirect_to.try_set(Some(route));
            },
            Duration::from_millis(u64::from(after_ms)),
        );
        match handle {
            Ok(handle) => {
                self.redirect_timer.set_value(Some(handle));
            }
            Err(e) => log::error!("failed to schedule redirect: {:?}", e),
        }
    }

    /// Form teardown: cancel the pending redirect and drop the image slot.
    pub fn teardown(&self) {
        if let Some(url) = self.reset() {
            model::release_local_preview(&url);
        }
    }

    /// Returns the local preview the draft held, for the caller to release.
    fn reset(&self) -> Option<String> {
        if let Some(handle) = self.redirect_timer.try_update_value(Option::take).flatten() {
            handle.clear();
        }
        self.draft.try_update(|d| d.clear()).flatten()
    }
}
