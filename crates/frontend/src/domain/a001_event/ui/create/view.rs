//! New Event - View Component

use super::model::collect_files;
use super::view_model::NewEventVm;
use crate::shared::components::PageHeader;
use crate::shared::icons::icon;
use contracts::domain::a001_event::ImageState;
use contracts::domain::a002_image::validation::accept_attribute;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use thaw::*;
use web_sys::{DragEvent, HtmlInputElement};

/// `id` of the title control; its `<label for>` points here.
pub const TITLE_FIELD_ID: &str = "eventName";
pub const DESCRIPTION_FIELD_ID: &str = "eventDescription";

#[component]
#[allow(non_snake_case)]
pub fn NewEvent() -> impl IntoView {
    let vm = NewEventVm::new();
    let toaster = ToasterInjection::expect_context();
    let navigate = use_navigate();
    let file_input_ref = NodeRef::<leptos::html::Input>::new();

    on_cleanup(move || vm.teardown());

    Effect::new(move |_| {
        if let Some(route) = vm.redirect_to.get() {
            navigate(route, Default::default());
        }
    });

    let actions_disabled = vm.actions_disabled();
    let submit_disabled = vm.is_submit_disabled();
    let preview_url = vm.preview_url();
    let title_error = vm.title_error();
    let description_error = vm.description_error();

    // Drop zone is click-free: the picker only opens from the button
    let open_picker = move |_| {
        if let Some(input) = file_input_ref.get() {
            input.click();
        }
    };

    let on_file_change = {
        let toaster = toaster.clone();
        move |ev: leptos::ev::Event| {
            let input: HtmlInputElement = event_target(&ev);
            let files = collect_files(input.files());
            // Allow picking the same file again after a failure
            input.set_value("");
            vm.select_files(files, toaster.clone());
        }
    };

    let on_drop = {
        let toaster = toaster.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            if actions_disabled.get_untracked() {
                return;
            }
            let files = collect_files(ev.data_transfer().and_then(|dt| dt.files()));
            vm.select_files(files, toaster.clone());
        }
    };

    let on_remove = {
        let toaster = toaster.clone();
        move |_| vm.remove_image(toaster.clone())
    };

    let on_submit = {
        let toaster = toaster.clone();
        move |_| vm.submit(toaster.clone())
    };

    view! {
        <section class="page page--new-event">
            <PageHeader title="Novo evento" />

            <div class="event-form">
                <div class="event-form__field" on:focusout=move |_| vm.title_touched.set(true)>
                    <label for=TITLE_FIELD_ID>"Nome do Evento"</label>
                    <Input
                        value=vm.title
                        placeholder="Digite o nome do Evento"
                        id=TITLE_FIELD_ID
                    />
                    {move || title_error.get().map(|msg| view! {
                        <span class="event-form__error">{msg}</span>
                    })}
                </div>

                <div class="event-form__field" on:focusout=move |_| vm.description_touched.set(true)>
                    <label for=DESCRIPTION_FIELD_ID>"Descrição do Evento"</label>
                    <Textarea
                        value=vm.description
                        placeholder="Digite a Descrição do Evento"
                        id=DESCRIPTION_FIELD_ID
                        attr:rows=4
                    />
                    {move || description_error.get().map(|msg| view! {
                        <span class="event-form__error">{msg}</span>
                    })}
                </div>

                <div
                    class="dropzone"
                    on:dragover=|ev: DragEvent| ev.prevent_default()
                    on:drop=on_drop
                >
                    <input
                        node_ref=file_input_ref
                        type="file"
                        accept=accept_attribute()
                        style="display: none;"
                        prop:disabled=move || actions_disabled.get()
                        on:change=on_file_change
                    />

                    {move || {
                        let busy = vm.draft.with(|d| d.image().is_busy());
                        let is_empty = vm.draft.with(|d| matches!(d.image(), ImageState::Empty));
                        let on_remove = on_remove.clone();

                        if is_empty {
                            view! {
                                <p class="dropzone__hint">"Drag files here"</p>
                                <Button
                                    appearance=ButtonAppearance::Secondary
                                    on_click=open_picker
                                    disabled=move || actions_disabled.get()
                                >
                                    {icon("upload")}
                                    " Upload image"
                                </Button>
                            }
                            .into_any()
                        } else {
                            view! {
                                <div class="dropzone__preview-wrapper">
                                    {preview_url.get().map(|src| view! {
                                        <img
                                            class=if busy { "dropzone__preview dropzone__preview--busy" } else { "dropzone__preview" }
                                            src=src
                                            alt="Image uploaded"
                                            width="200"
                                            height="200"
                                        />
                                    })}
                                    {busy.then(|| view! { <Spinner /> })}
                                </div>
                                <Button
                                    appearance=ButtonAppearance::Subtle
                                    on_click=on_remove
                                    disabled=move || actions_disabled.get()
                                >
                                    {icon("trash")}
                                    " Remove image"
                                </Button>
                            }
                            .into_any()
                        }
                    }}
                </div>

                <div class="event-form__actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=on_submit
                        disabled=move || submit_disabled.get()
                    >
                        "Criar"
                    </Button>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_ids_are_distinct() {
        assert_ne!(TITLE_FIELD_ID, DESCRIPTION_FIELD_ID);
        assert!(!TITLE_FIELD_ID.contains(' ') && !DESCRIPTION_FIELD_ID.contains(' '));
    }
}
