//! File intake with drag & drop support.
//!
//! Dropped files go through the document filter; files picked through the
//! native dialog are taken as-is. Both are appended to the selection.

use leptos::*;
use ragload::ACCEPT_ATTRIBUTE;
use web_sys::{DragEvent, Event, HtmlInputElement};

use crate::types::{files_from_list, BrowserFile, UiSession};

#[component]
pub fn FileUploader(
    session: ReadSignal<UiSession>,
    set_session: WriteSignal<UiSession>,
) -> impl IntoView {
    let (drag_active, set_drag_active) = create_signal(false);

    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        set_drag_active.set(true);
    };

    let on_drag_leave = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        set_drag_active.set(false);
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        set_drag_active.set(false);

        let dropped = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .map(|list| files_from_list(&list))
            .unwrap_or_default();

        log::info!("📥 {} files dropped", dropped.len());
        set_session.update(|s| *s = s.add_dropped(dropped));
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);

        if let Some(files) = input.files() {
            let picked = files_from_list(&files);
            log::info!("📂 {} files picked", picked.len());
            set_session.update(|s| *s = s.add_picked(picked));
        }

        // allow picking the same file again
        input.set_value("");
    };

    view! {
        <div class="uploader">
            <label
                for="fileInput"
                class="drop-zone"
                class:drag-active=move || drag_active.get()
                on:dragenter=on_drag_over
                on:dragover=on_drag_over
                on:dragleave=on_drag_leave
                on:drop=on_drop
            >
                <input
                    type="file"
                    id="fileInput"
                    class="drop-input"
                    multiple=true
                    accept=ACCEPT_ATTRIBUTE
                    on:change=on_file_change
                />

                <div class="upload-icon" class:drag-active=move || drag_active.get()>"📤"</div>
                <div class="upload-text">"Drop files here or click to browse"</div>
                <div class="upload-hint">"Supports TXT, PDF, Word documents, and CSV files"</div>
                <div class="upload-formats">
                    <span>"📄 TXT"</span>
                    <span>"📕 PDF"</span>
                    <span>"📘 DOC/DOCX"</span>
                    <span>"📊 CSV"</span>
                </div>
            </label>

            <Show
                when=move || !session.get().is_empty()
                fallback=|| view! { }
            >
                <SelectedFiles session=session set_session=set_session/>
            </Show>
        </div>
    }
}

/// List of selected files with per-item removal.
#[component]
fn SelectedFiles(
    session: ReadSignal<UiSession>,
    set_session: WriteSignal<UiSession>,
) -> impl IntoView {
    let entries = move || session.get().files().to_vec();

    // Rows are keyed by identity; the index is looked up at click time.
    let remove = move |id: u64| {
        set_session.update(|s| {
            if let Some(index) = s.position_of(id) {
                *s = s.remove(index);
            }
        })
    };

    view! {
        <div class="selected-files">
            <h3 class="selected-title">
                {move || format!("Selected Files ({})", session.get().files().len())}
            </h3>
            <div class="selected-list">
                <For
                    each=entries
                    key=|file: &BrowserFile| file.id
                    children=move |file: BrowserFile| {
                        let kind = file.kind();
                        let id = file.id;
                        view! {
                            <div class="selected-item">
                                <span class=kind.css_class()>{kind.emoji()}</span>
                                <div class="selected-info">
                                    <p class="selected-name">{file.name.clone()}</p>
                                    <p class="selected-size">{file.display_size()}</p>
                                </div>
                                <button
                                    class="remove-button"
                                    title="Remove"
                                    on:click=move |_| remove(id)
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
