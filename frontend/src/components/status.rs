//! Processing status shown while a submission is in flight.
//!
//! The endpoint reports no progress, so this is a fixed list of the
//! pipeline stages with a spinner on each.

use leptos::*;
use ragload::{PIPELINE_STAGES, PROCESSING_NOTE};

#[component]
pub fn ProcessingStatus() -> impl IntoView {
    view! {
        <div class="status-section">
            <div class="section-header">
                <span class="spinner"></span>
                <h2>"Processing Files"</h2>
            </div>

            <div class="stage-list">
                {PIPELINE_STAGES
                    .iter()
                    .map(|stage| view! {
                        <div class="stage">
                            <div class="stage-text">
                                <h3 class="stage-label">{stage.label}</h3>
                                <p class="stage-description">{stage.description}</p>
                            </div>
                            <span class="spinner small"></span>
                        </div>
                    })
                    .collect_view()}
            </div>

            <div class="status-note">{PROCESSING_NOTE}</div>
        </div>
    }
}
