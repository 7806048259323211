//! Result panel for a finished submission.
//!
//! The success block and the error block are independent: a record that
//! is successful and still carries an error shows both.

use leptos::*;
use ragload::result::{NEXT_STEPS, STORED_LABEL};
use ragload::{ProcessingResult, ResultView};

#[component]
pub fn ResultsDisplay(result: ProcessingResult) -> impl IntoView {
    let view_model = ResultView::new(&result);
    let success = view_model.success;
    let panel_class = if success {
        "results-section success"
    } else {
        "results-section failure"
    };
    let icon = if success { "✅" } else { "⚠️" };

    view! {
        <div class=panel_class>
            <div class="section-header">
                <span class="result-icon">{icon}</span>
                <h2>{view_model.heading}</h2>
            </div>

            <p class="result-message">{view_model.message.clone()}</p>

            {view_model.stats.map(|stats| view! {
                <div class="result-stats">
                    <div class="stat">
                        <div class="stat-value">{stats.files_processed}</div>
                        <div class="stat-label">"Files Processed"</div>
                    </div>
                    <div class="stat">
                        <div class="stat-value">{stats.chunks_created}</div>
                        <div class="stat-label">"Chunks Created"</div>
                    </div>
                    <div class="stat">
                        <div class="stat-value">"✓"</div>
                        <div class="stat-label">{STORED_LABEL}</div>
                    </div>
                </div>
            })}

            {view_model.error.clone().map(|error| view! {
                <div class="result-error">
                    <p class="result-error-title">"Error Details:"</p>
                    <p class="result-error-text">{error}</p>
                </div>
            })}

            <Show
                when=move || success
                fallback=|| view! { }
            >
                <div class="next-steps">
                    <p class="next-steps-title">"Next Steps:"</p>
                    <ul>
                        {NEXT_STEPS.iter().map(|step| view! { <li>{*step}</li> }).collect_view()}
                    </ul>
                </div>
            </Show>
        </div>
    }
}
