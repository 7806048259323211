//! RAG Load - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for uploading documents to the RAG processing
//! pipeline (chunking, embeddings, vector storage happen server-side).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent (owns the UiSession signal)                    │
//! │  ├── Hero                                                   │
//! │  ├── FileUploader + Process / Clear actions                 │
//! │  ├── ProcessingStatus (while submitting)                    │
//! │  ├── ResultsDisplay (once a result exists)                  │
//! │  └── Features                                               │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Browser-bound aliases of the workflow types
//! - [`components`] - UI components
//! - [`services`] - Backend communication

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use ragload::ProcessingClient;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{BrowserFile, UiSession};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application
// =============================================================================

/// Root component; mounted by the `ragload-frontend` binary.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // Selection, processing flag and last result, as one value
    let (session, set_session) = create_signal(UiSession::new());

    let on_process = move |_| {
        let Some(submitting) = session.get_untracked().begin() else {
            return;
        };
        set_session.set(submitting.clone());

        spawn_local(async move {
            log::info!("⚡ Processing {} files...", submitting.files().len());
            let client = BrowserClient::new();
            let outcome = client.submit(submitting.files()).await;
            set_session.update(|s| *s = s.finish(outcome));
        });
    };

    let on_clear = move |_| {
        log::info!("🧹 Clearing selection");
        set_session.update(|s| *s = s.clear());
    };

    let is_processing = move || session.get().is_processing();

    view! {
        <div class="container">
            <Hero/>

            <div class="upload-section">
                <div class="section-header">
                    <h2>"Upload Files"</h2>
                </div>

                <FileUploader session=session set_session=set_session/>

                <Show
                    when=move || !session.get().is_empty()
                    fallback=|| view! { }
                >
                    <div class="actions">
                        <button
                            class="btn btn-primary"
                            prop:disabled=is_processing
                            on:click=on_process
                        >
                            {move || if is_processing() {
                                "⏳ Processing..."
                            } else {
                                "⚡ Process Files"
                            }}
                        </button>
                        <button
                            class="btn btn-secondary"
                            prop:disabled=is_processing
                            on:click=on_clear
                        >
                            "Clear All"
                        </button>
                    </div>
                </Show>
            </div>

            // Pipeline stages, only while a request is in flight
            <Show
                when=is_processing
                fallback=|| view! { }
            >
                <ProcessingStatus/>
            </Show>

            // Result of the last submission
            {move || session.get().result().cloned().map(|result| view! {
                <ResultsDisplay result=result/>
            })}

            <Features/>
        </div>

        <Footer/>
    }
}
