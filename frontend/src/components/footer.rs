//! Footer component

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div>"RAG File Processor • Powered by " <span class="rust-badge">"🦀 Rust + Leptos"</span></div>
        </footer>
    }
}
