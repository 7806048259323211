//! Hero section component

use leptos::*;

use crate::config::APP_NAME;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <div class="hero-icon">"🧠"</div>
            <h1>{APP_NAME}</h1>
            <p class="subtitle">
                "Upload your documents and automatically process them into a searchable knowledge base"
            </p>
        </div>
    }
}
