use leptos::*;

#[component]
pub fn Features() -> impl IntoView {
    let features = [
        ("📄", "Multiple Formats", "Support for TXT, PDF, Word, and CSV files"),
        ("🗄️", "Vector Storage", "Automatic embedding and vector database integration"),
        ("🧠", "Smart Processing", "AI-powered chunking and content extraction"),
    ];

    view! {
        <div class="features">
            {features
                .into_iter()
                .map(|(icon, title, text)| view! {
                    <div class="feature-card">
                        <div class="feature-icon">{icon}</div>
                        <h3>{title}</h3>
                        <p>{text}</p>
                    </div>
                })
                .collect_view()}
        </div>
    }
}
