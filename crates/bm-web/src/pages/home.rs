use bookmarklet::TemplateOptions;
use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::components::BookmarkletForm;
use crate::config::CONFIG;
use crate::options::fetch_template_options;

#[component]
pub fn HomePage() -> impl IntoView {
    let options = Resource::new(|| (), |_| fetch_template_options());

    view! {
        <Title text=CONFIG.title />
        <Meta name="description" content=CONFIG.description />
        <main class="page">
            <h1 class="heading">{CONFIG.heading}</h1>
            <Suspense fallback=move || view! { <p class="muted">"Loading\u{2026}"</p> }>
                {move || {
                    options.get().map(|result| {
                        // Falls back to the built-in style if the server is unreachable
                        let options = result.unwrap_or_else(|e| {
                            tracing::warn!("Template options unavailable, using defaults: {}", e);
                            TemplateOptions::default()
                        });
                        view! { <BookmarkletForm options=options /> }
                    })
                }}
            </Suspense>
        </main>
    }
}
