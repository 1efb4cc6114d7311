use bookmarklet::GeneratedScript;
use leptos::prelude::*;

use super::CopyButton;

/// The draggable `javascript:` link plus a copy fallback.
///
/// While no minified script exists the href is the bare scheme, so dragging
/// or clicking it early does nothing.
#[component]
pub fn BookmarkletLink(#[prop(into)] name: Signal<String>, generated: RwSignal<GeneratedScript>) -> impl IntoView {
    let href = Memo::new(move |_| generated.with(|g| g.href()));
    let pending = move || generated.with(|g| g.is_pending());

    view! {
        <div class="actions">
            <a
                class="bookmarklet"
                class:pending=pending
                aria-busy=move || pending().to_string()
                href=move || href.get()
            >
                "Copy " {move || name.get()}
            </a>
            <CopyButton text=href label="Copy link" />
        </div>
    }
}
