use leptos::prelude::*;

/// Labelled form row: caption above, control below
#[component]
pub fn Field(#[prop(into)] label: String, children: Children) -> impl IntoView {
    view! {
        <label class="field">
            <div class="field-label">{label}</div>
            {children()}
        </label>
    }
}
