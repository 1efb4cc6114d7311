use bookmarklet::{Delimiter, quote_literal};
use leptos::prelude::*;

/// Script for the button's `onclick`: copy `text`, then flash "Copied!".
/// Inline so it works before hydration finishes.
fn copy_onclick(text: &str) -> String {
    format!(
        "navigator.clipboard.writeText({}).then(() => {{ \
            const btn = this; \
            const original = btn.textContent; \
            btn.textContent = 'Copied!'; \
            setTimeout(() => btn.textContent = original, 2000); \
        }})",
        quote_literal(text, Delimiter::SingleQuote)
    )
}

/// A button that copies text to clipboard with visual feedback
#[component]
pub fn CopyButton(
    /// The text to copy when clicked
    #[prop(into)]
    text: Signal<String>,
    /// Button label (shown before copy)
    #[prop(into)]
    label: String,
) -> impl IntoView {
    let onclick_js = move || text.with(|t| copy_onclick(t));

    view! {
        <button type="button" onclick=onclick_js class="copy-button">
            {label}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_is_single_quoted_and_escaped() {
        let js = copy_onclick("javascript:(function(){alert('hi')})(`a\nb`,``);");
        assert!(js.starts_with(
            r"navigator.clipboard.writeText('javascript:(function(){alert(\'hi\')})(`a\nb`,``);').then("
        ));
        assert!(!js.contains('\n'));
    }
}
