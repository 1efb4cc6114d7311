//! The draft form: two text fields driving the generated bookmarklet.
//!
//! Every edit rebuilds the source synchronously and starts a minification on
//! the local executor. `GeneratedScript` tickets make sure only the run for
//! the newest source ever reaches the link.

use bookmarklet::{Completion, Draft, GeneratedScript, MinifyError, TemplateOptions, Ticket, build_script, minify};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{BookmarkletLink, Field};
use crate::config::CONFIG;

/// Visible rows for the content textarea: one per line, never below the
/// configured minimum.
pub fn content_rows(content: &str) -> usize {
    content.split('\n').count().max(CONFIG.content_min_rows)
}

/// Start a run for `source`; `None` once the signal is disposed.
fn begin_run(generated: RwSignal<GeneratedScript>, source: String) -> Option<Ticket> {
    generated.try_update(|g| g.begin(source))
}

/// Store a finished run. Stale results leave the signal (and the link) untouched.
fn finish_run(
    generated: RwSignal<GeneratedScript>,
    ticket: Ticket,
    result: Result<String, MinifyError>,
) -> Option<Completion> {
    generated.try_maybe_update(|g| {
        let completion = g.finish(ticket, result);
        (completion != Completion::Stale, completion)
    })
}

/// Let the browser paint the keystroke before minifying.
async fn yield_to_browser() {
    #[cfg(feature = "hydrate")]
    gloo_timers::future::TimeoutFuture::new(0).await;
}

#[component]
pub fn BookmarkletForm(options: TemplateOptions) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let generated = RwSignal::new(GeneratedScript::default());

    let source = Memo::new(move |_| {
        let draft = Draft {
            name: name.get(),
            content: content.get(),
        };
        build_script(&draft, &options)
    });

    Effect::new(move |_| {
        let source = source.get();
        let Some(ticket) = begin_run(generated, source.clone()) else {
            return;
        };

        spawn_local(async move {
            yield_to_browser().await;
            let completion = finish_run(generated, ticket, minify(&source));
            tracing::debug!(?ticket, ?completion, "minification finished");
        });
    });

    let rows = move || content.with(|c| content_rows(c)).to_string();

    view! {
        <Field label=CONFIG.name_label>
            <input
                class="input"
                type="text"
                autofocus=true
                placeholder=CONFIG.name_placeholder
                prop:value=move || name.get()
                on:input=move |ev| name.set(event_target_value(&ev))
            />
        </Field>
        <Field label=CONFIG.content_label>
            <textarea
                class="input"
                rows=rows
                placeholder=CONFIG.content_placeholder
                prop:value=move || content.get()
                on:input=move |ev| content.set(event_target_value(&ev))
            ></textarea>
        </Field>
        <p>{CONFIG.instructions}</p>
        <BookmarkletLink name=name generated=generated />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookmarklet::LiteralKind;

    #[test]
    fn signal_keeps_latest_of_out_of_order_runs() {
        let owner = Owner::new();
        owner.set();
        let generated = RwSignal::new(GeneratedScript::default());

        let e1 = begin_run(generated, "e1".into()).unwrap();
        let e2 = begin_run(generated, "e2".into()).unwrap();
        let e3 = begin_run(generated, "e3".into()).unwrap();
        assert_eq!(generated.get_untracked().href(), "javascript:");

        assert_eq!(finish_run(generated, e1, Ok("E1".into())), Some(Completion::Stale));
        assert_eq!(finish_run(generated, e3, Ok("E3".into())), Some(Completion::Applied));
        assert_eq!(finish_run(generated, e2, Ok("E2".into())), Some(Completion::Stale));

        assert_eq!(generated.get_untracked().href(), "javascript:E3");
    }

    #[test]
    fn failed_run_leaves_signal_inert() {
        let owner = Owner::new();
        owner.set();
        let generated = RwSignal::new(GeneratedScript::default());

        let ticket = begin_run(generated, "'".into()).unwrap();
        let err = MinifyError::Unterminated {
            kind: LiteralKind::String,
            offset: 0,
        };
        assert_eq!(finish_run(generated, ticket, Err(err)), Some(Completion::Failed));
        assert!(generated.get_untracked().is_pending());
        assert_eq!(generated.get_untracked().href(), "javascript:");
    }

    #[test]
    fn rows_follow_line_count() {
        assert_eq!(content_rows(""), 3);
        assert_eq!(content_rows("one\ntwo"), 3);
        assert_eq!(content_rows("1\n2\n3\n4\n5"), 5);
        // A trailing newline already needs the next row.
        assert_eq!(content_rows("1\n2\n3\n"), 4);
    }
}
