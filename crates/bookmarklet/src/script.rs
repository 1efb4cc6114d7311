//! The copy-to-clipboard script template.

use serde::{Deserialize, Serialize};

use crate::escape::{Delimiter, quote_literal};
use crate::options::TemplateOptions;

/// Id given to the notification so a second run can find and replace it.
pub const NOTICE_ELEMENT_ID: &str = "copy-bookmarklet-notice";

/// User-editable inputs of one bookmarklet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    /// Shown in the notification and in the link label.
    pub name: String,
    /// Text placed on the clipboard.
    pub content: String,
}

impl Draft {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// Build the unminified bookmarklet body for `draft`.
///
/// The result is a self-invoking function taking `(text, name)`; both are
/// passed as template literals so multi-line content survives. Pure: equal
/// inputs give byte-equal output.
pub fn build_script(draft: &Draft, options: &TemplateOptions) -> String {
    let notice_id = quote_literal(NOTICE_ELEMENT_ID, Delimiter::SingleQuote);

    let mut notice_style = String::new();
    for (property, value) in options.notice.properties() {
        notice_style.push_str(&format!(
            "  notice.style.{property} = {};\n",
            quote_literal(value, Delimiter::SingleQuote)
        ));
    }

    format!(
        r#"(function (text, name) {{
  var textarea = document.createElement('textarea');
  var selection = document.getSelection();
  var previous = document.getElementById({notice_id});
  var notice = document.createElement('div');

  textarea.textContent = text;
  textarea.style.position = 'fixed';
  textarea.style.top = '-9999px';
  document.body.appendChild(textarea);

  selection.removeAllRanges();
  textarea.select();
  document.execCommand('copy');

  selection.removeAllRanges();
  document.body.removeChild(textarea);

  if (previous) {{
    clearTimeout(previous.dismissTimer);
    previous.parentNode.removeChild(previous);
  }}

  notice.id = {notice_id};
  notice.style.position = 'fixed';
  notice.style.pointerEvents = 'none';
{notice_style}  notice.textContent = 'Copied ' + name + ' to clipboard';
  document.body.appendChild(notice);
  notice.dismissTimer = setTimeout(function () {{
    if (notice.parentNode) {{
      notice.parentNode.removeChild(notice);
    }}
  }}, {delay});
}})({content}, {name});
"#,
        delay = options.dismiss_after_ms,
        content = quote_literal(&draft.content, Delimiter::Backtick),
        name = quote_literal(&draft.name, Delimiter::Backtick),
    )
}
