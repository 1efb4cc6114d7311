//! Copy-to-clipboard bookmarklet builder.
//!
//! Turns a [`Draft`] (a name plus the text to copy) into a self-invoking
//! script, minifies it and wraps the result in a `javascript:` href that can
//! be dragged to a bookmarks bar.

pub mod escape;
pub mod generated;
pub mod minify;
pub mod options;
pub mod script;

pub use escape::{Delimiter, escape_literal, quote_literal};
pub use generated::{Completion, GeneratedScript, JAVASCRIPT_SCHEME, Ticket, to_href};
pub use minify::{LiteralKind, MinifyError, minify};
pub use options::{NoticeStyle, TemplateOptions};
pub use script::{Draft, NOTICE_ELEMENT_ID, build_script};
