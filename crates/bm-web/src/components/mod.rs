mod bookmarklet_form;
mod bookmarklet_link;
mod copy_button;
mod field;

pub use bookmarklet_form::{BookmarkletForm, content_rows};
pub use bookmarklet_link::BookmarkletLink;
pub use copy_button::CopyButton;
pub use field::Field;
