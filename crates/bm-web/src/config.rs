//! Static page copy. Script behaviour lives in `bookmarklet::TemplateOptions`
//! and is loaded at runtime instead.

pub struct SiteConfig {
    pub title: &'static str,
    pub heading: &'static str,
    pub description: &'static str,
    pub name_label: &'static str,
    pub name_placeholder: &'static str,
    pub content_label: &'static str,
    pub content_placeholder: &'static str,
    pub instructions: &'static str,
    /// Minimum height of the content textarea, in rows.
    pub content_min_rows: usize,
}

pub const CONFIG: SiteConfig = SiteConfig {
    title: "Copy bookmarklet",
    heading: "Create \"copy\" bookmarklet",
    description: "Build a bookmarklet that copies a snippet of text to the clipboard from any page.",
    name_label: "Name",
    name_placeholder: "Type name...",
    content_label: "Content:",
    content_placeholder: "Type content here...",
    instructions: "Drag and drop the following link to the bookmark bar. This will create a bookmarklet that copies the provided content to the clipboard.",
    content_min_rows: 3,
};
