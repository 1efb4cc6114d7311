//! Template options shared with the page.
//!
//! The server loads them once at startup; the page fetches them through a
//! server function so every visitor builds scripts with the same settings.

use bookmarklet::TemplateOptions;
use leptos::prelude::*;

#[cfg(feature = "ssr")]
mod ssr {
    use anyhow::{Result, anyhow};
    use bookmarklet::TemplateOptions;
    use std::path::Path;
    use std::sync::OnceLock;

    static OPTIONS: OnceLock<TemplateOptions> = OnceLock::new();

    /// Load options from `path`, or use defaults when no path is given.
    /// Must be called once at startup before serving pages.
    pub fn init_options(path: Option<&Path>) -> Result<&'static TemplateOptions> {
        let options = match path {
            Some(path) => {
                let options = TemplateOptions::load(path)?;
                tracing::info!(path = %path.display(), "Loaded template options");
                options
            }
            None => {
                tracing::info!("No config file given, using default template options");
                TemplateOptions::default()
            }
        };

        OPTIONS
            .set(options)
            .map_err(|_| anyhow!("Template options already initialized"))?;
        Ok(current_options())
    }

    /// Installed options, or the defaults if `init_options` never ran.
    pub fn current_options() -> &'static TemplateOptions {
        static DEFAULTS: OnceLock<TemplateOptions> = OnceLock::new();
        OPTIONS
            .get()
            .unwrap_or_else(|| DEFAULTS.get_or_init(TemplateOptions::default))
    }
}

#[cfg(feature = "ssr")]
pub use ssr::*;

/// Server function handing the installed template options to the page.
#[server(FetchTemplateOptions)]
pub async fn fetch_template_options() -> Result<TemplateOptions, ServerFnError> {
    Ok(current_options().clone())
}
