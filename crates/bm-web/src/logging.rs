//! Tracing setup. The server logs to stdout filtered by `RUST_LOG`
//! (default `info`); the browser build logs to the devtools console.

#[cfg(feature = "ssr")]
pub fn init_server() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry().with(filter).with(fmt::layer()).init();
}

#[cfg(feature = "hydrate")]
pub fn init_browser() {
    use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*};
    use tracing_web::MakeWebConsoleWriter;

    let fmt_layer = fmt::layer()
        .with_ansi(false) // Only partially supported across browsers
        .without_time() // std::time is unavailable in wasm32-unknown-unknown
        .with_writer(MakeWebConsoleWriter::new())
        .with_filter(LevelFilter::INFO);

    // A second hydrate call keeps the first subscriber.
    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}
