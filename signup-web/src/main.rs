mod api;
mod app;
mod components;
mod config;
mod containers;
mod error;
mod language;
mod locale;
mod models;

use app::InternationalApp;
use std::any::Any;
use std::panic::Location;
use yew::Renderer;

fn main() {
    #[cfg(target_arch = "wasm32")]
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));

    // Panics go to the console logger with their location
    std::panic::set_hook(Box::new(|info| {
        log::error!("{}", describe_panic(info.payload(), info.location()));
    }));

    log::info!("Starting sign-up application");

    // Mounts into <body>
    Renderer::<InternationalApp>::new().render();
}

fn describe_panic(payload: &(dyn Any + Send), location: Option<&Location<'_>>) -> String {
    let message = payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");
    match location {
        Some(location) => format!("panic at {location}: {message}"),
        None => format!("panic: {message}"),
    }
}
