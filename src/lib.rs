use wasm_bindgen::prelude::*;

use crate::domain::logging::{LogComponent, get_logger};

pub mod application;
pub mod domain;
pub mod ecs;
pub mod infrastructure;

#[cfg(target_arch = "wasm32")]
pub mod app;
#[cfg(target_arch = "wasm32")]
pub mod presentation;

/// Install the panic hook, the logger and the browser clock.
///
/// Outside the browser the console and `Date` bindings are unavailable, so the
/// no-op logger and sequence clock stay in place.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    #[cfg(target_arch = "wasm32")]
    {
        let console = infrastructure::services::ConsoleLogger::new_development();
        domain::logging::init_logger(Box::new(app::LeptosLogger::new(console)));
        domain::logging::init_time_provider(Box::new(
            infrastructure::services::BrowserTimeProvider::new(),
        ));
    }

    get_logger().info(LogComponent::Presentation("Initialize"), "🚀 Shape scene initialized");
}

/// Mount the interactive page (canvas, parameter form, log panel) into `<body>`.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn mount_app() {
    leptos::mount_to_body(app::App);
}
