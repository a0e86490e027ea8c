#![cfg(not(target_arch = "wasm32"))]

use shape_scene_wasm::domain::logging::{LogComponent, LogEntry, LogLevel, get_logger};

#[test]
fn initialize_keeps_native_fallbacks() {
    shape_scene_wasm::initialize();

    get_logger().info(LogComponent::Application("Initialize"), "native start");
    get_logger().error(LogComponent::Domain("Initialize"), "still quiet");

    let line = LogEntry::new(LogLevel::Warn, LogComponent::Infrastructure("Clock"), "tick")
        .format_line();
    assert!(line.starts_with("[#"), "{}", line);
    assert!(line.ends_with("| tick"), "{}", line);
}
