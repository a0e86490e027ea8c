pub mod scene_service;

pub use scene_service::*;
