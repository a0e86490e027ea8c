pub mod dom;
pub mod rendering;
pub mod services;
