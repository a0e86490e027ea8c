use derive_more::Display;

/// Errors raised outside of geometry generation, which never fails.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum AppError {
    /// A form field or API argument could not be turned into a scene parameter
    #[display(fmt = "Validation Error: {}", _0)]
    Validation(String),
    /// The embedded scene configuration could not be parsed
    #[display(fmt = "Configuration Error: {}", _0)]
    Configuration(String),
    #[display(fmt = "Rendering Error: {}", _0)]
    Rendering(String),
    /// A DOM or browser API was unavailable
    #[display(fmt = "Browser Error: {}", _0)]
    Browser(String),
}

impl std::error::Error for AppError {}

impl AppError {
    pub fn invalid_field(field: &str, raw: &str) -> Self {
        AppError::Validation(format!("field '{}' is not a number: {:?}", field, raw))
    }

    pub fn missing_field(field: &str) -> Self {
        AppError::Validation(format!("field '{}' is missing", field))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Configuration(err.to_string())
    }
}

impl From<AppError> for wasm_bindgen::JsValue {
    fn from(err: AppError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
