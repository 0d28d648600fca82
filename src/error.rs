use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ViewerError {
    #[error("viewer is not ready")]
    NotReady,
    #[error("elevation must be a positive finite number of meters, got {0}")]
    InvalidElevation(f64),
    #[error("viewer rejected {operation}: {message}")]
    Js {
        operation: &'static str,
        message: String,
    },
}

impl ViewerError {
    pub fn js(operation: &'static str, err: &wasm_bindgen::JsValue) -> Self {
        let message = err
            .as_string()
            .unwrap_or_else(|| format!("{:?}", err));
        ViewerError::Js { operation, message }
    }
}

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("location {name:?} has invalid coordinates ({lon}, {lat})")]
    InvalidCoordinates { name: String, lon: f64, lat: f64 },
    #[error("location name {0:?} appears more than once")]
    DuplicateLocation(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no Google Maps API key configured")]
    MissingApiKey,
}

#[derive(Debug, Error)]
pub enum TilesError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("tiles request failed: {0}")]
    Http(#[from] gloo_net::Error),
    #[error("tiles request returned status {0}")]
    Status(u16),
}
