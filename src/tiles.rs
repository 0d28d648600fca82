// Google Map Tiles: session creation for the flat satellite overlay.

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::AppConfig;
use crate::error::TilesError;

const SESSION_URL: &str = "https://tile.googleapis.com/v1/createSession";
const TILE_URL: &str = "https://tile.googleapis.com/v1/2dtiles";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRequest {
    pub map_type: String,
    pub language: String,
    pub region: String,
}

impl Default for SessionRequest {
    fn default() -> Self {
        Self {
            map_type: "satellite".to_string(),
            language: "en-US".to_string(),
            region: "US".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub session: String,
    #[serde(default)]
    pub expiry: Option<String>,
    #[serde(default)]
    pub tile_width: Option<u32>,
    #[serde(default)]
    pub tile_height: Option<u32>,
    #[serde(default)]
    pub image_format: Option<String>,
}

impl Session {
    pub fn url_template(&self, api_key: &str) -> String {
        format!(
            "{}/{{z}}/{{x}}/{{y}}?session={}&key={}",
            TILE_URL, self.session, api_key
        )
    }
}

pub async fn imagery_template(config: &AppConfig) -> Result<String, TilesError> {
    let key = config.api_key()?;
    let resp = Request::post(&format!("{}?key={}", SESSION_URL, key))
        .json(&SessionRequest::default())?
        .send()
        .await?;
    if !resp.ok() {
        return Err(TilesError::Status(resp.status()));
    }
    let session: Session = resp.json().await?;
    info!(
        expiry = session.expiry.as_deref().unwrap_or("?"),
        tile_width = ?session.tile_width,
        tile_height = ?session.tile_height,
        image_format = session.image_format.as_deref().unwrap_or("?"),
        "2D tiles session created"
    );
    Ok(session.url_template(key))
}

#[cfg(test)]
mod tests {
    use super::{Session, SessionRequest};

    #[test]
    fn request_body_matches_api_field_names() {
        let body = serde_json::to_string(&SessionRequest::default()).unwrap();
        assert_eq!(
            body,
            r#"{"mapType":"satellite","language":"en-US","region":"US"}"#
        );
    }

    #[test]
    fn parses_session_response() {
        let raw = r#"{
            "session": "IgAB",
            "expiry": "1361828036",
            "tileWidth": 256,
            "tileHeight": 256,
            "imageFormat": "jpeg"
        }"#;
        let s: Session = serde_json::from_str(raw).unwrap();
        assert_eq!(s.session, "IgAB");
        assert_eq!(s.tile_width, Some(256));
        assert_eq!(s.image_format.as_deref(), Some("jpeg"));
    }

    #[test]
    fn template_keeps_placeholders() {
        let s: Session = serde_json::from_str(r#"{"session":"tok"}"#).unwrap();
        assert_eq!(
            s.url_template("k"),
            "https://tile.googleapis.com/v1/2dtiles/{z}/{x}/{y}?session=tok&key=k"
        );
    }
}
