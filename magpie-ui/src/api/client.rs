//! HTTP API Client
//!
//! Functions for communicating with the Magpie REST API. The session rides
//! on an HttpOnly cookie, so every request goes out with credentials.

use gloo_net::http::{Request, Response};
use web_sys::RequestCredentials;

use crate::state::global::SessionUser;
use crate::state::theme::Theme;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:3024/api/v1";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("magpie_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

// ============ Response Types ============

#[derive(Debug, Clone, serde::Deserialize)]
pub struct SessionResponse {
    pub user: SessionUser,
    pub theme: Theme,
}

#[derive(Debug, serde::Deserialize)]
pub struct ThemeResponse {
    pub theme: Theme,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct EmailName {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct MessagePreview {
    pub id: String,
    #[serde(default)]
    pub from: Vec<EmailName>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub snippet: Option<String>,
    pub has_attachments: bool,
    /// Unix seconds
    #[serde(default)]
    pub created_at: Option<i64>,
}

impl MessagePreview {
    /// Sender line: name when the provider gives one, address otherwise
    pub fn sender(&self) -> String {
        self.from
            .first()
            .map(|f| f.name.clone().unwrap_or_else(|| f.email.clone()))
            .unwrap_or_else(|| "Unknown sender".to_string())
    }
}

#[derive(Debug, serde::Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorBody,
    #[serde(default)]
    #[allow(dead_code)]
    request_id: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    #[allow(dead_code)]
    code: String,
    message: String,
}

/// Pull the server's error message out of a failed response
async fn error_message(response: Response, fallback: &str) -> String {
    match response.json::<ApiErrorResponse>().await {
        Ok(body) => body.error.message,
        Err(_) => fallback.to_string(),
    }
}

// ============ API Functions ============

/// Fetch the current session; `None` means signed out, not an error
pub async fn fetch_session() -> Result<Option<SessionResponse>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/session", api_base))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.status() == 401 {
        return Ok(None);
    }

    if !response.ok() {
        return Err(error_message(response, "Session check failed").await);
    }

    let session: SessionResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(Some(session))
}

/// Log in with username (or email) and password
pub async fn login(username: &str, password: &str) -> Result<SessionResponse, String> {
    #[derive(serde::Serialize)]
    struct LoginRequest {
        username: String,
        password: String,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/session", api_base))
        .credentials(RequestCredentials::Include)
        .json(&LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response, "Login failed").await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Log out, invalidating the session cookie
pub async fn logout() -> Result<(), String> {
    let api_base = get_api_base();

    let response = Request::delete(&format!("{}/session", api_base))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response, "Logout failed").await);
    }

    Ok(())
}

/// Persist a theme choice; returns the server-confirmed value
pub async fn save_theme(theme: Theme) -> Result<Theme, String> {
    #[derive(serde::Serialize)]
    struct SetThemeRequest {
        theme: String,
    }

    let api_base = get_api_base();

    let response = Request::put(&format!("{}/prefs/theme", api_base))
        .credentials(RequestCredentials::Include)
        .json(&SetThemeRequest {
            theme: theme.as_str().to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response, "Could not save theme").await);
    }

    let confirmed: ThemeResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(confirmed.theme)
}

/// Fetch the latest unread message previews
pub async fn fetch_messages() -> Result<Vec<MessagePreview>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/messages", api_base))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(error_message(response, "Could not load messages").await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}
