use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::urls::BaseOrigin;

#[derive(Debug, Deserialize, ToSchema)]
pub struct PreviewRequest {
    pub url: String,
}

impl PreviewRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.url.is_empty() {
            return Err("URL cannot be empty".to_string());
        }
        if self.url.len() > 2048 {
            return Err("URL too long".to_string());
        }
        Ok(())
    }
}

/// The assembled preview record for a linked page.
///
/// Built once per request and never mutated afterwards. `image` is always an
/// absolute URL when present; `domain` always comes from the original input
/// URL, regardless of redirects.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LinkPreview {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub domain: Option<String>,
    #[schema(value_type = String)]
    pub base: BaseOrigin,
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
