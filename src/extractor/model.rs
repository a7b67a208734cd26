use serde::{Deserialize, Serialize};

/// Metadata pulled out of a page's markup.
///
/// Every field is optional: a fallback chain that matches nothing yields an
/// absent field, never an error. `image`, when present, is an absolute URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}
