//! Site branding served by the backend.

use serde::{Deserialize, Serialize};

/// Display-only information about the venue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    pub name: String,
    pub description: String,
    /// Path to the logo image on the server, if one is configured.
    pub logo: Option<String>,
}
