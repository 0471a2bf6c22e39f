use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct ContactMessage {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub body: String,
    pub created_at: String,
}

/// Contact form submission. Also serialized back into the template when
/// validation fails, so the form re-renders with the entered values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewContactMessage {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub body: String,
}
