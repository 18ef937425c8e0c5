use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Role requested at signup, stored as user metadata by the identity store
#[derive(Debug, Default, Clone, Copy, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Student,
    Teacher,
}

/// Reference to the account created in the external identity store
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccountRef {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub role: Role,
}
