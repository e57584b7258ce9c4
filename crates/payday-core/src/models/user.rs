use serde::{Deserialize, Serialize};

/// The signed-in user as returned by the auth endpoints and kept in the session store.
///
/// The backend is loose about which fields it sends, so everything but the
/// shape defaults when missing. The id may arrive as `id`, `_id` or both, and
/// the name as `name`, `fullName` or both; the first present wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawUser")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub is_vip: bool,
    pub is_admin: bool,
}

/// Wire shape with every accepted key as its own field.
#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawUser {
    id: Option<String>,
    #[serde(rename = "_id")]
    document_id: Option<String>,
    name: Option<String>,
    full_name: Option<String>,
    email: Option<String>,
    is_vip: Option<bool>,
    is_admin: Option<bool>,
}

impl From<RawUser> for User {
    fn from(raw: RawUser) -> Self {
        Self {
            id: raw.id.or(raw.document_id).unwrap_or_default(),
            name: raw.name.or(raw.full_name).unwrap_or_default(),
            email: raw.email.unwrap_or_default(),
            is_vip: raw.is_vip.unwrap_or_default(),
            is_admin: raw.is_admin.unwrap_or_default(),
        }
    }
}

impl User {
    /// VIP subscribers and admins both see VIP content.
    pub fn can_view_vip(&self) -> bool {
        self.is_vip || self.is_admin
    }

    /// The id to attach to payment requests, if the record carries one.
    pub fn user_id(&self) -> Option<&str> {
        let id = self.id.trim();
        (!id.is_empty()).then_some(id)
    }

    /// Name to greet the user with, falling back to the email local part.
    pub fn display_name(&self) -> &str {
        if !self.name.trim().is_empty() {
            return self.name.trim();
        }
        self.email.split('@').next().unwrap_or_default()
    }
}
