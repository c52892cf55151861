use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Student,
    Instructor,
    Admin,
}

/// Row from the `profiles` collection. Owned by the auth provider; this
/// service only reads it.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Profile {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
}

impl Profile {
    pub fn new(id: &str, email: &str, role: Role) -> Self {
        Profile {
            id: id.to_string(),
            email: email.to_string(),
            role,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
