//! User entity - a registered account

/// User account.
///
/// The password is stored in clear text and the token is a static bearer
/// credential assigned at creation and never rotated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    /// Unique across all users.
    pub name: String,
    pub password: String,
    /// Opaque session credential, never rotated.
    pub token: String,
    pub email: String,
}

impl User {
    pub fn new(
        id: i32,
        name: impl Into<String>,
        password: impl Into<String>,
        token: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            password: password.into(),
            token: token.into(),
            email: email.into(),
        }
    }
}
