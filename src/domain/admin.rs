//! Admin domain entity.

/// Operator credential granting access to all protected routes.
///
/// Admins are seeded out of band; the password is stored and compared
/// as-is.
#[derive(Clone, PartialEq, Eq)]
pub struct Admin {
    pub id: i32,
    pub email: String,
    pub password: String,
}

// Don't expose the password in debug output
impl std::fmt::Debug for Admin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Admin")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl Admin {
    /// Check a credential pair. Email comparison is case-sensitive.
    pub fn matches(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password == password
    }
}
