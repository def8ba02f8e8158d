use chrono::{DateTime, Utc};

/// Access code lifetime in seconds, counted from the latest issuance.
pub const ACCESS_CODE_TTL_SECS: u64 = 300;

/// Value stored under an access-code key. Only its presence carries meaning.
pub const ACCESS_CODE_MARKER: &str = "valid";

/// Status given to posts created or updated without one.
pub const DEFAULT_POST_STATUS: &str = "draft";

/// Login secrets stored for one user.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub username: String,
    pub password: String,
    pub device_id: Option<String>,
}

impl UserCredentials {
    /// Both values must equal the stored ones exactly. Stored passwords are plain text,
    /// so this is a direct string comparison.
    pub fn matches(&self, password: Option<&str>, device_id: Option<&str>) -> bool {
        let password_ok = password == Some(self.password.as_str());
        let device_ok = device_id.is_some() && device_id == self.device_id.as_deref();
        password_ok && device_ok
    }
}

/// A published or draft post.
#[derive(Debug, Clone)]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub status: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
}

/// Column values written by post create and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub status: String,
    pub slug: String,
}

/// Derive a URL slug from a post title.
///
/// Lowercases the title, turns each run of characters outside `[a-z0-9]` into a single
/// `-`, and drops leading and trailing dashes.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;
    for c in title.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }
    slug
}

/// A request field counts as present only when it is a non-empty string.
pub fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
