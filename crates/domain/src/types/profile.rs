//! User profile types

use serde::{Deserialize, Serialize};

/// Profile of the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub username: String,
    /// First and last name joined by a space; missing parts are dropped.
    pub name: String,
    /// `@username`
    pub login_name: String,
    pub bio: Option<String>,
}

impl Profile {
    pub fn new(
        username: impl Into<String>,
        first_name: Option<&str>,
        last_name: Option<&str>,
        bio: Option<String>,
    ) -> Self {
        let username = username.into();
        let name = [first_name, last_name].into_iter().flatten().collect::<Vec<_>>().join(" ");
        let login_name = format!("@{username}");

        Self { username, name, login_name, bio }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_present_name_parts() {
        let profile = Profile::new("alice", Some("Alice"), Some("Liddell"), None);
        assert_eq!(profile.name, "Alice Liddell");
        assert_eq!(profile.login_name, "@alice");
    }

    #[test]
    fn drops_missing_name_parts() {
        assert_eq!(Profile::new("bob", None, Some("Builder"), None).name, "Builder");
        assert_eq!(Profile::new("bob", Some("Bob"), None, None).name, "Bob");
        assert_eq!(Profile::new("bob", None, None, None).name, "");
    }
}
