use serde::{Deserialize, Serialize};

/// Auth session as persisted by the auth provider after login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<SessionUser>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_metadata: Option<UserMetadata>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl Session {
    pub fn new(access_token: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: None,
            token_type: Some("bearer".to_string()),
            expires_at: None,
            user: Some(SessionUser {
                id: user_id.into(),
                email: None,
                role: None,
                user_metadata: None,
            }),
        }
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        if let Some(user) = self.user.as_mut() {
            user.user_metadata = Some(UserMetadata {
                role: Some(role.into()),
            });
        }
        self
    }

    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn access_token(&self) -> Option<&str> {
        Some(self.access_token.as_str()).filter(|token| !token.is_empty())
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user
            .as_ref()
            .map(|user| user.id.as_str())
            .filter(|id| !id.is_empty())
    }

    /// Application role from user metadata, falling back to the provider role.
    pub fn role(&self) -> Option<&str> {
        let user = self.user.as_ref()?;
        user.user_metadata
            .as_ref()
            .and_then(|metadata| metadata.role.as_deref())
            .or(user.role.as_deref())
            .filter(|role| !role.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_provider_session_and_ignores_unknown_fields() {
        let raw = r#"{
            "access_token": "abc",
            "refresh_token": "r1",
            "expires_in": 3600,
            "expires_at": 1760000000,
            "token_type": "bearer",
            "user": {
                "id": "user-1",
                "aud": "authenticated",
                "role": "authenticated",
                "email": "rep@example.com",
                "user_metadata": { "role": "admin", "full_name": "Rep" }
            }
        }"#;

        let session = Session::parse(raw).unwrap();
        assert_eq!(session.access_token(), Some("abc"));
        assert_eq!(session.user_id(), Some("user-1"));
        assert_eq!(session.role(), Some("admin"));
    }

    #[test]
    fn role_falls_back_to_provider_role() {
        let session =
            Session::parse(r#"{"access_token":"t","user":{"id":"u","role":"member"}}"#).unwrap();
        assert_eq!(session.role(), Some("member"));
    }

    #[test]
    fn missing_token_and_user_are_tolerated() {
        let session = Session::parse("{}").unwrap();
        assert_eq!(session.access_token(), None);
        assert_eq!(session.user_id(), None);
        assert_eq!(session.role(), None);
    }

    #[test]
    fn non_object_is_rejected() {
        assert!(Session::parse("null").is_err());
        assert!(Session::parse("not json").is_err());
        assert!(Session::parse(r#"{"access_token": 42}"#).is_err());
    }
}
