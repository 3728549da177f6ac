use async_trait::async_trait;

/// Username/password pair presented when requesting a bearer token.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Decides whether a credential pair may receive a token.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    async fn verify(&self, credentials: &Credentials) -> bool;
}

/// Accepts any pair where both username and password are non-empty.
///
/// Placeholder until a real identity source is wired in.
#[derive(Debug, Clone, Copy, Default)]
pub struct NonEmptyCredentials;

#[async_trait]
impl CredentialVerifier for NonEmptyCredentials {
    async fn verify(&self, credentials: &Credentials) -> bool {
        !credentials.username.is_empty() && !credentials.password.is_empty()
    }
}
