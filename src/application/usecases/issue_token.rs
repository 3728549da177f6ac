// Use case: issue_token.

use tracing::{info, warn};

use crate::application::context::AppContext;
use crate::domain::services::credentials::Credentials;
use crate::infrastructure::auth::jwt::IssuedToken;

/// Exchanges a username/password pair for a signed bearer token.
pub struct IssueTokenUseCase;

#[derive(Debug)]
pub enum IssueTokenError {
    InvalidCredentials,
    Signing(String),
}

impl IssueTokenUseCase {
    pub async fn execute(
        ctx: &AppContext,
        credentials: Credentials,
    ) -> Result<IssuedToken, IssueTokenError> {
        // Step 1: Check the credentials with the configured verifier.
        if !ctx.credentials.verify(&credentials).await {
            warn!(username = %credentials.username, "token_request_rejected");
            return Err(IssueTokenError::InvalidCredentials);
        }

        // Step 2: Sign a token for the caller.
        let issued = ctx
            .tokens
            .issue(&credentials.username)
            .map_err(|e| IssueTokenError::Signing(e.to_string()))?;

        info!(username = %credentials.username, token_id = %issued.token_id, "token_issued");
        Ok(issued)
    }
}
