use async_trait::async_trait;

use crate::api::{ApiClient, ApiError};
use crate::models::{InvitationRequest, SignupPayload, VerifyInvitationRequest};

/// The three auth endpoints the sign-up flow talks to
#[async_trait(?Send)]
pub trait AuthApi {
    /// Ask for an invitation code to be sent to `email`
    async fn request_invitation(&self, email: &str) -> Result<(), ApiError>;

    /// Check an invitation code
    async fn verify_invitation(&self, code: &str) -> Result<(), ApiError>;

    /// Create the account
    async fn signup(&self, payload: &SignupPayload) -> Result<(), ApiError>;
}

#[async_trait(?Send)]
impl AuthApi for ApiClient {
    async fn request_invitation(&self, email: &str) -> Result<(), ApiError> {
        let request = InvitationRequest {
            email: email.to_string(),
        };

        self.post_json("/api/auth/request-invitation", &request).await
    }

    async fn verify_invitation(&self, code: &str) -> Result<(), ApiError> {
        let request = VerifyInvitationRequest {
            code: code.to_string(),
        };

        self.post_json("/api/auth/verify-invitation", &request).await
    }

    async fn signup(&self, payload: &SignupPayload) -> Result<(), ApiError> {
        self.post_json("/api/auth/signup", payload).await
    }
}
