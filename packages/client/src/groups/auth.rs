//! Authentication: the only operations that write the session.

use paintshop::catalog::{AUTH_ADMIN_LOGIN, AUTH_LOGIN, AUTH_LOGOUT, AUTH_REGISTER, AUTH_USER};
use paintshop::ApiError;
use paintshop_api::{AuthResponse, LoginRequest, RegisterRequest};
use serde_json::Value;
use tracing::{info, warn};

use crate::client::{ApiClient, Payload};

pub struct Auth<'a> {
    client: &'a ApiClient,
}

impl<'a> Auth<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `POST /login`. Stores token and user when the body says `success`.
    #[tracing::instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<Value, ApiError> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = self
            .client
            .call(&AUTH_LOGIN, &[], Payload::json(&body)?)
            .await?;
        self.remember(&response, false)?;
        Ok(response)
    }

    /// `POST /admin/login`. Like [`login`](Self::login), and also sets the
    /// admin marker.
    #[tracing::instrument(skip(self, password))]
    pub async fn admin_login(&self, email: &str, password: &str) -> Result<Value, ApiError> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = self
            .client
            .call(&AUTH_ADMIN_LOGIN, &[], Payload::json(&body)?)
            .await?;
        self.remember(&response, true)?;
        Ok(response)
    }

    /// `POST /register`. Stores token and user when the body says `success`.
    #[tracing::instrument(skip(self, password, password_confirmation))]
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        password_confirmation: &str,
    ) -> Result<Value, ApiError> {
        let body = RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            password_confirmation: password_confirmation.to_string(),
        };
        let response = self
            .client
            .call(&AUTH_REGISTER, &[], Payload::json(&body)?)
            .await?;
        self.remember(&response, false)?;
        Ok(response)
    }

    /// `POST /logout`, then clear the session whatever the outcome.
    ///
    /// The POST's error, if any, is still returned.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let result = self.client.call(&AUTH_LOGOUT, &[], Payload::None).await;
        if let Err(e) = self.client.session().clear_admin() {
            warn!("failed to clear session on logout: {e}");
        }
        info!("logged out");
        result.map(|_| ())
    }

    /// `GET /user`: the signed-in user as the backend sees it.
    pub async fn user(&self) -> Result<Value, ApiError> {
        self.client.call(&AUTH_USER, &[], Payload::None).await
    }

    fn remember(&self, response: &Value, admin: bool) -> Result<(), ApiError> {
        let auth = AuthResponse::from_body(response);
        let Some((token, user)) = auth.credentials() else {
            info!(
                message = auth.message.as_deref().unwrap_or(""),
                "login not successful; session unchanged"
            );
            return Ok(());
        };
        let session = self.client.session();
        session.establish(token, user)?;
        if admin {
            session.mark_admin()?;
        }
        info!(admin, "session established");
        Ok(())
    }
}
