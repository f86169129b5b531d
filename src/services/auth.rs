use serde::Serialize;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::types::{
    Ack, AuthResponse, CoinBalance, LoginRequest, RefreshedToken, RegisterRequest, TokenValidity,
    UpdateProfileRequest, User,
};

/// Authentication and profile operations.
///
/// Login, register and refresh store the returned bearer token in the shared
/// session as a side effect, authenticating every subsequent call from any
/// service built over the same client.
#[derive(Debug, Clone)]
pub struct AuthService {
    client: ApiClient,
}

#[derive(Serialize)]
struct ForgotPasswordBody<'a> {
    email: &'a str,
}

#[derive(Serialize)]
struct ResetPasswordBody<'a> {
    token: &'a str,
    password: &'a str,
}

impl AuthService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn login(
        &self,
        credentials: &LoginRequest,
    ) -> Result<ApiResponse<AuthResponse>, ApiError> {
        let response: ApiResponse<AuthResponse> =
            self.client.post("/auth/login", credentials).await?;
        self.client.set_token(Some(response.data.token.clone()));
        Ok(response)
    }

    pub async fn register(
        &self,
        details: &RegisterRequest,
    ) -> Result<ApiResponse<AuthResponse>, ApiError> {
        let response: ApiResponse<AuthResponse> =
            self.client.post("/auth/register", details).await?;
        self.client.set_token(Some(response.data.token.clone()));
        Ok(response)
    }

    /// Log out and clear the local session token.
    ///
    /// The token is cleared whether or not the server call succeeded; a stale
    /// session must never survive a failed logout.
    pub async fn logout(&self) -> Result<ApiResponse<Ack>, ApiError> {
        let result = self.client.post_empty("/auth/logout").await;
        self.client.set_token(None);
        result
    }

    pub async fn profile(&self) -> Result<ApiResponse<User>, ApiError> {
        self.client.get("/auth/profile").await
    }

    pub async fn update_profile(
        &self,
        update: &UpdateProfileRequest,
    ) -> Result<ApiResponse<User>, ApiError> {
        self.client.put("/auth/profile", update).await
    }

    pub async fn forgot_password(&self, email: &str) -> Result<ApiResponse<Ack>, ApiError> {
        self.client
            .post("/auth/forgot-password", &ForgotPasswordBody { email })
            .await
    }

    pub async fn reset_password(
        &self,
        token: &str,
        new_password: &str,
    ) -> Result<ApiResponse<Ack>, ApiError> {
        self.client
            .post(
                "/auth/reset-password",
                &ResetPasswordBody {
                    token,
                    password: new_password,
                },
            )
            .await
    }

    /// Check whether the current token is still accepted by the server.
    pub async fn verify_token(&self) -> Result<ApiResponse<TokenValidity>, ApiError> {
        self.client.get("/auth/verify-token").await
    }

    pub async fn refresh_token(&self) -> Result<ApiResponse<RefreshedToken>, ApiError> {
        let response: ApiResponse<RefreshedToken> =
            self.client.post_empty("/auth/refresh").await?;
        self.client.set_token(Some(response.data.token.clone()));
        Ok(response)
    }

    pub async fn coins(&self) -> Result<ApiResponse<CoinBalance>, ApiError> {
        self.client.get("/auth/coins").await
    }

    /// Install a token obtained elsewhere (e.g. rehydrated from storage).
    pub fn set_token(&self, token: Option<String>) {
        self.client.set_token(token);
    }
}
