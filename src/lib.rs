//! Typed async client for the Feedbackz REST API.
//!
//! All domain services share one [`ApiClient`]: it owns the base URL and the
//! in-memory bearer token, serializes request bodies to JSON, and normalizes
//! every outcome into either an [`ApiResponse`] envelope or an [`ApiError`].
//! Failures that happen before a response exists report status `0`, so
//! "could not reach the server" and "the server said no" are told apart by
//! status alone.
//!
//! The token lives only in process memory. Persisting it across launches and
//! rehydrating it via [`AuthService::set_token`] is the caller's job.
//!
//! # Examples
//!
//! ## Login and list feedbacks
//!
//! ```no_run
//! use feedbackz_client::{ApiClient, ApiConfig, Feedbackz};
//! use feedbackz_client::types::{FeedbackFilters, LoginRequest, PageQuery};
//!
//! # async fn example() -> Result<(), feedbackz_client::ApiError> {
//! let client = ApiClient::new(ApiConfig::from_env())?;
//! let api = Feedbackz::new(client);
//!
//! let session = api
//!     .auth
//!     .login(&LoginRequest {
//!         email: "dev@example.com".to_string(),
//!         password: "hunter2".to_string(),
//!     })
//!     .await?;
//! println!("logged in as {}", session.data.user.name);
//!
//! let filters = FeedbackFilters {
//!     paging: PageQuery {
//!         page: Some(1),
//!         limit: Some(20),
//!         ..PageQuery::default()
//!     },
//!     ..FeedbackFilters::default()
//! };
//! let page = api.feedbacks.list(Some(&filters)).await?;
//! for feedback in &page.data.data {
//!     println!("{}", feedback.content);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Toggle a reaction
//!
//! ```no_run
//! use feedbackz_client::Feedbackz;
//! use feedbackz_client::types::{ReactionType, ToggleAction};
//!
//! # async fn example(api: &Feedbackz) -> Result<(), feedbackz_client::ApiError> {
//! let outcome = api
//!     .reactions
//!     .toggle("feedback-1", ReactionType::ThumbsUp)
//!     .await?;
//! match outcome.data.action {
//!     ToggleAction::Created | ToggleAction::Updated => println!("reacted"),
//!     ToggleAction::Removed => println!("reaction withdrawn"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Upload an attachment
//!
//! ```no_run
//! use feedbackz_client::Feedbackz;
//! use reqwest::multipart::{Form, Part};
//!
//! # async fn example(api: &Feedbackz) -> Result<(), Box<dyn std::error::Error>> {
//! let form = Form::new().part(
//!     "file",
//!     Part::bytes(vec![0xffu8, 0xd8])
//!         .file_name("photo.jpg")
//!         .mime_str("image/jpeg")?,
//! );
//! let uploaded = api.feedbacks.upload_file(form).await?;
//! println!("stored at {}", uploaded.data.file_url);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod query;
pub mod response;
pub mod services;
pub mod types;

// Re-export the public API surface.
pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::ApiError;
pub use query::{QueryString, ToQuery};
pub use response::{ApiResponse, PageInfo, Paginated};
pub use services::{
    AuthService, FeedbackService, Feedbackz, GroupService, ProductService, ReactionService,
};
pub use types::{
    Feedback, Group, Product, Reaction, ReactionType, Role, ToggleAction, User,
};
