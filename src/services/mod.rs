//! Domain services: thin typed wrappers over [`ApiClient`], one per backend
//! resource. Each operation issues exactly one round trip; the transport's
//! normalized envelope and error flow through unchanged.

mod auth;
mod feedback;
mod group;
mod product;
mod reaction;

pub use auth::AuthService;
pub use feedback::FeedbackService;
pub use group::GroupService;
pub use product::ProductService;
pub use reaction::ReactionService;

use crate::client::ApiClient;
use crate::config::ApiConfig;
use crate::error::ApiError;

/// All domain services over one shared client.
///
/// The services share a single session: a login through `auth` authenticates
/// every subsequent call from any of them.
#[derive(Debug, Clone)]
pub struct Feedbackz {
    pub auth: AuthService,
    pub feedbacks: FeedbackService,
    pub groups: GroupService,
    pub products: ProductService,
    pub reactions: ReactionService,
}

impl Feedbackz {
    pub fn new(client: ApiClient) -> Self {
        Self {
            auth: AuthService::new(client.clone()),
            feedbacks: FeedbackService::new(client.clone()),
            groups: GroupService::new(client.clone()),
            products: ProductService::new(client.clone()),
            reactions: ReactionService::new(client),
        }
    }

    pub fn with_config(config: ApiConfig) -> Result<Self, ApiError> {
        Ok(Self::new(ApiClient::new(config)?))
    }

    pub fn from_env() -> Result<Self, ApiError> {
        Ok(Self::new(ApiClient::from_env()?))
    }
}
