use std::collections::HashMap;

use serde::Serialize;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::types::{Ack, Reaction, ReactionStats, ReactionToggle, ReactionType};

/// Reactions on feedbacks. The backend keeps at most one reaction per
/// (feedback, user) pair; [`toggle`](ReactionService::toggle) leans on that
/// invariant.
#[derive(Debug, Clone)]
pub struct ReactionService {
    client: ApiClient,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReactionBody<'a> {
    feedback_id: &'a str,
    #[serde(rename = "type")]
    kind: ReactionType,
}

#[derive(Serialize)]
struct KindBody {
    #[serde(rename = "type")]
    kind: ReactionType,
}

impl ReactionService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn create(
        &self,
        feedback_id: &str,
        kind: ReactionType,
    ) -> Result<ApiResponse<Reaction>, ApiError> {
        self.client
            .post("/reactions", &ReactionBody { feedback_id, kind })
            .await
    }

    /// Remove the current user's reaction from a feedback.
    pub async fn remove(&self, feedback_id: &str) -> Result<ApiResponse<Ack>, ApiError> {
        self.client
            .delete(&format!("/reactions/feedback/{feedback_id}"))
            .await
    }

    pub async fn list_by_feedback(
        &self,
        feedback_id: &str,
    ) -> Result<ApiResponse<Vec<Reaction>>, ApiError> {
        self.client
            .get(&format!("/reactions/feedback/{feedback_id}"))
            .await
    }

    /// Reaction tally for one feedback, keyed by kind.
    pub async fn counts(
        &self,
        feedback_id: &str,
    ) -> Result<ApiResponse<HashMap<ReactionType, u64>>, ApiError> {
        self.client
            .get(&format!("/reactions/feedback/{feedback_id}/counts"))
            .await
    }

    /// The current user's reaction to a feedback, if any.
    pub async fn mine(&self, feedback_id: &str) -> Result<ApiResponse<Option<Reaction>>, ApiError> {
        self.client
            .get(&format!("/reactions/feedback/{feedback_id}/my"))
            .await
    }

    /// Change the kind of an existing reaction.
    pub async fn update(
        &self,
        feedback_id: &str,
        kind: ReactionType,
    ) -> Result<ApiResponse<Reaction>, ApiError> {
        self.client
            .put(
                &format!("/reactions/feedback/{feedback_id}"),
                &KindBody { kind },
            )
            .await
    }

    /// All reactions by the current user.
    pub async fn list_mine(&self) -> Result<ApiResponse<Vec<Reaction>>, ApiError> {
        self.client.get("/reactions/my").await
    }

    pub async fn stats(&self) -> Result<ApiResponse<ReactionStats>, ApiError> {
        self.client.get("/reactions/stats").await
    }

    /// One-call create/update/remove: the server decides based on the
    /// caller's existing reaction (none → created, different kind → updated,
    /// same kind → removed) and reports which action it took.
    pub async fn toggle(
        &self,
        feedback_id: &str,
        kind: ReactionType,
    ) -> Result<ApiResponse<ReactionToggle>, ApiError> {
        self.client
            .post("/reactions/toggle", &ReactionBody { feedback_id, kind })
            .await
    }
}
