use serde::Serialize;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::query::{filtered_path, search_path};
use crate::response::{ApiResponse, Paginated};
use crate::types::{
    Ack, CreateFeedbackRequest, Feedback, FeedbackFilters, UpdateFeedbackRequest, UploadedFile,
};

/// Feedback posts: CRUD, listing, reporting and attachment upload.
#[derive(Debug, Clone)]
pub struct FeedbackService {
    client: ApiClient,
}

#[derive(Serialize)]
struct ReportBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<&'a str>,
}

impl FeedbackService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn create(
        &self,
        feedback: &CreateFeedbackRequest,
    ) -> Result<ApiResponse<Feedback>, ApiError> {
        self.client.post("/feedbacks", feedback).await
    }

    pub async fn list(
        &self,
        filters: Option<&FeedbackFilters>,
    ) -> Result<ApiResponse<Paginated<Feedback>>, ApiError> {
        self.client.get(&filtered_path("/feedbacks", filters)).await
    }

    pub async fn get(&self, id: &str) -> Result<ApiResponse<Feedback>, ApiError> {
        self.client.get(&format!("/feedbacks/{id}")).await
    }

    pub async fn update(
        &self,
        id: &str,
        update: &UpdateFeedbackRequest,
    ) -> Result<ApiResponse<Feedback>, ApiError> {
        self.client.put(&format!("/feedbacks/{id}"), update).await
    }

    pub async fn delete(&self, id: &str) -> Result<ApiResponse<Ack>, ApiError> {
        self.client.delete(&format!("/feedbacks/{id}")).await
    }

    /// Feedbacks authored by the current user.
    pub async fn list_mine(
        &self,
        filters: Option<&FeedbackFilters>,
    ) -> Result<ApiResponse<Paginated<Feedback>>, ApiError> {
        self.client
            .get(&filtered_path("/feedbacks/my", filters))
            .await
    }

    pub async fn list_by_group(
        &self,
        group_id: &str,
        filters: Option<&FeedbackFilters>,
    ) -> Result<ApiResponse<Paginated<Feedback>>, ApiError> {
        self.client
            .get(&filtered_path(
                &format!("/feedbacks/group/{group_id}"),
                filters,
            ))
            .await
    }

    /// Flag a feedback for moderation, with an optional free-text reason.
    pub async fn report(
        &self,
        id: &str,
        reason: Option<&str>,
    ) -> Result<ApiResponse<Ack>, ApiError> {
        self.client
            .post(&format!("/feedbacks/{id}/report"), &ReportBody { reason })
            .await
    }

    /// Upload an attachment as multipart form data. Returns the stored file
    /// URL to reference from [`CreateFeedbackRequest::file`].
    pub async fn upload_file(
        &self,
        form: reqwest::multipart::Form,
    ) -> Result<ApiResponse<UploadedFile>, ApiError> {
        self.client.post_multipart("/feedbacks/upload", form).await
    }

    /// Full-text search. Leave `filters.search` unset; the query term is
    /// passed separately and always comes first.
    pub async fn search(
        &self,
        term: &str,
        filters: Option<&FeedbackFilters>,
    ) -> Result<ApiResponse<Paginated<Feedback>>, ApiError> {
        self.client
            .get(&search_path("/feedbacks/search", term, filters))
            .await
    }
}
