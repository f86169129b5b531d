use serde::Serialize;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::query::{filtered_path, search_path};
use crate::response::{ApiResponse, Paginated};
use crate::types::{
    Ack, CreateGroupRequest, Group, GroupFilters, GroupStats, GroupsOverallStats, JoinedGroup,
    Membership, UpdateGroupRequest, User,
};

/// Hierarchical groups: CRUD, membership, hierarchy traversal, statistics
/// and admin verbs.
#[derive(Debug, Clone)]
pub struct GroupService {
    client: ApiClient,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InviteBody<'a> {
    user_email: &'a str,
}

impl GroupService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn create(&self, group: &CreateGroupRequest) -> Result<ApiResponse<Group>, ApiError> {
        self.client.post("/groups", group).await
    }

    pub async fn list(
        &self,
        filters: Option<&GroupFilters>,
    ) -> Result<ApiResponse<Paginated<Group>>, ApiError> {
        self.client.get(&filtered_path("/groups", filters)).await
    }

    pub async fn get(&self, id: &str) -> Result<ApiResponse<Group>, ApiError> {
        self.client.get(&format!("/groups/{id}")).await
    }

    pub async fn update(
        &self,
        id: &str,
        update: &UpdateGroupRequest,
    ) -> Result<ApiResponse<Group>, ApiError> {
        self.client.put(&format!("/groups/{id}"), update).await
    }

    pub async fn delete(&self, id: &str) -> Result<ApiResponse<Ack>, ApiError> {
        self.client.delete(&format!("/groups/{id}")).await
    }

    pub async fn join(&self, group_id: &str) -> Result<ApiResponse<JoinedGroup>, ApiError> {
        self.client
            .post_empty(&format!("/groups/{group_id}/join"))
            .await
    }

    pub async fn leave(&self, group_id: &str) -> Result<ApiResponse<Ack>, ApiError> {
        self.client
            .post_empty(&format!("/groups/{group_id}/leave"))
            .await
    }

    pub async fn members(&self, group_id: &str) -> Result<ApiResponse<Vec<User>>, ApiError> {
        self.client
            .get(&format!("/groups/{group_id}/members"))
            .await
    }

    /// Groups without a parent.
    pub async fn roots(&self) -> Result<ApiResponse<Vec<Group>>, ApiError> {
        self.client.get("/groups/roots").await
    }

    pub async fn subgroups(&self, parent_id: &str) -> Result<ApiResponse<Vec<Group>>, ApiError> {
        self.client
            .get(&format!("/groups/{parent_id}/subgroups"))
            .await
    }

    /// The full group tree, roots first with nested subgroups.
    pub async fn hierarchy(&self) -> Result<ApiResponse<Vec<Group>>, ApiError> {
        self.client.get("/groups/hierarchy").await
    }

    /// Groups the current user belongs to.
    pub async fn list_mine(&self) -> Result<ApiResponse<Vec<Group>>, ApiError> {
        self.client.get("/groups/my").await
    }

    /// Name search. Leave `filters.search` unset; the query term is passed
    /// separately and always comes first.
    pub async fn search(
        &self,
        term: &str,
        filters: Option<&GroupFilters>,
    ) -> Result<ApiResponse<Paginated<Group>>, ApiError> {
        self.client
            .get(&search_path("/groups/search", term, filters))
            .await
    }

    pub async fn stats(&self, group_id: &str) -> Result<ApiResponse<GroupStats>, ApiError> {
        self.client.get(&format!("/groups/{group_id}/stats")).await
    }

    pub async fn overall_stats(&self) -> Result<ApiResponse<GroupsOverallStats>, ApiError> {
        self.client.get("/groups/stats").await
    }

    /// Invite a user by email. Admin only.
    pub async fn invite(
        &self,
        group_id: &str,
        user_email: &str,
    ) -> Result<ApiResponse<Ack>, ApiError> {
        self.client
            .post(
                &format!("/groups/{group_id}/invite"),
                &InviteBody { user_email },
            )
            .await
    }

    /// Remove a member. Admin only.
    pub async fn remove_member(
        &self,
        group_id: &str,
        user_id: &str,
    ) -> Result<ApiResponse<Ack>, ApiError> {
        self.client
            .delete(&format!("/groups/{group_id}/members/{user_id}"))
            .await
    }

    /// Promote a member to group admin. Admin only.
    pub async fn promote(
        &self,
        group_id: &str,
        user_id: &str,
    ) -> Result<ApiResponse<Ack>, ApiError> {
        self.client
            .post_empty(&format!("/groups/{group_id}/promote/{user_id}"))
            .await
    }

    /// Revoke a member's group admin role. Admin only.
    pub async fn demote(
        &self,
        group_id: &str,
        user_id: &str,
    ) -> Result<ApiResponse<Ack>, ApiError> {
        self.client
            .post_empty(&format!("/groups/{group_id}/demote/{user_id}"))
            .await
    }

    /// Whether the current user belongs to the group, and with which role.
    pub async fn membership(&self, group_id: &str) -> Result<ApiResponse<Membership>, ApiError> {
        self.client
            .get(&format!("/groups/{group_id}/membership"))
            .await
    }

    pub async fn suggestions(&self) -> Result<ApiResponse<Vec<Group>>, ApiError> {
        self.client.get("/groups/suggestions").await
    }
}
