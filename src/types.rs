use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::query::{QueryString, ToQuery};

// ---------------------------------------------------------------------------
// Shared enums
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    User,
    Admin,
}

/// The fixed set of reaction kinds a user can attach to a feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReactionType {
    ThumbsUp,
    ThumbsDown,
    LightBulb,
    SadFace,
    Thunder,
}

/// Sort direction for list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Asc,
    Desc,
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Order::Asc => f.write_str("asc"),
            Order::Desc => f.write_str("desc"),
        }
    }
}

// ---------------------------------------------------------------------------
// Entities
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    /// Reward-currency balance. Never computed client-side.
    pub coins: u64,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<Group>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedbacks: Option<Vec<Feedback>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reactions: Option<Vec<Reaction>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<Product>>,
}

/// Node in the group tree. Roots have no `parent_id`; `level` is consistent
/// with the node's depth from a root.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: String,
    pub name: String,
    pub level: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<Box<Group>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<Vec<User>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedbacks: Option<Vec<Feedback>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subgroups: Option<Vec<Group>>,
}

/// A feedback post. When `is_anonymous` is set the backend withholds the
/// author's identity from other callers; the client never caches or exposes
/// author data beyond what the response carries.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    pub created_at: DateTime<Utc>,
    pub report_count: u64,
    pub author_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    pub is_anonymous: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<Group>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reactions: Option<Vec<Reaction>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reaction_counts: Option<HashMap<ReactionType, u64>>,
}

/// A user's reaction to a feedback. The backend enforces at most one per
/// (feedback, user) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reaction {
    pub id: i64,
    pub feedback_id: String,
    pub user_id: String,
    #[serde(rename = "type")]
    pub kind: ReactionType,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<Box<Feedback>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<Box<User>>,
}

/// A reward product purchasable with coins.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Price in coins.
    pub cost: u64,
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<Box<User>>,
}

// ---------------------------------------------------------------------------
// Auth payloads
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RefreshedToken {
    pub token: String,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct TokenValidity {
    pub valid: bool,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CoinBalance {
    pub coins: u64,
}

/// Plain `{ message }` acknowledgment returned by several endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct Ack {
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
}

// ---------------------------------------------------------------------------
// Feedback payloads
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFeedbackRequest {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_anonymous: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFeedbackRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_anonymous: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedFile {
    pub file_url: String,
}

// ---------------------------------------------------------------------------
// Group payloads
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGroupRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGroupRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JoinedGroup {
    pub message: String,
    pub group: Group,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Membership {
    pub is_member: bool,
    pub is_admin: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupStats {
    pub member_count: u64,
    pub feedback_count: u64,
    pub subgroup_count: u64,
    pub total_reactions: u64,
    pub top_members: Vec<TopMember>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopMember {
    pub user: User,
    pub feedback_count: u64,
    pub reaction_count: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupsOverallStats {
    pub total_groups: u64,
    pub total_members: u64,
    pub average_members_per_group: f64,
    pub most_active_groups: Vec<GroupActivity>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupActivity {
    pub group: Group,
    pub activity_score: f64,
}

// ---------------------------------------------------------------------------
// Product payloads
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub cost: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProductRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<u64>,
}

/// Outcome of a purchase. The server decrements the balance and reports what
/// remains; the client never computes it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Purchase {
    pub product: Product,
    pub remaining_coins: u64,
    pub message: String,
}

/// Precondition check for the purchase button.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanPurchase {
    pub can_purchase: bool,
    pub reason: Option<String>,
    pub user_coins: u64,
    pub product_cost: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductStats {
    pub total_products: u64,
    pub total_purchases: u64,
    pub most_purchased: Vec<PurchaseCount>,
    pub average_cost: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseCount {
    pub product: Product,
    pub purchase_count: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedImage {
    pub image_url: String,
}

// ---------------------------------------------------------------------------
// Reaction payloads
// ---------------------------------------------------------------------------

/// What the server decided a toggle call meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleAction {
    Created,
    Updated,
    Removed,
}

/// Outcome of a reaction toggle: the server creates, updates or removes the
/// caller's reaction and reports which it did. `reaction` is `None` exactly
/// when the action was `Removed`.
#[derive(Debug, Clone, Deserialize)]
pub struct ReactionToggle {
    pub reaction: Option<Reaction>,
    pub action: ToggleAction,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionStats {
    pub total: u64,
    pub by_type: HashMap<ReactionType, u64>,
    pub most_reacted_feedbacks: Vec<FeedbackReactionCount>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackReactionCount {
    pub feedback_id: String,
    pub total_reactions: u64,
}

// ---------------------------------------------------------------------------
// Filters
// ---------------------------------------------------------------------------

/// Pagination and sorting fields shared by every list filter.
#[derive(Debug, Clone, Default)]
pub struct PageQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub sort: Option<String>,
    pub order: Option<Order>,
}

impl ToQuery for PageQuery {
    fn encode(&self, query: &mut QueryString) {
        query.append("page", self.page);
        query.append("limit", self.limit);
        query.append("sort", self.sort.as_ref());
        query.append("order", self.order);
    }
}

#[derive(Debug, Clone, Default)]
pub struct FeedbackFilters {
    pub paging: PageQuery,
    pub group_id: Option<String>,
    pub author_id: Option<String>,
    pub is_anonymous: Option<bool>,
    pub search: Option<String>,
    /// ISO-8601 date string, inclusive lower bound on creation time.
    pub start_date: Option<String>,
    /// ISO-8601 date string, inclusive upper bound on creation time.
    pub end_date: Option<String>,
}

impl ToQuery for FeedbackFilters {
    fn encode(&self, query: &mut QueryString) {
        self.paging.encode(query);
        query.append("groupId", self.group_id.as_ref());
        query.append("authorId", self.author_id.as_ref());
        query.append("isAnonymous", self.is_anonymous);
        query.append("search", self.search.as_ref());
        query.append("startDate", self.start_date.as_ref());
        query.append("endDate", self.end_date.as_ref());
    }
}

#[derive(Debug, Clone, Default)]
pub struct GroupFilters {
    pub paging: PageQuery,
    pub parent_id: Option<String>,
    pub level: Option<i64>,
    pub search: Option<String>,
}

impl ToQuery for GroupFilters {
    fn encode(&self, query: &mut QueryString) {
        self.paging.encode(query);
        query.append("parentId", self.parent_id.as_ref());
        query.append("level", self.level);
        query.append("search", self.search.as_ref());
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProductFilters {
    pub paging: PageQuery,
    pub max_cost: Option<u64>,
    pub min_cost: Option<u64>,
    pub search: Option<String>,
    pub available: Option<bool>,
}

impl ToQuery for ProductFilters {
    fn encode(&self, query: &mut QueryString) {
        self.paging.encode(query);
        query.append("maxCost", self.max_cost);
        query.append("minCost", self.min_cost);
        query.append("search", self.search.as_ref());
        query.append("available", self.available);
    }
}
