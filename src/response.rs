use serde::Deserialize;

/// Normalized success envelope returned by every operation.
///
/// `data` is the server's `data` field when the body carries one, otherwise
/// the whole parsed body; the backend wraps payloads inconsistently across
/// endpoints and the transport hides that.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    pub data: T,
    pub message: Option<String>,
    pub status: u16,
}

/// One page of a list endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub pagination: PageInfo,
}

/// Server-computed pagination metadata.
///
/// `total_pages = ceil(total / limit)`, `has_next = page < total_pages`,
/// `has_prev = page > 1`. The server computes all of it; the client carries
/// the values verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_prev: bool,
}
