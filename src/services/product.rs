use serde::Serialize;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::query::{QueryString, filtered_path, search_path};
use crate::response::{ApiResponse, Paginated};
use crate::types::{
    Ack, CanPurchase, CreateProductRequest, Product, ProductFilters, ProductStats, Purchase,
    UpdateProductRequest, UploadedImage,
};

/// Reward products: CRUD, purchase flow and discovery lists.
#[derive(Debug, Clone)]
pub struct ProductService {
    client: ApiClient,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PurchaseBody<'a> {
    product_id: &'a str,
}

impl ProductService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Create a product. Admin only.
    pub async fn create(
        &self,
        product: &CreateProductRequest,
    ) -> Result<ApiResponse<Product>, ApiError> {
        self.client.post("/products", product).await
    }

    pub async fn list(
        &self,
        filters: Option<&ProductFilters>,
    ) -> Result<ApiResponse<Paginated<Product>>, ApiError> {
        self.client.get(&filtered_path("/products", filters)).await
    }

    pub async fn get(&self, id: &str) -> Result<ApiResponse<Product>, ApiError> {
        self.client.get(&format!("/products/{id}")).await
    }

    /// Update a product. Admin only.
    pub async fn update(
        &self,
        id: &str,
        update: &UpdateProductRequest,
    ) -> Result<ApiResponse<Product>, ApiError> {
        self.client.put(&format!("/products/{id}"), update).await
    }

    /// Delete a product. Admin only.
    pub async fn delete(&self, id: &str) -> Result<ApiResponse<Ack>, ApiError> {
        self.client.delete(&format!("/products/{id}")).await
    }

    /// Redeem a product. The server decrements the coin balance and reports
    /// what remains.
    pub async fn purchase(&self, product_id: &str) -> Result<ApiResponse<Purchase>, ApiError> {
        self.client
            .post("/products/purchase", &PurchaseBody { product_id })
            .await
    }

    /// Products the current user has purchased.
    pub async fn list_mine(&self) -> Result<ApiResponse<Vec<Product>>, ApiError> {
        self.client.get("/products/my").await
    }

    pub async fn popular(&self, limit: u32) -> Result<ApiResponse<Vec<Product>>, ApiError> {
        let mut query = QueryString::new();
        query.append("limit", Some(limit));
        self.client.get(&query.append_to("/products/popular")).await
    }

    /// Products the current user can afford. The server filters against the
    /// caller's balance; the result set is rendered verbatim.
    pub async fn affordable(&self) -> Result<ApiResponse<Vec<Product>>, ApiError> {
        self.client.get("/products/affordable").await
    }

    /// Name/description search. Leave `filters.search` unset; the query term
    /// is passed separately and always comes first.
    pub async fn search(
        &self,
        term: &str,
        filters: Option<&ProductFilters>,
    ) -> Result<ApiResponse<Paginated<Product>>, ApiError> {
        self.client
            .get(&search_path("/products/search", term, filters))
            .await
    }

    pub async fn stats(&self) -> Result<ApiResponse<ProductStats>, ApiError> {
        self.client.get("/products/stats").await
    }

    /// Upload a product image as multipart form data. Returns the stored
    /// image URL.
    pub async fn upload_image(
        &self,
        form: reqwest::multipart::Form,
    ) -> Result<ApiResponse<UploadedImage>, ApiError> {
        self.client
            .post_multipart("/products/upload-image", form)
            .await
    }

    /// Purchase precondition: affordability plus the cost and balance needed
    /// to display why a purchase is blocked.
    pub async fn can_purchase(&self, id: &str) -> Result<ApiResponse<CanPurchase>, ApiError> {
        self.client
            .get(&format!("/products/{id}/can-purchase"))
            .await
    }
}
