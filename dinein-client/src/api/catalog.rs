//! Business, menu, category and table endpoints

use crate::{ClientResult, DineInClient};
use reqwest::Method;
use reqwest::multipart::{Form, Part};
use serde::Serialize;
use shared::models::{
    Category, CategoryCreate, CategoryImage, CategoryUpdate, DiningTable, Product, StoreInfo,
    TableListResponse,
};

#[derive(Serialize)]
struct BusinessQuery {
    #[serde(rename = "businessId")]
    business_id: i64,
}

fn category_form(name: &str, image: Option<&CategoryImage>) -> ClientResult<Form> {
    let mut form = Form::new().text("name", name.to_string());
    if let Some(image) = image {
        let part = Part::bytes(image.bytes.clone())
            .file_name(image.file_name.clone())
            .mime_str(&image.mime_type)?;
        form = form.part("image", part);
    }
    Ok(form)
}

impl DineInClient {
    // ========== Business API ==========

    /// Public business profile
    pub async fn business(&self, business_id: i64) -> ClientResult<StoreInfo> {
        self.http.get(&format!("api/business/{}", business_id), None).await
    }

    // ========== Menu API ==========

    pub async fn products(&self, business_id: i64) -> ClientResult<Vec<Product>> {
        let token = self.staff_token();
        self.http
            .get_query("api/products", &BusinessQuery { business_id }, token.as_deref())
            .await
    }

    pub async fn categories(&self, business_id: i64) -> ClientResult<Vec<Category>> {
        let token = self.staff_token();
        self.http
            .get_query("api/categories", &BusinessQuery { business_id }, token.as_deref())
            .await
    }

    pub async fn add_category(&self, category: &CategoryCreate) -> ClientResult<()> {
        let token = self.staff_token();
        let form = category_form(&category.name, category.image.as_ref())?;
        self.http
            .send_multipart(Method::POST, "api/categories", form, token.as_deref())
            .await
    }

    pub async fn edit_category(&self, id: i64, category: &CategoryUpdate) -> ClientResult<()> {
        let token = self.staff_token();
        let form = category_form(&category.name, category.image.as_ref())?;
        self.http
            .send_multipart(Method::PUT, &format!("api/categories/{}", id), form, token.as_deref())
            .await
    }

    pub async fn delete_category(&self, id: i64) -> ClientResult<()> {
        let token = self.staff_token();
        self.http
            .delete(&format!("api/categories/{}", id), token.as_deref())
            .await
    }

    // ========== Tables API ==========

    /// Tables of a business; a body without `tables` is rejected
    pub async fn tables(&self, business_id: i64) -> ClientResult<Vec<DiningTable>> {
        let body: TableListResponse = self
            .http
            .get(&format!("api/tables/{}", business_id), None)
            .await?;
        body.tables
            .ok_or_else(|| crate::ClientError::InvalidResponse("Unexpected response format".into()))
    }
}
