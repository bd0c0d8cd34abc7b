//! Menu and category management

use crate::cart::stage_product;
use crate::{ClientError, ClientResult, DineInClient};
use serde::{Deserialize, Serialize};
use shared::models::{CartItem, Category, CategoryCreate, CategoryImage, CategoryUpdate, Product};

const DEFAULT_SPICINESS: u8 = 2;

/// Product as shown on the menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dish {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub spiciness: u8,
    pub favorite: bool,
    /// First metadata image, or empty
    pub image: String,
    pub category: String,
    pub is_active: bool,
}

impl From<Product> for Dish {
    fn from(product: Product) -> Self {
        let metadata = product.metadata.unwrap_or_default();
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            spiciness: metadata.spiciness.unwrap_or(DEFAULT_SPICINESS),
            favorite: metadata.favorite.unwrap_or(false),
            image: metadata.images.into_iter().next().unwrap_or_default(),
            category: product.category.unwrap_or_default(),
            is_active: product.is_active.unwrap_or(true),
        }
    }
}

impl Dish {
    pub fn to_cart_item(&self) -> CartItem {
        CartItem::new(self.id, self.name.clone(), self.price).with_image(self.image.clone())
    }
}

/// Menu view model
#[derive(Debug)]
pub struct MenuView {
    client: DineInClient,
    dishes: Vec<Dish>,
    selected_category: String,
}

impl MenuView {
    /// Load the products of the stored business
    pub async fn load(client: &DineInClient) -> ClientResult<Self> {
        let business_id = client
            .session()
            .business_id()
            .ok_or_else(|| ClientError::MissingContext("Missing businessId".into()))?;
        let products = client.products(business_id).await.inspect_err(|e| {
            tracing::error!(business_id, error = %e, "Failed to fetch dishes");
        })?;
        Ok(Self::with_dishes(client, products.into_iter().map(Dish::from).collect()))
    }

    fn with_dishes(client: &DineInClient, dishes: Vec<Dish>) -> Self {
        Self {
            client: client.clone(),
            dishes,
            selected_category: String::new(),
        }
    }

    pub fn dishes(&self) -> &[Dish] {
        &self.dishes
    }

    pub fn selected_category(&self) -> &str {
        &self.selected_category
    }

    /// Empty selects every category
    pub fn select_category(&mut self, category: &str) {
        self.selected_category = category.to_string();
    }

    /// Dishes in the selected category, case-insensitive
    pub fn visible(&self) -> Vec<&Dish> {
        let selected = self.selected_category.to_lowercase();
        self.dishes
            .iter()
            .filter(|d| selected.is_empty() || d.category.to_lowercase() == selected)
            .collect()
    }

    pub fn empty_message(&self) -> &'static str {
        "No dishes available for the selected category."
    }

    /// Local availability toggle
    pub fn set_active(&mut self, id: i64, active: bool) {
        if let Some(dish) = self.dishes.iter_mut().find(|d| d.id == id) {
            dish.is_active = active;
        }
    }

    /// Drop a dish from the local list
    pub fn remove(&mut self, id: i64) {
        self.dishes.retain(|d| d.id != id);
    }

    /// Put a dish in the cart staging buffer
    pub fn add_to_cart(&self, id: i64) -> ClientResult<Vec<CartItem>> {
        let dish = self
            .dishes
            .iter()
            .find(|d| d.id == id)
            .ok_or_else(|| ClientError::NotFound(format!("dish {}", id)))?;
        stage_product(self.client.session(), dish.to_cart_item())
    }
}

// ========== Categories ==========

/// Categories of the stored business
pub async fn list_categories(client: &DineInClient) -> ClientResult<Vec<Category>> {
    let business_id = client
        .session()
        .business_id()
        .ok_or_else(|| ClientError::MissingContext("Missing businessId".into()))?;
    client.categories(business_id).await
}

/// Add a category; both name and image are required
pub async fn add_category(client: &DineInClient, name: &str, image: Option<CategoryImage>) -> ClientResult<()> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ClientError::Validation("Category name is required".into()));
    }
    let Some(image) = image else {
        return Err(ClientError::Validation(
            "Please upload an image for the category".into(),
        ));
    };
    let request = CategoryCreate {
        name: name.to_string(),
        image: Some(image),
    };
    client.add_category(&request).await.inspect_err(|e| {
        tracing::error!(name, error = %e, "Error adding category");
    })?;
    tracing::info!(name, "Category added");
    Ok(())
}

/// Rename a category, optionally replacing its image
pub async fn edit_category(
    client: &DineInClient,
    id: i64,
    name: &str,
    image: Option<CategoryImage>,
) -> ClientResult<()> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ClientError::Validation("Category name is required".into()));
    }
    let request = CategoryUpdate {
        name: name.to_string(),
        image,
    };
    client.edit_category(id, &request).await.inspect_err(|e| {
        tracing::error!(id, error = %e, "Error updating category");
    })
}

pub async fn delete_category(client: &DineInClient, id: i64) -> ClientResult<()> {
    client.delete_category(id).await.inspect_err(|e| {
        tracing::error!(id, error = %e, "Error deleting category");
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClientConfig;

    fn product(value: serde_json::Value) -> Product {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_dish_defaults() {
        let dish = Dish::from(product(serde_json::json!({
            "id": 3, "name": "Dal Fry", "price": 120.0
        })));
        assert_eq!(dish.spiciness, 2);
        assert!(!dish.favorite);
        assert_eq!(dish.image, "");
        assert_eq!(dish.category, "");
        assert!(dish.is_active);
    }

    #[test]
    fn test_dish_from_metadata() {
        let dish = Dish::from(product(serde_json::json!({
            "id": 4, "name": "Mutton Saoji", "price": 320.0,
            "category": "Main Course", "isActive": false,
            "metadata": { "spiciness": 5, "favorite": true, "images": ["/a.png", "/b.png"] }
        })));
        assert_eq!(dish.spiciness, 5);
        assert!(dish.favorite);
        assert_eq!(dish.image, "/a.png");
        assert!(!dish.is_active);
    }

    #[test]
    fn test_category_filter_case_insensitive() {
        let client = DineInClient::new(ClientConfig::default()).unwrap();
        let dishes = vec![
            Dish::from(product(serde_json::json!({"id": 1, "name": "A", "price": 1.0, "category": "Starters"}))),
            Dish::from(product(serde_json::json!({"id": 2, "name": "B", "price": 1.0, "category": "Main"}))),
        ];
        let mut menu = MenuView::with_dishes(&client, dishes);
        assert_eq!(menu.visible().len(), 2);

        menu.select_category("starters");
        let visible = menu.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 1);

        menu.add_to_cart(1).unwrap();
        menu.add_to_cart(1).unwrap();
        assert_eq!(client.session().newly_added_items()[0].quantity, 2);
    }

    #[tokio::test]
    async fn test_add_category_requires_name_and_image() {
        let client = DineInClient::new(ClientConfig::default()).unwrap();
        let err = add_category(&client, "  ", None).await.unwrap_err();
        assert!(matches!(err, ClientError::Validation(ref m) if m == "Category name is required"));

        let err = add_category(&client, "Drinks", None).await.unwrap_err();
        assert!(matches!(err, ClientError::Validation(ref m) if m.contains("image")));
    }
}
