//! Typed schema for the REST backend's JSON.
//!
//! DESIGN
//! ======
//! The backend speaks PascalCase Sequelize rows with nested associations that
//! may be missing (deleted category, city without province). Every such field
//! is an explicit `Option`, ids accept both JSON numbers and numeric
//! strings, and text or price columns that arrive `null`, blank or with the
//! wrong JSON type decode to empty values. One odd row never blanks the
//! catalog.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// Session
// =============================================================================

/// Seller profile attached to a user who can publish.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SellerRef {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: i64,
}

/// The signed-in user as returned by `/auth/login` and kept in storage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: i64,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub seller: Option<SellerRef>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Body of a successful `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: SessionUser,
}

/// `{ success, message }` acknowledgement used by mutation endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

// =============================================================================
// Catalog
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Province {
    #[serde(rename = "ID_Province", deserialize_with = "deserialize_id")]
    pub id: i64,
    #[serde(rename = "Name", default, deserialize_with = "deserialize_text")]
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct City {
    #[serde(rename = "ID_City", deserialize_with = "deserialize_id")]
    pub id: i64,
    #[serde(rename = "Name", default, deserialize_with = "deserialize_text")]
    pub name: String,
    #[serde(rename = "Province", default)]
    pub province: Option<Province>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "ID_Category", deserialize_with = "deserialize_id")]
    pub id: i64,
    #[serde(rename = "CategoryName", default, deserialize_with = "deserialize_text")]
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubCategory {
    #[serde(rename = "ID_SubCategory", deserialize_with = "deserialize_id")]
    pub id: i64,
    #[serde(rename = "NameSubCategory", default, deserialize_with = "deserialize_text")]
    pub name: String,
}

/// A seller's listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Publication {
    #[serde(rename = "ID_Publication", deserialize_with = "deserialize_id")]
    pub id: i64,
    #[serde(rename = "Title", default, deserialize_with = "deserialize_text")]
    pub title: String,
    #[serde(rename = "DescriptionProduct", default, deserialize_with = "deserialize_opt_text")]
    pub description: Option<String>,
    #[serde(rename = "Price", default, deserialize_with = "deserialize_opt_price")]
    pub price: Option<f64>,
    /// Condition string (`"nuevo"`, `"usado"`, `"poco usado"`, `"reparado"`).
    #[serde(rename = "State", default, deserialize_with = "deserialize_text")]
    pub state: String,
    #[serde(rename = "Brand", default, deserialize_with = "deserialize_opt_text")]
    pub brand: Option<String>,
    #[serde(rename = "Sku", default, deserialize_with = "deserialize_opt_text")]
    pub sku: Option<String>,
    #[serde(rename = "ImageUrl", default)]
    pub image_url: Option<String>,
    #[serde(rename = "ID_Sellers", default, deserialize_with = "deserialize_opt_id")]
    pub seller_id: Option<i64>,
    #[serde(rename = "ID_Category", default, deserialize_with = "deserialize_opt_id")]
    pub category_id: Option<i64>,
    #[serde(rename = "ID_SubCategory", default, deserialize_with = "deserialize_opt_id")]
    pub sub_category_id: Option<i64>,
    #[serde(rename = "ID_City", default, deserialize_with = "deserialize_opt_id")]
    pub city_id: Option<i64>,
    #[serde(rename = "Category", default)]
    pub category: Option<Category>,
    #[serde(rename = "SubCategory", default)]
    pub sub_category: Option<SubCategory>,
    #[serde(rename = "City", default)]
    pub city: Option<City>,
}

impl Publication {
    /// Category id from the nested association, falling back to the foreign key.
    pub fn category_key(&self) -> Option<i64> {
        self.category.as_ref().map(|c| c.id).or(self.category_id)
    }

    pub fn sub_category_key(&self) -> Option<i64> {
        self.sub_category.as_ref().map(|s| s.id).or(self.sub_category_id)
    }

    pub fn city_key(&self) -> Option<i64> {
        self.city.as_ref().map(|c| c.id).or(self.city_id)
    }

    /// Province id; only known through the nested city.
    pub fn province_key(&self) -> Option<i64> {
        self.city.as_ref()?.province.as_ref().map(|p| p.id)
    }
}

// =============================================================================
// Orders
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderDetail {
    #[serde(rename = "ID_OrderDetails", deserialize_with = "deserialize_id")]
    pub id: i64,
    #[serde(rename = "Publication", default)]
    pub publication: Option<Publication>,
    /// Buyer name (present on seller sales).
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub nombre: Option<String>,
    /// Postal code.
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub cp: Option<String>,
    /// Street.
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub calle: Option<String>,
    /// Apartment.
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub dpto: Option<String>,
}

impl OrderDetail {
    /// Line label: the publication title, or a placeholder once it was deleted.
    pub fn title_or_placeholder(&self) -> &str {
        self.publication
            .as_ref()
            .map(|p| p.title.as_str())
            .filter(|title| !title.is_empty())
            .unwrap_or("Producto eliminado")
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "ID_Orders", deserialize_with = "deserialize_id")]
    pub id: i64,
    #[serde(rename = "State", default, deserialize_with = "deserialize_text")]
    pub state: String,
    #[serde(rename = "DistributionDate", default, deserialize_with = "deserialize_opt_text")]
    pub distribution_date: Option<String>,
    #[serde(rename = "OrderDetails", default)]
    pub details: Vec<OrderDetail>,
}

/// Body of `GET /sellers/{id}/sails`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SellerSales {
    #[serde(default)]
    pub sails: Vec<Order>,
}

// =============================================================================
// Notifications
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: i64,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub description: String,
}

/// Body of the notification list endpoint.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NotificationList {
    #[serde(default)]
    pub notifications: Vec<Notification>,
}

// =============================================================================
// Admin
// =============================================================================

/// A buyer or seller account row in the admin tables.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccountRow {
    #[serde(rename = "ID_Buyers", deserialize_with = "deserialize_id")]
    pub id: i64,
    #[serde(rename = "BuyersName", default, deserialize_with = "deserialize_text")]
    pub first_name: String,
    #[serde(rename = "BuyersLastName", default, deserialize_with = "deserialize_text")]
    pub last_name: String,
    #[serde(rename = "Email", default, deserialize_with = "deserialize_text")]
    pub email: String,
}

/// One page of `GET /admin/publicaciones`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PublicationPage {
    #[serde(default)]
    pub rows: Vec<Publication>,
    #[serde(rename = "totalPages", default = "default_total_pages")]
    pub total_pages: u32,
}

fn default_total_pages() -> u32 {
    1
}

// =============================================================================
// Lenient number decoding
// =============================================================================

fn deserialize_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    id_from_value(&value).ok_or_else(|| D::Error::custom(format!("expected integer id, got {value}")))
}

fn deserialize_opt_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    id_from_value(&value)
        .map(Some)
        .ok_or_else(|| D::Error::custom(format!("expected integer id, got {value}")))
}

/// Blank or non-numeric prices decode as `None` ("Precio a consultar")
/// instead of failing the whole list.
fn deserialize_opt_price<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(number) => number.as_f64(),
        serde_json::Value::String(text) => match text.trim().parse::<f64>() {
            Ok(price) if price.is_finite() => Some(price),
            _ => None,
        },
        _ => None,
    })
}

// =============================================================================
// Lenient text decoding
// =============================================================================

/// Text column that may arrive as `null` or as a number.
fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(text_from_value(value).unwrap_or_default())
}

fn deserialize_opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(text_from_value(value))
}

fn text_from_value(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(text) => Some(text),
        serde_json::Value::Number(number) => Some(number.to_string()),
        serde_json::Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

fn id_from_value(value: &serde_json::Value) -> Option<i64> {
    match value {
        serde_json::Value::Number(number) => number.as_i64(),
        serde_json::Value::String(text) => match text.trim().parse::<i64>() {
            Ok(id) => Some(id),
            Err(_) => None,
        },
        _ => None,
    }
}
