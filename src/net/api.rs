//! REST API helpers for communicating with the marketplace backend.
//!
//! Client-side (`csr`): real HTTP calls via `gloo-net`.
//! Native builds: every call resolves to [`ApiError::Unavailable`], which
//! keeps pages and state testable without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, ApiError>` instead of panics. Whether a failure is
//! logged or toasted is decided by the caller (reads log, mutations toast).

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::{
    AccountRow, Ack, Category, City, LoginResponse, Notification, NotificationList, Order, Province, Publication,
    PublicationPage, SellerSales, SubCategory,
};
use crate::config::endpoint;
use crate::error::ApiError;

// =============================================================================
// Paths
// =============================================================================

fn buyer_orders_path(user_id: i64) -> String {
    format!("/order/buyer/{user_id}")
}

fn reset_password_path(token: &str) -> String {
    format!("/auth/reset-password?token={}", urlencoding::encode(token))
}

fn cities_path(province_id: i64) -> String {
    format!("/ciudades/{province_id}")
}

fn subcategories_path(category_id: i64) -> String {
    format!("/{category_id}/subcategorias")
}

fn publication_path(id: i64) -> String {
    format!("/publications/{id}")
}

fn seller_sales_path(seller_id: i64) -> String {
    format!("/sellers/{seller_id}/sails")
}

fn notifications_path(user_id: i64) -> String {
    format!("/notifications/{user_id}")
}

fn notification_path(id: i64) -> String {
    format!("/notifications/{id}")
}

fn admin_user_path(id: i64) -> String {
    format!("/admin/usuarios/{id}")
}

fn admin_publications_path(page: u32, limit: u32) -> String {
    format!("/admin/publicaciones?page={page}&limit={limit}")
}

fn admin_publication_path(id: i64) -> String {
    format!("/admin/publicaciones/{id}")
}

fn admin_seller_path(id: i64) -> String {
    format!("/admin/sellers/{id}")
}

#[cfg(any(test, feature = "csr"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "csr"))]
fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Turn an acknowledgement into a result, preferring the server's message.
#[cfg(any(test, feature = "csr"))]
fn ack_into_result(status: u16, ack: Option<Ack>) -> Result<String, ApiError> {
    match ack {
        Some(ack) if is_success(status) && ack.success => Ok(ack.message.unwrap_or_default()),
        Some(Ack { message: Some(message), .. }) => Err(ApiError::Rejected(message)),
        _ if is_success(status) => Err(ApiError::Rejected("La operación no se pudo completar.".to_owned())),
        _ => Err(ApiError::Status(status)),
    }
}

// =============================================================================
// Multipart bodies
// =============================================================================

/// Binary payload of a multipart file field.
#[cfg(feature = "csr")]
pub type FilePart = web_sys::File;

/// Outside the browser a file field carries no payload.
#[cfg(not(feature = "csr"))]
pub type FilePart = ();

/// A `multipart/form-data` body under construction.
#[derive(Debug, Default)]
pub struct Multipart {
    fields: Vec<(&'static str, String)>,
    files: Vec<(&'static str, FilePart)>,
}

impl Multipart {
    pub fn text(&mut self, name: &'static str, value: impl Into<String>) {
        self.fields.push((name, value.into()));
    }

    /// Append `value` only when present and non-empty.
    pub fn text_if_set(&mut self, name: &'static str, value: Option<&str>) {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            self.text(name, value);
        }
    }

    pub fn file(&mut self, name: &'static str, file: FilePart) {
        self.files.push((name, file));
    }

    pub fn fields(&self) -> &[(&'static str, String)] {
        &self.fields
    }

    /// First text value appended under `name`.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Names of the attached file fields, in order.
    pub fn file_names(&self) -> Vec<&'static str> {
        self.files.iter().map(|(name, _)| *name).collect()
    }

    #[cfg(feature = "csr")]
    fn to_form_data(&self) -> Result<web_sys::FormData, ApiError> {
        let js_err = |e: wasm_bindgen::JsValue| ApiError::Network(format!("{e:?}"));
        let form = web_sys::FormData::new().map_err(js_err)?;
        for (name, value) in &self.fields {
            form.append_with_str(name, value).map_err(js_err)?;
        }
        for (name, file) in &self.files {
            form.append_with_blob_and_filename(name, file, &file.name())
                .map_err(js_err)?;
        }
        Ok(form)
    }
}

// =============================================================================
// Transport
// =============================================================================

#[derive(Clone, Copy, Debug)]
enum Method {
    Post,
    Put,
    Delete,
}

impl Method {
    fn as_str(self) -> &'static str {
        match self {
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

#[cfg(feature = "csr")]
fn builder(method: Method, url: &str, bearer: Option<&str>) -> gloo_net::http::RequestBuilder {
    log::debug!("{} {url}", method.as_str());
    let request = match method {
        Method::Post => gloo_net::http::Request::post(url),
        Method::Put => gloo_net::http::Request::put(url),
        Method::Delete => gloo_net::http::Request::delete(url),
    };
    match bearer {
        Some(token) => request.header("Authorization", &bearer_header(token)),
        None => request,
    }
}

#[cfg(feature = "csr")]
async fn send(request: gloo_net::http::Request) -> Result<gloo_net::http::Response, ApiError> {
    request.send().await.map_err(|e| ApiError::Network(e.to_string()))
}

#[cfg(feature = "csr")]
async fn decode<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !is_success(resp.status()) {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Native stand-in for every request: nothing is sent.
#[cfg(not(feature = "csr"))]
fn unavailable<T>(method: &str, path: &str) -> Result<T, ApiError> {
    log::debug!("{method} {} skipped outside the browser", endpoint(path));
    Err(ApiError::Unavailable)
}

#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
async fn get_json<T: DeserializeOwned>(path: &str, bearer: Option<&str>) -> Result<T, ApiError> {
    #[cfg(feature = "csr")]
    {
        let mut request = gloo_net::http::Request::get(&endpoint(path));
        if let Some(token) = bearer {
            request = request.header("Authorization", &bearer_header(token));
        }
        let request = request.build().map_err(|e| ApiError::Network(e.to_string()))?;
        decode(send(request).await?).await
    }
    #[cfg(not(feature = "csr"))]
    {
        unavailable("GET", path)
    }
}

#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
async fn send_json<B: Serialize, T: DeserializeOwned>(method: Method, path: &str, body: &B) -> Result<T, ApiError> {
    #[cfg(feature = "csr")]
    {
        let request = builder(method, &endpoint(path), None)
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(send(request).await?).await
    }
    #[cfg(not(feature = "csr"))]
    {
        unavailable(method.as_str(), path)
    }
}

/// Send a JSON body to an endpoint answering `{ success, message }`.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
async fn send_json_ack<B: Serialize>(method: Method, path: &str, body: &B) -> Result<String, ApiError> {
    #[cfg(feature = "csr")]
    {
        let request = builder(method, &endpoint(path), None)
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let resp = send(request).await?;
        let status = resp.status();
        let ack = match resp.json::<Ack>().await {
            Ok(ack) => Some(ack),
            Err(e) => {
                log::warn!("unreadable acknowledgement from {path}: {e}");
                None
            }
        };
        ack_into_result(status, ack)
    }
    #[cfg(not(feature = "csr"))]
    {
        unavailable(method.as_str(), path)
    }
}

#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
async fn send_multipart<T: DeserializeOwned>(method: Method, path: &str, body: &Multipart) -> Result<T, ApiError> {
    #[cfg(feature = "csr")]
    {
        let form = body.to_form_data()?;
        let request = builder(method, &endpoint(path), None)
            .body(form)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(send(request).await?).await
    }
    #[cfg(not(feature = "csr"))]
    {
        unavailable(method.as_str(), path)
    }
}

/// Send a multipart body, treating any 2xx as success and ignoring the body.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
async fn send_multipart_unit(method: Method, path: &str, body: &Multipart) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let form = body.to_form_data()?;
        let request = builder(method, &endpoint(path), None)
            .body(form)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let resp = send(request).await?;
        if is_success(resp.status()) {
            Ok(())
        } else {
            Err(ApiError::Status(resp.status()))
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        unavailable(method.as_str(), path)
    }
}

/// Issue a `DELETE`, treating any 2xx as success.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
async fn delete(path: &str, bearer: Option<&str>) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let request = builder(Method::Delete, &endpoint(path), bearer)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let resp = send(request).await?;
        if is_success(resp.status()) {
            Ok(())
        } else {
            Err(ApiError::Status(resp.status()))
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        unavailable(Method::Delete.as_str(), path)
    }
}

/// Issue a `DELETE` whose body is a `{ success, message }` acknowledgement.
async fn delete_with_ack(path: &str) -> Result<Ack, ApiError> {
    #[cfg(feature = "csr")]
    {
        let request = builder(Method::Delete, &endpoint(path), None)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(send(request).await?).await
    }
    #[cfg(not(feature = "csr"))]
    {
        unavailable(Method::Delete.as_str(), path)
    }
}

// =============================================================================
// Auth
// =============================================================================

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Exchange credentials for a session via `POST /auth/login`.
///
/// # Errors
///
/// Any transport, status, or decode failure.
pub async fn login(email: &str, password: &str) -> Result<LoginResponse, ApiError> {
    send_json(Method::Post, "/auth/login", &LoginRequest { email, password }).await
}

#[derive(Serialize)]
struct ForgotPasswordRequest<'a> {
    email: &'a str,
}

/// Ask for a password-reset email via `POST /auth/forgot-password`.
///
/// Returns the server's confirmation message.
///
/// # Errors
///
/// [`ApiError::Rejected`] when the server answers `success: false`.
pub async fn request_password_reset(email: &str) -> Result<String, ApiError> {
    send_json_ack(Method::Post, "/auth/forgot-password", &ForgotPasswordRequest { email }).await
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ResetPasswordRequest<'a> {
    password: &'a str,
    confirm_password: &'a str,
}

/// Set a new password with the emailed token via `PUT /auth/reset-password`.
///
/// # Errors
///
/// [`ApiError::Rejected`] when the server answers `success: false`.
pub async fn confirm_password_reset(token: &str, password: &str, confirm_password: &str) -> Result<String, ApiError> {
    let body = ResetPasswordRequest { password, confirm_password };
    send_json_ack(Method::Put, &reset_password_path(token), &body).await
}

// =============================================================================
// Catalog and seller
// =============================================================================

/// Fetch the public catalog from `GET /publications`.
///
/// # Errors
///
/// Any transport, status, or decode failure.
pub async fn fetch_publications() -> Result<Vec<Publication>, ApiError> {
    get_json("/publications", None).await
}

/// Fetch provinces for location selects from `GET /provincias-ciudades`.
///
/// # Errors
///
/// Any transport, status, or decode failure.
pub async fn fetch_provinces() -> Result<Vec<Province>, ApiError> {
    get_json("/provincias-ciudades", None).await
}

/// Fetch categories from `GET /categorias`.
///
/// # Errors
///
/// Any transport, status, or decode failure.
pub async fn fetch_categories() -> Result<Vec<Category>, ApiError> {
    get_json("/categorias", None).await
}

/// Fetch the cities of a province.
///
/// # Errors
///
/// Any transport, status, or decode failure.
pub async fn fetch_cities(province_id: i64) -> Result<Vec<City>, ApiError> {
    get_json(&cities_path(province_id), None).await
}

/// Fetch the subcategories of a category.
///
/// # Errors
///
/// Any transport, status, or decode failure.
pub async fn fetch_subcategories(category_id: i64) -> Result<Vec<SubCategory>, ApiError> {
    get_json(&subcategories_path(category_id), None).await
}

/// Publish a new listing via multipart `POST /publications`.
///
/// # Errors
///
/// Any transport or status failure.
pub async fn create_publication(body: &Multipart) -> Result<(), ApiError> {
    send_multipart_unit(Method::Post, "/publications", body).await
}

/// Update a listing via multipart `PUT /publications/{id}`.
///
/// # Errors
///
/// Any transport, status, or decode failure.
pub async fn update_publication(id: i64, body: &Multipart) -> Result<Publication, ApiError> {
    send_multipart(Method::Put, &publication_path(id), body).await
}

/// Remove a listing via `DELETE /publications/{id}`.
///
/// # Errors
///
/// Any transport or status failure.
pub async fn delete_publication(id: i64) -> Result<(), ApiError> {
    delete(&publication_path(id), None).await
}

/// Fetch a seller's completed sales.
///
/// # Errors
///
/// Any transport, status, or decode failure.
pub async fn fetch_seller_sales(seller_id: i64) -> Result<Vec<Order>, ApiError> {
    let body: SellerSales = get_json(&seller_sales_path(seller_id), None).await?;
    Ok(body.sails)
}

/// Fetch a buyer's orders.
///
/// # Errors
///
/// Any transport, status, or decode failure.
pub async fn fetch_buyer_orders(user_id: i64) -> Result<Vec<Order>, ApiError> {
    get_json(&buyer_orders_path(user_id), None).await
}

// =============================================================================
// Notifications
// =============================================================================

/// Fetch pending notifications for a user.
///
/// # Errors
///
/// Any transport, status, or decode failure.
pub async fn fetch_notifications(user_id: i64) -> Result<Vec<Notification>, ApiError> {
    let body: NotificationList = get_json(&notifications_path(user_id), None).await?;
    Ok(body.notifications)
}

/// Delete a notification. The caller inspects [`Ack::success`].
///
/// # Errors
///
/// Any transport, status, or decode failure.
pub async fn delete_notification(id: i64) -> Result<Ack, ApiError> {
    delete_with_ack(&notification_path(id)).await
}

// =============================================================================
// Admin
// =============================================================================

/// List all buyer accounts.
///
/// # Errors
///
/// Any transport, status, or decode failure.
pub async fn fetch_admin_users(token: &str) -> Result<Vec<AccountRow>, ApiError> {
    get_json("/admin/usuarios", Some(token)).await
}

/// Delete a buyer account and its publications.
///
/// # Errors
///
/// Any transport or status failure.
pub async fn delete_admin_user(token: &str, id: i64) -> Result<(), ApiError> {
    delete(&admin_user_path(id), Some(token)).await
}

/// Fetch one page of publications for moderation.
///
/// # Errors
///
/// Any transport, status, or decode failure.
pub async fn fetch_admin_publications(token: &str, page: u32, limit: u32) -> Result<PublicationPage, ApiError> {
    get_json(&admin_publications_path(page, limit), Some(token)).await
}

/// Delete a publication as admin.
///
/// # Errors
///
/// Any transport or status failure.
pub async fn delete_admin_publication(token: &str, id: i64) -> Result<(), ApiError> {
    delete(&admin_publication_path(id), Some(token)).await
}

/// List all seller accounts.
///
/// # Errors
///
/// Any transport, status, or decode failure.
pub async fn fetch_admin_sellers(token: &str) -> Result<Vec<AccountRow>, ApiError> {
    get_json("/admin/sellers", Some(token)).await
}

/// Revoke a seller profile (the buyer account stays).
///
/// # Errors
///
/// Any transport or status failure.
pub async fn delete_admin_seller(token: &str, id: i64) -> Result<(), ApiError> {
    delete(&admin_seller_path(id), Some(token)).await
}
