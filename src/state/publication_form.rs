//! Seller-side publication drafts: create form and inline editor.
//!
//! SYSTEM CONTEXT
//! ==============
//! `pages::seller` binds inputs to a [`PublicationDraft`] (new listing) or a
//! [`PublicationEdit`] (existing listing). Validation, the location/category
//! cascades and the multipart field layout live here so they test natively;
//! the page only moves values in and out and performs the request.

#[cfg(test)]
#[path = "publication_form_test.rs"]
mod publication_form_test;

use std::collections::BTreeMap;

use crate::config::MAX_IMAGE_BYTES;
use crate::error::ImageError;
use crate::net::api::{FilePart, Multipart};
use crate::net::types::Publication;
use crate::state::filters::Condition;

// =============================================================================
// Images
// =============================================================================

/// What validation needs to know about a picked file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageMeta {
    pub content_type: String,
    pub size: u64,
}

/// Accept `image/*` files up to [`MAX_IMAGE_BYTES`].
///
/// # Errors
///
/// The reason the file is rejected.
pub fn validate_image(meta: &ImageMeta) -> Result<(), ImageError> {
    if !meta.content_type.starts_with("image/") {
        return Err(ImageError::NotAnImage);
    }
    if meta.size > MAX_IMAGE_BYTES {
        return Err(ImageError::TooLarge { max_mb: MAX_IMAGE_BYTES / (1024 * 1024) });
    }
    Ok(())
}

/// A file chosen through an `<input type="file">`.
#[derive(Clone, Debug)]
pub struct PickedImage {
    pub meta: ImageMeta,
    file: FilePart,
}

impl PickedImage {
    pub fn new(meta: ImageMeta, file: FilePart) -> Self {
        Self { meta, file }
    }

    #[cfg(feature = "csr")]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_file(file: web_sys::File) -> Self {
        let meta = ImageMeta { content_type: file.type_(), size: file.size() as u64 };
        Self { meta, file }
    }

    #[cfg(feature = "csr")]
    pub fn file(&self) -> &web_sys::File {
        &self.file
    }

    #[allow(clippy::clone_on_copy)]
    fn attach(&self, body: &mut Multipart, name: &'static str) {
        body.file(name, self.file.clone());
    }
}

// =============================================================================
// New publication
// =============================================================================

/// Inputs of the "Publicar instrumento" form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DraftField {
    Name,
    Brand,
    Price,
    Condition,
    Province,
    Category,
    SubCategory,
    Description,
    Image,
}

/// Per-field validation messages, empty when the draft is valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<DraftField, String>);

impl FieldErrors {
    fn insert(&mut self, field: DraftField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: DraftField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Toast shown when submission is blocked by validation.
pub const MISSING_FIELDS_MESSAGE: &str = "¡Completá los campos requeridos!";

#[derive(Clone, Debug, Default)]
pub struct PublicationDraft {
    pub name: String,
    pub brand: String,
    pub price: String,
    pub condition: Option<Condition>,
    province_id: Option<i64>,
    pub city_id: Option<i64>,
    category_id: Option<i64>,
    pub sub_category_id: Option<i64>,
    pub description: String,
    pub image: Option<PickedImage>,
}

impl PublicationDraft {
    pub fn province_id(&self) -> Option<i64> {
        self.province_id
    }

    pub fn category_id(&self) -> Option<i64> {
        self.category_id
    }

    /// Change province and drop the city. The caller reloads the city list.
    pub fn set_province(&mut self, province_id: Option<i64>) {
        self.province_id = province_id;
        self.city_id = None;
    }

    /// Change category and drop the subcategory. The caller reloads subcategories.
    pub fn set_category(&mut self, category_id: Option<i64>) {
        self.category_id = category_id;
        self.sub_category_id = None;
    }

    fn parsed_price(&self) -> Option<f64> {
        match self.price.trim().parse::<f64>() {
            Ok(price) if price.is_finite() => Some(price),
            _ => None,
        }
    }

    /// Check every required input.
    ///
    /// # Errors
    ///
    /// One message per invalid field.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        if self.name.trim().is_empty() {
            errors.insert(DraftField::Name, "El nombre del instrumento es obligatorio.");
        }
        if self.brand.trim().is_empty() {
            errors.insert(DraftField::Brand, "La marca es obligatoria.");
        }
        if self.parsed_price().is_none() {
            errors.insert(DraftField::Price, "El precio debe ser un número válido.");
        }
        if self.condition.is_none() {
            errors.insert(DraftField::Condition, "Selecciona la condición del instrumento.");
        }
        if self.province_id.is_none() {
            errors.insert(DraftField::Province, "Selecciona una provincia.");
        }
        if self.category_id.is_none() {
            errors.insert(DraftField::Category, "Selecciona la categoría.");
        }
        if self.sub_category_id.is_none() {
            errors.insert(DraftField::SubCategory, "Selecciona la subcategoría.");
        }
        if self.description.trim().is_empty() {
            errors.insert(DraftField::Description, "La descripción es obligatoria.");
        }
        match &self.image {
            None => errors.insert(DraftField::Image, "La imagen es obligatoria."),
            Some(image) => {
                if let Err(e) = validate_image(&image.meta) {
                    errors.insert(DraftField::Image, e.to_string());
                }
            }
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Multipart body for `POST /publications`.
    pub fn to_multipart(&self, seller_id: i64) -> Multipart {
        let mut body = Multipart::default();
        body.text("name", self.name.trim());
        body.text("brand", self.brand.trim());
        body.text("price", self.parsed_price().map(|p| p.to_string()).unwrap_or_default());
        body.text("condition", self.condition.map(Condition::as_str).unwrap_or_default());
        body.text("provinceId", opt_id(self.province_id));
        body.text("cityId", opt_id(self.city_id));
        body.text("categoryId", opt_id(self.category_id));
        body.text("subCategoryId", opt_id(self.sub_category_id));
        body.text("description", self.description.trim());
        body.text("sellerId", seller_id.to_string());
        if let Some(image) = &self.image {
            image.attach(&mut body, "image");
        }
        body
    }

    /// Confirmation shown after a successful publish.
    pub fn success_message(&self) -> String {
        format!("¡{} publicada con éxito!", self.name.trim())
    }
}

// =============================================================================
// Existing publication
// =============================================================================

/// Inline editor state for one of the seller's listings.
///
/// Every field is free text; only non-empty values are sent on save.
#[derive(Clone, Debug, Default)]
pub struct PublicationEdit {
    pub id: i64,
    pub title: String,
    pub brand: String,
    pub price: String,
    pub state: String,
    pub description: String,
    pub sku: String,
    pub category_id: String,
    pub sub_category_id: String,
    pub city_id: String,
    pub seller_id: String,
    pub image_url: String,
    /// Replacement image; when absent the current URL is echoed back.
    pub image: Option<PickedImage>,
}

/// Whether the editor moved to another listing, or closed, since it last
/// showed `previous`. The first observation (`None`) is not a switch.
///
/// A preview made for one listing must not survive into the next.
pub fn editor_switched(previous: Option<Option<i64>>, current: Option<i64>) -> bool {
    previous.is_some_and(|prev| prev != current)
}

fn opt_id(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

impl PublicationEdit {
    pub fn from_publication(publication: &Publication) -> Self {
        Self {
            id: publication.id,
            title: publication.title.clone(),
            brand: publication.brand.clone().unwrap_or_default(),
            price: publication.price.map(|p| p.to_string()).unwrap_or_default(),
            state: publication.state.clone(),
            description: publication.description.clone().unwrap_or_default(),
            sku: publication.sku.clone().unwrap_or_default(),
            category_id: opt_id(publication.category_key()),
            sub_category_id: opt_id(publication.sub_category_key()),
            city_id: opt_id(publication.city_key()),
            seller_id: opt_id(publication.seller_id),
            image_url: publication.image_url.clone().unwrap_or_default(),
            image: None,
        }
    }

    /// Offer a replacement image.
    ///
    /// # Errors
    ///
    /// A rejected file clears any previous replacement.
    pub fn pick_image(&mut self, image: PickedImage) -> Result<(), ImageError> {
        match validate_image(&image.meta) {
            Ok(()) => {
                self.image = Some(image);
                Ok(())
            }
            Err(e) => {
                self.image = None;
                Err(e)
            }
        }
    }

    /// Multipart body for `PUT /publications/{id}`.
    pub fn to_multipart(&self) -> Multipart {
        let mut body = Multipart::default();
        body.text_if_set("Title", Some(&self.title));
        body.text_if_set("Brand", Some(&self.brand));
        if let Ok(price) = self.price.trim().parse::<f64>() {
            if price.is_finite() {
                body.text("Price", price.to_string());
            }
        }
        body.text_if_set("State", Some(&self.state));
        body.text_if_set("DescriptionProduct", Some(&self.description));
        body.text_if_set("Sku", Some(&self.sku));
        body.text_if_set("ID_Category", Some(&self.category_id));
        body.text_if_set("ID_SubCategory", Some(&self.sub_category_id));
        body.text_if_set("ID_City", Some(&self.city_id));
        body.text_if_set("ID_Sellers", Some(&self.seller_id));
        match &self.image {
            Some(image) => image.attach(&mut body, "Image"),
            None => body.text_if_set("ImageUrl", Some(&self.image_url)),
        }
        body
    }
}
