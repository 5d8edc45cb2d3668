//! Scoped `blob:` URLs for local image previews.
//!
//! The browser keeps the underlying file alive until the URL is revoked, so
//! the URL is owned by an [`ObjectUrl`] and revoked when it is dropped.

/// A `URL.createObjectURL` result, revoked on drop.
#[derive(Debug)]
pub struct ObjectUrl {
    url: String,
}

impl ObjectUrl {
    /// Create a preview URL for `file`.
    pub fn for_file(file: &web_sys::File) -> Option<Self> {
        match web_sys::Url::create_object_url_with_blob(file) {
            Ok(url) => Some(Self { url }),
            Err(e) => {
                log::warn!("createObjectURL failed: {e:?}");
                None
            }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.url
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        if let Err(e) = web_sys::Url::revoke_object_url(&self.url) {
            log::warn!("revokeObjectURL failed: {e:?}");
        }
    }
}
