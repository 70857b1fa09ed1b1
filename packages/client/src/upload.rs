//! Multipart upload bodies.
//!
//! An [`Upload`] is a plain description of a `multipart/form-data` body (text
//! fields plus file parts). It becomes a [`reqwest::multipart::Form`] only
//! when the request is sent, so uploads can be built and inspected without a
//! runtime.

use std::path::Path;

use paintshop::ApiError;
use reqwest::multipart::{Form, Part};

/// One file in a multipart body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    pub field: String,
    pub file_name: String,
    /// MIME type; left for the server to sniff when `None`.
    pub mime: Option<String>,
    pub bytes: Vec<u8>,
}

impl FilePart {
    pub fn new(field: impl Into<String>, file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            field: field.into(),
            file_name: file_name.into(),
            mime: None,
            bytes,
        }
    }

    pub fn with_mime(mut self, mime: impl Into<String>) -> Self {
        self.mime = Some(mime.into());
        self
    }

    /// Read a file from disk. The MIME type is guessed from the extension.
    pub async fn from_path(field: impl Into<String>, path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        let mut part = Self::new(field, file_name, bytes);
        part.mime = guess_mime(path).map(str::to_string);
        Ok(part)
    }
}

/// A multipart body: text fields and files, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Upload {
    pub fields: Vec<(String, String)>,
    pub files: Vec<FilePart>,
}

impl Upload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    pub fn file(mut self, part: FilePart) -> Self {
        self.files.push(part);
        self
    }

    /// Form for `POST /admin/images/upload`.
    pub fn product_image(product_id: u64, image: FilePart, is_primary: bool) -> Self {
        let image = FilePart {
            field: "image".to_string(),
            ..image
        };
        Self::new()
            .text("product_id", product_id.to_string())
            .file(image)
            .text("is_primary", if is_primary { "1" } else { "0" })
    }

    pub(crate) fn into_form(self) -> Result<Form, ApiError> {
        let mut form = Form::new();
        for (name, value) in self.fields {
            form = form.text(name, value);
        }
        for file in self.files {
            let mut part = Part::bytes(file.bytes).file_name(file.file_name);
            if let Some(mime) = &file.mime {
                part = part.mime_str(mime).map_err(|_| ApiError::network())?;
            }
            form = form.part(file.field, part);
        }
        Ok(form)
    }
}

fn guess_mime(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "svg" => Some("image/svg+xml"),
        "mp4" => Some("video/mp4"),
        "webm" => Some("video/webm"),
        "mov" => Some("video/quicktime"),
        _ => None,
    }
}
