use std::path::Path;

use mime::Mime;
use reqwest::multipart::Part;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("'{content_type}' is not a valid content type")]
pub struct InvalidContentType {
    pub content_type: String,
}

/// A binary payload sent as one multipart form field.
///
/// The content type is parsed on construction, so an upload that exists can
/// always be encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    file_name: String,
    content_type: Mime,
    bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(
        file_name: impl Into<String>,
        content_type: &str,
        bytes: impl Into<Vec<u8>>,
    ) -> Result<Self, InvalidContentType> {
        let content_type = content_type.parse::<Mime>().map_err(|_| InvalidContentType {
            content_type: content_type.to_string(),
        })?;
        Ok(Self::with_mime(file_name, content_type, bytes))
    }

    pub fn with_mime(
        file_name: impl Into<String>,
        content_type: Mime,
        bytes: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type,
            bytes: bytes.into(),
        }
    }

    /// Read a file from disk, guessing the content type from its extension
    pub async fn from_path(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        let content_type = content_type_for(path)
            .parse::<Mime>()
            .unwrap_or(mime::APPLICATION_OCTET_STREAM);

        Ok(Self::with_mime(file_name, content_type, bytes))
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn content_type(&self) -> &Mime {
        &self.content_type
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    // `Mime` always renders to a string `mime_str` accepts.
    pub(crate) fn into_part(self) -> reqwest::Result<Part> {
        Part::bytes(self.bytes)
            .file_name(self.file_name)
            .mime_str(self.content_type.as_ref())
    }
}

/// Image and audio types the backend accepts, by extension
pub fn content_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "webp" => "image/webp",
        "gif" => "image/gif",
        "wav" => "audio/wav",
        "mp3" => "audio/mpeg",
        "m4a" => "audio/mp4",
        "ogg" => "audio/ogg",
        "webm" => "audio/webm",
        "flac" => "audio/flac",
        _ => "application/octet-stream",
    }
}
