//! Multipart submissions
//!
//! Forms describe their submission as a [`MultipartPayload`] so the field
//! layout can be inspected before it is turned into a `reqwest` form.

use reqwest::multipart::{Form, Part};

use super::ApiError;

/// A file picked by the operator, already read into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    /// Content type is derived from the file extension.
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let name = name.into();
        let content_type = content_type_for(&name).to_string();
        Self {
            name,
            content_type,
            bytes,
        }
    }
}

fn content_type_for(name: &str) -> &'static str {
    let ext = name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "pdf" => "application/pdf",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartValue {
    Text(String),
    File(FileUpload),
}

/// Ordered list of named parts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipartPayload {
    parts: Vec<(String, PartValue)>,
}

impl MultipartPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.parts.push((name.into(), PartValue::Text(value.into())));
        self
    }

    pub fn file(&mut self, name: impl Into<String>, upload: FileUpload) -> &mut Self {
        self.parts.push((name.into(), PartValue::File(upload)));
        self
    }

    pub fn names(&self) -> Vec<&str> {
        self.parts.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&PartValue> {
        self.parts
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value)
    }

    pub fn text_value(&self, name: &str) -> Option<&str> {
        match self.get(name)? {
            PartValue::Text(value) => Some(value),
            PartValue::File(_) => None,
        }
    }

    pub fn into_form(self) -> Result<Form, ApiError> {
        let mut form = Form::new();
        for (name, value) in self.parts {
            form = match value {
                PartValue::Text(text) => form.text(name, text),
                PartValue::File(upload) => {
                    let part = Part::bytes(upload.bytes)
                        .file_name(upload.name)
                        .mime_str(&upload.content_type)
                        .map_err(|e| ApiError::Validation(format!("Archivo inválido: {e}")))?;
                    form.part(name, part)
                }
            };
        }
        Ok(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_from_extension() {
        assert_eq!(FileUpload::new("carta.PDF", vec![]).content_type, "application/pdf");
        assert_eq!(FileUpload::new("logo.jpeg", vec![]).content_type, "image/jpeg");
        assert_eq!(FileUpload::new("sin-extension", vec![]).content_type, "application/octet-stream");
    }

    #[test]
    fn test_payload_preserves_order() {
        let mut payload = MultipartPayload::new();
        payload
            .text("nombre", "Cámara")
            .file("logo", FileUpload::new("logo.png", vec![1, 2]))
            .text("region", "Maule");

        assert_eq!(payload.names(), vec!["nombre", "logo", "region"]);
        assert_eq!(payload.text_value("region"), Some("Maule"));
        assert_eq!(payload.text_value("logo"), None);
        assert!(payload.into_form().is_ok());
    }
}
