//! Document conversion builder
//!
//! Document conversion lives under the `/document/` sub-path. Only two
//! operations exist: target format and page selection (for image targets).

use super::Transformation;

/// Document conversion target format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Doc,
    Docx,
    Xls,
    Xlsx,
    Odt,
    Ods,
    Rtf,
    Txt,
    Pdf,
    Jpg,
    Png,
}

impl DocumentFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentFormat::Doc => "doc",
            DocumentFormat::Docx => "docx",
            DocumentFormat::Xls => "xls",
            DocumentFormat::Xlsx => "xlsx",
            DocumentFormat::Odt => "odt",
            DocumentFormat::Ods => "ods",
            DocumentFormat::Rtf => "rtf",
            DocumentFormat::Txt => "txt",
            DocumentFormat::Pdf => "pdf",
            DocumentFormat::Jpg => "jpg",
            DocumentFormat::Png => "png",
        }
    }
}

/// Fluent builder for document conversion CDN paths.
///
/// # Example
///
/// ```rust
/// use upcdn_core::transform::document::{DocumentFormat, DocumentTransformation};
///
/// let path = DocumentTransformation::new()
///     .format(DocumentFormat::Pdf)
///     .path("52da3bfc-7cd8-4861-8b05-126fef7a6994");
/// assert_eq!(
///     path,
///     "52da3bfc-7cd8-4861-8b05-126fef7a6994/document/-/format/pdf/"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentTransformation {
    inner: Transformation,
}

impl DocumentTransformation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Escape hatch: append a raw operation not modeled as a typed method.
    pub fn set(mut self, name: &str, params: &[&str]) -> Self {
        self.inner = self.inner.set(name, params);
        self
    }

    pub fn format(mut self, format: DocumentFormat) -> Self {
        self.inner = self.inner.set("format", &[format.as_str()]);
        self
    }

    /// Select one page; meaningful for image target formats.
    pub fn page(mut self, number: u32) -> Self {
        self.inner = self.inner.set_owned("page", vec![number.to_string()]);
        self
    }

    /// Rendered operation chain without the identifier or sub-path.
    pub fn effects(&self) -> String {
        self.inner.effects()
    }

    /// Render the relative CDN path under the `document/` sub-path.
    pub fn path(&self, file_id: &str) -> String {
        let effects = self.effects();
        if effects.is_empty() {
            format!("{}/document/", file_id)
        } else {
            format!("{}/document/-/{}", file_id, effects)
        }
    }
}
