//! CDN transformation URL builder
//!
//! Provides a fluent API for composing chained processing operations into a
//! canonical CDN path in the `/-/` separated format, e.g.
//! `{uuid}/-/resize/500x300/-/format/webp/`.
//!
//! The generic [`Transformation`] is a dumb accumulator: it appends
//! operations in call order and never validates names or parameters. The
//! typed layers ([`image::ImageTransformation`],
//! [`video::VideoTransformation`], [`document::DocumentTransformation`])
//! validate argument shape and delegate here. Unknown or not-yet-modeled
//! service operations remain usable through [`Transformation::set`].

pub mod document;
pub mod escape;
pub mod image;
pub mod video;

/// One named processing step with ordered string parameters.
///
/// Rendered as `name` alone when there are no parameters, otherwise
/// `name/p1/p2/.../pn`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    name: String,
    params: Vec<String>,
}

impl Operation {
    pub fn new(name: impl Into<String>, params: Vec<String>) -> Self {
        Operation {
            name: name.into(),
            params,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn params(&self) -> &[String] {
        &self.params
    }

    fn render(&self) -> String {
        if self.params.is_empty() {
            self.name.clone()
        } else {
            format!("{}/{}", self.name, self.params.join("/"))
        }
    }
}

/// Ordered sequence of operations, rendered on demand.
///
/// # Example
///
/// ```rust
/// use upcdn_core::Transformation;
///
/// let path = Transformation::new()
///     .set("resize", &["500x300"])
///     .set("format", &["webp"])
///     .path("52da3bfc-7cd8-4861-8b05-126fef7a6994");
/// assert_eq!(
///     path,
///     "52da3bfc-7cd8-4861-8b05-126fef7a6994/-/resize/500x300/-/format/webp/"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transformation {
    ops: Vec<Operation>,
}

impl Transformation {
    /// Create an empty transformation
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a transformation from a previously rendered effects string.
    ///
    /// The trailing slash is stripped and the remainder is stored verbatim
    /// as a single raw prefix operation, so further `set` calls compose on
    /// top of it.
    pub fn from_effects(raw: &str) -> Self {
        let raw = raw.strip_suffix('/').unwrap_or(raw);
        if raw.is_empty() {
            return Self::default();
        }
        Transformation {
            ops: vec![Operation::new(raw, Vec::new())],
        }
    }

    /// Seed a transformation from another transformation's rendered effect.
    pub fn based_on(other: &Transformation) -> Self {
        Self::from_effects(&other.effects())
    }

    /// Append one operation with raw string parameters.
    ///
    /// No validation is performed; the caller (typically a typed convenience
    /// method) is responsible for parameter order and escaping. This is the
    /// escape hatch for service operations without a typed method.
    pub fn set(mut self, name: &str, params: &[&str]) -> Self {
        self.ops.push(Operation::new(
            name,
            params.iter().map(|p| p.to_string()).collect(),
        ));
        self
    }

    /// Append one operation with owned parameters.
    pub(crate) fn set_owned(mut self, name: &str, params: Vec<String>) -> Self {
        self.ops.push(Operation::new(name, params));
        self
    }

    /// Whether any operations have been accumulated
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// The accumulated operations, in call order
    pub fn operations(&self) -> &[Operation] {
        &self.ops
    }

    /// Render the operation chain.
    ///
    /// Operations are joined with `/-/` and a trailing `/` is appended;
    /// an empty transformation renders as the empty string.
    pub fn effects(&self) -> String {
        if self.ops.is_empty() {
            return String::new();
        }
        let joined = self
            .ops
            .iter()
            .map(Operation::render)
            .collect::<Vec<_>>()
            .join("/-/");
        format!("{}/", joined)
    }

    /// Render the relative CDN path for a file identifier.
    pub fn path(&self, file_id: &str) -> String {
        let effects = self.effects();
        if effects.is_empty() {
            format!("{}/", file_id)
        } else {
            format!("{}/-/{}", file_id, effects)
        }
    }
}
