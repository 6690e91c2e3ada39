//! Video transformation builder
//!
//! Video processing lives under the `/video/` sub-path and mostly follows
//! the generic grammar, except thumbnails: the service expects a
//! `~`-delimited count (`thumbs~N`), restored by a post-render substitution.

use super::Transformation;

/// Output video container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoFormat {
    Mp4,
    Webm,
    Ogg,
}

impl VideoFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            VideoFormat::Mp4 => "mp4",
            VideoFormat::Webm => "webm",
            VideoFormat::Ogg => "ogg",
        }
    }
}

/// Encoding quality preset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoQuality {
    Normal,
    Better,
    Best,
    Lighter,
    Lightest,
}

impl VideoQuality {
    pub fn as_str(&self) -> &'static str {
        match self {
            VideoQuality::Normal => "normal",
            VideoQuality::Better => "better",
            VideoQuality::Best => "best",
            VideoQuality::Lighter => "lighter",
            VideoQuality::Lightest => "lightest",
        }
    }
}

/// Frame sizing behavior for `size`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeMode {
    PreserveRatio,
    ChangeRatio,
    ScaleCrop,
    AddPadding,
}

impl ResizeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResizeMode::PreserveRatio => "preserve_ratio",
            ResizeMode::ChangeRatio => "change_ratio",
            ResizeMode::ScaleCrop => "scale_crop",
            ResizeMode::AddPadding => "add_padding",
        }
    }
}

/// Fluent builder for video transformation CDN paths.
///
/// # Example
///
/// ```rust
/// use upcdn_core::transform::video::{VideoFormat, VideoTransformation};
///
/// let path = VideoTransformation::new()
///     .format(VideoFormat::Mp4)
///     .thumbs(10)
///     .path("52da3bfc-7cd8-4861-8b05-126fef7a6994");
/// assert_eq!(
///     path,
///     "52da3bfc-7cd8-4861-8b05-126fef7a6994/video/-/format/mp4/-/thumbs~10/"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoTransformation {
    inner: Transformation,
}

impl VideoTransformation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from a previously rendered effects string.
    pub fn from_effects(raw: &str) -> Self {
        VideoTransformation {
            inner: Transformation::from_effects(raw),
        }
    }

    /// Escape hatch: append a raw operation not modeled as a typed method.
    pub fn set(mut self, name: &str, params: &[&str]) -> Self {
        self.inner = self.inner.set(name, params);
        self
    }

    /// Resize the frame; either side may be omitted to preserve ratio.
    pub fn size(
        mut self,
        width: Option<u32>,
        height: Option<u32>,
        resize_mode: Option<ResizeMode>,
    ) -> Self {
        let dims = format!(
            "{}x{}",
            width.map(|v| v.to_string()).unwrap_or_default(),
            height.map(|v| v.to_string()).unwrap_or_default()
        );
        let mut params = vec![dims];
        if let Some(mode) = resize_mode {
            params.push(mode.as_str().to_string());
        }
        self.inner = self.inner.set_owned("size", params);
        self
    }

    pub fn quality(mut self, quality: VideoQuality) -> Self {
        self.inner = self.inner.set("quality", &[quality.as_str()]);
        self
    }

    pub fn format(mut self, format: VideoFormat) -> Self {
        self.inner = self.inner.set("format", &[format.as_str()]);
        self
    }

    /// Cut a fragment: start time (`HHH:MM:SS.sss`) and length, where
    /// length may be the literal `end`.
    pub fn cut(mut self, start_time: &str, length: &str) -> Self {
        self.inner = self.inner.set("cut", &[start_time, length]);
        self
    }

    /// Generate N thumbnails. The `~` delimiter is restored in `path()`.
    pub fn thumbs(mut self, amount: u32) -> Self {
        self.inner = self.inner.set_owned("thumbs", vec![amount.to_string()]);
        self
    }

    /// Rendered operation chain without the identifier or sub-path.
    pub fn effects(&self) -> String {
        self.inner.effects()
    }

    /// Render the relative CDN path under the `video/` sub-path.
    ///
    /// The thumbnail count uses a `~` delimiter on the wire, so `thumbs/`
    /// is collapsed to `thumbs~` after generic rendering.
    pub fn path(&self, file_id: &str) -> String {
        let effects = self.effects();
        let path = if effects.is_empty() {
            format!("{}/video/", file_id)
        } else {
            format!("{}/video/-/{}", file_id, effects)
        };
        path.replace("thumbs/", "thumbs~")
    }
}
