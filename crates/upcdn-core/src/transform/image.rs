//! Image transformation builder
//!
//! Typed convenience layer over the generic [`Transformation`] for the
//! service's image processing operations. Closed enums carry the exact wire
//! strings; methods validate argument shape (which optional parameters
//! combine) and delegate to the generic accumulator. Values themselves are
//! never range-checked — the service validates the final URL.

use super::escape::{escape_percent, escape_text};
use super::Transformation;

/// Output image format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
    Webp,
    Auto,
}

impl ImageFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "jpeg",
            ImageFormat::Png => "png",
            ImageFormat::Webp => "webp",
            ImageFormat::Auto => "auto",
        }
    }
}

/// Compression quality preset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageQuality {
    Normal,
    Better,
    Best,
    Lighter,
    Lightest,
    Smart,
    SmartRetina,
}

impl ImageQuality {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageQuality::Normal => "normal",
            ImageQuality::Better => "better",
            ImageQuality::Best => "best",
            ImageQuality::Lighter => "lighter",
            ImageQuality::Lightest => "lightest",
            ImageQuality::Smart => "smart",
            ImageQuality::SmartRetina => "smart_retina",
        }
    }
}

/// Named crop alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CropAlignment {
    Top,
    Bottom,
    Left,
    Right,
    Center,
}

impl CropAlignment {
    pub fn as_str(&self) -> &'static str {
        match self {
            CropAlignment::Top => "top",
            CropAlignment::Bottom => "bottom",
            CropAlignment::Left => "left",
            CropAlignment::Right => "right",
            CropAlignment::Center => "center",
        }
    }
}

/// Content-aware scale_crop mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleCropMode {
    Smart,
    SmartFacesObjects,
    SmartFacesPoints,
    SmartObjectsFaces,
    SmartObjectsPoints,
    SmartPointsFaces,
    SmartPointsObjects,
    SmartFaces,
    SmartObjects,
    SmartPoints,
}

impl ScaleCropMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScaleCropMode::Smart => "smart",
            ScaleCropMode::SmartFacesObjects => "smart_faces_objects",
            ScaleCropMode::SmartFacesPoints => "smart_faces_points",
            ScaleCropMode::SmartObjectsFaces => "smart_objects_faces",
            ScaleCropMode::SmartObjectsPoints => "smart_objects_points",
            ScaleCropMode::SmartPointsFaces => "smart_points_faces",
            ScaleCropMode::SmartPointsObjects => "smart_points_objects",
            ScaleCropMode::SmartFaces => "smart_faces",
            ScaleCropMode::SmartObjects => "smart_objects",
            ScaleCropMode::SmartPoints => "smart_points",
        }
    }
}

/// Resize stretch behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StretchMode {
    On,
    Off,
    Fill,
}

impl StretchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            StretchMode::On => "on",
            StretchMode::Off => "off",
            StretchMode::Fill => "fill",
        }
    }
}

/// sRGB conversion strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SrgbConversion {
    Fast,
    Icc,
    KeepProfile,
}

impl SrgbConversion {
    pub fn as_str(&self) -> &'static str {
        match self {
            SrgbConversion::Fast => "fast",
            SrgbConversion::Icc => "icc",
            SrgbConversion::KeepProfile => "keep_profile",
        }
    }
}

/// Metadata stripping policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripMeta {
    All,
    None,
    Sensitive,
}

impl StripMeta {
    pub fn as_str(&self) -> &'static str {
        match self {
            StripMeta::All => "all",
            StripMeta::None => "none",
            StripMeta::Sensitive => "sensitive",
        }
    }
}

/// Color adjustment operations sharing the `name/value` shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorAdjustment {
    Brightness,
    Exposure,
    Gamma,
    Contrast,
    Saturation,
    Vibrance,
    Warmth,
}

impl ColorAdjustment {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorAdjustment::Brightness => "brightness",
            ColorAdjustment::Exposure => "exposure",
            ColorAdjustment::Gamma => "gamma",
            ColorAdjustment::Contrast => "contrast",
            ColorAdjustment::Saturation => "saturation",
            ColorAdjustment::Vibrance => "vibrance",
            ColorAdjustment::Warmth => "warmth",
        }
    }
}

/// Named photo filter catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFilter {
    Adaris,
    Briaril,
    Calarel,
    Carris,
    Cynarel,
    Cyren,
    Elmet,
    Elonni,
    Enzana,
    Erydark,
    Fenralan,
    Ferand,
    Galen,
    Gavin,
    Gethriel,
    Iorill,
    Iothari,
    Iselva,
    Jadis,
    Lavra,
    Misiara,
    Namala,
    Nerion,
    Nethari,
    Pamaya,
    Sarnar,
    Sedis,
    Sewen,
    Sorahel,
    Sorlen,
    Tarian,
    Thellassan,
    Varriel,
    Varven,
    Vevera,
    Virkas,
    Yedis,
    Yllara,
    Zatvel,
    Zevcen,
}

impl ImageFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageFilter::Adaris => "adaris",
            ImageFilter::Briaril => "briaril",
            ImageFilter::Calarel => "calarel",
            ImageFilter::Carris => "carris",
            ImageFilter::Cynarel => "cynarel",
            ImageFilter::Cyren => "cyren",
            ImageFilter::Elmet => "elmet",
            ImageFilter::Elonni => "elonni",
            ImageFilter::Enzana => "enzana",
            ImageFilter::Erydark => "erydark",
            ImageFilter::Fenralan => "fenralan",
            ImageFilter::Ferand => "ferand",
            ImageFilter::Galen => "galen",
            ImageFilter::Gavin => "gavin",
            ImageFilter::Gethriel => "gethriel",
            ImageFilter::Iorill => "iorill",
            ImageFilter::Iothari => "iothari",
            ImageFilter::Iselva => "iselva",
            ImageFilter::Jadis => "jadis",
            ImageFilter::Lavra => "lavra",
            ImageFilter::Misiara => "misiara",
            ImageFilter::Namala => "namala",
            ImageFilter::Nerion => "nerion",
            ImageFilter::Nethari => "nethari",
            ImageFilter::Pamaya => "pamaya",
            ImageFilter::Sarnar => "sarnar",
            ImageFilter::Sedis => "sedis",
            ImageFilter::Sewen => "sewen",
            ImageFilter::Sorahel => "sorahel",
            ImageFilter::Sorlen => "sorlen",
            ImageFilter::Tarian => "tarian",
            ImageFilter::Thellassan => "thellassan",
            ImageFilter::Varriel => "varriel",
            ImageFilter::Varven => "varven",
            ImageFilter::Vevera => "vevera",
            ImageFilter::Virkas => "virkas",
            ImageFilter::Yedis => "yedis",
            ImageFilter::Yllara => "yllara",
            ImageFilter::Zatvel => "zatvel",
            ImageFilter::Zevcen => "zevcen",
        }
    }
}

/// Keyword position for overlays, text, and rectangles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayPosition {
    Top,
    Bottom,
    Left,
    Right,
    Center,
}

impl OverlayPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            OverlayPosition::Top => "top",
            OverlayPosition::Bottom => "bottom",
            OverlayPosition::Left => "left",
            OverlayPosition::Right => "right",
            OverlayPosition::Center => "center",
        }
    }
}

/// Target container for `gif2video`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gif2VideoFormat {
    Mp4,
    Webm,
}

impl Gif2VideoFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gif2VideoFormat::Mp4 => "mp4",
            Gif2VideoFormat::Webm => "webm",
        }
    }
}

/// Quality preset for `gif2video`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gif2VideoQuality {
    Normal,
    Better,
    Best,
    Lighter,
    Lightest,
}

impl Gif2VideoQuality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gif2VideoQuality::Normal => "normal",
            Gif2VideoQuality::Better => "better",
            Gif2VideoQuality::Best => "best",
            Gif2VideoQuality::Lighter => "lighter",
            Gif2VideoQuality::Lightest => "lightest",
        }
    }
}

/// Operations defined by the service to not use the standard `/-/`
/// delimiter; the marker before them is stripped after generic rendering.
const UNDELIMITED_OPS: [&str; 2] = ["gif2video", "detect_faces"];

/// Render `WxH` from optional dimensions, percent-escaped.
fn dimensions_param(width: Option<&str>, height: Option<&str>) -> String {
    format!(
        "{}x{}",
        escape_percent(width.unwrap_or("")),
        escape_percent(height.unwrap_or(""))
    )
}

/// Shared position/dimension parameter rendering for overlay, text, and
/// rect. The keyword position takes precedence over explicit coordinates
/// when both are present.
fn relative_params(
    dimensions: Option<(&str, &str)>,
    position: Option<OverlayPosition>,
    coordinates: Option<(&str, &str)>,
) -> Vec<String> {
    let mut params = Vec::new();
    if let Some((w, h)) = dimensions {
        params.push(dimensions_param(Some(w), Some(h)));
    }
    if let Some(pos) = position {
        params.push(pos.as_str().to_string());
    } else if let Some((x, y)) = coordinates {
        params.push(format!("{},{}", escape_percent(x), escape_percent(y)));
    }
    params
}

/// Fluent builder for image transformation CDN paths.
///
/// # Example
///
/// ```rust
/// use upcdn_core::transform::image::{ImageFormat, ImageTransformation};
///
/// let path = ImageTransformation::new()
///     .resize(Some(440), None)
///     .format(ImageFormat::Webp)
///     .path("52da3bfc-7cd8-4861-8b05-126fef7a6994");
/// assert_eq!(
///     path,
///     "52da3bfc-7cd8-4861-8b05-126fef7a6994/-/resize/440x/-/format/webp/"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageTransformation {
    inner: Transformation,
}

impl ImageTransformation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from a previously rendered effects string.
    pub fn from_effects(raw: &str) -> Self {
        ImageTransformation {
            inner: Transformation::from_effects(raw),
        }
    }

    /// Escape hatch: append a raw operation not modeled as a typed method.
    pub fn set(mut self, name: &str, params: &[&str]) -> Self {
        self.inner = self.inner.set(name, params);
        self
    }

    /// Downsize to fit into the given box, preserving ratio.
    pub fn preview(mut self, width: Option<u32>, height: Option<u32>) -> Self {
        self.inner = match (width, height) {
            (None, None) => self.inner.set("preview", &[]),
            _ => {
                let w = width.map(|v| v.to_string());
                let h = height.map(|v| v.to_string());
                self.inner.set_owned(
                    "preview",
                    vec![dimensions_param(w.as_deref(), h.as_deref())],
                )
            }
        };
        self
    }

    /// Resize to exact dimensions; either side may be omitted to preserve
    /// the aspect ratio.
    pub fn resize(mut self, width: Option<u32>, height: Option<u32>) -> Self {
        let w = width.map(|v| v.to_string());
        let h = height.map(|v| v.to_string());
        self.inner = self.inner.set_owned(
            "resize",
            vec![dimensions_param(w.as_deref(), h.as_deref())],
        );
        self
    }

    /// Content-aware resize to exact dimensions.
    pub fn smart_resize(mut self, width: u32, height: u32) -> Self {
        self.inner = self
            .inner
            .set_owned("smart_resize", vec![format!("{}x{}", width, height)]);
        self
    }

    /// Crop to dimensions, positioned by alignment keyword or pixel offsets.
    ///
    /// The alignment keyword takes precedence over offsets when both are
    /// supplied. Offsets are only emitted when both are given and non-zero;
    /// a zero offset is treated as absent (observed service-client behavior,
    /// kept as is).
    pub fn crop(
        mut self,
        width: u32,
        height: u32,
        alignment: Option<CropAlignment>,
        offset_x: Option<u32>,
        offset_y: Option<u32>,
    ) -> Self {
        let mut params = vec![format!("{}x{}", width, height)];
        if let Some(alignment) = alignment {
            params.push(alignment.as_str().to_string());
        } else if let (Some(x), Some(y)) = (offset_x, offset_y) {
            if x != 0 && y != 0 {
                params.push(format!("{},{}", x, y));
            }
        }
        self.inner = self.inner.set_owned("crop", params);
        self
    }

    /// Downscale then crop to dimensions, positioned by a content-aware
    /// mode or percent offsets. The mode takes precedence over offsets.
    pub fn scale_crop(
        mut self,
        width: u32,
        height: u32,
        mode: Option<ScaleCropMode>,
        offset_x_percent: Option<&str>,
        offset_y_percent: Option<&str>,
    ) -> Self {
        let mut params = vec![format!("{}x{}", width, height)];
        if let Some(mode) = mode {
            params.push(mode.as_str().to_string());
        } else if let (Some(x), Some(y)) = (offset_x_percent, offset_y_percent) {
            if !x.is_empty() && !y.is_empty() {
                params.push(format!("{},{}", escape_percent(x), escape_percent(y)));
            }
        }
        self.inner = self.inner.set_owned("scale_crop", params);
        self
    }

    /// Background fill color (hex, no `#`) for transparency-losing ops.
    pub fn setfill(mut self, color: &str) -> Self {
        self.inner = self.inner.set("setfill", &[color]);
        self
    }

    pub fn format(mut self, format: ImageFormat) -> Self {
        self.inner = self.inner.set("format", &[format.as_str()]);
        self
    }

    pub fn quality(mut self, quality: ImageQuality) -> Self {
        self.inner = self.inner.set("quality", &[quality.as_str()]);
        self
    }

    /// Progressive JPEG encoding.
    pub fn progressive(mut self, enabled: bool) -> Self {
        self.inner = self
            .inner
            .set("progressive", &[if enabled { "yes" } else { "no" }]);
        self
    }

    pub fn stretch(mut self, mode: StretchMode) -> Self {
        self.inner = self.inner.set("stretch", &[mode.as_str()]);
        self
    }

    /// EXIF-based orientation correction.
    pub fn autorotate(mut self, enabled: bool) -> Self {
        self.inner = self
            .inner
            .set("autorotate", &[if enabled { "yes" } else { "no" }]);
        self
    }

    /// Rotate counterclockwise by the given angle. Any angle is passed
    /// through; the service rejects unsupported values.
    pub fn rotate(mut self, angle: i32) -> Self {
        self.inner = self.inner.set_owned("rotate", vec![angle.to_string()]);
        self
    }

    /// Flip vertically.
    pub fn flip(mut self) -> Self {
        self.inner = self.inner.set("flip", &[]);
        self
    }

    /// Flip horizontally.
    pub fn mirror(mut self) -> Self {
        self.inner = self.inner.set("mirror", &[]);
        self
    }

    pub fn blur(mut self, strength: Option<u32>) -> Self {
        self.inner = match strength {
            Some(s) => self.inner.set_owned("blur", vec![s.to_string()]),
            None => self.inner.set("blur", &[]),
        };
        self
    }

    pub fn sharp(mut self, strength: Option<u32>) -> Self {
        self.inner = match strength {
            Some(s) => self.inner.set_owned("sharp", vec![s.to_string()]),
            None => self.inner.set("sharp", &[]),
        };
        self
    }

    pub fn grayscale(mut self) -> Self {
        self.inner = self.inner.set("grayscale", &[]);
        self
    }

    pub fn invert(mut self) -> Self {
        self.inner = self.inner.set("invert", &[]);
        self
    }

    /// Auto-enhance with optional strength 0-100.
    pub fn enhance(mut self, strength: Option<u8>) -> Self {
        self.inner = match strength {
            Some(s) => self.inner.set_owned("enhance", vec![s.to_string()]),
            None => self.inner.set("enhance", &[]),
        };
        self
    }

    pub fn srgb(mut self, conversion: SrgbConversion) -> Self {
        self.inner = self.inner.set("srgb", &[conversion.as_str()]);
        self
    }

    /// ICC profile size threshold (bytes) for `srgb` handling.
    pub fn max_icc_size(mut self, threshold: u32) -> Self {
        self.inner = self
            .inner
            .set_owned("max_icc_size", vec![threshold.to_string()]);
        self
    }

    /// Apply a named photo filter with optional amount (-100..200).
    pub fn filter(mut self, filter: ImageFilter, amount: Option<i32>) -> Self {
        self.inner = match amount {
            Some(a) => self
                .inner
                .set_owned("filter", vec![filter.as_str().to_string(), a.to_string()]),
            None => self.inner.set("filter", &[filter.as_str()]),
        };
        self
    }

    /// Color adjustment (brightness, gamma, etc.) with optional value.
    pub fn adjust(mut self, adjustment: ColorAdjustment, value: Option<i32>) -> Self {
        self.inner = match value {
            Some(v) => self
                .inner
                .set_owned(adjustment.as_str(), vec![v.to_string()]),
            None => self.inner.set(adjustment.as_str(), &[]),
        };
        self
    }

    /// Zoom to detected objects, zoom amount 1-100.
    pub fn zoom_objects(mut self, zoom: u8) -> Self {
        self.inner = self
            .inner
            .set_owned("zoom_objects", vec![zoom.to_string()]);
        self
    }

    pub fn strip_meta(mut self, policy: StripMeta) -> Self {
        self.inner = self.inner.set("strip_meta", &[policy.as_str()]);
        self
    }

    /// Rounded corners. Radii accept pixel or percent values; each element
    /// is percent-escaped and multiple values are comma-joined. Vertical
    /// radii are an optional second parameter.
    pub fn border_radius(mut self, radii: &[&str], vertical_radii: Option<&[&str]>) -> Self {
        let join = |values: &[&str]| {
            values
                .iter()
                .map(|v| escape_percent(v))
                .collect::<Vec<_>>()
                .join(",")
        };
        let mut params = vec![join(radii)];
        if let Some(vertical) = vertical_radii {
            params.push(join(vertical));
        }
        self.inner = self.inner.set_owned("border_radius", params);
        self
    }

    /// Draw a solid color rectangle over the image.
    pub fn rect(
        mut self,
        color: &str,
        dimensions: (&str, &str),
        position: Option<OverlayPosition>,
        coordinates: Option<(&str, &str)>,
    ) -> Self {
        let mut params = vec![color.to_string()];
        params.extend(relative_params(Some(dimensions), position, coordinates));
        self.inner = self.inner.set_owned("rect", params);
        self
    }

    /// Overlay another file on top of the image.
    pub fn overlay(
        mut self,
        source: &str,
        dimensions: Option<(&str, &str)>,
        position: Option<OverlayPosition>,
        coordinates: Option<(&str, &str)>,
        opacity: Option<&str>,
    ) -> Self {
        let mut params = vec![source.to_string()];
        params.extend(relative_params(dimensions, position, coordinates));
        if let Some(opacity) = opacity {
            params.push(escape_percent(opacity));
        }
        self.inner = self.inner.set_owned("overlay", params);
        self
    }

    /// Overlay the image onto itself (the `self` source token).
    pub fn overlay_self(
        self,
        dimensions: Option<(&str, &str)>,
        position: Option<OverlayPosition>,
        coordinates: Option<(&str, &str)>,
        opacity: Option<&str>,
    ) -> Self {
        self.overlay("self", dimensions, position, coordinates, opacity)
    }

    /// Render text over the image. The content is tilde-escaped to survive
    /// embedding in the URL path.
    pub fn text(
        mut self,
        dimensions: (&str, &str),
        position: Option<OverlayPosition>,
        coordinates: Option<(&str, &str)>,
        content: &str,
    ) -> Self {
        let mut params = relative_params(Some(dimensions), position, coordinates);
        params.push(escape_text(content));
        self.inner = self.inner.set_owned("text", params);
        self
    }

    /// Face detection; returns coordinates instead of an image.
    pub fn detect_faces(mut self) -> Self {
        self.inner = self.inner.set("detect_faces", &[]);
        self
    }

    /// Convert an animated GIF to video. Format and quality are emitted as
    /// separate appended operations, not parameters of `gif2video` itself.
    pub fn gif2video(
        mut self,
        format: Option<Gif2VideoFormat>,
        quality: Option<Gif2VideoQuality>,
    ) -> Self {
        self.inner = self.inner.set("gif2video", &[]);
        if let Some(format) = format {
            self.inner = self.inner.set("format", &[format.as_str()]);
        }
        if let Some(quality) = quality {
            self.inner = self.inner.set("quality", &[quality.as_str()]);
        }
        self
    }

    /// Rendered operation chain without the file identifier.
    pub fn effects(&self) -> String {
        self.inner.effects()
    }

    /// Render the relative CDN path.
    ///
    /// `gif2video` and `detect_faces` are defined by the service to not use
    /// the standard delimiter, so the `-/` marker preceding them is stripped
    /// after generic rendering.
    pub fn path(&self, file_id: &str) -> String {
        let mut path = self.inner.path(file_id);
        for op in UNDELIMITED_OPS {
            path = path.replace(&format!("-/{}", op), op);
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UUID: &str = "52da3bfc-7cd8-4861-8b05-126fef7a6994";

    #[test]
    fn test_resize_width_only() {
        let path = ImageTransformation::new().resize(Some(440), None).path(UUID);
        assert_eq!(path, format!("{}/-/resize/440x/", UUID));
    }

    #[test]
    fn test_resize_height_only() {
        let path = ImageTransformation::new().resize(None, Some(300)).path(UUID);
        assert_eq!(path, format!("{}/-/resize/x300/", UUID));
    }

    #[test]
    fn test_preview_bare_and_with_dimensions() {
        let t = ImageTransformation::new().preview(None, None);
        assert_eq!(t.effects(), "preview/");

        let t = ImageTransformation::new().preview(Some(160), Some(160));
        assert_eq!(t.effects(), "preview/160x160/");
    }

    #[test]
    fn test_crop_alignment_wins_over_offsets() {
        let t = ImageTransformation::new().crop(
            100,
            100,
            Some(CropAlignment::Center),
            Some(5),
            Some(5),
        );
        assert_eq!(t.effects(), "crop/100x100/center/");
    }

    #[test]
    fn test_crop_with_offsets() {
        let t = ImageTransformation::new().crop(640, 480, None, Some(20), Some(30));
        assert_eq!(t.effects(), "crop/640x480/20,30/");
    }

    #[test]
    fn test_crop_zero_offset_treated_as_absent() {
        // Observed client behavior: a zero offset is dropped entirely.
        let t = ImageTransformation::new().crop(640, 480, None, Some(0), Some(30));
        assert_eq!(t.effects(), "crop/640x480/");
    }

    #[test]
    fn test_crop_partial_offsets_dropped() {
        let t = ImageTransformation::new().crop(640, 480, None, Some(20), None);
        assert_eq!(t.effects(), "crop/640x480/");
    }

    #[test]
    fn test_scale_crop_mode_wins_over_offsets() {
        let t = ImageTransformation::new().scale_crop(
            440,
            440,
            Some(ScaleCropMode::SmartFaces),
            Some("30%"),
            Some("50%"),
        );
        assert_eq!(t.effects(), "scale_crop/440x440/smart_faces/");
    }

    #[test]
    fn test_scale_crop_percent_offsets_escaped() {
        let t = ImageTransformation::new().scale_crop(440, 440, None, Some("30%"), Some("50%"));
        assert_eq!(t.effects(), "scale_crop/440x440/30p,50p/");
    }

    #[test]
    fn test_gif2video_strips_delimiter() {
        let path = ImageTransformation::new()
            .gif2video(Some(Gif2VideoFormat::Mp4), Some(Gif2VideoQuality::Better))
            .path(UUID);
        assert_eq!(
            path,
            format!("{}/gif2video/-/format/mp4/-/quality/better/", UUID)
        );
    }

    #[test]
    fn test_gif2video_bare() {
        let path = ImageTransformation::new().gif2video(None, None).path(UUID);
        assert_eq!(path, format!("{}/gif2video/", UUID));
        assert!(!path.contains("-/gif2video"));
    }

    #[test]
    fn test_detect_faces_strips_delimiter() {
        let path = ImageTransformation::new().detect_faces().path(UUID);
        assert_eq!(path, format!("{}/detect_faces/", UUID));
    }

    #[test]
    fn test_detect_faces_after_other_operations() {
        let path = ImageTransformation::new()
            .crop(100, 100, Some(CropAlignment::Center), None, None)
            .detect_faces()
            .path(UUID);
        assert_eq!(path, format!("{}/-/crop/100x100/center/detect_faces/", UUID));
    }

    #[test]
    fn test_effects_keeps_delimiter_before_gif2video() {
        // The strip is a path-level post-process only.
        let t = ImageTransformation::new()
            .resize(Some(500), None)
            .gif2video(None, None);
        assert_eq!(t.effects(), "resize/500x/-/gif2video/");
    }

    #[test]
    fn test_overlay_keyword_position_wins() {
        let t = ImageTransformation::new().overlay(
            "efd02791-7511-42e9-850d-3b3d07f110ae",
            Some(("50%", "50%")),
            Some(OverlayPosition::Center),
            Some(("10%", "10%")),
            Some("40%"),
        );
        assert_eq!(
            t.effects(),
            "overlay/efd02791-7511-42e9-850d-3b3d07f110ae/50px50p/center/40p/"
        );
    }

    #[test]
    fn test_overlay_coordinates_when_no_keyword() {
        let t = ImageTransformation::new().overlay(
            "efd02791-7511-42e9-850d-3b3d07f110ae",
            Some(("50%", "50%")),
            None,
            Some(("10%", "20%")),
            None,
        );
        assert_eq!(
            t.effects(),
            "overlay/efd02791-7511-42e9-850d-3b3d07f110ae/50px50p/10p,20p/"
        );
    }

    #[test]
    fn test_overlay_self_uses_literal_token() {
        let t = ImageTransformation::new().overlay_self(
            Some(("100%", "100%")),
            Some(OverlayPosition::Center),
            None,
            None,
        );
        assert_eq!(t.effects(), "overlay/self/100px100p/center/");
    }

    #[test]
    fn test_text_escapes_content() {
        let t = ImageTransformation::new().text(
            ("80%", "20%"),
            Some(OverlayPosition::Bottom),
            None,
            "hello/world~\n",
        );
        assert_eq!(t.effects(), "text/80px20p/bottom/hello~sworld~~~n/");
    }

    #[test]
    fn test_rect() {
        let t = ImageTransformation::new().rect(
            "ff0000",
            ("50%", "30%"),
            None,
            Some(("10", "10")),
        );
        assert_eq!(t.effects(), "rect/ff0000/50px30p/10,10/");
    }

    #[test]
    fn test_border_radius_scalar() {
        let t = ImageTransformation::new().border_radius(&["10"], None);
        assert_eq!(t.effects(), "border_radius/10/");
    }

    #[test]
    fn test_border_radius_list_with_vertical() {
        let t = ImageTransformation::new()
            .border_radius(&["10", "20%", "30"], Some(&["5", "15%"]));
        assert_eq!(t.effects(), "border_radius/10,20p,30/5,15p/");
    }

    #[test]
    fn test_all_image_formats() {
        for (format, wire) in [
            (ImageFormat::Jpeg, "jpeg"),
            (ImageFormat::Png, "png"),
            (ImageFormat::Webp, "webp"),
            (ImageFormat::Auto, "auto"),
        ] {
            let t = ImageTransformation::new().format(format);
            assert_eq!(t.effects(), format!("format/{}/", wire));
        }
    }

    #[test]
    fn test_all_quality_presets() {
        for (quality, wire) in [
            (ImageQuality::Normal, "normal"),
            (ImageQuality::Better, "better"),
            (ImageQuality::Best, "best"),
            (ImageQuality::Lighter, "lighter"),
            (ImageQuality::Lightest, "lightest"),
            (ImageQuality::Smart, "smart"),
            (ImageQuality::SmartRetina, "smart_retina"),
        ] {
            let t = ImageTransformation::new().quality(quality);
            assert_eq!(t.effects(), format!("quality/{}/", wire));
        }
    }

    #[test]
    fn test_filter_with_and_without_amount() {
        let t = ImageTransformation::new().filter(ImageFilter::Briaril, None);
        assert_eq!(t.effects(), "filter/briaril/");

        let t = ImageTransformation::new().filter(ImageFilter::Vevera, Some(140));
        assert_eq!(t.effects(), "filter/vevera/140/");
    }

    #[test]
    fn test_color_adjustments() {
        let t = ImageTransformation::new()
            .adjust(ColorAdjustment::Brightness, Some(-20))
            .adjust(ColorAdjustment::Gamma, Some(120))
            .adjust(ColorAdjustment::Warmth, None);
        assert_eq!(t.effects(), "brightness/-20/-/gamma/120/-/warmth/");
    }

    #[test]
    fn test_flags_and_toggles() {
        let t = ImageTransformation::new()
            .progressive(true)
            .autorotate(false)
            .flip()
            .mirror()
            .grayscale()
            .invert();
        assert_eq!(
            t.effects(),
            "progressive/yes/-/autorotate/no/-/flip/-/mirror/-/grayscale/-/invert/"
        );
    }

    #[test]
    fn test_rotate_passes_any_angle_through() {
        // The builder never range-checks; the service rejects bad values.
        let t = ImageTransformation::new().rotate(-90);
        assert_eq!(t.effects(), "rotate/-90/");
    }

    #[test]
    fn test_srgb_and_max_icc_size() {
        let t = ImageTransformation::new()
            .max_icc_size(1048576)
            .srgb(SrgbConversion::KeepProfile);
        assert_eq!(t.effects(), "max_icc_size/1048576/-/srgb/keep_profile/");
    }

    #[test]
    fn test_strip_meta() {
        let t = ImageTransformation::new().strip_meta(StripMeta::Sensitive);
        assert_eq!(t.effects(), "strip_meta/sensitive/");
    }

    #[test]
    fn test_escape_hatch_set() {
        let t = ImageTransformation::new()
            .resize(Some(440), None)
            .set("new_service_op", &["arg"]);
        assert_eq!(t.effects(), "resize/440x/-/new_service_op/arg/");
    }

    #[test]
    fn test_seed_then_extend() {
        let t = ImageTransformation::from_effects("resize/440x/")
            .format(ImageFormat::Webp);
        assert_eq!(t.effects(), "resize/440x/-/format/webp/");
    }

    #[test]
    fn test_long_fluent_chain() {
        let path = ImageTransformation::new()
            .scale_crop(440, 440, Some(ScaleCropMode::Smart), None, None)
            .resize(Some(400), Some(400))
            .setfill("8d8578")
            .format(ImageFormat::Auto)
            .quality(ImageQuality::Smart)
            .sharp(Some(10))
            .path(UUID);
        assert_eq!(
            path,
            format!(
                "{}/-/scale_crop/440x440/smart/-/resize/400x400/-/setfill/8d8578/-/format/auto/-/quality/smart/-/sharp/10/",
                UUID
            )
        );
    }

    #[test]
    fn test_empty_builder_path() {
        let path = ImageTransformation::new().path(UUID);
        assert_eq!(path, format!("{}/", UUID));
    }
}
