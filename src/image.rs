//! Image reference resolution for plant cards

/// Shown by the client when the resolved image fails to load
pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/300x200/eee/ccc?text=Image+Not+Found";

/// Join a record's `img` onto `base`.
///
/// A leading `/` on `img` is dropped so `/x.jpg` and `x.jpg` resolve the same.
/// Absolute URLs (remote tables store these) are returned unchanged.
pub fn resolve_image(img: &str, base: &str) -> String {
    if img.starts_with("http://") || img.starts_with("https://") {
        return img.to_string();
    }
    let relative = img.strip_prefix('/').unwrap_or(img);
    format!("{}{}", base, relative)
}
