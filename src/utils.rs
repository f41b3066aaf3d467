//! Utility functions

use crate::constants::{APP_NAME, GITHUB_BLOB_SEGMENT, GITHUB_PREFIX, GITHUB_RAW_PREFIX};
use std::borrow::Cow;
use std::path::PathBuf;

// Monster head with horns, for the header and window icon
pub const LOGO_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 128 128"><defs><style>.h{fill:#2dd4bf;stroke:#09090b;stroke-width:2px}.f{fill:#fff;stroke:#09090b;stroke-width:2px}.e{fill:#09090b}</style></defs><path class="h" d="M22,18 L40,44 L30,50 Z"/><path class="h" d="M106,18 L88,44 L98,50 Z"/><path class="f" d="M64,30 C98,30 112,54 112,78 C112,104 90,118 64,118 C38,118 16,104 16,78 C16,54 30,30 64,30 Z"/><circle class="e" cx="64" cy="70" r="14"/><circle class="f" cx="68" cy="66" r="5"/><path class="e" d="M40,96 L50,102 L58,96 L64,102 L70,96 L78,102 L88,96 L86,104 L42,104 Z"/></svg>"#;

/// Rasterize the logo SVG at the given width, preserving aspect ratio.
pub fn rasterize_logo(width: u32) -> Option<(Vec<u8>, u32, u32)> {
    let tree = resvg::usvg::Tree::from_str(LOGO_SVG, &resvg::usvg::Options::default()).ok()?;
    let svg_size = tree.size();
    let scale = width as f32 / svg_size.width();
    let height = (svg_size.height() * scale).ceil() as u32;
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)?;
    resvg::render(
        &tree,
        resvg::usvg::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    Some((premul_to_straight(&pixmap), width, height))
}

fn premul_to_straight(pixmap: &resvg::tiny_skia::Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let a = p.alpha();
            if a == 0 {
                [0, 0, 0, 0]
            } else {
                let r = (p.red() as u16 * 255 / a as u16) as u8;
                let g = (p.green() as u16 * 255 / a as u16) as u8;
                let b = (p.blue() as u16 * 255 / a as u16) as u8;
                [r, g, b, a]
            }
        })
        .collect()
}

/// App data directory (settings, logs)
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Get the cache directory path
pub fn get_cache_dir() -> PathBuf {
    get_data_dir().join("cache")
}

/// Turn a GitHub "blob" page URL into the raw file URL so the image can
/// actually be downloaded. Anything else passes through untouched.
pub fn resolve_image_url(url: &str) -> Cow<'_, str> {
    if url.contains("github.com/") && url.contains(GITHUB_BLOB_SEGMENT) {
        Cow::Owned(
            url.replacen(GITHUB_PREFIX, GITHUB_RAW_PREFIX, 1)
                .replacen(GITHUB_BLOB_SEGMENT, "/", 1),
        )
    } else {
        Cow::Borrowed(url)
    }
}

/// Filesystem-safe cache file name for an image URL
pub fn image_cache_file_name(url: &str) -> String {
    let stem: String = url
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '.' || c == '-' { c } else { '_' })
        .collect();
    format!("{}.img", stem)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blob_url_becomes_raw() {
        assert_eq!(
            resolve_image_url("https://github.com/u/r/blob/main/img.png"),
            "https://raw.githubusercontent.com/u/r/main/img.png"
        );
    }

    #[test]
    fn other_urls_pass_through() {
        let raw = "https://raw.githubusercontent.com/boazcosta/images/main/Roz.jpg";
        assert!(matches!(resolve_image_url(raw), Cow::Borrowed(_)));
        assert_eq!(resolve_image_url(raw), raw);
        assert_eq!(resolve_image_url(""), "");
        // Needs both the host and the blob segment
        assert_eq!(
            resolve_image_url("https://example.com/blob/x.png"),
            "https://example.com/blob/x.png"
        );
    }

    #[test]
    fn only_first_blob_segment_is_rewritten() {
        assert_eq!(
            resolve_image_url("https://github.com/u/r/blob/main/blob/a.png"),
            "https://raw.githubusercontent.com/u/r/main/blob/a.png"
        );
    }

    #[test]
    fn cache_file_name_is_flat() {
        let name = image_cache_file_name("https://raw.githubusercontent.com/a/b/main/Celia.jpg");
        assert_eq!(name, "raw.githubusercontent.com_a_b_main_Celia.jpg.img");
        assert!(!name.contains('/'));
    }

    #[test]
    fn logo_rasterizes() {
        let (pixels, w, h) = rasterize_logo(64).unwrap();
        assert_eq!(w, 64);
        assert_eq!(h, 64);
        assert_eq!(pixels.len(), (w * h * 4) as usize);
    }
}
