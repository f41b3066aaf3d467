//! Application constants and configuration

pub const APP_NAME: &str = "Battle Monsters";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prefix rewritten by the image URL normalizer
pub const GITHUB_PREFIX: &str = "https://github.com/";
pub const GITHUB_RAW_PREFIX: &str = "https://raw.githubusercontent.com/";
pub const GITHUB_BLOB_SEGMENT: &str = "/blob/";

/// Base URL for the seed roster artwork
pub const SEED_IMAGES_BASE_URL: &str = "https://raw.githubusercontent.com/boazcosta/images/main";

/// Parallel image fetches allowed at once
pub const IMAGE_FETCH_CONCURRENCY: usize = 4;

/// Seconds a toast stays fully visible before fading
pub const TOAST_VISIBLE_SECS: f32 = 3.0;
pub const TOAST_FADE_SECS: f32 = 0.5;

/// Images bigger than this are refused rather than cached
pub const MAX_IMAGE_BYTES: usize = 16 * 1024 * 1024;
