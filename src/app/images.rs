//! Creature image loading: memory cache → disk cache → background fetch

use super::App;
use crate::constants::MAX_IMAGE_BYTES;
use crate::utils::{image_cache_file_name, resolve_image_url};
use eframe::egui;
use futures::StreamExt;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {0}")]
    Status(reqwest::StatusCode),
    #[error("cache write failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("image larger than {0} bytes")]
    TooLarge(usize),
    #[error("decode failed: {0}")]
    Decode(#[from] image::ImageError),
}

static PART_SEQ: AtomicU64 = AtomicU64::new(0);

/// Temp file next to `path`, unique per download so two fetches of the
/// same URL never write into one file.
fn part_path(path: &Path) -> PathBuf {
    let seq = PART_SEQ.fetch_add(1, Ordering::Relaxed);
    path.with_extension(format!("{}.part", seq))
}

/// Buffer size for a response, refusing bodies that announce more than
/// the image cap up front.
fn initial_capacity(content_length: Option<u64>) -> Result<usize, ImageError> {
    match content_length {
        Some(len) if len > MAX_IMAGE_BYTES as u64 => Err(ImageError::TooLarge(MAX_IMAGE_BYTES)),
        Some(len) => Ok(len as usize),
        None => Ok(0),
    }
}

/// Download `url` into `path`. Writes to a temp file first so the UI
/// thread never decodes a half-written image.
async fn fetch_to_cache(client: &reqwest::Client, url: &str, path: &Path) -> Result<(), ImageError> {
    let response = client.get(url).send().await?;
    if !response.status().is_success() {
        return Err(ImageError::Status(response.status()));
    }
    let mut bytes = Vec::with_capacity(initial_capacity(response.content_length())?);
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        bytes.extend_from_slice(&chunk?);
        if bytes.len() > MAX_IMAGE_BYTES {
            return Err(ImageError::TooLarge(MAX_IMAGE_BYTES));
        }
    }
    let tmp = part_path(path);
    tokio::fs::write(&tmp, &bytes).await?;
    tokio::fs::rename(&tmp, path).await?;
    Ok(())
}

fn decode_texture(ctx: &egui::Context, name: &str, path: &Path) -> Result<egui::TextureHandle, ImageError> {
    // Cache files carry no real extension, so sniff the format from content
    let rgba = image::ImageReader::open(path)?
        .with_guessed_format()?
        .decode()?
        .to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    let pixels = rgba.into_raw();
    Ok(ctx.load_texture(
        name,
        egui::ColorImage::from_rgba_unmultiplied(size, &pixels),
        egui::TextureOptions::LINEAR,
    ))
}

impl App {
    fn image_cache_path(&self, resolved_url: &str) -> PathBuf {
        self.cache_dir
            .join("images")
            .join(image_cache_file_name(resolved_url))
    }

    /// Fetch every roster image that isn't cached on disk yet
    pub fn start_image_prefetch(&mut self, ctx: &egui::Context) {
        if self.arena.roster().is_empty() {
            return;
        }
        let urls: Vec<String> = self
            .arena
            .roster()
            .iter()
            .map(|c| c.image_url.clone())
            .collect();
        debug!(count = urls.len(), "Starting image prefetch");
        for url in urls {
            self.request_image(ctx, &url);
        }
    }

    /// Queue a background download for `url` unless it is already cached,
    /// in flight, or known to fail.
    pub fn request_image(&mut self, ctx: &egui::Context, url: &str) {
        let resolved = resolve_image_url(url).into_owned();
        if resolved.is_empty() || self.image_loading.contains(&resolved) {
            return;
        }
        let path = self.image_cache_path(&resolved);
        if path.exists() || self.is_failed(&resolved) {
            return;
        }
        self.image_loading.insert(resolved.clone());

        let client = self.http.clone();
        let limit = self.fetch_limit.clone();
        let token = self.cancel_token.clone();
        let failed = self.image_failed.clone();
        let ctx = ctx.clone();

        self.runtime.spawn(async move {
            let _permit = limit.acquire().await.ok();
            let result = tokio::select! {
                _ = token.cancelled() => return,
                r = fetch_to_cache(&client, &resolved, &path) => r,
            };
            match result {
                Ok(()) => debug!(url = %resolved, "Image cached"),
                Err(e) => {
                    warn!(url = %resolved, error = %e, "Image fetch failed");
                    if let Ok(mut failed) = failed.lock() {
                        failed.insert(resolved);
                    }
                }
            }
            ctx.request_repaint();
        });
    }

    fn is_failed(&self, resolved_url: &str) -> bool {
        self.image_failed
            .lock()
            .map(|f| f.contains(resolved_url))
            .unwrap_or(false)
    }

    /// Texture for a creature image, if it is ready. Kicks off a download
    /// the first time an uncached URL is seen.
    pub fn load_image(&mut self, ctx: &egui::Context, url: &str) -> Option<egui::TextureHandle> {
        let resolved = resolve_image_url(url).into_owned();
        if resolved.is_empty() {
            return None;
        }
        if let Some(cached) = self.image_cache.get(&resolved) {
            return cached.clone();
        }

        let path = self.image_cache_path(&resolved);
        if path.exists() {
            let texture = match decode_texture(ctx, &resolved, &path) {
                Ok(tex) => Some(tex),
                Err(e) => {
                    warn!(url = %resolved, error = %e, "Cached image unreadable");
                    None
                }
            };
            self.image_loading.remove(&resolved);
            self.image_cache.insert(resolved, texture.clone());
            return texture;
        }

        self.request_image(ctx, url);
        None
    }

    /// Drop every cached image from memory and disk, then refetch
    pub fn clear_image_cache(&mut self, ctx: &egui::Context) {
        let dir = self.cache_dir.join("images");
        if let Err(e) = std::fs::remove_dir_all(&dir) {
            warn!(error = %e, "Failed to clear image cache");
        }
        std::fs::create_dir_all(&dir).ok();
        self.image_cache.clear();
        self.image_loading.clear();
        if let Ok(mut failed) = self.image_failed.lock() {
            failed.clear();
        }
        self.start_image_prefetch(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oversized_content_length_is_refused() {
        assert!(matches!(
            initial_capacity(Some(70_000_000_000_000)),
            Err(ImageError::TooLarge(MAX_IMAGE_BYTES))
        ));
        assert_eq!(initial_capacity(Some(2048)).unwrap(), 2048);
        assert_eq!(initial_capacity(None).unwrap(), 0);
    }

    #[test]
    fn part_paths_are_unique_per_download() {
        let target = Path::new("/tmp/images/raw.githubusercontent.com_x.jpg.img");
        let a = part_path(target);
        let b = part_path(target);
        assert_ne!(a, b);
        assert_eq!(a.parent(), target.parent());
        assert!(a.to_string_lossy().ends_with(".part"));
    }
}
