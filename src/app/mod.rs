//! App module - contains the main application state and logic

mod context_menu;
mod images;
mod modals;
mod views;

use crate::arena::Arena;
use crate::constants::IMAGE_FETCH_CONCURRENCY;
use crate::form::CreatureForm;
use crate::settings::Settings;
use crate::theme;
use crate::utils::get_cache_dir;
use eframe::egui;
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tokio_util::sync::CancellationToken;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) arena: Arena,
    pub(crate) logo_texture: Option<egui::TextureHandle>,
    // Add creature modal
    pub(crate) form: CreatureForm,
    pub(crate) show_add_form: bool,
    pub(crate) focus_form: bool,
    // View settings
    pub(crate) show_settings: bool,
    pub(crate) large_cards: bool,
    pub(crate) show_stats: bool,
    // Image loading
    pub(crate) runtime: tokio::runtime::Runtime,
    pub(crate) http: reqwest::Client,
    pub(crate) fetch_limit: Arc<tokio::sync::Semaphore>,
    pub(crate) cancel_token: CancellationToken,
    pub(crate) image_cache: HashMap<String, Option<egui::TextureHandle>>,
    pub(crate) image_loading: HashSet<String>,
    pub(crate) image_failed: Arc<Mutex<HashSet<String>>>,
    pub(crate) prefetch_started: bool,
    pub(crate) cache_dir: PathBuf,
    // Toast notification
    pub(crate) toast_message: Option<String>,
    pub(crate) toast_start: Option<std::time::Instant>,
    pub(crate) central_panel_rect: Option<egui::Rect>,
    // Window
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: Settings,
        data_dir: PathBuf,
        runtime: tokio::runtime::Runtime,
    ) -> Self {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        let cache_dir = get_cache_dir();
        std::fs::create_dir_all(cache_dir.join("images")).ok();

        Self {
            arena: Arena::seeded(),
            logo_texture: None,
            form: CreatureForm::default(),
            show_add_form: false,
            focus_form: false,
            show_settings: false,
            large_cards: settings.large_cards,
            show_stats: settings.show_stats,
            runtime,
            http: reqwest::Client::new(),
            fetch_limit: Arc::new(tokio::sync::Semaphore::new(IMAGE_FETCH_CONCURRENCY)),
            cancel_token: CancellationToken::new(),
            image_cache: HashMap::new(),
            image_loading: HashSet::new(),
            image_failed: Arc::new(Mutex::new(HashSet::new())),
            prefetch_started: false,
            cache_dir,
            toast_message: None,
            toast_start: None,
            central_panel_rect: None,
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
        }
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            large_cards: self.large_cards,
            show_stats: self.show_stats,
        };
        settings.save(&self.data_dir);
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast_message = Some(message.into());
        self.toast_start = Some(std::time::Instant::now());
    }

    pub fn open_add_form(&mut self) {
        self.form.reset();
        self.show_add_form = true;
        self.focus_form = true;
    }

    /// Validate the form and append the creature. Returns false (and keeps
    /// the modal open) when the submission is rejected.
    pub fn submit_add_form(&mut self, ctx: &egui::Context) -> bool {
        match self.arena.add_from_form(&self.form) {
            Ok(id) => {
                let Some((name, image_url)) = self
                    .arena
                    .roster()
                    .get(id)
                    .map(|c| (c.name.clone(), c.image_url.clone()))
                else {
                    return false;
                };
                self.show_add_form = false;
                self.show_toast(format!("{} joined the roster", name));
                self.request_image(ctx, &image_url);
                true
            }
            Err(e) => {
                tracing::debug!(error = %e, "Add creature rejected");
                false
            }
        }
    }
}
