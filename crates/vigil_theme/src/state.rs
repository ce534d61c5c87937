//! Theme state
//!
//! `ThemeState` is owned by the application shell and handed by reference to
//! every primitive. All four dimensions live behind one lock, so a render
//! pass that takes a [`ThemeSettings`] snapshot can never observe a mix of
//! old and new values.
//! - Visual dimensions (color, shadow, radius) only trigger repaints
//! - Density changes padding and type scale, so it triggers layout

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::resolver::resolve;
use crate::style::{StyleRequest, StyleSpec};
use crate::tokens::{resolve_color, ColorToken, Density, PrimaryColor, RadiusLevel, ShadowMode};

/// The four global theme dimensions
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSettings {
    pub primary_color: PrimaryColor,
    pub border_radius: RadiusLevel,
    pub density: Density,
    pub shadow_mode: ShadowMode,
}

impl ThemeSettings {
    /// Token of the active primary color
    pub fn primary(&self) -> ColorToken {
        resolve_color(self.primary_color)
    }
}

type RedrawCallback = Arc<dyn Fn() + Send + Sync>;

/// Application-owned theme state
pub struct ThemeState {
    settings: RwLock<ThemeSettings>,

    /// Flag indicating theme needs repaint (colors, shadows, radii changed)
    needs_repaint: AtomicBool,

    /// Flag indicating theme needs layout (density changed)
    needs_layout: AtomicBool,

    /// Invoked after every effective change
    redraw: Mutex<Option<RedrawCallback>>,
}

impl ThemeState {
    pub fn new(settings: ThemeSettings) -> Self {
        Self {
            settings: RwLock::new(settings),
            needs_repaint: AtomicBool::new(false),
            needs_layout: AtomicBool::new(false),
            redraw: Mutex::new(None),
        }
    }

    /// Register the function that schedules a new render pass
    pub fn set_redraw_callback<F>(&self, callback: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        *self.redraw.lock().unwrap_or_else(PoisonError::into_inner) = Some(Arc::new(callback));
    }

    /// Consistent snapshot of all four dimensions
    pub fn settings(&self) -> ThemeSettings {
        *self.settings.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn primary_color(&self) -> PrimaryColor {
        self.settings().primary_color
    }

    pub fn border_radius(&self) -> RadiusLevel {
        self.settings().border_radius
    }

    pub fn density(&self) -> Density {
        self.settings().density
    }

    pub fn shadow_mode(&self) -> ShadowMode {
        self.settings().shadow_mode
    }

    // ========== Setters ==========

    pub fn set_primary_color(&self, color: PrimaryColor) {
        self.update(|s| s.primary_color = color);
    }

    pub fn set_border_radius(&self, radius: RadiusLevel) {
        self.update(|s| s.border_radius = radius);
    }

    pub fn set_density(&self, density: Density) {
        self.update(|s| s.density = density);
    }

    pub fn set_shadow_mode(&self, mode: ShadowMode) {
        self.update(|s| s.shadow_mode = mode);
    }

    /// Replace every dimension at once (e.g. after loading a config file)
    pub fn apply(&self, settings: ThemeSettings) {
        self.update(|s| *s = settings);
    }

    fn update(&self, change: impl FnOnce(&mut ThemeSettings)) {
        let (old, new) = {
            let mut current = self.settings.write().unwrap_or_else(PoisonError::into_inner);
            let old = *current;
            change(&mut current);
            (old, *current)
        };
        if old == new {
            return;
        }

        tracing::debug!(?old, ?new, "ThemeState::update");

        if old.primary_color != new.primary_color
            || old.shadow_mode != new.shadow_mode
            || old.border_radius != new.border_radius
        {
            self.needs_repaint.store(true, Ordering::SeqCst);
        }
        if old.density != new.density {
            self.needs_layout.store(true, Ordering::SeqCst);
        }

        // Called without the lock held; the callback may touch the theme again
        let callback = self
            .redraw
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        if let Some(callback) = callback {
            callback();
        }
    }

    // ========== Resolution ==========

    /// Resolve a request against the current snapshot
    pub fn resolve(&self, request: &StyleRequest) -> Result<StyleSpec> {
        resolve(&self.settings(), request)
    }

    // ========== Dirty Flags ==========

    /// Check if theme changes require repaint
    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint.load(Ordering::SeqCst)
    }

    /// Clear the repaint flag
    pub fn clear_repaint(&self) {
        self.needs_repaint.store(false, Ordering::SeqCst);
    }

    /// Check if theme changes require layout
    pub fn needs_layout(&self) -> bool {
        self.needs_layout.load(Ordering::SeqCst)
    }

    /// Clear the layout flag
    pub fn clear_layout(&self) {
        self.needs_layout.store(false, Ordering::SeqCst);
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new(ThemeSettings::default())
    }
}

impl std::fmt::Debug for ThemeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeState")
            .field("settings", &self.settings())
            .field("needs_repaint", &self.needs_repaint())
            .field("needs_layout", &self.needs_layout())
            .finish()
    }
}
