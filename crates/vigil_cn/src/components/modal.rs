//! Modal dialog component
//!
//! A modal is a two-state machine (`Closed`, `Open`). While open it holds a
//! guard on the page [`ScrollLock`]; every path out of `Open` (close
//! request, backdrop click, Escape, unmount, or dropping the modal) releases
//! it.
//!
//! ```ignore
//! let scroll = ScrollLock::new();
//! let mut dialog = cn::modal(&scroll)
//!     .title("Delete gateway?")
//!     .size(ModalSize::Lg)
//!     .on_close(|| tracing::info!("dismissed"))
//!     .build();
//!
//! dialog.open();
//! dialog.handle_event(&UiEvent::KeyDown(KeyCode::ESCAPE));
//! assert!(!scroll.is_locked());
//! ```

use std::sync::Arc;

use vigil_core::{HitTarget, KeyCode, ScrollLock, ScrollLockGuard, StateMachine, UiEvent};
use vigil_theme::{ComponentKind, Result, StyleRequest, StyleSpec, ThemeState, Variant};

/// Modal visibility
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

/// Inputs that drive the modal state machine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalEvent {
    Open,
    Close,
    BackdropClick,
    Escape,
    Unmount,
}

impl ModalEvent {
    /// Map a raw UI event onto a modal event, if it is one the modal reacts to
    pub fn from_ui(event: &UiEvent) -> Option<Self> {
        match event {
            e if e.is_key(KeyCode::ESCAPE) => Some(ModalEvent::Escape),
            UiEvent::PointerDown {
                target: HitTarget::Backdrop,
            } => Some(ModalEvent::BackdropClick),
            UiEvent::Unmount => Some(ModalEvent::Unmount),
            _ => None,
        }
    }
}

/// Modal width presets
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalSize {
    #[default]
    Md,
    Lg,
    Xl,
}

impl ModalSize {
    /// Max-width class of the panel
    pub fn class(&self) -> &'static str {
        match self {
            ModalSize::Md => "max-w-md",
            ModalSize::Lg => "max-w-lg",
            ModalSize::Xl => "max-w-xl",
        }
    }

    /// Max width of the panel in pixels
    pub fn max_width(&self) -> f32 {
        match self {
            ModalSize::Md => 448.0,
            ModalSize::Lg => 512.0,
            ModalSize::Xl => 576.0,
        }
    }
}

type CloseHandler = Arc<dyn Fn() + Send + Sync>;

/// Builder for a modal
pub struct ModalBuilder<'a> {
    scroll: &'a ScrollLock,
    title: Option<String>,
    size: ModalSize,
    on_close: Option<CloseHandler>,
}

impl<'a> ModalBuilder<'a> {
    pub fn new(scroll: &'a ScrollLock) -> Self {
        Self {
            scroll,
            title: None,
            size: ModalSize::default(),
            on_close: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn size(mut self, size: ModalSize) -> Self {
        self.size = size;
        self
    }

    /// Called on every Open -> Closed transition
    pub fn on_close<F>(mut self, handler: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_close = Some(Arc::new(handler));
        self
    }

    pub fn build(self) -> Modal {
        let fsm = StateMachine::builder(ModalState::Closed)
            .on(ModalState::Closed, ModalEvent::Open, ModalState::Open)
            .on(ModalState::Open, ModalEvent::Close, ModalState::Closed)
            .on(ModalState::Open, ModalEvent::BackdropClick, ModalState::Closed)
            .on(ModalState::Open, ModalEvent::Escape, ModalState::Closed)
            .on(ModalState::Open, ModalEvent::Unmount, ModalState::Closed)
            .build();

        Modal {
            title: self.title,
            size: self.size,
            fsm,
            scroll: self.scroll.clone(),
            guard: None,
            on_close: self.on_close,
        }
    }
}

/// A modal dialog
///
/// Unlike the other primitives a modal lives across render passes, so its
/// style is resolved on demand with [`Modal::style`].
pub struct Modal {
    title: Option<String>,
    size: ModalSize,
    fsm: StateMachine<ModalState, ModalEvent>,
    scroll: ScrollLock,
    guard: Option<ScrollLockGuard>,
    on_close: Option<CloseHandler>,
}

impl Modal {
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn size(&self) -> ModalSize {
        self.size
    }

    pub fn max_width(&self) -> f32 {
        self.size.max_width()
    }

    pub fn state(&self) -> ModalState {
        self.fsm.current_state()
    }

    pub fn is_open(&self) -> bool {
        self.fsm.is_in(ModalState::Open)
    }

    pub fn open(&mut self) -> bool {
        self.send(ModalEvent::Open)
    }

    pub fn close(&mut self) -> bool {
        self.send(ModalEvent::Close)
    }

    /// Route a UI event to the modal. Returns true when it changed state.
    pub fn handle_event(&mut self, event: &UiEvent) -> bool {
        match ModalEvent::from_ui(event) {
            Some(event) => self.send(event),
            None => false,
        }
    }

    /// Feed one event through the state machine
    pub fn send(&mut self, event: ModalEvent) -> bool {
        let Some(next) = self.fsm.send(event) else {
            return false;
        };
        tracing::debug!(?event, state = ?next, "modal transition");

        match next {
            ModalState::Open => {
                self.guard = Some(self.scroll.acquire());
            }
            ModalState::Closed => {
                self.guard = None;
                if let Some(handler) = &self.on_close {
                    handler();
                }
            }
        }
        true
    }

    /// Resolve the panel style against the current theme
    pub fn style(&self, theme: &ThemeState) -> Result<StyleSpec> {
        theme.resolve(&StyleRequest::new(ComponentKind::Modal, Variant::Default))
    }
}

impl std::fmt::Debug for Modal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Modal")
            .field("title", &self.title)
            .field("size", &self.size)
            .field("state", &self.state())
            .field("holds_scroll_lock", &self.guard.is_some())
            .finish()
    }
}

/// Create a modal that suppresses scrolling on `scroll` while open
pub fn modal(scroll: &ScrollLock) -> ModalBuilder<'_> {
    ModalBuilder::new(scroll)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_escape_closes_and_releases() {
        let scroll = ScrollLock::new();
        let mut m = modal(&scroll).build();

        assert!(m.open());
        assert!(m.is_open());
        assert!(scroll.is_locked());

        assert!(m.handle_event(&UiEvent::KeyDown(KeyCode::ESCAPE)));
        assert_eq!(m.state(), ModalState::Closed);
        assert!(!scroll.is_locked());
    }

    #[test]
    fn test_escape_while_closed_is_noop() {
        let scroll = ScrollLock::new();
        let mut m = modal(&scroll).build();
        assert!(!m.handle_event(&UiEvent::KeyDown(KeyCode::ESCAPE)));
        assert_eq!(m.state(), ModalState::Closed);
        assert!(!scroll.is_locked());
    }

    #[test]
    fn test_content_click_keeps_modal_open() {
        let scroll = ScrollLock::new();
        let mut m = modal(&scroll).build();
        m.open();
        assert!(!m.handle_event(&UiEvent::PointerDown {
            target: HitTarget::Content
        }));
        assert!(m.is_open());

        assert!(m.handle_event(&UiEvent::PointerDown {
            target: HitTarget::Backdrop
        }));
        assert!(!m.is_open());
    }

    #[test]
    fn test_on_close_fires_per_close() {
        let closes = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&closes);
        let scroll = ScrollLock::new();
        let mut m = modal(&scroll)
            .on_close(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            })
            .build();

        m.open();
        m.close();
        m.close();
        m.open();
        m.handle_event(&UiEvent::Unmount);
        assert_eq!(closes.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_drop_while_open_releases() {
        let scroll = ScrollLock::new();
        let mut m = modal(&scroll).build();
        m.open();
        assert!(scroll.is_locked());
        drop(m);
        assert!(!scroll.is_locked());
    }

    #[test]
    fn test_repeated_open_does_not_stack_guards() {
        let scroll = ScrollLock::new();
        let mut m = modal(&scroll).build();
        assert!(m.open());
        assert!(!m.open());
        assert_eq!(scroll.holders(), 1);
    }

    #[test]
    fn test_size_presets() {
        assert_eq!(ModalSize::Md.max_width(), 448.0);
        assert_eq!(ModalSize::Xl.class(), "max-w-xl");
        let scroll = ScrollLock::new();
        let m = modal(&scroll).size(ModalSize::Lg).build();
        assert_eq!(m.max_width(), 512.0);
    }
}
