//! View-mode state machine: presentation mode, map overlay, viewport.
//!
//! All transitions are pure state changes; the rendering layer re-reads
//! [`ViewState`] after each transition. No I/O happens here.

/// Window widths at or below this value classify as a mobile viewport.
pub const MOBILE_WIDTH_THRESHOLD: f32 = 768.0;

/// Presentation mode for the main content area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Full card grid with suggestions.
    Normal,
    /// Dense card grid, suggestions hidden.
    Compact,
    /// Tabular layout.
    Table,
}

impl ViewMode {
    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Normal => "Vista Normal",
            ViewMode::Compact => "Vista Compacta",
            ViewMode::Table => "Vista Tabla",
        }
    }
}

/// Viewport classification derived from the window width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewport {
    Desktop,
    Mobile,
}

impl Viewport {
    pub fn classify(width: f32) -> Self {
        if width <= MOBILE_WIDTH_THRESHOLD {
            Viewport::Mobile
        } else {
            Viewport::Desktop
        }
    }
}

/// What the main content area should currently display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentView {
    Cards { compact: bool },
    Table,
    Map,
}

/// View-mode state: presentation mode, map-overlay flag, viewport.
///
/// Invariant: a mobile viewport never holds `ViewMode::Normal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    mode: ViewMode,
    map_overlay: bool,
    viewport: Viewport,
}

impl ViewState {
    /// Initial state for the given window width: Normal on desktop,
    /// Compact on mobile, map overlay off.
    pub fn new(width: f32) -> Self {
        Self::with_mode(ViewMode::Normal, width)
    }

    /// Initial state with a caller-requested mode; a mobile viewport still
    /// forces Compact over Normal.
    pub fn with_mode(mode: ViewMode, width: f32) -> Self {
        let mut state = Self {
            mode,
            map_overlay: false,
            viewport: Viewport::classify(width),
        };
        if state.viewport == Viewport::Mobile && state.mode == ViewMode::Normal {
            state.mode = ViewMode::Compact;
        }
        state
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn map_overlay(&self) -> bool {
        self.map_overlay
    }

    /// Reclassify the viewport on a resize signal. Crossing from desktop
    /// to mobile while in Normal forces Compact; crossing back to desktop
    /// does not auto-revert the mode.
    pub fn on_resize(&mut self, width: f32) {
        self.viewport = Viewport::classify(width);
        if self.viewport == Viewport::Mobile && self.mode == ViewMode::Normal {
            self.mode = ViewMode::Compact;
        }
    }

    /// Next mode in the toggle cycle for the current viewport.
    ///
    /// Desktop: Normal → Compact → Table → Normal.
    /// Mobile: Compact → Table → Compact (Normal is unreachable).
    pub fn next_mode(&self) -> ViewMode {
        match self.viewport {
            Viewport::Desktop => match self.mode {
                ViewMode::Normal => ViewMode::Compact,
                ViewMode::Compact => ViewMode::Table,
                ViewMode::Table => ViewMode::Normal,
            },
            Viewport::Mobile => match self.mode {
                ViewMode::Normal | ViewMode::Compact => ViewMode::Table,
                ViewMode::Table => ViewMode::Compact,
            },
        }
    }

    /// Advance the presentation mode. An open map overlay is closed: mode
    /// display and map display are mutually exclusive at any instant.
    pub fn cycle_mode(&mut self) {
        self.mode = self.next_mode();
        self.map_overlay = false;
    }

    /// Toggle the map overlay. The underlying mode is untouched and is
    /// restored when the overlay closes.
    pub fn toggle_map_overlay(&mut self) {
        self.map_overlay = !self.map_overlay;
    }

    /// The recommendations section shows only in the plain Normal view.
    pub fn shows_recommendations(&self) -> bool {
        self.mode == ViewMode::Normal && !self.map_overlay
    }

    pub fn visible_content(&self) -> ContentView {
        if self.map_overlay {
            return ContentView::Map;
        }
        match self.mode {
            ViewMode::Normal => ContentView::Cards { compact: false },
            ViewMode::Compact => ContentView::Cards { compact: true },
            ViewMode::Table => ContentView::Table,
        }
    }
}
