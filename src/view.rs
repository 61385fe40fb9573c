use crate::layout::{LayoutError, LedLayout};
use crate::palette::Palette;
use crate::render::Renderer;
use crate::scene::Scene;
use crate::strip::{LedStrip, StripError};

/// Top-level LED row: owns the current strip and keeps its scene in sync.
///
/// Every state change replaces the strip with a new value and triggers a
/// full redraw, so [`scene`](Self::scene) never holds nodes from an older
/// strip.
#[derive(Debug, Clone)]
pub struct LedView {
    strip: LedStrip,
    renderer: Renderer,
}

impl Default for LedView {
    fn default() -> Self {
        Self::from_strip(LedStrip::default(), Renderer::default())
    }
}

impl LedView {
    /// Create a view of `count` LEDs, all off, with the default geometry and colors.
    pub fn new(count: usize) -> Result<Self, LayoutError> {
        Self::with_config(count, LedLayout::default(), Palette::default())
    }

    /// Create a view with explicit geometry and colors.
    ///
    /// Fails if the layout is invalid or `count` LEDs do not fit on its canvas.
    pub fn with_config(
        count: usize,
        layout: LedLayout,
        palette: Palette,
    ) -> Result<Self, LayoutError> {
        layout.validate()?;
        layout.check_count(count)?;
        Ok(Self::from_strip(
            LedStrip::new(count),
            Renderer::new(layout, palette),
        ))
    }

    fn from_strip(strip: LedStrip, mut renderer: Renderer) -> Self {
        renderer.render(&strip);
        Self { strip, renderer }
    }

    #[inline]
    pub fn strip(&self) -> &LedStrip {
        &self.strip
    }

    #[inline]
    pub fn scene(&self) -> &Scene {
        self.renderer.scene()
    }

    #[inline]
    pub fn layout(&self) -> &LedLayout {
        self.renderer.layout()
    }

    #[inline]
    pub fn palette(&self) -> &Palette {
        self.renderer.palette()
    }

    /// Number of full redraws since creation, including the initial one.
    #[inline]
    pub fn redraws(&self) -> u64 {
        self.renderer.redraws()
    }

    /// Flip the LED at `index` and redraw.
    ///
    /// An out-of-range index leaves both the strip and the scene untouched.
    pub fn toggle(&mut self, index: usize) -> Result<(), StripError> {
        let next = self.strip.toggled(index).inspect_err(|e| {
            log::warn!("toggle rejected: {e}");
        })?;
        log::debug!(
            "LED {index} -> {}",
            if next.get(index) == Some(true) { "on" } else { "off" }
        );
        self.strip = next;
        self.renderer.render_if_changed(&self.strip);
        Ok(())
    }

    /// Toggle the LED drawn under the canvas point `(x, y)`.
    ///
    /// Returns the toggled index, or `None` when the point misses every LED.
    pub fn click(&mut self, x: u32, y: u32) -> Option<usize> {
        let index = self.scene().hit_test(x, y)?;
        self.toggle(index).ok()?;
        Some(index)
    }

    /// Switch every LED off, keeping the length.
    pub fn reset(&mut self) {
        self.strip = LedStrip::new(self.strip.len());
        self.renderer.render_if_changed(&self.strip);
    }
}
