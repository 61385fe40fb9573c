use crate::layout::LedLayout;
use crate::palette::Palette;
use crate::scene::{RectNode, Scene};
use crate::strip::LedStrip;

/// Draw `strip` into `scene`, discarding whatever the scene held before.
///
/// The canvas is resized to fit the strip and one rectangle is appended per
/// LED, left to right.
pub fn draw_strip(scene: &mut Scene, strip: &LedStrip, layout: &LedLayout, palette: &Palette) {
    scene.clear();

    let (width, height) = layout.canvas_size(strip.len());
    scene.resize(width, height);

    for (led, on) in strip.iter().enumerate() {
        let (x, y) = layout.led_origin(led);
        scene.push_rect(RectNode {
            led,
            x,
            y,
            width: layout.led_width,
            height: layout.led_height,
            fill: palette.fill_for(on),
            stroke: palette.outline,
            stroke_width: layout.stroke_width,
        });
    }
}

/// Full-redraw renderer owning a retained [`Scene`].
///
/// Remembers the last strip it drew so callers can skip redraws when nothing
/// changed.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    layout: LedLayout,
    palette: Palette,
    scene: Scene,
    last: Option<LedStrip>,
    redraws: u64,
}

impl Renderer {
    pub fn new(layout: LedLayout, palette: Palette) -> Self {
        Self {
            layout,
            palette,
            scene: Scene::new(),
            last: None,
            redraws: 0,
        }
    }

    #[inline]
    pub fn layout(&self) -> &LedLayout {
        &self.layout
    }

    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    #[inline]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Number of full redraws performed so far.
    #[inline]
    pub fn redraws(&self) -> u64 {
        self.redraws
    }

    /// Clear and redraw the whole scene for `strip`.
    pub fn render(&mut self, strip: &LedStrip) -> &Scene {
        draw_strip(&mut self.scene, strip, &self.layout, &self.palette);
        self.redraws += 1;
        log::debug!(
            "redraw #{}: {} LEDs, {} on",
            self.redraws,
            strip.len(),
            strip.count_on()
        );
        self.last = Some(strip.clone());
        &self.scene
    }

    /// Redraw only if `strip` differs from the last drawn strip.
    ///
    /// Returns whether a redraw happened.
    pub fn render_if_changed(&mut self, strip: &LedStrip) -> bool {
        if self.last.as_ref() == Some(strip) {
            return false;
        }
        self.render(strip);
        true
    }
}
