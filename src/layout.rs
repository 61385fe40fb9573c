/// Default LED rectangle width in canvas units.
pub const LED_WIDTH: u32 = 20;

/// Default LED rectangle height in canvas units.
pub const LED_HEIGHT: u32 = 40;

/// Default gap after each LED in canvas units.
pub const LED_SPACING: u32 = 10;

/// Default outline width in canvas units.
pub const STROKE_WIDTH: u32 = 2;

/// Error types for layout validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("LED width must be non-zero")]
    ZeroLedWidth,
    #[error("LED height must be non-zero")]
    ZeroLedHeight,
    #[error("LED width plus spacing does not fit in u32")]
    PitchOverflow,
    #[error("{count} LEDs do not fit on the canvas (max {max})")]
    TooManyLeds { count: usize, max: usize },
}

/// Geometry of an LED row.
///
/// LEDs sit on a single horizontal axis at `y = 0`. Every LED is followed by
/// `spacing` units of gap, including the last one, so the canvas is exactly
/// `count * pitch()` wide.
///
/// Geometry saturates at `u32::MAX`; [`check_count`](Self::check_count)
/// tells whether a row is small enough to be laid out exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedLayout {
    pub led_width: u32,
    pub led_height: u32,
    pub spacing: u32,
    pub stroke_width: u32,
}

impl Default for LedLayout {
    fn default() -> Self {
        Self {
            led_width: LED_WIDTH,
            led_height: LED_HEIGHT,
            spacing: LED_SPACING,
            stroke_width: STROKE_WIDTH,
        }
    }
}

impl LedLayout {
    pub fn with_led_size(mut self, width: u32, height: u32) -> Self {
        self.led_width = width;
        self.led_height = height;
        self
    }

    pub fn with_spacing(mut self, spacing: u32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_stroke_width(mut self, stroke_width: u32) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    /// Reject layouts that would draw invisible LEDs or overflow the pitch.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.led_width == 0 {
            return Err(LayoutError::ZeroLedWidth);
        }
        if self.led_height == 0 {
            return Err(LayoutError::ZeroLedHeight);
        }
        if self.led_width.checked_add(self.spacing).is_none() {
            return Err(LayoutError::PitchOverflow);
        }
        Ok(())
    }

    /// Largest LED count whose canvas width fits in `u32`.
    pub fn max_leds(&self) -> usize {
        match self.pitch() {
            0 => usize::MAX,
            pitch => usize::try_from(u32::MAX / pitch).unwrap_or(usize::MAX),
        }
    }

    /// Reject a row of `count` LEDs whose canvas would not fit.
    pub fn check_count(&self, count: usize) -> Result<(), LayoutError> {
        let max = self.max_leds();
        if count > max {
            return Err(LayoutError::TooManyLeds { count, max });
        }
        Ok(())
    }

    /// Horizontal distance between the origins of adjacent LEDs.
    #[inline]
    pub fn pitch(&self) -> u32 {
        self.led_width.saturating_add(self.spacing)
    }

    /// Canvas `(width, height)` for `count` LEDs.
    pub fn canvas_size(&self, count: usize) -> (u32, u32) {
        (self.offset(count), self.led_height)
    }

    /// Top-left corner of the LED at `index`.
    #[inline]
    pub fn led_origin(&self, index: usize) -> (u32, u32) {
        (self.offset(index), 0)
    }

    fn offset(&self, slots: usize) -> u32 {
        u32::try_from(slots)
            .unwrap_or(u32::MAX)
            .saturating_mul(self.pitch())
    }
}
