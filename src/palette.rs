use std::fmt;
use std::ops::Range;
use std::str::FromStr;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0x00, 0x00, 0x00);
    /// CSS `green`, not full-intensity lime.
    pub const GREEN: Self = Self::new(0x00, 0x80, 0x00);
    pub const RED: Self = Self::new(0xff, 0x00, 0x00);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Color at `step` of a linear fade from `start` to `end` in `total_steps`.
    ///
    /// `step == 0` yields `start`; `step == total_steps` yields `end`.
    /// Each channel is `start + (end - start) * step / total_steps`, truncated.
    pub fn interpolate(start: Self, end: Self, step: u32, total_steps: u32) -> Self {
        if total_steps == 0 || step >= total_steps {
            return end;
        }
        let (step, total) = (i64::from(step), i64::from(total_steps));
        let channel = |s: u8, e: u8| -> u8 {
            let (s, e) = (i64::from(s), i64::from(e));
            // Lies between s and e, so it fits in u8 and floor equals truncation.
            let value = (s * total + (e - s) * step).div_euclid(total);
            u8::try_from(value).unwrap_or(if e > s { u8::MAX } else { 0 })
        };
        Self::new(
            channel(start.r, end.r),
            channel(start.g, end.g),
            channel(start.b, end.b),
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Error when parsing a `#rrggbb` color.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid color '{0}', expected #rrggbb")]
pub struct ColorParseError(String);

impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ColorParseError(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(err)?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(err());
        }
        let channel = |range: Range<usize>| u8::from_str_radix(&hex[range], 16).map_err(|_| err());
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

/// Linear fade between two colors.
///
/// Yields `steps` colors starting at `start`; the last one is one step short
/// of `end`, matching a loop that sets each color and then waits.
#[derive(Debug, Clone)]
pub struct Fade {
    start: Rgb,
    end: Rgb,
    step: u32,
    steps: u32,
}

impl Fade {
    pub fn new(start: Rgb, end: Rgb, steps: u32) -> Self {
        Self {
            start,
            end,
            step: 0,
            steps,
        }
    }
}

impl Iterator for Fade {
    type Item = Rgb;

    fn next(&mut self) -> Option<Self::Item> {
        if self.step >= self.steps {
            return None;
        }
        let color = Rgb::interpolate(self.start, self.end, self.step, self.steps);
        self.step += 1;
        Some(color)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.steps - self.step) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Fade {}

/// Colors used to draw an LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub on: Rgb,
    pub off: Rgb,
    pub outline: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            on: Rgb::GREEN,
            off: Rgb::RED,
            outline: Rgb::BLACK,
        }
    }
}

impl Palette {
    /// Fill color for an LED in the given state.
    #[inline]
    pub fn fill_for(&self, on: bool) -> Rgb {
        if on { self.on } else { self.off }
    }
}
