use std::io::{self, Write};

use crate::LedDisplay;
use crate::palette::Rgb;
use crate::scene::Scene;
use crate::svg::write_svg;

/// Error type for host display operations.
#[derive(Debug, thiserror::Error)]
pub enum DisplayError {
    #[error("failed to write display output: {0}")]
    Io(#[from] io::Error),
}

/// Terminal-based LED row for development and testing.
///
/// Renders each scene node as a three-column cell with a 24-bit ANSI
/// background in the node's fill color, followed by an index ruler.
#[derive(Debug, Default)]
pub struct TerminalDisplay;

impl TerminalDisplay {
    /// Create a new terminal display.
    pub fn new() -> Self {
        Self
    }
}

impl LedDisplay for TerminalDisplay {
    type Error = DisplayError;

    fn show(&mut self, scene: &Scene) -> Result<(), Self::Error> {
        render_scene(&mut io::stdout(), scene)
    }
}

/// Render a scene to any writer. Extracted for testability.
pub(crate) fn render_scene(w: &mut impl Write, scene: &Scene) -> Result<(), DisplayError> {
    for node in scene.nodes() {
        write!(w, "{} ", format_cell(node.fill))?;
    }
    writeln!(w)?;
    for node in scene.nodes() {
        write!(w, "{:^3} ", node.led)?;
    }
    writeln!(w)?;
    w.flush()?;
    Ok(())
}

/// A blank cell with `fill` as its background.
pub(crate) fn format_cell(fill: Rgb) -> String {
    format!("\x1b[48;2;{};{};{}m   \x1b[0m", fill.r, fill.g, fill.b)
}

/// Writes each shown scene as a standalone SVG document.
#[derive(Debug)]
pub struct SvgDisplay<W> {
    out: W,
}

impl<W: Write> SvgDisplay<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> LedDisplay for SvgDisplay<W> {
    type Error = DisplayError;

    fn show(&mut self, scene: &Scene) -> Result<(), Self::Error> {
        write_svg(&mut self.out, scene)?;
        Ok(())
    }
}
