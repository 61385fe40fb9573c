pub mod layout;
pub mod palette;
pub mod render;
pub mod scene;
pub mod strip;
pub mod svg;
pub mod view;

pub use strip::{LedStrip, StripError};
pub use view::LedView;

/// Trait for presenting a rendered LED row.
///
/// Abstracts over output surfaces (terminal, SVG document, browser),
/// providing a uniform interface for the output side of the view.
pub trait LedDisplay {
    /// Error type for display update failures.
    type Error: std::fmt::Debug + std::fmt::Display;

    /// Show the given scene on the display.
    ///
    /// Implementations map [`scene::RectNode`]s to surface-specific output
    /// (terminal cells, SVG elements, etc.).
    fn show(&mut self, scene: &scene::Scene) -> Result<(), Self::Error>;
}

#[cfg(not(target_arch = "wasm32"))]
pub mod mock;

#[cfg(feature = "web")]
pub mod web;
