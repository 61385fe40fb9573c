//! SVG serialization of a [`Scene`].

use std::io::{self, Write};

use crate::scene::{RectNode, Scene};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Write `scene` as a standalone SVG document.
///
/// Nodes are emitted in draw order, each tagged with a `data-led` attribute
/// holding its LED index.
pub fn write_svg(w: &mut impl Write, scene: &Scene) -> io::Result<()> {
    writeln!(
        w,
        r#"<svg xmlns="{SVG_NS}" width="{}" height="{}">"#,
        scene.width(),
        scene.height()
    )?;
    for node in scene.nodes() {
        write_rect(w, node)?;
    }
    writeln!(w, "</svg>")?;
    w.flush()
}

fn write_rect(w: &mut impl Write, node: &RectNode) -> io::Result<()> {
    writeln!(
        w,
        r#"  <rect data-led="{}" x="{}" y="{}" width="{}" height="{}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
        node.led, node.x, node.y, node.width, node.height, node.fill, node.stroke, node.stroke_width
    )
}

/// Render `scene` to an SVG string.
pub fn to_svg_string(scene: &Scene) -> String {
    let mut buf = Vec::new();
    // Writing to a Vec cannot fail and the output is ASCII.
    let _ = write_svg(&mut buf, scene);
    String::from_utf8_lossy(&buf).into_owned()
}
