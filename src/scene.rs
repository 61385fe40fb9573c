use crate::palette::Rgb;

/// A filled, outlined rectangle drawn for one LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RectNode {
    /// Index of the LED this node was drawn for.
    pub led: usize,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub fill: Rgb,
    pub stroke: Rgb,
    pub stroke_width: u32,
}

impl RectNode {
    /// Whether the point lies inside this rectangle, edges included.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        // u64 so a node at the far edge of the canvas cannot overflow
        let (x, y) = (u64::from(x), u64::from(y));
        let (left, top) = (u64::from(self.x), u64::from(self.y));
        x >= left
            && y >= top
            && x <= left + u64::from(self.width)
            && y <= top + u64::from(self.height)
    }
}

/// Retained vector scene: a sized canvas holding rectangle nodes in draw order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Scene {
    width: u32,
    height: u32,
    nodes: Vec<RectNode>,
}

impl Scene {
    pub const fn new() -> Self {
        Self {
            width: 0,
            height: 0,
            nodes: Vec::new(),
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Remove every node. The canvas size is kept.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    pub fn push_rect(&mut self, node: RectNode) {
        self.nodes.push(node);
    }

    #[inline]
    pub fn nodes(&self) -> &[RectNode] {
        &self.nodes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The node drawn for LED `index`, if any.
    pub fn node_for(&self, index: usize) -> Option<&RectNode> {
        self.nodes.iter().find(|node| node.led == index)
    }

    /// Index of the LED whose rectangle contains the point.
    ///
    /// Later nodes are drawn on top, so they win on overlap.
    pub fn hit_test(&self, x: u32, y: u32) -> Option<usize> {
        self.nodes
            .iter()
            .rev()
            .find(|node| node.contains(x, y))
            .map(|node| node.led)
    }
}
