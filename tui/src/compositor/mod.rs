//! Layered Compositor
//!
//! Stacks per-region buffers into one frame. Each layer owns a buffer in
//! its own origin coordinates and is placed on the frame by its bounds;
//! layers are drawn back to front by z-index.
//!
//! Layers are opaque: every cell inside a layer's bounds replaces what is
//! beneath it, so a toolbar's background fill survives compositing.

mod layer;

use std::collections::HashMap;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

pub use layer::Layer;

/// Unique identifier for a layer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LayerId(u32);

/// The compositor manages all layers and composites them together
pub struct Compositor {
    /// All layers by ID
    layers: HashMap<LayerId, Layer>,
    /// Layers sorted by z-index for rendering
    render_order: Vec<LayerId>,
    /// Next layer ID to assign
    next_id: u32,
    /// Output buffer (composited result)
    output: Buffer,
    /// Total area
    area: Rect,
}

impl Compositor {
    /// Create a new compositor for the given area
    pub fn new(area: Rect) -> Self {
        Self {
            layers: HashMap::new(),
            render_order: Vec::new(),
            next_id: 0,
            output: Buffer::empty(area),
            area,
        }
    }

    /// Create a new layer and return its ID
    pub fn create_layer(&mut self, bounds: Rect, z_index: i32) -> LayerId {
        let id = LayerId(self.next_id);
        self.next_id += 1;

        self.layers.insert(id, Layer::new(bounds, z_index));
        self.update_render_order();

        id
    }

    /// Get mutable access to a layer's buffer for rendering
    pub fn layer_buffer_mut(&mut self, id: LayerId) -> Option<&mut Buffer> {
        self.layers.get_mut(&id).map(|l| &mut l.buffer)
    }

    /// Move and resize a layer; its buffer is reallocated empty
    pub fn place_layer(&mut self, id: LayerId, bounds: Rect) {
        if let Some(layer) = self.layers.get_mut(&id) {
            layer.place(bounds);
        }
    }

    /// Resize the entire compositor
    pub fn resize(&mut self, area: Rect) {
        self.area = area;
        self.output = Buffer::empty(area);
    }

    /// Current output area
    pub fn area(&self) -> Rect {
        self.area
    }

    /// Composite all layers into the output buffer
    pub fn composite(&mut self) -> &Buffer {
        self.output.reset();

        for id in &self.render_order {
            if let Some(layer) = self.layers.get(id) {
                Self::blit_layer(&mut self.output, &self.area, layer);
            }
        }

        &self.output
    }

    /// Copy a layer onto the output buffer, clipped to the output area
    fn blit_layer(output: &mut Buffer, area: &Rect, layer: &Layer) {
        let visible = layer.bounds.intersection(*area);

        for y in visible.top()..visible.bottom() {
            for x in visible.left()..visible.right() {
                if let (Some(src), Some(dst)) = (layer.cell_at(x, y), output.cell_mut((x, y))) {
                    *dst = src.clone();
                }
            }
        }
    }

    /// Update render order based on z-indices
    fn update_render_order(&mut self) {
        self.render_order = self.layers.keys().copied().collect();
        self.render_order
            .sort_by_key(|id| self.layers.get(id).map(|l| l.z_index).unwrap_or(0));
    }
}
