//! Badge geometry: every proportion is derived from the icon size with
//! truncating integer division, so different sizes round differently.

/// Axis-aligned rectangle with inclusive corner coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Rect {
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Rectangle of half-extents `half_w` x `half_h` around `(cx, cy)`.
    pub fn centered(cx: i32, cy: i32, half_w: i32, half_h: i32) -> Self {
        Self::new(cx - half_w, cy - half_h, cx + half_w, cy + half_h)
    }

    /// Distance between the left and right corner coordinates.
    pub fn span_x(&self) -> i32 {
        self.x1 - self.x0
    }

    pub fn span_y(&self) -> i32 {
        self.y1 - self.y0
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x0 && x <= self.x1 && y >= self.y0 && y <= self.y1
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeGeometry {
    pub size: u32,
    pub padding: i32,
    pub border_width: i32,
    pub corner_radius: i32,
    pub center: i32,
    /// Arm span of the cross
    pub cross_size: i32,
    /// Arm thickness of the cross
    pub cross_width: i32,
    pub outline: Rect,
    pub vertical_bar: Rect,
    pub horizontal_bar: Rect,
}

impl BadgeGeometry {
    /// Derive the badge layout for a `size` x `size` canvas.
    pub fn for_size(size: u32) -> Self {
        let s = size as i32;
        let padding = s / 10;
        let border_width = (s / 25).max(2);
        let corner_radius = s / 6;
        let center = s / 2;
        let cross_size = s / 3;
        let cross_width = s / 8;

        Self {
            size,
            padding,
            border_width,
            corner_radius,
            center,
            cross_size,
            cross_width,
            outline: Rect::new(padding, padding, s - padding, s - padding),
            vertical_bar: Rect::centered(center, center, cross_width / 2, cross_size / 2),
            horizontal_bar: Rect::centered(center, center, cross_size / 2, cross_width / 2),
        }
    }
}
