#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn from_size(width: u16, height: u16) -> Self {
        Self::new(0, 0, width, height)
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    pub fn shrink(self, top: u16, right: u16, bottom: u16, left: u16) -> Self {
        let x = self.x.saturating_add(left);
        let y = self.y.saturating_add(top);
        let width = self.width.saturating_sub(left + right);
        let height = self.height.saturating_sub(top + bottom);
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Overlapping area of two rects (empty when they do not overlap).
    pub fn intersect(&self, other: Rect) -> Rect {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        Rect::new(x, y, right.saturating_sub(x), bottom.saturating_sub(y))
    }

    /// Shift by a signed offset. Returns `None` if the shifted rect lies
    /// entirely left of or above the origin; a partially negative rect is cut
    /// at the origin.
    pub fn translate(&self, dx: i32, dy: i32) -> Option<Rect> {
        let x = self.x as i32 + dx;
        let y = self.y as i32 + dy;
        let right = x + self.width as i32;
        let bottom = y + self.height as i32;
        if right <= 0 || bottom <= 0 {
            return None;
        }
        let clamp = |v: i32| v.clamp(0, u16::MAX as i32) as u16;
        let (x, y) = (clamp(x), clamp(y));
        Some(Rect::new(
            x,
            y,
            clamp(right).saturating_sub(x),
            clamp(bottom).saturating_sub(y),
        ))
    }
}
