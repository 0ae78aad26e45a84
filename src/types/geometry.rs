use serde::Serialize;

/// An axis-aligned rectangle in integer pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns the rectangle shrunk by `amount` on every side.
    ///
    /// The size saturates at zero.
    pub fn inset(&self, amount: u32) -> Rect {
        Rect {
            x: self.x.saturating_add(clamp_i32(amount)),
            y: self.y.saturating_add(clamp_i32(amount)),
            width: self.width.saturating_sub(amount.saturating_mul(2)),
            height: self.height.saturating_sub(amount.saturating_mul(2)),
        }
    }

    pub fn right(&self) -> i32 {
        self.x.saturating_add(clamp_i32(self.width))
    }

    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(clamp_i32(self.height))
    }

    pub fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x && py >= self.y && px < self.right() && py < self.bottom()
    }

    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

fn clamp_i32(n: u32) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}

/// Logical size of the screen the window is placed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSize {
    pub width: u32,
    pub height: u32,
}

/// Top-left corner of the window on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WindowPosition {
    pub x: i32,
    pub y: i32,
}
