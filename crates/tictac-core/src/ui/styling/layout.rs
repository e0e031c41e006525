//! Padding and density-independent dimensions

/// Padding around an element (top, right, bottom, left)
///
/// # Examples
///
/// ```ignore
/// let p = Padding::symmetric(12, 16);
/// assert_eq!(p.horizontal(), 32);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Padding {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Padding {
    /// Equal padding on all sides
    pub fn all(value: u32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// `vertical` for top and bottom, `horizontal` for left and right
    pub fn symmetric(vertical: u32, horizontal: u32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    pub fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Total horizontal padding (left + right)
    pub fn horizontal(&self) -> u32 {
        self.left + self.right
    }

    /// Total vertical padding (top + bottom)
    pub fn vertical(&self) -> u32 {
        self.top + self.bottom
    }
}

/// Convert density-independent units to whole pixels, rounding to nearest.
///
/// `density` is pixels per dp (1.0 on the reference display).
pub fn dp_to_px(dp: f32, density: f32) -> u32 {
    let px = dp * density;
    if px <= 0.0 { 0 } else { (px + 0.5) as u32 }
}
