use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f32, f32)", into = "(f32, f32)")]
pub struct AspectRatio {
    pub width: f32,
    pub height: f32,
}

impl AspectRatio {
    // Keeps both the ratio and its reciprocal finite and non-zero.
    pub const MIN_COMPONENT: f32 = 0.01;

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn clamped(self) -> Self {
        Self { width: clamp_component(self.width), height: clamp_component(self.height) }
    }

    pub fn is_clamped(&self) -> bool {
        *self == self.clamped()
    }

    /// Width divided by height.
    pub fn value(&self) -> f32 {
        self.width / self.height
    }
}

// NaN and infinity are replaced as well.
fn clamp_component(value: f32) -> f32 {
    if value.is_finite() && value >= AspectRatio::MIN_COMPONENT { value } else { AspectRatio::MIN_COMPONENT }
}

impl From<(f32, f32)> for AspectRatio {
    fn from((width, height): (f32, f32)) -> Self {
        Self::new(width, height)
    }
}

impl From<AspectRatio> for (f32, f32) {
    fn from(ratio: AspectRatio) -> Self {
        (ratio.width, ratio.height)
    }
}
