#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AspectRange {
    pub min: f32,
    pub max: f32,
}

impl AspectRange {
    pub fn new(min: crate::AspectRatio, max: crate::AspectRatio) -> Self {
        Self { min: min.value(), max: max.value() }
    }

    pub fn is_inverted(&self) -> bool {
        self.min > self.max
    }

    pub fn contains(&self, aspect: f32) -> bool {
        aspect >= self.min && aspect <= self.max
    }

    // An inverted range always resolves to its min bound.
    pub fn clamp(&self, aspect: f32) -> f32 {
        if self.is_inverted() || aspect < self.min {
            self.min
        } else if self.contains(aspect) {
            aspect
        } else {
            self.max
        }
    }
}
