#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Landscape,
    Portrait,
}

impl Orientation {
    // A square screen counts as portrait.
    pub fn from_aspect(aspect: f32) -> Self {
        if aspect > 1. { Self::Landscape } else { Self::Portrait }
    }

    pub fn is_landscape(&self) -> bool {
        match self {
            Self::Landscape => true,
            Self::Portrait => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_treats_wider_than_tall_as_landscape() {
        assert_eq!(Orientation::from_aspect(16. / 9.), Orientation::Landscape);
        assert_eq!(Orientation::from_aspect(1.0001), Orientation::Landscape);
    }

    #[test]
    fn it_treats_square_and_taller_as_portrait() {
        assert_eq!(Orientation::from_aspect(1.), Orientation::Portrait);
        assert_eq!(Orientation::from_aspect(0.5625), Orientation::Portrait);
        assert!(!Orientation::from_aspect(1.).is_landscape());
    }
}
