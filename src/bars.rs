/// Which pair of screen edges the unused space ends up on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bars {
    /// Left and right (pillarbox). The viewport fills the full height.
    Vertical,
    /// Top and bottom (letterbox), or none at all. The viewport fills the full width.
    Horizontal,
}

impl Bars {
    pub fn from_aspects(screen_aspect: f32, camera_aspect: f32) -> Self {
        if screen_aspect > camera_aspect { Self::Vertical } else { Self::Horizontal }
    }

    pub fn is_vertical(&self) -> bool {
        match self {
            Self::Vertical => true,
            Self::Horizontal => false,
        }
    }

    /// The fraction of the bar axis that the viewport covers, in (0, 1].
    pub fn extent(&self, screen_aspect: f32, camera_aspect: f32) -> f32 {
        match self {
            Self::Vertical => camera_aspect / screen_aspect,
            Self::Horizontal => screen_aspect / camera_aspect,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_pillarboxes_screens_wider_than_the_camera() {
        let bars = Bars::from_aspects(2560. / 1080., 16. / 9.);

        assert_eq!(bars, Bars::Vertical);
        assert_eq!(bars.extent(2560. / 1080., 16. / 9.), 0.75);
    }

    #[test]
    fn it_letterboxes_when_the_aspects_match() {
        let bars = Bars::from_aspects(16. / 9., 16. / 9.);

        assert_eq!(bars, Bars::Horizontal);
        assert_eq!(bars.extent(16. / 9., 16. / 9.), 1.);
    }

    #[test]
    fn it_letterboxes_screens_narrower_than_the_camera() {
        let bars = Bars::from_aspects(1.2, 1.5);

        assert!(!bars.is_vertical());
        assert_eq!(bars.extent(1.2, 1.5), 0.8);
    }
}
