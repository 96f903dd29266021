/// Horizontal displacement a swipe must exceed to count as navigation.
pub const SWIPE_THRESHOLD: f32 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Forward,
    Backward,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSample {
    start_x: f32,
}

impl GestureSample {
    pub fn begin(start_x: f32) -> Self {
        Self { start_x }
    }

    /// Consumes the sample. A leftward swipe (negative delta) moves forward.
    pub fn finish(self, end_x: f32) -> Option<SwipeDirection> {
        let delta = end_x - self.start_x;
        if delta.is_nan() || delta.abs() <= SWIPE_THRESHOLD {
            return None;
        }
        if delta < 0.0 {
            Some(SwipeDirection::Forward)
        } else {
            Some(SwipeDirection::Backward)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swipe_direction_follows_delta_sign() {
        assert_eq!(
            GestureSample::begin(300.0).finish(200.0),
            Some(SwipeDirection::Forward)
        );
        assert_eq!(
            GestureSample::begin(200.0).finish(300.0),
            Some(SwipeDirection::Backward)
        );
    }

    #[test]
    fn dead_zone_includes_threshold() {
        assert_eq!(GestureSample::begin(300.0).finish(290.0), None);
        assert_eq!(GestureSample::begin(300.0).finish(250.0), None);
        assert_eq!(GestureSample::begin(300.0).finish(350.0), None);
        assert_eq!(
            GestureSample::begin(300.0).finish(249.0),
            Some(SwipeDirection::Forward)
        );
    }

    #[test]
    fn non_finite_positions_are_ignored() {
        assert_eq!(GestureSample::begin(f32::NAN).finish(0.0), None);
    }
}
