use std::fmt;

/// Degrees the indicator turns per tick. 360 / 12 capsules.
pub const ANGLE_STEP: u16 = 30;

const FULL_TURN: i64 = 360;

/// Rotation of the frontmost capsule, always in `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Angle(u16);

impl Angle {
    pub const ZERO: Self = Self(0);

    /// Wraps any degree value into `[0, 360)`.
    pub fn new(degrees: i64) -> Self {
        Self(degrees.rem_euclid(FULL_TURN) as u16)
    }

    pub fn degrees(self) -> u16 {
        self.0
    }

    /// The angle after one tick.
    pub fn advanced(self) -> Self {
        Self::new(i64::from(self.0) + i64::from(ANGLE_STEP))
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 0)]
    #[case(359, 359)]
    #[case(360, 0)]
    #[case(750, 30)]
    #[case(-30, 330)]
    fn new_wraps_into_range(#[case] input: i64, #[case] expected: u16) {
        assert_eq!(Angle::new(input).degrees(), expected);
    }

    #[rstest]
    #[case(0, 30)]
    #[case(330, 0)]
    #[case(350, 20)]
    fn advanced_steps_by_thirty(#[case] start: i64, #[case] expected: u16) {
        assert_eq!(Angle::new(start).advanced().degrees(), expected);
    }

    #[test]
    fn twelve_steps_complete_a_turn() {
        let mut angle = Angle::ZERO;
        for _ in 0..12 {
            angle = angle.advanced();
            assert!(angle.degrees() < 360);
        }

        assert_eq!(angle, Angle::ZERO);
    }

    #[test]
    fn display_shows_degrees() {
        assert_eq!(Angle::new(90).to_string(), "90°");
    }
}
