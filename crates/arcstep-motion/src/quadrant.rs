//! Quadrant classification and per-quadrant axis signs
//!
//! Circular motion has a four-fold rotational symmetry: the stepping
//! rule is the same in every quadrant once each axis is given the right
//! travel sign. The table below encodes that symmetry so a single
//! error-minimization rule covers the whole circle.
//!
//! The quadrant encoding is non-monotonic: 0 -> Q1, 1 -> Q2, 3 -> Q3,
//! 2 -> Q4. It is kept as an interface contract with the sign table.

use arcstep_core::RotationDirection;

/// Per-axis step sign for the current quadrant and rotation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisSigns {
    /// X step sign, -1 or +1
    pub x: i8,
    /// Y step sign, -1 or +1
    pub y: i8,
}

/// Axis signs for clockwise rotation, indexed by quadrant code.
///
/// Counter-clockwise rotation negates every entry.
const CLOCKWISE_SIGNS: [AxisSigns; 4] = [
    AxisSigns { x: 1, y: -1 },  // 0: Q1
    AxisSigns { x: 1, y: 1 },   // 1: Q2
    AxisSigns { x: -1, y: -1 }, // 2: Q4
    AxisSigns { x: -1, y: 1 },  // 3: Q3
];

/// Classify the live point's quadrant relative to the arc center
///
/// `xo` and `yo` are the results of comparing the scaled live position
/// against the scaled center: at-or-right-of and at-or-above.
pub fn quadrant_index(xo: bool, yo: bool) -> usize {
    (if xo { 0 } else { 1 }) + (if yo { 0 } else { 2 })
}

/// Look up the per-axis step signs for a quadrant and direction
pub fn axis_signs(direction: RotationDirection, quadrant: usize) -> AxisSigns {
    debug_assert!(quadrant < 4);
    let signs = CLOCKWISE_SIGNS[quadrant];
    match direction {
        RotationDirection::Clockwise => signs,
        RotationDirection::CounterClockwise => AxisSigns {
            x: -signs.x,
            y: -signs.y,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quadrant_encoding() {
        // Q1, Q2, Q3, Q4 in order of signs
        assert_eq!(quadrant_index(true, true), 0);
        assert_eq!(quadrant_index(false, true), 1);
        assert_eq!(quadrant_index(false, false), 3);
        assert_eq!(quadrant_index(true, false), 2);
    }

    #[test]
    fn test_clockwise_table() {
        let expected = [(1, -1), (1, 1), (-1, -1), (-1, 1)];
        for (quadrant, (x, y)) in expected.into_iter().enumerate() {
            let signs = axis_signs(RotationDirection::Clockwise, quadrant);
            assert_eq!((signs.x, signs.y), (x, y), "quadrant {quadrant}");
        }
    }

    #[test]
    fn test_directions_are_sign_negations() {
        for quadrant in 0..4 {
            let cw = axis_signs(RotationDirection::Clockwise, quadrant);
            let ccw = axis_signs(RotationDirection::CounterClockwise, quadrant);
            assert_eq!(cw.x, -ccw.x);
            assert_eq!(cw.y, -ccw.y);
        }
    }
}
