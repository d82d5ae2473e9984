//! Arc geometry resolution
//!
//! Computes the arc center and included angle from two endpoints, a
//! signed radius, and a rotation direction. For a given chord there are
//! four geometrically possible arcs; the direction flag picks the side
//! of the chord the center falls on, and the sign of the radius picks
//! the minor or major arc.

use arcstep_core::{MachinePoint, MotionError, Result, RotationDirection};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Chord lengths at or below this are treated as a degenerate command.
const CHORD_EPSILON: f64 = 1e-9;

/// Resolved geometry of one arc command
///
/// Created fresh per command and discarded when the arc completes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcGeometry {
    /// Arc center in machine coordinates
    pub center: MachinePoint,
    /// Angular extent of the arc in radians, in `(0, 2*pi)`
    pub included_angle: f64,
    /// The commanded signed radius
    pub radius: f64,
}

impl ArcGeometry {
    /// Arc length along the circle, `included_angle * |radius|`
    pub fn arc_length(&self) -> f64 {
        self.included_angle * self.radius.abs()
    }
}

/// Resolve the center and included angle of an arc
///
/// The perpendicular offset from the chord midpoint to the center has
/// magnitude `sqrt(r^2 - (q/2)^2)` along the chord's unit normal
/// `(-dy/q, dx/q)`, where `q` is the chord length. The base included
/// angle comes from the law of cosines on the isoceles triangle formed
/// by the two radii and the chord; a negative radius selects the major
/// arc and reflects the angle to `2*pi - theta`.
///
/// # Errors
///
/// - [`MotionError::DegenerateChord`] if the endpoints coincide
/// - [`MotionError::GeometricallyInfeasible`] if the chord is longer
///   than the diameter
/// - [`MotionError::ZeroRadius`] / [`MotionError::NonFiniteInput`] for
///   malformed commands
pub fn resolve_arc(
    start: MachinePoint,
    end: MachinePoint,
    radius: f64,
    direction: RotationDirection,
) -> Result<ArcGeometry> {
    for (value, context) in [
        (start.x, "start.x"),
        (start.y, "start.y"),
        (end.x, "end.x"),
        (end.y, "end.y"),
        (radius, "radius"),
    ] {
        if !value.is_finite() {
            return Err(MotionError::NonFiniteInput {
                context: context.to_string(),
            });
        }
    }
    if radius == 0.0 {
        return Err(MotionError::ZeroRadius);
    }

    let dx = end.x - start.x;
    let dy = end.y - start.y;
    let chord_sq = dx * dx + dy * dy;
    let chord = chord_sq.sqrt();
    if chord <= CHORD_EPSILON {
        return Err(MotionError::DegenerateChord {
            x: start.x,
            y: start.y,
        });
    }
    let diameter = 2.0 * radius.abs();
    if chord > diameter {
        return Err(MotionError::GeometricallyInfeasible { chord, diameter });
    }

    let radius_sq = radius * radius;
    // Law of cosines; the clamp guards against float dust when the chord
    // equals the diameter.
    let minor_angle = (1.0 - chord_sq / (2.0 * radius_sq)).clamp(-1.0, 1.0).acos();
    let half_chord = chord / 2.0;
    let offset = (radius_sq - half_chord * half_chord).max(0.0).sqrt();
    let mid_x = (start.x + end.x) / 2.0;
    let mid_y = (start.y + end.y) / 2.0;
    let normal_x = -dy / chord;
    let normal_y = dx / chord;

    // Clockwise with a positive radius (and counter-clockwise with a
    // negative one) puts the center on the negative-normal side of the
    // chord; the other two combinations use the positive side.
    let toward_negative = matches!(
        (direction, radius > 0.0),
        (RotationDirection::Clockwise, true) | (RotationDirection::CounterClockwise, false)
    );
    let side = if toward_negative { -1.0 } else { 1.0 };

    let center = MachinePoint::new(mid_x + side * offset * normal_x, mid_y + side * offset * normal_y);
    let included_angle = if radius > 0.0 {
        minor_angle
    } else {
        TAU - minor_angle
    };

    Ok(ArcGeometry {
        center,
        included_angle,
        radius,
    })
}
