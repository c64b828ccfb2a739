//! Collision detection and response in one dimension
//!
//! Contacts are detected by overlap after a position update, so a contact
//! fires on the first tick the two shapes touch or interpenetrate.

use super::state::{Body, Boundary};

/// Post-collision velocities of a perfectly elastic 1-D collision
///
/// Both results are computed from the pre-collision velocities; neither
/// output feeds into the other.
#[inline]
pub fn elastic_collision(m1: f64, v1: f64, m2: f64, v2: f64) -> (f64, f64) {
    let total = m1 + m2;
    let v1_after = ((m1 - m2) * v1 + 2.0 * m2 * v2) / total;
    let v2_after = (2.0 * m1 * v1 + (m2 - m1) * v2) / total;
    (v1_after, v2_after)
}

/// The heavy block's left edge has reached the light block's right edge
#[inline]
pub fn blocks_in_contact(heavy: &Body, light: &Body) -> bool {
    heavy.position <= light.right_edge()
}

/// Resolve a heavy/light contact in place
///
/// Returns the heavy block's new velocity.
pub fn resolve_block_collision(heavy: &mut Body, light: &mut Body) -> f64 {
    let (heavy_v, light_v) =
        elastic_collision(heavy.mass(), heavy.velocity, light.mass(), light.velocity);
    heavy.velocity = heavy_v;
    light.velocity = light_v;
    heavy_v
}

/// The body's left edge has reached the wall
#[inline]
pub fn touches_wall(body: &Body, wall: &Boundary) -> bool {
    body.position <= wall.position()
}

/// Bounce a body off the wall (sign flip, magnitude unchanged)
#[inline]
pub fn reflect(body: &mut Body) {
    body.velocity = -body.velocity;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Arena, BodyKind, BoundaryKind};

    fn body(kind: BodyKind, mass: f64, position: f64, velocity: f64) -> Body {
        let mut b = Body::new(kind, mass, &Arena::default());
        b.position = position;
        b.velocity = velocity;
        b
    }

    #[test]
    fn test_equal_masses_swap_velocities() {
        let (a, b) = elastic_collision(2.0, 3.0, 2.0, -1.0);
        assert_eq!(a, -1.0);
        assert_eq!(b, 3.0);
    }

    #[test]
    fn test_light_at_rest_is_kicked_forward() {
        // 16:1, heavy moving left at 100
        let (heavy, light) = elastic_collision(16.0, -100.0, 1.0, 0.0);
        assert!((heavy - (-1500.0 / 17.0)).abs() < 1e-12);
        assert!((light - (-3200.0 / 17.0)).abs() < 1e-12);
    }

    #[test]
    fn test_velocities_use_pre_collision_values() {
        let (m1, v1, m2, v2) = (3.0, -2.0, 1.0, 1.0);
        let (heavy, light) = elastic_collision(m1, v1, m2, v2);
        assert_eq!(heavy, -0.5);
        assert_eq!(light, -3.5);

        // Feeding the updated heavy velocity into the light update gives a different answer
        let sequential_light = (2.0 * m1 * heavy + (m2 - m1) * v2) / (m1 + m2);
        assert_eq!(sequential_light, -1.25);
        assert_ne!(light, sequential_light);
    }

    #[test]
    fn test_momentum_and_energy_conserved() {
        let (m1, v1, m2, v2) = (1600.0, -37.5, 1.0, 220.0);
        let (a, b) = elastic_collision(m1, v1, m2, v2);

        let p0 = m1 * v1 + m2 * v2;
        let p1 = m1 * a + m2 * b;
        assert!((p0 - p1).abs() < 1e-9 * p0.abs().max(1.0));

        let e0 = 0.5 * m1 * v1 * v1 + 0.5 * m2 * v2 * v2;
        let e1 = 0.5 * m1 * a * a + 0.5 * m2 * b * b;
        assert!((e0 - e1).abs() < 1e-9 * e0);
    }

    #[test]
    fn test_block_contact_boundary() {
        let light = body(BodyKind::Light, 1.0, 100.0, 0.0);
        let touching = body(BodyKind::Heavy, 16.0, 120.0, -1.0);
        let apart = body(BodyKind::Heavy, 16.0, 120.5, -1.0);
        let overlapping = body(BodyKind::Heavy, 16.0, 115.0, -1.0);

        assert!(blocks_in_contact(&touching, &light));
        assert!(!blocks_in_contact(&apart, &light));
        assert!(blocks_in_contact(&overlapping, &light));
    }

    #[test]
    fn test_resolve_block_collision() {
        let mut heavy = body(BodyKind::Heavy, 16.0, 120.0, -100.0);
        let mut light = body(BodyKind::Light, 1.0, 100.0, 0.0);

        let heavy_v = resolve_block_collision(&mut heavy, &mut light);

        assert_eq!(heavy_v, heavy.velocity);
        assert!(heavy.velocity < 0.0);
        assert!(light.velocity < heavy.velocity);
    }

    #[test]
    fn test_wall_contact_and_reflection() {
        let wall = Boundary::new(BoundaryKind::Wall, &Arena::default());
        let mut light = body(BodyKind::Light, 1.0, 20.0, -188.25);

        assert!(touches_wall(&light, &wall));
        reflect(&mut light);
        assert_eq!(light.velocity, 188.25);

        light.position = 20.001;
        assert!(!touches_wall(&light, &wall));
    }
}
