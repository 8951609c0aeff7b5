//! Collision detection and response for spheres in a cube
//!
//! Responses are deliberately simple: overlapping spheres exchange their
//! velocity vectors, and a sphere touching a wall has that axis's velocity
//! negated. Neither pass moves any body.

use super::state::Body;

/// Whether two spheres interpenetrate (touching exactly does not count)
#[inline]
pub fn spheres_overlap(a: &Body, b: &Body) -> bool {
    a.position.distance(b.position) < a.radius + b.radius
}

/// Per-axis wall contact flags for a body in a cube of the given half size
pub fn wall_contact(body: &Body, half_size: f32) -> [bool; 3] {
    let mut contact = [false; 3];
    for (axis, hit) in contact.iter_mut().enumerate() {
        let p = body.position[axis];
        *hit = p + body.radius > half_size || p - body.radius < -half_size;
    }
    contact
}

/// Swap velocities of every overlapping pair
///
/// Pairs (i, j) with i < j are visited in ascending index order. A body that
/// overlaps several neighbours is swapped once per pair, so the final
/// velocity depends on that order.
pub fn resolve_sphere_collisions(bodies: &mut [Body]) -> usize {
    let mut swaps = 0;
    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            if spheres_overlap(&bodies[i], &bodies[j]) {
                let (head, tail) = bodies.split_at_mut(j);
                std::mem::swap(&mut head[i].velocity, &mut tail[0].velocity);
                swaps += 1;
            }
        }
    }
    swaps
}

/// Negate the velocity component of every axis on which a body pokes
/// through a wall of the cube
pub fn resolve_wall_collisions(bodies: &mut [Body], cube_size: f32) -> usize {
    let half_size = cube_size / 2.0;
    let mut flips = 0;
    for body in bodies.iter_mut() {
        let contact = wall_contact(body, half_size);
        for axis in 0..3 {
            if contact[axis] {
                body.velocity[axis] = -body.velocity[axis];
                flips += 1;
            }
        }
    }
    flips
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use proptest::prelude::*;

    fn body(x: f32, y: f32, z: f32, vel: Vec3) -> Body {
        Body::new(Vec3::new(x, y, z), 0.2, vel)
    }

    #[test]
    fn test_head_on_pair_swaps() {
        let mut bodies = vec![
            body(0.0, 0.0, 0.0, Vec3::X),
            body(0.1, 0.0, 0.0, -Vec3::X),
        ];
        let swaps = resolve_sphere_collisions(&mut bodies);
        assert_eq!(swaps, 1);
        assert_eq!(bodies[0].velocity, Vec3::new(-1.0, 0.0, 0.0));
        assert_eq!(bodies[1].velocity, Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_separated_pair_untouched() {
        let mut bodies = vec![
            body(-0.5, 0.0, 0.0, Vec3::X),
            body(0.5, 0.0, 0.0, Vec3::Y),
        ];
        assert_eq!(resolve_sphere_collisions(&mut bodies), 0);
        assert_eq!(bodies[0].velocity, Vec3::X);
        assert_eq!(bodies[1].velocity, Vec3::Y);
    }

    #[test]
    fn test_touching_is_not_overlap() {
        let a = Body::new(Vec3::ZERO, 0.5, Vec3::ZERO);
        let b = Body::new(Vec3::new(1.0, 0.0, 0.0), 0.5, Vec3::ZERO);
        assert!(!spheres_overlap(&a, &b));
    }

    #[test]
    fn test_three_body_chain_is_order_dependent() {
        // 0 overlaps 1, 1 overlaps 2, 0 and 2 are apart.
        let v0 = Vec3::new(1.0, 0.0, 0.0);
        let v1 = Vec3::new(0.0, 1.0, 0.0);
        let v2 = Vec3::new(0.0, 0.0, 1.0);
        let mut bodies = vec![
            body(0.0, 0.0, 0.0, v0),
            body(0.3, 0.0, 0.0, v1),
            body(0.6, 0.0, 0.0, v2),
        ];
        let swaps = resolve_sphere_collisions(&mut bodies);
        assert_eq!(swaps, 2);
        // (0,1) first: v0 <-> v1, then (1,2): body 1 now holds v0 and trades it with v2
        assert_eq!(bodies[0].velocity, v1);
        assert_eq!(bodies[1].velocity, v2);
        assert_eq!(bodies[2].velocity, v0);
    }

    #[test]
    fn test_no_position_correction() {
        let mut bodies = vec![
            body(0.0, 0.0, 0.0, Vec3::X),
            body(0.1, 0.0, 0.0, -Vec3::X),
        ];
        let before: Vec<Vec3> = bodies.iter().map(|b| b.position).collect();
        resolve_sphere_collisions(&mut bodies);
        resolve_wall_collisions(&mut bodies, 2.0);
        let after: Vec<Vec3> = bodies.iter().map(|b| b.position).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_wall_hit_positive_x() {
        let mut bodies = vec![body(0.95, 0.0, 0.0, Vec3::X)];
        assert_eq!(wall_contact(&bodies[0], 1.0), [true, false, false]);
        let flips = resolve_wall_collisions(&mut bodies, 2.0);
        assert_eq!(flips, 1);
        assert_eq!(bodies[0].velocity, Vec3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_wall_hit_two_axes() {
        let vel = Vec3::new(0.3, -0.4, 0.5);
        let mut bodies = vec![body(-0.9, 0.0, 0.9, vel)];
        resolve_wall_collisions(&mut bodies, 2.0);
        assert_eq!(bodies[0].velocity, Vec3::new(-0.3, -0.4, -0.5));
    }

    #[test]
    fn test_wall_flip_ignores_direction() {
        // Outside the wall but already heading back in: the flip sends it out again
        let mut bodies = vec![body(1.1, 0.0, 0.0, -Vec3::X)];
        resolve_wall_collisions(&mut bodies, 2.0);
        assert_eq!(bodies[0].velocity, Vec3::X);
        assert_eq!(bodies[0].position.x, 1.1);
    }

    fn vec3_strategy(range: f32) -> impl Strategy<Value = Vec3> {
        (-range..range, -range..range, -range..range).prop_map(|(x, y, z)| Vec3::new(x, y, z))
    }

    proptest! {
        #[test]
        fn prop_overlapping_pair_swaps_exactly(
            p in vec3_strategy(0.5),
            offset in vec3_strategy(0.2),
            va in vec3_strategy(1.0),
            vb in vec3_strategy(1.0),
        ) {
            let a = Body::new(p, 0.2, va);
            let b = Body::new(p + offset, 0.2, vb);
            prop_assume!(spheres_overlap(&a, &b));

            let mut bodies = vec![a, b];
            resolve_sphere_collisions(&mut bodies);
            prop_assert_eq!(bodies[0].velocity, vb);
            prop_assert_eq!(bodies[1].velocity, va);
        }

        #[test]
        fn prop_isolated_body_keeps_velocity(
            v in vec3_strategy(1.0),
            others in proptest::collection::vec(vec3_strategy(1.0), 0..6),
        ) {
            // Body 0 sits far from every other body (all others are near the origin)
            let lone = Body::new(Vec3::splat(10.0), 0.2, v);
            let mut bodies = vec![lone];
            bodies.extend(others.into_iter().map(|p| Body::new(p, 0.2, Vec3::ONE)));

            resolve_sphere_collisions(&mut bodies);
            prop_assert_eq!(bodies[0].velocity, v);
        }

        #[test]
        fn prop_wall_flips_only_contact_axes(
            p in vec3_strategy(1.5),
            v in vec3_strategy(1.0),
        ) {
            let original = Body::new(p, 0.2, v);
            let contact = wall_contact(&original, 1.0);

            let mut bodies = vec![original];
            resolve_wall_collisions(&mut bodies, 2.0);
            for axis in 0..3 {
                let expected = if contact[axis] { -v[axis] } else { v[axis] };
                prop_assert_eq!(bodies[0].velocity[axis], expected);
            }
        }

        #[test]
        fn prop_inside_body_is_untouched_by_walls(
            p in vec3_strategy(0.79),
            v in vec3_strategy(1.0),
        ) {
            let mut bodies = vec![Body::new(p, 0.2, v)];
            let flips = resolve_wall_collisions(&mut bodies, 2.0);
            prop_assert_eq!(flips, 0);
            prop_assert_eq!(bodies[0].velocity, v);
        }
    }
}
