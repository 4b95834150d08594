//! Roll and compass heading from raw motion vectors
//!
//! Vectors use the board frame: x towards the right edge, y towards the
//! edge connector, z into the board. Lying face up the accelerometer
//! reads about (0, 0, -1000) mg.

use micromath::F32Ext;

use super::Vector3;

const RAD_TO_DEG: f32 = 180.0 / core::f32::consts::PI;

/// Roll in degrees, 0 when flat, positive with the right edge down
pub fn roll_degrees(accel: Vector3) -> i32 {
    let angle = (accel.x as f32).atan2(-accel.z as f32) * RAD_TO_DEG;
    angle.round() as i32
}

/// Tilt-compensated heading in degrees, 0..360
///
/// 0 means the top edge of the board points at magnetic north. Returns
/// `None` when either vector is too small to give a direction.
pub fn heading_degrees(accel: Vector3, mag: Vector3) -> Option<i32> {
    let up = normalize(accel.to_f32())?;
    let m = mag.to_f32();

    // Horizontal part of the field points north
    let m_dot_up = dot(m, up);
    let north = [
        m[0] - m_dot_up * up[0],
        m[1] - m_dot_up * up[1],
        m[2] - m_dot_up * up[2],
    ];
    let east = cross(north, up);

    // Top edge of the board
    let forward = [0.0, -1.0, 0.0];
    let y = dot(forward, east);
    let x = dot(forward, north);
    if x == 0.0 && y == 0.0 {
        return None;
    }

    let degrees = (y.atan2(x) * RAD_TO_DEG).round() as i32;
    Some(degrees.rem_euclid(360))
}

fn dot(a: [f32; 3], b: [f32; 3]) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn cross(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

fn normalize(v: [f32; 3]) -> Option<[f32; 3]> {
    let length = dot(v, v).sqrt();
    if length < 1.0 {
        return None;
    }
    Some([v[0] / length, v[1] / length, v[2] / length])
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const FLAT: Vector3 = Vector3::new(0, 0, -1000);

    fn assert_close(actual: i32, expected: i32) {
        let diff = (actual - expected).rem_euclid(360);
        assert!(
            diff <= 1 || diff >= 359,
            "expected about {} got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_roll_flat() {
        assert_close(roll_degrees(FLAT), 0);
    }

    #[test]
    fn test_roll_on_edges() {
        assert_close(roll_degrees(Vector3::new(1000, 0, 0)), 90);
        assert_close(roll_degrees(Vector3::new(-1000, 0, 0)), -90);
        assert_close(roll_degrees(Vector3::new(707, 0, -707)), 45);
    }

    #[test]
    fn test_heading_flat_cardinals() {
        // Field has a downward component as in the northern hemisphere
        assert_close(heading_degrees(FLAT, Vector3::new(0, -200, 400)).unwrap(), 0);
        assert_close(heading_degrees(FLAT, Vector3::new(-200, 0, 400)).unwrap(), 90);
        assert_close(heading_degrees(FLAT, Vector3::new(0, 200, 400)).unwrap(), 180);
        assert_close(heading_degrees(FLAT, Vector3::new(200, 0, 400)).unwrap(), 270);
    }

    #[test]
    fn test_heading_ignores_tilt() {
        // Rolled 30 degrees right edge down
        let accel = Vector3::new(500, 0, -866);

        // Facing north: field along the roll axis is unchanged
        let mag = Vector3::new(-200, -200, 346);
        assert_close(heading_degrees(accel, mag).unwrap(), 0);

        // Facing east: flat reading (-200, 0, 400) rotated with the board
        let mag = Vector3::new(-373, 0, 246);
        assert_close(heading_degrees(accel, mag).unwrap(), 90);
    }

    #[test]
    fn test_heading_free_fall() {
        assert_eq!(heading_degrees(Vector3::new(0, 0, 0), Vector3::new(0, -200, 0)), None);
    }

    proptest! {
        #[test]
        fn prop_heading_in_range(
            ax in -2000i32..2000, ay in -2000i32..2000, az in -2000i32..2000,
            mx in -600i32..600, my in -600i32..600, mz in -600i32..600,
        ) {
            let accel = Vector3::new(ax, ay, az);
            if let Some(heading) = heading_degrees(accel, Vector3::new(mx, my, mz)) {
                prop_assert!((0..360).contains(&heading));
            }
        }

        #[test]
        fn prop_roll_in_range(ax in -2000i32..2000, az in -2000i32..2000) {
            let roll = roll_degrees(Vector3::new(ax, 0, az));
            prop_assert!((-180..=180).contains(&roll));
        }
    }
}
