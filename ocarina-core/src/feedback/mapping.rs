//! Linear feedback maps
//!
//! Integer-only. Division floors, so a value halfway between two output
//! steps lands on the lower one.

use crate::config::GameRules;

/// Re-map `value` from `in_min..in_max` to `out_min..out_max`
///
/// The output is not clamped; values outside the input range extrapolate.
/// Either range may be inverted (e.g. 9..0).
pub fn map_range(value: i32, in_min: i32, in_max: i32, out_min: i32, out_max: i32) -> i32 {
    let in_span = in_max - in_min;
    if in_span == 0 {
        return out_min;
    }

    let scaled = (value - in_min) * (out_max - out_min);
    // Keep the divisor positive so div_euclid floors
    let (scaled, in_span) = if in_span < 0 {
        (-scaled, -in_span)
    } else {
        (scaled, in_span)
    };

    out_min + scaled.div_euclid(in_span)
}

/// Hint brightness (0-9) for a roll distance in round 2
///
/// Closer is brighter. Distances past the far end clamp to dark.
pub fn brightness_for_distance(distance: i32, rules: &GameRules) -> i32 {
    let level = map_range(
        distance,
        0,
        rules.tilt_max_distance_deg,
        rules.max_brightness,
        0,
    );
    level.clamp(0, rules.max_brightness)
}

/// Pixel level (0-255) for a hint brightness
pub fn pixel_level(brightness: i32, rules: &GameRules) -> u8 {
    (brightness * rules.brightness_scale).clamp(0, 255) as u8
}

/// Tone frequency (Hz) for a circular heading distance in round 3
///
/// Closer is higher. The distance is already wrapped to [0, 180], so the
/// result stays within the configured frequency band without clamping.
pub fn tone_for_distance(distance: i32, rules: &GameRules) -> i32 {
    map_range(
        distance,
        0,
        180,
        rules.max_frequency_hz,
        rules.min_frequency_hz,
    )
}
