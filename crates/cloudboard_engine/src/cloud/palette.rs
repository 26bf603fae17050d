//! Viridis colormap, sampled at eleven stops and linearly interpolated.

const VIRIDIS: [[u8; 3]; 11] = [
    [68, 1, 84],
    [72, 36, 117],
    [65, 68, 135],
    [53, 95, 141],
    [42, 120, 142],
    [33, 145, 140],
    [34, 168, 132],
    [68, 190, 112],
    [122, 209, 81],
    [189, 223, 38],
    [253, 231, 37],
];

/// Color at `t` in `[0, 1]`; values outside are clamped.
pub fn viridis(t: f32) -> [u8; 3] {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let scaled = t * (VIRIDIS.len() - 1) as f32;
    let lower = scaled.floor() as usize;
    let upper = (lower + 1).min(VIRIDIS.len() - 1);
    let frac = scaled - lower as f32;

    let mut out = [0u8; 3];
    for (channel, value) in out.iter_mut().enumerate() {
        let a = f32::from(VIRIDIS[lower][channel]);
        let b = f32::from(VIRIDIS[upper][channel]);
        *value = (a + (b - a) * frac).round() as u8;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::viridis;

    #[test]
    fn endpoints_and_clamping() {
        assert_eq!(viridis(0.0), [68, 1, 84]);
        assert_eq!(viridis(1.0), [253, 231, 37]);
        assert_eq!(viridis(-3.0), viridis(0.0));
        assert_eq!(viridis(7.0), viridis(1.0));
        assert_eq!(viridis(0.5), [33, 145, 140]);
    }
}
