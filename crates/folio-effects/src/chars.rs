//! Glyphs used to rasterize the particle field.

/// Particle glyphs from smallest to largest radius.
pub const PARTICLE_CHARS: &[char] = &['·', '•', '●'];

/// Radii (virtual pixels) at which the next larger particle glyph is used.
pub const PARTICLE_RADIUS_STEPS: &[f32] = &[0.9, 1.6];

/// Glyph for cells crossed only by connecting lines.
pub const LINK_CHAR: char = '·';

/// Pick the particle glyph for a radius.
pub fn particle_char(radius: f32) -> char {
    let idx = PARTICLE_RADIUS_STEPS
        .iter()
        .take_while(|step| radius >= **step)
        .count();
    PARTICLE_CHARS[idx.min(PARTICLE_CHARS.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_particle_char_by_radius() {
        assert_eq!(particle_char(0.4), '·');
        assert_eq!(particle_char(1.2), '•');
        assert_eq!(particle_char(2.2), '●');
    }
}
