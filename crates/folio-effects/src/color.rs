//! Color utility functions for the effects.

use ratatui::style::Color;

/// RGB components of a color, if it is a true color.
pub fn rgb_components(color: Color) -> Option<(u8, u8, u8)> {
    match color {
        Color::Rgb(r, g, b) => Some((r, g, b)),
        Color::Black => Some((0, 0, 0)),
        Color::White => Some((255, 255, 255)),
        _ => None,
    }
}

/// Paint `foreground` over `background` with the given opacity.
///
/// Named terminal colors can't be mixed, so they snap to whichever side
/// dominates.
pub fn blend(background: Color, foreground: Color, alpha: f32) -> Color {
    let alpha = alpha.clamp(0.0, 1.0);
    match (rgb_components(background), rgb_components(foreground)) {
        (Some((br, bg, bb)), Some((fr, fg, fb))) => {
            let mix = |b: u8, f: u8| (b as f32 + (f as f32 - b as f32) * alpha).round() as u8;
            Color::Rgb(mix(br, fr), mix(bg, fg), mix(bb, fb))
        }
        _ if alpha >= 0.5 => foreground,
        _ => background,
    }
}

/// Color at position `t` (0.0-1.0) of the indigo → cyan → fuchsia glow.
pub fn glow_gradient(t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    // Hue: 239 (indigo) -> 190 (cyan) -> 292 (fuchsia), going the short way
    let hue = if t < 0.5 {
        239.0 - t * 2.0 * 49.0
    } else {
        190.0 + (t - 0.5) * 2.0 * 102.0
    };
    hsl_to_rgb(hue, 0.85, 0.6)
}

/// Convert HSL to RGB color.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> Color {
    if s == 0.0 {
        let v = (l * 255.0) as u8;
        return Color::Rgb(v, v, v);
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;

    let h = h / 360.0;

    let r = hue_to_rgb(p, q, h + 1.0 / 3.0);
    let g = hue_to_rgb(p, q, h);
    let b = hue_to_rgb(p, q, h - 1.0 / 3.0);

    Color::Rgb((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
}

fn hue_to_rgb(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_endpoints() {
        let bg = Color::Rgb(10, 20, 30);
        let fg = Color::Rgb(250, 240, 230);
        assert_eq!(blend(bg, fg, 0.0), bg);
        assert_eq!(blend(bg, fg, 1.0), fg);
        assert_eq!(blend(bg, fg, 0.5), Color::Rgb(130, 130, 130));
    }

    #[test]
    fn test_blend_clamps_alpha() {
        let bg = Color::Rgb(0, 0, 0);
        let fg = Color::Rgb(255, 255, 255);
        assert_eq!(blend(bg, fg, 2.0), fg);
        assert_eq!(blend(bg, fg, -1.0), bg);
    }

    #[test]
    fn test_blend_named_colors_snap() {
        assert_eq!(blend(Color::Reset, Color::Cyan, 0.8), Color::Cyan);
        assert_eq!(blend(Color::Reset, Color::Cyan, 0.2), Color::Reset);
    }

    #[test]
    fn test_hsl_grey() {
        assert_eq!(hsl_to_rgb(120.0, 0.0, 0.5), Color::Rgb(127, 127, 127));
    }
}
