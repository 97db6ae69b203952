use ratatui::style::Color;

/// Runtime theme with configurable colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg0: Color,
    pub bg1: Color,
    pub bg2: Color,

    // Foreground colors
    pub fg0: Color,
    pub fg1: Color,
    pub muted: Color,

    // Brand colors
    pub accent: Color,
    pub accent_alt: Color,

    // Semantic colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,

    /// True for dark palettes; drives the theme-toggle indicator
    pub dark: bool,
}

impl Default for Theme {
    fn default() -> Self {
        crate::themes::aurora::dark()
    }
}

impl Theme {
    /// Simulate alpha on a terminal without one: blend a color toward the
    /// page background. `alpha` 0 disappears into bg0, 1 is the full color.
    pub fn fade(&self, color: Color, alpha: f32) -> Color {
        color_lerp(self.bg0, color, alpha)
    }
}

/// Channel-wise interpolation between two RGB colors.
///
/// Non-RGB colors (named or indexed) cannot be blended, so they snap to the
/// nearer endpoint instead.
pub fn color_lerp(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r0, g0, b0), Color::Rgb(r1, g1, b1)) => Color::Rgb(
            lerp_channel(r0, r1, t),
            lerp_channel(g0, g1, t),
            lerp_channel(b0, b1, t),
        ),
        _ => {
            if t < 0.5 {
                from
            } else {
                to
            }
        }
    }
}

#[inline]
fn lerp_channel(from: u8, to: u8, t: f32) -> u8 {
    (from as f32 + (to as f32 - from as f32) * t).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_lerp_endpoints() {
        let from = Color::Rgb(0, 0, 0);
        let to = Color::Rgb(200, 100, 50);
        assert_eq!(color_lerp(from, to, 0.0), from);
        assert_eq!(color_lerp(from, to, 1.0), to);
    }

    #[test]
    fn test_color_lerp_midpoint() {
        let mid = color_lerp(Color::Rgb(0, 0, 0), Color::Rgb(200, 100, 50), 0.5);
        assert_eq!(mid, Color::Rgb(100, 50, 25));
    }

    #[test]
    fn test_color_lerp_clamps() {
        let from = Color::Rgb(10, 10, 10);
        let to = Color::Rgb(20, 20, 20);
        assert_eq!(color_lerp(from, to, -1.0), from);
        assert_eq!(color_lerp(from, to, 2.0), to);
    }

    #[test]
    fn test_color_lerp_non_rgb_snaps() {
        assert_eq!(
            color_lerp(Color::Reset, Color::Rgb(1, 2, 3), 0.2),
            Color::Reset
        );
        assert_eq!(
            color_lerp(Color::Reset, Color::Rgb(1, 2, 3), 0.9),
            Color::Rgb(1, 2, 3)
        );
    }

    #[test]
    fn test_fade_toward_background() {
        let theme = Theme::default();
        assert_eq!(theme.fade(theme.accent, 0.0), theme.bg0);
        assert_eq!(theme.fade(theme.accent, 1.0), theme.accent);
    }
}
