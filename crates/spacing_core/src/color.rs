//! Colour types

/// RGBA color, components in `[0, 1]`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Build a colour from hue (degrees), saturation, lightness and alpha.
    ///
    /// Saturation, lightness and alpha are fractions in `[0, 1]`; hue wraps
    /// into `[0, 360)`. Equivalent to CSS `hsla(h, s%, l%, a)`.
    pub fn hsla(hue: f32, saturation: f32, lightness: f32, alpha: f32) -> Self {
        let h = hue.rem_euclid(360.0) / 360.0;
        let s = saturation.clamp(0.0, 1.0);
        let l = lightness.clamp(0.0, 1.0);
        let a = alpha.clamp(0.0, 1.0);

        if s == 0.0 {
            return Self::rgba(l, l, l, a);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        Self::rgba(
            hue_to_channel(p, q, h + 1.0 / 3.0),
            hue_to_channel(p, q, h),
            hue_to_channel(p, q, h - 1.0 / 3.0),
            a,
        )
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

fn hue_to_channel(p: f32, q: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
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

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_hsla_primaries() {
        let red = Color::hsla(0.0, 1.0, 0.5, 1.0);
        assert!(approx(red.r, 1.0) && approx(red.g, 0.0) && approx(red.b, 0.0));

        let green = Color::hsla(120.0, 1.0, 0.5, 1.0);
        assert!(approx(green.r, 0.0) && approx(green.g, 1.0) && approx(green.b, 0.0));

        let blue = Color::hsla(240.0, 1.0, 0.5, 1.0);
        assert!(approx(blue.r, 0.0) && approx(blue.g, 0.0) && approx(blue.b, 1.0));
    }

    #[test]
    fn test_hsla_grey_and_alpha() {
        let grey = Color::hsla(200.0, 0.0, 0.25, 0.4);
        assert_eq!(grey, Color::rgba(0.25, 0.25, 0.25, 0.4));
    }

    #[test]
    fn test_hsla_hue_wraps() {
        assert_eq!(Color::hsla(360.0, 0.7, 0.6, 1.0), Color::hsla(0.0, 0.7, 0.6, 1.0));
    }

    #[test]
    fn test_hsla_sky_blue() {
        // hsl(210, 70%, 60%) ~ rgb(82, 153, 224)
        let c = Color::hsla(210.0, 0.7, 0.6, 0.2);
        assert!((c.r * 255.0 - 82.0).abs() < 1.0);
        assert!((c.g * 255.0 - 153.0).abs() < 1.0);
        assert!((c.b * 255.0 - 224.0).abs() < 1.0);
        assert_eq!(c.a, 0.2);
    }
}
