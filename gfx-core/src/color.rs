//! 8-bit RGBA colors
use crate::vector::Vec4;

/// An 8-bit RGBA color. Defaults to opaque black.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// A [`Color`] with every channel divided by 255, so each lies in `0.0..=1.0`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
pub struct FColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// An opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const fn white() -> Self {
        Self::rgb(255, 255, 255)
    }

    pub const fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    pub const fn red() -> Self {
        Self::rgb(255, 0, 0)
    }

    pub const fn green() -> Self {
        Self::rgb(0, 255, 0)
    }

    pub const fn blue() -> Self {
        Self::rgb(0, 0, 255)
    }

    pub const fn light_blue() -> Self {
        Self::rgb(0, 128, 255)
    }

    /// Returns this color with its alpha replaced.
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Returns this color with its alpha multiplied by `factor`.
    ///
    /// The product is truncated and saturates to `0..=255`.
    #[must_use]
    pub fn with_reduced_alpha(self, factor: f32) -> Self {
        self.with_alpha((f32::from(self.a) * factor) as u8)
    }

    pub fn to_fcolor(self) -> FColor {
        FColor::from(self)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

impl Default for FColor {
    fn default() -> Self {
        Self {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            a: 1.0,
        }
    }
}

impl From<Color> for FColor {
    fn from(c: Color) -> Self {
        Self {
            r: f32::from(c.r) / 255.0,
            g: f32::from(c.g) / 255.0,
            b: f32::from(c.b) / 255.0,
            a: f32::from(c.a) / 255.0,
        }
    }
}

impl From<FColor> for [f32; 4] {
    fn from(c: FColor) -> Self {
        [c.r, c.g, c.b, c.a]
    }
}

/// Channels as floats in `0.0..=255.0`; not normalized. Use [`FColor`] for that.
impl From<Color> for Vec4 {
    fn from(c: Color) -> Self {
        Vec4::new(
            f32::from(c.r),
            f32::from(c.g),
            f32::from(c.b),
            f32::from(c.a),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_opaque_black() {
        assert_eq!(Color::default(), Color::new(0, 0, 0, 255));
        assert_eq!(Color::default(), Color::black());
        assert_eq!(FColor::default().a, 1.0);
    }

    #[test]
    fn test_white_fcolor() {
        let f = Color::white().to_fcolor();
        assert_eq!(f, FColor { r: 1.0, g: 1.0, b: 1.0, a: 1.0 });
        assert_eq!(<[f32; 4]>::from(f), [1.0; 4]);
    }

    #[test]
    fn test_fcolor_channels() {
        let f = FColor::from(Color::light_blue());
        assert_eq!(f.r, 0.0);
        assert!((f.g - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(f.b, 1.0);
        assert_eq!(f.a, 1.0);
    }

    #[test]
    fn test_vec4_is_not_normalized() {
        assert_eq!(Vec4::from(Color::red()), Vec4::new(255.0, 0.0, 0.0, 255.0));
        assert_eq!(Vec4::from(Color::new(1, 2, 3, 4)), Vec4::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn test_palette() {
        assert_eq!(Color::green(), Color::rgb(0, 255, 0));
        assert_eq!(Color::blue(), Color::new(0, 0, 255, 255));
        assert_eq!(Color::light_blue(), Color::new(0, 128, 255, 255));
    }

    #[test]
    fn test_alpha_helpers_leave_original_untouched() {
        let base = Color::red();
        let faded = base.with_reduced_alpha(0.5);
        assert_eq!(faded, Color::new(255, 0, 0, 127));
        assert_eq!(base.a, 255);

        assert_eq!(base.with_alpha(10).with_reduced_alpha(0.25).a, 2);
        assert_eq!(base.with_reduced_alpha(2.0).a, 255);
        assert_eq!(base.with_reduced_alpha(-1.0).a, 0);
    }
}
