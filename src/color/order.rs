use crate::color::Rgb;

/// Wire order of the color channels on the physical strip
///
/// Reordering puts the first wire byte into `r`, the second into `g` and the
/// third into `b`, for drivers that shift out fields in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorOrder {
    Rgb,
    Rbg,
    #[default]
    Grb,
    Gbr,
    Brg,
    Bgr,
}

impl ColorOrder {
    /// Rearrange a logical color into wire order
    pub const fn reorder(self, color: Rgb) -> Rgb {
        let Rgb { r, g, b } = color;
        match self {
            Self::Rgb => Rgb { r, g, b },
            Self::Rbg => Rgb { r, g: b, b: g },
            Self::Grb => Rgb { r: g, g: r, b },
            Self::Gbr => Rgb { r: g, g: b, b: r },
            Self::Brg => Rgb { r: b, g: r, b: g },
            Self::Bgr => Rgb { r: b, g, b: r },
        }
    }
}
