use core::fmt;

use super::Argb;
use super::color::mul_div_255;

/// Color transform applied by a backend to the paint color before filling.
pub trait ColorFilter: fmt::Debug + Send + Sync {
    fn apply(&self, color: Argb) -> Argb;
}

/// Source-in tint: replaces RGB with the tint's, multiplies the alphas.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct TintFilter(pub Argb);

impl ColorFilter for TintFilter {
    fn apply(&self, color: Argb) -> Argb {
        self.0.with_alpha(mul_div_255(color.alpha(), self.0.alpha()))
    }
}

/// Multiplies each RGB channel by `mul / 255`, then adds `add`, saturating.
///
/// The alpha bytes of `mul` and `add` are ignored; the source alpha passes through.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct LightingFilter {
    pub mul: Argb,
    pub add: Argb,
}

impl LightingFilter {
    #[inline]
    pub const fn new(mul: Argb, add: Argb) -> Self {
        Self { mul, add }
    }
}

impl ColorFilter for LightingFilter {
    fn apply(&self, color: Argb) -> Argb {
        let ch = |c: u8, m: u8, a: u8| mul_div_255(c, m).saturating_add(a);
        Argb::from_argb(
            color.alpha(),
            ch(color.red(), self.mul.red(), self.add.red()),
            ch(color.green(), self.mul.green(), self.add.green()),
            ch(color.blue(), self.mul.blue(), self.add.blue()),
        )
    }
}
