/// Packed 32-bit straight-alpha color, alpha in the most significant byte.
///
/// `0xAARRGGBB`, the layout used by hex literals such as `0xFF3366CC`.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Argb(pub u32);

impl Argb {
    #[inline]
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    #[inline]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Same RGB with `alpha` replacing the stored alpha byte.
    #[inline]
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self((self.0 & 0x00FF_FFFF) | ((alpha as u32) << 24))
    }

    /// Scales the stored alpha by `factor / 255`, rounding to nearest.
    #[inline]
    pub fn modulate_alpha(self, factor: u8) -> Self {
        self.with_alpha(mul_div_255(self.alpha(), factor))
    }

    /// Straight-alpha `[r, g, b, a]` bytes.
    #[inline]
    pub const fn to_rgba8(self) -> [u8; 4] {
        [self.red(), self.green(), self.blue(), self.alpha()]
    }

    #[inline]
    pub fn opacity(self) -> Opacity {
        Opacity::of(self)
    }
}

/// `a * b / 255` rounded to nearest, exact at 0 and 255.
#[inline]
pub(crate) fn mul_div_255(a: u8, b: u8) -> u8 {
    let p = a as u32 * b as u32 + 128;
    ((p + (p >> 8)) >> 8) as u8
}

/// Coarse transparency class of a color, used by hosts to skip blending or
/// skip drawing altogether.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Opacity {
    /// Alpha 255: covers whatever is underneath.
    Opaque,
    /// Alpha 0: draws nothing visible.
    Transparent,
    /// Any other alpha: needs blending.
    Translucent,
}

impl Opacity {
    #[inline]
    pub fn of(color: Argb) -> Self {
        match color.alpha() {
            255 => Opacity::Opaque,
            0 => Opacity::Transparent,
            _ => Opacity::Translucent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── channels ──────────────────────────────────────────────────────────

    #[test]
    fn channels_unpack_in_argb_order() {
        let c = Argb(0x80_11_22_33);
        assert_eq!((c.alpha(), c.red(), c.green(), c.blue()), (0x80, 0x11, 0x22, 0x33));
        assert_eq!(Argb::from_argb(0x80, 0x11, 0x22, 0x33), c);
    }

    #[test]
    fn with_alpha_keeps_rgb() {
        assert_eq!(Argb(0xFF12_3456).with_alpha(0x40), Argb(0x4012_3456));
    }

    #[test]
    fn modulate_alpha_endpoints_are_exact() {
        let c = Argb(0xC0AA_BBCC);
        assert_eq!(c.modulate_alpha(255), c);
        assert_eq!(c.modulate_alpha(0).alpha(), 0);
        assert_eq!(Argb(0xFF00_0000).modulate_alpha(128).alpha(), 128);
    }

    #[test]
    fn mul_div_255_matches_rounded_division() {
        for a in [0u8, 1, 17, 128, 200, 254, 255] {
            for b in [0u8, 1, 64, 127, 128, 255] {
                let expected = ((a as f32 * b as f32) / 255.0).round() as u8;
                assert_eq!(mul_div_255(a, b), expected, "a={a} b={b}");
            }
        }
    }

    // ── opacity ───────────────────────────────────────────────────────────

    #[test]
    fn opacity_from_alpha_byte() {
        assert_eq!(Argb(0xFF33_66CC).opacity(), Opacity::Opaque);
        assert_eq!(Argb(0x0033_66CC).opacity(), Opacity::Transparent);
        assert_eq!(Argb(0x8033_66CC).opacity(), Opacity::Translucent);
        assert_eq!(Argb(0x0100_0000).opacity(), Opacity::Translucent);
        assert_eq!(Argb(0xFE00_0000).opacity(), Opacity::Translucent);
    }

    #[test]
    fn opacity_ignores_rgb() {
        assert_eq!(Argb(0xFF00_0000).opacity(), Argb(0xFFFF_FFFF).opacity());
    }
}
