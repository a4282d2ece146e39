//! RGBA display colors with HSV construction and palette slot generation

use crate::io::configuration::{
    SPECTRUM_HUE_DIVISIONS, SPECTRUM_SATURATION_DIVISIONS, SPECTRUM_SLOTS,
    SPECTRUM_VALUE_DIVISIONS,
};
use rand::Rng;
use std::fmt;

/// 8-bit RGBA display color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(pub [u8; 4]);

impl Color {
    /// Opaque white
    pub const WHITE: Self = Self([255, 255, 255, 255]);
    /// Opaque mid gray
    pub const GRAY: Self = Self([128, 128, 128, 255]);
    /// Opaque black
    pub const BLACK: Self = Self([0, 0, 0, 255]);

    /// Opaque color from red, green and blue channels
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b, 255])
    }

    /// Color from all four channels
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self([r, g, b, a])
    }

    /// Raw channel values in RGBA order
    pub const fn channels(self) -> [u8; 4] {
        self.0
    }

    /// Opaque color from hue, saturation and value, each in `[0, 1]`
    ///
    /// Hue wraps, so `1.0` is the same red as `0.0`.
    pub fn from_hsv(hue: f32, saturation: f32, value: f32) -> Self {
        let s = saturation.clamp(0.0, 1.0);
        let v = value.clamp(0.0, 1.0);
        let sector_position = hue.rem_euclid(1.0) * 6.0;
        let sector = sector_position.floor();
        let f = sector_position - sector;

        let p = v * (1.0 - s);
        let q = v * s.mul_add(-f, 1.0);
        let t = v * s.mul_add(f - 1.0, 1.0);

        let (r, g, b) = match sector as u8 % 6 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };

        Self::rgb(to_channel(r), to_channel(g), to_channel(b))
    }

    /// Deterministic color for a palette slot
    ///
    /// Walks hue first, then saturation and value bands, so neighbouring
    /// slots get clearly different colors. Slots repeat every
    /// [`SPECTRUM_SLOTS`] entries.
    pub fn spectrum(slot: usize) -> Self {
        let n = slot % SPECTRUM_SLOTS;
        let hue_angle = 360 / SPECTRUM_HUE_DIVISIONS;

        let mut hue = hue_angle * (n % SPECTRUM_HUE_DIVISIONS);
        hue += (hue_angle / (n / SPECTRUM_HUE_DIVISIONS + 1)) % hue_angle;
        let hue = (hue % 360) as f32 / 360.0;

        let saturation = ((n / SPECTRUM_SATURATION_DIVISIONS) % SPECTRUM_SATURATION_DIVISIONS)
            as f32
            / SPECTRUM_SATURATION_DIVISIONS as f32;
        let value = ((n / SPECTRUM_VALUE_DIVISIONS) % SPECTRUM_VALUE_DIVISIONS) as f32
            / SPECTRUM_VALUE_DIVISIONS as f32;

        Self::from_hsv(hue, 1.0 - saturation, 1.0 - value)
    }

    /// Sample a color with each HSV component drawn from hundredths in `[0, 0.99]`
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let hue = rng.random_range(0..100u8);
        let saturation = rng.random_range(0..100u8);
        let value = rng.random_range(0..100u8);
        Self::from_hsv(
            f32::from(hue) * 0.01,
            f32::from(saturation) * 0.01,
            f32::from(value) * 0.01,
        )
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<[u8; 4]> for Color {
    fn from(channels: [u8; 4]) -> Self {
        Self(channels)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.0;
        write!(f, "#{r:02x}{g:02x}{b:02x}{a:02x}")
    }
}

fn to_channel(component: f32) -> u8 {
    (component.clamp(0.0, 1.0) * 255.0).round() as u8
}
