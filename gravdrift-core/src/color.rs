use crate::math::{lerp, map_range};

/// An RGB color with channels in [0, 255].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const YELLOW: Rgb = Rgb::new(255.0, 220.0, 100.0);
    pub const BLUE: Rgb = Rgb::new(100.0, 150.0, 255.0);
    pub const GRAY: Rgb = Rgb::new(120.0, 120.0, 120.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        Rgb::new(
            lerp(self.r, other.r, t),
            lerp(self.g, other.g, t),
            lerp(self.b, other.b, t),
        )
    }

    /// Brightened copy used for glow layers, saturating at 255.
    pub fn boosted(self, factor: f32) -> Rgb {
        Rgb::new(
            (self.r * factor).min(255.0),
            (self.g * factor).min(255.0),
            (self.b * factor).min(255.0),
        )
    }
}

/// Particle color for a lifespan: yellow at 100 through blue at 50 to gray at 0.
pub fn color_by_lifespan(lifespan: u32) -> Rgb {
    let life = lifespan as f32;
    if life > 50.0 {
        Rgb::BLUE.lerp(Rgb::YELLOW, map_range(life, 50.0, 100.0, 0.0, 1.0))
    } else {
        Rgb::GRAY.lerp(Rgb::BLUE, map_range(life, 0.0, 50.0, 0.0, 1.0))
    }
}
