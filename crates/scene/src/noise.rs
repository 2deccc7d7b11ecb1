use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

/// Noise texture parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseConfig {
    /// Width and height of the square texture in texels.
    pub size: u32,
    /// Noise lattice cells across the texture. Also the wrap period, so the
    /// texture tiles.
    pub frequency: u32,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            size: 256,
            frequency: 16,
        }
    }
}

impl NoiseConfig {
    pub fn validate(&self) -> Result<(), NoiseError> {
        if self.size == 0 {
            return Err(NoiseError::ZeroSize);
        }
        if !self.frequency.is_power_of_two() || self.frequency > 256 {
            return Err(NoiseError::InvalidFrequency(self.frequency));
        }
        Ok(())
    }
}

/// Errors from noise texture generation and export.
#[derive(Debug, thiserror::Error)]
pub enum NoiseError {
    #[error("texture size must be non-zero")]
    ZeroSize,
    #[error("frequency {0} must be a power of two between 1 and 256")]
    InvalidFrequency(u32),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[rustfmt::skip]
const PERMUTATION: [u8; 256] = [
    151, 160, 137, 91, 90, 15, 131, 13, 201, 95, 96, 53, 194, 233, 7, 225,
    140, 36, 103, 30, 69, 142, 8, 99, 37, 240, 21, 10, 23, 190, 6, 148,
    247, 120, 234, 75, 0, 26, 197, 62, 94, 252, 219, 203, 117, 35, 11, 32,
    57, 177, 33, 88, 237, 149, 56, 87, 174, 20, 125, 136, 171, 168, 68, 175,
    74, 165, 71, 134, 139, 48, 27, 166, 77, 146, 158, 231, 83, 111, 229, 122,
    60, 211, 133, 230, 220, 105, 92, 41, 55, 46, 245, 40, 244, 102, 143, 54,
    65, 25, 63, 161, 1, 216, 80, 73, 209, 76, 132, 187, 208, 89, 18, 169,
    200, 196, 135, 130, 116, 188, 159, 86, 164, 100, 109, 198, 173, 186, 3, 64,
    52, 217, 226, 250, 124, 123, 5, 202, 38, 147, 118, 126, 255, 82, 85, 212,
    207, 206, 59, 227, 47, 16, 58, 17, 182, 189, 28, 42, 223, 183, 170, 213,
    119, 248, 152, 2, 44, 154, 163, 70, 221, 153, 101, 155, 167, 43, 172, 9,
    129, 22, 39, 253, 19, 98, 108, 110, 79, 113, 224, 232, 178, 185, 112, 104,
    218, 246, 97, 228, 251, 34, 242, 193, 238, 210, 144, 12, 191, 179, 162, 241,
    81, 51, 145, 235, 249, 14, 239, 107, 49, 192, 214, 31, 181, 199, 106, 157,
    184, 84, 204, 176, 115, 121, 50, 45, 127, 4, 150, 254, 138, 236, 205, 93,
    222, 114, 67, 29, 24, 72, 243, 141, 128, 195, 78, 66, 215, 61, 156, 180,
];

fn perm(i: usize) -> usize {
    PERMUTATION[i & 255] as usize
}

fn fade(t: f32) -> f32 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

fn lerp(t: f32, a: f32, b: f32) -> f32 {
    a + t * (b - a)
}

fn grad(hash: usize, x: f32, y: f32, z: f32) -> f32 {
    let h = hash & 15;
    let u = if h < 8 { x } else { y };
    let v = if h < 4 {
        y
    } else if h == 12 || h == 14 {
        x
    } else {
        z
    };
    (if h & 1 == 0 { u } else { -u }) + (if h & 2 == 0 { v } else { -v })
}

/// Three-dimensional gradient noise, roughly in `[-1, 1]`.
///
/// `wrap` gives the repeat period per axis and must be a power of two up to
/// 256; 0 means the 256-cell lattice period. Integer lattice points always
/// sample to exactly 0.
pub fn perlin3(x: f32, y: f32, z: f32, wrap: [u32; 3]) -> f32 {
    let mask = wrap.map(|w| (w.wrapping_sub(1) & 255) as i32);

    let (fx, fy, fz) = (x.floor(), y.floor(), z.floor());
    let (px, py, pz) = (fx as i32, fy as i32, fz as i32);
    let (x, y, z) = (x - fx, y - fy, z - fz);

    // Cell indices saturate for huge or non-finite input; only the low
    // eight bits survive the mask, so wrapping is exact.
    let x0 = (px & mask[0]) as usize;
    let x1 = (px.wrapping_add(1) & mask[0]) as usize;
    let y0 = (py & mask[1]) as usize;
    let y1 = (py.wrapping_add(1) & mask[1]) as usize;
    let z0 = (pz & mask[2]) as usize;
    let z1 = (pz.wrapping_add(1) & mask[2]) as usize;

    let hash = |xi: usize, yi: usize, zi: usize| perm(perm(perm(xi) + yi) + zi);

    let u = fade(x);
    let v = fade(y);
    let w = fade(z);

    let n000 = grad(hash(x0, y0, z0), x, y, z);
    let n100 = grad(hash(x1, y0, z0), x - 1.0, y, z);
    let n010 = grad(hash(x0, y1, z0), x, y - 1.0, z);
    let n110 = grad(hash(x1, y1, z0), x - 1.0, y - 1.0, z);
    let n001 = grad(hash(x0, y0, z1), x, y, z - 1.0);
    let n101 = grad(hash(x1, y0, z1), x - 1.0, y, z - 1.0);
    let n011 = grad(hash(x0, y1, z1), x, y - 1.0, z - 1.0);
    let n111 = grad(hash(x1, y1, z1), x - 1.0, y - 1.0, z - 1.0);

    lerp(
        w,
        lerp(v, lerp(u, n000, n100), lerp(u, n010, n110)),
        lerp(v, lerp(u, n001, n101), lerp(u, n011, n111)),
    )
}

/// Single-channel 8-bit noise texture, row-major: texel (x, y) is at
/// `x + width * y`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoiseTexture {
    width: u32,
    height: u32,
    texels: Vec<u8>,
}

impl NoiseTexture {
    /// Sample tileable noise into a `size` x `size` texture.
    pub fn generate(config: &NoiseConfig) -> Result<Self, NoiseError> {
        config.validate()?;

        let size = config.size;
        let scale = config.frequency as f32;
        let wrap = [config.frequency, config.frequency, 0];
        let mut texels = vec![0u8; size as usize * size as usize];

        for x in 0..size {
            for y in 0..size {
                let nx = x as f32 / size as f32 * scale;
                let ny = y as f32 / size as f32 * scale;
                let sample = (perlin3(nx, ny, 0.0, wrap) + 1.0) / 2.0;
                // `as` saturates, so overshoot past [-1, 1] clamps to 0..=255
                texels[x as usize + size as usize * y as usize] = (sample * 255.0) as u8;
            }
        }

        tracing::debug!(size, frequency = config.frequency, "generated noise texture");

        Ok(Self {
            width: size,
            height: size,
            texels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw texels for an R8 unorm texture upload.
    pub fn texels(&self) -> &[u8] {
        &self.texels
    }

    pub fn texel(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.texels
            .get(x as usize + self.width as usize * y as usize)
            .copied()
    }

    /// Write the texture as a binary greyscale PGM (P5) image.
    pub fn write_pgm<W: Write>(&self, mut out: W) -> std::io::Result<()> {
        write!(out, "P5\n{} {}\n255\n", self.width, self.height)?;
        out.write_all(&self.texels)?;
        out.flush()
    }

    pub fn save_pgm(&self, path: impl AsRef<Path>) -> Result<(), NoiseError> {
        let file = std::fs::File::create(path.as_ref())?;
        self.write_pgm(std::io::BufWriter::new(file))?;
        tracing::info!("noise texture written to {}", path.as_ref().display());
        Ok(())
    }
}
