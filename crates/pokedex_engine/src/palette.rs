//! Dominant-color extraction for screen theming.

use std::collections::HashMap;

use image::imageops::FilterType;
use image::DynamicImage;

/// Representative color as plain bytes, so callers can map it into whatever
/// color type their UI framework uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Neutral fallback when an image has no opaque pixels at all.
const FALLBACK: Rgb8 = Rgb8 {
    r: 0x80,
    g: 0x80,
    b: 0x80,
};

/// Pixels more transparent than this do not vote. Sprites sit on fully
/// transparent backgrounds, which must not win the histogram.
const ALPHA_CUTOFF: u8 = 128;

/// Compute a single representative color from `image`.
///
/// `scale` is a size-reduction factor in `(0, 1]` applied before counting;
/// the quantization makes the result insensitive to the exact resample.
/// Opaque pixels are bucketed into a 5-bit-per-channel histogram, the most
/// populous bucket wins, and the bucket's true colors are averaged.
pub fn dominant_color(image: &DynamicImage, scale: f32) -> Rgb8 {
    let scale = scale.clamp(0.01, 1.0);
    let width = (((image.width() as f32) * scale).round() as u32).max(1);
    let height = (((image.height() as f32) * scale).round() as u32).max(1);
    let small = image.resize(width, height, FilterType::Triangle).to_rgba8();

    // bucket key -> (population, r sum, g sum, b sum)
    let mut buckets: HashMap<u16, (u64, u64, u64, u64)> = HashMap::new();
    for pixel in small.pixels() {
        let [r, g, b, a] = pixel.0;
        if a < ALPHA_CUTOFF {
            continue;
        }
        let bucket = buckets.entry(quantize(r, g, b)).or_default();
        bucket.0 += 1;
        bucket.1 += u64::from(r);
        bucket.2 += u64::from(g);
        bucket.3 += u64::from(b);
    }

    let Some((count, r_sum, g_sum, b_sum)) = buckets
        .into_values()
        .max_by_key(|&(count, _, _, _)| count)
    else {
        return FALLBACK;
    };

    Rgb8 {
        r: (r_sum / count) as u8,
        g: (g_sum / count) as u8,
        b: (b_sum / count) as u8,
    }
}

fn quantize(r: u8, g: u8, b: u8) -> u16 {
    (u16::from(r >> 3) << 10) | (u16::from(g >> 3) << 5) | u16::from(b >> 3)
}
