use crate::foundation::{
    buffer::PixelBuffer,
    core::Rgb,
    error::{PixmorphError, PixmorphResult},
};

/// Linear mix of two colours: `floor(alpha * c1 + (1 - alpha) * c2)` per channel.
///
/// `alpha` must lie in `[0, 1]`; anything else (including NaN) is a
/// [`PixmorphError::Range`], never a clamped or default colour.
pub fn blend_pixel(c1: Rgb, c2: Rgb, alpha: f64) -> PixmorphResult<Rgb> {
    check_alpha(alpha)?;
    Ok(mix(c1, c2, alpha))
}

/// Elementwise [`blend_pixel`] over two buffers of identical dimensions.
pub fn blend_buffers(a: &PixelBuffer, b: &PixelBuffer, alpha: f64) -> PixmorphResult<PixelBuffer> {
    if a.dims() != b.dims() {
        return Err(PixmorphError::range(format!(
            "blend expects equal dimensions, got {} and {}",
            a.dims(),
            b.dims()
        )));
    }
    check_alpha(alpha)?;

    let pixels = a
        .pixels()
        .iter()
        .zip(b.pixels())
        .map(|(&p1, &p2)| mix(p1, p2, alpha))
        .collect();
    PixelBuffer::new(a.dims(), pixels)
}

fn check_alpha(alpha: f64) -> PixmorphResult<()> {
    if !(0.0..=1.0).contains(&alpha) {
        return Err(PixmorphError::range(format!(
            "blend alpha must be in [0, 1], got {alpha}"
        )));
    }
    Ok(())
}

fn mix(c1: Rgb, c2: Rgb, alpha: f64) -> Rgb {
    let channel = |v1: u8, v2: u8| -> u8 {
        let v = alpha * f64::from(v1) + (1.0 - alpha) * f64::from(v2);
        v.floor().clamp(0.0, 255.0) as u8
    };
    Rgb::new(channel(c1.r, c2.r), channel(c1.g, c2.g), channel(c1.b, c2.b))
}

#[cfg(test)]
#[path = "../../tests/unit/effects/composite.rs"]
mod tests;
