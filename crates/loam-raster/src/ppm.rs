//! Binary PPM (P6) encoding and saving.

use std::io;
use std::path::Path;

use loam_buf::StrBuf;
use loam_core::error::AllocError;

use crate::canvas::Canvas;

/// Encode a canvas as a binary PPM (P6) image.
///
/// The result is a [`StrBuf`] holding the header followed by
/// `width * height` RGB triplets in row-major order.
pub fn encode(canvas: &Canvas) -> Result<StrBuf, AllocError> {
    let pixel_bytes = canvas.pixels().len().saturating_mul(3);
    let mut out = StrBuf::with_capacity(32 + pixel_bytes)?;
    out.push_str(&format!(
        "P6\n{} {}\n255\n",
        canvas.width(),
        canvas.height()
    ))?;
    for px in canvas.pixels().iter() {
        out.push_bytes(&[px.r, px.g, px.b])?;
    }
    Ok(out)
}

/// Encode a canvas and write it to `path`.
pub fn save<P: AsRef<Path>>(canvas: &Canvas, path: P) -> io::Result<()> {
    let path = path.as_ref();
    let encoded =
        encode(canvas).map_err(|err| io::Error::new(io::ErrorKind::OutOfMemory, err))?;
    loam_io::write_str_buf(path, &encoded)?;
    log::debug!(
        "saved {}x{} ppm to {}",
        canvas.width(),
        canvas.height(),
        path.display()
    );
    Ok(())
}
