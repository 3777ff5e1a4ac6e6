// File: crates/chart-core/src/png.rs
// Summary: Lossless PNG encoder for RasterSurface (IHDR/IDAT/IEND, CRC-32, zlib at best compression).

use std::io::{self, Write};
use std::path::Path;

use flate2::write::ZlibEncoder;
use flate2::Compression;

use crate::error::{ChartError, Result};
use crate::raster::RasterSurface;

/// Fixed 8-byte PNG file signature.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

const BIT_DEPTH: u8 = 8;
const COLOR_TYPE_TRUECOLOR: u8 = 2;
const FILTER_NONE: u8 = 0;

/// Serialize `surface` into a complete PNG byte stream.
pub fn encode_png(surface: &RasterSurface) -> io::Result<Vec<u8>> {
    let mut ihdr = Vec::with_capacity(13);
    ihdr.extend_from_slice(&surface.width().to_be_bytes());
    ihdr.extend_from_slice(&surface.height().to_be_bytes());
    // depth, color type, compression, filter method, interlace
    ihdr.extend_from_slice(&[BIT_DEPTH, COLOR_TYPE_TRUECOLOR, 0, 0, 0]);

    let idat = compress_scanlines(surface)?;

    let mut out = Vec::with_capacity(PNG_SIGNATURE.len() + idat.len() + 3 * 12 + ihdr.len());
    out.extend_from_slice(&PNG_SIGNATURE);
    write_chunk(&mut out, b"IHDR", &ihdr);
    write_chunk(&mut out, b"IDAT", &idat);
    write_chunk(&mut out, b"IEND", &[]);
    Ok(out)
}

/// Encode `surface` in memory, then write it to `path` in a single call.
pub fn write_png(surface: &RasterSurface, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let encoding = |source| ChartError::Encoding { path: path.to_path_buf(), source };
    let bytes = encode_png(surface).map_err(encoding)?;
    std::fs::write(path, &bytes).map_err(encoding)?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "wrote png");
    Ok(())
}

fn compress_scanlines(surface: &RasterSurface) -> io::Result<Vec<u8>> {
    let row_len = 1 + surface.width() as usize * 3;
    let mut raw = Vec::with_capacity(row_len * surface.height() as usize);
    for row in surface.rows() {
        raw.push(FILTER_NONE);
        for px in row {
            raw.extend_from_slice(&[px.r(), px.g(), px.b()]);
        }
    }
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(&raw)?;
    encoder.finish()
}

fn write_chunk(out: &mut Vec<u8>, tag: &[u8; 4], payload: &[u8]) {
    out.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    out.extend_from_slice(tag);
    out.extend_from_slice(payload);
    let mut crc = crc32fast::Hasher::new();
    crc.update(tag);
    crc.update(payload);
    out.extend_from_slice(&crc.finalize().to_be_bytes());
}
