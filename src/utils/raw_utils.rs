//! Raw RGBA dump format
//!
//! A dump is a 20-byte little-endian header followed by the pixel payload
//! as stored by a compression handler:
//!
//! | offset | size | field                          |
//! |--------|------|--------------------------------|
//! | 0      | 4    | magic `RXPX`                   |
//! | 4      | 1    | format version (1)             |
//! | 5      | 1    | compression code               |
//! | 6      | 2    | reserved, zero                 |
//! | 8      | 4    | width in pixels                |
//! | 12     | 4    | height in pixels               |
//! | 16     | 4    | stored payload length in bytes |

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use log::{debug, info};

use crate::compression::{CompressionFactory, CompressionHandler};
use crate::errors::{ExtractError, ExtractResult};
use crate::surface::PixelBuffer;

pub const RAW_MAGIC: &[u8; 4] = b"RXPX";
pub const RAW_VERSION: u8 = 1;
pub const RAW_HEADER_LEN: usize = 20;

/// Header of a raw dump
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawHeader {
    pub compression: u8,
    pub width: u32,
    pub height: u32,
    pub payload_len: u32,
}

impl RawHeader {
    fn write_to<W: Write>(&self, writer: &mut W) -> ExtractResult<()> {
        writer.write_all(RAW_MAGIC)?;
        writer.write_u8(RAW_VERSION)?;
        writer.write_u8(self.compression)?;
        writer.write_u16::<LittleEndian>(0)?;
        writer.write_u32::<LittleEndian>(self.width)?;
        writer.write_u32::<LittleEndian>(self.height)?;
        writer.write_u32::<LittleEndian>(self.payload_len)?;
        Ok(())
    }

    fn read_from<R: Read>(reader: &mut R) -> ExtractResult<Self> {
        let mut magic = [0u8; 4];
        reader.read_exact(&mut magic)?;
        if &magic != RAW_MAGIC {
            return Err(ExtractError::GenericError("Not a raw pixel dump".to_string()));
        }

        let version = reader.read_u8()?;
        if version != RAW_VERSION {
            return Err(ExtractError::GenericError(format!("Unsupported raw dump version {}", version)));
        }

        let compression = reader.read_u8()?;
        let _reserved = reader.read_u16::<LittleEndian>()?;
        let width = reader.read_u32::<LittleEndian>()?;
        let height = reader.read_u32::<LittleEndian>()?;
        let payload_len = reader.read_u32::<LittleEndian>()?;

        Ok(RawHeader { compression, width, height, payload_len })
    }
}

/// Write pixels as a raw dump
///
/// # Arguments
/// * `writer` - Destination
/// * `pixels` - Pixels to store
/// * `handler` - Compression applied to the payload
///
/// # Returns
/// Number of bytes written, header included
pub fn write_raw<W: Write>(writer: &mut W, pixels: &PixelBuffer, handler: &dyn CompressionHandler) -> ExtractResult<usize> {
    let payload = handler.compress(pixels.as_bytes())?;
    let payload_len = u32::try_from(payload.len())
        .map_err(|_| ExtractError::GenericError("Raw payload exceeds 4 GiB".to_string()))?;

    let header = RawHeader {
        compression: handler.code(),
        width: pixels.width(),
        height: pixels.height(),
        payload_len,
    };
    header.write_to(writer)?;
    writer.write_all(&payload)?;

    debug!("Wrote {}x{} dump, {} payload bytes ({})",
           header.width, header.height, payload.len(), handler.name());
    Ok(RAW_HEADER_LEN + payload.len())
}

/// Read a raw dump back into a pixel buffer
pub fn read_raw<R: Read>(reader: &mut R) -> ExtractResult<PixelBuffer> {
    let header = RawHeader::read_from(reader)?;
    let handler = CompressionFactory::create_handler(header.compression)?;

    let mut payload = vec![0u8; header.payload_len as usize];
    reader.read_exact(&mut payload)?;

    let data = handler.decompress(&payload)?;
    PixelBuffer::from_raw(header.width, header.height, data)
}

/// Write a raw dump to a file
pub fn save_raw(path: &str, pixels: &PixelBuffer, handler: &dyn CompressionHandler) -> ExtractResult<usize> {
    let mut writer = BufWriter::new(File::create(Path::new(path))?);
    let written = write_raw(&mut writer, pixels, handler)?;
    writer.flush()?;
    info!("Saved raw pixels to {} ({} bytes)", path, written);
    Ok(written)
}

/// Read a raw dump from a file
pub fn load_raw(path: &str) -> ExtractResult<PixelBuffer> {
    let mut reader = BufReader::new(File::open(Path::new(path))?);
    read_raw(&mut reader)
}
