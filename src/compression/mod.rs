//! Payload compression for raw pixel dumps
//!
//! Raw RGBA dumps store their pixel payload through one of these handlers.
//! The handler code is written into the dump header so a reader can pick
//! the matching decoder.

mod handler;
mod uncompressed;
mod deflate;
mod factory;
mod zstd;

#[cfg(test)]
mod tests;

pub use handler::CompressionHandler;
pub use uncompressed::UncompressedHandler;
pub use deflate::DeflateHandler;
pub use factory::CompressionFactory;
pub use zstd::ZstdHandler;
