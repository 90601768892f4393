//! Loose object codec
//!
//! A loose object file is a zlib stream which inflates to
//! `<header>\0<body>`. Only the first NUL separates header from body:
//! tree bodies carry raw NUL bytes of their own and are returned untouched.

use bytes::Bytes;
use derive_new::new;
use flate2::{Decompress, FlushDecompress, Status};
use std::io::{self, Write};

#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("object is not a valid zlib stream")]
    BadStream(#[source] io::Error),
    #[error("object has no NUL separator between header and body")]
    MalformedObject,
}

/// A decoded object: the unparsed header and the opaque body.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct RawObject {
    header: String,
    body: Bytes,
}

impl RawObject {
    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }
}

pub fn decode(compressed: &[u8]) -> Result<RawObject, CodecError> {
    let inflated = decompress(compressed)?;

    let separator = inflated
        .iter()
        .position(|&byte| byte == b'\0')
        .ok_or(CodecError::MalformedObject)?;

    let header = String::from_utf8_lossy(&inflated[..separator]).into_owned();
    let body = inflated.slice(separator + 1..);

    Ok(RawObject::new(header, body))
}

/// Inverse of [`decode`]; the header must not contain a NUL byte.
pub fn encode(header: &str, body: &[u8]) -> Result<Bytes, CodecError> {
    let mut encoder = flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
    encoder
        .write_all(header.as_bytes())
        .map_err(CodecError::BadStream)?;
    encoder.write_all(b"\0").map_err(CodecError::BadStream)?;
    encoder.write_all(body).map_err(CodecError::BadStream)?;

    encoder
        .finish()
        .map(Bytes::from)
        .map_err(CodecError::BadStream)
}

fn decompress(data: &[u8]) -> Result<Bytes, CodecError> {
    // ZlibDecoder::read_to_end accepts a stream cut short after a complete
    // block, so drive the inflater directly and insist on reaching StreamEnd.
    let mut inflater = Decompress::new(true);
    let mut decompressed_content = Vec::with_capacity(data.len() * 2 + 64);

    loop {
        if decompressed_content.len() == decompressed_content.capacity() {
            decompressed_content.reserve(decompressed_content.capacity());
        }

        let consumed = inflater.total_in();
        let produced = inflater.total_out();
        let status = inflater
            .decompress_vec(
                &data[consumed as usize..],
                &mut decompressed_content,
                FlushDecompress::None,
            )
            .map_err(|error| CodecError::BadStream(error.into()))?;

        if status == Status::StreamEnd {
            return Ok(decompressed_content.into());
        }

        // with spare output room, no progress means the input ran out
        if inflater.total_in() == consumed && inflater.total_out() == produced {
            return Err(CodecError::BadStream(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "truncated zlib stream",
            )));
        }
    }
}
