use thiserror::Error;

/// Errors raised while decoding a notice frame
///
/// These never escape [`crate::accumulator::NoticeAccumulator`]; a frame that fails to decode is
/// reported as a [`crate::diagnostic::Diagnostic::MalformedFrame`] instead.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Unexpected end of frame")]
    UnexpectedEof,

    #[error("Invalid packet")]
    InvalidPacket,

    #[error("Varint exceeds 64 bits")]
    VarintOverflow,

    #[error("Unsupported protobuf wire type: {0}")]
    UnsupportedWireType(u8),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Unknown scalar type: {0}")]
    UnknownScalarType(u64),
}

pub type Result<T> = std::result::Result<T, Error>;
