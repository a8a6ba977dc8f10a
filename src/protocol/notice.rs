//! Notices pushed by the server while a statement executes.

use crate::constant::{FrameScope, FrameType, ScalarType, SessionStateParam, WarningLevel};
use crate::error::{Error, Result};
use crate::protocol::primitive::*;
use simdutf8::basic::from_utf8;

/// Body of a `Mysqlx.Notice.Frame` message, without the X Protocol length/type header
#[derive(Debug, Clone, Copy)]
pub struct NoticeFrameBytes<'a>(pub &'a [u8]);

impl<'a> NoticeFrameBytes<'a> {
    pub fn bytes(&self) -> &'a [u8] {
        self.0
    }
}

/// A decoded notice
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Warning(Warning),
    SessionStateChanged(SessionStateChange),
    /// Any frame type the statement result does not consume
    Other {
        frame_type: FrameType,
        scope: FrameScope,
        payload: Vec<u8>,
    },
}

impl Notice {
    pub fn frame_type(&self) -> FrameType {
        match self {
            Notice::Warning(_) => FrameType::Warning,
            Notice::SessionStateChanged(_) => FrameType::SessionStateChanged,
            Notice::Other { frame_type, .. } => *frame_type,
        }
    }
}

/// `Mysqlx.Notice.Warning`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub level: WarningLevel,
    pub code: u32,
    pub message: String,
}

/// `Mysqlx.Notice.SessionStateChanged`
#[derive(Debug, Clone, PartialEq)]
pub struct SessionStateChange {
    pub param: SessionStateParam,
    pub values: Vec<Scalar>,
}

/// `Mysqlx.Datatypes.Scalar`
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    SignedInt(i64),
    UnsignedInt(u64),
    Null,
    Octets { value: Vec<u8>, content_type: u32 },
    Double(f64),
    Float(f32),
    Bool(bool),
    String { value: Vec<u8>, collation: u64 },
}

fn expect_varint(value: FieldValue<'_>) -> Result<u64> {
    match value {
        FieldValue::Varint(v) => Ok(v),
        _ => Err(Error::InvalidPacket),
    }
}

/// `uint32` and enum fields; protobuf truncates oversized values instead of rejecting them
fn expect_varint_u32(value: FieldValue<'_>) -> Result<u32> {
    Ok(expect_varint(value)? as u32)
}

fn expect_bytes<'a>(value: FieldValue<'a>) -> Result<&'a [u8]> {
    match value {
        FieldValue::Bytes(v) => Ok(v),
        _ => Err(Error::InvalidPacket),
    }
}

fn expect_fixed_8(value: FieldValue<'_>) -> Result<u64> {
    match value {
        FieldValue::Fixed64(v) => Ok(v),
        _ => Err(Error::InvalidPacket),
    }
}

fn expect_fixed_4(value: FieldValue<'_>) -> Result<u32> {
    match value {
        FieldValue::Fixed32(v) => Ok(v),
        _ => Err(Error::InvalidPacket),
    }
}

impl TryFrom<NoticeFrameBytes<'_>> for Notice {
    type Error = Error;

    #[tracing::instrument(skip_all)]
    fn try_from(bytes: NoticeFrameBytes<'_>) -> Result<Self> {
        let mut data = bytes.bytes();
        let mut frame_type = None;
        let mut scope = FrameScope::default();
        let mut payload: &[u8] = &[];

        while !data.is_empty() {
            let (field, value, rest) = read_field(data)?;
            data = rest;
            match field {
                1 => frame_type = Some(FrameType::from(expect_varint_u32(value)?)),
                2 => scope = FrameScope::from(expect_varint_u32(value)?),
                3 => payload = expect_bytes(value)?,
                _ => {}
            }
        }

        let frame_type = frame_type.ok_or(Error::MissingField("Frame.type"))?;
        match frame_type {
            FrameType::Warning => Ok(Notice::Warning(Warning::decode(payload)?)),
            FrameType::SessionStateChanged => Ok(Notice::SessionStateChanged(
                SessionStateChange::decode(payload)?,
            )),
            _ => Ok(Notice::Other {
                frame_type,
                scope,
                payload: payload.to_vec(),
            }),
        }
    }
}

impl Warning {
    pub fn decode(mut data: &[u8]) -> Result<Self> {
        let mut level = WarningLevel::default();
        let mut code = None;
        let mut message = None;

        while !data.is_empty() {
            let (field, value, rest) = read_field(data)?;
            data = rest;
            match field {
                1 => level = WarningLevel::from(expect_varint_u32(value)?),
                2 => code = Some(expect_varint_u32(value)?),
                3 => message = Some(expect_bytes(value)?),
                _ => {}
            }
        }

        let message = message.ok_or(Error::MissingField("Warning.msg"))?;
        // Server messages may embed bytes of a non-UTF-8 charset
        let message = match from_utf8(message) {
            Ok(message) => message.to_owned(),
            Err(_) => String::from_utf8_lossy(message).into_owned(),
        };
        Ok(Self {
            level,
            code: code.ok_or(Error::MissingField("Warning.code"))?,
            message,
        })
    }
}

impl SessionStateChange {
    /// The first value, used by single-valued parameters
    pub fn value(&self) -> Option<&Scalar> {
        self.values.first()
    }

    pub fn decode(mut data: &[u8]) -> Result<Self> {
        let mut param = None;
        let mut values = Vec::new();

        while !data.is_empty() {
            let (field, value, rest) = read_field(data)?;
            data = rest;
            match field {
                1 => param = Some(SessionStateParam::from(expect_varint_u32(value)?)),
                2 => values.push(Scalar::decode(expect_bytes(value)?)?),
                _ => {}
            }
        }

        Ok(Self {
            param: param.ok_or(Error::MissingField("SessionStateChanged.param"))?,
            values,
        })
    }
}

/// Fields shared by `Mysqlx.Datatypes.Scalar.Octets` and `Mysqlx.Datatypes.Scalar.String`:
/// a required `value` and an optional integer at field 2
fn decode_byte_string(mut data: &[u8], name: &'static str) -> Result<(Vec<u8>, u64)> {
    let mut value = None;
    let mut extra = 0;

    while !data.is_empty() {
        let (field, field_value, rest) = read_field(data)?;
        data = rest;
        match field {
            1 => value = Some(expect_bytes(field_value)?),
            2 => extra = expect_varint(field_value)?,
            _ => {}
        }
    }

    let value = value.ok_or(Error::MissingField(name))?;
    Ok((value.to_vec(), extra))
}

impl Scalar {
    pub fn scalar_type(&self) -> ScalarType {
        match self {
            Scalar::SignedInt(_) => ScalarType::SignedInt,
            Scalar::UnsignedInt(_) => ScalarType::UnsignedInt,
            Scalar::Null => ScalarType::Null,
            Scalar::Octets { .. } => ScalarType::Octets,
            Scalar::Double(_) => ScalarType::Double,
            Scalar::Float(_) => ScalarType::Float,
            Scalar::Bool(_) => ScalarType::Bool,
            Scalar::String { .. } => ScalarType::String,
        }
    }

    /// Raw bytes of `Octets` and `String` scalars
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Scalar::Octets { value, .. } | Scalar::String { value, .. } => Some(value),
            _ => None,
        }
    }

    pub fn into_bytes(self) -> Option<Vec<u8>> {
        match self {
            Scalar::Octets { value, .. } | Scalar::String { value, .. } => Some(value),
            _ => None,
        }
    }

    pub fn decode(mut data: &[u8]) -> Result<Self> {
        let mut tag = None;
        let mut signed = None;
        let mut unsigned = None;
        let mut octets = None;
        let mut double = None;
        let mut float = None;
        let mut boolean = None;
        let mut string = None;

        while !data.is_empty() {
            let (field, value, rest) = read_field(data)?;
            data = rest;
            match field {
                1 => tag = Some(expect_varint(value)?),
                2 => signed = Some(decode_zigzag(expect_varint(value)?)),
                3 => unsigned = Some(expect_varint(value)?),
                5 => octets = Some(expect_bytes(value)?),
                6 => double = Some(f64::from_bits(expect_fixed_8(value)?)),
                7 => float = Some(f32::from_bits(expect_fixed_4(value)?)),
                8 => boolean = Some(expect_varint(value)? != 0),
                9 => string = Some(expect_bytes(value)?),
                _ => {}
            }
        }

        let tag = tag.ok_or(Error::MissingField("Scalar.type"))?;
        let scalar_type = ScalarType::from_tag(tag).ok_or(Error::UnknownScalarType(tag))?;
        match scalar_type {
            ScalarType::SignedInt => signed
                .map(Scalar::SignedInt)
                .ok_or(Error::MissingField("Scalar.v_signed_int")),
            ScalarType::UnsignedInt => unsigned
                .map(Scalar::UnsignedInt)
                .ok_or(Error::MissingField("Scalar.v_unsigned_int")),
            ScalarType::Null => Ok(Scalar::Null),
            ScalarType::Octets => {
                let octets = octets.ok_or(Error::MissingField("Scalar.v_octets"))?;
                let (value, content_type) = decode_byte_string(octets, "Scalar.Octets.value")?;
                Ok(Scalar::Octets {
                    value,
                    content_type: content_type as u32,
                })
            }
            ScalarType::Double => double
                .map(Scalar::Double)
                .ok_or(Error::MissingField("Scalar.v_double")),
            ScalarType::Float => float
                .map(Scalar::Float)
                .ok_or(Error::MissingField("Scalar.v_float")),
            ScalarType::Bool => boolean
                .map(Scalar::Bool)
                .ok_or(Error::MissingField("Scalar.v_bool")),
            ScalarType::String => {
                let string = string.ok_or(Error::MissingField("Scalar.v_string"))?;
                let (value, collation) = decode_byte_string(string, "Scalar.String.value")?;
                Ok(Scalar::String { value, collation })
            }
        }
    }
}
