use crate::constant::WireType;
use crate::error::{Error, Result};
use zerocopy::FromBytes;
use zerocopy::byteorder::little_endian::{U32 as U32LE, U64 as U64LE};

/// Longest encoding of a 64-bit varint
const MAX_VARINT_LEN: usize = 10;

/// A decoded protobuf field value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Varint(u64),
    Fixed64(u64),
    Bytes(&'a [u8]),
    Fixed32(u32),
}

impl FieldValue<'_> {
    pub fn wire_type(&self) -> WireType {
        match self {
            FieldValue::Varint(_) => WireType::Varint,
            FieldValue::Fixed64(_) => WireType::Fixed64,
            FieldValue::Bytes(_) => WireType::LengthDelimited,
            FieldValue::Fixed32(_) => WireType::Fixed32,
        }
    }
}

/// Read base-128 varint
///
/// The full 64-bit range is preserved: the 10th byte may only contribute bit 63.
pub fn read_varint(data: &[u8]) -> Result<(u64, &[u8])> {
    let mut value = 0u64;
    for (i, &byte) in data.iter().take(MAX_VARINT_LEN).enumerate() {
        if i == MAX_VARINT_LEN - 1 && byte > 1 {
            return Err(Error::VarintOverflow);
        }
        value |= u64::from(byte & 0x7F) << (7 * i);
        if byte & 0x80 == 0 {
            return Ok((value, &data[i + 1..]));
        }
    }
    Err(Error::UnexpectedEof)
}

/// Decode a `sint64` zigzag value
pub fn decode_zigzag(value: u64) -> i64 {
    ((value >> 1) as i64) ^ -((value & 1) as i64)
}

/// Encode a `sint64` zigzag value
pub fn encode_zigzag(value: i64) -> u64 {
    ((value << 1) ^ (value >> 63)) as u64
}

/// Read 4-byte little-endian integer
pub fn read_fixed_4(data: &[u8]) -> Result<(u32, &[u8])> {
    if data.len() < 4 {
        return Err(Error::UnexpectedEof);
    }
    let value = U32LE::ref_from_bytes(&data[..4])
        .map_err(|_| Error::InvalidPacket)?
        .get();
    Ok((value, &data[4..]))
}

/// Read 8-byte little-endian integer
pub fn read_fixed_8(data: &[u8]) -> Result<(u64, &[u8])> {
    if data.len() < 8 {
        return Err(Error::UnexpectedEof);
    }
    let value = U64LE::ref_from_bytes(&data[..8])
        .map_err(|_| Error::InvalidPacket)?
        .get();
    Ok((value, &data[8..]))
}

/// Read fixed-length bytes
pub fn read_bytes_fix(data: &[u8], len: usize) -> Result<(&[u8], &[u8])> {
    if data.len() < len {
        return Err(Error::UnexpectedEof);
    }
    Ok((&data[..len], &data[len..]))
}

/// Read varint-length-prefixed bytes
pub fn read_bytes_lenenc(data: &[u8]) -> Result<(&[u8], &[u8])> {
    let (len, rest) = read_varint(data)?;
    let len = usize::try_from(len).map_err(|_| Error::InvalidPacket)?;
    read_bytes_fix(rest, len)
}

/// Read one field: `(field_number, value, rest)`
pub fn read_field(data: &[u8]) -> Result<(u32, FieldValue<'_>, &[u8])> {
    let (key, rest) = read_varint(data)?;
    let field_number = u32::try_from(key >> 3).map_err(|_| Error::InvalidPacket)?;
    if field_number == 0 {
        return Err(Error::InvalidPacket);
    }

    match (key & 0x07) as u8 {
        0 => {
            let (value, rest) = read_varint(rest)?;
            Ok((field_number, FieldValue::Varint(value), rest))
        }
        1 => {
            let (value, rest) = read_fixed_8(rest)?;
            Ok((field_number, FieldValue::Fixed64(value), rest))
        }
        2 => {
            let (value, rest) = read_bytes_lenenc(rest)?;
            Ok((field_number, FieldValue::Bytes(value), rest))
        }
        5 => {
            let (value, rest) = read_fixed_4(rest)?;
            Ok((field_number, FieldValue::Fixed32(value), rest))
        }
        // 3 and 4 are the deprecated group markers
        other => Err(Error::UnsupportedWireType(other)),
    }
}

/// Write base-128 varint
pub fn write_varint(out: &mut Vec<u8>, mut value: u64) {
    while value >= 0x80 {
        out.push((value as u8) | 0x80);
        value >>= 7;
    }
    out.push(value as u8);
}

/// Write field key
pub fn write_key(out: &mut Vec<u8>, field_number: u32, wire_type: WireType) {
    write_varint(out, (u64::from(field_number) << 3) | wire_type as u64);
}

/// Write varint field
pub fn write_field_varint(out: &mut Vec<u8>, field_number: u32, value: u64) {
    write_key(out, field_number, WireType::Varint);
    write_varint(out, value);
}

/// Write length-delimited field
pub fn write_field_bytes(out: &mut Vec<u8>, field_number: u32, data: &[u8]) {
    write_key(out, field_number, WireType::LengthDelimited);
    write_varint(out, data.len() as u64);
    out.extend_from_slice(data);
}

/// Write 8-byte little-endian field
pub fn write_field_fixed_8(out: &mut Vec<u8>, field_number: u32, value: u64) {
    write_key(out, field_number, WireType::Fixed64);
    out.extend_from_slice(&value.to_le_bytes());
}

/// Write 4-byte little-endian field
pub fn write_field_fixed_4(out: &mut Vec<u8>, field_number: u32, value: u32) {
    write_key(out, field_number, WireType::Fixed32);
    out.extend_from_slice(&value.to_le_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_varint_single_byte() {
        let (value, rest) = read_varint(&[0x2A, 0xFF]).unwrap();
        assert_eq!(value, 42);
        assert_eq!(rest, &[0xFF]);
    }

    #[test]
    fn test_read_varint_multi_byte() {
        // 300 = 0b1_0010_1100
        let (value, rest) = read_varint(&[0xAC, 0x02]).unwrap();
        assert_eq!(value, 300);
        assert!(rest.is_empty());
    }

    #[test]
    fn test_read_varint_above_i64_max() {
        // 2^63
        let data = [0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x01];
        let (value, rest) = read_varint(&data).unwrap();
        assert_eq!(value, 1u64 << 63);
        assert!(rest.is_empty());

        // 2^64 - 1
        let data = [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x01];
        let (value, _) = read_varint(&data).unwrap();
        assert_eq!(value, u64::MAX);
    }

    #[test]
    fn test_read_varint_overflow() {
        let data = [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x02];
        assert!(matches!(read_varint(&data), Err(Error::VarintOverflow)));

        let data = [0x80; 11];
        assert!(matches!(read_varint(&data), Err(Error::VarintOverflow)));
    }

    #[test]
    fn test_read_varint_truncated() {
        assert!(matches!(read_varint(&[]), Err(Error::UnexpectedEof)));
        assert!(matches!(read_varint(&[0x80, 0x80]), Err(Error::UnexpectedEof)));
    }

    #[test]
    fn test_write_varint() {
        let mut out = Vec::new();
        write_varint(&mut out, 300);
        assert_eq!(out, [0xAC, 0x02]);

        out.clear();
        write_varint(&mut out, u64::MAX);
        assert_eq!(out.len(), 10);
        assert_eq!(read_varint(&out).unwrap().0, u64::MAX);
    }

    #[test]
    fn test_zigzag() {
        assert_eq!(decode_zigzag(0), 0);
        assert_eq!(decode_zigzag(1), -1);
        assert_eq!(decode_zigzag(2), 1);
        assert_eq!(decode_zigzag(3), -2);
        assert_eq!(decode_zigzag(u64::MAX), i64::MIN);
        assert_eq!(decode_zigzag(u64::MAX - 1), i64::MAX);
        assert_eq!(encode_zigzag(-1), 1);
        assert_eq!(encode_zigzag(i64::MIN), u64::MAX);
    }

    #[test]
    fn test_read_fixed() {
        let (value, rest) = read_fixed_4(&[0x78, 0x56, 0x34, 0x12, 0xAA]).unwrap();
        assert_eq!(value, 0x12345678);
        assert_eq!(rest, &[0xAA]);

        let bytes = u64::MAX.to_le_bytes();
        let (value, rest) = read_fixed_8(&bytes).unwrap();
        assert_eq!(value, u64::MAX);
        assert!(rest.is_empty());

        assert!(matches!(read_fixed_8(&[0; 7]), Err(Error::UnexpectedEof)));
    }

    #[test]
    fn test_read_field() {
        let mut data = Vec::new();
        write_field_varint(&mut data, 1, 3);
        write_field_bytes(&mut data, 3, b"abc");
        write_field_fixed_8(&mut data, 6, 7);
        write_field_fixed_4(&mut data, 7, 9);

        let (number, value, rest) = read_field(&data).unwrap();
        assert_eq!((number, value), (1, FieldValue::Varint(3)));
        let (number, value, rest) = read_field(rest).unwrap();
        assert_eq!((number, value), (3, FieldValue::Bytes(b"abc")));
        let (number, value, rest) = read_field(rest).unwrap();
        assert_eq!((number, value), (6, FieldValue::Fixed64(7)));
        let (number, value, rest) = read_field(rest).unwrap();
        assert_eq!((number, value), (7, FieldValue::Fixed32(9)));
        assert_eq!(value.wire_type(), WireType::Fixed32);
        assert!(rest.is_empty());
    }

    #[test]
    fn test_read_field_rejects_groups_and_zero() {
        // field 1, wire type 3 (start group)
        assert!(matches!(
            read_field(&[0x0B]),
            Err(Error::UnsupportedWireType(3))
        ));
        // field 0
        assert!(matches!(read_field(&[0x00, 0x01]), Err(Error::InvalidPacket)));
    }

    #[test]
    fn test_read_field_truncated_bytes() {
        // field 1, length 5, only 2 bytes present
        assert!(matches!(
            read_field(&[0x0A, 0x05, b'a', b'b']),
            Err(Error::UnexpectedEof)
        ));
    }
}
