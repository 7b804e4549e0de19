//! Registry snapshot decoding.
//!
//! Field numbers follow the registry's operation-definition schema:
//!
//! - registry: `1` repeated op (length-delimited)
//! - op: `1` name, `2` repeated input_arg, `3` repeated output_arg,
//!   `4` repeated attr, `5` summary
//! - arg: `1` name, `3` type code (varint), `4` type_attr, `5` number_attr,
//!   `6` type_list_attr
//! - attr: `1` name, `2` type
//!
//! Only the field numbers are relied upon; no full schema is needed.

use ir::{ArgDef, AttrDef, OpDef};
use thiserror::Error;

/// Errors that can occur while decoding a registry snapshot.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// The buffer ended before the current field was complete
    #[error("registry data truncated")]
    Truncated,
    /// A field tag decoded to zero
    #[error("malformed field tag")]
    MalformedTag,
    /// A tag carried a wire type outside the known set
    #[error("invalid wire type: {0}")]
    InvalidWireType(u8),
    /// A varint needed more than 64 bits, or a length did not fit in memory
    #[error("length overflow")]
    LengthOverflow,
    /// A string field held bytes that are not valid UTF-8
    #[error("invalid UTF-8 in string field")]
    InvalidUtf8,
}

const WT_VARINT: u8 = 0;
const WT_I64: u8 = 1;
const WT_LEN: u8 = 2;
const WT_START_GROUP: u8 = 3;
const WT_END_GROUP: u8 = 4;
const WT_I32: u8 = 5;

/// Decode a full registry snapshot into its operation definitions.
///
/// Top-level fields other than the repeated op message are skipped.
pub fn decode_registry(bytes: &[u8]) -> Result<Vec<OpDef>, DecodeError> {
    let mut r = WireReader::new(bytes);
    let mut ops = Vec::new();
    while !r.eof() {
        let (field, wire_type) = r.read_tag()?;
        if field == 1 && wire_type == WT_LEN {
            let msg = r.read_length_delimited()?;
            ops.push(decode_op_def(msg)?);
        } else {
            r.skip_field(wire_type)?;
        }
    }
    Ok(ops)
}

/// Decode one operation-definition message.
pub fn decode_op_def(bytes: &[u8]) -> Result<OpDef, DecodeError> {
    let mut r = WireReader::new(bytes);
    let mut op = OpDef::default();
    while !r.eof() {
        let (field, wire_type) = r.read_tag()?;
        match (field, wire_type) {
            (1, WT_LEN) => op.name = r.read_string()?,
            (2, WT_LEN) => {
                let msg = r.read_length_delimited()?;
                op.input_args.push(decode_arg_def(msg)?);
            }
            (3, WT_LEN) => {
                let msg = r.read_length_delimited()?;
                op.output_args.push(decode_arg_def(msg)?);
            }
            (4, WT_LEN) => {
                let msg = r.read_length_delimited()?;
                op.attrs.push(decode_attr_def(msg)?);
            }
            (5, WT_LEN) => op.summary = r.read_string()?,
            (_, wt) => r.skip_field(wt)?,
        }
    }
    Ok(op)
}

fn decode_arg_def(bytes: &[u8]) -> Result<ArgDef, DecodeError> {
    let mut r = WireReader::new(bytes);
    let mut arg = ArgDef::default();
    while !r.eof() {
        let (field, wire_type) = r.read_tag()?;
        match (field, wire_type) {
            (1, WT_LEN) => arg.name = r.read_string()?,
            (3, WT_VARINT) => arg.arg_type = Some(r.read_varint()? as u32 as i32),
            (4, WT_LEN) => arg.type_attr = Some(r.read_string()?),
            (5, WT_LEN) => arg.number_attr = Some(r.read_string()?),
            (6, WT_LEN) => arg.type_list_attr = Some(r.read_string()?),
            (_, wt) => r.skip_field(wt)?,
        }
    }
    Ok(arg)
}

fn decode_attr_def(bytes: &[u8]) -> Result<AttrDef, DecodeError> {
    let mut r = WireReader::new(bytes);
    let mut attr = AttrDef::default();
    while !r.eof() {
        let (field, wire_type) = r.read_tag()?;
        match (field, wire_type) {
            (1, WT_LEN) => attr.name = r.read_string()?,
            (2, WT_LEN) => attr.attr_type = r.read_string()?,
            // default_value, description, and constraint fields are skipped
            (_, wt) => r.skip_field(wt)?,
        }
    }
    Ok(attr)
}

/// Cursor over a wire-encoded buffer.
struct WireReader<'a> {
    buf: &'a [u8],
    index: usize,
}

impl<'a> WireReader<'a> {
    fn new(buf: &'a [u8]) -> Self { WireReader { buf, index: 0 } }

    fn eof(&self) -> bool { self.index >= self.buf.len() }

    fn read_byte(&mut self) -> Result<u8, DecodeError> {
        let b = *self.buf.get(self.index).ok_or(DecodeError::Truncated)?;
        self.index += 1;
        Ok(b)
    }

    fn read_tag(&mut self) -> Result<(u64, u8), DecodeError> {
        let tag = self.read_varint()?;
        if tag == 0 {
            return Err(DecodeError::MalformedTag);
        }
        Ok((tag >> 3, (tag & 0x07) as u8))
    }

    fn read_varint(&mut self) -> Result<u64, DecodeError> {
        let mut result: u64 = 0;
        let mut shift: u32 = 0;
        loop {
            let b = self.read_byte()?;
            result |= u64::from(b & 0x7f) << shift;
            if b & 0x80 == 0 {
                break;
            }
            shift += 7;
            if shift > 63 {
                return Err(DecodeError::LengthOverflow);
            }
        }
        Ok(result)
    }

    fn read_length_delimited(&mut self) -> Result<&'a [u8], DecodeError> {
        let len64 = self.read_varint()?;
        let len = usize::try_from(len64).map_err(|_| DecodeError::LengthOverflow)?;
        let end = self.index.checked_add(len).ok_or(DecodeError::LengthOverflow)?;
        if end > self.buf.len() {
            return Err(DecodeError::Truncated);
        }
        let slice = &self.buf[self.index..end];
        self.index = end;
        Ok(slice)
    }

    fn read_string(&mut self) -> Result<String, DecodeError> {
        let bytes = self.read_length_delimited()?;
        let s = std::str::from_utf8(bytes).map_err(|_| DecodeError::InvalidUtf8)?;
        Ok(s.to_string())
    }

    fn skip_field(&mut self, wire_type: u8) -> Result<(), DecodeError> {
        match wire_type {
            WT_VARINT => {
                self.read_varint()?;
            }
            WT_I64 => self.skip_bytes(8)?,
            WT_LEN => {
                self.read_length_delimited()?;
            }
            WT_START_GROUP => self.skip_group()?,
            // A stray end-group at this level is consumed by the caller's
            // group scan; nothing further to skip here.
            WT_END_GROUP => {}
            WT_I32 => self.skip_bytes(4)?,
            other => return Err(DecodeError::InvalidWireType(other)),
        }
        Ok(())
    }

    // Groups are a legacy form, but must be walked to the matching
    // end-group tag or every field after them would desynchronize.
    fn skip_group(&mut self) -> Result<(), DecodeError> {
        loop {
            let (_, wire_type) = self.read_tag()?;
            if wire_type == WT_END_GROUP {
                return Ok(());
            }
            self.skip_field(wire_type)?;
        }
    }

    fn skip_bytes(&mut self, n: usize) -> Result<(), DecodeError> {
        let end = self.index.checked_add(n).ok_or(DecodeError::LengthOverflow)?;
        if end > self.buf.len() {
            return Err(DecodeError::Truncated);
        }
        self.index = end;
        Ok(())
    }
}
