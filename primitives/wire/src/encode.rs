//! Wire encoders for synthesizing registry buffers in tests.
//!
//! These mirror the decoder's field layout. They are compiled behind the
//! `test-utils` feature and are not part of the pipeline proper.

use ir::{ArgDef, AttrDef, OpDef};

/// Append a varint.
pub fn varint(out: &mut Vec<u8>, mut v: u64) {
    loop {
        let byte = (v & 0x7f) as u8;
        v >>= 7;
        if v == 0 {
            out.push(byte);
            break;
        }
        out.push(byte | 0x80);
    }
}

/// Append a `(field, wire type)` tag.
pub fn tag(out: &mut Vec<u8>, field: u64, wire_type: u8) {
    varint(out, (field << 3) | u64::from(wire_type));
}

/// Append a length-delimited field.
pub fn bytes_field(out: &mut Vec<u8>, field: u64, payload: &[u8]) {
    tag(out, field, 2);
    varint(out, payload.len() as u64);
    out.extend_from_slice(payload);
}

/// Append a string field.
pub fn string_field(out: &mut Vec<u8>, field: u64, s: &str) {
    bytes_field(out, field, s.as_bytes());
}

/// Append a varint field.
pub fn varint_field(out: &mut Vec<u8>, field: u64, v: u64) {
    tag(out, field, 0);
    varint(out, v);
}

/// Append a fixed 64-bit field.
pub fn fixed64_field(out: &mut Vec<u8>, field: u64, v: u64) {
    tag(out, field, 1);
    out.extend_from_slice(&v.to_le_bytes());
}

/// Append a fixed 32-bit field.
pub fn fixed32_field(out: &mut Vec<u8>, field: u64, v: u32) {
    tag(out, field, 5);
    out.extend_from_slice(&v.to_le_bytes());
}

/// Append a group field wrapping already-encoded inner fields.
pub fn group_field(out: &mut Vec<u8>, field: u64, inner: &[u8]) {
    tag(out, field, 3);
    out.extend_from_slice(inner);
    tag(out, field, 4);
}

/// Encode one arg-definition message.
pub fn arg_def(arg: &ArgDef) -> Vec<u8> {
    let mut out = Vec::new();
    if !arg.name.is_empty() {
        string_field(&mut out, 1, &arg.name);
    }
    if let Some(code) = arg.arg_type {
        varint_field(&mut out, 3, u64::from(code as u32));
    }
    if let Some(type_attr) = &arg.type_attr {
        string_field(&mut out, 4, type_attr);
    }
    if let Some(number_attr) = &arg.number_attr {
        string_field(&mut out, 5, number_attr);
    }
    if let Some(type_list_attr) = &arg.type_list_attr {
        string_field(&mut out, 6, type_list_attr);
    }
    out
}

/// Encode one attr-definition message.
pub fn attr_def(attr: &AttrDef) -> Vec<u8> {
    let mut out = Vec::new();
    string_field(&mut out, 1, &attr.name);
    string_field(&mut out, 2, &attr.attr_type);
    out
}

/// Encode one operation-definition message.
pub fn op_def(op: &OpDef) -> Vec<u8> {
    let mut out = Vec::new();
    string_field(&mut out, 1, &op.name);
    for arg in &op.input_args {
        bytes_field(&mut out, 2, &arg_def(arg));
    }
    for arg in &op.output_args {
        bytes_field(&mut out, 3, &arg_def(arg));
    }
    for attr in &op.attrs {
        bytes_field(&mut out, 4, &attr_def(attr));
    }
    if !op.summary.is_empty() {
        string_field(&mut out, 5, &op.summary);
    }
    out
}

/// Encode a full registry snapshot.
pub fn registry(ops: &[OpDef]) -> Vec<u8> {
    let mut out = Vec::new();
    for op in ops {
        bytes_field(&mut out, 1, &op_def(op));
    }
    out
}
