#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! # `opgen-runtime` — execution collaborator interface
//!
//! This crate defines the **interface** between generated wrappers and the
//! runtime that actually creates tensors and dispatches operations by name.
//! No execution engine lives here; engines implement [`OpExecutor`]
//! elsewhere, and everything in this crate stays a thin, typed facade over
//! that trait.
//!
//! ## Core concepts
//!
//! ### `OpExecutor`
//! The single dispatch seam: execute one named operation against a list of
//! input handles and bound attributes, returning output handles.
//!
//! ### `Ops` / `OpBuilder`
//! The session facade generated wrappers call. An [`Ops`] value borrows an
//! executor explicitly — there is no process-wide default context, callers
//! thread the session through as a parameter.
//!
//! ### `Tensor<T>` / `Element`
//! Typed handles over the executor's opaque [`RawTensor`]s. The `Element`
//! trait carries the data-type code a wrapper binds to the operation's type
//! attribute.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Type alias for runtime dispatch results.
pub type Result<T> = std::result::Result<T, RuntimeError>;

/// Errors surfaced by an operation executor.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// The executor failed to run the named operation.
    #[error("execution failed for '{op_name}': {message}")]
    Execution {
        /// Operation that was being dispatched
        op_name: String,
        /// Executor-provided failure description
        message: String,
    },
    /// The executor returned a different number of outputs than requested.
    #[error("'{op_name}' returned {actual} outputs, expected {expected}")]
    OutputArity {
        /// Operation that was being dispatched
        op_name: String,
        /// Outputs the caller asked for
        expected: usize,
        /// Outputs the executor produced
        actual: usize,
    },
}

/// Data types an element type can bind to a type attribute.
///
/// The numeric codes match the registry's literal-type field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataType {
    /// 32-bit float (code 1)
    Float,
    /// 64-bit float (code 2)
    Double,
    /// 32-bit signed integer (code 3)
    Int32,
    /// UTF-8 string (code 7)
    Str,
    /// 64-bit signed integer (code 9)
    Int64,
    /// Boolean (code 10)
    Bool,
}

impl DataType {
    /// The registry's numeric code for this data type.
    pub fn code(&self) -> i32 {
        match self {
            DataType::Float => 1,
            DataType::Double => 2,
            DataType::Int32 => 3,
            DataType::Str => 7,
            DataType::Int64 => 9,
            DataType::Bool => 10,
        }
    }
}

/// Scalar types usable as tensor elements.
pub trait Element {
    /// Data type bound to the operation's type attribute.
    const DATA_TYPE: DataType;
}

impl Element for f32 {
    const DATA_TYPE: DataType = DataType::Float;
}
impl Element for f64 {
    const DATA_TYPE: DataType = DataType::Double;
}
impl Element for i32 {
    const DATA_TYPE: DataType = DataType::Int32;
}
impl Element for i64 {
    const DATA_TYPE: DataType = DataType::Int64;
}
impl Element for bool {
    const DATA_TYPE: DataType = DataType::Bool;
}

/// Opaque handle to a tensor owned by the executor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTensor {
    id: u64,
}

impl RawTensor {
    /// Wrap an executor-assigned handle id.
    pub fn new(id: u64) -> Self { RawTensor { id } }

    /// The executor-assigned handle id.
    pub fn id(&self) -> u64 { self.id }
}

/// Typed tensor handle.
#[derive(Debug, Clone, Copy)]
pub struct Tensor<T: Element> {
    raw: RawTensor,
    _marker: std::marker::PhantomData<T>,
}

impl<T: Element> Tensor<T> {
    /// Adopt a raw handle as a tensor of element type `T`.
    pub fn from_raw(raw: RawTensor) -> Self {
        Tensor { raw, _marker: std::marker::PhantomData }
    }

    /// The underlying raw handle.
    pub fn raw(&self) -> RawTensor { self.raw }
}

/// One attribute value bound to an operation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttrValue {
    /// A data-type binding (e.g. the shared "T" parameter)
    Type(DataType),
    /// A boolean flag
    Bool(bool),
    /// An integer
    Int(i64),
    /// A float
    Float(f32),
    /// A string
    Str(String),
}

/// A fully assembled operation call, ready for dispatch by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpCall {
    /// Registry name of the operation
    pub op_name: String,
    /// Input tensor handles in slot order
    pub inputs: Vec<RawTensor>,
    /// Bound attributes in bind order
    pub attrs: Vec<(String, AttrValue)>,
}

/// Dispatches assembled operation calls.
///
/// Implementations own tensor storage and the actual compute; this crate
/// never inspects what is behind a [`RawTensor`].
pub trait OpExecutor {
    /// Execute `call`, producing exactly `num_outputs` output handles.
    fn execute(&self, call: &OpCall, num_outputs: usize) -> Result<Vec<RawTensor>>;
}

/// Session facade over an executor.
///
/// Passed explicitly into every generated wrapper; wrappers never reach for
/// a global.
pub struct Ops<'a> {
    exec: &'a dyn OpExecutor,
}

impl<'a> Ops<'a> {
    /// Create a session over `exec`.
    pub fn new(exec: &'a dyn OpExecutor) -> Self { Ops { exec } }

    /// Start assembling a call to the operation named `op_name`.
    pub fn build(&self, op_name: &str) -> OpBuilder<'_> {
        OpBuilder {
            exec: self.exec,
            call: OpCall { op_name: op_name.to_string(), inputs: Vec::new(), attrs: Vec::new() },
        }
    }
}

/// Builder for one operation call.
pub struct OpBuilder<'a> {
    exec: &'a dyn OpExecutor,
    call: OpCall,
}

impl OpBuilder<'_> {
    /// Append an input tensor.
    pub fn input<T: Element>(mut self, tensor: &Tensor<T>) -> Self {
        self.call.inputs.push(tensor.raw());
        self
    }

    /// Bind a data-type attribute.
    pub fn attr_type(mut self, name: &str, dtype: DataType) -> Self {
        self.call.attrs.push((name.to_string(), AttrValue::Type(dtype)));
        self
    }

    /// Bind a boolean attribute.
    pub fn attr_bool(mut self, name: &str, value: bool) -> Self {
        self.call.attrs.push((name.to_string(), AttrValue::Bool(value)));
        self
    }

    /// Bind an integer attribute.
    pub fn attr_int(mut self, name: &str, value: i64) -> Self {
        self.call.attrs.push((name.to_string(), AttrValue::Int(value)));
        self
    }

    /// Execute the call, expecting `num_outputs` outputs.
    pub fn run(self, num_outputs: usize) -> Result<Vec<RawTensor>> {
        let outputs = self.exec.execute(&self.call, num_outputs)?;
        if outputs.len() != num_outputs {
            return Err(RuntimeError::OutputArity {
                op_name: self.call.op_name,
                expected: num_outputs,
                actual: outputs.len(),
            });
        }
        Ok(outputs)
    }

    /// Execute the call, expecting exactly one output.
    pub fn run_single(self) -> Result<RawTensor> {
        let op_name = self.call.op_name.clone();
        let mut outputs = self.run(1)?;
        outputs.pop().ok_or(RuntimeError::OutputArity { op_name, expected: 1, actual: 0 })
    }
}
