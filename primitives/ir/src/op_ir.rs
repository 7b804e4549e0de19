//! opgen Intermediate Representation
//!
//! These structures represent one registry snapshot worth of operation
//! definitions, the curated endpoint metadata layered on top of it, and the
//! joined per-operation plan records. All of them are built once per
//! pipeline run and never mutated afterwards.

use serde::{Deserialize, Serialize};

/// One input or output slot of an operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgDef {
    /// Slot name as recorded in the registry
    pub name: String,
    /// Numeric data-type code when the slot's type is fixed (e.g. 1 for float)
    pub arg_type: Option<i32>,
    /// Symbolic reference to a type parameter (e.g. "T")
    pub type_attr: Option<String>,
    /// Variadic-arity marker: name of the attribute holding the slot count
    pub number_attr: Option<String>,
    /// Variadic-arity marker: name of the attribute holding the type list
    pub type_list_attr: Option<String>,
}

/// One attribute of an operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttrDef {
    /// Attribute name
    pub name: String,
    /// Symbolic attribute kind, e.g. "bool", "int", "type", "list(type)"
    pub attr_type: String,
}

/// One operation definition as decoded from a registry snapshot.
///
/// `name` is the unique key within one snapshot by convention; uniqueness is
/// not enforced at decode time, and duplicates shadow last-write-wins in the
/// registry lookup map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpDef {
    /// Operation name
    pub name: String,
    /// Ordered input slots
    pub input_args: Vec<ArgDef>,
    /// Ordered output slots
    pub output_args: Vec<ArgDef>,
    /// Ordered attributes
    pub attrs: Vec<AttrDef>,
    /// One-line summary text, empty when the snapshot carries none
    pub summary: String,
}

impl OpDef {
    /// Create a name-only definition, as produced by the text-snapshot path.
    pub fn named(name: impl Into<String>) -> Self {
        OpDef { name: name.into(), ..Default::default() }
    }
}

/// Domain buckets used to partition generated output.
///
/// This is a closed set: every operation maps to exactly one group, with
/// `Other` as the catch-all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Group {
    /// Elementwise and logical math
    Math,
    /// Neural-network layers and activations
    Nn,
    /// Array, shape, and indexing operations
    Array,
    /// Linear algebra, decompositions, FFT
    Linalg,
    /// Image resizing, color spaces, codecs
    Image,
    /// Random sampling
    Random,
    /// Control flow
    Control,
    /// File reading, datasets, checkpoints
    Io,
    /// Everything else
    Other,
}

impl Group {
    /// All groups, in the order coverage reporting iterates them.
    pub const ALL: [Group; 9] = [
        Group::Math,
        Group::Nn,
        Group::Linalg,
        Group::Array,
        Group::Image,
        Group::Random,
        Group::Io,
        Group::Control,
        Group::Other,
    ];

    /// Canonical lowercase name used in the plan document and reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Group::Math => "math",
            Group::Nn => "nn",
            Group::Array => "array",
            Group::Linalg => "linalg",
            Group::Image => "image",
            Group::Random => "random",
            Group::Control => "control",
            Group::Io => "io",
            Group::Other => "other",
        }
    }

    /// Output directory name for this group.
    pub fn dir_name(&self) -> &'static str { self.as_str() }

    /// Map an endpoint prefix like "math" (from "math.logical_and") to a group.
    ///
    /// The comparison is case-insensitive; unrecognized prefixes map to
    /// `Other`.
    pub fn from_prefix(prefix: &str) -> Group {
        match prefix.to_lowercase().as_str() {
            "math" => Group::Math,
            "nn" => Group::Nn,
            "array" => Group::Array,
            "linalg" => Group::Linalg,
            "image" => Group::Image,
            "random" => Group::Random,
            "control" => Group::Control,
            "io" => Group::Io,
            _ => Group::Other,
        }
    }
}

impl std::fmt::Display for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One curated endpoint record as read from an endpoint-metadata file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointRecord {
    /// Registry operation name this record describes
    pub op_name: String,
    /// Endpoint alias strings, ordered as they appear; the first is canonical
    pub endpoints: Vec<String>,
    /// Optional one-line summary
    pub summary: Option<String>,
}

/// The canonical per-operation record produced by the plan builder.
///
/// Plan records are derived fresh on every pipeline run and are never
/// mutated once serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanRecord {
    /// Registry operation name
    pub op_name: String,
    /// Derived public-facing name (lower camel case)
    pub canonical_name: String,
    /// Domain group this operation was classified into
    pub group: Group,
    /// Endpoint alias strings, possibly empty
    pub endpoints: Vec<String>,
    /// Count of input slots, not expanded for variadic markers
    pub arity: usize,
    /// Attribute names in registry order
    pub attr_names: Vec<String>,
    /// Preferred summary text, if any source carried one
    pub summary: Option<String>,
    /// Reserved output count; currently always 0
    pub num_outputs: usize,
}
