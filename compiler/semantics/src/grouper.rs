//! Best-effort categorization for registry operations when endpoint
//! metadata does not specify a group. Kept conservative: exact names first,
//! then very obvious prefixes/suffixes.
//!
//! Rule order is fixed and load-bearing. Groups are checked nn, linalg,
//! array, image, random, control, io, math; the first match wins and
//! anything unmatched lands in `other`. Reordering the checks changes the
//! classification of names matched by more than one rule (e.g. a name
//! ending in "Pool" that also starts with "Random").

use ir::Group;

/// Classify an operation name into a domain group.
///
/// Total over all strings; the empty string and anything unrecognized map
/// to [`Group::Other`].
pub fn classify(name: &str) -> Group {
    let n = name;

    // --- NN / layers / activations ---
    if NN_EXACT.contains(&n)
        || n.starts_with("Conv")
        || n.starts_with("DepthwiseConv")
        || n.ends_with("Pool")
        || n.contains("BatchNorm")
    {
        return Group::Nn;
    }

    // --- Linear algebra / decompositions / FFT ---
    if LINALG_EXACT.contains(&n)
        || n == "MatMul"
        || n.starts_with("BatchMatMul")
        || n.starts_with("Matrix")
        || n == "Cholesky"
        || n == "Qr"
        || n == "Svd"
        || n.starts_with("FFT")
        || n.starts_with("IFFT")
    {
        return Group::Linalg;
    }

    // --- Array / shape / indexing ---
    if ARRAY_EXACT.contains(&n)
        || n.starts_with("Concat")
        || n.starts_with("Split")
        || n.starts_with("Gather")
        || n.starts_with("Scatter")
        || n == "Reshape"
        || n == "Transpose"
        || n == "Squeeze"
        || n == "ExpandDims"
        || n == "Pad"
        || n == "PadV2"
        || n.ends_with("Slice")
        || n == "Tile"
        || n.starts_with("Reverse")
        || n == "Rank"
        || n == "Shape"
        || n == "ShapeN"
        || n == "Size"
        || n == "Unique"
        || n == "UniqueV2"
        || n.starts_with("TopK")
        || n == "Where"
        || n == "OneHot"
    {
        return Group::Array;
    }

    // --- Image / resize / color space / codecs ---
    if IMAGE_EXACT.contains(&n)
        || n.starts_with("Resize")
        || n.starts_with("RGBTo")
        || n.starts_with("HSVTo")
        || n.starts_with("Decode")
        || n.starts_with("Encode")
        || n.contains("NonMaxSuppression")
    {
        return Group::Image;
    }

    // --- Random / sampling ---
    if RANDOM_EXACT.contains(&n)
        || n.starts_with("Random")
        || n.starts_with("StatelessRandom")
        || n == "TruncatedNormal"
        || n == "Multinomial"
        || n == "ParameterizedTruncatedNormal"
    {
        return Group::Random;
    }

    // --- Control flow ---
    if CONTROL_EXACT.contains(&n) {
        return Group::Control;
    }

    // --- IO / datasets / reading / saving ---
    if IO_EXACT.contains(&n)
        || n.ends_with("Dataset")
        || n.contains("Reader")
        || n.contains("Queue")
    {
        return Group::Io;
    }

    // --- Math / elementwise / logical ---
    if MATH_EXACT.contains(&n) {
        return Group::Math;
    }

    Group::Other
}

// --- Exact-name allowlists (non-exhaustive; extend incrementally) ---

const NN_EXACT: &[&str] = &[
    "Relu",
    "Relu6",
    "LeakyRelu",
    "Elu",
    "Selu",
    "Sigmoid",
    "Softplus",
    "Softsign",
    "Softmax",
    "LogSoftmax",
    "LRN",
    "L2Loss",
    "BiasAdd",
    "Conv2D",
    "Conv3D",
    "DepthwiseConv2dNative",
    "AvgPool",
    "AvgPool3D",
    "MaxPool",
    "MaxPool3D",
    "Dilation2D",
    "FusedBatchNorm",
    "FusedBatchNormV2",
    "FusedBatchNormV3",
];

const LINALG_EXACT: &[&str] = &[
    "MatMul",
    "BatchMatMul",
    "BatchMatMulV2",
    "Cholesky",
    "Qr",
    "Svd",
    "SvdV2",
    "MatrixInverse",
    "MatrixDeterminant",
];

const ARRAY_EXACT: &[&str] = &[
    "Pack",
    "Unpack",
    "Concat",
    "ConcatV2",
    "Slice",
    "StridedSlice",
    "Split",
    "SplitV",
    "Squeeze",
    "ExpandDims",
    "Pad",
    "PadV2",
    "Reshape",
    "Transpose",
    "Reverse",
    "ReverseV2",
    "Tile",
    "Shape",
    "ShapeN",
    "Rank",
    "Size",
    "Gather",
    "GatherV2",
    "GatherNd",
    "ScatterNd",
    "Where",
    "Unique",
    "UniqueV2",
    "TopK",
    "TopKV2",
    "OneHot",
];

const IMAGE_EXACT: &[&str] = &[
    "ResizeBilinear",
    "ResizeNearestNeighbor",
    "ResizeBicubic",
    "ResizeArea",
    "RGBToHSV",
    "HSVToRGB",
    "DecodeJpeg",
    "DecodePng",
    "EncodeJpeg",
    "EncodePng",
];

const RANDOM_EXACT: &[&str] = &[
    "RandomUniform",
    "RandomUniformInt",
    "RandomNormal",
    "StatelessRandomNormal",
    "StatelessRandomUniform",
    "StatelessRandomUniformInt",
    "Multinomial",
    "TruncatedNormal",
    "ParameterizedTruncatedNormal",
];

const CONTROL_EXACT: &[&str] = &[
    "Switch",
    "Merge",
    "Enter",
    "Exit",
    "NextIteration",
    "LoopCond",
    "If",
    "While",
    "Case",
    "Identity",
    "NoOp",
    "StopGradient",
    "PreventGradient",
];

const IO_EXACT: &[&str] = &[
    "ReadFile",
    "WriteFile",
    "RestoreV2",
    "SaveV2",
    "Restore",
    "Save",
    "TFRecordReader",
    "WholeFileReader",
    "TextLineReader",
];

const MATH_EXACT: &[&str] = &[
    // unary/binary common math
    "Add",
    "AddV2",
    "Sub",
    "Mul",
    "Div",
    "RealDiv",
    "Pow",
    "SquaredDifference",
    "Maximum",
    "Minimum",
    "Mod",
    "FloorMod",
    "Square",
    "Sqrt",
    "Rsqrt",
    "Exp",
    "Expm1",
    "Log",
    "Log1p",
    "Sin",
    "Cos",
    "Tan",
    "Tanh",
    "Asin",
    "Acos",
    "Atan",
    "Sinh",
    "Cosh",
    "Asinh",
    "Acosh",
    "Atanh",
    "Erf",
    "Erfc",
    "Lgamma",
    "Digamma",
    "Abs",
    "Neg",
    "Sign",
    "Round",
    "Rint",
    "Ceil",
    "Floor",
    "IsFinite",
    "IsInf",
    "IsNan",
    "Atan2",
    "Equal",
    "NotEqual",
    "Less",
    "LessEqual",
    "Greater",
    "GreaterEqual",
    "LogicalAnd",
    "LogicalOr",
    "LogicalNot",
    "Real",
    "Imag",
    "Complex",
    "Conj",
    "ComplexAbs",
];
