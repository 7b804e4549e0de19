//! Typed wrapper emission.
//!
//! A plan record is selected when its group is on the emit allow-list or its
//! operation name is in the always-emit override set. A selected record is
//! emitted only when the underlying operation definition shape-matches:
//! unary (one input, one output) or binary (two inputs, one output), with
//! every slot carrying the same non-empty symbolic type reference and no
//! variadic markers. Records failing the shape match are excluded silently;
//! the coverage report is the only place they surface.

use std::collections::HashMap;
use std::fmt::Write as _;
use std::path::Path as FsPath;

use ir::{ArgDef, Group, OpDef, PlanRecord};
use registry::{OpRegistry, RegistryReader};

use crate::utils::{doc_line, rust_fn_name};
use crate::Result;

/// Groups whose operations are emitted by default.
pub const EMIT_GROUPS: [Group; 2] = [Group::Math, Group::Nn];

/// Operations emitted regardless of group.
pub const ALWAYS_EMIT_OPS: [&str; 3] = ["MatMul", "Transpose", "Reshape"];

/// File name of the wrapper module inside each group directory.
pub const WRAPPER_FILE_NAME: &str = "wrappers.rs";

/// Counts of what the emitter wrote.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EmitStats {
    /// Group files written
    pub files: usize,
    /// Unary wrappers emitted
    pub unary: usize,
    /// Binary wrappers emitted
    pub binary: usize,
}

/// Wrapper shapes eligible for emission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WrapperShape {
    Unary,
    Binary,
}

/// Whether `record` is selected for wrapper emission.
pub fn is_selected(record: &PlanRecord) -> bool {
    EMIT_GROUPS.contains(&record.group) || ALWAYS_EMIT_OPS.contains(&record.op_name.as_str())
}

/// Check the exact shape precondition against the operation definition.
///
/// Returns the wrapper shape, or `None` when the definition does not fit.
fn shape_match(op: &OpDef) -> Option<WrapperShape> {
    if op.output_args.len() != 1 {
        return None;
    }
    let shape = match op.input_args.len() {
        1 => WrapperShape::Unary,
        2 => WrapperShape::Binary,
        _ => return None,
    };
    let slots: Vec<&ArgDef> = op.input_args.iter().chain(op.output_args.iter()).collect();
    let type_ref = slots[0].type_attr.as_deref()?;
    if type_ref.is_empty() {
        return None;
    }
    for slot in &slots {
        if slot.number_attr.is_some() || slot.type_list_attr.is_some() {
            return None;
        }
        if slot.type_attr.as_deref() != Some(type_ref) {
            return None;
        }
    }
    Some(shape)
}

/// Emit one wrapper module per group with at least one shape-matched record.
///
/// Wrapper functions keep plan order within their group file; group files
/// are written in the fixed group order.
pub fn emit_wrappers(
    plan: &[PlanRecord],
    registry: &OpRegistry,
    out_dir: &FsPath,
    verbose: bool,
) -> Result<EmitStats> {
    let mut per_group: HashMap<Group, Vec<String>> = HashMap::new();
    let mut stats = EmitStats::default();

    for record in plan.iter().filter(|r| is_selected(r)) {
        let Some(op) = registry.get(&record.op_name) else {
            continue;
        };
        let Some(shape) = shape_match(op) else {
            continue;
        };
        let type_ref = op.input_args[0].type_attr.as_deref().unwrap_or("T");
        let rendered = render_wrapper(record, shape, type_ref)?;
        per_group.entry(record.group).or_default().push(rendered);
        match shape {
            WrapperShape::Unary => stats.unary += 1,
            WrapperShape::Binary => stats.binary += 1,
        }
    }

    for group in Group::ALL {
        let Some(wrappers) = per_group.get(&group) else {
            continue;
        };
        let group_dir = out_dir.join(group.dir_name());
        path::ensure_dir(&group_dir)?;
        let file_path = group_dir.join(WRAPPER_FILE_NAME);
        path::write_atomic(&file_path, &render_group_file(group, wrappers)?)?;
        stats.files += 1;
        if verbose {
            logging::trace(
                "CODEGEN",
                &format!("wrote {} wrappers to {}", wrappers.len(), file_path.display()),
            );
        }
    }

    Ok(stats)
}

fn render_group_file(group: Group, wrappers: &[String]) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "//! Generated tensor operation wrappers for the `{}` group.", group)?;
    writeln!(out, "//!")?;
    writeln!(out, "//! Produced by the wrapper emitter; edits will be overwritten.")?;
    writeln!(out)?;
    writeln!(out, "use runtime::{{Element, Ops, Result, Tensor}};")?;
    for wrapper in wrappers {
        writeln!(out)?;
        out.push_str(wrapper);
    }
    Ok(out)
}

/// Render one wrapper function.
///
/// The signature stays on a single line; the coverage scanner classifies
/// wrappers by their signature line.
fn render_wrapper(record: &PlanRecord, shape: WrapperShape, type_ref: &str) -> Result<String> {
    let fn_name = rust_fn_name(&record.canonical_name);
    let mut out = String::new();
    if let Some(summary) = &record.summary {
        let line = doc_line(summary);
        if !line.is_empty() {
            writeln!(out, "/// {}", line)?;
        }
    }
    match shape {
        WrapperShape::Unary => {
            writeln!(
                out,
                "pub fn {}<T: Element>(ops: &Ops, x: &Tensor<T>) -> Result<Tensor<T>> {{",
                fn_name
            )?;
            writeln!(out, "    let out = ops")?;
            writeln!(out, "        .build(\"{}\")", record.op_name)?;
            writeln!(out, "        .input(x)")?;
        }
        WrapperShape::Binary => {
            writeln!(
                out,
                "pub fn {}<T: Element>(ops: &Ops, x: &Tensor<T>, y: &Tensor<T>) -> Result<Tensor<T>> {{",
                fn_name
            )?;
            writeln!(out, "    let out = ops")?;
            writeln!(out, "        .build(\"{}\")", record.op_name)?;
            writeln!(out, "        .input(x)")?;
            writeln!(out, "        .input(y)")?;
        }
    }
    writeln!(out, "        .attr_type(\"{}\", T::DATA_TYPE)", type_ref)?;
    writeln!(out, "        .run_single()?;")?;
    writeln!(out, "    Ok(Tensor::from_raw(out))")?;
    writeln!(out, "}}")?;
    Ok(out)
}
