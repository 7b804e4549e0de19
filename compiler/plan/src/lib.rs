#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Plan building: the join of registry data with endpoint metadata.
//!
//! The plan is the single source of truth consumed by wrapper emission and
//! coverage reporting: one canonical record per operation, in registry
//! iteration order, serialized as a sorted-key JSON document so that runs
//! can be diffed.

use std::path::Path as FsPath;

use endpoints::{to_lower_camel, EndpointIndex};
use ir::PlanRecord;
use registry::{OpRegistry, RegistryReader};
use thiserror::Error;

/// File name of the serialized plan inside the output directory.
pub const PLAN_FILE_NAME: &str = "op_plan.json";

/// Errors raised while serializing the plan.
#[derive(Debug, Error)]
pub enum PlanError {
    /// Plan records failed to serialize.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    /// The plan document could not be written.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Build one plan record per operation, in registry iteration order.
///
/// The endpoint index always wins when it has a record for an operation,
/// even when its group resolves to `other`; the heuristic grouper is only
/// consulted for operations without curated metadata. Summaries prefer the
/// curated text over the registry's, and are absent when both are empty.
pub fn build(registry: &OpRegistry, index: Option<&EndpointIndex>) -> Vec<PlanRecord> {
    let mut plan = Vec::with_capacity(registry.op_count());
    for name in registry.names() {
        let meta = registry.get(name);

        let (endpoints, group, canonical_name) = match index {
            Some(idx) if idx.contains(name) => {
                (idx.endpoints(name).to_vec(), idx.group(name), idx.canonical_name(name))
            }
            _ => (Vec::new(), semantics::classify(name), to_lower_camel(name)),
        };

        let arity = meta.map_or(0, |op| op.input_args.len());
        let attr_names =
            meta.map_or_else(Vec::new, |op| op.attrs.iter().map(|a| a.name.clone()).collect());

        let summary = index
            .and_then(|idx| idx.record(name))
            .and_then(|record| record.summary.clone())
            .filter(|s| !s.is_empty())
            .or_else(|| meta.map(|op| op.summary.clone()).filter(|s| !s.is_empty()));

        plan.push(PlanRecord {
            op_name: name.to_string(),
            canonical_name,
            group,
            endpoints,
            arity,
            attr_names,
            summary,
            // Multi-output metadata is reserved; the emitter only needs it
            // for a few known operations handled by name.
            num_outputs: 0,
        });
    }
    plan
}

/// Serialize the plan to `path_on_disk` as pretty JSON with sorted keys.
pub fn write_plan(plan: &[PlanRecord], path_on_disk: &FsPath) -> Result<(), PlanError> {
    // Routing through a Value sorts every object's keys, which keeps the
    // document byte-stable across runs and field reorderings.
    let value = serde_json::to_value(plan)?;
    let mut text = serde_json::to_string_pretty(&value)?;
    text.push('\n');
    path::write_atomic(path_on_disk, &text)?;
    Ok(())
}
