//! Endpoint record indexing and name/group resolution.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use ir::{EndpointRecord, Group};

/// An index of endpoint records for quick lookups by operation name.
///
/// Records for the same operation are merged at construction: endpoint
/// order is first-seen, exact-string duplicates are dropped, and the first
/// non-empty summary wins. Merging the same record twice is a no-op.
#[derive(Debug, Default)]
pub struct EndpointIndex {
    records: HashMap<String, EndpointRecord>,
}

impl EndpointIndex {
    /// Build an index from scanned records.
    pub fn new(records: Vec<EndpointRecord>) -> Self {
        let mut map: HashMap<String, EndpointRecord> = HashMap::new();
        for record in records {
            match map.entry(record.op_name.clone()) {
                Entry::Occupied(mut occupied) => {
                    let merged = occupied.get_mut();
                    for endpoint in record.endpoints {
                        if !merged.endpoints.contains(&endpoint) {
                            merged.endpoints.push(endpoint);
                        }
                    }
                    if merged.summary.is_none() {
                        merged.summary = record.summary;
                    }
                }
                Entry::Vacant(vacant) => {
                    vacant.insert(record);
                }
            }
        }
        EndpointIndex { records: map }
    }

    /// Number of distinct operations with records.
    pub fn len(&self) -> usize { self.records.len() }

    /// Whether the index holds no records at all.
    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    /// The merged record for an operation, if any.
    pub fn record(&self, op_name: &str) -> Option<&EndpointRecord> { self.records.get(op_name) }

    /// Whether an operation has a curated record.
    pub fn contains(&self, op_name: &str) -> bool { self.records.contains_key(op_name) }

    /// The endpoints for an operation (empty when unknown).
    pub fn endpoints(&self, op_name: &str) -> &[String] {
        self.records.get(op_name).map_or(&[], |record| record.endpoints.as_slice())
    }

    /// Pick a group for an operation.
    ///
    /// If any endpoint has a dotted prefix, the first such endpoint's prefix
    /// decides; else a bare endpoint's whole value is treated as the prefix
    /// (almost always `other`); else `other`.
    pub fn group(&self, op_name: &str) -> Group {
        let Some(record) = self.records.get(op_name) else {
            return Group::Other;
        };
        if let Some(dotted) = record.endpoints.iter().find(|e| e.contains('.')) {
            let prefix = dotted.split('.').next().unwrap_or("");
            return Group::from_prefix(prefix);
        }
        if let Some(first) = record.endpoints.first() {
            return Group::from_prefix(first);
        }
        Group::Other
    }

    /// The public name to expose for an operation.
    ///
    /// The first endpoint's last dot-separated segment, lower-camel-cased;
    /// operations without endpoints fall back to the lower-camel op name.
    pub fn canonical_name(&self, op_name: &str) -> String {
        if let Some(record) = self.records.get(op_name) {
            if let Some(first) = record.endpoints.first() {
                let last = first.rsplit('.').next().unwrap_or(first);
                return to_lower_camel(last);
            }
        }
        to_lower_camel(op_name)
    }
}

/// Lower-camel-case a name: first character lowercased, rest unchanged.
pub fn to_lower_camel(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().chain(chars).collect(),
    }
}
