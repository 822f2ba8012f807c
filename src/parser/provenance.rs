//! Provenance decoding.
//!
//! A fine-grained record carries the fullname of the coarse operation it was
//! lowered from, e.g. `model/dense/MatMul:MatMul` or `jit(f)/add:add`.
//! Decoding splits it into the coarse operation's name and type.

use serde::{Deserialize, Serialize};

/// Type string reported for dataset iterator ops
pub const DATASET_OP_TYPE: &str = "Dataset";

/// Type string reported for host-to-device copies
pub const MEMCPY_HTOD_OP_TYPE: &str = "MemcpyHToD";

/// Type string reported for device-to-host copies
pub const MEMCPY_DTOH_OP_TYPE: &str = "MemcpyDToH";

/// Type string for fullnames we cannot classify
pub const UNKNOWN_OP_TYPE: &str = "";

const ITERATOR_PREFIX: &str = "Iterator";

/// Family a decoded operation belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpCategory {
    Unknown,
    TensorFlow,
    Jax,
    TfData,
    MemcpyHToD,
    MemcpyDToH,
}

/// A decoded operation fullname
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TfOp {
    pub category: OpCategory,
    pub name: String,
    pub op_type: String,
}

impl TfOp {
    fn unknown(fullname: &str) -> Self {
        Self {
            category: OpCategory::Unknown,
            name: fullname.to_string(),
            op_type: UNKNOWN_OP_TYPE.to_string(),
        }
    }
}

/// Parse an operation fullname of the form `<name>:<type>`
///
/// Never fails: unrecognized fullnames come back as `OpCategory::Unknown`
/// with the whole string as the name and an empty type.
pub fn parse_op_fullname(fullname: &str) -> TfOp {
    let Some((name, op_type)) = fullname.split_once(':') else {
        if starts_with_ignore_case(fullname, "MEMCPYHToD") {
            return TfOp {
                category: OpCategory::MemcpyHToD,
                name: fullname.to_string(),
                op_type: MEMCPY_HTOD_OP_TYPE.to_string(),
            };
        }
        if starts_with_ignore_case(fullname, "MEMCPYDToH") {
            return TfOp {
                category: OpCategory::MemcpyDToH,
                name: fullname.to_string(),
                op_type: MEMCPY_DTOH_OP_TYPE.to_string(),
            };
        }
        return TfOp::unknown(fullname);
    };

    // Dataset names (Iterator::Batch::Map) do not follow the name:type shape
    if name == ITERATOR_PREFIX {
        return TfOp {
            category: OpCategory::TfData,
            name: fullname.to_string(),
            op_type: DATASET_OP_TYPE.to_string(),
        };
    }

    if is_tf_op_name(name) && is_tf_op_type(op_type) {
        return TfOp {
            category: OpCategory::TensorFlow,
            name: name.to_string(),
            op_type: op_type.to_string(),
        };
    }

    if !name.is_empty() && is_jax_op_type(op_type) {
        return TfOp {
            category: OpCategory::Jax,
            name: name.to_string(),
            op_type: op_type.to_string(),
        };
    }

    TfOp::unknown(fullname)
}

/// Decodes a provenance string into `(operation_name, operation_type)`
pub trait ProvenanceDecoder {
    fn decode(&self, provenance: &str) -> (String, String);
}

/// Default decoder backed by [`parse_op_fullname`]
#[derive(Debug, Clone, Copy, Default)]
pub struct FullnameDecoder;

impl ProvenanceDecoder for FullnameDecoder {
    fn decode(&self, provenance: &str) -> (String, String) {
        let op = parse_op_fullname(provenance);
        (op.name, op.op_type)
    }
}

fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    s.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

// [A-Za-z0-9.][A-Za-z0-9_./>-]*
fn is_tf_op_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphanumeric() || c == '.' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '/' | '>' | '-'))
}

// [A-Z_][A-Za-z0-9_]*
fn is_tf_op_type(op_type: &str) -> bool {
    let mut chars = op_type.chars();
    match chars.next() {
        Some(c) if c.is_ascii_uppercase() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

// [a-z_][a-z0-9_]*
fn is_jax_op_type(op_type: &str) -> bool {
    let mut chars = op_type.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}
