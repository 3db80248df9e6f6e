//! Delegation gating for windowed-application properties.
//!
//! One pure predicate, kept separate from the async dispatch so it can be
//! tested in isolation. Both inputs come from the caller's property
//! snapshot; the predicate is re-evaluated on every call.

use crate::properties::WINDOWED_EXE_OUTPUT_KIND;

/// Parse a textual boolean. Absent or unrecognized text is false.
pub fn is_truthy(value: Option<&str>) -> bool {
    value
        .map(|v| v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Whether the windowed-application properties are served from the
/// application manifest: the feature flag must parse truthy and the output
/// kind must be exactly the windowed-executable literal.
pub fn delegation_applies(feature_enabled: Option<&str>, output_kind: Option<&str>) -> bool {
    is_truthy(feature_enabled) && output_kind == Some(WINDOWED_EXE_OUTPUT_KIND)
}
