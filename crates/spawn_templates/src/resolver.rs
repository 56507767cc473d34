//! Input value resolution.
//!
//! Computes the substitution string for every declared input. Purely a
//! function of the declarations: no I/O is performed and no live secret store
//! is consulted, so compiled output is a preview, never a credential-bearing
//! artifact.

use std::collections::HashMap;

use crate::template::TemplateInput;

/// Mask substituted for secret inputs.
pub const SECRET_MASK: &str = "*****";

/// Hint substituted for an input id with no usable value.
pub(crate) fn unresolved_hint(id: &str) -> String {
    format!("<{id}>")
}

/// Compute the substitution value for each declared input.
///
/// Secret inputs always resolve to [`SECRET_MASK`], even when a default is
/// declared, so a template author cannot leak a credential through a
/// default. Non-secret inputs use their default when it is non-empty,
/// otherwise the visible `<id>` hint.
pub fn resolve_inputs(inputs: &[TemplateInput]) -> HashMap<String, String> {
    let mut resolved = HashMap::with_capacity(inputs.len());
    for input in inputs {
        let value = if input.password {
            SECRET_MASK.to_string()
        } else if let Some(default) = input.default.as_deref().filter(|d| !d.is_empty()) {
            default.to_string()
        } else {
            unresolved_hint(&input.id)
        };
        resolved.insert(input.id.clone(), value);
    }
    resolved
}
