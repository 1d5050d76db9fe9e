use crate::diagnostic::{Diagnostic, Violation};
use crate::rcfile::JustificationStore;
use crate::scan::Reference;

/// ## What it does
///
/// Checks that every referenced `NEXT_PUBLIC_` environment variable has a
/// justification entry in the `.nextpublicrc` sidecar file.
///
/// ## Why is this bad?
///
/// `NEXT_PUBLIC_` variables are inlined into the client bundle and shipped to
/// every visitor. Requiring a written justification forces the decision to
/// expose a value to be made explicitly, and leaves a record of who needed it
/// and why.
///
/// ## Example
///
/// ```js
/// const url = process.env.NEXT_PUBLIC_API_URL;
/// ```
///
/// With `.nextpublicrc`:
/// ```json
/// { "NEXT_PUBLIC_API_URL": "Needed for client-side API calls, reviewed by security" }
/// ```
pub struct UnjustifiedVariable {
    pub variable: String,
}

impl Violation for UnjustifiedVariable {
    fn name(&self) -> String {
        "require-justification".to_string()
    }
    fn body(&self) -> String {
        format!(
            "NEXT_PUBLIC variable '{}' requires justification in .nextpublicrc file",
            self.variable
        )
    }
}

/// A justification exists but is shorter than the configured minimum. The
/// reported minimum is always the value actually enforced.
pub struct JustificationTooShort {
    pub variable: String,
    pub minimum: usize,
}

impl Violation for JustificationTooShort {
    fn name(&self) -> String {
        "justification-length".to_string()
    }
    fn body(&self) -> String {
        format!(
            "Justification for NEXT_PUBLIC variable '{}' must be at least {} characters long",
            self.variable, self.minimum
        )
    }
}

/// Validate one reference against the store. `None` means the variable is
/// justified well enough.
pub(crate) fn require_justification(
    reference: &Reference,
    store: &JustificationStore,
    minimum: usize,
) -> Option<Diagnostic> {
    match store.justification(&reference.name) {
        None => Some(Diagnostic::new(
            UnjustifiedVariable {
                variable: reference.name.clone(),
            },
            reference.span,
        )),
        Some(text) if text.chars().count() < minimum => Some(Diagnostic::new(
            JustificationTooShort {
                variable: reference.name.clone(),
                minimum,
            },
            reference.span,
        )),
        Some(_) => None,
    }
}
