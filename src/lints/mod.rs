pub(crate) mod require_justification;

pub use require_justification::require_justification::{
    JustificationTooShort, UnjustifiedVariable,
};
