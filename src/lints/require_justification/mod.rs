pub(crate) mod require_justification;
