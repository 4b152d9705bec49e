//! Response bodies. Each is serialized as-is, without an envelope.

pub(crate) mod assistant;
pub(crate) mod status;
