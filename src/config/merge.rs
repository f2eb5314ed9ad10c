//! Source composition for the layered configuration.

pub(crate) mod merge_policy;
pub(crate) mod service;
