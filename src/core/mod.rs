//! Core building blocks: job parameters, command templates and the script
//! generator. These are internal primitives consumed by the high-level `api`
//! module.
pub mod params;
pub mod script;
pub mod template;
