//! Domain layer: receipt model, validation rules, the points engine and the
//! storage port. Everything here is pure or trait-abstracted; nothing knows
//! about HTTP or the concrete store.

pub mod ports;
pub mod receipt;
pub mod scoring;
pub mod validator;
