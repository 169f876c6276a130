//! Concrete storage backends.

pub mod in_memory;
