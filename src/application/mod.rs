//! Application layer orchestrating the domain pieces.
//!
//! The `ReceiptProcessor` is the single entry point used by the HTTP
//! boundary: it validates incoming receipts, hands them to the storage port
//! and runs the points engine on lookups.

pub mod processor;
