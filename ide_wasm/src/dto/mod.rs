//! JS-facing DTO types for `ide_wasm`.
//!
//! Offsets are UTF-16 code units; ranges are half-open `[start, end)`. Lines and columns are
//! 1-based.
pub mod v1;
