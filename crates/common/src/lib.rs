//! Pieces shared by the server crate and the `server` binary.

pub mod types;
pub mod utils;
