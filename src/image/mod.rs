//! Image payload handling - base64 validation and data-URL construction

pub mod base64;
