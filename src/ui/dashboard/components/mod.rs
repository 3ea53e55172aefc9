//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod campaigns;
pub mod departments;
pub mod footer;
pub mod header;
pub mod logs;
pub mod summary;
