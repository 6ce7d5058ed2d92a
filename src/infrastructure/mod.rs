//! Infrastructure layer implementing the interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - Registry implementations

pub mod persistence;
