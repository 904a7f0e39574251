//! Domain types for the DevSecOps platform service.
//!
//! This module contains the numeric model, the aggregation over it and the
//! service status snapshot.

mod numeric;
mod status;
mod summary;

pub use numeric::*;
pub use status::*;
pub use summary::*;
