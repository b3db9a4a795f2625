//! Functional-style operations over slices.
//!
//! Every operation is a free function taking the input as a borrowed slice;
//! the input is never mutated. Results are either fresh `Vec`s or sub-slices
//! of the input.
mod chunk;
mod error;
mod group;
mod partition;
mod scan;
mod transform;

pub use chunk::{chunk, ChunkResult};
pub use error::{Error, Result};
pub use group::{group_by, Groups};
pub use partition::{skip_while, take_while};
pub use scan::{all, any, count};
pub use transform::{filter, flatten, for_each, map};
