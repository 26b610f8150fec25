//! Hasse diagrams of the Boolean lattice of a [`bitsets`] class.
//!
//! The diagram is built as a [`petgraph`] graph, converted to a graphviz
//! syntax tree for printing, and optionally rendered by the `dot` executable.

mod error;
mod hasse;
mod label;

pub use error::{Error, Result};
pub use hasse::{Hasse, HasseNode};
pub use label::{HasseConfig, Label};
