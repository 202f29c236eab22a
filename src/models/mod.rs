//! Core model types: grids, holders, courses and named collections.

pub mod collection;
pub mod course;
pub mod grid;
pub mod holder;
pub mod macros;

pub use collection::*;
pub use course::*;
pub use grid::*;
pub use holder::*;

crate::define_handle_type!(HolderId);
crate::define_handle_type!(CourseId);
