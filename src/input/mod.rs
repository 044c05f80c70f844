//! Input format strategies
//!
//! Each supported input format has an [`InputHandler`] that reduces text
//! to a representative coordinate and optional extent. The
//! [`InputFactory`] picks the handler for an explicit or detected format.

mod format;
mod handler;
mod freeform;
mod lonlat;
mod mgrs;
mod wkt;
mod factory;

#[cfg(test)]
mod tests;

pub use factory::InputFactory;
pub use format::InputFormat;
pub use freeform::FreeformHandler;
pub use handler::{InputHandler, ResolvedInput};
pub use lonlat::LonLatHandler;
pub use mgrs::MgrsHandler;
pub use wkt::WktHandler;
