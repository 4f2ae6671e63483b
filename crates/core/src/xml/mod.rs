//! Document reading and writing on top of `quick-xml`.

mod reader;
pub mod tags;
mod writer;

pub use reader::Attributes;
pub(crate) use reader::bind_document;
pub(crate) use writer::{Attrs, XmlSink};
