//! Rendering support
//!
//! Turns simulation state into draw data. The actual canvas or GPU surface
//! belongs to the front end.

pub mod frame;
pub mod shapes;
pub mod vertex;

pub use frame::{BlockView, Frame, LineView, TITLE_TEXT, display_x};
pub use shapes::frame_vertices;
pub use vertex::Vertex;
