//! Canvas 2D rendering backend.
//!
//! This module provides grid rendering onto an HTML canvas via web-sys.
//! Lines, rectangles and text are all the grid drawing needs.

mod surface;

pub use surface::CanvasSurface;
