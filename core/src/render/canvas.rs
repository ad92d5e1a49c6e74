use crate::prelude::{VizError, VizResult};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

/// Owned bitmap drawing surface bound to exactly one output file. Every draw
/// call goes through an explicit canvas instead of shared figure state; a new
/// output file means a new canvas.
pub struct Canvas<'a> {
    area: DrawingArea<BitMapBackend<'a>, Shift>,
}

impl<'a> Canvas<'a> {
    pub fn new<P: AsRef<Path> + ?Sized>(path: &'a P, width: u32, height: u32) -> VizResult<Self> {
        let area = BitMapBackend::new(path, (width, height)).into_drawing_area();
        area.fill(&WHITE).map_err(render_err)?;
        Ok(Self { area })
    }

    pub(crate) fn area(&self) -> &DrawingArea<BitMapBackend<'a>, Shift> {
        &self.area
    }

    /// Flushes the backend and writes the image file.
    pub fn present(self) -> VizResult<()> {
        self.area.present().map_err(render_err)
    }
}

pub(crate) fn render_err<E: std::fmt::Display>(err: E) -> VizError {
    VizError::Render(err.to_string())
}
