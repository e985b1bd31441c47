//! Drawing-surface abstraction shared with the front-ends.
//!
//! The core only needs a path-building 2D API in the style of an HTML canvas.
//! The web front-end backs this with a `CanvasRenderingContext2d`; tests and
//! the headless driver use [`RecordingSurface`], which keeps every command so
//! the emitted geometry can be inspected.

use glam::DVec2;

use crate::constants::{FILL_COLOR, SHADOW_BLUR, SHADOW_COLOR};

/// Colour and drop shadow applied when the outline is filled.
#[derive(Clone, Debug, PartialEq)]
pub struct FillStyle {
    pub color: String,
    pub shadow_blur: f64,
    pub shadow_color: String,
}

impl Default for FillStyle {
    fn default() -> Self {
        Self {
            color: FILL_COLOR.to_string(),
            shadow_blur: SHADOW_BLUR,
            shadow_color: SHADOW_COLOR.to_string(),
        }
    }
}

pub trait Surface {
    /// Current backing size in pixels.
    fn size(&self) -> DVec2;

    /// Re-read the host viewport and resize the backing store to match.
    fn fit_to_viewport(&mut self);

    /// Clear the whole surface.
    fn clear(&mut self);

    fn begin_path(&mut self);
    fn move_to(&mut self, p: DVec2);
    fn line_to(&mut self, p: DVec2);
    fn quadratic_curve_to(&mut self, control: DVec2, end: DVec2);

    /// Fill the current path.
    fn fill(&mut self, style: &FillStyle);

    #[inline]
    fn diagonal(&self) -> f64 {
        self.size().length()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum PathCommand {
    Clear,
    BeginPath,
    MoveTo(DVec2),
    LineTo(DVec2),
    QuadraticCurveTo { control: DVec2, end: DVec2 },
    Fill(FillStyle),
}

/// In-memory surface that records every command.
///
/// The "viewport" is a settable size that is only applied to the surface on
/// [`Surface::fit_to_viewport`], mirroring how a canvas picks up the window
/// size.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    size: DVec2,
    viewport: DVec2,
    commands: Vec<PathCommand>,
    fit_count: usize,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        let size = DVec2::new(width, height);
        Self {
            size,
            viewport: size,
            commands: Vec::new(),
            fit_count: 0,
        }
    }

    /// Change the viewport; takes effect on the next `fit_to_viewport`.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport = DVec2::new(width, height);
    }

    pub fn viewport(&self) -> DVec2 {
        self.viewport
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Commands since the last `Clear`, i.e. the most recent frame.
    pub fn last_frame(&self) -> &[PathCommand] {
        let start = self
            .commands
            .iter()
            .rposition(|c| *c == PathCommand::Clear)
            .map_or(0, |i| i + 1);
        &self.commands[start..]
    }

    pub fn take_commands(&mut self) -> Vec<PathCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Number of times the surface was fitted to the viewport.
    pub fn fit_count(&self) -> usize {
        self.fit_count
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> DVec2 {
        self.size
    }

    fn fit_to_viewport(&mut self) {
        self.size = self.viewport;
        self.fit_count += 1;
    }

    fn clear(&mut self) {
        self.commands.push(PathCommand::Clear);
    }

    fn begin_path(&mut self) {
        self.commands.push(PathCommand::BeginPath);
    }

    fn move_to(&mut self, p: DVec2) {
        self.commands.push(PathCommand::MoveTo(p));
    }

    fn line_to(&mut self, p: DVec2) {
        self.commands.push(PathCommand::LineTo(p));
    }

    fn quadratic_curve_to(&mut self, control: DVec2, end: DVec2) {
        self.commands
            .push(PathCommand::QuadraticCurveTo { control, end });
    }

    fn fill(&mut self, style: &FillStyle) {
        self.commands.push(PathCommand::Fill(style.clone()));
    }
}
