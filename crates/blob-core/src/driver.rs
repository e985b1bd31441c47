//! Single owner of the blob and everything that feeds it.
//!
//! Input producers (pointer sampler, resize listener, UI cues) hold cloned
//! [`InputSender`]s and never touch the blob directly. Each [`BlobDriver::frame`]
//! drains the queue, commits a debounced resize if one is due, then runs the
//! blob's tick.

use std::sync::mpsc::{self, Receiver, Sender};

use crate::blob::Blob;
use crate::clock::Clock;
use crate::error::Result;
use crate::resize::ResizeDebounce;
use crate::surface::Surface;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FrameInput {
    /// Pointer speed in pixels per millisecond.
    Motion(f64),
    /// The host viewport changed to this width.
    Resize { viewport_width: f64 },
    CueExpansion,
    CueCollapse,
}

pub type InputSender = Sender<FrameInput>;

/// What happened during one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub inputs: usize,
    pub resized: bool,
}

pub struct BlobDriver<S, C> {
    blob: Blob<S, C>,
    resize: ResizeDebounce,
    tx: InputSender,
    rx: Receiver<FrameInput>,
    frames: u64,
}

impl<S: Surface, C: Clock> BlobDriver<S, C> {
    pub fn new(blob: Blob<S, C>) -> Self {
        Self::with_debounce(blob, ResizeDebounce::default())
    }

    pub fn with_debounce(blob: Blob<S, C>, resize: ResizeDebounce) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            blob,
            resize,
            tx,
            rx,
            frames: 0,
        }
    }

    /// A new handle for an input producer.
    pub fn sender(&self) -> InputSender {
        self.tx.clone()
    }

    pub fn blob(&self) -> &Blob<S, C> {
        &self.blob
    }

    pub fn blob_mut(&mut self) -> &mut Blob<S, C> {
        &mut self.blob
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    fn apply(&mut self, input: FrameInput) {
        match input {
            FrameInput::Motion(speed) => {
                self.blob.reactive_px(speed);
            }
            FrameInput::Resize { viewport_width } => {
                let now = self.blob.clock().now_ms();
                self.resize.request(now, viewport_width);
            }
            FrameInput::CueExpansion => {
                self.blob.cue_expansion();
            }
            FrameInput::CueCollapse => {
                self.blob.cue_collapse();
            }
        }
    }

    /// Run one display frame.
    pub fn frame(&mut self) -> Result<FrameReport> {
        let mut report = FrameReport::default();
        while let Ok(input) = self.rx.try_recv() {
            self.apply(input);
            report.inputs += 1;
        }

        let now = self.blob.clock().now_ms();
        if self.resize.take_due(now) {
            self.blob.update_values();
            report.resized = true;
            log::info!(
                "[resize] committed: diagonal={:.1} base_radius={:.1}",
                self.blob.diagonal(),
                self.blob.base_radius()
            );
        }

        self.frames += 1;
        self.blob.tick()?;
        Ok(report)
    }
}
