//! Cooperative frame loop
//!
//! Stands in for a host's "request next animation frame" primitive: frames
//! run back to back on the calling thread, each to completion. A
//! [`CancelToken`] is checked only between frames, so a cancelled run still
//! finishes the frame in flight.

use crate::algorithm::frame::Animation;
use crate::canvas::Surface;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

/// Shared flag asking a running loop to stop after the current frame
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    /// A token that has not been cancelled
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation; every clone observes it
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    /// Whether cancellation has been requested
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

/// Why a frame loop returned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The frame limit was reached
    Completed,
    /// The cancel token was set
    Cancelled,
    /// The animation stopped scheduling frames (torn down or never mounted)
    Unscheduled,
}

/// Outcome of a frame loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Frames rendered by this loop
    pub frames: u64,
    /// Why the loop ended
    pub reason: StopReason,
}

/// A frame just rendered, handed to the loop's sink
#[derive(Debug)]
pub struct RenderedFrame<'a, S> {
    /// Zero-based index of the frame within this loop
    pub index: u64,
    /// Animation time the frame was drawn at
    pub time: f64,
    /// Surface holding the finished frame
    pub surface: &'a S,
}

/// Tick `animation` until `limit` frames ran, `token` is cancelled or the
/// animation stops scheduling, passing every finished frame to `sink`
///
/// # Errors
///
/// Stops at, and returns, the first error produced by `sink`
pub fn run<S, E, F>(
    animation: &mut Animation<S>,
    limit: Option<u64>,
    token: &CancelToken,
    mut sink: F,
) -> Result<RunSummary, E>
where
    S: Surface,
    F: FnMut(RenderedFrame<'_, S>) -> Result<(), E>,
{
    let mut frames = 0;
    let reason = loop {
        if token.is_cancelled() {
            break StopReason::Cancelled;
        }
        if limit.is_some_and(|limit| frames >= limit) {
            break StopReason::Completed;
        }
        if !animation.tick() {
            break StopReason::Unscheduled;
        }
        let time = animation.time();
        let Some(surface) = animation.surface() else {
            break StopReason::Unscheduled;
        };
        sink(RenderedFrame {
            index: frames,
            time,
            surface,
        })?;
        frames += 1;
    };

    debug!(frames, ?reason, "frame loop stopped");
    Ok(RunSummary { frames, reason })
}
