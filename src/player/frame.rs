//! Per-frame tick scheduling.
//!
//! The sync loop never sleeps on a fixed timer. It asks the host for the
//! next rendered frame and runs one tick when that frame is delivered.

/// Identifies one requested frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

impl FrameHandle {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Host per-frame callback scheduler.
pub trait FrameScheduler {
    /// Ask for a callback on the next frame.
    fn request_frame(&mut self) -> FrameHandle;

    /// Withdraw a previously requested callback. Unknown handles are ignored.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Frame scheduler for hosts that drive their own render loop.
///
/// Requests queue up until the host calls [`FrameQueue::take_due`] at the
/// start of a frame, then each due handle is delivered to the player.
#[derive(Debug, Default)]
pub struct FrameQueue {
    next_id: u64,
    pending: Vec<FrameHandle>,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain every handle due on this frame.
    pub fn take_due(&mut self) -> Vec<FrameHandle> {
        std::mem::take(&mut self.pending)
    }

    /// Number of outstanding requests.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

impl FrameScheduler for FrameQueue {
    fn request_frame(&mut self) -> FrameHandle {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.pending.push(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.pending.retain(|h| *h != handle);
    }
}
