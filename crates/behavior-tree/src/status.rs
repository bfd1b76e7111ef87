//! Status returned by behavior nodes.

/// The result of executing a behavior node for one tick.
///
/// # Tick Semantics
///
/// Long-running actions span several ticks:
/// - `Running` asks the caller to execute the same node again next tick
/// - `Success` and `Failure` resolve the node; the next execute starts over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The behavior completed successfully.
    Success,

    /// The behavior failed.
    ///
    /// For maneuvers this is a control signal (e.g. the bumper fired), not a fault.
    Failure,

    /// The behavior has not finished yet and must be resumed next tick.
    Running,
}

impl Status {
    /// Returns `true` if this status is `Success`.
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    /// Returns `true` if this status is `Failure`.
    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }

    /// Returns `true` if this status is `Running`.
    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, Status::Running)
    }

    /// Returns `true` once the node has resolved (succeeded or failed).
    #[inline]
    pub fn is_done(self) -> bool {
        !self.is_running()
    }
}
