use std::time::{Duration, Instant};

/// Decides when the next frame may be rendered.
///
/// Without a target FPS every frame is allowed and presentation timing is
/// left to the surface's Fifo mode. With a target, frames are released on a
/// fixed deadline grid driven through `ControlFlow::WaitUntil`.
#[derive(Debug, Clone, Copy)]
pub struct FramePacer {
    interval: Option<Duration>,
    next_deadline: Option<Instant>,
}

impl FramePacer {
    /// Creates a pacer; `None` or a non-positive FPS means uncapped.
    pub fn new(target_fps: Option<f32>) -> Self {
        let interval = target_fps
            .filter(|fps| fps.is_finite() && *fps > 0.0)
            .map(|fps| Duration::from_secs_f32(1.0 / fps));
        Self {
            interval,
            next_deadline: None,
        }
    }

    /// Whether a frame may be rendered at `now`.
    pub fn ready_for_frame(&self, now: Instant) -> bool {
        match (self.interval, self.next_deadline) {
            (None, _) | (_, None) => true,
            (Some(_), Some(deadline)) => now >= deadline,
        }
    }

    /// Records that a frame was just rendered and schedules the next one.
    pub fn mark_rendered(&mut self, now: Instant) {
        if let Some(interval) = self.interval {
            // Step from the previous deadline while we keep up so the cadence
            // does not drift; restart from now after a long stall.
            let base = self
                .next_deadline
                .filter(|deadline| now.saturating_duration_since(*deadline) < interval)
                .unwrap_or(now);
            self.next_deadline = Some(base + interval);
        }
    }

    /// Deadline of the next allowed frame, if the pacer is capping.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.interval.and(self.next_deadline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uncapped_pacer_is_always_ready() {
        let mut pacer = FramePacer::new(None);
        let now = Instant::now();
        assert!(pacer.ready_for_frame(now));
        pacer.mark_rendered(now);
        assert!(pacer.ready_for_frame(now));
        assert!(pacer.next_deadline().is_none());
    }

    #[test]
    fn non_positive_fps_means_uncapped() {
        let pacer = FramePacer::new(Some(0.0));
        assert!(pacer.next_deadline().is_none());
        assert!(pacer.ready_for_frame(Instant::now()));

        let pacer = FramePacer::new(Some(-30.0));
        assert!(pacer.ready_for_frame(Instant::now()));
    }

    // 8 FPS keeps the interval exact (125ms) so deadline math can use
    // equality below.
    #[test]
    fn capped_pacer_waits_one_interval() {
        let mut pacer = FramePacer::new(Some(8.0));
        let start = Instant::now();
        assert!(pacer.ready_for_frame(start));

        pacer.mark_rendered(start);
        assert!(!pacer.ready_for_frame(start));
        assert!(!pacer.ready_for_frame(start + Duration::from_millis(60)));
        assert!(pacer.ready_for_frame(start + Duration::from_millis(125)));

        let deadline = pacer.next_deadline().expect("deadline");
        assert_eq!(deadline, start + Duration::from_millis(125));
    }

    #[test]
    fn cadence_steps_from_previous_deadline() {
        let mut pacer = FramePacer::new(Some(8.0));
        let start = Instant::now();
        pacer.mark_rendered(start);
        // Rendered slightly late; the grid must not drift.
        pacer.mark_rendered(start + Duration::from_millis(130));
        assert_eq!(
            pacer.next_deadline().expect("deadline"),
            start + Duration::from_millis(250)
        );
    }

    #[test]
    fn cadence_restarts_after_a_stall() {
        let mut pacer = FramePacer::new(Some(8.0));
        let start = Instant::now();
        pacer.mark_rendered(start);
        let late = start + Duration::from_millis(450);
        pacer.mark_rendered(late);
        assert_eq!(
            pacer.next_deadline().expect("deadline"),
            late + Duration::from_millis(125)
        );
    }
}
