//! Tests for the cooperative frame loop

#[cfg(test)]
mod tests {
    use evotess::algorithm::frame::Animation;
    use evotess::algorithm::scheduler::{CancelToken, RunSummary, StopReason, run};
    use evotess::canvas::{RecordingSurface, Surface};
    use evotess::io::configuration::{CANVAS_HEIGHT, CANVAS_WIDTH, TIME_STEP};

    fn mounted() -> Animation<RecordingSurface> {
        let mut animation = Animation::new();
        animation.mount(RecordingSurface::new(CANVAS_WIDTH, CANVAS_HEIGHT));
        animation
    }

    // Tests the loop stops at the frame limit
    // Verified by checking the limit after ticking
    #[test]
    fn test_run_to_limit() {
        let mut animation = mounted();
        let mut seen = Vec::new();
        let summary = run(&mut animation, Some(5), &CancelToken::new(), |frame| {
            seen.push((frame.index, frame.time));
            Ok::<(), ()>(())
        });

        assert_eq!(
            summary,
            Ok(RunSummary {
                frames: 5,
                reason: StopReason::Completed
            })
        );
        assert_eq!(seen.len(), 5);
        for (position, (index, time)) in seen.iter().enumerate() {
            assert_eq!(*index, position as u64);
            assert!((time - (position + 1) as f64 * TIME_STEP).abs() < 1e-12);
        }
        assert_eq!(animation.frame_count(), 5);
    }

    // Tests a cancelled token prevents any frame from running
    // Verified by checking the token after the first tick
    #[test]
    fn test_cancelled_before_start() {
        let mut animation = mounted();
        let token = CancelToken::new();
        token.cancel();

        let summary = run(&mut animation, None, &token, |_| Ok::<(), ()>(()));
        assert_eq!(
            summary,
            Ok(RunSummary {
                frames: 0,
                reason: StopReason::Cancelled
            })
        );
        assert_eq!(animation.frame_count(), 0);
    }

    // Tests cancelling from the sink finishes the frame in flight only
    // Verified by checking the token before handing the frame to the sink
    #[test]
    fn test_cancel_from_sink() {
        let mut animation = mounted();
        let token = CancelToken::new();
        let remote = token.clone();

        let summary = run(&mut animation, Some(100), &token, |frame| {
            if frame.index == 2 {
                remote.cancel();
            }
            Ok::<(), ()>(())
        });

        assert_eq!(
            summary,
            Ok(RunSummary {
                frames: 3,
                reason: StopReason::Cancelled
            })
        );
        assert!(token.is_cancelled());
    }

    // Tests an unmounted animation never schedules a frame
    // Verified by ticking without a surface
    #[test]
    fn test_unmounted_is_unscheduled() {
        let mut animation: Animation<RecordingSurface> = Animation::new();
        let summary = run(&mut animation, Some(10), &CancelToken::new(), |_| {
            Ok::<(), ()>(())
        });
        assert_eq!(
            summary,
            Ok(RunSummary {
                frames: 0,
                reason: StopReason::Unscheduled
            })
        );
    }

    // Tests a torn down animation stops an unbounded loop
    // Verified by running after teardown without a limit
    #[test]
    fn test_teardown_stops_loop() {
        let mut animation = mounted();
        animation.teardown();
        let summary = run(&mut animation, None, &CancelToken::new(), |_| Ok::<(), ()>(()));
        assert_eq!(summary.map(|s| s.reason), Ok(StopReason::Unscheduled));
    }

    // Tests the first sink error is returned and ends the loop
    // Verified by swallowing sink errors
    #[test]
    fn test_sink_error_propagates() {
        let mut animation = mounted();
        let summary = run(&mut animation, Some(10), &CancelToken::new(), |frame| {
            if frame.index == 1 {
                Err("sink full")
            } else {
                Ok(())
            }
        });
        assert_eq!(summary, Err("sink full"));
        assert_eq!(animation.frame_count(), 2);
    }

    // Tests every frame handed to the sink carries a painted surface
    // Verified by handing over the surface before rendering
    #[test]
    fn test_sink_sees_rendered_surface() {
        let mut animation = mounted();
        let mut fills = Vec::new();
        let summary = run(&mut animation, Some(3), &CancelToken::new(), |frame| {
            assert_eq!(frame.surface.width(), CANVAS_WIDTH);
            fills.push(frame.surface.summary().fills);
            Ok::<(), ()>(())
        });
        assert!(summary.is_ok());
        assert_eq!(fills, vec![1, 2, 3]);
    }
}
