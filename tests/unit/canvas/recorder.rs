//! Tests for the draw-call recorder

#[cfg(test)]
mod tests {
    use evotess::canvas::{DrawCommand, DrawSummary, RecordingSurface, Surface};
    use evotess::math::Hsla;

    // Tests strokes are recorded in device space with scaled width
    // Verified by recording the unscaled line width
    #[test]
    fn test_stroke_recorded_in_device_space() {
        let mut surface = RecordingSurface::new(20, 20);
        surface.translate(5.0, 5.0);
        surface.state_mut().scale(2.0, 2.0);
        surface.set_line_width(1.5);
        surface.set_stroke_style(Hsla::new(90.0, 30.0, 30.0, 0.4));
        surface.begin_path();
        surface.move_to(0.0, 0.0);
        surface.line_to(1.0, 0.0);
        surface.stroke();

        let strokes: Vec<_> = surface.strokes().collect();
        assert_eq!(strokes.len(), 1);
        let (subpaths, color, width) = strokes[0];
        assert_eq!(subpaths, &[vec![[5.0, 5.0], [7.0, 5.0]]]);
        assert_eq!(color, Hsla::new(90.0, 30.0, 30.0, 0.4));
        assert!((width - 3.0).abs() < 1e-12);
    }

    // Tests summary counts each command kind
    // Verified by counting points instead of segments
    #[test]
    fn test_summary_counts() {
        let mut surface = RecordingSurface::new(20, 20);
        surface.fill_rect(0.0, 0.0, 20.0, 20.0);
        surface.begin_path();
        surface.move_to(0.0, 0.0);
        surface.line_to(1.0, 1.0);
        surface.line_to(2.0, 0.0);
        surface.stroke();
        surface.clear_rect(0.0, 0.0, 20.0, 20.0);
        surface.resize(0, 0);

        assert_eq!(
            surface.summary(),
            DrawSummary {
                strokes: 1,
                segments: 2,
                fills: 1,
                clears: 1,
            }
        );
        assert_eq!(surface.width(), 0);
        assert!(matches!(
            surface.commands().last(),
            Some(DrawCommand::Resize {
                width: 0,
                height: 0
            })
        ));
    }

    // Tests taking commands empties the log
    // Verified by cloning instead of taking
    #[test]
    fn test_take_commands() {
        let mut surface = RecordingSurface::new(5, 5);
        surface.clear_rect(0.0, 0.0, 5.0, 5.0);
        assert_eq!(surface.take_commands().len(), 1);
        assert!(surface.commands().is_empty());
    }
}
