//! Tests for the scoped save/restore guard

#[cfg(test)]
mod tests {
    use evotess::canvas::{RecordingSurface, Scoped, Surface};
    use evotess::spatial::Transform;

    fn draw_until_skipped(surface: &mut RecordingSurface, skip: bool) {
        let mut scoped = Scoped::new(surface);
        scoped.translate(40.0, 40.0);
        if skip {
            return;
        }
        scoped.rotate(0.5);
    }

    // Tests the guard restores on early return and normal exit
    // Verified by removing the Drop implementation
    #[test]
    fn test_guard_restores_on_every_path() {
        let mut surface = RecordingSurface::new(100, 100);
        draw_until_skipped(&mut surface, true);
        assert_eq!(surface.state().depth(), 0);
        assert_eq!(surface.state().transform(), Transform::IDENTITY);

        draw_until_skipped(&mut surface, false);
        assert_eq!(surface.state().depth(), 0);
        assert_eq!(surface.state().transform(), Transform::IDENTITY);
    }

    // Tests nested guards unwind in order
    // Verified by restoring twice in the inner guard
    #[test]
    fn test_nested_guards() {
        let mut surface = RecordingSurface::new(100, 100);
        {
            let mut outer = Scoped::new(&mut surface);
            outer.translate(1.0, 2.0);
            {
                let mut inner = Scoped::new(&mut *outer);
                inner.translate(10.0, 20.0);
                assert_eq!(inner.state().depth(), 2);
                assert_eq!(inner.state().transform().apply([0.0, 0.0]), [11.0, 22.0]);
            }
            assert_eq!(outer.state().depth(), 1);
            assert_eq!(outer.state().transform().apply([0.0, 0.0]), [1.0, 2.0]);
        }
        assert_eq!(surface.state().depth(), 0);
    }

    // Tests the guard works through a trait object
    // Verified by requiring Sized surfaces
    #[test]
    fn test_guard_on_trait_object() {
        let mut surface = RecordingSurface::new(10, 10);
        let dynamic: &mut dyn Surface = &mut surface;
        {
            let mut scoped = Scoped::new(dynamic);
            scoped.rotate(1.0);
        }
        assert_eq!(surface.state().transform(), Transform::IDENTITY);
    }
}
