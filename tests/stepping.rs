mod tests {
    use myrtio_strip_animations::stepping::{step, step_color, step_packed};
    use myrtio_strip_animations::{Rgb, StepSize, pack_rgb};

    const STEP_SIZES: [(u8, u8); 6] = [(1, 1), (1, 10), (2, 10), (5, 255), (10, 0), (50, 10)];

    #[test]
    fn test_step_is_idempotent_at_target() {
        for value in 0..=255u8 {
            for (min, max) in STEP_SIZES {
                assert_eq!(step(value, value, min, max), value);
            }
        }
    }

    #[test]
    fn test_step_proportional_values() {
        // 255 * 10 / 255
        assert_eq!(step(0, 255, 2, 10), 10);
        assert_eq!(step(255, 0, 2, 10), 245);
        // 100 * 10 / 255 = 3
        assert_eq!(step(0, 100, 2, 10), 3);
        // proportional step 0 is raised to the minimum
        assert_eq!(step(0, 20, 2, 10), 2);
        // gap below the minimum moves by one
        assert_eq!(step(0, 1, 2, 10), 1);
        assert_eq!(step(200, 199, 2, 10), 199);
    }

    #[test]
    fn test_step_never_overshoots() {
        // minimum larger than the gap would wrap without saturation
        assert_eq!(step(250, 255, 2, 10), 252);
        assert_eq!(step(3, 0, 2, 10), 1);
        assert_eq!(step(0, 255, 2, 255), 255);
        assert_eq!(step(255, 0, 2, 255), 0);
        assert_eq!(step(0, 60, 50, 10), 50);
        assert_eq!(step(50, 60, 50, 10), 51);
    }

    #[test]
    fn test_step_zero_minimum_still_moves() {
        assert_eq!(step(0, 5, 0, 0), 1);
        assert_eq!(step(5, 0, 0, 0), 4);
    }

    #[test]
    fn test_step_reaches_target_within_bound() {
        for (min, max) in STEP_SIZES {
            let bound = 255 / usize::from(min) + usize::from(min);
            for start in (0..=255u8).step_by(3) {
                for finish in 0..=255u8 {
                    let mut current = start;
                    let mut calls = 0;
                    while current != finish {
                        let next = step(current, finish, min, max);
                        assert!(
                            next.abs_diff(finish) < current.abs_diff(finish),
                            "step {current} -> {next} toward {finish} does not progress"
                        );
                        current = next;
                        calls += 1;
                    }
                    assert!(
                        calls <= bound,
                        "{start} -> {finish} took {calls} calls with min {min}, max {max}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_step_color_steps_channels_independently() {
        let start = Rgb::new(0, 128, 255);
        let finish = Rgb::new(255, 128, 0);
        assert_eq!(
            step_color(start, finish, StepSize::default()),
            Rgb::new(10, 128, 245)
        );
    }

    #[test]
    fn test_step_packed_matches_step_color() {
        let colors = [
            Rgb::new(0, 0, 0),
            Rgb::new(255, 255, 255),
            Rgb::new(255, 30, 35),
            Rgb::new(106, 13, 173),
            Rgb::new(1, 254, 128),
        ];
        for a in colors {
            for b in colors {
                for (min, max) in STEP_SIZES {
                    let size = StepSize::new(min, max);
                    assert_eq!(
                        step_packed(pack_rgb(a), pack_rgb(b), size),
                        pack_rgb(step_color(a, b, size))
                    );
                }
            }
        }
    }
}
