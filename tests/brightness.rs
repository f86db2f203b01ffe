mod tests {
    use embassy_time::Duration;
    use myrtio_strip_animations::{BrightnessController, Rgb, parse_brightness, parse_speed};

    #[test]
    fn test_correct_passes_zero_through() {
        for level in [0, 1, 128, 255] {
            assert_eq!(BrightnessController::new(level).correct(0), 0);
        }
    }

    #[test]
    fn test_correct_scales_by_gamma_level() {
        let full = BrightnessController::new(255);
        assert_eq!(full.correct(255), 254);
        assert_eq!(full.correct(128), 127);

        // gamma8(128) == 42
        let half = BrightnessController::new(128);
        assert_eq!(half.correct(255), 41);
        assert_eq!(half.correct(128), 21);

        let off = BrightnessController::new(0);
        assert_eq!(off.correct(255), 0);
    }

    #[test]
    fn test_correct_rgb() {
        let controller = BrightnessController::new(128);
        assert_eq!(
            controller.correct_rgb(Rgb {
                r: 255,
                g: 0,
                b: 128
            }),
            Rgb {
                r: 41,
                g: 0,
                b: 21
            }
        );
    }

    #[test]
    fn test_set_level() {
        let mut controller = BrightnessController::default();
        assert_eq!(controller.level(), 255);
        controller.set_level(160);
        assert_eq!(controller.level(), 160);
    }

    #[test]
    fn test_parse_speed() {
        assert_eq!(parse_speed(1), Duration::from_millis(100));
        assert_eq!(parse_speed(50), Duration::from_millis(51));
        assert_eq!(parse_speed(100), Duration::from_millis(1));
        // out of range positions are clamped
        assert_eq!(parse_speed(0), Duration::from_millis(100));
        assert_eq!(parse_speed(255), Duration::from_millis(1));
    }

    #[test]
    fn test_parse_brightness() {
        assert_eq!(parse_brightness(0), 0);
        assert_eq!(parse_brightness(1), 2);
        assert_eq!(parse_brightness(50), 125);
        assert_eq!(parse_brightness(100), 250);
        assert_eq!(parse_brightness(200), 250);
    }
}
