mod tests {
    use myrtio_strip_animations::math8::scale8;

    #[test]
    fn test_scale8() {
        assert_eq!(scale8(255, 128), 127);
        assert_eq!(scale8(0, 128), 0);
        assert_eq!(scale8(128, 128), 64);
        assert_eq!(scale8(128, 255), 127);
        assert_eq!(scale8(128, 0), 0);
    }
}
