mod tests {
    use myrtio_strip_animations::{PixelOrder, PixelOrderError};

    #[test]
    fn test_identity_token() {
        let order = PixelOrder::<8>::parse("  default \n", 5).unwrap();
        assert_eq!(order.len(), 5);
        for index in 0..5 {
            assert_eq!(order.to_electrical(index), index);
            assert_eq!(order.to_visual(index), index);
        }
    }

    #[test]
    fn test_parse_permutation() {
        let order = PixelOrder::<8>::parse("2 0 1", 3).unwrap();
        assert_eq!(order.to_electrical(0), 2);
        assert_eq!(order.to_electrical(1), 0);
        assert_eq!(order.to_electrical(2), 1);
        assert_eq!(order.to_visual(2), 0);
        assert_eq!(order.to_visual(0), 1);
        assert_eq!(order.to_visual(1), 2);
        assert_eq!(order.iter().collect::<Vec<_>>(), vec![2, 0, 1]);
    }

    #[test]
    fn test_parse_is_bijection() {
        let order = PixelOrder::<16>::parse("7 3\t0 9 1 8 2  6 4 5", 10).unwrap();
        for visual in 0..order.len() {
            assert_eq!(order.to_visual(order.to_electrical(visual)), visual);
        }
        for electrical in 0..order.len() {
            assert_eq!(order.to_electrical(order.to_visual(electrical)), electrical);
        }
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert_eq!(
            PixelOrder::<8>::parse("0 1", 3),
            Err(PixelOrderError::CountMismatch {
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            PixelOrder::<8>::parse("0 1 2 3", 3),
            Err(PixelOrderError::CountMismatch {
                expected: 3,
                found: 4
            })
        );
    }

    #[test]
    fn test_parse_rejects_invalid_token() {
        assert_eq!(
            PixelOrder::<8>::parse("0 1 x", 3),
            Err(PixelOrderError::InvalidToken { position: 2 })
        );
        assert_eq!(
            PixelOrder::<8>::parse("0 -1 2", 3),
            Err(PixelOrderError::InvalidToken { position: 1 })
        );
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert_eq!(
            PixelOrder::<8>::parse("0 1 3", 3),
            Err(PixelOrderError::OutOfRange { index: 3, count: 3 })
        );
    }

    #[test]
    fn test_parse_rejects_duplicate() {
        assert_eq!(
            PixelOrder::<8>::parse("0 2 0", 3),
            Err(PixelOrderError::Duplicate { index: 0 })
        );
    }

    #[test]
    fn test_parse_rejects_capacity_overflow() {
        assert_eq!(
            PixelOrder::<4>::parse("default", 5),
            Err(PixelOrderError::TooManyPixels {
                count: 5,
                capacity: 4
            })
        );
    }
}
