//! Tests for HSV conversion, spectrum slots and seeded color sampling

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};
    use std::collections::HashSet;
    use tilecanvas::io::configuration::SPECTRUM_SLOTS;
    use tilecanvas::palette::Color;

    // Tests primary and secondary hues convert to the expected channels
    // Verified by swapping the green and blue sectors
    #[test]
    fn test_from_hsv_primaries() {
        assert_eq!(Color::from_hsv(0.0, 1.0, 1.0), Color::rgb(255, 0, 0));
        assert_eq!(Color::from_hsv(1.0 / 3.0, 1.0, 1.0), Color::rgb(0, 255, 0));
        assert_eq!(Color::from_hsv(2.0 / 3.0, 1.0, 1.0), Color::rgb(0, 0, 255));
        assert_eq!(Color::from_hsv(0.5, 1.0, 1.0), Color::rgb(0, 255, 255));
        assert_eq!(Color::from_hsv(1.0, 1.0, 1.0), Color::rgb(255, 0, 0));
    }

    // Tests zero saturation yields grays and zero value yields black
    // Verified by ignoring saturation in the conversion
    #[test]
    fn test_from_hsv_grays() {
        assert_eq!(Color::from_hsv(0.3, 0.0, 1.0), Color::WHITE);
        assert_eq!(Color::from_hsv(0.7, 0.0, 0.0), Color::BLACK);
        assert_eq!(Color::from_hsv(0.1, 0.0, 0.5), Color::rgb(128, 128, 128));
    }

    // Tests the first spectrum slots follow the hue-first walk
    // Verified by starting the hue walk at the second division
    #[test]
    fn test_spectrum_first_slots() {
        assert_eq!(Color::spectrum(0), Color::rgb(255, 0, 0));
        assert_eq!(Color::spectrum(1), Color::rgb(0, 255, 0));
        assert_eq!(Color::spectrum(2), Color::rgb(0, 0, 255));
        assert_eq!(Color::spectrum(3), Color::rgb(170, 170, 0));
    }

    // Tests spectrum slots are distinct for a dozen entries and wrap afterwards
    // Verified by removing the value band from the slot formula
    #[test]
    fn test_spectrum_distinct_and_wraps() {
        let first: HashSet<Color> = (0..12).map(Color::spectrum).collect();
        assert_eq!(first.len(), 12);

        for slot in [0, 5, 77] {
            assert_eq!(Color::spectrum(slot), Color::spectrum(slot + SPECTRUM_SLOTS));
        }
        assert!((0..SPECTRUM_SLOTS).all(|slot| Color::spectrum(slot).channels()[3] == 255));
    }

    // Tests seeded sampling is reproducible
    // Verified by sampling from a thread rng
    #[test]
    fn test_random_is_seeded() {
        let mut a = StdRng::seed_from_u64(9);
        let mut b = StdRng::seed_from_u64(9);

        let first: Vec<Color> = (0..8).map(|_| Color::random(&mut a)).collect();
        let second: Vec<Color> = (0..8).map(|_| Color::random(&mut b)).collect();

        assert_eq!(first, second);
        assert!(first.iter().all(|color| color.channels()[3] == 255));
    }

    // Tests the hex display includes alpha
    // Verified by dropping the alpha channel from Display
    #[test]
    fn test_display_hex() {
        assert_eq!(Color::rgba(255, 0, 16, 128).to_string(), "#ff001080");
    }
}
