mod tests {
    use embassy_time::Instant;
    use sirius_light::math8::{
        beat8, beat16, beatsin8, beatsin16, qadd8, scale8, scale16, sin8, sin16,
    };

    #[test]
    fn test_scale8() {
        assert_eq!(scale8(255, 128), 128);
        assert_eq!(scale8(0, 128), 0);
        assert_eq!(scale8(128, 128), 64);
        assert_eq!(scale8(128, 255), 128);
        assert_eq!(scale8(128, 0), 0);
        assert_eq!(scale8(255, 235), 235);
    }

    #[test]
    fn test_scale16() {
        assert_eq!(scale16(32768, 143), 72);
        assert_eq!(scale16(65535, 9), 9);
        assert_eq!(scale16(0, 9), 0);
    }

    #[test]
    fn test_qadd8() {
        assert_eq!(qadd8(200, 100), 255);
        assert_eq!(qadd8(10, 20), 30);
    }

    #[test]
    fn test_sin8_quadrants() {
        assert_eq!(sin8(0), 128);
        assert_eq!(sin8(64), 255);
        assert_eq!(sin8(128), 128);
        assert_eq!(sin8(192), 1);
    }

    #[test]
    fn test_sin16_quadrants() {
        assert_eq!(sin16(0), 0);
        assert_eq!(sin16(16384), 32645);
        assert_eq!(sin16(32768), 0);
        assert_eq!(sin16(49152), -32645);
    }

    #[test]
    fn test_beat_starts_at_zero() {
        let boot = Instant::from_millis(0);
        assert_eq!(beat16(60, boot), 0);
        assert_eq!(beat8(60, boot), 0);
    }

    #[test]
    fn test_beat16_period() {
        // 60 bpm: one full sawtooth roughly per second
        assert_eq!(beat16(60, Instant::from_millis(500)), 32812);
        assert!(beat16(60, Instant::from_millis(990)) > 64_000);
        assert!(beat16(60, Instant::from_millis(1_001)) < 1_000);
    }

    #[test]
    fn test_beatsin_stays_in_range() {
        for ms in (0..20_000).step_by(7) {
            let now = Instant::from_millis(ms);
            let beat = beatsin8(62, 64, 255, now);
            assert!(beat >= 64);
            let pos = beatsin16(13, 0, 143, now);
            assert!(pos <= 143);
        }
    }

    #[test]
    fn test_beatsin16_starts_centered() {
        assert_eq!(beatsin16(13, 0, 143, Instant::from_millis(0)), 72);
        assert_eq!(beatsin16(7, 0, 9, Instant::from_millis(0)), 5);
    }

    #[test]
    fn test_clock_wraps_at_32_bits() {
        let wrapped = Instant::from_millis(u64::from(u32::MAX) + 1 + 250);
        assert_eq!(beat16(13, wrapped), beat16(13, Instant::from_millis(250)));
    }
}
