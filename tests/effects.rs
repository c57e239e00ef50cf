mod common;

mod tests {
    use sirius_light::color::{PARTY_COLORS, color_from_palette, hsv};
    use sirius_light::effect::{
        BpmEffect, Effect, EffectCycler, EffectId, FrameContext, JuggleEffect, RainbowEffect,
        SinelonEffect,
    };
    use sirius_light::math8::beatsin8;
    use sirius_light::{Duration, Rgb};

    use crate::common::{BLACK, at};

    fn ctx(ms: u64, hue: u8) -> FrameContext {
        FrameContext { now: at(ms), hue }
    }

    fn lit(leds: &[Rgb]) -> Vec<usize> {
        leds.iter()
            .enumerate()
            .filter(|(_, led)| **led != BLACK)
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn test_effect_id_roundtrip_names() {
        for raw in 0..4 {
            let id = EffectId::from_raw(raw).unwrap();
            assert_eq!(id as u8, raw);
            assert_eq!(EffectId::parse_from_str(id.as_str()), Some(id));
        }
        assert_eq!(EffectId::from_raw(4), None);
        assert_eq!(EffectId::parse_from_str("aurora"), None);
    }

    #[test]
    fn test_effect_id_rotation() {
        assert_eq!(EffectId::Rainbow.next(), EffectId::Sinelon);
        assert_eq!(EffectId::Sinelon.next(), EffectId::Bpm);
        assert_eq!(EffectId::Bpm.next(), EffectId::Juggle);
        assert_eq!(EffectId::Juggle.next(), EffectId::Rainbow);
    }

    #[test]
    fn test_rainbow_gradient() {
        let mut leds = [BLACK; 5];
        RainbowEffect::new().render(ctx(0, 250), &mut leds);
        for (i, led) in leds.iter().enumerate() {
            let hue = 250u8.wrapping_add(7 * i as u8);
            assert_eq!(*led, hsv(hue, 240, 255));
        }
    }

    #[test]
    fn test_rainbow_custom_step() {
        let mut leds = [BLACK; 3];
        RainbowEffect::new()
            .with_delta_hue(32)
            .render(ctx(0, 0), &mut leds);
        assert_eq!(leds[2], hsv(64, 240, 255));
    }

    #[test]
    fn test_sinelon_single_dot() {
        let mut leds = [BLACK; 10];
        SinelonEffect::new().render(ctx(0, 40), &mut leds);
        assert_eq!(lit(&leds), vec![5]);
        assert_eq!(leds[5], hsv(40, 255, 192));
    }

    #[test]
    fn test_sinelon_leaves_fading_trail() {
        let mut leds = [BLACK; 10];
        let mut effect = SinelonEffect::new();
        effect.render(ctx(0, 0), &mut leds);
        let first = leds[5];

        // A quarter beat later the dot has moved on
        effect.render(ctx(1_150, 0), &mut leds);
        assert!(leds[5] != BLACK);
        assert!(leds[5].r <= first.r && leds[5].g <= first.g && leds[5].b <= first.b);
        assert!(lit(&leds).len() >= 2);
    }

    #[test]
    fn test_juggle_dots_share_start() {
        let mut leds = [BLACK; 10];
        JuggleEffect::new().render(ctx(0, 0), &mut leds);
        assert_eq!(lit(&leds), vec![5]);

        let mut expected = BLACK;
        let mut hue: u8 = 0;
        for _ in 0..8 {
            let dot = hsv(hue, 200, 255);
            expected = Rgb::new(
                expected.r.max(dot.r),
                expected.g.max(dot.g),
                expected.b.max(dot.b),
            );
            hue = hue.wrapping_add(32);
        }
        assert_eq!(leds[5], expected);
    }

    #[test]
    fn test_bpm_palette_band() {
        let mut leds = [BLACK; 30];
        let now = 1_234;
        let hue = 17u8;
        BpmEffect::new().render(ctx(now, hue), &mut leds);

        let beat = beatsin8(62, 64, 255, at(now));
        for (i, led) in leds.iter().enumerate() {
            let i = i as u8;
            let expected = color_from_palette(
                &PARTY_COLORS,
                hue.wrapping_add(i.wrapping_mul(2)),
                beat.wrapping_sub(hue).wrapping_add(i.wrapping_mul(10)),
            );
            assert_eq!(*led, expected);
        }
    }

    #[test]
    fn test_effects_are_deterministic() {
        let mut a = [BLACK; 16];
        let mut b = [BLACK; 16];
        for ms in (0..3_000).step_by(16) {
            JuggleEffect::new().render(ctx(ms, 3), &mut a);
            JuggleEffect::new().render(ctx(ms, 3), &mut b);
        }
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_strip_is_ignored() {
        let mut leds: [Rgb; 0] = [];
        SinelonEffect::new().render(ctx(0, 0), &mut leds);
        JuggleEffect::new().render(ctx(0, 0), &mut leds);
    }

    #[test]
    fn test_cycler_dwell() {
        let dwell = Duration::from_secs(10);
        let mut cycler = EffectCycler::new(EffectId::Rainbow, dwell, Duration::from_millis(20));
        let mut leds = [BLACK; 8];

        cycler.render(at(1_000), &mut leds);
        assert_eq!(cycler.effect(), EffectId::Rainbow);
        cycler.render(at(10_999), &mut leds);
        assert_eq!(cycler.effect(), EffectId::Rainbow);
        cycler.render(at(11_000), &mut leds);
        assert_eq!(cycler.effect(), EffectId::Sinelon);

        let mut now = 11_000;
        for expected in [EffectId::Bpm, EffectId::Juggle, EffectId::Rainbow] {
            now += 10_000;
            cycler.render(at(now), &mut leds);
            assert_eq!(cycler.effect(), expected);
        }
    }

    #[test]
    fn test_cycler_advances_hue() {
        let mut cycler = EffectCycler::new(
            EffectId::Rainbow,
            Duration::from_secs(10),
            Duration::from_millis(20),
        );
        let mut leds = [BLACK; 4];
        cycler.render(at(0), &mut leds);
        assert_eq!(cycler.hue(), 0);
        assert_eq!(leds[0], hsv(0, 240, 255));

        cycler.render(at(200), &mut leds);
        assert_eq!(cycler.hue(), 10);
        assert_eq!(leds[0], hsv(10, 240, 255));
    }
}
