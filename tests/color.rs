mod tests {
    use sirius_light::color::{
        ColorOrder, PARTY_COLORS, Rgb, add_saturating, color_from_palette, fade_to_black_by,
        fill_solid, lerp_color, max_blend, rgb_from_u32,
    };

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    #[test]
    fn test_lerp_color() {
        assert_eq!(lerp_color(RED, BLUE, 0.0), RED);
        assert_eq!(lerp_color(RED, BLUE, 1.0), BLUE);
        assert_eq!(lerp_color(BLACK, WHITE, 0.5), Rgb::new(127, 127, 127));
        assert_eq!(lerp_color(RED, BLUE, 0.25), Rgb::new(191, 0, 63));
    }

    #[test]
    fn test_lerp_color_clamps_progress() {
        assert_eq!(lerp_color(RED, BLUE, 1.5), BLUE);
        assert_eq!(lerp_color(RED, BLUE, -0.5), RED);
    }

    #[test]
    fn test_rgb_from_u32() {
        assert_eq!(rgb_from_u32(0xFFB0F0), Rgb::new(255, 176, 240));
    }

    #[test]
    fn test_palette_exact_entries() {
        assert_eq!(color_from_palette(&PARTY_COLORS, 0x00, 255), Rgb::new(85, 0, 171));
        assert_eq!(color_from_palette(&PARTY_COLORS, 0xF0, 255), Rgb::new(0, 7, 249));
    }

    #[test]
    fn test_palette_blends_neighbours() {
        assert_eq!(color_from_palette(&PARTY_COLORS, 0x18, 255), Rgb::new(157, 0, 99));
        // Last entry blends back into the first
        assert_eq!(color_from_palette(&PARTY_COLORS, 0xF8, 255), Rgb::new(42, 3, 210));
    }

    #[test]
    fn test_palette_brightness() {
        assert_eq!(color_from_palette(&PARTY_COLORS, 0x00, 127), Rgb::new(42, 0, 86));
        assert_eq!(color_from_palette(&PARTY_COLORS, 0x00, 0), BLACK);
    }

    #[test]
    fn test_color_order() {
        let color = Rgb::new(1, 2, 3);
        assert_eq!(ColorOrder::Rgb.reorder(color), Rgb::new(1, 2, 3));
        assert_eq!(ColorOrder::Grb.reorder(color), Rgb::new(2, 1, 3));
        assert_eq!(ColorOrder::Bgr.reorder(color), Rgb::new(3, 2, 1));
        assert_eq!(ColorOrder::Brg.reorder(color), Rgb::new(3, 1, 2));
        assert_eq!(ColorOrder::default(), ColorOrder::Grb);
    }

    #[test]
    fn test_fade_to_black_by() {
        let mut leds = [Rgb::new(255, 100, 0); 3];
        fade_to_black_by(&mut leds, 20);
        assert_eq!(leds, [Rgb::new(235, 92, 0); 3]);
    }

    #[test]
    fn test_blending() {
        let a = Rgb::new(200, 10, 0);
        let b = Rgb::new(100, 20, 5);
        assert_eq!(add_saturating(a, b), Rgb::new(255, 30, 5));
        assert_eq!(max_blend(a, b), Rgb::new(200, 20, 5));
    }

    #[test]
    fn test_fill_solid() {
        let mut leds = [BLACK; 4];
        fill_solid(&mut leds, WHITE);
        assert_eq!(leds, [WHITE; 4]);
    }
}
