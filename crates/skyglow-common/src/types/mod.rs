mod color;
mod mode;

pub use color::*;
pub use mode::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_from_hex() {
        let c = Color::from_hex("#ff8800").unwrap();
        assert_eq!(c, Color::from_rgb(255, 136, 0));
    }

    #[test]
    fn color_from_hex_uppercase() {
        let c = Color::from_hex("#87CEEB").unwrap();
        assert_eq!(c, Color::from_rgb(0x87, 0xce, 0xeb));
    }

    #[test]
    fn color_from_hex_no_hash() {
        let c = Color::from_hex("00ff00").unwrap();
        assert_eq!(c, Color::from_rgb(0, 255, 0));
    }

    #[test]
    fn color_from_hex_invalid() {
        assert!(Color::from_hex("zzzzzz").is_none());
        assert!(Color::from_hex("#abc").is_none());
        assert!(Color::from_hex("#ff880080").is_none());
        assert!(Color::from_hex("").is_none());
        assert!(Color::from_hex("#ééé").is_none());
    }

    #[test]
    fn color_to_hex_is_lowercase_and_padded() {
        assert_eq!(Color::from_rgb(255, 0, 128).to_hex(), "#ff0080");
        assert_eq!(Color::from_rgb(1, 2, 3).to_hex(), "#010203");
        assert_eq!(Color::from_hex("#87CEEB").unwrap().to_string(), "#87ceeb");
    }

    #[test]
    fn color_lerp_endpoints() {
        let a = Color::from_rgb(10, 20, 30);
        let b = Color::from_rgb(200, 100, 0);
        assert_eq!(a.lerp(&b, 0.0), a);
        assert_eq!(a.lerp(&b, 1.0), b);
    }

    #[test]
    fn color_lerp_midpoint_rounds_half_up() {
        let a = Color::from_rgb(0, 0, 0);
        let b = Color::from_rgb(255, 1, 3);
        // 127.5 -> 128, 0.5 -> 1, 1.5 -> 2
        assert_eq!(a.lerp(&b, 0.5), Color::from_rgb(128, 1, 2));
    }

    #[test]
    fn color_serialization() {
        let c = Color::from_rgb(1, 2, 3);
        let json = serde_json::to_string(&c).unwrap();
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }

    #[test]
    fn theme_mode_parse_and_display() {
        for mode in ThemeMode::ALL {
            assert_eq!(mode.as_str().parse::<ThemeMode>().unwrap(), mode);
            assert_eq!(mode.to_string(), mode.as_str());
        }
    }

    #[test]
    fn theme_mode_rejects_unknown_and_wrong_case() {
        assert!("Dark".parse::<ThemeMode>().is_err());
        assert!("midnight".parse::<ThemeMode>().is_err());
        assert!("".parse::<ThemeMode>().is_err());
        let err = "auto".parse::<ThemeMode>().unwrap_err();
        assert!(err.to_string().contains("auto"));
    }

    #[test]
    fn theme_mode_defaults_to_sky() {
        assert_eq!(ThemeMode::default(), ThemeMode::Sky);
    }

    #[test]
    fn theme_mode_serde_is_lowercase() {
        let json = serde_json::to_string(&ThemeMode::System).unwrap();
        assert_eq!(json, "\"system\"");
        let mode: ThemeMode = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(mode, ThemeMode::Light);
    }
}
