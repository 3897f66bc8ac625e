use deluxe_palette::palettes::{deluxe08, deluxe64};
use deluxe_palette::{ParseColorErr, Rgba};
use ratatui_core::style::Color;

#[test]
fn test_hex() {
    assert_eq!(deluxe08::RED.to_hex(), "#E53935");
    assert_eq!(deluxe08::YELLOW.to_string(), "#FBC02D");
    assert_eq!(deluxe08::ONYX.to_hex(), "#000000");
    assert_eq!(deluxe64::MAGENTA_06.to_hex(), "#D40E40");
    assert_eq!(Rgba::new(1.0, 1.0, 1.0, 0.5).to_hex(), "#FFFFFF80");
}

#[test]
fn test_parse() {
    let c: Rgba = "#E53935".parse().expect("hex");
    assert_eq!(c.to_rgba8(), [0xe5, 0x39, 0x35, 0xff]);
    let c: Rgba = "e5393580".parse().expect("hex");
    assert_eq!(c.to_rgba8(), [0xe5, 0x39, 0x35, 0x80]);

    for v in ["", "#", "#E5393", "#E53935F", "#G53935", "#+5393535", "#E53935FFFF"] {
        assert_eq!(v.parse::<Rgba>(), Err(ParseColorErr(v.to_string())), "{:?}", v);
    }
}

#[test]
fn test_rgba8() {
    assert_eq!(deluxe08::RED.to_rgba8(), [229, 57, 53, 255]);
    assert_eq!(Rgba::from_rgba8([0, 255, 0, 255]), Rgba::new(0.0, 1.0, 0.0, 1.0));
    assert_eq!(Rgba::new(-0.5, 1.5, 0.0, 1.0).to_rgba8(), [0, 255, 0, 255]);
    assert!(!Rgba::new(-0.5, 1.5, 0.0, 1.0).is_normalized());
}

#[test]
fn test_terminal_color() {
    assert_eq!(Color::from(deluxe08::RED), Color::Rgb(229, 57, 53));
    assert_eq!(deluxe08::SILVER.text_color(), Color::Black);
    assert_eq!(deluxe08::ONYX.text_color(), Color::White);
}
