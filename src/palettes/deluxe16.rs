use crate::palette::Palette;
use crate::rgba::Rgba;
use std::borrow::Cow;

/// red #E53935
pub const RED: Rgba = Rgba::new(0.898, 0.224, 0.208, 1.0);
/// auburn #8E3B3B
pub const AUBURN: Rgba = Rgba::new(0.557, 0.231, 0.231, 1.0);
/// magenta #D81B60
pub const MAGENTA: Rgba = Rgba::new(0.847, 0.106, 0.376, 1.0);
/// orange #FB8C00
pub const ORANGE: Rgba = Rgba::new(0.984, 0.549, 0.0, 1.0);
/// yellow #FBC02D
pub const YELLOW: Rgba = Rgba::new(0.984, 0.753, 0.176, 1.0);
/// lime #7CB342
pub const LIME: Rgba = Rgba::new(0.486, 0.702, 0.259, 1.0);
/// kelly #43A047
pub const KELLY: Rgba = Rgba::new(0.263, 0.627, 0.278, 1.0);
/// forest #2E7D32
pub const FOREST: Rgba = Rgba::new(0.18, 0.49, 0.196, 1.0);
/// cyan #0097A7
pub const CYAN: Rgba = Rgba::new(0.0, 0.592, 0.655, 1.0);
/// blue #1E88E5
pub const BLUE: Rgba = Rgba::new(0.118, 0.533, 0.898, 1.0);
/// navy #2540A0
pub const NAVY: Rgba = Rgba::new(0.145, 0.251, 0.627, 1.0);
/// violet #8E24AA
pub const VIOLET: Rgba = Rgba::new(0.557, 0.141, 0.667, 1.0);
/// umber #5D4037
pub const UMBER: Rgba = Rgba::new(0.365, 0.251, 0.216, 1.0);
/// silver #E0E0E0
pub const SILVER: Rgba = Rgba::new(0.878, 0.878, 0.878, 1.0);
/// jet #424242
pub const JET: Rgba = Rgba::new(0.259, 0.259, 0.259, 1.0);
/// onyx #000000
pub const ONYX: Rgba = Rgba::new(0.0, 0.0, 0.0, 1.0);

/// Deluxe palette with 16 colors.
pub const DELUXE16: Palette = Palette {
    name: Cow::Borrowed("Deluxe 16"),
    colors: Cow::Borrowed(&[
        RED,
        AUBURN,
        MAGENTA,
        ORANGE,
        YELLOW,
        LIME,
        KELLY,
        FOREST,
        CYAN,
        BLUE,
        NAVY,
        VIOLET,
        UMBER,
        SILVER,
        JET,
        ONYX,
    ]),
    names: Cow::Borrowed(&[
        Cow::Borrowed("red"),
        Cow::Borrowed("auburn"),
        Cow::Borrowed("magenta"),
        Cow::Borrowed("orange"),
        Cow::Borrowed("yellow"),
        Cow::Borrowed("lime"),
        Cow::Borrowed("kelly"),
        Cow::Borrowed("forest"),
        Cow::Borrowed("cyan"),
        Cow::Borrowed("blue"),
        Cow::Borrowed("navy"),
        Cow::Borrowed("violet"),
        Cow::Borrowed("umber"),
        Cow::Borrowed("silver"),
        Cow::Borrowed("jet"),
        Cow::Borrowed("onyx"),
    ]),
};
