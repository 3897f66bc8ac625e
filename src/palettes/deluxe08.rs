use crate::palette::Palette;
use crate::rgba::Rgba;
use std::borrow::Cow;

/// red #E53935
pub const RED: Rgba = Rgba::new(0.898, 0.224, 0.208, 1.0);
/// yellow #FBC02D
pub const YELLOW: Rgba = Rgba::new(0.984, 0.753, 0.176, 1.0);
/// kelly #43A047
pub const KELLY: Rgba = Rgba::new(0.263, 0.627, 0.278, 1.0);
/// blue #1E88E5
pub const BLUE: Rgba = Rgba::new(0.118, 0.533, 0.898, 1.0);
/// violet #8E24AA
pub const VIOLET: Rgba = Rgba::new(0.557, 0.141, 0.667, 1.0);
/// umber #5D4037
pub const UMBER: Rgba = Rgba::new(0.365, 0.251, 0.216, 1.0);
/// silver #E0E0E0
pub const SILVER: Rgba = Rgba::new(0.878, 0.878, 0.878, 1.0);
/// onyx #000000
pub const ONYX: Rgba = Rgba::new(0.0, 0.0, 0.0, 1.0);

/// Deluxe palette with 8 colors.
///
/// The base set. Every larger deluxe palette starts out
/// with variants of these hues.
///
pub const DELUXE08: Palette = Palette {
    name: Cow::Borrowed("Deluxe 08"),
    colors: Cow::Borrowed(&[
        RED,
        YELLOW,
        KELLY,
        BLUE,
        VIOLET,
        UMBER,
        SILVER,
        ONYX,
    ]),
    names: Cow::Borrowed(&[
        Cow::Borrowed("red"),
        Cow::Borrowed("yellow"),
        Cow::Borrowed("kelly"),
        Cow::Borrowed("blue"),
        Cow::Borrowed("violet"),
        Cow::Borrowed("umber"),
        Cow::Borrowed("silver"),
        Cow::Borrowed("onyx"),
    ]),
};
