use crate::palette::Palette;
use crate::rgba::Rgba;
use std::borrow::Cow;

/// red #E53935
pub const RED: Rgba = Rgba::new(0.898, 0.224, 0.208, 1.0);
/// auburn #8E3B3B
pub const AUBURN: Rgba = Rgba::new(0.557, 0.231, 0.231, 1.0);
/// magenta #D81B60
pub const MAGENTA: Rgba = Rgba::new(0.847, 0.106, 0.376, 1.0);
/// pink #F06292
pub const PINK: Rgba = Rgba::new(0.941, 0.384, 0.573, 1.0);
/// orange #FB8C00
pub const ORANGE: Rgba = Rgba::new(0.984, 0.549, 0.0, 1.0);
/// ginger #C77800
pub const GINGER: Rgba = Rgba::new(0.78, 0.471, 0.0, 1.0);
/// dorado #C69C1A
pub const DORADO: Rgba = Rgba::new(0.776, 0.612, 0.102, 1.0);
/// ochre #D4A03D
pub const OCHRE: Rgba = Rgba::new(0.831, 0.627, 0.239, 1.0);
/// yellow #FBC02D
pub const YELLOW: Rgba = Rgba::new(0.984, 0.753, 0.176, 1.0);
/// chartreuse #C0CA33
pub const CHARTREUSE: Rgba = Rgba::new(0.753, 0.792, 0.2, 1.0);
/// lime #7CB342
pub const LIME: Rgba = Rgba::new(0.486, 0.702, 0.259, 1.0);
/// kelly #43A047
pub const KELLY: Rgba = Rgba::new(0.263, 0.627, 0.278, 1.0);
/// forest #2E7D32
pub const FOREST: Rgba = Rgba::new(0.18, 0.49, 0.196, 1.0);
/// teal #00897B
pub const TEAL: Rgba = Rgba::new(0.0, 0.537, 0.482, 1.0);
/// cyan #0097A7
pub const CYAN: Rgba = Rgba::new(0.0, 0.592, 0.655, 1.0);
/// sky #5EA9FF
pub const SKY: Rgba = Rgba::new(0.369, 0.663, 1.0, 1.0);
/// blue #1E88E5
pub const BLUE: Rgba = Rgba::new(0.118, 0.533, 0.898, 1.0);
/// ultramarine #3749B6
pub const ULTRAMARINE: Rgba = Rgba::new(0.216, 0.286, 0.714, 1.0);
/// navy #2540A0
pub const NAVY: Rgba = Rgba::new(0.145, 0.251, 0.627, 1.0);
/// violet #8E24AA
pub const VIOLET: Rgba = Rgba::new(0.557, 0.141, 0.667, 1.0);
/// umber #5D4037
pub const UMBER: Rgba = Rgba::new(0.365, 0.251, 0.216, 1.0);
/// peach blush #F3C6B8
pub const PEACH_BLUSH: Rgba = Rgba::new(0.953, 0.776, 0.722, 1.0);
/// white #FFFFFF
pub const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);
/// silver #E0E0E0
pub const SILVER: Rgba = Rgba::new(0.878, 0.878, 0.878, 1.0);
/// ash #9E9E9E
pub const ASH: Rgba = Rgba::new(0.62, 0.62, 0.62, 1.0);
/// jet #424242
pub const JET: Rgba = Rgba::new(0.259, 0.259, 0.259, 1.0);
/// onyx #000000
pub const ONYX: Rgba = Rgba::new(0.0, 0.0, 0.0, 1.0);
/// navy-02 #461E98
pub const NAVY_02: Rgba = Rgba::new(0.275, 0.118, 0.596, 1.0);
/// sea green #20794A
pub const SEA_GREEN: Rgba = Rgba::new(0.125, 0.475, 0.29, 1.0);
/// magenta-02 #D234B0
pub const MAGENTA_02: Rgba = Rgba::new(0.824, 0.204, 0.69, 1.0);
/// green #4C8D37
pub const GREEN: Rgba = Rgba::new(0.298, 0.553, 0.216, 1.0);
/// purple #6919A8
pub const PURPLE: Rgba = Rgba::new(0.412, 0.098, 0.659, 1.0);

/// Deluxe palette with 32 colors.
pub const DELUXE32: Palette = Palette {
    name: Cow::Borrowed("Deluxe 32"),
    colors: Cow::Borrowed(&[
        RED,
        AUBURN,
        MAGENTA,
        PINK,
        ORANGE,
        GINGER,
        DORADO,
        OCHRE,
        YELLOW,
        CHARTREUSE,
        LIME,
        KELLY,
        FOREST,
        TEAL,
        CYAN,
        SKY,
        BLUE,
        ULTRAMARINE,
        NAVY,
        VIOLET,
        UMBER,
        PEACH_BLUSH,
        WHITE,
        SILVER,
        ASH,
        JET,
        ONYX,
        NAVY_02,
        SEA_GREEN,
        MAGENTA_02,
        GREEN,
        PURPLE,
    ]),
    names: Cow::Borrowed(&[
        Cow::Borrowed("red"),
        Cow::Borrowed("auburn"),
        Cow::Borrowed("magenta"),
        Cow::Borrowed("pink"),
        Cow::Borrowed("orange"),
        Cow::Borrowed("ginger"),
        Cow::Borrowed("dorado"),
        Cow::Borrowed("ochre"),
        Cow::Borrowed("yellow"),
        Cow::Borrowed("chartreuse"),
        Cow::Borrowed("lime"),
        Cow::Borrowed("kelly"),
        Cow::Borrowed("forest"),
        Cow::Borrowed("teal"),
        Cow::Borrowed("cyan"),
        Cow::Borrowed("sky"),
        Cow::Borrowed("blue"),
        Cow::Borrowed("ultramarine"),
        Cow::Borrowed("navy"),
        Cow::Borrowed("violet"),
        Cow::Borrowed("umber"),
        Cow::Borrowed("peach blush"),
        Cow::Borrowed("white"),
        Cow::Borrowed("silver"),
        Cow::Borrowed("ash"),
        Cow::Borrowed("jet"),
        Cow::Borrowed("onyx"),
        Cow::Borrowed("navy-02"),
        Cow::Borrowed("sea green"),
        Cow::Borrowed("magenta-02"),
        Cow::Borrowed("green"),
        Cow::Borrowed("purple"),
    ]),
};
