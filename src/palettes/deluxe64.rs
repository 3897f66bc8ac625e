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
/// navy-02 #401A90
pub const NAVY_02: Rgba = Rgba::new(0.251, 0.102, 0.565, 1.0);
/// sea green #24754A
pub const SEA_GREEN: Rgba = Rgba::new(0.141, 0.459, 0.29, 1.0);
/// magenta-02 #D141B3
pub const MAGENTA_02: Rgba = Rgba::new(0.82, 0.255, 0.702, 1.0);
/// green #478434
pub const GREEN: Rgba = Rgba::new(0.278, 0.518, 0.204, 1.0);
/// purple #6615A6
pub const PURPLE: Rgba = Rgba::new(0.4, 0.082, 0.651, 1.0);
/// indigo #544AB4
pub const INDIGO: Rgba = Rgba::new(0.329, 0.29, 0.706, 1.0);
/// sea green-02 #214D2D
pub const SEA_GREEN_02: Rgba = Rgba::new(0.129, 0.302, 0.176, 1.0);
/// sea green-03 #11805D
pub const SEA_GREEN_03: Rgba = Rgba::new(0.067, 0.502, 0.365, 1.0);
/// pink-02 #EA4BA7
pub const PINK_02: Rgba = Rgba::new(0.918, 0.294, 0.655, 1.0);
/// purple-02 #873587
pub const PURPLE_02: Rgba = Rgba::new(0.529, 0.208, 0.529, 1.0);
/// green-02 #94B147
pub const GREEN_02: Rgba = Rgba::new(0.58, 0.694, 0.278, 1.0);
/// cyan-02 #15B4F2
pub const CYAN_02: Rgba = Rgba::new(0.082, 0.706, 0.949, 1.0);
/// red-02 #BB1E39
pub const RED_02: Rgba = Rgba::new(0.733, 0.118, 0.224, 1.0);
/// vermillion #E19E71
pub const VERMILLION: Rgba = Rgba::new(0.882, 0.62, 0.443, 1.0);
/// yellow-02 #D0C550
pub const YELLOW_02: Rgba = Rgba::new(0.816, 0.773, 0.314, 1.0);
/// deep green #48762D
pub const DEEP_GREEN: Rgba = Rgba::new(0.282, 0.463, 0.176, 1.0);
/// green-03 #3B9C31
pub const GREEN_03: Rgba = Rgba::new(0.231, 0.612, 0.192, 1.0);
/// blue-02 #6990DA
pub const BLUE_02: Rgba = Rgba::new(0.412, 0.565, 0.855, 1.0);
/// navy-03 #3C3E85
pub const NAVY_03: Rgba = Rgba::new(0.235, 0.243, 0.522, 1.0);
/// navy-04 #51179B
pub const NAVY_04: Rgba = Rgba::new(0.318, 0.09, 0.608, 1.0);
/// purple-03 #9F17E0
pub const PURPLE_03: Rgba = Rgba::new(0.624, 0.09, 0.878, 1.0);
/// navy-05 #40346D
pub const NAVY_05: Rgba = Rgba::new(0.251, 0.204, 0.427, 1.0);
/// red-03 #984A3E
pub const RED_03: Rgba = Rgba::new(0.596, 0.29, 0.243, 1.0);
/// sea green-04 #318650
pub const SEA_GREEN_04: Rgba = Rgba::new(0.192, 0.525, 0.314, 1.0);
/// sea green-05 #0C5637
pub const SEA_GREEN_05: Rgba = Rgba::new(0.047, 0.337, 0.216, 1.0);
/// muted sea green #36563B
pub const MUTED_SEA_GREEN: Rgba = Rgba::new(0.212, 0.337, 0.231, 1.0);
/// cyan-03 #14AB8C
pub const CYAN_03: Rgba = Rgba::new(0.078, 0.671, 0.549, 1.0);
/// magenta-03 #C9186B
pub const MAGENTA_03: Rgba = Rgba::new(0.788, 0.094, 0.42, 1.0);
/// purple-04 #9523A2
pub const PURPLE_04: Rgba = Rgba::new(0.584, 0.137, 0.635, 1.0);
/// magenta-04 #B269AA
pub const MAGENTA_04: Rgba = Rgba::new(0.698, 0.412, 0.667, 1.0);
/// magenta-05 #C22F93
pub const MAGENTA_05: Rgba = Rgba::new(0.761, 0.184, 0.576, 1.0);
/// chartreuse-02 #A7BD3D
pub const CHARTREUSE_02: Rgba = Rgba::new(0.655, 0.741, 0.239, 1.0);
/// green-04 #A2CE5B
pub const GREEN_04: Rgba = Rgba::new(0.635, 0.808, 0.357, 1.0);
/// cyan-04 #0A5A5A
pub const CYAN_04: Rgba = Rgba::new(0.039, 0.353, 0.353, 1.0);
/// cerulean #2699DF
pub const CERULEAN: Rgba = Rgba::new(0.149, 0.6, 0.875, 1.0);
/// vivid cyan #11CDF8
pub const VIVID_CYAN: Rgba = Rgba::new(0.067, 0.804, 0.973, 1.0);
/// magenta-06 #D40E40
pub const MAGENTA_06: Rgba = Rgba::new(0.831, 0.055, 0.251, 1.0);

/// Deluxe palette with 64 colors.
///
/// Repeated hues carry a numeric suffix, "navy" .. "navy-05".
///
pub const DELUXE64: Palette = Palette {
    name: Cow::Borrowed("Deluxe 64"),
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
        INDIGO,
        SEA_GREEN_02,
        SEA_GREEN_03,
        PINK_02,
        PURPLE_02,
        GREEN_02,
        CYAN_02,
        RED_02,
        VERMILLION,
        YELLOW_02,
        DEEP_GREEN,
        GREEN_03,
        BLUE_02,
        NAVY_03,
        NAVY_04,
        PURPLE_03,
        NAVY_05,
        RED_03,
        SEA_GREEN_04,
        SEA_GREEN_05,
        MUTED_SEA_GREEN,
        CYAN_03,
        MAGENTA_03,
        PURPLE_04,
        MAGENTA_04,
        MAGENTA_05,
        CHARTREUSE_02,
        GREEN_04,
        CYAN_04,
        CERULEAN,
        VIVID_CYAN,
        MAGENTA_06,
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
        Cow::Borrowed("indigo"),
        Cow::Borrowed("sea green-02"),
        Cow::Borrowed("sea green-03"),
        Cow::Borrowed("pink-02"),
        Cow::Borrowed("purple-02"),
        Cow::Borrowed("green-02"),
        Cow::Borrowed("cyan-02"),
        Cow::Borrowed("red-02"),
        Cow::Borrowed("vermillion"),
        Cow::Borrowed("yellow-02"),
        Cow::Borrowed("deep green"),
        Cow::Borrowed("green-03"),
        Cow::Borrowed("blue-02"),
        Cow::Borrowed("navy-03"),
        Cow::Borrowed("navy-04"),
        Cow::Borrowed("purple-03"),
        Cow::Borrowed("navy-05"),
        Cow::Borrowed("red-03"),
        Cow::Borrowed("sea green-04"),
        Cow::Borrowed("sea green-05"),
        Cow::Borrowed("muted sea green"),
        Cow::Borrowed("cyan-03"),
        Cow::Borrowed("magenta-03"),
        Cow::Borrowed("purple-04"),
        Cow::Borrowed("magenta-04"),
        Cow::Borrowed("magenta-05"),
        Cow::Borrowed("chartreuse-02"),
        Cow::Borrowed("green-04"),
        Cow::Borrowed("cyan-04"),
        Cow::Borrowed("cerulean"),
        Cow::Borrowed("vivid cyan"),
        Cow::Borrowed("magenta-06"),
    ]),
};
