use anyhow::Error;
use deluxe_palette::palettes::DELUXE08;
use deluxe_palette::{Palette, PaletteId, Rgba, load_palette, store_palette};
use std::borrow::Cow;

#[test]
fn store_load() -> Result<(), Error> {
    for id in PaletteId::ALL {
        let mut buf = Vec::new();
        store_palette(id.palette(), &mut buf)?;
        let pal = load_palette(buf.as_slice())?;
        assert_eq!(&pal, id.palette());
    }
    Ok(())
}

#[test]
fn store_format() -> Result<(), Error> {
    let mut buf = Vec::new();
    store_palette(&DELUXE08, &mut buf)?;
    let txt = String::from_utf8(buf)?;

    let mut lines = txt.lines();
    assert_eq!(lines.next(), Some("[palette]"));
    assert_eq!(lines.next(), Some("name=Deluxe 08"));
    assert_eq!(lines.next(), Some("size=8"));
    assert_eq!(lines.next(), Some(""));
    assert_eq!(lines.next(), Some("[color]"));
    assert_eq!(lines.next(), Some("red=0.898, 0.224, 0.208, 1"));
    assert_eq!(lines.last(), Some("onyx=0, 0, 0, 1"));
    Ok(())
}

#[test]
fn load_handwritten() -> Result<(), Error> {
    let txt = "\
# two colors
[palette]
name=Tiny

[color]
sea green = 0.0, 0.5, 0.25
half-white=1, 1, 1, 0.5
";
    let pal = load_palette(txt.as_bytes())?;
    assert_eq!(pal.name, "Tiny");
    assert_eq!(pal.len(), 2);
    assert_eq!(pal.color("sea green")?, Rgba::new(0.0, 0.5, 0.25, 1.0));
    assert_eq!(pal.index_of("half-white")?, 1);
    Ok(())
}

#[test]
fn load_failures() {
    let bad = [
        "",
        "[color]\nred=1,0,0\n",
        "[palette]\nname=x\n",
        "[palette]\nfoo=bar\n[color]\n",
        "[palette]\nsize=x\n[color]\n",
        "[palette]\n[color]\nred=1,0\n",
        "[palette]\n[color]\nred=1,0,0,1,1\n",
        "[palette]\n[color]\nred=1,0,x\n",
        "[palette]\n[color]\nred=2,0,0\n",
        "[palette]\n[color]\nred=1,0,0\nred=0,1,0\n",
        "[palette]\n[color]\nred\n",
        "[palette]\n[color]\n=1,0,0\n",
        "[palette]\nsize=3\n[color]\nred=1,0,0\n",
    ];
    for txt in bad {
        assert!(load_palette(txt.as_bytes()).is_err(), "{:?}", txt);
    }
}

#[test]
fn store_invalid() {
    let pal = Palette {
        name: Cow::Borrowed("broken"),
        colors: Cow::Owned(vec![Rgba::new(0.0, 0.0, 0.0, 1.0)]),
        names: Cow::Owned(Vec::new()),
    };
    assert!(store_palette(&pal, Vec::new()).is_err());

    let pal = Palette::from_entries("ok", [("a", Rgba::rgb(0.0, 0.0, 0.0))]);
    assert!(store_palette(&pal, Vec::new()).is_ok());

    for name in [" pad", "pad ", "#hash", "a=b", "x\ny", "x\ry"] {
        let pal = Palette::from_entries("p", [(name, Rgba::rgb(0.5, 0.5, 0.5))]);
        assert!(store_palette(&pal, Vec::new()).is_err(), "{:?}", name);
    }
    for name in [" p", "p\n", "a\nb"] {
        let pal = Palette::from_entries(name, [("a", Rgba::rgb(0.5, 0.5, 0.5))]);
        assert!(store_palette(&pal, Vec::new()).is_err(), "{:?}", name);
    }
}

#[test]
fn store_load_odd_names() -> Result<(), Error> {
    let pal = Palette::from_entries(
        "Odd = names #1",
        [
            ("sea green-02", Rgba::rgb(0.0, 0.5, 0.25)),
            ("a#b", Rgba::new(1.0, 1.0, 1.0, 0.5)),
        ],
    );
    let mut buf = Vec::new();
    store_palette(&pal, &mut buf)?;
    assert_eq!(load_palette(buf.as_slice())?, pal);
    Ok(())
}
