//!
//! Allows load/store to an ini-style format.
//! Serde for Palette is supported as well.
//!

use crate::error::LoadPaletteErr;
use crate::palette::Palette;
use crate::rgba::Rgba;
use log::debug;
use std::borrow::Cow;
use std::io;

/// Store a Palette as a .pal file.
pub fn store_palette(pal: &Palette, mut buf: impl io::Write) -> Result<(), io::Error> {
    if let Err(e) = pal.verify().and_then(|_| verify_storable(pal)) {
        return Err(io::Error::other(LoadPaletteErr(e)));
    }

    debug!("store palette {:?}", pal.name);

    writeln!(buf, "[palette]")?;
    writeln!(buf, "name={}", pal.name)?;
    writeln!(buf, "size={}", pal.len())?;
    writeln!(buf)?;
    writeln!(buf, "[color]")?;
    for c in pal.iter() {
        writeln!(
            buf,
            "{}={}, {}, {}, {}",
            c.name, c.color.r, c.color.g, c.color.b, c.color.a
        )?;
    }
    Ok(())
}

/// Load a .pal file as a Palette.
pub fn load_palette(mut r: impl io::Read) -> Result<Palette, io::Error> {
    let mut buf = String::new();
    r.read_to_string(&mut buf)?;

    enum S {
        Start,
        Palette,
        Color,
        Fail(String),
    }

    let mut name = String::new();
    let mut size = None;
    let mut colors = Vec::new();
    let mut names = Vec::new();

    let mut state = S::Start;
    'm: for l in buf.lines() {
        let l = l.trim();
        match state {
            S::Start => {
                if l.is_empty() || l.starts_with("#") {
                    // ok
                } else if l == "[palette]" {
                    state = S::Palette;
                } else {
                    state = S::Fail("No a valid pal-file".to_string());
                    break 'm;
                }
            }
            S::Palette => {
                if l == "[color]" {
                    state = S::Color;
                } else if l.is_empty() || l.starts_with("#") {
                    // ok
                } else if let Some((k, v)) = l.split_once('=') {
                    match k.trim() {
                        "name" => {
                            name = v.trim().to_string();
                        }
                        "size" => {
                            let Ok(v) = v.trim().parse::<usize>() else {
                                state = S::Fail(format!("Invalid size {:?}", l));
                                break 'm;
                            };
                            size = Some(v);
                        }
                        _ => {
                            state = S::Fail(format!("Invalid palette property {:?}", l));
                            break 'm;
                        }
                    }
                } else {
                    state = S::Fail(format!("Invalid palette property {:?}", l));
                    break 'm;
                }
            }
            S::Color => {
                if l.is_empty() || l.starts_with("#") {
                    // ok
                } else if let Some((k, v)) = l.split_once('=') {
                    let cn = k.trim();
                    if cn.is_empty() {
                        state = S::Fail(format!("Missing color name {:?}", l));
                        break 'm;
                    }
                    let Some(c) = parse_channels(v) else {
                        state = S::Fail(format!("Invalid color {:?}", l));
                        break 'm;
                    };
                    names.push(Cow::Owned(cn.to_string()));
                    colors.push(c);
                } else {
                    state = S::Fail(format!("Invalid property format {:?}", l));
                    break 'm;
                }
            }
            S::Fail(_) => {
                unreachable!()
            }
        }
    }

    match state {
        S::Fail(n) => Err(io::Error::other(LoadPaletteErr(n))),
        S::Start => Err(io::Error::other(LoadPaletteErr(
            "Missing [palette]. Invalid format or truncated.".to_string(),
        ))),
        S::Palette => Err(io::Error::other(LoadPaletteErr(
            "Missing [color]. Invalid format or truncated.".to_string(),
        ))),
        S::Color => {
            if let Some(size) = size {
                if size != colors.len() {
                    return Err(io::Error::other(LoadPaletteErr(format!(
                        "Palette declares {} colors but has {}",
                        size,
                        colors.len()
                    ))));
                }
            }

            let pal = Palette {
                name: Cow::Owned(name),
                colors: Cow::Owned(colors),
                names: Cow::Owned(names),
            };
            if let Err(e) = pal.verify() {
                return Err(io::Error::other(LoadPaletteErr(e)));
            }

            debug!("loaded palette {:?} with {} colors", pal.name, pal.len());
            Ok(pal)
        }
    }
}

/// Names must survive the line-based format unchanged.
fn verify_storable(pal: &Palette) -> Result<(), String> {
    if pal.name.contains(['\n', '\r']) || pal.name.trim() != pal.name {
        return Err(format!("Palette name can't be stored {:?}", pal.name));
    }
    for name in pal.names() {
        if name.contains(['\n', '\r', '='])
            || name.starts_with('#')
            || name.trim() != &**name
        {
            return Err(format!("Color name can't be stored {:?}", name));
        }
    }
    Ok(())
}

/// Parse `r, g, b[, a]`.
fn parse_channels(v: &str) -> Option<Rgba> {
    let mut c = [1f32; 4];
    let mut n = 0;
    for s in v.split(',') {
        if n == 4 {
            return None;
        }
        c[n] = s.trim().parse::<f32>().ok()?;
        n += 1;
    }
    if n < 3 {
        return None;
    }
    Some(Rgba::from(c))
}
