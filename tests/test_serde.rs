use anyhow::Error;
use deluxe_palette::palettes::{DELUXE08, DELUXE64};
use deluxe_palette::{Palette, PaletteId};

#[test]
fn write_palette() -> Result<(), Error> {
    for p in [DELUXE08, DELUXE64] {
        let json = serde_json::to_string_pretty(&p)?;
        eprintln!("{}", json);
        let pp: Palette = serde_json::from_str(&json)?;
        assert_eq!(p, pp);
    }
    Ok(())
}

#[test]
fn palette_shape() -> Result<(), Error> {
    let v = serde_json::to_value(&DELUXE08)?;
    assert_eq!(v["name"], "Deluxe 08");
    assert_eq!(v["names"][0], "red");
    assert_eq!(v["colors"].as_array().map(|v| v.len()), Some(8));
    assert_eq!(v["colors"][7], serde_json::json!([0.0, 0.0, 0.0, 1.0]));
    Ok(())
}

#[test]
fn write_id() -> Result<(), Error> {
    let json = serde_json::to_string(&PaletteId::Deluxe32)?;
    let id: PaletteId = serde_json::from_str(&json)?;
    assert_eq!(id, PaletteId::Deluxe32);
    Ok(())
}

#[test]
fn reject_invalid() {
    let bad = [
        r#"{"name":"x","colors":[[1,0,0,1]],"names":["a","b"]}"#,
        r#"{"name":"x","colors":[[1,0,0,1],[0,1,0,1]],"names":["a"]}"#,
        r#"{"name":"x","colors":[[7.0,-1.0,0,1]],"names":["a"]}"#,
        r#"{"name":"x","colors":[[1,0,0,1],[0,1,0,1]],"names":["a","a"]}"#,
        r#"{"name":"x","colors":[[1,0,0,1]],"names":[""]}"#,
    ];
    for json in bad {
        assert!(serde_json::from_str::<Palette>(json).is_err(), "{}", json);
    }

    let pal: Palette =
        serde_json::from_str(r#"{"name":"x","colors":[[1,0,0,1]],"names":["a"]}"#).expect("ok");
    assert_eq!(pal.len(), 1);
}
