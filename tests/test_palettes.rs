use deluxe_palette::palettes::{DELUXE08, DELUXE64, deluxe08, deluxe64};
use deluxe_palette::{
    NotFoundError, Palette, PaletteId, Rgba, colors, create_palette, deluxe_palettes, get_color,
    index_of, names,
};
use std::borrow::Cow;

fn approx(a: Rgba, b: [f32; 4]) -> bool {
    a.as_array()
        .iter()
        .zip(b.iter())
        .all(|(x, y)| (x - y).abs() < 0.001)
}

#[test]
fn test_sizes() {
    for id in PaletteId::ALL {
        assert_eq!(colors(id).len(), id.size(), "{}", id);
        assert_eq!(names(id).len(), id.size(), "{}", id);
        assert_eq!(id.palette().len(), id.size());
        assert_eq!(PaletteId::from_size(id.size()), Some(id));
    }
    assert_eq!(PaletteId::from_size(12), None);
}

#[test]
fn test_parallel() {
    for id in PaletteId::ALL {
        for (i, name) in names(id).iter().enumerate() {
            assert_eq!(get_color(id, name), Ok(colors(id)[i]), "{} {}", id, name);
            assert_eq!(index_of(id, name), Ok(i), "{} {}", id, name);
        }
    }
}

#[test]
fn test_range() {
    for id in PaletteId::ALL {
        for c in colors(id) {
            assert!(c.is_normalized(), "{} {:?}", id, c);
        }
    }
}

#[test]
fn test_unique_names() {
    for id in PaletteId::ALL {
        let n = names(id);
        for i in 0..n.len() {
            assert!(!n[i + 1..].contains(&n[i]), "{} duplicate {}", id, n[i]);
        }
    }
}

#[test]
fn test_not_found() {
    for id in PaletteId::ALL {
        assert_eq!(
            get_color(id, "nonexistent-name"),
            Err(NotFoundError::new(id.name(), "nonexistent-name"))
        );
        assert!(index_of(id, "nonexistent-name").is_err());
        assert_eq!(id.palette().try_color("nonexistent-name"), None);
    }

    let err = get_color(PaletteId::Deluxe08, "navy").expect_err("not in 8");
    assert_eq!(
        err.to_string(),
        "color \"navy\" not found in palette \"Deluxe 08\""
    );
}

#[test]
fn test_deluxe08() {
    let n: Vec<&str> = names(PaletteId::Deluxe08)
        .iter()
        .map(|v| v.as_ref())
        .collect();
    assert_eq!(
        n,
        [
            "red", "yellow", "kelly", "blue", "violet", "umber", "silver", "onyx"
        ]
    );

    let c = colors(PaletteId::Deluxe08);
    assert!(approx(c[0], [0.898, 0.224, 0.208, 1.0]));
    assert!(approx(c[7], [0.0, 0.0, 0.0, 1.0]));

    assert_eq!(c[0], deluxe08::RED);
    assert_eq!(DELUXE08.color("onyx"), Ok(deluxe08::ONYX));
}

#[test]
fn test_deluxe64() {
    let n = names(PaletteId::Deluxe64);
    assert_eq!(n.len(), 64);
    assert_eq!(n[63], "magenta-06");
    assert!(approx(colors(PaletteId::Deluxe64)[63], [0.831, 0.055, 0.251, 1.0]));

    // suffixed names are kept as they are.
    for v in ["navy", "navy-02", "navy-03", "navy-04", "navy-05", "peach blush"] {
        assert!(DELUXE64.try_index_of(v).is_some(), "{}", v);
    }
    assert_eq!(DELUXE64.color("sea green-02"), Ok(deluxe64::SEA_GREEN_02));
}

#[test]
fn test_registry() {
    let all = deluxe_palettes();
    assert_eq!(all.len(), PaletteId::LEN);
    for name in all {
        let pal = create_palette(name).expect("palette");
        assert_eq!(pal.name, name);
        let id = PaletteId::from_name(name).expect("id");
        assert_eq!(&pal, id.palette());
    }
    assert!(create_palette("Deluxe 12").is_none());
    assert_eq!(PaletteId::from_name("deluxe 08"), None);
}

#[test]
fn test_mismatched_lists() {
    let pal = Palette {
        name: Cow::Borrowed("broken"),
        colors: Cow::Owned(vec![Rgba::rgb(1.0, 0.0, 0.0)]),
        names: Cow::Owned(vec![Cow::Borrowed("a"), Cow::Borrowed("b")]),
    };
    assert_eq!(pal.try_color("a"), Some(Rgba::rgb(1.0, 0.0, 0.0)));
    assert_eq!(pal.try_color("b"), None);
    assert!(pal.color("b").is_err());
    assert_eq!(pal.iter().len(), 1);
    assert_eq!(pal.iter().count(), 1);
}

#[test]
fn test_iter() {
    let pal = PaletteId::Deluxe16.palette();
    assert_eq!(pal.iter().len(), 16);
    for (i, c) in pal.iter().enumerate() {
        assert_eq!(c.name, pal.names()[i]);
        assert_eq!(c.color, pal.colors()[i]);
    }
    assert!(pal.get(16).is_none());
}
