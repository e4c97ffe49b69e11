use super::*;

fn scenario_def() -> CatalogDef {
    CatalogDef {
        shapes: vec![ShapeKind::Circle, ShapeKind::Square],
        color_pairs: Some(vec![("blue".to_owned(), "red".to_owned())]),
        scale_pairs: Some(vec![("small".to_owned(), "large".to_owned())]),
        ..CatalogDef::default()
    }
}

#[test]
fn default_catalog_pairs_are_never_noops() {
    let cat = Catalog::from_def(&CatalogDef::default()).unwrap();
    assert_eq!(cat.shapes().len(), 10);
    // 13 colors and 6 scales, every ordered pair of distinct entries.
    assert_eq!(cat.color_pairs().len(), 13 * 12);
    assert_eq!(cat.scale_pairs().len(), 6 * 5);
    for t in cat.transformations() {
        assert_ne!(t.start_color(), t.end_color());
        assert_ne!(t.start_scale(), t.end_scale());
    }
    assert_eq!(cat.transformation_count(), 156 * 30);
    assert_eq!(cat.combination_count(), 10 * 9 * 156 * 30);
}

#[test]
fn explicit_pairs_are_resolved_by_name() {
    let cat = Catalog::from_def(&scenario_def()).unwrap();
    assert_eq!(cat.transformation_count(), 1);
    let t = cat.transformation(0, 0);
    assert_eq!(t.color.start.name, "blue");
    assert_eq!(t.end_color(), Rgb8::new(220, 20, 60));
    assert_eq!(t.start_scale(), 0.8);
    assert_eq!(t.end_scale(), 1.3);
    assert_eq!(t.description(), "Step 1: blue → red, Step 2: small → large");
}

#[test]
fn derived_pairs_skip_equal_values() {
    let def = CatalogDef {
        colors: vec![
            NamedColor::new("red", Rgb8::new(220, 20, 60)),
            NamedColor::new("crimson", Rgb8::new(220, 20, 60)),
            NamedColor::new("navy", Rgb8::new(0, 0, 128)),
        ],
        ..CatalogDef::default()
    };
    let cat = Catalog::from_def(&def).unwrap();
    // red<->navy and crimson<->navy only.
    assert_eq!(cat.color_pairs().len(), 4);
}

#[test]
fn rejects_small_or_duplicate_shape_catalogs() {
    let one = CatalogDef {
        shapes: vec![ShapeKind::Circle],
        ..CatalogDef::default()
    };
    assert!(matches!(
        Catalog::from_def(&one),
        Err(TwostepError::Config(_))
    ));

    let dup = CatalogDef {
        shapes: vec![ShapeKind::Circle, ShapeKind::Circle],
        ..CatalogDef::default()
    };
    assert!(Catalog::from_def(&dup).is_err());
}

#[test]
fn rejects_single_color_or_scale() {
    let def = CatalogDef {
        colors: vec![NamedColor::new("blue", Rgb8::new(70, 130, 180))],
        ..CatalogDef::default()
    };
    assert!(Catalog::from_def(&def).is_err());

    let def = CatalogDef {
        scales: vec![NamedScale::new("small", 0.8)],
        ..CatalogDef::default()
    };
    assert!(Catalog::from_def(&def).is_err());
}

#[test]
fn rejects_noop_and_unknown_pairs() {
    let noop = CatalogDef {
        color_pairs: Some(vec![("blue".to_owned(), "blue".to_owned())]),
        ..CatalogDef::default()
    };
    let err = Catalog::from_def(&noop).unwrap_err();
    assert!(err.to_string().contains("no-op"));

    let noop_scale = CatalogDef {
        scale_pairs: Some(vec![("large".to_owned(), "large".to_owned())]),
        ..CatalogDef::default()
    };
    assert!(Catalog::from_def(&noop_scale).is_err());

    let unknown = CatalogDef {
        color_pairs: Some(vec![("blue".to_owned(), "chartreuse".to_owned())]),
        ..CatalogDef::default()
    };
    let err = Catalog::from_def(&unknown).unwrap_err();
    assert!(err.to_string().contains("chartreuse"));
}

#[test]
fn rejects_empty_explicit_pair_list() {
    let def = CatalogDef {
        scale_pairs: Some(vec![]),
        ..CatalogDef::default()
    };
    assert!(Catalog::from_def(&def).is_err());
}

#[test]
fn rejects_bad_scale_factors() {
    for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let def = CatalogDef {
            scales: vec![NamedScale::new("a", 1.0), NamedScale::new("b", bad)],
            ..CatalogDef::default()
        };
        assert!(Catalog::from_def(&def).is_err(), "accepted {bad}");
    }
}

#[test]
fn rejects_all_identical_colors() {
    let def = CatalogDef {
        colors: vec![
            NamedColor::new("a", Rgb8::new(1, 2, 3)),
            NamedColor::new("b", Rgb8::new(1, 2, 3)),
        ],
        ..CatalogDef::default()
    };
    let err = Catalog::from_def(&def).unwrap_err();
    assert!(err.to_string().contains("empty"));
}
