use super::*;
use crate::catalog::transform::Catalog;
use crate::config::model::CatalogDef;

fn blue_red_small_large() -> TransformationSpec {
    let def = CatalogDef {
        color_pairs: Some(vec![("blue".to_owned(), "red".to_owned())]),
        scale_pairs: Some(vec![("small".to_owned(), "large".to_owned())]),
        ..CatalogDef::default()
    };
    Catalog::from_def(&def).unwrap().transformation(0, 0)
}

#[test]
fn rejects_identical_shapes() {
    let pair = ShapePair {
        example: ShapeKind::Star,
        question: ShapeKind::Star,
    };
    assert!(Sample::new(pair, blue_red_small_large()).is_err());
}

#[test]
fn derived_states_follow_color_then_scale() {
    let s = Sample::new(
        ShapePair {
            example: ShapeKind::Circle,
            question: ShapeKind::Square,
        },
        blue_red_small_large(),
    )
    .unwrap();

    let blue = Rgb8::new(70, 130, 180);
    let red = Rgb8::new(220, 20, 60);

    let a = s.state(Slot::A);
    assert_eq!((a.shape, a.color, a.scale), (ShapeKind::Circle, blue, 0.8));
    let b = s.state(Slot::B);
    assert_eq!((b.shape, b.color, b.scale), (ShapeKind::Circle, red, 0.8));
    let c = s.state(Slot::C);
    assert_eq!((c.shape, c.color, c.scale), (ShapeKind::Circle, red, 1.3));

    let d = s.state(Slot::D);
    assert_eq!((d.shape, d.color, d.scale), (ShapeKind::Square, blue, 0.8));
    let e = s.state(Slot::E);
    assert_eq!((e.shape, e.color, e.scale), (ShapeKind::Square, red, 0.8));
    let f = s.state(Slot::F);
    assert_eq!((f.shape, f.color, f.scale), (ShapeKind::Square, red, 1.3));
}

#[test]
fn slot_rows_and_columns() {
    assert_eq!((Slot::A.row(), Slot::A.column()), (0, 0));
    assert_eq!((Slot::C.row(), Slot::C.column()), (0, 2));
    assert_eq!((Slot::E.row(), Slot::E.column()), (1, 1));
    for (i, s) in Slot::ALL.iter().enumerate() {
        assert_eq!(s.index(), i);
    }
}
