use super::*;

fn default_layout() -> BoardLayout {
    BoardLayout::new(
        Canvas {
            width: 640,
            height: 400,
        },
        32,
    )
}

#[test]
fn default_geometry() {
    let l = default_layout();
    // step = (640 - 64) / 3 = 192, spacing = 153.6, arrow = 38.4
    assert_eq!(l.slot_center(Slot::A), Point::new(32.0 + 76.0, 133.0));
    assert_eq!(l.slot_center(Slot::D).y, 266.0);
    let b = l.slot_center(Slot::B);
    assert!((b.x - (32.0 + 153.6 + 38.4 + 76.0)).abs() < 1e-9);
}

#[test]
fn columns_and_arrows_interleave() {
    let l = default_layout();
    let [a1, a2, a3, a4] = l.arrow_centers();
    let xa = l.slot_center(Slot::A).x;
    let xb = l.slot_center(Slot::B).x;
    let xc = l.slot_center(Slot::C).x;
    assert!(xa < a1.x && a1.x < xb && xb < a2.x && a2.x < xc);
    assert!(xc < 640.0);
    assert_eq!(a1.x, a3.x);
    assert_eq!(a2.x, a4.x);
    assert!(a1.y < a3.y);
}

#[test]
fn rows_share_columns() {
    let l = default_layout();
    assert_eq!(l.slot_center(Slot::A).x, l.slot_center(Slot::D).x);
    assert_eq!(l.slot_center(Slot::C).x, l.slot_center(Slot::F).x);
}
