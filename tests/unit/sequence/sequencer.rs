use super::*;
use crate::catalog::shape::ShapeKind;
use crate::catalog::transform::Catalog;
use crate::config::model::CatalogDef;
use crate::foundation::core::Rgb8;
use crate::sample::model::ShapePair;

const BLUE: Rgb8 = Rgb8::new(70, 130, 180);
const RED: Rgb8 = Rgb8::new(220, 20, 60);

fn scenario_sample() -> Sample {
    let cat = Catalog::from_def(&CatalogDef {
        shapes: vec![ShapeKind::Circle, ShapeKind::Square],
        color_pairs: Some(vec![("blue".to_owned(), "red".to_owned())]),
        scale_pairs: Some(vec![("small".to_owned(), "large".to_owned())]),
        ..CatalogDef::default()
    })
    .unwrap();
    Sample::new(
        ShapePair {
            example: ShapeKind::Circle,
            question: ShapeKind::Square,
        },
        cat.transformation(0, 0),
    )
    .unwrap()
}

fn anim(n: u32) -> AnimationConfig {
    AnimationConfig {
        frames_per_phase: n,
        ..AnimationConfig::default()
    }
}

#[test]
fn scenario_yields_52_frames_in_phase_order() {
    let s = scenario_sample();
    let frames: Vec<_> = sequence_frames(&s, &anim(25)).collect();
    assert_eq!(frames.len(), 52);

    assert_eq!(frames[0].phase, Phase::Setup);
    for f in &frames[1..26] {
        assert_eq!(f.phase, Phase::Color);
    }
    for f in &frames[26..51] {
        assert_eq!(f.phase, Phase::Scale);
    }
    assert_eq!(frames[51].phase, Phase::Final);

    for (i, f) in frames.iter().enumerate() {
        assert_eq!(f.index, FrameIndex(i as u64));
    }
    for (i, f) in frames[1..26].iter().enumerate() {
        assert_eq!(f.step, i as u32);
    }
}

#[test]
fn scenario_setup_and_final_frames() {
    let s = scenario_sample();
    let frames: Vec<_> = sequence_frames(&s, &anim(25)).collect();

    let first = &frames[0];
    assert_eq!(first.slot, Slot::D);
    assert_eq!(
        (first.shape, first.color, first.scale),
        (ShapeKind::Square, BLUE, 0.8)
    );
    assert_eq!(first.board.get(Slot::E), Cell::Unknown);
    assert_eq!(first.board.get(Slot::F), Cell::Unknown);
    assert_eq!(first.board.get(Slot::C), Cell::Shape(s.state(Slot::C)));

    let last = &frames[51];
    assert_eq!(last.slot, Slot::F);
    assert_eq!(
        (last.shape, last.color, last.scale),
        (ShapeKind::Square, RED, 1.3)
    );
    assert_eq!(last.board, Board::resolved(&s));
}

#[test]
fn color_phase_interpolates_at_fixed_start_scale() {
    let s = scenario_sample();
    let frames: Vec<_> = sequence_frames(&s, &anim(25)).collect();
    let color = &frames[1..26];

    assert_eq!(color[0].color, BLUE);
    assert_eq!(color[24].color, RED);
    assert_eq!(color[12].color, BLUE.lerp(RED, 0.5));
    for f in color {
        assert_eq!(f.slot, Slot::E);
        assert_eq!(f.scale, 0.8);
        assert_eq!(f.board.get(Slot::E), Cell::Shape(f.focus()));
        assert_eq!(f.board.get(Slot::F), Cell::Unknown);
    }
    // Red channel rises monotonically from 70 to 220.
    for w in color.windows(2) {
        assert!(w[0].color.r <= w[1].color.r);
    }
}

#[test]
fn scale_phase_interpolates_at_fixed_end_color() {
    let s = scenario_sample();
    let frames: Vec<_> = sequence_frames(&s, &anim(25)).collect();
    let scale = &frames[26..51];

    assert_eq!(scale[0].scale, 0.8);
    assert_eq!(scale[24].scale, 1.3);
    for f in scale {
        assert_eq!(f.slot, Slot::F);
        assert_eq!(f.color, RED);
        assert_eq!(f.board.get(Slot::E), Cell::Shape(s.state(Slot::E)));
        assert!(f.scale >= 0.8 && f.scale <= 1.3);
    }
    for w in scale.windows(2) {
        assert!(w[0].scale < w[1].scale);
    }
}

#[test]
fn repeated_sequencing_is_identical() {
    let s = scenario_sample();
    let a: Vec<_> = sequence_frames(&s, &anim(25)).collect();
    let b: Vec<_> = sequence_frames(&s, &anim(25)).collect();
    assert_eq!(a, b);
    for (x, y) in a.iter().zip(&b) {
        assert_eq!(x.scale.to_bits(), y.scale.to_bits());
        assert_eq!(x.progress.to_bits(), y.progress.to_bits());
    }
}

#[test]
fn single_frame_phases_land_on_end_state() {
    let s = scenario_sample();
    for n in [0, 1] {
        let frames: Vec<_> = sequence_frames(&s, &anim(n)).collect();
        assert_eq!(frames.len(), 4, "n = {n}");
        assert_eq!(frames[1].phase, Phase::Color);
        assert_eq!(frames[1].color, RED);
        assert_eq!(frames[1].progress, 1.0);
        assert_eq!(frames[2].phase, Phase::Scale);
        assert_eq!(frames[2].scale, 1.3);
    }
}

#[test]
fn length_formula_and_exact_size() {
    let s = scenario_sample();
    for n in [2u32, 3, 10, 25] {
        let mut seq = sequence_frames(&s, &anim(n));
        assert_eq!(seq.total_frames(), 2 + 2 * u64::from(n));
        assert_eq!(seq.len(), (2 + 2 * n) as usize);
        seq.next();
        assert_eq!(seq.len(), (1 + 2 * n) as usize);
        assert_eq!(seq.count(), (1 + 2 * n) as usize);
    }
}

#[test]
fn exhausted_sequence_stays_exhausted() {
    let s = scenario_sample();
    let mut seq = sequence_frames(&s, &anim(2));
    for _ in 0..6 {
        assert!(seq.next().is_some());
    }
    assert!(seq.next().is_none());
    assert!(seq.next().is_none());
}

#[test]
fn easing_keeps_phase_endpoints() {
    let s = scenario_sample();
    let cfg = AnimationConfig {
        frames_per_phase: 9,
        ease: Ease::InOutCubic,
        ..AnimationConfig::default()
    };
    let frames: Vec<_> = sequence_frames(&s, &cfg).collect();
    assert_eq!(frames[1].color, BLUE);
    assert_eq!(frames[9].color, RED);
    assert_eq!(frames[10].scale, 0.8);
    assert_eq!(frames[18].scale, 1.3);
    // Cubic ease-in/out starts slower than linear.
    assert!(frames[2].progress < 1.0 / 8.0);
}
