use super::*;
use crate::catalog::shape::ShapeKind;
use crate::config::model::CatalogDef;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::BTreeSet;

fn small_catalog() -> Catalog {
    Catalog::from_def(&CatalogDef {
        shapes: vec![ShapeKind::Circle, ShapeKind::Square, ShapeKind::Star],
        color_pairs: Some(vec![
            ("blue".to_owned(), "red".to_owned()),
            ("green".to_owned(), "navy".to_owned()),
        ]),
        scale_pairs: Some(vec![("small".to_owned(), "large".to_owned())]),
        ..CatalogDef::default()
    })
    .unwrap()
}

fn key_of(s: &Sample) -> (ShapeKind, ShapeKind, String, String) {
    let t = s.transformation();
    (
        s.shapes().example,
        s.shapes().question,
        t.color.start.name.clone(),
        t.scale.start.name.clone(),
    )
}

#[test]
fn question_shape_always_differs() {
    let cat = Catalog::from_def(&CatalogDef::default()).unwrap();
    for seed in 0..500 {
        let mut rng = StdRng::seed_from_u64(seed);
        let s = sample(&cat, &mut rng);
        assert_ne!(s.shapes().example, s.shapes().question, "seed {seed}");
    }
}

#[test]
fn two_shape_catalog_always_uses_both() {
    let cat = Catalog::from_def(&CatalogDef {
        shapes: vec![ShapeKind::Circle, ShapeKind::Square],
        ..CatalogDef::default()
    })
    .unwrap();
    let mut rng = StdRng::seed_from_u64(9);
    for _ in 0..100 {
        let s = sample(&cat, &mut rng);
        let set: BTreeSet<_> = [s.shapes().example, s.shapes().question].into();
        assert_eq!(set.len(), 2);
    }
}

#[test]
fn sampled_transformations_are_never_noops() {
    let cat = Catalog::from_def(&CatalogDef::default()).unwrap();
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..500 {
        let s = sample(&cat, &mut rng);
        let t = s.transformation();
        assert_ne!(t.start_color(), t.end_color());
        assert_ne!(t.start_scale(), t.end_scale());
    }
}

#[test]
fn same_seed_same_samples() {
    let cat = Catalog::from_def(&CatalogDef::default()).unwrap();
    let mut a = StdRng::seed_from_u64(42);
    let mut b = StdRng::seed_from_u64(42);
    for _ in 0..20 {
        assert_eq!(sample(&cat, &mut a), sample(&cat, &mut b));
    }
}

#[test]
fn draws_cover_every_question_shape() {
    let cat = small_catalog();
    let mut rng = StdRng::seed_from_u64(5);
    let mut pairs = BTreeSet::new();
    for _ in 0..200 {
        let s = sample(&cat, &mut rng);
        pairs.insert((s.shapes().example, s.shapes().question));
    }
    // 3 shapes -> 6 ordered distinct pairs.
    assert_eq!(pairs.len(), 6);
}

#[test]
fn unique_sampler_exhausts_before_repeating() {
    let cat = small_catalog();
    let total = cat.combination_count();
    assert_eq!(total, 3 * 2 * 2);

    let mut sampler = Sampler::new(cat, SamplerOpts { unique: true });
    let mut rng = StdRng::seed_from_u64(11);
    let mut seen = BTreeSet::new();
    for _ in 0..total {
        let s = sampler.next_sample(&mut rng);
        assert!(seen.insert(key_of(&s)), "repeated before exhaustion");
    }
    assert_eq!(sampler.distinct_produced(), total);

    // Past exhaustion duplicates are allowed, and sampling keeps working.
    let s = sampler.next_sample(&mut rng);
    assert!(seen.contains(&key_of(&s)));
}

#[test]
fn non_unique_sampler_matches_plain_sampling() {
    let cat = small_catalog();
    let mut sampler = Sampler::new(cat.clone(), SamplerOpts { unique: false });
    let mut a = StdRng::seed_from_u64(77);
    let mut b = StdRng::seed_from_u64(77);
    for _ in 0..10 {
        assert_eq!(sampler.next_sample(&mut a), sample(&cat, &mut b));
    }
    assert_eq!(sampler.distinct_produced(), 0);
}
