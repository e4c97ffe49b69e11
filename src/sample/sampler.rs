use crate::catalog::transform::Catalog;
use crate::config::model::SamplerOpts;
use crate::sample::model::{Sample, ShapePair};
use rand::Rng;
use std::collections::HashSet;

/// Redraws attempted before falling back to a systematic scan for an unused combination.
const MAX_UNIQUE_ATTEMPTS: usize = 1000;

/// Catalog indices identifying one sample: (example, question, color pair, scale pair).
type ComboKey = (usize, usize, usize, usize);

/// Draw one sample from `catalog`.
///
/// The transformation is uniform over the catalog; the question shape is drawn uniformly from
/// the shapes other than the example shape, so no retry is ever needed.
pub fn sample<R: Rng + ?Sized>(catalog: &Catalog, rng: &mut R) -> Sample {
    build(catalog, draw(catalog, rng))
}

fn draw<R: Rng + ?Sized>(catalog: &Catalog, rng: &mut R) -> ComboKey {
    let n = catalog.shapes().len();
    let example = rng.gen_range(0..n);
    let mut question = rng.gen_range(0..n - 1);
    if question >= example {
        question += 1;
    }
    let ci = rng.gen_range(0..catalog.color_pairs().len());
    let si = rng.gen_range(0..catalog.scale_pairs().len());
    (example, question, ci, si)
}

fn build(catalog: &Catalog, (example, question, ci, si): ComboKey) -> Sample {
    let shapes = catalog.shapes();
    Sample::from_parts(
        ShapePair {
            example: shapes[example],
            question: shapes[question],
        },
        catalog.transformation(ci, si),
    )
}

/// Stateful sampler that can avoid repeating combinations across a run.
#[derive(Debug)]
pub struct Sampler {
    catalog: Catalog,
    opts: SamplerOpts,
    seen: HashSet<ComboKey>,
    warned_exhausted: bool,
}

impl Sampler {
    /// Create a sampler over a validated catalog.
    pub fn new(catalog: Catalog, opts: SamplerOpts) -> Self {
        Self {
            catalog,
            opts,
            seen: HashSet::new(),
            warned_exhausted: false,
        }
    }

    /// The catalog this sampler draws from.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Number of distinct combinations produced so far (always 0 when uniqueness is off).
    pub fn distinct_produced(&self) -> usize {
        self.seen.len()
    }

    /// Draw the next sample.
    ///
    /// With `unique` set, combinations are not repeated until every one of them has been
    /// produced; afterwards draws are unrestricted.
    pub fn next_sample<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Sample {
        if !self.opts.unique {
            return sample(&self.catalog, rng);
        }

        let total = self.catalog.combination_count();
        if self.seen.len() < total {
            for _ in 0..MAX_UNIQUE_ATTEMPTS {
                let key = draw(&self.catalog, rng);
                if self.seen.insert(key) {
                    return build(&self.catalog, key);
                }
            }
            if let Some(key) = self.first_unused() {
                self.seen.insert(key);
                tracing::debug!(?key, "unique draw fell back to systematic scan");
                return build(&self.catalog, key);
            }
        }

        if !self.warned_exhausted {
            tracing::warn!(
                total,
                "every unique combination has been generated; allowing duplicates"
            );
            self.warned_exhausted = true;
        }
        sample(&self.catalog, rng)
    }

    fn first_unused(&self) -> Option<ComboKey> {
        let n = self.catalog.shapes().len();
        let nc = self.catalog.color_pairs().len();
        let ns = self.catalog.scale_pairs().len();
        for example in 0..n {
            for question in (0..n).filter(|&q| q != example) {
                for ci in 0..nc {
                    for si in 0..ns {
                        let key = (example, question, ci, si);
                        if !self.seen.contains(&key) {
                            return Some(key);
                        }
                    }
                }
            }
        }
        None
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sample/sampler.rs"]
mod tests;
