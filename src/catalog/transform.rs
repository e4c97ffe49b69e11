use crate::catalog::palette::{NamedColor, NamedScale};
use crate::catalog::shape::ShapeKind;
use crate::config::model::CatalogDef;
use crate::foundation::core::Rgb8;
use crate::foundation::error::{TwostepError, TwostepResult};
use serde::Serialize;
use std::collections::BTreeSet;

/// A `(start, end)` color change. `start.rgb != end.rgb` for every catalog entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ColorPair {
    /// Color before the first step.
    pub start: NamedColor,
    /// Color after the first step.
    pub end: NamedColor,
}

/// A `(start, end)` scale change. `start.factor != end.factor` for every catalog entry.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScalePair {
    /// Scale before the second step.
    pub start: NamedScale,
    /// Scale after the second step.
    pub end: NamedScale,
}

/// One color pair combined with one scale pair.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TransformationSpec {
    /// First step.
    pub color: ColorPair,
    /// Second step.
    pub scale: ScalePair,
}

impl TransformationSpec {
    /// Start fill color.
    pub fn start_color(&self) -> Rgb8 {
        self.color.start.rgb
    }

    /// End fill color.
    pub fn end_color(&self) -> Rgb8 {
        self.color.end.rgb
    }

    /// Start scale factor.
    pub fn start_scale(&self) -> f64 {
        self.scale.start.factor
    }

    /// End scale factor.
    pub fn end_scale(&self) -> f64 {
        self.scale.end.factor
    }

    /// Human-readable summary, e.g. `Step 1: blue → red, Step 2: small → large`.
    pub fn description(&self) -> String {
        format!(
            "Step 1: {} → {}, Step 2: {} → {}",
            self.color.start.name, self.color.end.name, self.scale.start.name, self.scale.end.name
        )
    }
}

/// Validated, immutable sampling catalog.
///
/// Built once from a [`CatalogDef`]; sampling never revalidates.
#[derive(Clone, Debug)]
pub struct Catalog {
    shapes: Vec<ShapeKind>,
    color_pairs: Vec<ColorPair>,
    scale_pairs: Vec<ScalePair>,
}

impl Catalog {
    /// Validate `def` and expand it into concrete transformation pairs.
    pub fn from_def(def: &CatalogDef) -> TwostepResult<Self> {
        if def.shapes.len() < 2 {
            return Err(TwostepError::config(format!(
                "shape catalog needs at least 2 entries, got {}",
                def.shapes.len()
            )));
        }
        let mut seen = BTreeSet::new();
        for s in &def.shapes {
            if !seen.insert(*s) {
                return Err(TwostepError::config(format!("duplicate shape '{s}'")));
            }
        }

        check_names("color", def.colors.iter().map(|c| c.name.as_str()))?;
        check_names("scale", def.scales.iter().map(|s| s.name.as_str()))?;
        for s in &def.scales {
            if !s.factor.is_finite() || s.factor <= 0.0 {
                return Err(TwostepError::config(format!(
                    "scale '{}' must be a finite positive factor, got {}",
                    s.name, s.factor
                )));
            }
        }

        let color_pairs = match &def.color_pairs {
            Some(pairs) => pairs
                .iter()
                .map(|(a, b)| {
                    let start = lookup("color", &def.colors, a, |c| &c.name)?;
                    let end = lookup("color", &def.colors, b, |c| &c.name)?;
                    if start.rgb == end.rgb {
                        return Err(TwostepError::config(format!(
                            "color pair '{a}' -> '{b}' is a no-op (both {})",
                            start.rgb.to_hex()
                        )));
                    }
                    Ok(ColorPair {
                        start: start.clone(),
                        end: end.clone(),
                    })
                })
                .collect::<TwostepResult<Vec<_>>>()?,
            None => ordered_pairs(&def.colors, |a, b| a.rgb != b.rgb)
                .into_iter()
                .map(|(start, end)| ColorPair { start, end })
                .collect(),
        };

        let scale_pairs = match &def.scale_pairs {
            Some(pairs) => pairs
                .iter()
                .map(|(a, b)| {
                    let start = lookup("scale", &def.scales, a, |s| &s.name)?;
                    let end = lookup("scale", &def.scales, b, |s| &s.name)?;
                    if start.factor == end.factor {
                        return Err(TwostepError::config(format!(
                            "scale pair '{a}' -> '{b}' is a no-op (both {})",
                            start.factor
                        )));
                    }
                    Ok(ScalePair {
                        start: start.clone(),
                        end: end.clone(),
                    })
                })
                .collect::<TwostepResult<Vec<_>>>()?,
            None => ordered_pairs(&def.scales, |a, b| a.factor != b.factor)
                .into_iter()
                .map(|(start, end)| ScalePair { start, end })
                .collect(),
        };

        if color_pairs.is_empty() {
            return Err(TwostepError::config("color transformation catalog is empty"));
        }
        if scale_pairs.is_empty() {
            return Err(TwostepError::config("scale transformation catalog is empty"));
        }

        Ok(Self {
            shapes: def.shapes.clone(),
            color_pairs,
            scale_pairs,
        })
    }

    /// Shapes eligible for sampling.
    pub fn shapes(&self) -> &[ShapeKind] {
        &self.shapes
    }

    /// Valid color changes.
    pub fn color_pairs(&self) -> &[ColorPair] {
        &self.color_pairs
    }

    /// Valid scale changes.
    pub fn scale_pairs(&self) -> &[ScalePair] {
        &self.scale_pairs
    }

    /// Number of distinct transformations (color pairs x scale pairs).
    pub fn transformation_count(&self) -> usize {
        self.color_pairs.len() * self.scale_pairs.len()
    }

    /// Number of distinct (example, question, transformation) combinations.
    pub fn combination_count(&self) -> usize {
        let n = self.shapes.len();
        n * (n - 1) * self.transformation_count()
    }

    /// Build the transformation made of color pair `ci` and scale pair `si`.
    ///
    /// Panics if either index is out of range.
    pub fn transformation(&self, ci: usize, si: usize) -> TransformationSpec {
        TransformationSpec {
            color: self.color_pairs[ci].clone(),
            scale: self.scale_pairs[si].clone(),
        }
    }

    /// Iterate every transformation in catalog order.
    pub fn transformations(&self) -> impl Iterator<Item = TransformationSpec> + '_ {
        (0..self.color_pairs.len())
            .flat_map(move |ci| (0..self.scale_pairs.len()).map(move |si| (ci, si)))
            .map(|(ci, si)| self.transformation(ci, si))
    }
}

fn check_names<'a>(kind: &str, names: impl Iterator<Item = &'a str>) -> TwostepResult<()> {
    let mut seen = BTreeSet::new();
    for name in names {
        if name.trim().is_empty() {
            return Err(TwostepError::config(format!("{kind} name must not be empty")));
        }
        if !seen.insert(name) {
            return Err(TwostepError::config(format!("duplicate {kind} '{name}'")));
        }
    }
    if seen.len() < 2 {
        return Err(TwostepError::config(format!(
            "{kind} catalog needs at least 2 entries, got {}",
            seen.len()
        )));
    }
    Ok(())
}

fn lookup<'a, T>(
    kind: &str,
    items: &'a [T],
    name: &str,
    name_of: impl Fn(&T) -> &String,
) -> TwostepResult<&'a T> {
    items
        .iter()
        .find(|it| name_of(it) == name)
        .ok_or_else(|| TwostepError::config(format!("unknown {kind} '{name}' in pair list")))
}

fn ordered_pairs<T: Clone>(items: &[T], distinct: impl Fn(&T, &T) -> bool) -> Vec<(T, T)> {
    let mut out = Vec::new();
    for a in items {
        for b in items {
            if distinct(a, b) {
                out.push((a.clone(), b.clone()));
            }
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/transform.rs"]
mod tests;
