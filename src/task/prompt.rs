use rand::Rng;
use rand::seq::SliceRandom;

/// Family used when the requested one is unknown.
pub const DEFAULT_FAMILY: &str = "default";
/// Family used for every generated task.
pub const COLOR_THEN_SCALE: &str = "color_then_scale";

const DEFAULT_PROMPTS: [&str; 3] = [
    "Show the color-then-scale transformation being applied to the second shape. First change the color, then change the size according to the established pattern.",
    "Animate the two-step transformation where the shape first changes color and then changes scale. The question mark should smoothly transition through both steps.",
    "Complete the visual analogy by showing what the second shape becomes when the same color-then-scale transformation is applied.",
];

const COLOR_THEN_SCALE_PROMPTS: [&str; 3] = [
    "Show the shape first changing color and then changing size. Both transformations should match the example pattern.",
    "Complete the analogy by revealing the shape with the correct color and scale.",
    "Animate the two-step transformation: color change followed by size change.",
];

/// Every prompt of `family`, falling back to the default family.
pub fn prompts_for(family: &str) -> &'static [&'static str] {
    match family {
        COLOR_THEN_SCALE => &COLOR_THEN_SCALE_PROMPTS,
        _ => &DEFAULT_PROMPTS,
    }
}

/// Pick one prompt of `family` with `rng`.
pub fn get_prompt<R: Rng + ?Sized>(family: &str, rng: &mut R) -> &'static str {
    let prompts = prompts_for(family);
    prompts.choose(rng).copied().unwrap_or(DEFAULT_PROMPTS[0])
}

#[cfg(test)]
#[path = "../../tests/unit/task/prompt.rs"]
mod tests;
