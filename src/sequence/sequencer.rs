use crate::animation::ease::Ease;
use crate::config::model::AnimationConfig;
use crate::foundation::core::FrameIndex;
use crate::foundation::math::{lerp_f64, phase_progress};
use crate::sample::model::{Sample, ShapeState, Slot};
use crate::sequence::frame::{Board, Cell, FrameDescriptor, Phase};
use std::iter::FusedIterator;

/// Ordered frames for one sample: setup, color phase, scale phase, final.
///
/// Each phase has `max(frames_per_phase, 1)` frames, so the total is `2 + 2 * max(N, 1)`.
/// The iterator is consumed as it is read; sequence the sample again to start over. Two
/// sequences built from the same sample and configuration yield identical descriptors.
#[derive(Debug)]
pub struct FrameSequence<'a> {
    sample: &'a Sample,
    frames_per_phase: u32,
    ease: Ease,
    steps: u32,
    next: u64,
    len: u64,
}

/// Sequence the frames revealing `sample`'s two-step solution.
pub fn sequence_frames<'a>(sample: &'a Sample, anim: &AnimationConfig) -> FrameSequence<'a> {
    FrameSequence::new(sample, anim)
}

impl<'a> FrameSequence<'a> {
    /// Build the sequence for `sample` under `anim`.
    pub fn new(sample: &'a Sample, anim: &AnimationConfig) -> Self {
        let steps = anim.frames_per_phase.max(1);
        Self {
            sample,
            frames_per_phase: anim.frames_per_phase,
            ease: anim.ease,
            steps,
            next: 0,
            len: 2 + 2 * u64::from(steps),
        }
    }

    /// Total number of frames, including those already consumed.
    pub fn total_frames(&self) -> u64 {
        self.len
    }

    fn descriptor_at(&self, pos: u64) -> FrameDescriptor {
        let steps = u64::from(self.steps);
        let t = self.sample.transformation();
        let index = FrameIndex(pos);

        if pos == 0 {
            let d = self.sample.state(Slot::D);
            return make(index, Phase::Setup, 0, 0.0, Slot::D, d, Board::question(self.sample));
        }
        if pos <= steps {
            let step = (pos - 1) as u32;
            let p = self.ease.apply(phase_progress(step, self.frames_per_phase));
            let e = ShapeState {
                color: t.start_color().lerp(t.end_color(), p),
                ..self.sample.state(Slot::E)
            };
            let board = Board::question(self.sample).with(Slot::E, Cell::Shape(e));
            return make(index, Phase::Color, step, p, Slot::E, e, board);
        }
        if pos <= 2 * steps {
            let step = (pos - 1 - steps) as u32;
            let p = self.ease.apply(phase_progress(step, self.frames_per_phase));
            let f = ShapeState {
                scale: lerp_f64(t.start_scale(), t.end_scale(), p),
                ..self.sample.state(Slot::F)
            };
            let board = Board::resolved(self.sample).with(Slot::F, Cell::Shape(f));
            return make(index, Phase::Scale, step, p, Slot::F, f, board);
        }
        let f = self.sample.state(Slot::F);
        make(index, Phase::Final, 0, 1.0, Slot::F, f, Board::resolved(self.sample))
    }
}

fn make(
    index: FrameIndex,
    phase: Phase,
    step: u32,
    progress: f64,
    slot: Slot,
    focus: ShapeState,
    board: Board,
) -> FrameDescriptor {
    FrameDescriptor {
        index,
        phase,
        step,
        progress,
        slot,
        shape: focus.shape,
        color: focus.color,
        scale: focus.scale,
        board,
    }
}

impl Iterator for FrameSequence<'_> {
    type Item = FrameDescriptor;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.len {
            return None;
        }
        let d = self.descriptor_at(self.next);
        self.next += 1;
        Some(d)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = (self.len - self.next) as usize;
        (rest, Some(rest))
    }
}

impl ExactSizeIterator for FrameSequence<'_> {}

impl FusedIterator for FrameSequence<'_> {}

#[cfg(test)]
#[path = "../../tests/unit/sequence/sequencer.rs"]
mod tests;
