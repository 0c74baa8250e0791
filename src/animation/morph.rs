//! Morph sequencer: a series of blends from a source buffer to a target buffer.
//!
//! [`Morph`] is the state machine and yields frames as an iterator; [`morph`]
//! drives it against a [`Renderer`] with a fixed inter-frame delay.

use std::time::Duration;

use crate::{
    effects::{composite::blend_buffers, transform::scale},
    foundation::{buffer::PixelBuffer, error::PixmorphResult},
    render::backend::Renderer,
};

/// Where the sequencer is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MorphState {
    /// Nothing done yet.
    Init,
    /// Target is about to be resampled to the source dimensions (one shot).
    Scaling,
    /// Next call emits frame `i`.
    Stepping(u32),
    /// All `steps + 1` frames have been emitted.
    Done,
}

/// One blended frame.
#[derive(Clone, Debug, PartialEq)]
pub struct MorphFrame {
    /// Step number, `0..=steps`.
    pub index: u32,
    /// Weight of the source in this frame.
    pub alpha: f64,
    /// The blended pixels.
    pub buffer: PixelBuffer,
}

/// Blend weight of the source at step `i` of `steps`: `(steps - i) / steps`.
///
/// Step 0 is pure source and step `steps` is pure target. `steps == 0` is the
/// degenerate single-frame morph and yields 1.0.
pub fn morph_alpha(i: u32, steps: u32) -> f64 {
    if steps == 0 {
        return 1.0;
    }
    f64::from(steps - i.min(steps)) / f64::from(steps)
}

/// Iterator over the `steps + 1` frames of a morph.
#[derive(Debug)]
pub struct Morph {
    source: PixelBuffer,
    target: PixelBuffer,
    steps: u32,
    state: MorphState,
    rescaled: bool,
}

impl Morph {
    /// Start a morph of `steps` blend steps. Nothing is computed until the first `next`.
    pub fn new(source: PixelBuffer, target: PixelBuffer, steps: u32) -> Self {
        Self {
            source,
            target,
            steps,
            state: MorphState::Init,
            rescaled: false,
        }
    }

    /// Current position in the sequence.
    pub fn state(&self) -> MorphState {
        self.state
    }

    /// Buffer blended with weight `alpha`.
    pub fn source(&self) -> &PixelBuffer {
        &self.source
    }

    /// Target as it is blended; already resampled once past [`MorphState::Scaling`].
    pub fn target(&self) -> &PixelBuffer {
        &self.target
    }

    /// Whether the target had to be resampled to the source dimensions.
    pub fn target_rescaled(&self) -> bool {
        self.rescaled
    }

    fn step(&mut self) -> PixmorphResult<Option<MorphFrame>> {
        loop {
            match self.state {
                MorphState::Init => {
                    self.state = if self.source.dims() == self.target.dims() {
                        MorphState::Stepping(0)
                    } else {
                        MorphState::Scaling
                    };
                }
                MorphState::Scaling => {
                    tracing::info!(
                        from = %self.target.dims(),
                        to = %self.source.dims(),
                        "rescaling morph target"
                    );
                    self.target =
                        scale(&self.target, self.source.width(), self.source.height())?;
                    self.rescaled = true;
                    self.state = MorphState::Stepping(0);
                }
                MorphState::Stepping(i) => {
                    let alpha = morph_alpha(i, self.steps);
                    let buffer = blend_buffers(&self.source, &self.target, alpha)?;
                    self.state = if i >= self.steps {
                        MorphState::Done
                    } else {
                        MorphState::Stepping(i + 1)
                    };
                    return Ok(Some(MorphFrame {
                        index: i,
                        alpha,
                        buffer,
                    }));
                }
                MorphState::Done => return Ok(None),
            }
        }
    }
}

impl Iterator for Morph {
    type Item = PixmorphResult<MorphFrame>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.step() {
            Ok(frame) => frame.map(Ok),
            Err(e) => {
                self.state = MorphState::Done;
                Some(Err(e))
            }
        }
    }
}

/// Settings for [`morph`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MorphOpts {
    /// Number of blend steps `n`; `n + 1` frames are rendered.
    pub steps: u32,
    /// Blocking pause after each rendered frame. Zero disables pacing.
    pub frame_delay: Duration,
}

impl Default for MorphOpts {
    fn default() -> Self {
        Self {
            steps: 5,
            frame_delay: Duration::from_millis(500),
        }
    }
}

/// Summary returned by [`morph`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MorphStats {
    /// Number of [`Renderer::display`] calls made.
    pub frames_rendered: u64,
    /// Whether the target was resampled to the source dimensions.
    pub target_rescaled: bool,
}

/// Morph `source` into `target`, rendering every frame.
///
/// The renderer's canvas is set once from `source`, then exactly one
/// [`Renderer::display`] call is made per step. Runs to completion; the first
/// error aborts the sequence.
#[tracing::instrument(level = "debug", skip_all, fields(steps = opts.steps))]
pub fn morph(
    source: &PixelBuffer,
    target: &PixelBuffer,
    opts: &MorphOpts,
    renderer: &mut dyn Renderer,
) -> PixmorphResult<MorphStats> {
    renderer.set_canvas(source)?;

    let mut seq = Morph::new(source.clone(), target.clone(), opts.steps);
    let mut stats = MorphStats::default();
    for frame in seq.by_ref() {
        let frame = frame?;
        tracing::debug!(index = frame.index, alpha = frame.alpha, "morph frame");
        renderer.display(&frame.buffer)?;
        stats.frames_rendered += 1;
        if !opts.frame_delay.is_zero() {
            std::thread::sleep(opts.frame_delay);
        }
    }
    stats.target_rescaled = seq.target_rescaled();
    Ok(stats)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/morph.rs"]
mod tests;
