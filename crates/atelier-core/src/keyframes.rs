use smallvec::SmallVec;

/// Piecewise-linear mapping from scroll progress to a style value.
#[derive(Clone, Debug, PartialEq)]
pub struct Keyframes {
    stops: SmallVec<[(f32, f32); 4]>,
}

impl Keyframes {
    /// `inputs` must be non-decreasing and the same length as `outputs`;
    /// returns `None` otherwise.
    pub fn new(inputs: &[f32], outputs: &[f32]) -> Option<Self> {
        if inputs.is_empty() || inputs.len() != outputs.len() {
            return None;
        }
        if inputs.windows(2).any(|w| !(w[0] <= w[1])) {
            return None;
        }
        Some(Self {
            stops: inputs.iter().copied().zip(outputs.iter().copied()).collect(),
        })
    }

    /// Fade in over the first fifth, hold, fade out over the last fifth.
    pub fn fade_through() -> Self {
        Self {
            stops: SmallVec::from_slice(&[(0.0, 0.0), (0.2, 1.0), (0.8, 1.0), (1.0, 0.0)]),
        }
    }

    pub fn map(&self, t: f32) -> f32 {
        let (first, last) = (self.stops[0], self.stops[self.stops.len() - 1]);
        if t <= first.0 {
            return first.1;
        }
        if t >= last.0 {
            return last.1;
        }
        for w in self.stops.windows(2) {
            let ((x0, y0), (x1, y1)) = (w[0], w[1]);
            if t <= x1 {
                if x1 == x0 {
                    return y1;
                }
                return y0 + (y1 - y0) * (t - x0) / (x1 - x0);
            }
        }
        last.1
    }
}
