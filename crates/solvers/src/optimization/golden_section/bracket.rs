use super::Error;

/// The golden ratio: φ = (1 + √5) / 2
const PHI: f64 = 1.618_033_988_749_895;

/// The inverse golden ratio, which equals φ - 1.
const INV_PHI: f64 = PHI - 1.0;

/// Outer interval plus the two interior points placed by the golden ratio.
#[derive(Debug, Clone, Copy)]
pub(super) struct GoldenBracket {
    pub(super) left: f64,
    pub(super) right: f64,
    pub(super) inner_left: f64,
    pub(super) inner_right: f64,
}

impl GoldenBracket {
    /// Creates a bracket, swapping reversed bounds.
    ///
    /// Bounds must be finite and distinct.
    pub(super) fn new(bounds: [f64; 2]) -> Result<Self, Error> {
        let [a, b] = bounds;
        if !a.is_finite() || !b.is_finite() || a == b {
            return Err(Error::InvalidBracket { left: a, right: b });
        }

        let (left, right) = if a < b { (a, b) } else { (b, a) };
        let width = right - left;
        Ok(Self {
            left,
            right,
            inner_left: left + (1.0 - INV_PHI) * width,
            inner_right: left + INV_PHI * width,
        })
    }

    pub(super) fn width(&self) -> f64 {
        self.right - self.left
    }

    pub(super) fn outer(&self) -> [f64; 2] {
        [self.left, self.right]
    }

    /// Keeps `[left, inner_right]`; the old `inner_left` becomes `inner_right`.
    pub(super) fn shrink_right(&mut self) {
        self.right = self.inner_right;
        self.inner_right = self.inner_left;
        self.inner_left = self.left + (1.0 - INV_PHI) * self.width();
    }

    /// Keeps `[inner_left, right]`; the old `inner_right` becomes `inner_left`.
    pub(super) fn shrink_left(&mut self) {
        self.left = self.inner_left;
        self.inner_left = self.inner_right;
        self.inner_right = self.left + INV_PHI * self.width();
    }

    /// The `inner_left` that [`shrink_right`](Self::shrink_right) would produce.
    pub(super) fn next_inner_left(&self) -> f64 {
        self.left + (1.0 - INV_PHI) * (self.inner_right - self.left)
    }

    /// The `inner_right` that [`shrink_left`](Self::shrink_left) would produce.
    pub(super) fn next_inner_right(&self) -> f64 {
        self.inner_left + INV_PHI * (self.right - self.inner_left)
    }
}
