use smallvec::SmallVec;

/// Horizontal placement of the bar row for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarLayout {
    pub count: usize,
    pub bar_width: f32,
    pub spacing: f32,
}

impl BarLayout {
    /// Evenly distribute `count` bars across `width`, with equal gaps at both ends.
    pub fn compute(width: f32, count: usize, width_divisor: f32) -> Self {
        let n = count as f32;
        let bar_width = if count == 0 {
            0.0
        } else {
            width / (n * width_divisor)
        };
        let spacing = (width - n * bar_width) / (n + 1.0);
        Self {
            count,
            bar_width,
            spacing,
        }
    }

    #[inline]
    pub fn left_edge(&self, index: usize) -> f32 {
        self.spacing + index as f32 * (self.bar_width + self.spacing)
    }

    pub fn left_edges(&self) -> SmallVec<[f32; 32]> {
        (0..self.count).map(|i| self.left_edge(i)).collect()
    }
}

/// Fold an index about the centre of a row of `count` so both halves mirror.
#[inline]
pub fn symmetric_index(index: usize, count: usize) -> usize {
    if (index as f32) < count as f32 / 2.0 {
        index
    } else {
        count - 1 - index
    }
}

/// Linear remap of `v` from `from` to `to`. Not clamped.
#[inline]
pub fn map_range(v: f32, from: (f32, f32), to: (f32, f32)) -> f32 {
    to.0 + (v - from.0) * (to.1 - to.0) / (from.1 - from.0)
}
