//! Centered Moving-Average Smoothing

/// Uniform-kernel moving average in "same" mode
///
/// Output index `i` is the full-convolution sample `i + (width - 1) / 2`,
/// so the output keeps the input length and positions near either edge
/// average over zero padding.
#[derive(Debug, Clone, Copy)]
pub struct MovingAverage {
    width: usize,
}

impl MovingAverage {
    /// Create a smoother; a zero width is raised to 1
    pub fn new(width: usize) -> Self {
        Self {
            width: width.max(1),
        }
    }

    /// Kernel width
    pub fn width(&self) -> usize {
        self.width
    }

    /// Smooth a signal, preserving its length
    pub fn smooth(&self, signal: &[f64]) -> Vec<f64> {
        let n = signal.len();
        if n == 0 {
            return Vec::new();
        }

        let w = self.width;
        let offset = (w - 1) / 2;
        let weight = 1.0 / w as f64;

        (0..n)
            .map(|i| {
                let k = i + offset;
                let start = (k + 1).saturating_sub(w);
                let end = (k + 1).min(n);
                signal[start..end].iter().sum::<f64>() * weight
            })
            .collect()
    }
}
