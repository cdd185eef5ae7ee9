//! Owned single-channel f32 disparity map in row-major layout.
//!
//! The map is the dense output of an upstream stereo matcher. Values `<= 0`
//! are the matcher's "no valid disparity" sentinel (occlusion/mismatch) and
//! never enter the cost function as measurements.
#[derive(Clone, Debug, PartialEq)]
pub struct DisparityMap {
    /// Map width in pixels (number of scan lines)
    pub w: usize,
    /// Map height in pixels (number of candidate boundary rows)
    pub h: usize,
    /// Backing storage in row-major order, length `w * h`
    pub data: Vec<f32>,
}

impl DisparityMap {
    /// Construct a zero-initialized map of size `w × h` (all pixels invalid).
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![0.0; w * h],
        }
    }

    /// Fill a map from a per-pixel closure `f(u, v)`.
    pub fn from_fn<F: FnMut(usize, usize) -> f32>(w: usize, h: usize, mut f: F) -> Self {
        let mut data = Vec::with_capacity(w * h);
        for v in 0..h {
            for u in 0..w {
                data.push(f(u, v));
            }
        }
        Self { w, h, data }
    }

    #[inline]
    /// Convert (u, v) to a linear index into `data`.
    pub fn idx(&self, u: usize, v: usize) -> usize {
        v * self.w + u
    }

    #[inline]
    /// Get the disparity at column `u`, row `v`.
    pub fn get(&self, u: usize, v: usize) -> f32 {
        self.data[self.idx(u, v)]
    }

    #[inline]
    /// Set the disparity at column `u`, row `v`.
    pub fn set(&mut self, u: usize, v: usize, d: f32) {
        let i = self.idx(u, v);
        self.data[i] = d;
    }

    #[inline]
    /// Borrow row `v` as a contiguous slice.
    pub fn row(&self, v: usize) -> &[f32] {
        let start = v * self.w;
        &self.data[start..start + self.w]
    }

    #[inline]
    /// Whether a stored value is a real measurement (matcher sentinel is `<= 0`).
    pub fn is_measurement(d: f32) -> bool {
        d > 0.0
    }
}
