use super::*;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

impl Grid {
    /// Can row `y` be skipped by a pass that only acts on wet cells?
    #[inline]
    pub fn row_has_liquid(&self, y: u32) -> bool {
        self.row_has_liquid.get(y as usize).copied().unwrap_or(false)
    }

    /// Rebuild the per-row markers from the authoritative cell counts
    pub fn refresh_rows(&mut self) {
        let width = self.width as usize;
        if width == 0 {
            return;
        }

        #[cfg(feature = "parallel")]
        {
            let cells = &self.cells;
            self.row_has_liquid
                .par_iter_mut()
                .enumerate()
                .for_each(|(y, wet)| {
                    let start = y * width;
                    *wet = cells[start..start + width].iter().any(|c| c.count > 0);
                });
        }

        #[cfg(not(feature = "parallel"))]
        {
            for (y, row) in self.cells.chunks(width).enumerate() {
                self.row_has_liquid[y] = row.iter().any(|c| c.count > 0);
            }
        }
    }
}
