//! Staging commits
//!
//! Each pass picks the commit that matches how it wrote staging:
//! flow rebuilds every cell from scratch, pressure records deltas,
//! viscosity only rewrites velocity.

use super::*;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[inline]
fn replace(c: &mut Cell) {
    debug_assert!(c.d_count >= 0, "replace commit: negative staged count");
    c.count = c.d_count.clamp(0, u32::MAX as i64) as u32;
    c.vx = c.d_vx;
    c.vy = c.d_vy;
    c.clear_staging();
}

#[inline]
fn accumulate(c: &mut Cell) {
    c.count = (c.count as i64 + c.d_count).clamp(0, u32::MAX as i64) as u32;
    c.vx += c.d_vx;
    c.vy += c.d_vy;
    if c.count == 0 {
        c.vx = 0.0;
        c.vy = 0.0;
    }
    c.clear_staging();
}

#[inline]
fn velocity_only(c: &mut Cell) {
    c.vx = c.d_vx;
    c.vy = c.d_vy;
    c.clear_staging();
}

impl Grid {
    /// Staged state becomes the live state (flow)
    pub fn commit_replace(&mut self) {
        self.for_each_cell(replace);
        self.refresh_rows();
    }

    /// Staged deltas are added onto the live state (pressure)
    pub fn commit_accumulate(&mut self) {
        self.for_each_cell(accumulate);
        self.refresh_rows();
    }

    /// Staged velocity replaces live velocity, counts untouched (viscosity)
    pub fn commit_velocity(&mut self) {
        self.for_each_cell(velocity_only);
    }

    #[inline]
    fn for_each_cell(&mut self, f: fn(&mut Cell)) {
        #[cfg(feature = "parallel")]
        {
            self.cells.par_iter_mut().for_each(f);
        }
        #[cfg(not(feature = "parallel"))]
        {
            self.cells.iter_mut().for_each(f);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_moves_staging_into_live_fields() {
        let mut grid = Grid::new(2, 1);
        grid.set_liquid(0, 0, 3);
        grid.cells[1].d_count = 3;
        grid.cells[1].d_vy = 0.6;

        grid.commit_replace();

        assert_eq!(grid.get_liquid(0, 0), 0);
        assert_eq!(grid.get_liquid(1, 0), 3);
        assert_eq!(grid.cells[1].vy, 0.6);
        assert_eq!(grid.cells[1].d_count, 0);
    }

    #[test]
    fn accumulate_adds_deltas() {
        let mut grid = Grid::new(2, 1);
        grid.set_liquid(0, 0, 3);
        grid.cells[0].d_count = -1;
        grid.cells[1].d_count = 1;
        grid.cells[1].d_vx = 0.5;

        grid.commit_accumulate();

        assert_eq!(grid.get_liquid(0, 0), 2);
        assert_eq!(grid.get_liquid(1, 0), 1);
        assert_eq!(grid.cells[1].vx, 0.5);
        assert!(grid.row_has_liquid(0));
    }

    #[test]
    fn velocity_commit_keeps_counts() {
        let mut grid = Grid::new(1, 1);
        grid.set_liquid(0, 0, 2);
        grid.cells[0].d_vx = 1.0;

        grid.commit_velocity();

        assert_eq!(grid.get_liquid(0, 0), 2);
        assert_eq!(grid.cells[0].vx, 1.0);
    }
}
