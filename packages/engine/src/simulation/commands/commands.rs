use super::WorldCore;

pub(super) fn set_solid(world: &mut WorldCore, x: i32, y: i32, solid: bool) {
    world.grid.set_solid(x, y, solid);
}

pub(super) fn set_liquid(world: &mut WorldCore, x: i32, y: i32, amount: u32) {
    world.grid.set_liquid(x, y, amount);
}

pub(super) fn add_liquid(world: &mut WorldCore, x: i32, y: i32, amount: u32) {
    world.grid.add_liquid(x, y, amount);
}

/// Visit every in-grid cell of the disc `dx*dx + dy*dy <= radius*radius`.
/// The scan is clipped to the grid, so any radius costs at most one grid.
fn for_each_in_radius(size: (u32, u32), cx: i32, cy: i32, radius: i32, mut f: impl FnMut(i32, i32)) {
    let (width, height) = (size.0 as i64, size.1 as i64);
    if radius < 0 || width == 0 || height == 0 {
        return;
    }
    let (cx, cy, r) = (cx as i64, cy as i64, radius as i64);
    let r2 = r * r;
    for y in (cy - r).max(0)..=(cy + r).min(height - 1) {
        for x in (cx - r).max(0)..=(cx + r).min(width - 1) {
            let (dx, dy) = (x - cx, y - cy);
            if dx * dx + dy * dy <= r2 {
                f(x as i32, y as i32);
            }
        }
    }
}

pub(super) fn paint_liquid(world: &mut WorldCore, cx: i32, cy: i32, radius: i32, amount: u32) {
    let grid = &mut world.grid;
    for_each_in_radius((grid.width(), grid.height()), cx, cy, radius, |x, y| {
        if !grid.is_solid(x, y) {
            grid.set_liquid(x, y, amount);
        }
    });
}

pub(super) fn paint_solid(world: &mut WorldCore, cx: i32, cy: i32, radius: i32) {
    let grid = &mut world.grid;
    for_each_in_radius((grid.width(), grid.height()), cx, cy, radius, |x, y| grid.set_solid(x, y, true));
}

pub(super) fn erase(world: &mut WorldCore, cx: i32, cy: i32, radius: i32) {
    let grid = &mut world.grid;
    for_each_in_radius((grid.width(), grid.height()), cx, cy, radius, |x, y| {
        grid.set_solid(x, y, false);
        grid.set_liquid(x, y, 0);
    });
}

pub(super) fn erase_liquid(world: &mut WorldCore, cx: i32, cy: i32, radius: i32) {
    let grid = &mut world.grid;
    for_each_in_radius((grid.width(), grid.height()), cx, cy, radius, |x, y| grid.set_liquid(x, y, 0));
}

pub(super) fn clear(world: &mut WorldCore) {
    world.grid.clear();
    world.pixels.fill(0);
    world.frame = 0;
}
