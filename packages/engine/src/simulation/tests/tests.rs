use super::*;
use super::render_extract::{BG_COLOR, SOLID_COLOR};
use crate::domain::scene::Scene;
use crate::grid::MAX_CELL_UNITS;

fn wet_world(seed: u32) -> WorldCore {
    let cfg = SimConfig { seed, ..SimConfig::default() };
    let mut world = WorldCore::with_config(24, 16, cfg);
    for x in 0..24 {
        world.set_solid(x, 15, true);
    }
    world.paint_liquid(12, 4, 3, 2);
    world
}

fn snapshot(world: &WorldCore) -> Vec<(bool, u32)> {
    world.grid.cells.iter().map(|c| (c.solid, c.count)).collect()
}

#[test]
fn same_seed_replays_identically() {
    let mut a = wet_world(77);
    let mut b = wet_world(77);
    for _ in 0..30 {
        a.simulate();
        b.simulate();
    }
    assert_eq!(snapshot(&a), snapshot(&b));
}

#[test]
fn init_restarts_the_random_streams() {
    let mut world = WorldCore::new(8, 8);
    world.set_liquid(4, 0, 6);
    for _ in 0..10 {
        world.simulate();
    }
    let first = snapshot(&world);

    world.init(8, 8);
    assert_eq!(world.frame(), 0);
    assert_eq!(world.total_liquid(), 0);
    world.set_liquid(4, 0, 6);
    for _ in 0..10 {
        world.simulate();
    }
    assert_eq!(snapshot(&world), first);
}

#[test]
fn simulate_counts_frames() {
    let mut world = WorldCore::new(4, 4);
    world.simulate();
    world.simulate();
    assert_eq!(world.frame(), 2);
}

#[test]
fn perf_stats_track_the_step() {
    let mut world = wet_world(5);
    let total = world.total_liquid();

    world.simulate();
    assert_eq!(world.get_perf_stats().total_liquid(), 0.0);

    world.enable_perf_metrics(true);
    world.simulate();
    let stats = world.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert!(stats.flow_ms() >= 0.0);
    assert_eq!(stats.total_liquid(), total as f64);
    assert_eq!(stats.grid_size(), 24 * 16);
    assert!(stats.liquid_cells() > 0);
}

#[test]
fn rejected_config_keeps_previous() {
    let mut world = WorldCore::new(4, 4);
    let before = world.config().clone();
    assert!(world.load_config_json(r#"{ "viscosity": 3.0 }"#).is_err());
    assert_eq!(world.config(), &before);

    world.load_config_json(r#"{ "gravity": 0.2 }"#).unwrap();
    assert_eq!(world.config().gravity, 0.2);
}

#[test]
fn invalid_constructor_config_falls_back_to_defaults() {
    let cfg = SimConfig { friction: -1.0, ..SimConfig::default() };
    let world = WorldCore::with_config(2, 2, cfg);
    assert_eq!(world.config(), &SimConfig::default());
}

#[test]
fn scene_load_resizes_and_seeds() {
    #[rustfmt::skip]
    let px = [
        255, 0, 0,      0, 0, 0,        255, 0, 0,
        0, 0, 0,        0, 0, 0,        0, 0, 0,
        255, 255, 255,  255, 255, 255,  255, 255, 255,
    ];
    let scene = Scene::from_rgb(3, 3, &px).unwrap();
    let mut world = WorldCore::new(10, 10);
    world.load_scene(&scene);

    assert_eq!((world.width(), world.height()), (3, 3));
    assert_eq!(world.get_liquid(0, 0), 1);
    assert_eq!(world.get_liquid(2, 0), 1);
    assert!(world.is_solid(1, 2));
    assert_eq!(world.total_liquid(), 2);

    for _ in 0..5 {
        world.simulate();
    }
    world.set_solid(1, 1, true);
    world.reset_scene();
    assert_eq!(world.frame(), 0);
    assert!(!world.is_solid(1, 1));
    assert_eq!(world.get_liquid(0, 0), 1);
    assert_eq!(world.total_liquid(), 2);
}

#[test]
fn reset_without_scene_clears() {
    let mut world = WorldCore::new(4, 4);
    world.set_liquid(1, 1, 3);
    world.set_solid(0, 0, true);
    world.reset_scene();
    assert_eq!(world.total_liquid(), 0);
    assert!(!world.is_solid(0, 0));
}

#[test]
fn render_colours_cells() {
    let mut world = WorldCore::new(3, 1);
    world.set_solid(0, 0, true);
    world.set_liquid(1, 0, 1);

    let px = world.render().to_vec();

    assert_eq!(px[0], SOLID_COLOR);
    assert_eq!(px[2], BG_COLOR);
    // Liquid is opaque-alpha ABGR with blue dominating
    let [r, g, b, a] = px[1].to_le_bytes();
    assert_eq!(a, 255);
    assert!(b > g && g > r);
}

#[test]
fn deeper_liquid_renders_greener() {
    let mut world = WorldCore::new(2, 1);
    world.set_liquid(0, 0, 1);
    world.set_liquid(1, 0, 4);
    let px = world.render().to_vec();
    let g_shallow = px[0].to_le_bytes()[1];
    let g_deep = px[1].to_le_bytes()[1];
    assert!(g_deep > g_shallow);
}

#[test]
fn snapshot_is_a_decodable_png() {
    let mut world = WorldCore::new(5, 4);
    world.set_solid(0, 3, true);
    world.set_liquid(2, 1, 2);
    world.render();

    let png = world.snapshot_png().unwrap();
    let img = image::load_from_memory(&png).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (5, 4));
    assert_eq!(img.get_pixel(0, 3).0, SOLID_COLOR.to_le_bytes());
    assert_eq!(img.get_pixel(4, 0).0, BG_COLOR.to_le_bytes());
}

#[test]
fn brush_respects_the_disc_and_terrain() {
    let mut world = WorldCore::new(11, 11);
    world.set_solid(5, 5, true);
    world.paint_liquid(5, 5, 2, 3);

    assert_eq!(world.get_liquid(5, 5), 0);
    assert_eq!(world.get_liquid(5, 3), 3);
    assert_eq!(world.get_liquid(7, 5), 3);
    // Corner of the bounding square lies outside the disc
    assert_eq!(world.get_liquid(7, 7), 0);

    world.erase_liquid(5, 5, 1);
    assert_eq!(world.get_liquid(5, 4), 0);
    assert!(world.is_solid(5, 5));

    world.erase(5, 5, 0);
    assert!(!world.is_solid(5, 5));

    world.paint_solid(5, 3, 0);
    assert!(world.is_solid(5, 3));
    assert_eq!(world.get_liquid(5, 3), 0);
}

#[test]
fn brush_near_the_edge_is_clipped() {
    let mut world = WorldCore::new(4, 4);
    world.paint_liquid(0, 0, 2, 1);
    // Cells inside the grid and the disc: (0,0),(1,0),(2,0),(0,1),(1,1),(0,2)
    assert_eq!(world.total_liquid(), 6);
}

#[test]
fn huge_brush_radius_covers_the_grid() {
    let mut world = WorldCore::new(5, 3);
    world.paint_solid(2, 1, i32::MAX);
    assert!((0..3).all(|y| (0..5).all(|x| world.is_solid(x, y))));

    // A disc centred far outside never reaches the grid
    world.erase(i32::MIN, 0, i32::MAX);
    assert!(world.is_solid(0, 0));

    world.erase(2, 1, i32::MAX);
    assert!((0..3).all(|y| (0..5).all(|x| !world.is_solid(x, y))));
}

#[test]
fn oversized_amounts_are_capped_and_conserved() {
    let mut world = WorldCore::new(3, 2);
    world.set_liquid(0, 1, 3_000_000_000);
    world.add_liquid(2, 1, u32::MAX);
    assert_eq!(world.get_liquid(0, 1), MAX_CELL_UNITS);
    assert_eq!(world.get_liquid(2, 1), MAX_CELL_UNITS);

    let total = world.total_liquid();
    for _ in 0..3 {
        world.simulate();
        assert_eq!(world.total_liquid(), total);
    }
}
