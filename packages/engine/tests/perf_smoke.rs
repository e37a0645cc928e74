use liquid_engine::World;

#[test]
fn perf_smoke_simulate() {
    let mut world = World::new(128, 64);
    world.enable_perf_metrics(true);
    for x in 0..128 {
        world.set_solid(x, 63, true);
    }
    world.paint_liquid(64, 16, 12, 2);
    let total = world.total_liquid();

    world.simulate();
    world.render();

    let stats = world.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert_eq!(stats.total_liquid(), total);
    assert_eq!(world.pixels_len(), 128 * 64);
}

#[test]
fn facade_loads_config_json() {
    let mut world = World::new(8, 8);
    world.load_config_json(r#"{ "gravity": 0.2, "seed": 9 }"#.to_string()).unwrap();
    assert!(world.config_json().contains("\"seed\":9"));
}
