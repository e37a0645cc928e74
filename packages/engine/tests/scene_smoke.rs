use std::io::Cursor;

use image::{Rgb, RgbImage};
use liquid_engine::{EngineError, Scene, WorldCore};

fn encode(img: &RgbImage) -> Vec<u8> {
    let mut out = Vec::new();
    img.write_to(&mut Cursor::new(&mut out), image::ImageOutputFormat::Png)
        .expect("png encode");
    out
}

#[test]
fn png_scene_seeds_terrain_and_liquid() {
    let mut img = RgbImage::new(6, 4);
    for x in 0..6 {
        img.put_pixel(x, 3, Rgb([255, 255, 255]));
    }
    img.put_pixel(2, 0, Rgb([255, 0, 0]));
    img.put_pixel(3, 0, Rgb([255, 0, 0]));
    // Near-red is ignored
    img.put_pixel(4, 0, Rgb([250, 0, 0]));

    let mut world = WorldCore::new(1, 1);
    world.load_scene_png(&encode(&img)).unwrap();

    assert_eq!((world.width(), world.height()), (6, 4));
    assert!((0..6).all(|x| world.is_solid(x, 3)));
    assert_eq!(world.get_liquid(2, 0), 1);
    assert_eq!(world.get_liquid(3, 0), 1);
    assert_eq!(world.get_liquid(4, 0), 0);
    assert_eq!(world.total_liquid(), 2);

    for _ in 0..60 {
        world.simulate();
    }
    assert_eq!(world.total_liquid(), 2);
    let resting: u32 = (0..6).map(|x| world.get_liquid(x, 2)).sum();
    assert_eq!(resting, 2);
}

#[test]
fn bad_png_leaves_world_untouched() {
    let mut world = WorldCore::new(3, 3);
    world.set_liquid(1, 1, 2);

    let err = world.load_scene_png(&[0x89, b'P', b'N', b'G']).unwrap_err();
    assert!(matches!(err, EngineError::SceneDecode(_)));
    assert_eq!(world.width(), 3);
    assert_eq!(world.get_liquid(1, 1), 2);
}

#[test]
fn scene_from_rgba_round_trips_through_the_world() {
    let px = [255u8, 255, 255, 255, 255, 0, 0, 255];
    let scene = Scene::from_rgba(2, 1, &px).unwrap();
    let mut world = WorldCore::new(9, 9);
    world.load_scene(&scene);
    assert!(world.is_solid(0, 0));
    assert_eq!(world.get_liquid(1, 0), 1);
}
