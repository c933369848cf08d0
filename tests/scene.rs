use std::fs;

use nalgebra::Vector4;

use softraster::{Coordinate, RenderError, Scene, SceneError};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

const TRIANGLE: &str = "\
# a single red triangle
png 4 4 triangle.png
position 4 -1 -1 0 1   1 -1 0 1   0 1 0 1
color 4 1 0 0 1   1 0 0 1   1 0 0 1
drawArraysTriangles 0 3
";

#[test]
fn test_triangle_scene() {
    init_logging();

    let mut scene = Scene::new();
    scene.run(TRIANGLE).unwrap();

    let framebuffer = scene.pipeline().framebuffer().unwrap();

    let written: Vec<_> = framebuffer.iter()
                                     .filter(|&(_, color)| color != Vector4::zeros())
                                     .map(|(coord, _)| coord)
                                     .collect();

    assert_eq!(written.len(), 10);
    assert!(written.contains(&Coordinate::new(2, 3)));
    assert!(!written.contains(&Coordinate::new(0, 1)));
}

#[test]
fn test_indexed_scene_matches_arrays() {
    init_logging();

    let mut arrays = Scene::new();
    arrays.run(TRIANGLE).unwrap();

    let mut elements = Scene::new();
    elements.run("\
png 4 4 triangle.png
position 2 0 1  -1 -1  1 -1
color 3 1 0 0  1 0 0  1 0 0
elements 1 2 0
drawElementsTriangles 3 0
").unwrap();

    assert_eq!(arrays.pipeline().framebuffer(), elements.pipeline().framebuffer());
}

#[test]
fn test_depth_and_srgb_scene() {
    init_logging();

    let mut scene = Scene::new();
    scene.run("\
png 8 8 depth.png
depth
sRGB
position 3 -1 -1 0.6  1 -1 0.6  1 1 0.6   -1 -1 0.2  1 -1 0.2  -1 1 0.2
color 3 0 0 1  0 0 1  0 0 1   0.5 0 0  0.5 0 0  0.5 0 0
drawArraysTriangles 0 6
").unwrap();

    let framebuffer = scene.pipeline().framebuffer().unwrap();

    assert_eq!(framebuffer.pixel(Coordinate::new(2, 1)), Ok(Vector4::new(187, 0, 0, 255)));
    assert_eq!(framebuffer.pixel(Coordinate::new(6, 6)), Ok(Vector4::new(0, 0, 255, 255)));
}

#[test]
fn test_draw_pixels_scene() {
    init_logging();

    let mut scene = Scene::new();
    scene.run("\
png 3 3 points.png
position 2 0 0  2 1  7 7
color 3 1 1 1  0 1 0  1 0 0
drawPixels 3
").unwrap();

    let framebuffer = scene.pipeline().framebuffer().unwrap();

    assert_eq!(framebuffer.pixel(Coordinate::new(0, 0)), Ok(Vector4::new(255, 255, 255, 255)));
    assert_eq!(framebuffer.pixel(Coordinate::new(2, 1)), Ok(Vector4::new(0, 255, 0, 255)));
    assert_eq!(framebuffer.iter().filter(|&(_, color)| color != Vector4::zeros()).count(), 2);
}

#[test]
fn test_failing_draw_stops_the_scene() {
    init_logging();

    let mut scene = Scene::new();

    let result = scene.run("\
png 4 4 out.png
position 4 -1 -1 0 1   1 -1 0 1   0 1 0 1   0 0 0 0
color 3 1 0 0  1 0 0  1 0 0  1 0 0
drawArraysTriangles 1 3
drawArraysTriangles 0 3
");

    match result {
        Err(SceneError::Render { line: 4, source: RenderError::DivideByZero { vertex: 3 } }) => (),
        other => panic!("unexpected result: {:?}", other),
    }

    // The second draw never ran
    assert!(scene.pipeline().framebuffer().unwrap().iter().all(|(_, color)| color == Vector4::zeros()));
}

#[test]
fn test_load_scene_file() {
    init_logging();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("triangle.scene");

    fs::write(&path, TRIANGLE).unwrap();

    let scene = Scene::load(&path).unwrap();

    assert_eq!(scene.output().unwrap().file_name().unwrap(), "triangle.png");
    assert!(scene.pipeline().framebuffer().is_some());

    assert!(matches!(Scene::load(dir.path().join("missing.scene")), Err(SceneError::Io(_))));
}

#[cfg(feature = "image_compat")]
#[test]
fn test_save_rendered_scene() {
    use softraster::image_compat::ImageFramebuffer;

    init_logging();

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("triangle.png");

    let mut scene = Scene::new();
    scene.run(TRIANGLE).unwrap();
    scene.pipeline().framebuffer().unwrap().save_png(&output).unwrap();

    let image = image::open(&output).unwrap().to_rgba8();

    assert_eq!(image.dimensions(), (4, 4));
    assert_eq!(image.get_pixel(2, 3).0, [255, 0, 0, 255]);
    assert_eq!(image.get_pixel(0, 3).0, [0, 0, 0, 0]);
}
