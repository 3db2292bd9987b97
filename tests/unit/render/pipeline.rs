use super::*;

fn pixels(surface: &impl Surface) -> image::RgbaImage {
    image::load_from_memory(&surface.encode().unwrap())
        .unwrap()
        .to_rgba8()
}

#[test]
fn missing_configuration_is_rejected() {
    let err = create_surface(&CpuBackend::new(), None).unwrap_err();
    assert!(matches!(err, StillframeError::InvalidConfig(_)));
}

#[test]
fn absent_dimensions_default_to_500() {
    let surface = create_surface(&CpuBackend::new(), Some(&CanvasConfig::default())).unwrap();
    assert_eq!((surface.width(), surface.height()), (500, 500));
}

#[test]
fn zero_dimensions_behave_as_absent() {
    let config = CanvasConfig {
        width: Some(0),
        height: Some(0),
        background_color: None,
    };
    let surface = create_surface(&CpuBackend::new(), Some(&config)).unwrap();
    assert_eq!((surface.width(), surface.height()), (500, 500));
}

#[test]
fn explicit_dimensions_are_honored() {
    let surface = create_surface(&CpuBackend::new(), Some(&CanvasConfig::sized(64, 32))).unwrap();
    assert_eq!((surface.width(), surface.height()), (64, 32));
}

#[test]
fn background_fill_covers_the_whole_surface() {
    let config = CanvasConfig::sized(3, 2).with_background("#ff0000");
    let surface = create_surface(&CpuBackend::new(), Some(&config)).unwrap();
    for pixel in pixels(&surface).pixels() {
        assert_eq!(*pixel, image::Rgba([255, 0, 0, 255]));
    }
}

#[test]
fn unparseable_background_leaves_the_surface_transparent() {
    let config = CanvasConfig::sized(2, 2).with_background("not-a-color");
    let surface = create_surface(&CpuBackend::new(), Some(&config)).unwrap();
    for pixel in pixels(&surface).pixels() {
        assert_eq!(*pixel, image::Rgba([0, 0, 0, 0]));
    }
}
