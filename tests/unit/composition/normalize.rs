use super::*;

fn image(url: &str, z: Option<i64>) -> Layer {
    let mut layer = ImageLayer::new(url);
    layer.z_index = z;
    Layer::Image(layer)
}

fn text(s: &str, z: Option<i64>) -> Layer {
    let mut layer = TextLayer::new(s);
    layer.z_index = z;
    Layer::Text(layer)
}

fn names(scene: &NormalizedScene) -> Vec<String> {
    scene
        .layers
        .iter()
        .map(|layer| match layer {
            DrawLayer::Image(image) => image.image_url.clone().unwrap_or_default(),
            DrawLayer::Text(text) => text.text.clone().unwrap_or_default(),
        })
        .collect()
}

#[test]
fn missing_canvas_yields_default_configuration() {
    let scene = normalize(&[text("Hi", None)]);
    assert_eq!(scene.canvas.width, None);
    assert_eq!(scene.canvas.height, None);
    assert_eq!(scene.canvas.background_color, None);
}

#[test]
fn first_canvas_wins_and_none_are_drawable() {
    let scene = normalize(&[
        text("a", None),
        Layer::Canvas(CanvasConfig::sized(100, 100)),
        Layer::Canvas(CanvasConfig::sized(900, 900)),
    ]);
    assert_eq!(scene.canvas.width, Some(100));
    assert_eq!(scene.layers.len(), 1);
}

#[test]
fn missing_z_index_normalizes_to_one() {
    let scene = normalize(&[image("a", None), text("b", None)]);
    for layer in &scene.layers {
        assert_eq!(layer.z_index(), 1);
        match layer {
            DrawLayer::Image(image) => assert_eq!(image.z_index, Some(1)),
            DrawLayer::Text(text) => assert_eq!(text.z_index, Some(1)),
        }
    }
}

#[test]
fn sorts_ascending_by_z_index_regardless_of_input_order() {
    let scene = normalize(&[image("high", Some(9)), text("low", Some(2)), image("mid", Some(5))]);
    assert_eq!(names(&scene), ["low", "mid", "high"]);
}

#[test]
fn equal_keys_keep_input_order() {
    let scene = normalize(&[
        text("first", Some(3)),
        text("second", Some(3)),
        text("implicit-a", None),
        text("implicit-b", None),
    ]);
    // Implicit z = 1 sorts below the explicit 3s; ties keep insertion order.
    assert_eq!(names(&scene), ["implicit-a", "implicit-b", "first", "second"]);
}

#[test]
fn explicit_zero_z_index_is_a_real_stacking_key() {
    // Zero is kept as-is, not re-defaulted; it sorts below the implicit 1.
    let scene = normalize(&[text("implicit", None), text("zero", Some(0))]);
    assert_eq!(names(&scene), ["zero", "implicit"]);
}

#[test]
fn unknown_layers_are_dropped_silently() {
    let unknown: Layer = serde_json::from_value(serde_json::json!({"type": "video"})).unwrap();
    let scene = normalize(&[unknown, text("kept", None)]);
    assert_eq!(names(&scene), ["kept"]);
}

#[test]
fn input_list_is_not_mutated() {
    let input = vec![text("a", None)];
    let _ = normalize(&input);
    let Layer::Text(original) = &input[0] else {
        panic!("expected a text layer");
    };
    assert_eq!(original.z_index, None);
}
