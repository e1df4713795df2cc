// Host-side tests for the layer stack and the scroll projection.

use parallax_core::*;

const EPS: f64 = 1e-9;

#[test]
fn default_stack_matches_shipped_layers() {
    let stack = LayerStack::default();
    let snapshot: Vec<(LayerKind, f64, i32)> =
        stack.iter().map(|l| (l.kind, l.speed, l.z_index)).collect();
    assert_eq!(
        snapshot,
        vec![
            (LayerKind::Skyline, 0.3, 0),
            (LayerKind::Buildings, 1.0, 10),
            (LayerKind::Vehicles, 0.5, 20),
            (LayerKind::Airplane, 0.5, 15),
        ]
    );
}

#[test]
fn stack_is_identical_across_renders() {
    let stack = LayerStack::default();
    let before = stack.clone();
    for offset in [0.0, 120.0, 4000.0, 37.25] {
        let t = stack.translations(offset);
        assert_eq!(t.len(), stack.len());
        let kinds: Vec<LayerKind> = t.iter().map(|x| x.kind).collect();
        let expected: Vec<LayerKind> = before.iter().map(|l| l.kind).collect();
        assert_eq!(kinds, expected);
    }
    assert_eq!(stack, before);
    assert_eq!(stack, LayerStack::default());
}

#[test]
fn projection_is_offset_times_speed() {
    let stack = LayerStack::default();
    for offset in [0.0, 1.0, 13.5, 250.0, 999.75, 12_345.0] {
        for (t, layer) in stack.translations(offset).iter().zip(stack.iter()) {
            assert!((t.translate_y - offset * layer.speed).abs() < EPS);
        }
    }
    assert!((project(200.0, 0.3) - 60.0).abs() < EPS);
    assert!((project(200.0, 1.0) - 200.0).abs() < EPS);
}

#[test]
fn zero_offset_means_zero_translation() {
    for t in LayerStack::default().translations(0.0) {
        assert_eq!(t.translate_y, 0.0);
    }
}

#[test]
fn slower_layers_lag_faster_ones() {
    let t = LayerStack::default().translations(1000.0);
    let skyline = t.iter().find(|x| x.kind == LayerKind::Skyline).unwrap();
    let buildings = t.iter().find(|x| x.kind == LayerKind::Buildings).unwrap();
    assert!(skyline.translate_y < buildings.translate_y);
}

#[test]
fn rejects_invalid_stacks() {
    assert_eq!(LayerStack::new(vec![]), Err(LayerError::Empty));

    let bad_speed = vec![ParallaxLayer {
        kind: LayerKind::Skyline,
        speed: f64::NAN,
        z_index: 0,
    }];
    assert!(matches!(
        LayerStack::new(bad_speed),
        Err(LayerError::InvalidSpeed { kind: LayerKind::Skyline, .. })
    ));

    let negative = vec![ParallaxLayer {
        kind: LayerKind::Airplane,
        speed: -0.5,
        z_index: 0,
    }];
    assert!(LayerStack::new(negative).is_err());

    let dup = vec![DEFAULT_LAYERS[0], DEFAULT_LAYERS[1], DEFAULT_LAYERS[0]];
    assert_eq!(
        LayerStack::new(dup),
        Err(LayerError::Duplicate(LayerKind::Skyline))
    );
}

#[test]
fn custom_stack_keeps_declaration_order() {
    let layers = vec![DEFAULT_LAYERS[3], DEFAULT_LAYERS[0]];
    let stack = LayerStack::new(layers).unwrap();
    let kinds: Vec<_> = stack.iter().map(|l| l.kind).collect();
    assert_eq!(kinds, vec![LayerKind::Airplane, LayerKind::Skyline]);
    assert!(stack.get(LayerKind::Buildings).is_none());
}

#[test]
fn slugs_round_trip() {
    for layer in DEFAULT_LAYERS {
        assert_eq!(LayerKind::from_slug(layer.kind.slug()), Some(layer.kind));
    }
    assert_eq!(LayerKind::from_slug("unknown"), None);
}
