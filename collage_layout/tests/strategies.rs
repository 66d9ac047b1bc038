// Copyright 2025 the Collage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the built-in layout strategies.
//!
//! Each strategy is checked against the geometric property it promises, plus
//! the shared contract: empty input and out-of-range `start` are no-ops, items
//! before `start` keep their positions, and a failed layout changes nothing.

use collage_items::{CollageItem, ItemId, ItemSpec};
use collage_layout::{
    FillRoomLayoutManager, LayoutEnv, LayoutError, LayoutKind, LayoutManager, RandomLayoutManager,
    SimpleDoubleLayoutManager, SimpleSingleLayoutManager, SmartSingleLayoutManager, ViewExtent,
    X_BORDER, Y_BORDER,
};
use collage_scene::{DisplayRole, SceneError, SceneManager};
use kurbo::Point;

const EPS: f64 = 1e-9;

fn items(shapes: &[(f64, f64)]) -> Vec<CollageItem> {
    shapes
        .iter()
        .enumerate()
        .map(|(i, &(w, h))| CollageItem::new(ItemId(i as u64), ItemSpec::new(w, h)))
        .collect()
}

fn all_strategies() -> Vec<Box<dyn LayoutManager>> {
    vec![
        Box::new(SimpleSingleLayoutManager::new()),
        Box::new(SimpleDoubleLayoutManager::new()),
        Box::new(SmartSingleLayoutManager::new()),
        Box::new(RandomLayoutManager::with_seed(7)),
        Box::new(FillRoomLayoutManager::new()),
    ]
}

fn single_display() -> SceneManager {
    SceneManager::single_display(1024, 768).unwrap()
}

#[test]
fn empty_input_is_a_noop_for_every_strategy() {
    // Deliberately uncalculated: nothing should consult it.
    let scene = SceneManager::new();
    let env = LayoutEnv::new(&scene, ViewExtent::new(2.0));
    for mut strategy in all_strategies() {
        let mut empty: Vec<CollageItem> = Vec::new();
        assert_eq!(strategy.layout(&mut empty, &env, 0), Ok(()), "{strategy:?}");
        assert!(empty.is_empty());
    }
}

#[test]
fn start_past_the_end_is_a_noop() {
    let scene = single_display();
    let env = LayoutEnv::new(&scene, ViewExtent::new(2.0));
    for mut strategy in all_strategies() {
        let mut placed = items(&[(100.0, 100.0), (200.0, 100.0)]);
        let before = placed.clone();
        assert_eq!(strategy.layout(&mut placed, &env, 2), Ok(()));
        assert_eq!(strategy.layout(&mut placed, &env, 9), Ok(()));
        assert_eq!(placed, before, "{:?}", strategy.kind());
    }
}

#[test]
fn items_before_start_keep_position_and_scale() {
    let scene = SceneManager::scr_wall().unwrap();
    let env = LayoutEnv::new(&scene, ViewExtent::new(16.0));
    for mut strategy in all_strategies() {
        let mut placed = items(&[(100.0, 100.0), (300.0, 200.0), (100.0, 300.0), (400.0, 300.0)]);
        for (i, item) in placed.iter_mut().enumerate() {
            item.set_position(Point::new(0.3 * i as f64, 0.25));
            item.set_scale(0.3);
        }
        let before: Vec<Point> = placed.iter().map(CollageItem::position).collect();
        strategy.layout(&mut placed, &env, 2).unwrap();
        for i in 0..2 {
            assert_eq!(placed[i].position(), before[i], "{:?} moved item {i}", strategy.kind());
            // Random and FillRoom share one scale across every item.
            if !matches!(strategy.kind(), LayoutKind::Random | LayoutKind::FillRoom) {
                assert_eq!(placed[i].scale(), 0.3, "{:?} rescaled item {i}", strategy.kind());
            }
        }
    }
}

#[test]
fn single_row_keeps_scale_and_spacing() {
    let scene = SceneManager::new();
    let env = LayoutEnv::new(&scene, ViewExtent::new(4.0));
    let mut placed = items(&[(100.0, 100.0), (300.0, 100.0), (50.0, 100.0)]);
    placed[1].set_scale(0.5);
    SimpleSingleLayoutManager::new()
        .layout(&mut placed, &env, 0)
        .unwrap();

    assert!((placed[0].extent().x0 - X_BORDER).abs() < EPS);
    assert_eq!(placed[1].scale(), 0.5);
    for pair in placed.windows(2) {
        let gap = pair[1].extent().x0 - pair[0].extent().x1;
        assert!((gap - X_BORDER).abs() < EPS, "gap {gap}");
        assert!(pair[0].position().x < pair[1].position().x);
    }
    assert!(placed.iter().all(|item| item.position().y == 0.5));
}

#[test]
fn single_row_restarts_at_the_left_edge_for_a_suffix() {
    let scene = SceneManager::new();
    let env = LayoutEnv::new(&scene, ViewExtent::new(4.0));
    let mut placed = items(&[(100.0, 100.0), (100.0, 100.0)]);
    SimpleSingleLayoutManager::new()
        .layout(&mut placed, &env, 1)
        .unwrap();
    assert!((placed[1].position().x - (0.5 + X_BORDER)).abs() < EPS);
}

#[test]
fn double_row_stacks_short_pairs() {
    let scene = SceneManager::new();
    let env = LayoutEnv::new(&scene, ViewExtent::new(4.0));
    let mut placed = items(&[(100.0, 100.0), (200.0, 100.0), (100.0, 100.0), (100.0, 100.0)]);
    let scales = [0.4, 0.4, 0.8, 0.3];
    for (item, scale) in placed.iter_mut().zip(scales) {
        item.set_scale(scale);
    }
    let order_before: Vec<ItemId> = placed.iter().map(CollageItem::id).collect();
    SimpleDoubleLayoutManager::new()
        .layout(&mut placed, &env, 0)
        .unwrap();

    // Items 0 and 1 share the first column, 0 above mid-height.
    let (upper, lower) = (&placed[0], &placed[1]);
    assert_eq!(upper.position().x, lower.position().x);
    assert!((upper.extent().y0 - (0.5 + Y_BORDER * 0.5)).abs() < EPS);
    assert!((lower.extent().y1 - (0.5 - Y_BORDER * 0.5)).abs() < EPS);
    // Column width is set by the wider item (0.8 wide, half 0.4).
    assert!((upper.position().x - (X_BORDER + 0.4)).abs() < EPS);

    // 0.8 + 0.3 does not fit, so both are single and centered.
    assert_eq!(placed[2].position().y, 0.5);
    assert_eq!(placed[3].position().y, 0.5);
    assert!((placed[2].position().x - (X_BORDER + 0.8 + X_BORDER + 0.4)).abs() < EPS);
    assert!(placed[3].position().x > placed[2].position().x);

    let order_after: Vec<ItemId> = placed.iter().map(CollageItem::id).collect();
    assert_eq!(order_before, order_after);
}

#[test]
fn fill_room_spans_the_view() {
    let scene = SceneManager::new();
    let view = ViewExtent::new(2.0);
    let env = LayoutEnv::new(&scene, view);
    let mut placed = items(&[(100.0, 100.0); 3]);
    FillRoomLayoutManager::new()
        .layout(&mut placed, &env, 0)
        .unwrap();

    let factor = (2.0 - 3.0 * X_BORDER) / 3.0;
    for item in &placed {
        assert!((item.scale() - factor).abs() < EPS);
    }
    assert!((placed[0].position().x - (placed[0].half_width() + X_BORDER / 2.0)).abs() < EPS);
    assert!(placed[0].position().x < placed[1].position().x);
    assert!(placed[1].position().x < placed[2].position().x);
    let span = placed[2].extent().x1 + X_BORDER / 2.0 - (placed[0].extent().x0 - X_BORDER / 2.0);
    assert!((span - view.width).abs() < EPS);
}

#[test]
fn fill_room_rejects_a_view_narrower_than_its_borders() {
    let scene = SceneManager::new();
    let env = LayoutEnv::new(&scene, ViewExtent::new(0.1));
    let mut placed = items(&[(100.0, 100.0); 3]);
    let before = placed.clone();
    let err = FillRoomLayoutManager::new()
        .layout(&mut placed, &env, 0)
        .unwrap_err();
    assert!(matches!(err, LayoutError::ViewTooNarrow { items: 3, .. }));
    assert!(err.is_configuration());
    assert_eq!(placed, before);
}

#[test]
fn random_keeps_items_inside_the_view() {
    let scene = SceneManager::new();
    let view = ViewExtent::new(3.0);
    let env = LayoutEnv::new(&scene, view);
    let mut placed = items(&[(100.0, 100.0), (400.0, 100.0), (100.0, 400.0), (1000.0, 10.0)]);
    let mut strategy = RandomLayoutManager::with_seed(42);
    for _ in 0..20 {
        strategy.layout(&mut placed, &env, 0).unwrap();
        for item in &placed {
            let extent = item.extent();
            assert!(extent.x0 >= -EPS && extent.x1 <= view.width + EPS, "{extent:?}");
            assert!(extent.y0 >= -EPS && extent.y1 <= view.height + EPS, "{extent:?}");
        }
    }
}

#[test]
fn random_is_reproducible_with_a_seed() {
    let scene = SceneManager::new();
    let env = LayoutEnv::new(&scene, ViewExtent::new(3.0));
    let mut a = items(&[(100.0, 100.0), (300.0, 200.0)]);
    let mut b = a.clone();
    RandomLayoutManager::with_seed(9).layout(&mut a, &env, 0).unwrap();
    RandomLayoutManager::with_seed(9).layout(&mut b, &env, 0).unwrap();
    assert_eq!(a, b);
}

#[test]
fn smart_single_fills_one_display() {
    let scene = single_display();
    let env = LayoutEnv::new(&scene, ViewExtent::from_window(1024, 768));
    let mut placed = items(&[(1500.0, 1000.0)]);
    SmartSingleLayoutManager::new()
        .layout(&mut placed, &env, 0)
        .unwrap();

    let item = &placed[0];
    assert!((item.scale() - 1024.0 / (768.0 * 1.5)).abs() < EPS);
    // Display center in view units: 512 px over a 768 px tall display.
    assert!((item.position().x - 512.0 / 768.0).abs() < EPS);
    assert!((item.position().y - 0.5).abs() < EPS);
}

#[test]
fn smart_single_uses_one_display_per_item_across_the_room() {
    let scene = SceneManager::scr_wall().unwrap();
    let env = LayoutEnv::new(&scene, ViewExtent::new(16.0));
    let mut placed = items(&[(1000.0, 1000.0); 12]);
    SmartSingleLayoutManager::new()
        .layout(&mut placed, &env, 0)
        .unwrap();

    for (i, item) in placed.iter().enumerate() {
        let center_px = i as f64 * 1024.0 + 512.0;
        assert!((item.position().x - center_px / 768.0).abs() < EPS, "item {i}");
        assert!((item.scale() - 1004.0 / 768.0).abs() < EPS);
    }
}

#[test]
fn smart_single_splits_a_display_in_two() {
    let scene = single_display();
    let env = LayoutEnv::new(&scene, ViewExtent::from_window(1024, 768));
    let mut placed = items(&[(100.0, 100.0); 2]);
    SmartSingleLayoutManager::new()
        .layout(&mut placed, &env, 0)
        .unwrap();

    // Halves are 512x768: squares are limited by width.
    for item in &placed {
        assert!((item.scale() - 512.0 / 768.0).abs() < EPS);
    }
    assert!((placed[0].position().x - 256.0 / 768.0).abs() < EPS);
    assert!((placed[1].position().x - 768.0 / 768.0).abs() < EPS);
}

#[test]
fn smart_single_skips_magnification_displays() {
    let mut scene = SceneManager::new();
    let wall = scene.add_group("wall");
    scene
        .add_display(wall, 800, 600, 0, 0, DisplayRole::Magnification)
        .unwrap();
    scene
        .add_display(wall, 800, 600, 800, 0, DisplayRole::Thumbnail)
        .unwrap();
    scene.calculate_scene().unwrap();
    let env = LayoutEnv::new(&scene, ViewExtent::from_window(1600, 600));
    let mut placed = items(&[(100.0, 100.0)]);
    SmartSingleLayoutManager::new()
        .layout(&mut placed, &env, 0)
        .unwrap();
    assert!((placed[0].position().x - 1200.0 / 600.0).abs() < EPS);
}

#[test]
fn smart_single_requires_a_calculated_scene() {
    let mut scene = SceneManager::new();
    let wall = scene.add_group("wall");
    scene
        .add_display(wall, 800, 600, 0, 0, DisplayRole::Thumbnail)
        .unwrap();
    let env = LayoutEnv::new(&scene, ViewExtent::new(1.0));
    let mut placed = items(&[(100.0, 100.0)]);
    let before = placed.clone();
    assert_eq!(
        SmartSingleLayoutManager::new().layout(&mut placed, &env, 0),
        Err(LayoutError::Scene(SceneError::NotCalculated))
    );
    assert_eq!(placed, before);
}

#[test]
fn smart_single_without_thumbnails_fails_cleanly() {
    let mut scene = single_display();
    scene.set_group_role(0, DisplayRole::Magnification).unwrap();
    let env = LayoutEnv::new(&scene, ViewExtent::new(1.0));
    let mut placed = items(&[(100.0, 100.0)]);
    let err = SmartSingleLayoutManager::new()
        .layout(&mut placed, &env, 0)
        .unwrap_err();
    assert_eq!(
        err,
        LayoutError::Scene(SceneError::NoDisplayWithRole(DisplayRole::Thumbnail))
    );
    assert!(err.is_configuration());
}

#[test]
fn smart_single_reports_exhausted_displays_without_moving_anything() {
    let scene = single_display();
    let env = LayoutEnv::new(&scene, ViewExtent::new(1.0));
    let mut placed = items(&[(100.0, 100.0); 6]);
    let before = placed.clone();
    assert_eq!(
        SmartSingleLayoutManager::new().layout(&mut placed, &env, 0),
        Err(LayoutError::DisplaysExhausted { remaining: 2 })
    );
    assert_eq!(placed, before);
}
