// Copyright 2025 the Collage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for scene calculation.
//!
//! These exercise topology validation, determinism of the derived metrics and
//! the role queries layout strategies rely on.

use collage_scene::{DisplayId, DisplayRole, Padding, SceneError, SceneManager};

fn wall_of_three() -> SceneManager {
    let mut scene = SceneManager::new();
    let wall = scene.add_group("wall 1");
    for i in 0..3 {
        scene
            .add_display(wall, 1024, 768, i * 1024, 0, DisplayRole::Thumbnail)
            .unwrap();
    }
    scene
}

#[test]
fn calculation_is_deterministic() {
    let mut scene = wall_of_three();
    scene.set_padding(Padding::uniform(10));
    let first = scene.calculate_scene().unwrap();
    let snapshot = scene.clone();
    let second = scene.calculate_scene().unwrap();
    assert_eq!(first, second);
    assert_eq!(snapshot, scene);
}

#[test]
fn empty_scene_is_rejected() {
    let mut scene = SceneManager::new();
    assert_eq!(scene.calculate_scene(), Err(SceneError::NoGroups));
    assert!(!scene.is_calculated());
}

#[test]
fn empty_group_is_rejected() {
    let mut scene = wall_of_three();
    scene.add_group("bare wall");
    let err = scene.calculate_scene().unwrap_err();
    assert_eq!(
        err,
        SceneError::EmptyGroup {
            group: 1,
            name: "bare wall".into()
        }
    );
}

#[test]
fn zero_width_and_zero_height_are_rejected() {
    for (width, height) in [(0, 768), (1024, 0), (0, 0)] {
        let mut scene = SceneManager::new();
        let wall = scene.add_group("wall");
        scene
            .add_display(wall, width, height, 0, 0, DisplayRole::Thumbnail)
            .unwrap();
        let err = scene.calculate_scene().unwrap_err();
        assert!(
            matches!(err, SceneError::ZeroSizeDisplay { id, .. } if id == DisplayId::new(0, 0)),
            "{width}x{height} should be rejected, got {err:?}"
        );
        assert!(!scene.is_calculated());
    }
}

#[test]
fn one_pixel_display_at_origin_is_valid() {
    // A 1x1 display at the origin is valid even though its thru coordinates are 0.
    let mut scene = SceneManager::new();
    let wall = scene.add_group("wall");
    scene
        .add_display(wall, 1, 1, 0, 0, DisplayRole::Thumbnail)
        .unwrap();
    assert!(scene.calculate_scene().is_ok());
}

#[test]
fn oversized_padding_is_rejected() {
    let mut scene = SceneManager::new();
    scene.set_padding(Padding::uniform(40));
    let wall = scene.add_group("wall");
    scene
        .add_display(wall, 80, 600, 0, 0, DisplayRole::Thumbnail)
        .unwrap();
    assert_eq!(
        scene.calculate_scene(),
        Err(SceneError::PaddingExceedsDisplay {
            id: DisplayId::new(0, 0),
            pad: 40
        })
    );
}

#[test]
fn padding_too_large_to_double_is_rejected() {
    let mut scene = SceneManager::new();
    scene.set_padding(Padding::uniform(1 << 31));
    let wall = scene.add_group("wall");
    scene
        .add_display(wall, 1024, 768, 0, 0, DisplayRole::Thumbnail)
        .unwrap();
    assert_eq!(
        scene.calculate_scene(),
        Err(SceneError::PaddingExceedsDisplay {
            id: DisplayId::new(0, 0),
            pad: 1 << 31
        })
    );
    assert!(!scene.is_calculated());
}

#[test]
fn display_past_the_canvas_end_is_rejected() {
    let mut scene = wall_of_three();
    let far = scene.add_group("far");
    scene
        .add_display(far, 1024, 768, u32::MAX - 10, 0, DisplayRole::Thumbnail)
        .unwrap();
    assert_eq!(
        scene.calculate_scene(),
        Err(SceneError::DisplayOutOfRange {
            id: DisplayId::new(1, 0)
        })
    );
    assert!(!scene.is_calculated());
}

#[test]
fn display_ending_on_the_last_coordinate_is_valid() {
    let mut scene = SceneManager::new();
    let wall = scene.add_group("wall");
    scene
        .add_display(wall, 10, 10, u32::MAX - 10, 0, DisplayRole::Thumbnail)
        .unwrap();
    let metrics = scene.calculate_scene().unwrap();
    assert_eq!(metrics.total_display_width, u32::MAX);
}

#[test]
fn group_bounds_span_first_to_last_display() {
    let mut scene = wall_of_three();
    scene.calculate_scene().unwrap();
    let wall = &scene.groups()[0];
    assert_eq!(wall.x_origin(), 0);
    assert_eq!(wall.y_origin(), 0);
    assert_eq!(wall.x_thru(), 3071);
    assert_eq!(wall.y_thru(), 767);
}

#[test]
fn totals_cover_every_group() {
    let mut scene = wall_of_three();
    let upper = scene.add_group("upper");
    scene
        .add_display(upper, 1024, 768, 0, 768, DisplayRole::Magnification)
        .unwrap();
    let metrics = scene.calculate_scene().unwrap();
    assert_eq!(metrics.total_display_width, 3072);
    assert_eq!(metrics.total_display_height, 1536);
    assert_eq!(metrics.available_single_display_width, 1024);
    assert_eq!(scene.number_of_displays_by_role(DisplayRole::Magnification), 1);
    assert_eq!(scene.number_of_displays_by_role(DisplayRole::Thumbnail), 3);
}

#[test]
fn missing_role_is_a_configuration_error() {
    let mut scene = wall_of_three();
    scene.set_group_role(0, DisplayRole::Magnification).unwrap();
    assert_eq!(
        scene.first_display_with_role(DisplayRole::Thumbnail),
        Err(SceneError::NoDisplayWithRole(DisplayRole::Thumbnail))
    );
}

#[test]
fn unknown_group_is_reported() {
    let mut scene = SceneManager::new();
    assert_eq!(
        scene.add_display(3, 10, 10, 0, 0, DisplayRole::Thumbnail),
        Err(SceneError::UnknownGroup(3))
    );
}

#[test]
fn origin_in_scale_divides_by_totals() {
    let mut scene = wall_of_three();
    scene.calculate_scene().unwrap();
    let origin = scene.origin_in_scale(DisplayId::new(0, 2)).unwrap();
    assert!((origin.x - 2048.0 / 3072.0).abs() < 1e-12);
    assert_eq!(origin.y, 0.0);
}
