#![allow(clippy::float_cmp)]

use super::*;

// --- Transform ---

#[test]
fn transform_scale_defaults_to_one() {
    let t = Transform::new(Vec2::zero(), Size::square(10.0));
    assert_eq!(t.scale, None);
    assert_eq!(t.scale_or_default(), 1.0);
}

#[test]
fn transform_explicit_scale_wins() {
    let t = Transform { scale: Some(2.5), ..Transform::default() };
    assert_eq!(t.scale_or_default(), 2.5);
}

#[test]
fn transform_serializes_without_unset_scale() {
    let t = Transform::new(Vec2::new(1.0, 2.0), Size::new(3.0, 4.0));
    let json = serde_json::to_value(t).expect("serialize");
    assert_eq!(
        json,
        serde_json::json!({
            "position": {"x": 1.0, "y": 2.0},
            "size": {"width": 3.0, "height": 4.0}
        })
    );
}

#[test]
fn transform_deserializes_missing_scale_as_none() {
    let t: Transform = serde_json::from_value(serde_json::json!({
        "position": {"x": 0.0, "y": 0.0},
        "size": {"width": 1.0, "height": 1.0}
    }))
    .expect("deserialize");
    assert_eq!(t.scale, None);
}

// --- Rgb ---

#[test]
fn rgb_from_tuple() {
    assert_eq!(Rgb::from((255, 125, 0)), Rgb::new(255, 125, 0));
}

// --- Entity ---

#[test]
fn entity_new_has_transform() {
    let t = Transform::new(Vec2::new(5.0, 6.0), Size::square(2.0));
    let e = Entity::new("crate", t);
    assert_eq!(e.name, "crate");
    assert_eq!(SceneEntity::transform(&e), Some(&t));
}

#[test]
fn entity_without_transform_reports_none() {
    let e = Entity::without_transform("sound");
    assert!(SceneEntity::transform(&e).is_none());
}

#[test]
fn entity_ids_are_unique() {
    let a = Entity::without_transform("a");
    let b = Entity::without_transform("b");
    assert_ne!(a.id(), b.id());
}

// --- SceneRegistry ---

#[test]
fn registry_starts_empty() {
    let scene = SceneRegistry::new();
    assert!(scene.is_empty());
    assert_eq!(scene.len(), 0);
}

#[test]
fn registry_keeps_registration_order() {
    let mut scene = SceneRegistry::new();
    let first = EntityHandle { id: Uuid::new_v4(), role: EntityRole::SelectionOutline };
    let second = EntityHandle { id: Uuid::new_v4(), role: EntityRole::SpawnPivot };
    scene.register_entity(first);
    scene.register_entity(second);
    assert_eq!(scene.entities(), &[first, second]);
}

#[test]
fn registry_contains_and_find_role() {
    let mut scene = SceneRegistry::new();
    let handle = EntityHandle { id: Uuid::new_v4(), role: EntityRole::EditorCamera };
    scene.register_entity(handle);
    assert!(scene.contains(&handle.id));
    assert!(!scene.contains(&Uuid::new_v4()));
    assert_eq!(scene.find_role(EntityRole::EditorCamera), Some(&handle));
    assert!(scene.find_role(EntityRole::SpawnPivot).is_none());
}

#[test]
fn entity_role_serializes_snake_case() {
    let json = serde_json::to_value(EntityRole::SelectionOriginPivot).expect("serialize");
    assert_eq!(json, serde_json::json!("selection_origin_pivot"));
}
