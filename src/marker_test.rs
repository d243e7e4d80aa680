use super::*;

fn pivot() -> Marker {
    Marker::new(EntityRole::SpawnPivot, Size::square(10.0), Rgb::new(255, 125, 0))
}

#[test]
fn new_marker_sits_at_origin() {
    let m = pivot();
    assert_eq!(m.position(), Vec2::zero());
    assert_eq!(m.size(), Size::square(10.0));
    assert_eq!(m.transform.scale, None);
}

#[test]
fn set_position_only_moves() {
    let mut m = pivot();
    m.set_position(Vec2::new(100.0, 200.0));
    assert_eq!(m.position(), Vec2::new(100.0, 200.0));
    assert_eq!(m.size(), Size::square(10.0));
}

#[test]
fn match_transform_copies_position_and_size() {
    let mut m = Marker::new(EntityRole::SelectionOutline, Size::zero(), Rgb::new(0, 255, 0));
    let target = Transform {
        position: Vec2::new(-3.0, 7.0),
        size: Size::new(100.0, 50.0),
        scale: Some(4.0),
    };
    m.match_transform(&target);
    assert_eq!(m.position(), target.position);
    assert_eq!(m.size(), target.size);
    assert_eq!(m.transform.scale, None);
}

#[test]
fn hide_zeroes_size_and_keeps_position() {
    let mut m = pivot();
    m.set_position(Vec2::new(5.0, 5.0));
    m.hide();
    assert_eq!(m.size(), Size::zero());
    assert_eq!(m.position(), Vec2::new(5.0, 5.0));
    assert!(!m.is_visible());
}

#[test]
fn handle_carries_id_and_role() {
    let m = pivot();
    let h = m.handle();
    assert_eq!(h.id, m.id);
    assert_eq!(h.role, EntityRole::SpawnPivot);
}

#[test]
fn marker_always_has_transform() {
    let m = pivot();
    assert_eq!(SceneEntity::transform(&m), Some(&m.transform));
}
