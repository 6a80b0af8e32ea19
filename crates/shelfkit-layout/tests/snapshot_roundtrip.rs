//! Serialization round-trips and wire-shape checks for shelf snapshots.

use shelfkit_core::{DropTarget, EdgePosition, ElementKind, IdMinter};
use shelfkit_layout::{Layout, PlacedElement, ShelfMetadata, ShelfSnapshot, place};

fn build_layout(minter: &mut IdMinter) -> Layout {
    let mut layout = Layout::new();
    for kind in [ElementKind::Slim, ElementKind::High, ElementKind::Slim] {
        let piece = PlacedElement::new(minter.element_id().unwrap(), kind);
        layout = place(
            &layout,
            piece,
            &DropTarget::Edge {
                position: EdgePosition::Right,
            },
            minter,
        )
        .unwrap();
    }
    // Stack one more piece on the middle column.
    let middle = layout.columns()[1].id;
    let piece = PlacedElement::new(minter.element_id().unwrap(), ElementKind::High);
    place(
        &layout,
        piece,
        &DropTarget::Column { column: middle },
        minter,
    )
    .unwrap()
}

#[test]
fn snapshot_round_trips_through_json() {
    let mut minter = IdMinter::new();
    let layout = build_layout(&mut minter);
    let snapshot = ShelfSnapshot::capture(
        &layout,
        ShelfMetadata::new("Library Shelf")
            .with_building("Main Hall")
            .with_room("3F"),
    );

    let json = serde_json::to_string(&snapshot).unwrap();
    let back: ShelfSnapshot = serde_json::from_str(&json).unwrap();

    assert_eq!(back, snapshot);
    assert_eq!(back.layout(), layout);
    assert!(back.validate().is_ok());
}

#[test]
fn elements_serialize_with_id_and_type_fields() {
    let mut minter = IdMinter::new();
    let layout = build_layout(&mut minter);
    let snapshot = ShelfSnapshot::capture(&layout, ShelfMetadata::new("Library Shelf"));

    let value: serde_json::Value = serde_json::to_value(&snapshot).unwrap();
    let first = &value["columns"][0]["elements"][0];
    assert!(first["id"].is_u64());
    assert_eq!(first["type"], "slim");
    assert!(value["columns"][0]["id"].is_u64());
}

#[test]
fn schema_version_defaults_when_absent() {
    let json = r#"{
        "metadata": { "name": "Library Shelf" },
        "columns": [
            { "id": 1, "elements": [{ "id": 2, "type": "high" }] }
        ]
    }"#;
    let snapshot: ShelfSnapshot = serde_json::from_str(json).unwrap();
    assert!(snapshot.validate().is_ok());
    assert_eq!(snapshot.element_count(), 1);
    assert_eq!(snapshot.metadata.building, None);
}

#[test]
fn minter_resumes_above_reloaded_ids() {
    let mut minter = IdMinter::new();
    let layout = build_layout(&mut minter);
    let snapshot = ShelfSnapshot::capture(&layout, ShelfMetadata::new("Library Shelf"));

    let reloaded = snapshot.layout();
    let mut resumed = IdMinter::starting_at(reloaded.max_raw_id() + 1);
    let fresh = resumed.element_id().unwrap();
    assert!(
        reloaded
            .columns()
            .iter()
            .flat_map(|column| &column.elements)
            .all(|element| element.id != fresh)
    );
}
