use battleships_lobby::{GameProfile, GridMark, PlacementCommand, PlacementSession, CLASSIC};
use battleships_types::{Direction, ExecuteMsg, FleetManifest, GridSize, Orientation, Position};
use proptest::prelude::*;

fn session(n: u8, sizes: &[u8]) -> PlacementSession {
    let manifest = FleetManifest::new(GridSize::new(n).unwrap(), sizes.to_vec()).unwrap();
    PlacementSession::new(manifest)
}

#[test]
fn two_ship_fleet_on_five_by_five() {
    let mut s = session(5, &[2, 3]);

    assert!(s.select_size(2));
    assert!(s.commit());
    assert_eq!(s.placed()[0].anchor, Position::ORIGIN);
    assert_eq!(s.placed()[0].spec.orientation, Orientation::Horizontal);

    assert!(s.select_size(3));
    assert!(!s.can_commit());
    assert!(!s.commit(), "overlaps the size-2 ship");
    assert_eq!(s.placed().len(), 1);
    assert!(s.active().is_some());

    assert!(s.move_to(Position::new(2, 0)));
    assert!(s.commit());
    assert!(s.is_complete());
    assert_eq!(s.placed()[1].id, 1);
    assert_eq!(s.placed()[1].anchor, Position::new(2, 0));
}

#[test]
fn refused_commit_leaves_state_untouched() {
    let mut s = session(5, &[2, 3]);
    s.select_size(2);
    s.commit();
    s.select_size(3);

    let before = serde_json::to_value(&s).unwrap();
    assert!(!s.commit());
    assert!(!s.move_active(Direction::Right));
    assert_eq!(serde_json::to_value(&s).unwrap(), before);
}

#[test]
fn keyboard_driven_classic_layout() {
    let mut s = CLASSIC.session().unwrap();
    let keys_per_ship: [(u8, &[&str]); 4] = [
        (6, &["Enter"]),
        (4, &["ArrowDown", "ArrowDown", "Enter"]),
        (
            3,
            &[
                "ArrowDown",
                "ArrowRight",
                "ArrowRight",
                "ArrowRight",
                "ArrowRight",
                " ",
                "Enter",
            ],
        ),
        (2, &["ArrowDown", "Enter"]),
    ];

    for (size, keys) in keys_per_ship {
        assert!(s.apply(PlacementCommand::Select(size)), "select {size}");
        for key in keys {
            let command = PlacementCommand::from_key(key).unwrap();
            assert!(s.apply(command), "size {size} key {key:?}");
        }
    }

    assert!(s.is_complete());
    assert!(s.available_sizes().is_empty());

    let marks = s.render();
    let placed_cells = marks
        .iter()
        .filter(|mark| matches!(mark, GridMark::Placed(_)))
        .count();
    assert_eq!(placed_cells, 6 + 4 + 3 + 2);

    let submission = s.submission("", CLASSIC.creation_cost()).unwrap();
    assert_eq!(submission.name, "My Game");
    assert_eq!(submission.cost.amount, 2_625_000);
    assert_eq!(submission.cost.denom, "uscrt");
    match submission.to_execute_msg() {
        ExecuteMsg::CreateGame { size, ships, .. } => {
            assert_eq!(size, 10);
            let lengths: Vec<u8> = ships.iter().map(|ship| ship.length).collect();
            assert_eq!(lengths, vec![6, 4, 3, 2]);
            assert!(!ships[2].is_horizontal);
            assert_eq!(ships[2].position, Position::new(4, 1));
        }
        other => panic!("unexpected message {other:?}"),
    }
}

#[test]
fn escape_discards_the_whole_layout() {
    let mut s = GameProfile::by_name("Mini").unwrap().session().unwrap();
    s.select_size(2);
    s.commit();
    s.select_size(3);
    assert!(s.apply(PlacementCommand::from_key("Escape").unwrap()));
    assert!(s.placed().is_empty());
    assert!(s.active().is_none());
}

proptest! {
    #[test]
    fn double_rotate_restores_anchor_and_orientation(
        n in 2_u8..=12,
        size_seed in 0_u8..=255,
        x in 0_u8..12,
        y in 0_u8..12,
    ) {
        let size = size_seed % n + 1;
        let mut s = session(n, &[size]);
        prop_assert!(s.select_size(size));
        s.move_to(Position::new(x, y));
        let before = *s.active().unwrap();

        if s.rotate() {
            prop_assert_ne!(s.active().unwrap().spec.orientation, before.spec.orientation);
            prop_assert!(s.rotate());
            prop_assert_eq!(*s.active().unwrap(), before);
        } else {
            prop_assert_eq!(*s.active().unwrap(), before);
        }
    }
}
