//! Table loading tests - JSON tables and fail-fast validation

use std::io::Write;

use tetro_kick::core::{KickConvention, PieceCells, PieceSet, TableError, TableFile};
use tetro_kick::types::{Direction, Orientation, PieceKind, Transition};

const T_SHAPES: &str = r#"[
    [[1, 0], [0, 1], [1, 1], [2, 1]],
    [[1, 0], [1, 1], [2, 1], [1, 2]],
    [[0, 1], [1, 1], [2, 1], [1, 2]],
    [[1, 0], [0, 1], [1, 1], [1, 2]]
]"#;

fn t_only(convention: &str, first_kick: &str) -> String {
    let labels = ["0->1", "1->0", "1->2", "2->1", "2->3", "3->2", "3->0", "0->3"];
    let entries: Vec<String> = labels
        .iter()
        .map(|label| format!(r#""{label}": [{first_kick}[1, 0]]"#))
        .collect();
    format!(
        r#"{{
            "convention": "{convention}",
            "families": {{ "tiny": {{ {} }} }},
            "pieces": {{ "t": {{ "family": "tiny", "shapes": {T_SHAPES} }} }}
        }}"#,
        entries.join(", ")
    )
}

#[test]
fn test_explicit_zero_tables_load() {
    let set = PieceSet::from_json(&t_only("explicit_zero", "[0, 0], ")).unwrap();
    assert_eq!(set.len(), 1);

    let kicks = &set.get(PieceKind::T).unwrap().kicks;
    assert_eq!(kicks.family(), "tiny");
    assert_eq!(kicks.convention(), KickConvention::ExplicitZero);
    assert_eq!(kicks.kicks(Transition::NorthToEast), &[(0, 0), (1, 0)]);
}

#[test]
fn test_implicit_zero_is_tried_first() {
    let set = PieceSet::from_json(&t_only("implicit_zero", "")).unwrap();
    let kicks = &set.get(PieceKind::T).unwrap().kicks;
    assert_eq!(kicks.kicks(Transition::NorthToEast), &[(1, 0)]);
    assert_eq!(
        kicks.candidates(Transition::NorthToEast).collect::<Vec<_>>(),
        vec![(0, 0), (1, 0)]
    );

    let mut piece = set.spawn(PieceKind::T, (4, 4)).unwrap();
    let placement = piece.rotate(Direction::Clockwise, &|_: &PieceCells| true).unwrap();
    assert_eq!(placement.kick, (0, 0));
    assert_eq!(placement.orientation, Orientation::East);
}

#[test]
fn test_convention_mismatch_is_rejected() {
    assert!(matches!(
        PieceSet::from_json(&t_only("explicit_zero", "")),
        Err(TableError::ZeroKickNotFirst { .. })
    ));
    assert!(matches!(
        PieceSet::from_json(&t_only("implicit_zero", "[0, 0], ")),
        Err(TableError::RedundantZeroKick { .. })
    ));
}

#[test]
fn test_missing_transition_fails_at_load() {
    let json = t_only("explicit_zero", "[0, 0], ").replace(r#""2->3""#, r#""2->1""#);
    match PieceSet::from_json(&json) {
        Err(TableError::MissingKickData { family, transition }) => {
            assert_eq!(family, "tiny");
            assert_eq!(transition, Transition::SouthToWest);
        }
        other => panic!("expected MissingKickData, got {:?}", other),
    }
}

#[test]
fn test_wrong_shape_arity_is_a_parse_error() {
    // North loses a cell
    let json = t_only("explicit_zero", "[0, 0], ")
        .replace("[1, 0], [0, 1], [1, 1], [2, 1]]", "[1, 0], [0, 1], [1, 1]]");
    assert!(matches!(PieceSet::from_json(&json), Err(TableError::Json(_))));
}

#[test]
fn test_too_many_kicks_is_rejected() {
    let long = "[0, 0], [1, 0], [2, 0], [3, 0], [4, 0], [5, 0], [6, 0], [7, 0], ";
    assert!(matches!(
        PieceSet::from_json(&t_only("explicit_zero", long)),
        Err(TableError::KickListTooLong { len: 9, .. })
    ));
}

#[test]
fn test_standard_tables_roundtrip_through_json() {
    let json = PieceSet::standard().to_json().unwrap();
    let reloaded = PieceSet::from_json(&json).unwrap();
    assert_eq!(
        reloaded.to_table_file().unwrap(),
        TableFile::from_piece_set(&PieceSet::standard()).unwrap()
    );
}

#[test]
fn test_tables_load_from_path() {
    let path = std::env::temp_dir()
        .join(format!("tetro-kick-tables-{}.json", std::process::id()));
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(t_only("explicit_zero", "[0, 0], ").as_bytes()).unwrap();
    drop(file);

    let set = PieceSet::from_path(&path).unwrap();
    assert!(set.get(PieceKind::T).is_some());
    std::fs::remove_file(&path).unwrap();

    assert!(matches!(PieceSet::from_path(&path), Err(TableError::Io(_))));
}

fn o_only(convention: &str, list: &str) -> String {
    let labels = ["0->1", "1->0", "1->2", "2->1", "2->3", "3->2", "3->0", "0->3"];
    let entries: Vec<String> = labels
        .iter()
        .map(|label| format!(r#""{label}": [{list}]"#))
        .collect();
    let square = "[[1, 0], [2, 0], [1, 1], [2, 1]]";
    format!(
        r#"{{
            "convention": "{convention}",
            "families": {{ "o": {{ {} }} }},
            "pieces": {{ "o": {{ "family": "o", "shapes": [{square}, {square}, {square}, {square}] }} }}
        }}"#,
        entries.join(", ")
    )
}

#[test]
fn test_empty_lists_mean_in_place_only_under_implicit_zero() {
    let set = PieceSet::from_json(&o_only("implicit_zero", "")).unwrap();
    let kicks = &set.get(PieceKind::O).unwrap().kicks;
    assert!(kicks.kicks(Transition::NorthToEast).is_empty());
    assert_eq!(
        kicks.candidates(Transition::NorthToEast).collect::<Vec<_>>(),
        vec![(0, 0)]
    );

    let mut piece = set.spawn(PieceKind::O, (4, 4)).unwrap();
    let rejected = piece
        .rotate(Direction::Clockwise, &|_: &PieceCells| false)
        .unwrap_err();
    assert_eq!(rejected.candidates_tried, 1);

    assert!(matches!(
        PieceSet::from_json(&o_only("explicit_zero", "")),
        Err(TableError::ZeroKickNotFirst { .. })
    ));
    assert!(PieceSet::from_json(&o_only("explicit_zero", "[0, 0]")).is_ok());
}
