use navprice_core::{Catalog, InstrumentDescriptor, split_fund_list};
use proptest::prelude::*;

fn catalog() -> Catalog {
    Catalog::vanguard_lifestrategy().expect("static catalog is valid")
}

#[test]
fn empty_request_selects_whole_catalog() {
    let c = catalog();
    let sel = c.resolve::<&str>(&[]);
    assert_eq!(sel.worklist.len(), c.len());
    assert!(sel.unrecognised.is_empty());
    let ids: Vec<&str> = sel.worklist.iter().map(InstrumentDescriptor::id).collect();
    assert_eq!(ids, ["ls20", "ls40", "ls60", "ls80", "ls100"]);
}

#[test]
fn unknown_alongside_known_is_skipped_and_reported() {
    let sel = catalog().resolve(&["ls40", "ls999"]);
    let ids: Vec<&str> = sel.worklist.iter().map(InstrumentDescriptor::id).collect();
    assert_eq!(ids, ["ls40"]);
    assert_eq!(sel.unrecognised, ["ls999"]);
}

#[test]
fn only_unknown_ids_yield_empty_worklist() {
    let sel = catalog().resolve(&["foo", "bar", "baz"]);
    assert!(sel.worklist.is_empty());
    assert_eq!(sel.unrecognised, ["foo", "bar", "baz"]);
}

#[test]
fn request_order_wins_over_catalog_order_and_duplicates_are_kept() {
    let sel = catalog().resolve(&["ls100", "ls20", "ls100"]);
    let ids: Vec<&str> = sel.worklist.iter().map(InstrumentDescriptor::id).collect();
    assert_eq!(ids, ["ls100", "ls20", "ls100"]);
}

#[test]
fn command_line_list_resolves() {
    let c = catalog();
    let sel = c.resolve(&split_fund_list("ls60, nope ,ls80,"));
    assert_eq!(sel.worklist.len(), 2);
    assert_eq!(sel.unrecognised, ["nope"]);
}

proptest! {
    #[test]
    fn resolve_partitions_request(ids in proptest::collection::vec(
        prop_oneof![
            Just("ls20".to_string()),
            Just("ls40".to_string()),
            Just("ls60".to_string()),
            Just("ls80".to_string()),
            Just("ls100".to_string()),
            "[a-z]{1,6}[0-9]{0,3}",
        ],
        1..12,
    )) {
        let c = catalog();
        let sel = c.resolve(&ids);
        prop_assert_eq!(sel.worklist.len() + sel.unrecognised.len(), ids.len());

        let known: Vec<&String> = ids.iter().filter(|id| c.get(id).is_some()).collect();
        let got: Vec<&str> = sel.worklist.iter().map(InstrumentDescriptor::id).collect();
        prop_assert_eq!(got, known.iter().map(|s| s.as_str()).collect::<Vec<_>>());
        for id in &sel.unrecognised {
            prop_assert!(c.get(id).is_none());
        }
    }
}
