use strum::IntoEnumIterator;

use super::*;

fn meta(name: &str, address: &str) -> ClubMeta {
    ClubMeta {
        name: name.into(),
        address: address.into(),
    }
}

fn catalog() -> ClubCatalog {
    let meta = vec![
        meta("기흥", "경기도 용인시"),
        meta("아덴힐", "경기도 이천시"),
        meta("천룡", "충청북도 진천군"),
        meta("비발디파크", "강원특별자치도 홍천군"),
        meta("사이판", ""),
    ];
    let names = ["기흥", "아덴힐", "천룡", "비발디파크", "사이판", "무명"]
        .map(String::from);
    ClubCatalog::build(names, &meta)
}

fn names(bucket: &[String]) -> Vec<&str> {
    bucket.iter().map(String::as_str).collect()
}

#[test]
fn catalog_classifies_through_the_metadata_join() {
    let catalog = catalog();
    let regions: Vec<_> = catalog.entries().iter().map(|e| e.region).collect();
    assert_eq!(
        vec![
            Region::Gyeonggi,
            Region::Gyeonggi,
            Region::Chungcheong,
            Region::Gangwon,
            Region::Other, // empty address
            Region::Other, // no metadata entry at all
        ],
        regions
    );
}

#[test]
fn load_buckets_by_region_in_catalog_order() {
    let catalog = catalog();
    // persisted order deliberately scrambled; bucket order must follow the catalog
    let persisted = ["천룡", "아덴힐", "기흥"].map(String::from);
    let state = FavoritesState::load(&persisted, &catalog);

    assert_eq!(vec!["기흥", "아덴힐"], names(state.bucket(Region::Gyeonggi)));
    assert_eq!(vec!["천룡"], names(state.bucket(Region::Chungcheong)));
    assert!(state.bucket(Region::Gangwon).is_empty());
    assert!(state.bucket(Region::Other).is_empty());
}

#[test]
fn load_drops_names_unknown_to_the_catalog() {
    let catalog = catalog();
    let persisted = ["기흥", "폐업한구장"].map(String::from);
    let state = FavoritesState::load(&persisted, &catalog);
    assert_eq!(vec!["기흥".to_string()], state.flatten());
}

#[test]
fn toggle_all_selects_the_whole_region_and_nothing_else() {
    let catalog = catalog();
    let mut state = FavoritesState::load(&["천룡".to_string()], &catalog);

    state.toggle_all(Region::Gyeonggi, true, &catalog);
    assert_eq!(vec!["기흥", "아덴힐"], names(state.bucket(Region::Gyeonggi)));
    assert_eq!(vec!["천룡"], names(state.bucket(Region::Chungcheong)));

    state.toggle_all(Region::Gyeonggi, false, &catalog);
    assert!(state.bucket(Region::Gyeonggi).is_empty());
    assert_eq!(vec!["천룡"], names(state.bucket(Region::Chungcheong)));
}

#[test]
fn commit_replaces_only_the_edited_region() {
    let catalog = catalog();
    let persisted = ["기흥", "아덴힐", "비발디파크"].map(String::from);
    let mut state = FavoritesState::load(&persisted, &catalog);

    let selected = HashSet::from(["아덴힐".to_string()]);
    state.commit(Region::Gyeonggi, &selected, &catalog);

    assert_eq!(vec!["아덴힐"], names(state.bucket(Region::Gyeonggi)));
    // the Gangwon bucket was not open for editing and must survive untouched
    assert_eq!(vec!["비발디파크"], names(state.bucket(Region::Gangwon)));
}

#[test]
fn commit_rejects_clubs_of_foreign_regions() {
    let catalog = catalog();
    let mut state = FavoritesState::load(&[], &catalog);

    // 천룡 is a Chungcheong club; committing it into Gyeonggi must drop it
    let selected = HashSet::from(["기흥".to_string(), "천룡".to_string()]);
    state.commit(Region::Gyeonggi, &selected, &catalog);

    assert_eq!(vec!["기흥"], names(state.bucket(Region::Gyeonggi)));
    assert!(state.bucket(Region::Chungcheong).is_empty());
}

#[test]
fn buckets_only_hold_correctly_classified_clubs() {
    let catalog = catalog();
    let persisted = ["기흥", "천룡", "비발디파크", "사이판"].map(String::from);
    let mut state = FavoritesState::load(&persisted, &catalog);
    state.toggle_all(Region::Other, true, &catalog);
    state.commit(
        Region::Gangwon,
        &HashSet::from(["비발디파크".to_string()]),
        &catalog,
    );

    for region in Region::iter() {
        for name in state.bucket(region) {
            let entry = catalog
                .entries()
                .iter()
                .find(|entry| &entry.name == name)
                .unwrap();
            assert_eq!(entry.region, region, "{name} leaked into {region}");
        }
    }
}

#[test]
fn flatten_round_trips_through_load() {
    let catalog = catalog();
    let persisted = ["기흥", "천룡", "비발디파크"].map(String::from);
    let state = FavoritesState::load(&persisted, &catalog);
    let flat = state.flatten();
    assert_eq!(state, FavoritesState::load(&flat, &catalog));
}
