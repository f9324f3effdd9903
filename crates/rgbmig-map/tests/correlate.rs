//! End-to-end correlation over parsed listings.

use rgbmig_asm::assign_source;
use rgbmig_map::{correlate_flags, correlate_maps, diff_flags, diff_maps};
use rgbmig_model::MapId;

const OLD_EVENTS: &str = "\
\tconst_def
\tconst EVENT_GOT_STARTER
\tconst EVENT_BEAT_RIVAL
\tconst EVENT_OLD_ONLY
\tconst EVENT_HALL_OF_FAME
";

const NEW_EVENTS: &str = "\
\tconst_def
\tconst EVENT_NEW_INTRO
\tconst EVENT_GOT_STARTER
\tconst_skip 2
\tconst EVENT_HALL_OF_FAME
\tconst EVENT_BEAT_RIVAL
";

#[test]
fn test_flag_mapping_between_versions() {
    let old = assign_source(OLD_EVENTS).unwrap();
    let new = assign_source(NEW_EVENTS).unwrap();

    let mapping = correlate_flags(&old.flags, &new.flags);

    let pairs: Vec<(u32, u32, &str)> = mapping
        .iter()
        .map(|entry| (entry.source, entry.target, entry.name.as_str()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            (0, 1, "EVENT_GOT_STARTER"),
            (1, 5, "EVENT_BEAT_RIVAL"),
            (3, 4, "EVENT_HALL_OF_FAME"),
        ]
    );
}

#[test]
fn test_flag_diff_between_versions() {
    let old = assign_source(OLD_EVENTS).unwrap();
    let new = assign_source(NEW_EVENTS).unwrap();

    let removed = diff_flags(&old.flags, &new.flags);
    assert_eq!(removed.len(), 1);
    assert_eq!((removed[0].index, removed[0].name.as_str()), (2, "EVENT_OLD_ONLY"));

    let added = diff_flags(&new.flags, &old.flags);
    assert_eq!(added.len(), 1);
    assert_eq!(added[0].name, "EVENT_NEW_INTRO");
}

const OLD_MAPS: &str = "\
\tnewgroup
\tmap_const OLIVINE_CITY
\tmap_const OLIVINE_POKECENTER
\tnewgroup
\tmap_const MAHOGANY_TOWN
";

const NEW_MAPS: &str = "\
\tnewgroup
\tmap_const NEW_BARK_TOWN
\tmap_const OLIVINE_CITY
\tnewgroup
\tmap_const MAHOGANY_TOWN
";

#[test]
fn test_map_tuple_mapping_between_versions() {
    let old = assign_source(OLD_MAPS).unwrap();
    let new = assign_source(NEW_MAPS).unwrap();

    let mapping = correlate_maps(&old.maps, &new.maps);

    let pairs: Vec<(MapId, MapId, &str)> = mapping
        .iter()
        .map(|entry| (entry.source, entry.target, entry.name.as_str()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            (MapId::new(1, 1), MapId::new(1, 2), "OLIVINE_CITY"),
            (MapId::new(2, 1), MapId::new(2, 1), "MAHOGANY_TOWN"),
        ]
    );

    let removed = diff_maps(&old.maps, &new.maps);
    assert_eq!(removed.len(), 1);
    assert_eq!(removed[0].name, "OLIVINE_POKECENTER");
    assert_eq!(removed[0].id, MapId::new(1, 2));
}
