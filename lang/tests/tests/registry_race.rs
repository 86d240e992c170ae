//! Kept alone in its own binary so nothing touches the catalog before the race.

use parlance_dialects::*;
use pretty_assertions::assert_eq;

#[test]
fn concurrent_first_access_builds_once() {
    assert_eq!(registry_builds(), 0);
    let catalogs: Vec<usize> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..64)
            .map(|_| {
                s.spawn(|| {
                    let catalog = catalog();
                    assert_eq!(catalog.len(), 13);
                    assert_eq!(catalog.name_of(&SCALA213), Some("Scala213"));
                    catalog as *const Catalog as usize
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert!(catalogs.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(registry_builds(), 1);
}
