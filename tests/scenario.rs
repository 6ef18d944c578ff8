use record_hash::{record_digest, Record, RecordMap, DEFAULT_BUCKET_HINT};

fn hobbies() -> RecordMap<String> {
    let p1 = Record::new("PER_A", 15);
    let p2 = Record::new("PER_A", 15);
    let p3 = Record::new("PER_B", 10);
    let p4 = Record::new("PER_B", 10);
    let p5 = Record::new("PER_C", 21);
    let p6 = Record::new("PER_C", 21);

    let mut map = RecordMap::with_bucket_hint(DEFAULT_BUCKET_HINT);
    map.try_emplace(p1, "SPORT".to_string());
    map.insert_or_assign(p2, "BOOKS".to_string());
    map.insert(p3, "MUSIC".to_string());
    *map.slot(p4) = "MUSIC".to_string();
    *map.slot(p5) = "MUSIC".to_string();
    *map.slot(p6) = "MUSIC".to_string();
    map
}

#[test]
fn test_one_entry_per_equal_group() {
    let map = hobbies();
    assert_eq!(map.len(), 3);

    let label = |name: &str, age| map.get(&Record::new(name, age)).map(String::as_str);
    assert_eq!(label("PER_A", 15), Some("BOOKS"));
    assert_eq!(label("PER_B", 10), Some("MUSIC"));
    assert_eq!(label("PER_C", 21), Some("MUSIC"));
}

#[test]
fn test_report() {
    let map = hobbies();
    let mut out = Vec::new();
    map.write_report(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    let mut lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    let buckets: usize = lines.pop().unwrap().parse().unwrap();
    assert_eq!(buckets, map.bucket_count());
    assert!(buckets >= DEFAULT_BUCKET_HINT);

    // Iteration order is unspecified.
    lines.sort_unstable();
    assert_eq!(
        lines,
        [
            "PER_A IS 15 AND HAS HOBBY: BOOKS",
            "PER_B IS 10 AND HAS HOBBY: MUSIC",
            "PER_C IS 21 AND HAS HOBBY: MUSIC",
        ]
    );
}

#[test]
fn test_iter_matches_digests() {
    let map = hobbies();
    let mut seen: Vec<u64> = map.iter().map(|(k, _)| record_digest(k)).collect();
    seen.sort_unstable();
    seen.dedup();
    assert_eq!(seen.len(), 3);
    assert_eq!((&map).into_iter().count(), 3);
}
