use record_hash::{Record, RecordMap, DEFAULT_BUCKET_HINT};

fn main() -> std::io::Result<()> {
    let p1 = Record::new("PER_A", 15);
    let p2 = Record::new("PER_A", 15);
    let p3 = Record::new("PER_B", 10);
    let p4 = Record::new("PER_B", 10);
    let p5 = Record::new("PER_C", 21);
    let p6 = Record::new("PER_C", 21);

    let mut people_with_hobbies = RecordMap::with_bucket_hint(DEFAULT_BUCKET_HINT);

    // Already present keys: try_emplace and insert keep the stored label,
    // insert_or_assign and slot assignment overwrite it.
    people_with_hobbies.try_emplace(p1, "SPORT");
    people_with_hobbies.insert_or_assign(p2, "BOOKS");
    people_with_hobbies.insert(p3, "MUSIC");
    *people_with_hobbies.slot(p4) = "MUSIC";
    *people_with_hobbies.slot(p5) = "MUSIC";
    *people_with_hobbies.slot(p6) = "MUSIC";

    people_with_hobbies.write_report(&mut std::io::stdout().lock())
}
