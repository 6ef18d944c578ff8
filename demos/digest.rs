use record_hash::{record_digest, record_digest_with, Record};

fn main() {
    let records = [
        Record::default(),
        Record::new("PER_A", 15),
        Record::new("PER_B", 10),
        Record::new("PER_C", 21),
        Record::new("", -1),
    ];

    println!("{:<24} {:>18} {:>18} {:>18} {:>18}", "record", "std", "fnv", "fx", "xxh3");
    for r in &records {
        println!(
            "{:<24} 0x{:016x} 0x{:016x} 0x{:016x} 0x{:016x}",
            r.to_string(),
            record_digest(r),
            record_digest_with(&fnv::FnvBuildHasher::default(), r),
            record_digest_with(&fxhash::FxBuildHasher::default(), r),
            record_digest_with(&xxhash_rust::xxh3::Xxh3Builder::new(), r),
        );
    }

    // Equal records must produce equal digests
    let a = Record::new("PER_A", 15);
    let b = a.clone();
    assert_eq!(record_digest(&a), record_digest(&b), "Digests should match!");
    println!("\nDigest stability verified!");
}
