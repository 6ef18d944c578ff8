//! A name/age [`Record`] key with a seeded combination hash.
//!
//! The digest folds the hashes of both fields into an accumulator seeded with
//! 17, multiplying by 31 before each field is added (name first, then age).
//! [`RecordMap`] plugs that digest into `std::collections::HashMap` through the
//! pass-through [`DigestHasher`], so buckets are chosen by the digest itself.
//!
//! ```
//! use record_hash::{Record, RecordMap};
//!
//! let mut hobbies = RecordMap::new();
//! hobbies.try_emplace(Record::new("PER_A", 15), "SPORT");
//! hobbies.try_emplace(Record::new("PER_A", 15), "BOOKS");
//! assert_eq!(hobbies.get(&Record::new("PER_A", 15)), Some(&"SPORT"));
//! ```

mod digest;
mod map;
mod record;

pub use digest::{
    record_digest, record_digest_with, DigestHasher, DigestState, FieldHashBuilder, MULTIPLIER,
    SEED,
};
pub use map::{RecordMap, DEFAULT_BUCKET_HINT};
pub use record::{Record, DEFAULT_AGE, DEFAULT_NAME};
