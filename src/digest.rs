use core::hash::{BuildHasher, BuildHasherDefault, Hasher};
use std::collections::hash_map::DefaultHasher;

use crate::record::Record;

pub const SEED: u64 = 17;
pub const MULTIPLIER: u64 = 31;

/// Field hasher used by [`record_digest`].
///
/// SipHash with fixed keys: stable for a given toolchain, but digests are not
/// portable across Rust releases or platforms and must be treated as opaque.
pub type FieldHashBuilder = BuildHasherDefault<DefaultHasher>;

#[inline]
pub fn record_digest(record: &Record) -> u64 {
    record_digest_with(&FieldHashBuilder::default(), record)
}

/// `res = 17; res = res * 31 + h(name); res = res * 31 + h(age)`, wrapping.
pub fn record_digest_with<S: BuildHasher>(fields: &S, record: &Record) -> u64 {
    let res = fold(SEED, fields.hash_one(record.name()));
    fold(res, fields.hash_one(record.age()))
}

#[inline(always)]
fn fold(acc: u64, h: u64) -> u64 {
    acc.wrapping_mul(MULTIPLIER).wrapping_add(h)
}

/// Folds every write into the state with the digest multiplier.
///
/// Starting from zero, a single `write_u64(d)` finishes as `d`, so a lone
/// `Record` key is placed by its digest unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct DigestHasher(u64);

impl Hasher for DigestHasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.0
    }

    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.0 = fold(self.0, b as u64);
        }
    }

    #[inline]
    fn write_u64(&mut self, n: u64) {
        self.0 = fold(self.0, n);
    }
}

pub type DigestState = BuildHasherDefault<DigestHasher>;

// Hashes every value to the number of bytes written for it.
#[cfg(test)]
#[derive(Default)]
struct ByteCount(u64);

#[cfg(test)]
impl Hasher for ByteCount {
    fn finish(&self) -> u64 {
        self.0
    }

    fn write(&mut self, bytes: &[u8]) {
        self.0 += bytes.len() as u64;
    }
}

#[cfg(test)]
fn age_first_digest<S: BuildHasher>(fields: &S, record: &Record) -> u64 {
    let res = fold(SEED, fields.hash_one(record.age()));
    fold(res, fields.hash_one(record.name()))
}

#[test]
fn test_fold_formula() {
    let fields = BuildHasherDefault::<ByteCount>::default();

    // str hashes as its bytes plus a 0xff terminator, i32 as 4 bytes.
    let r = Record::new("PER_A", 15);
    assert_eq!(record_digest_with(&fields, &r), (17 * 31 + 6) * 31 + 4);

    let r = Record::new("", 0);
    assert_eq!(record_digest_with(&fields, &r), (17 * 31 + 1) * 31 + 4);
}

#[test]
fn test_deterministic() {
    for r in [
        Record::default(),
        Record::new("", 0),
        Record::new("PER_C", 21),
        Record::new("a much longer name with spaces", i32::MAX),
    ] {
        assert_eq!(record_digest(&r), record_digest(&r));
        assert_eq!(record_digest(&r), record_digest(&r.clone()));
    }
}

#[test]
fn test_field_order_matters() {
    let fields = FieldHashBuilder::default();
    let sample = [
        Record::new("PER_A", 15),
        Record::new("PER_B", 10),
        Record::new("PER_C", 21),
        Record::default(),
    ];
    assert!(sample
        .iter()
        .any(|r| record_digest_with(&fields, r) != age_first_digest(&fields, r)));
}

#[test]
fn test_distinct_records() {
    let a = record_digest(&Record::new("PER_A", 15));
    let b = record_digest(&Record::new("PER_B", 10));
    let c = record_digest(&Record::new("PER_C", 21));
    assert_ne!(a, b);
    assert_ne!(b, c);
    assert_ne!(a, c);
    assert_ne!(
        record_digest(&Record::new("PER_A", 15)),
        record_digest(&Record::new("PER_A", 16))
    );
}

#[test]
fn test_extreme_inputs() {
    let fields = FieldHashBuilder::default();
    for age in [i32::MIN, -1, 0, 1, i32::MAX] {
        let r = Record::new("", age);
        assert_eq!(record_digest_with(&fields, &r), record_digest(&r));
    }
}

#[test]
fn test_digest_hasher_passthrough() {
    let mut h = DigestHasher::default();
    h.write_u64(0xdead_beef);
    assert_eq!(h.finish(), 0xdead_beef);

    let r = Record::new("PER_B", 10);
    assert_eq!(DigestState::default().hash_one(&r), record_digest(&r));
}

#[test]
fn test_digest_hasher_folds_every_write() {
    let state = DigestState::default();
    assert_eq!(state.hash_one((1u64, 2u64)), 31 + 2);
    assert_ne!(state.hash_one((1u64, 2u64)), state.hash_one((3u64, 2u64)));

    let z = Record::new("Z", 9);
    assert_ne!(
        state.hash_one((Record::new("A", 1), z.clone())),
        state.hash_one((Record::new("B", 2), z))
    );

    let mut h = DigestHasher::default();
    h.write(&[1, 2]);
    assert_eq!(h.finish(), 31 + 2);
}
