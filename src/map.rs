use std::collections::hash_map::{Entry, Iter};
use std::collections::HashMap;
use std::io;

use crate::digest::DigestState;
use crate::record::Record;

pub const DEFAULT_BUCKET_HINT: usize = 100;

/// A `Record -> V` map that buckets entries by [`record_digest`](crate::record_digest).
///
/// | method             | key present        | key absent |
/// |--------------------|--------------------|------------|
/// | `try_emplace`      | keeps stored value | inserts    |
/// | `insert_or_assign` | overwrites         | inserts    |
/// | `insert`           | keeps stored value | inserts    |
/// | `*slot(k) = v`     | overwrites         | inserts    |
#[derive(Clone, Debug)]
pub struct RecordMap<V> {
    inner: HashMap<Record, V, DigestState>,
}

impl<V> RecordMap<V> {
    pub fn new() -> Self {
        Self {
            inner: HashMap::with_hasher(DigestState::default()),
        }
    }

    pub fn with_bucket_hint(hint: usize) -> Self {
        Self {
            inner: HashMap::with_capacity_and_hasher(hint, DigestState::default()),
        }
    }

    pub fn try_emplace(&mut self, key: Record, value: V) -> bool {
        match self.inner.entry(key) {
            Entry::Occupied(_) => false,
            Entry::Vacant(e) => {
                e.insert(value);
                true
            }
        }
    }

    /// Returns `true` if the key was new.
    pub fn insert_or_assign(&mut self, key: Record, value: V) -> bool {
        self.inner.insert(key, value).is_none()
    }

    pub fn insert(&mut self, key: Record, value: V) -> bool {
        self.try_emplace(key, value)
    }

    pub fn slot(&mut self, key: Record) -> &mut V
    where
        V: Default,
    {
        self.inner.entry(key).or_default()
    }

    pub fn get(&self, key: &Record) -> Option<&V> {
        self.inner.get(key)
    }

    pub fn contains_key(&self, key: &Record) -> bool {
        self.inner.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, Record, V> {
        self.inner.iter()
    }

    /// Number of buckets backing the table.
    ///
    /// Inferred from `capacity()` assuming the std swiss-table layout (power of
    /// two buckets, 7/8 maximum load). std only guarantees `capacity()` as a
    /// lower bound, so this is an estimate tied to the current std internals,
    /// not a guarantee. An unallocated map reports a single bucket.
    pub fn bucket_count(&self) -> usize {
        let capacity = self.inner.capacity();
        if capacity == 0 {
            1
        } else if capacity < 8 {
            capacity + 1
        } else {
            capacity / 7 * 8
        }
    }

    pub fn write_report<W: io::Write>(&self, out: &mut W) -> io::Result<()>
    where
        V: core::fmt::Display,
    {
        for (key, value) in self.iter() {
            writeln!(out, "{} AND HAS HOBBY: {}", key, value)?;
        }
        writeln!(out, "{}", self.bucket_count())
    }
}

impl<V> Default for RecordMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, V> IntoIterator for &'a RecordMap<V> {
    type Item = (&'a Record, &'a V);
    type IntoIter = Iter<'a, Record, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
fn sport_map() -> (RecordMap<String>, Record) {
    let k = Record::new("PER_A", 15);
    let mut map = RecordMap::new();
    assert!(map.try_emplace(k.clone(), "SPORT".to_string()));
    (map, k)
}

#[test]
fn test_try_emplace_keeps_existing() {
    let (mut map, k) = sport_map();
    assert!(!map.try_emplace(k.clone(), "BOOKS".to_string()));
    assert_eq!(map.get(&k).map(String::as_str), Some("SPORT"));
    assert_eq!(map.len(), 1);
}

#[test]
fn test_insert_or_assign_overwrites() {
    let (mut map, k) = sport_map();
    assert!(!map.insert_or_assign(k.clone(), "BOOKS".to_string()));
    assert_eq!(map.get(&k).map(String::as_str), Some("BOOKS"));
    assert!(map.insert_or_assign(Record::new("PER_Z", 1), "ART".to_string()));
    assert_eq!(map.len(), 2);
}

#[test]
fn test_insert_keeps_existing() {
    let (mut map, k) = sport_map();
    assert!(!map.insert(k.clone(), "MUSIC".to_string()));
    assert_eq!(map.get(&k).map(String::as_str), Some("SPORT"));
    assert!(map.insert(Record::new("PER_B", 10), "MUSIC".to_string()));
    assert_eq!(map.len(), 2);
}

#[test]
fn test_slot_overwrites_or_inserts() {
    let (mut map, k) = sport_map();
    *map.slot(k.clone()) = "MUSIC".to_string();
    assert_eq!(map.get(&k).map(String::as_str), Some("MUSIC"));

    let fresh = Record::new("PER_C", 21);
    assert!(map.slot(fresh.clone()).is_empty());
    assert!(map.contains_key(&fresh));
    assert_eq!(map.len(), 2);
}

#[test]
fn test_lookup_by_equal_copy() {
    let (map, _) = sport_map();
    assert!(map.contains_key(&Record::new("PER_A", 15)));
    assert!(!map.contains_key(&Record::new("PER_A", 14)));
    assert!(!map.contains_key(&Record::default()));
}

#[test]
fn test_bucket_count() {
    let map: RecordMap<u8> = RecordMap::new();
    assert!(map.is_empty());
    assert_eq!(map.bucket_count(), 1);

    let map: RecordMap<u8> = RecordMap::with_bucket_hint(DEFAULT_BUCKET_HINT);
    assert!(map.bucket_count() >= DEFAULT_BUCKET_HINT);
}

#[test]
fn test_report_format() {
    let (map, _) = sport_map();
    let mut out = Vec::new();
    map.write_report(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "PER_A IS 15 AND HAS HOBBY: SPORT");
    assert_eq!(lines[1], map.bucket_count().to_string());
}
