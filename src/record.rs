use core::fmt;
use core::hash::{Hash, Hasher};

use crate::digest::record_digest;

pub const DEFAULT_NAME: &str = "DEFAULT_NAME";

pub const DEFAULT_AGE: i32 = 18;

/// A name/age pair used as a composite map key. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    name: String,
    age: i32,
}

impl Record {
    pub fn new(name: impl Into<String>, age: i32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i32 {
        self.age
    }
}

impl Default for Record {
    fn default() -> Self {
        Self::new(DEFAULT_NAME, DEFAULT_AGE)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} IS {}", self.name, self.age)
    }
}

// Feeds the combination digest rather than the raw fields, so that any map
// keyed by `Record` buckets on the same value `record_digest` returns.
impl Hash for Record {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(record_digest(self));
    }
}

#[test]
fn test_default() {
    let r = Record::default();
    assert_eq!(r.name(), "DEFAULT_NAME");
    assert_eq!(r.age(), 18);
    assert_eq!(r, Record::new(DEFAULT_NAME, DEFAULT_AGE));
}

#[test]
fn test_accepts_any_input() {
    let r = Record::new("", -7);
    assert_eq!(r.name(), "");
    assert_eq!(r.age(), -7);

    let r = Record::new(String::from("x"), i32::MIN);
    assert_eq!(r.age(), i32::MIN);
}

#[test]
fn test_equality_is_exact() {
    let a = Record::new("PER_A", 15);
    assert_eq!(a, Record::new("PER_A", 15));
    assert_ne!(a, Record::new("per_a", 15));
    assert_ne!(a, Record::new("PER_A", 16));
    assert_ne!(a, Record::new("PER_A ", 15));
}

#[test]
fn test_copies_are_independent() {
    let a = Record::new("PER_A", 15);
    let b = a.clone();
    drop(a);
    assert_eq!(b.to_string(), "PER_A IS 15");
}

#[test]
fn test_render() {
    assert_eq!(Record::new("PER_A", 15).to_string(), "PER_A IS 15");
    assert_eq!(Record::default().to_string(), "DEFAULT_NAME IS 18");
    assert_eq!(Record::new("", -1).to_string(), " IS -1");
}

#[test]
fn test_hash_writes_digest() {
    use std::collections::hash_map::DefaultHasher;

    let r = Record::new("PER_B", 10);
    let mut a = DefaultHasher::new();
    r.hash(&mut a);
    let mut b = DefaultHasher::new();
    b.write_u64(record_digest(&r));
    assert_eq!(a.finish(), b.finish());
}
