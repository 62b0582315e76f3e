//! Report model
//!
//! Keys keep first-insertion order at every level and records keep append
//! order, so the serialized report is a pure function of the input order.

use rustc_hash::FxHashMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::features::intentions::{Classification, TestCaseRecord};

/// String-keyed map that serializes in insertion order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedBuckets<V> {
    entries: Vec<(String, V)>,
    index: FxHashMap<String, usize>,
}

impl<V> OrderedBuckets<V> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    /// Bucket for `key`, created with `V::default()` on first use
    pub fn entry(&mut self, key: &str) -> &mut V
    where
        V: Default,
    {
        let position = match self.index.get(key) {
            Some(&position) => position,
            None => {
                self.entries.push((key.to_string(), V::default()));
                self.index.insert(key.to_string(), self.entries.len() - 1);
                self.entries.len() - 1
            }
        };
        &mut self.entries[position].1
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.index.get(key).map(|&position| &self.entries[position].1)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V> Default for OrderedBuckets<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Serialize> Serialize for OrderedBuckets<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

type LayerBuckets = OrderedBuckets<Vec<TestCaseRecord>>;
type ComponentBuckets = OrderedBuckets<LayerBuckets>;

/// domain → component → layer → test case records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    domains: OrderedBuckets<ComponentBuckets>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `record` to the bucket of `classification`
    pub fn insert(&mut self, classification: &Classification, record: TestCaseRecord) {
        self.domains
            .entry(&classification.domain)
            .entry(&classification.component)
            .entry(&classification.layer)
            .push(record);
    }

    /// Records of one bucket, in insertion order
    pub fn bucket(&self, classification: &Classification) -> Option<&[TestCaseRecord]> {
        self.domains
            .get(&classification.domain)?
            .get(&classification.component)?
            .get(&classification.layer)
            .map(Vec::as_slice)
    }

    pub fn domains(&self) -> impl Iterator<Item = &str> {
        self.domains.keys()
    }

    pub fn components(&self, domain: &str) -> Vec<&str> {
        self.domains
            .get(domain)
            .map(|components| components.keys().collect())
            .unwrap_or_default()
    }

    /// Every record with its classification, in report order
    pub fn records(&self) -> impl Iterator<Item = (Classification, &TestCaseRecord)> {
        self.domains.iter().flat_map(|(domain, components)| {
            components.iter().flat_map(move |(component, layers)| {
                layers.iter().flat_map(move |(layer, records)| {
                    records
                        .iter()
                        .map(move |record| (Classification::new(domain, component, layer), record))
                })
            })
        })
    }

    pub fn record_count(&self) -> usize {
        self.records().count()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}

impl Serialize for Report {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.domains.serialize(serializer)
    }
}
