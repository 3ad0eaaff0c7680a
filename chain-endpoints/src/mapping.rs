//! The persisted endpoint mapping and its canonical JSON form.
//!
//! The on-disk format is a JSON object keyed by decimal chain ID strings,
//! each mapping to an array of endpoint URLs:
//!
//! ```json
//! {
//!     "80002": [
//!         "https://polygon-amoy.drpc.org",
//!         "https://rpc-amoy.polygon.technology"
//!     ]
//! }
//! ```
//!
//! Keys are ordered by numeric value, lists are sorted and duplicate-free,
//! indentation is four spaces and the document ends with a newline. Because
//! the in-memory representation is ordered, encoding an already-canonical
//! document reproduces it byte for byte.

use std::collections::{BTreeMap, BTreeSet};

use alloy::primitives::ChainId;
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;

use crate::error::Result;

/// Healthy endpoints per chain for one domain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EndpointMapping(BTreeMap<ChainId, BTreeSet<String>>);

impl EndpointMapping {
    /// Create an empty mapping.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Set the endpoints for `chain_id`, replacing any previous entry.
    pub fn insert(&mut self, chain_id: ChainId, endpoints: BTreeSet<String>) {
        self.0.insert(chain_id, endpoints);
    }

    /// Endpoints recorded for `chain_id`.
    #[must_use]
    pub fn get(&self, chain_id: ChainId) -> Option<&BTreeSet<String>> {
        self.0.get(&chain_id)
    }

    /// Chain IDs present in the mapping, ascending.
    pub fn chain_ids(&self) -> impl Iterator<Item = ChainId> + '_ {
        self.0.keys().copied()
    }

    /// Number of chains in the mapping.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the mapping has no chains.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Encode as canonical JSON (sorted, four-space indent, trailing newline).
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_canonical_json(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        let mut ser =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        self.serialize(&mut ser)?;
        buf.push(b'\n');
        Ok(buf)
    }

    /// Decode a mapping from JSON. Order and duplicates in the input are
    /// normalised away.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not an object of integer-string keys
    /// to string arrays.
    pub fn from_json(json: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(json)?)
    }
}

impl FromIterator<(ChainId, BTreeSet<String>)> for EndpointMapping {
    fn from_iter<T: IntoIterator<Item = (ChainId, BTreeSet<String>)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn keys_sort_numerically_not_lexicographically() {
        let mapping: EndpointMapping = [
            (11_155_111, set(&["https://b.example"])),
            (137, set(&["https://a.example"])),
            (80002, set(&["https://c.example"])),
            (1, set(&["https://d.example"])),
        ]
        .into_iter()
        .collect();

        let json = String::from_utf8(mapping.to_canonical_json().unwrap()).unwrap();
        let order: Vec<_> = ["\"1\"", "\"137\"", "\"80002\"", "\"11155111\""]
            .iter()
            .map(|k| json.find(k).unwrap())
            .collect();
        assert!(order.is_sorted(), "keys out of numeric order:\n{json}");
    }

    #[test]
    fn canonical_layout() {
        let mapping: EndpointMapping = [(
            137,
            set(&["https://z.example", "https://a.example"]),
        )]
        .into_iter()
        .collect();

        let json = String::from_utf8(mapping.to_canonical_json().unwrap()).unwrap();
        assert_eq!(
            json,
            "{\n    \"137\": [\n        \"https://a.example\",\n        \"https://z.example\"\n    ]\n}\n",
            "indent, ordering and trailing newline"
        );
    }

    #[test]
    fn decoding_normalises_order_and_duplicates() {
        let raw = br#"{
            "80002": ["https://b.example", "https://a.example", "https://b.example"],
            "1": ["https://x.example"]
        }"#;
        let mapping = EndpointMapping::from_json(raw).unwrap();

        assert_eq!(mapping.chain_ids().collect::<Vec<_>>(), vec![1, 80002], "keys");
        assert_eq!(
            mapping.get(80002),
            Some(&set(&["https://a.example", "https://b.example"])),
            "deduplicated"
        );
    }

    #[test]
    fn resorting_canonical_output_is_a_no_op() {
        let raw = br#"{"300": ["https://q.example", "https://p.example"], "10": ["https://o.example"]}"#;
        let once = EndpointMapping::from_json(raw).unwrap().to_canonical_json().unwrap();
        let twice = EndpointMapping::from_json(&once)
            .unwrap()
            .to_canonical_json()
            .unwrap();
        assert_eq!(once, twice, "canonical form must be a fixed point");
    }

    #[test]
    fn rejects_non_numeric_keys() {
        let err = EndpointMapping::from_json(br#"{"mainnet": []}"#);
        assert!(err.is_err(), "non-numeric chain id accepted");
    }
}
