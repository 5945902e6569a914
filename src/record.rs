//! Record shapes returned by the endpoint.
//!
//! All fields are opaque strings; the client never parses `id` or `score`.

use serde::{Deserialize, Deserializer, Serialize};

/// A single record: an identifier, a name and a score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Identifier, as sent by the server.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Score, kept as the string the server sent.
    pub score: String,
}

impl Record {
    /// Creates a record from its three fields.
    pub fn new(id: impl Into<String>, name: impl Into<String>, score: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            score: score.into(),
        }
    }

    /// The placeholder record older callers received in place of an error:
    /// `{id: "1", name: "a", score: "100"}`.
    ///
    /// Prefer matching on the `Result` of [`Client::fetch_record`]; this value
    /// is only handed out by [`Client::fetch_record_or_nil`].
    ///
    /// [`Client::fetch_record`]: crate::Client::fetch_record
    /// [`Client::fetch_record_or_nil`]: crate::Client::fetch_record_or_nil
    pub fn nil() -> Self {
        Self::new("1", "a", "100")
    }
}

/// An ordered list of records, carried on the wire as `{"pokemonList": [...]}`.
///
/// A body without the `pokemonList` key, or with `null` in it, decodes as an
/// empty list. The records themselves are decoded strictly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordList {
    /// The records in the order the server sent them.
    #[serde(rename = "pokemonList", default, deserialize_with = "null_as_empty")]
    pub items: Vec<Record>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Record>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Record>>::deserialize(deserializer)?.unwrap_or_default())
}

impl RecordList {
    /// Wraps `items` without reordering them.
    pub fn new(items: Vec<Record>) -> Self {
        Self { items }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if there are no records.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over the records in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.items.iter()
    }
}

impl IntoIterator for RecordList {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a RecordList {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nil_record_values() {
        let nil = Record::nil();
        assert_eq!(nil.id, "1");
        assert_eq!(nil.name, "a");
        assert_eq!(nil.score, "100");
    }

    #[test]
    fn test_record_from_json() {
        let record: Record =
            serde_json::from_str(r#"{"id":"25","name":"Pikachu","score":"100"}"#).unwrap();
        assert_eq!(record, Record::new("25", "Pikachu", "100"));
    }

    #[test]
    fn test_record_rejects_missing_field() {
        let result = serde_json::from_str::<Record>(r#"{"id":"25","name":"Pikachu"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_record_rejects_numeric_score() {
        let result = serde_json::from_str::<Record>(r#"{"id":"25","name":"Pikachu","score":100}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_list_uses_wire_field_name() {
        let list = RecordList::new(vec![Record::new("1", "Pikachu", "100")]);
        let json = serde_json::to_value(&list).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"pokemonList": [{"id": "1", "name": "Pikachu", "score": "100"}]})
        );
    }

    #[test]
    fn test_list_preserves_order() {
        let list: RecordList = serde_json::from_str(
            r#"{"pokemonList":[
                {"id":"2","name":"Charmander","score":"200"},
                {"id":"1","name":"Pikachu","score":"100"}
            ]}"#,
        )
        .unwrap();

        let names: Vec<&str> = list.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Charmander", "Pikachu"]);
    }

    #[test]
    fn test_missing_or_null_list_is_empty() {
        let missing: RecordList = serde_json::from_str("{}").unwrap();
        assert!(missing.is_empty());

        let null: RecordList = serde_json::from_str(r#"{"pokemonList":null}"#).unwrap();
        assert!(null.is_empty());
    }

    #[test]
    fn test_list_rejects_incomplete_record() {
        let result = serde_json::from_str::<RecordList>(r#"{"pokemonList":[{"id":"1"}]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_default_list_is_empty() {
        let list = RecordList::default();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }
}
