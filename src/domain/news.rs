use serde::{Deserialize, Serialize};

/// A stored news article. The field names match the persisted JSON objects.
///
/// Records written without some text fields (an empty form field is omitted
/// from the JSON) read back with those fields empty.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct NewsRecord {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub image: String,
    /// Free-form date label, compared verbatim by the jornada filter.
    #[serde(default)]
    pub date: String,
}

/// A news article that has not been stored yet and therefore has no id.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct NewsDraft {
    pub title: String,
    pub summary: String,
    pub content: String,
    pub image: String,
    #[serde(default)]
    pub date: String,
}

impl NewsDraft {
    /// Attach a store-assigned id.
    #[must_use]
    pub fn into_record(self, id: u64) -> NewsRecord {
        NewsRecord {
            id,
            title: self.title,
            summary: self.summary,
            content: self.content,
            image: self.image,
            date: self.date,
        }
    }
}
