use mongodb::bson::{self, Bson, Document};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

pub const CASE_STUDY_COLLECTION: &str = "casestudy";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CaseStudyCategory {
    Domestic,
    Commercial,
    Education,
    Mixed,
}

impl CaseStudyCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Domestic => "domestic",
            Self::Commercial => "commercial",
            Self::Education => "education",
            Self::Mixed => "mixed",
        }
    }
}

impl fmt::Display for CaseStudyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A showcased project. Written out-of-band, only ever read here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaseStudy {
    pub id: String,
    pub title: String,
    pub category: CaseStudyCategory,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub metrics: Option<Map<String, Value>>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl CaseStudy {
    /// Decode a stored document, replacing the internal `_id` with a string `id`.
    pub fn from_document(mut doc: Document) -> Result<Self, bson::de::Error> {
        if let Some(raw_id) = doc.remove("_id") {
            doc.insert("id", id_to_string(raw_id));
        }
        bson::from_document(doc)
    }
}

fn id_to_string(id: Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s,
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{doc, oid::ObjectId};

    #[test]
    fn object_id_becomes_hex_string_id() {
        let oid = ObjectId::new();
        let study = CaseStudy::from_document(doc! {
            "_id": oid,
            "title": "Heat pump retrofit",
            "category": "domestic",
            "metrics": { "cop": 4.1, "panels": 12 },
        })
        .unwrap();

        assert_eq!(study.id, oid.to_hex());
        assert_eq!(study.category, CaseStudyCategory::Domestic);
        assert_eq!(study.metrics.unwrap()["panels"], 12);

        let json = serde_json::to_value(
            CaseStudy::from_document(doc! { "_id": oid, "title": "t", "category": "mixed" })
                .unwrap(),
        )
        .unwrap();
        assert!(json.get("_id").is_none());
        assert!(json["id"].is_string());
    }

    #[test]
    fn unknown_category_is_rejected() {
        let result = CaseStudy::from_document(doc! {
            "_id": ObjectId::new(),
            "title": "Mystery",
            "category": "industrial",
        });
        assert!(result.is_err());
    }

    #[test]
    fn missing_title_is_rejected() {
        let result = CaseStudy::from_document(doc! {
            "_id": "abc",
            "category": "education",
        });
        assert!(result.is_err());
    }
}
