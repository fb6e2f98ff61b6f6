use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Sentiment category assigned to a review by the analysis backend.
///
/// The backend emits lowercase strings; anything outside the known set
/// (including future additions) lands on `Unknown` instead of failing the
/// whole response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
    #[default]
    Unknown,
}

impl Serialize for Sentiment {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_param())
    }
}

impl<'de> Deserialize<'de> for Sentiment {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(match value.as_str() {
            "positive" => Sentiment::Positive,
            "negative" => Sentiment::Negative,
            "neutral" => Sentiment::Neutral,
            _ => Sentiment::Unknown,
        })
    }
}

impl Sentiment {
    /// Visual category used by the badge styling.
    pub fn css_class(self) -> &'static str {
        match self {
            Sentiment::Positive => "success",
            Sentiment::Negative => "danger",
            Sentiment::Neutral => "warning",
            Sentiment::Unknown => "neutral",
        }
    }

    /// Capitalized label shown inside the badge.
    pub fn label(self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
            Sentiment::Unknown => "Unknown",
        }
    }

    /// Wire form, as the backend expects it in the `sentiment` query parameter.
    pub fn as_param(self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
            Sentiment::Unknown => "unknown",
        }
    }

    /// Parses a filter value; only the three real categories are accepted.
    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "positive" => Some(Sentiment::Positive),
            "negative" => Some(Sentiment::Negative),
            "neutral" => Some(Sentiment::Neutral),
            _ => None,
        }
    }
}

/// An analyzed review as returned by the backend.
///
/// The client never mutates one of these after receipt; the shell only
/// inserts newly analyzed reviews at the head of its list. Several columns
/// are nullable in the backend schema, so the optional fields here tolerate
/// both `null` and absence.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Review {
    pub id: i64,
    pub product_name: String,
    pub review_text: String,
    #[serde(default)]
    pub sentiment: Option<Sentiment>,
    #[serde(default)]
    pub sentiment_score: Option<f64>,
    #[serde(default, deserialize_with = "empty_when_null")]
    pub key_points: Vec<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Review {
    /// Confidence rendered as a percentage with one decimal place, or `None`
    /// when there is no score to display (null or zero).
    pub fn formatted_score(&self) -> Option<String> {
        self.sentiment_score
            .filter(|score| *score > 0.0)
            .map(|score| format!("{:.1}%", score * 100.0))
    }
}

/// Payload for the analyze-review endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ReviewRequest {
    pub product_name: String,
    pub review_text: String,
}

fn empty_when_null<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let points = Option::<Vec<String>>::deserialize(deserializer)?;
    Ok(points.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_full_review() {
        let json = r#"{
            "id": 7,
            "product_name": "iPhone 15 Pro",
            "review_text": "Great phone with an amazing camera",
            "sentiment": "positive",
            "sentiment_score": 0.9876,
            "key_points": ["Great camera", "Fast performance"],
            "created_at": "2024-12-08T09:15:02.123456"
        }"#;
        let review: Review = serde_json::from_str(json).unwrap();
        assert_eq!(review.sentiment, Some(Sentiment::Positive));
        assert_eq!(review.key_points.len(), 2);
        assert_eq!(review.formatted_score().as_deref(), Some("98.8%"));
    }

    #[test]
    fn tolerates_null_columns() {
        let json = r#"{
            "id": 3,
            "product_name": "Mystery gadget",
            "review_text": "It exists, that is all I can say",
            "sentiment": null,
            "sentiment_score": null,
            "key_points": null,
            "created_at": null
        }"#;
        let review: Review = serde_json::from_str(json).unwrap();
        assert_eq!(review.sentiment, None);
        assert_eq!(review.formatted_score(), None);
        assert!(review.key_points.is_empty());
        assert_eq!(review.created_at, None);
    }

    #[test]
    fn unrecognized_sentiment_maps_to_unknown() {
        let json = r#"{
            "id": 4,
            "product_name": "Toaster",
            "review_text": "Toasts bread adequately, I suppose",
            "sentiment": "mixed"
        }"#;
        let review: Review = serde_json::from_str(json).unwrap();
        assert_eq!(review.sentiment, Some(Sentiment::Unknown));
        assert_eq!(review.sentiment.unwrap_or_default().css_class(), "neutral");
    }

    #[test]
    fn zero_score_is_not_displayed() {
        let review = Review {
            id: 1,
            product_name: "Pen".into(),
            review_text: "Writes. Sometimes.".into(),
            sentiment: Some(Sentiment::Neutral),
            sentiment_score: Some(0.0),
            key_points: vec![],
            created_at: None,
        };
        assert_eq!(review.formatted_score(), None);
    }

    #[test]
    fn score_has_one_decimal_place() {
        let review = Review {
            id: 2,
            product_name: "Pen".into(),
            review_text: "Writes consistently well".into(),
            sentiment: Some(Sentiment::Positive),
            sentiment_score: Some(0.873),
            key_points: vec![],
            created_at: None,
        };
        assert_eq!(review.formatted_score().as_deref(), Some("87.3%"));
    }

    #[test]
    fn filter_parsing_rejects_everything_else() {
        assert_eq!(Sentiment::from_param("positive"), Some(Sentiment::Positive));
        assert_eq!(Sentiment::from_param("all"), None);
        assert_eq!(Sentiment::from_param("unknown"), None);
    }
}
