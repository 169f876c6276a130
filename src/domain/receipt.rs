use serde::{Deserialize, Serialize};

/// One line entry on a receipt.
///
/// `price` stays a string on purpose: the wire format carries exactly two
/// fraction digits and the scoring rules are defined over that literal
/// representation (see the round-dollar suffix check).
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct Item {
    pub short_description: String,
    pub price: String,
}

/// A purchase receipt as submitted for scoring.
///
/// All fields are required; payloads that fail to deserialize into this
/// shape are rejected as malformed before validation runs.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct Receipt {
    pub retailer: String,
    pub purchase_date: String,
    pub purchase_time: String,
    pub items: Vec<Item>,
    pub total: String,
}

/// Response body for a successfully processed receipt.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone)]
pub struct ProcessResponse {
    pub id: String,
}

/// Response body for a points lookup.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone)]
pub struct PointsResponse {
    pub points: i64,
}
