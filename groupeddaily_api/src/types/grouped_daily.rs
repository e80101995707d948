use serde::{Deserialize, Serialize};

/// Envelope for a grouped daily bars response.
///
/// The provider treats every envelope field as nullable, so each one is an
/// `Option`. `results` arrives in the provider's order and is kept that way.
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GroupedDailyResponse {
    pub adjusted: Option<bool>,

    pub query_count: Option<i64>,

    /// Row count reported by the provider. Assumed to match `results.len()`
    /// for a well-behaved provider; never validated here.
    pub results_count: Option<i64>,

    pub status: Option<String>,

    #[serde(rename = "request_id")]
    pub request_id: Option<String>,

    pub results: Option<Vec<Bar>>,
}

/// One ticker's daily OHLCV aggregate.
///
/// Wire keys are the provider's short codes; the rename attributes map them
/// to descriptive names so nothing downstream sees `o`/`h`/`l`/`c`.
#[derive(Serialize, Deserialize, Debug)]
pub struct Bar {
    #[serde(rename = "T")]
    pub ticker: String,

    #[serde(rename = "o")]
    pub open: f64,

    #[serde(rename = "h")]
    pub high: f64,

    #[serde(rename = "l")]
    pub low: f64,

    #[serde(rename = "c")]
    pub close: f64,

    #[serde(rename = "v")]
    pub volume: f64,

    /// Volume-weighted average price.
    #[serde(rename = "vw")]
    pub vwap: f64,

    #[serde(rename = "n")]
    pub number_of_trades: i64,

    /// Milliseconds since the Unix epoch.
    #[serde(rename = "t")]
    pub timestamp: i64,
}
