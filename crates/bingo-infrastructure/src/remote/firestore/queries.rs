use async_trait::async_trait;
use bingo_domain::ranking::RankingRepository;
use bingo_domain::remote::UserScoreDocument;
use bingo_domain::shared::{DomainError, UserId};
use reqwest::Method;
use serde_json::{json, Value};

use super::{values, FirestoreClient, FirestoreError};

const COUNT_ALIAS: &str = "higher";

impl FirestoreClient {
    fn top_by_score_query(&self, limit: u32) -> Value {
        json!({
            "structuredQuery": {
                "from": [{ "collectionId": self.config().collection }],
                "orderBy": [{
                    "field": { "fieldPath": values::TOTAL_SCORE },
                    "direction": "DESCENDING"
                }],
                "limit": limit
            }
        })
    }

    fn count_above_query(&self, total_score: i64) -> Value {
        json!({
            "structuredAggregationQuery": {
                "structuredQuery": {
                    "from": [{ "collectionId": self.config().collection }],
                    "where": {
                        "fieldFilter": {
                            "field": { "fieldPath": values::TOTAL_SCORE },
                            "op": "GREATER_THAN",
                            "value": values::integer_value(total_score)
                        }
                    }
                },
                "aggregations": [{ "alias": COUNT_ALIAS, "count": {} }]
            }
        })
    }
}

/// `runQuery` streams one object per result; entries without a document
/// only carry read metadata
fn decode_query_results(raw: &Value) -> Result<Vec<(UserId, UserScoreDocument)>, FirestoreError> {
    let rows = raw
        .as_array()
        .ok_or_else(|| FirestoreError::Decode("runQuery response is not an array".to_string()))?;

    rows.iter()
        .filter_map(|row| row.get("document"))
        .map(|document| {
            values::decode_document(document).map(|(id, doc)| (UserId::from_string(&id), doc))
        })
        .collect()
}

fn decode_count(raw: &Value) -> Result<u32, FirestoreError> {
    let count = raw
        .as_array()
        .and_then(|rows| rows.iter().find_map(|row| row.get("result")))
        .and_then(|result| result.get("aggregateFields"))
        .and_then(|fields| fields.get(COUNT_ALIAS))
        .and_then(values::integer_of)
        .ok_or_else(|| FirestoreError::Decode("aggregation result missing".to_string()))?;

    Ok(u32::try_from(count.max(0)).unwrap_or(u32::MAX))
}

#[async_trait]
impl RankingRepository for FirestoreClient {
    async fn top_by_score(
        &self,
        limit: u32,
    ) -> Result<Vec<(UserId, UserScoreDocument)>, DomainError> {
        let url = self.documents_method_url("runQuery")?;
        let body = self.top_by_score_query(limit);

        let raw = self
            .execute_with_retry("Query top scores", || {
                self.request_json(Method::POST, url.clone(), Some(&body))
            })
            .await?;

        Ok(decode_query_results(&raw)?)
    }

    async fn count_with_score_above(&self, total_score: i64) -> Result<u32, DomainError> {
        let url = self.documents_method_url("runAggregationQuery")?;
        let body = self.count_above_query(total_score);

        let raw = self
            .execute_with_retry("Count higher scores", || {
                self.request_json(Method::POST, url.clone(), Some(&body))
            })
            .await?;

        Ok(decode_count(&raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::FirestoreConfig;

    #[test]
    fn test_decode_query_results_skips_metadata_rows() {
        let raw = json!([
            {
                "document": {
                    "name": "projects/p/databases/(default)/documents/users/top",
                    "fields": { "totalScore": { "integerValue": "900" } }
                },
                "readTime": "2025-01-01T00:00:00Z"
            },
            {
                "document": {
                    "name": "projects/p/databases/(default)/documents/users/second",
                    "fields": { "totalScore": { "integerValue": "450" } }
                }
            },
            { "readTime": "2025-01-01T00:00:00Z" }
        ]);

        let rows = decode_query_results(&raw).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].0.as_str(), "top");
        assert_eq!(rows[0].1.total_score, 900);
        assert_eq!(rows[1].0.as_str(), "second");
    }

    #[test]
    fn test_decode_count() {
        let raw = json!([{
            "result": { "aggregateFields": { "higher": { "integerValue": "12" } } },
            "readTime": "2025-01-01T00:00:00Z"
        }]);
        assert_eq!(decode_count(&raw).unwrap(), 12);
        assert!(decode_count(&json!([])).is_err());
    }

    #[test]
    fn test_count_query_filters_strictly_greater() {
        let client = FirestoreClient::new(FirestoreConfig::new("p")).unwrap();
        let query = client.count_above_query(300);
        let filter = &query["structuredAggregationQuery"]["structuredQuery"]["where"]["fieldFilter"];
        assert_eq!(filter["op"], "GREATER_THAN");
        assert_eq!(filter["value"]["integerValue"], "300");
    }

    #[test]
    fn test_top_query_orders_descending() {
        let client = FirestoreClient::new(FirestoreConfig::new("p")).unwrap();
        let query = client.top_by_score_query(20);
        assert_eq!(query["structuredQuery"]["limit"], 20);
        assert_eq!(
            query["structuredQuery"]["orderBy"][0]["direction"],
            "DESCENDING"
        );
    }
}
