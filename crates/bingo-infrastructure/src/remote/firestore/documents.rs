use async_trait::async_trait;
use bingo_domain::remote::{RemoteScoreStore, ScoreUpdate, UserScoreDocument};
use bingo_domain::shared::{DomainError, UserId};
use chrono::Utc;
use log::info;
use reqwest::Method;
use serde_json::json;

use super::{values, FirestoreClient, FirestoreError};

#[async_trait]
impl RemoteScoreStore for FirestoreClient {
    async fn fetch_user(
        &self,
        user_id: &UserId,
    ) -> Result<Option<UserScoreDocument>, DomainError> {
        let url = self.document_url(user_id.as_str())?;

        let result = self
            .execute_with_retry("Fetch user document", || {
                self.request_json(Method::GET, url.clone(), None)
            })
            .await;

        match result {
            Ok(raw) => {
                let (_, document) = values::decode_document(&raw)?;
                Ok(Some(document))
            }
            Err(FirestoreError::NotFound) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn create_user(
        &self,
        user_id: &UserId,
        document: &UserScoreDocument,
    ) -> Result<(), DomainError> {
        let mut url = self.document_url(user_id.as_str())?;
        url.query_pairs_mut()
            .append_pair("currentDocument.exists", "false");
        let body = json!({ "fields": values::encode_document(document, Utc::now()) });

        self.execute_with_retry("Create user document", || {
            self.request_json(Method::PATCH, url.clone(), Some(&body))
        })
        .await?;

        info!("[firestore] Created user document {}", user_id);
        Ok(())
    }

    async fn update_user(&self, user_id: &UserId, update: &ScoreUpdate) -> Result<(), DomainError> {
        let (fields, mask) = values::encode_update(update, Utc::now());

        let mut url = self.document_url(user_id.as_str())?;
        {
            let mut query = url.query_pairs_mut();
            for field in &mask {
                query.append_pair("updateMask.fieldPaths", field);
            }
            query.append_pair("currentDocument.exists", "true");
        }
        let body = json!({ "fields": fields });

        let result = self
            .execute_with_retry("Update user document", || {
                self.request_json(Method::PATCH, url.clone(), Some(&body))
            })
            .await;

        match result {
            Ok(_) => Ok(()),
            Err(FirestoreError::NotFound) => Err(DomainError::NotFound(format!(
                "User document {user_id}"
            ))),
            Err(e) => Err(e.into()),
        }
    }
}
