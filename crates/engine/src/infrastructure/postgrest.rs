//! PostgREST row-store client.
//!
//! One client speaks to every table the system owns: the ten component
//! tables, `worlds`, and the `users` profile mirror. Rows are JSON objects;
//! the server assigns `id` and `created_at`. Requests carry the anon key
//! plus the signed-in user's bearer token once one exists, so the store's
//! row-level rules see the acting identity.

use std::fmt::Display;
use std::sync::RwLock;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde_json::Value;

use worldsmith_domain::{ComponentId, UserId, World, WorldId};

use crate::infrastructure::ports::{ComponentRepo, ProfileRepo, RepoError, WorldRepo};

/// Table holding the per-user profile mirror.
const PROFILE_TABLE: &str = "users";

pub struct PostgrestStore {
    client: Client,
    base_url: String,
    anon_key: String,
    access_token: RwLock<Option<String>>,
}

impl PostgrestStore {
    pub fn new(base_url: &str, anon_key: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
            access_token: RwLock::new(None),
        }
    }

    /// Create client from `WORLDSMITH_STORE_URL` / `WORLDSMITH_STORE_ANON_KEY`.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("WORLDSMITH_STORE_URL").unwrap_or_else(|_| "http://localhost:54321".into());
        let anon_key = std::env::var("WORLDSMITH_STORE_ANON_KEY").unwrap_or_default();
        Self::new(&base_url, &anon_key)
    }

    /// Adopt the signed-in user's token; `None` reverts to the anon key.
    pub fn set_access_token(&self, token: Option<String>) {
        if let Ok(mut guard) = self.access_token.write() {
            *guard = token;
        }
    }

    fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        let token = self
            .access_token
            .read()
            .ok()
            .and_then(|guard| guard.clone())
            .unwrap_or_else(|| self.anon_key.clone());
        request.header("apikey", &self.anon_key).bearer_auth(token)
    }

    async fn rows(table: &str, response: Response) -> Result<Vec<Value>, RepoError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| RepoError::database(table, e))?;

        if !status.is_success() {
            return Err(RepoError::Database(format!("{table}: {status}: {body}")));
        }
        if body.is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&body).map_err(|e| RepoError::Serialization(e.to_string()))
    }

    async fn select(
        &self,
        table: &str,
        filters: &[(String, String)],
    ) -> Result<Vec<Value>, RepoError> {
        let mut request = self
            .client
            .get(self.rest_url(table))
            .query(&[("select", "*"), ("order", "created_at.desc")]);
        for (column, filter) in filters {
            request = request.query(&[(column.as_str(), filter.as_str())]);
        }

        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| RepoError::database(table, e))?;
        Self::rows(table, response).await
    }

    async fn insert_row(&self, table: &str, record: Value) -> Result<Value, RepoError> {
        let request = self
            .client
            .post(self.rest_url(table))
            .header("Prefer", "return=representation")
            .json(&record);

        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| RepoError::database(table, e))?;
        let rows = Self::rows(table, response).await?;
        rows.into_iter().next().ok_or(RepoError::NotFound)
    }

    async fn update_row(
        &self,
        table: &str,
        id: impl Display,
        fields: Value,
    ) -> Result<Value, RepoError> {
        let request = self
            .client
            .patch(self.rest_url(table))
            .query(&[eq("id", id)])
            .header("Prefer", "return=representation")
            .json(&fields);

        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| RepoError::database(table, e))?;
        let rows = Self::rows(table, response).await?;
        rows.into_iter().next().ok_or(RepoError::NotFound)
    }

    async fn delete_row(&self, table: &str, id: impl Display) -> Result<(), RepoError> {
        let request = self
            .client
            .delete(self.rest_url(table))
            .query(&[eq("id", id)])
            .header("Prefer", "return=representation");

        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| RepoError::database(table, e))?;
        let rows = Self::rows(table, response).await?;
        if rows.is_empty() {
            return Err(RepoError::NotFound);
        }
        tracing::debug!(table, "deleted row");
        Ok(())
    }
}

/// PostgREST `eq.` filter pair for a query string.
fn eq(column: &str, value: impl Display) -> (String, String) {
    (column.to_string(), format!("eq.{value}"))
}

/// PostgREST `neq.` filter pair for a query string.
fn neq(column: &str, value: impl Display) -> (String, String) {
    (column.to_string(), format!("neq.{value}"))
}

fn decode_world(row: Value) -> Result<World, RepoError> {
    serde_json::from_value(row).map_err(|e| RepoError::Serialization(e.to_string()))
}

// =============================================================================
// Port Implementations
// =============================================================================

#[async_trait]
impl WorldRepo for PostgrestStore {
    async fn list(&self, user: UserId) -> Result<Vec<World>, RepoError> {
        let rows = self.select("worlds", &[eq("user_id", user)]).await?;
        rows.into_iter().map(decode_world).collect()
    }

    async fn create(&self, fields: Value) -> Result<World, RepoError> {
        let row = self.insert_row("worlds", fields).await?;
        let world = decode_world(row)?;
        tracing::debug!(world_id = %world.id, "created world");
        Ok(world)
    }

    async fn update(&self, id: WorldId, fields: Value) -> Result<World, RepoError> {
        let row = self.update_row("worlds", id, fields).await?;
        decode_world(row)
    }

    async fn delete(&self, id: WorldId) -> Result<(), RepoError> {
        self.delete_row("worlds", id).await
    }
}

#[async_trait]
impl ComponentRepo for PostgrestStore {
    async fn list(&self, table: &str, world: WorldId) -> Result<Vec<Value>, RepoError> {
        self.select(table, &[eq("world_id", world)]).await
    }

    async fn insert(&self, table: &str, record: Value) -> Result<Value, RepoError> {
        let row = self.insert_row(table, record).await?;
        tracing::debug!(table, "created component");
        Ok(row)
    }

    async fn update(
        &self,
        table: &str,
        id: ComponentId,
        fields: Value,
    ) -> Result<Value, RepoError> {
        self.update_row(table, id, fields).await
    }

    async fn delete(&self, table: &str, id: ComponentId) -> Result<(), RepoError> {
        self.delete_row(table, id).await
    }
}

#[async_trait]
impl ProfileRepo for PostgrestStore {
    async fn display_name_taken(
        &self,
        name: &str,
        exclude: Option<UserId>,
    ) -> Result<bool, RepoError> {
        let mut filters = vec![eq("display_name", name)];
        if let Some(user) = exclude {
            filters.push(neq("id", user));
        }
        let rows = self.select(PROFILE_TABLE, &filters).await?;
        Ok(!rows.is_empty())
    }

    async fn upsert_display_name(&self, user: UserId, name: &str) -> Result<(), RepoError> {
        let request = self
            .client
            .post(self.rest_url(PROFILE_TABLE))
            .header("Prefer", "resolution=merge-duplicates,return=representation")
            .json(&serde_json::json!({ "id": user, "display_name": name }));

        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| RepoError::database(PROFILE_TABLE, e))?;
        Self::rows(PROFILE_TABLE, response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_use_postgrest_operators() {
        let id = WorldId::new();
        assert_eq!(eq("world_id", id), ("world_id".to_string(), format!("eq.{id}")));
        assert_eq!(neq("id", 7), ("id".to_string(), "neq.7".to_string()));
    }

    #[test]
    fn rest_urls_join_cleanly() {
        let store = PostgrestStore::new("http://localhost:54321/", "anon");
        assert_eq!(store.rest_url("regions"), "http://localhost:54321/rest/v1/regions");
    }

    #[test]
    fn world_rows_decode() {
        let row = serde_json::json!({
            "id": WorldId::new(),
            "user_id": UserId::new(),
            "name": "Aethermoor",
            "tone": "dark_gritty",
            "created_at": "2025-06-15T10:30:00Z",
        });
        let world = decode_world(row).expect("decode");
        assert_eq!(world.name, "Aethermoor");
        assert!(world.description.is_empty());
    }
}
