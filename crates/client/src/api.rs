use chefbuddy_shared::{
    food::{FoodItem, NewFoodItem},
    user::UserProfile,
};
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::{
    error::{ClientError, Operation},
    types::{
        Advice, CreatedItem, GenerateRequest, GeneratedRecipe, MultiItemRecipe, MultiItemRequest,
        RecipeEnvelope,
    },
};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

type Result<T> = std::result::Result<T, ClientError>;

/// Client for the backend's expiry, generation and preference endpoints.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, base_url: &str) -> Result<Self> {
        let base_url = base_url.trim().trim_end_matches('/');
        Url::parse(base_url).map_err(|err| ClientError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: err.to_string(),
        })?;

        Ok(Self {
            http,
            base_url: base_url.to_owned(),
            token: None,
        })
    }

    /// Bearer token sent with authenticated calls.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.token = (!token.trim().is_empty()).then_some(token);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send_raw(&self, operation: Operation, request: RequestBuilder) -> Result<String> {
        let response = request
            .send()
            .await
            .map_err(|source| ClientError::Http { operation, source })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|source| ClientError::Http { operation, source })?;

        if !status.is_success() {
            tracing::warn!(%operation, status = status.as_u16(), "backend request failed");
            return Err(ClientError::Status {
                operation,
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        operation: Operation,
        request: RequestBuilder,
    ) -> Result<T> {
        let body = self.send_raw(operation, request).await?;

        serde_json::from_str(&body).map_err(|source| ClientError::Decode { operation, source })
    }

    #[tracing::instrument(skip(self))]
    pub async fn list_items(&self) -> Result<Vec<FoodItem>> {
        let request = self.http.get(self.url("/api/expiry/items"));

        self.send(Operation::ListItems, request).await
    }

    #[tracing::instrument(skip(self, item), fields(name = %item.name))]
    pub async fn create_item(&self, item: &NewFoodItem) -> Result<FoodItem> {
        item.validate().map_err(|source| ClientError::Invalid {
            operation: Operation::CreateItem,
            source,
        })?;

        let request = self.http.post(self.url("/api/expiry/items")).json(item);
        let created: CreatedItem = self.send(Operation::CreateItem, request).await?;

        Ok(created.item)
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete_item(&self, id: &str) -> Result<()> {
        let request = self.http.delete(self.url(&format!("/api/expiry/items/{id}")));
        self.send_raw(Operation::DeleteItem, request).await?;

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub async fn item_advice(&self, id: &str) -> Result<Advice> {
        let request = self
            .http
            .post(self.url(&format!("/api/expiry/items/{id}/advice")));

        self.send(Operation::ItemAdvice, request).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn multi_item_recipe(&self, item_ids: &[String]) -> Result<MultiItemRecipe> {
        let request = self
            .http
            .post(self.url("/api/expiry/multi-recipe"))
            .json(&MultiItemRequest { item_ids });

        self.send(Operation::MultiItemRecipe, request).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn generate_recipe(&self, query: &str) -> Result<GeneratedRecipe> {
        let request = self
            .http
            .post(self.url("/api/generate-recipe-public"))
            .json(&GenerateRequest { query });
        let envelope: RecipeEnvelope = self.send(Operation::GenerateRecipe, request).await?;

        Ok(envelope.recipe)
    }

    /// Replace the signed-in user's preferences. Requires a token.
    #[tracing::instrument(skip_all)]
    pub async fn update_preferences(&self, profile: &UserProfile) -> Result<()> {
        let request = self
            .authorized(self.http.put(self.url("/api/auth/preferences")))
            .json(profile);
        self.send_raw(Operation::UpdatePreferences, request).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_normalised() {
        let client = ApiClient::new("http://localhost:8000/ ").unwrap();

        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(
            client.url("/api/expiry/items"),
            "http://localhost:8000/api/expiry/items"
        );
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let err = ApiClient::new("not a url").unwrap_err();

        assert!(matches!(err, ClientError::InvalidBaseUrl { .. }));
        assert_eq!(err.user_message(), "failed to load");
    }

    #[test]
    fn blank_token_is_ignored() {
        let client = ApiClient::new(DEFAULT_BASE_URL).unwrap().with_token("  ");

        assert!(client.token.is_none());
    }
}
