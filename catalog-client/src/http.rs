// catalog-client/src/http.rs
// HTTP 客户端 - 目录服务网络通信

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use shared::{ApiResponse, Listing, MutationRequest};

use crate::{CatalogTransport, ClientConfig, ClientError, ClientResult};

/// 网络目录客户端
#[derive(Debug, Clone)]
pub struct NetworkCatalogClient {
    pub(crate) client: Client,
    pub(crate) base_url: String,
    listings_path: String,
    token: Option<String>,
}

impl NetworkCatalogClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            listings_path: config.listings_path.trim_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    /// 获取基础 URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// 设置 token
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub(crate) fn collection_url(&self) -> String {
        format!("{}/{}", self.base_url, self.listings_path)
    }

    /// id 作为单个路径段编码，`/`、`?` 不会改变路由
    fn item_url(&self, id: &str) -> ClientResult<Url> {
        let mut url = Url::parse(&self.collection_url())
            .map_err(|e| ClientError::Validation(format!("invalid catalog url: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| ClientError::Validation("catalog url cannot be a base".to_string()))?
            .push(id);
        Ok(url)
    }

    fn authorize(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => req.header(reqwest::header::AUTHORIZATION, format!("Bearer {}", token)),
            None => req,
        }
    }

    /// 元数据 JSON + 按顺序附加的图片
    fn mutation_form(request: &MutationRequest) -> ClientResult<Form> {
        let data = serde_json::to_string(&request.payload())?;
        let mut form = Form::new().text("data", data);
        for image in &request.images {
            let part = Part::bytes(image.bytes.clone())
                .file_name(image.file_name.clone())
                .mime_str(&image.content_type)
                .map_err(|e| {
                    ClientError::Validation(format!(
                        "invalid content type for {}: {}",
                        image.file_name, e
                    ))
                })?;
            form = form.part("images", part);
        }
        Ok(form)
    }

    /// 发送请求并解析响应信封
    async fn send<T: DeserializeOwned>(&self, req: RequestBuilder) -> ClientResult<ApiResponse<T>> {
        let response = self
            .authorize(req)
            .send()
            .await
            .map_err(ClientError::from_send)?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            // 尝试解析为 API 错误响应
            let message = serde_json::from_slice::<ApiResponse<serde_json::Value>>(&bytes)
                .ok()
                .and_then(|r| r.message)
                .unwrap_or_else(|| String::from_utf8_lossy(&bytes).into_owned());
            tracing::warn!(status = %status, message = %message, "Catalog request failed");
            return Err(match status {
                StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
                StatusCode::NOT_FOUND => ClientError::NotFound(message),
                StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                    ClientError::Validation(message)
                }
                _ => ClientError::Server {
                    status: status.as_u16(),
                    message,
                },
            });
        }

        // 204 或空 body
        if bytes.is_empty() {
            return Ok(ApiResponse::ok_empty());
        }

        let envelope: ApiResponse<T> = serde_json::from_slice(&bytes)
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))?;
        if !envelope.success {
            return Err(ClientError::Validation(envelope.message_or("Request rejected")));
        }
        Ok(envelope)
    }

    fn require_data<T>(envelope: ApiResponse<T>, what: &str) -> ClientResult<T> {
        envelope
            .data
            .ok_or_else(|| ClientError::InvalidResponse(format!("Missing {} data", what)))
    }

    fn checked(listing: Listing) -> ClientResult<Listing> {
        listing
            .check_invariants()
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))?;
        Ok(listing)
    }
}

#[async_trait]
impl CatalogTransport for NetworkCatalogClient {
    async fn list(&self) -> ClientResult<Vec<Listing>> {
        let url = self.collection_url();
        tracing::debug!(url = %url, "GET listings");
        let envelope = self.send::<Vec<Listing>>(self.client.get(&url)).await?;
        Self::require_data(envelope, "listing")?
            .into_iter()
            .map(Self::checked)
            .collect()
    }

    async fn create(&self, request: &MutationRequest) -> ClientResult<Listing> {
        let url = self.collection_url();
        tracing::debug!(url = %url, images = request.images.len(), "POST listing");
        let form = Self::mutation_form(request)?;
        let envelope = self.send::<Listing>(self.client.post(&url).multipart(form)).await?;
        Self::checked(Self::require_data(envelope, "listing")?)
    }

    async fn update(&self, id: &str, request: &MutationRequest) -> ClientResult<Listing> {
        let url = self.item_url(id)?;
        tracing::debug!(url = %url, images = request.images.len(), "PUT listing");
        let form = Self::mutation_form(request)?;
        let envelope = self.send::<Listing>(self.client.put(url).multipart(form)).await?;
        Self::checked(Self::require_data(envelope, "listing")?)
    }

    async fn delete(&self, id: &str) -> ClientResult<()> {
        let url = self.item_url(id)?;
        tracing::debug!(url = %url, "DELETE listing");
        self.send::<serde_json::Value>(self.client.delete(url)).await?;
        Ok(())
    }
}
