pub mod twocaptcha;

use std::future::Future;

use anyhow::Result;
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::Response;
use url::Url;

use crate::auth::ApiKey;

/// Solving service config
pub trait ServiceConfig {
    fn create_header(&self) -> Result<HeaderMap>;
}

pub trait ServiceConfigBuilder<C: ServiceConfig> {
    /// Set the credential the client is scoped to
    fn set_api_key(&mut self, key: ApiKey) -> &mut Self;

    fn build(&self) -> C;
}

pub trait ServiceClient<C: ServiceConfig> {
    fn new(config: C) -> Self;

    fn fetch_raw<B: Into<reqwest::Body> + Send>(
        &self,
        url: Url,
        method: reqwest::Method,
        body: Option<B>,
        headers: Option<HeaderMap>,
    ) -> impl Future<Output = Result<Response>> + Send;

    /// simple GET request
    fn get(&self, url: Url) -> impl Future<Output = Result<Response>> + Send {
        self.fetch_raw::<reqwest::Body>(url, reqwest::Method::GET, None, None)
    }

    /// POST an application/x-www-form-urlencoded body
    fn post_form(
        &self,
        url: Url,
        fields: &[(String, String)],
    ) -> impl Future<Output = Result<Response>> + Send {
        let body = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(fields)
            .finish();
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/x-www-form-urlencoded"),
        );
        self.fetch_raw(url, reqwest::Method::POST, Some(body), Some(headers))
    }
}

pub trait ServiceWebsite<T> {
    fn host(&self) -> &str;
    fn base_url(&self) -> Url;
    fn lookup(host: &str) -> Option<T>;
}
