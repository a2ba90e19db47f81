use anyhow::{bail, Context, Result};

use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::Response;
use url::Url;

use crate::auth::{ApiKey, PLACEHOLDER_API_KEY};
use crate::data::{Captcha, CaptchaId, Solution};
use crate::service::{ServiceClient, ServiceConfig, ServiceConfigBuilder, ServiceWebsite};
use crate::utils;

use super::data::ApiResponse;

/// Preset hosts of the solving API
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Website {
    TwoCaptcha,
    RuCaptcha,
}

impl ServiceWebsite<Website> for Website {
    fn host(&self) -> &str {
        match self {
            Website::TwoCaptcha => "2captcha.com",
            Website::RuCaptcha => "rucaptcha.com",
        }
    }

    fn base_url(&self) -> Url {
        let url = match &self {
            Website::TwoCaptcha => "https://2captcha.com",
            Website::RuCaptcha => "https://rucaptcha.com",
        };
        Url::parse(url).unwrap()
    }

    fn lookup(host: &str) -> Option<Website> {
        match host {
            "2captcha.com" => Some(Website::TwoCaptcha),
            "rucaptcha.com" => Some(Website::RuCaptcha),
            _ => None,
        }
    }
}

/// client config
#[derive(Debug, Clone)]
pub struct Config {
    base_url: Url,
    api_key: ApiKey,
}

impl Config {
    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }
}

impl ServiceConfig for Config {
    fn create_header(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            HeaderValue::from_str(&utils::UserAgent::Bot.value())?,
        );
        Ok(headers)
    }
}

#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    base_url: Url,
    api_key: Option<ApiKey>,
}

impl ConfigBuilder {
    /// Create a new ConfigBuilder from preset
    pub fn new(website: Website) -> Self {
        Self {
            base_url: website.base_url(),
            api_key: None,
        }
    }

    /// Create a new ConfigBuilder from custom url
    pub fn custom(url: &str) -> Result<Self> {
        Ok(Self {
            base_url: Url::parse(url)?,
            api_key: None,
        })
    }
}

impl ServiceConfigBuilder<Config> for ConfigBuilder {
    fn set_api_key(&mut self, key: ApiKey) -> &mut Self {
        self.api_key = Some(key);
        self
    }

    fn build(&self) -> Config {
        Config {
            base_url: self.base_url.clone(),
            // the service itself rejects the placeholder with ERROR_WRONG_USER_KEY
            api_key: self
                .api_key
                .clone()
                .unwrap_or_else(|| ApiKey::new(PLACEHOLDER_API_KEY)),
        }
    }
}

/// 2Captcha API client
#[derive(Debug, Clone)]
pub struct Client {
    client: reqwest::Client,
    config: Config,
}

impl ServiceClient<Config> for Client {
    fn new(config: Config) -> Self {
        let client = reqwest::Client::new();
        Self { client, config }
    }

    async fn fetch_raw<B: Into<reqwest::Body> + Send>(
        &self,
        url: Url,
        method: reqwest::Method,
        body: Option<B>,
        headers: Option<HeaderMap>,
    ) -> Result<Response> {
        let mut req = self
            .client
            .request(method, url)
            .headers(self.config.create_header()?);
        if let Some(headers) = headers {
            req = req.headers(headers);
        }
        if let Some(body) = body {
            req = req.body(body);
        }
        let res = req.send().await?.error_for_status()?;
        Ok(res)
    }
}

impl Client {
    // API /in.php
    fn compose_in_url(&self) -> Url {
        self.config.base_url.join("/in.php").unwrap()
    }

    // API /res.php
    fn compose_res_url(&self, query: &[(String, String)]) -> Url {
        let mut url = self.config.base_url.join("/res.php").unwrap();
        url.query_pairs_mut().extend_pairs(query);
        url
    }

    async fn parse_response(res: Response) -> Result<ApiResponse> {
        let text = res.text().await?;
        let parsed: ApiResponse = serde_json::from_str(&text)
            .with_context(|| format!("Unexpected response from the service: {}", text))?;
        Ok(parsed)
    }

    /// Submit a captcha task. Returns the id to poll the answer with.
    pub async fn submit<C: Captcha>(&self, captcha: &C) -> Result<CaptchaId> {
        let mut fields = vec![
            ("key".to_string(), self.config.api_key().as_str().to_string()),
            ("method".to_string(), captcha.method().to_string()),
            ("json".to_string(), "1".to_string()),
        ];
        fields.extend(captcha.fields());

        let res = self.post_form(self.compose_in_url(), &fields).await?;
        let parsed = Self::parse_response(res).await?;

        match parsed.error_code() {
            None => Ok(CaptchaId::new(parsed.request)),
            Some(code) => bail!("{}", code),
        }
    }

    /// Poll a submitted task once. `Ok(None)` while the answer is not ready.
    pub async fn result(&self, id: &CaptchaId) -> Result<Option<Solution>> {
        let url = self.compose_res_url(&[
            ("key".to_string(), self.config.api_key().as_str().to_string()),
            ("action".to_string(), "get".to_string()),
            ("id".to_string(), id.as_str().to_string()),
            ("json".to_string(), "1".to_string()),
        ]);

        let res = self.get(url).await?;
        let parsed = Self::parse_response(res).await?;

        if parsed.is_not_ready() {
            return Ok(None);
        }
        match parsed.error_code() {
            None => Ok(Some(Solution::new(parsed.request))),
            Some(code) => bail!("{}", code),
        }
    }

    /// Account balance in USD
    pub async fn balance(&self) -> Result<String> {
        let url = self.compose_res_url(&[
            ("key".to_string(), self.config.api_key().as_str().to_string()),
            ("action".to_string(), "getbalance".to_string()),
            ("json".to_string(), "1".to_string()),
        ]);

        let res = self.get(url).await?;
        let parsed = Self::parse_response(res).await?;

        match parsed.error_code() {
            None => Ok(parsed.request),
            Some(code) => bail!("{}", code),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_compose_urls() {
        let config = ConfigBuilder::new(Website::TwoCaptcha).build();
        let client = Client::new(config);

        assert_eq!(client.compose_in_url().as_str(), "https://2captcha.com/in.php");

        let url = client.compose_res_url(&[
            ("action".to_string(), "get".to_string()),
            ("id".to_string(), "42".to_string()),
        ]);
        assert_eq!(
            url.as_str(),
            "https://2captcha.com/res.php?action=get&id=42"
        );
    }

    #[test]
    fn test_builder_falls_back_to_placeholder_key() {
        let config = ConfigBuilder::new(Website::TwoCaptcha).build();
        assert!(config.api_key().is_placeholder());

        let mut builder = ConfigBuilder::new(Website::RuCaptcha);
        builder.set_api_key(ApiKey::new("real-key"));
        assert_eq!(builder.build().api_key().as_str(), "real-key");
    }

    #[test]
    fn test_website_lookup() {
        assert_eq!(Website::lookup("2captcha.com"), Some(Website::TwoCaptcha));
        assert_eq!(Website::lookup("rucaptcha.com"), Some(Website::RuCaptcha));
        assert_eq!(Website::lookup("example.com"), None);
    }
}
