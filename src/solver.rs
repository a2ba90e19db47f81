use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Result};

use crate::auth::ApiKey;
use crate::data::{Captcha, NormalCaptcha, Solution, TextCaptcha};
use crate::progress::ProgressConfig;
use crate::service::twocaptcha::{Client, Config, ConfigBuilder, Website};
use crate::service::{ServiceClient, ServiceConfigBuilder};

const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(10);
const DEFAULT_MAX_ATTEMPTS: usize = 30;

/// High-level solver: submit a task once, then poll until the service
/// answers or the attempts run out.
#[derive(Debug, Clone)]
pub struct Solver {
    client: Client,
    progress: ProgressConfig,
    poll_interval: Duration,
    max_attempts: usize,
}

impl Default for Solver {
    fn default() -> Self {
        Self {
            client: Client::new(ConfigBuilder::new(Website::TwoCaptcha).build()),
            progress: ProgressConfig::default(),
            poll_interval: DEFAULT_POLL_INTERVAL,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl Solver {
    /// Solver for 2captcha.com scoped to `key`
    pub fn new(key: ApiKey) -> Self {
        let mut builder = ConfigBuilder::new(Website::TwoCaptcha);
        builder.set_api_key(key);
        Self::from_config(builder.build())
    }

    pub fn from_config(config: Config) -> Self {
        Self {
            client: Client::new(config),
            ..Self::default()
        }
    }

    pub fn set_progress(self, progress: ProgressConfig) -> Self {
        Self { progress, ..self }
    }

    pub fn set_poll_interval(self, poll_interval: Duration) -> Self {
        Self {
            poll_interval,
            ..self
        }
    }

    pub fn set_max_attempts(self, max_attempts: usize) -> Self {
        Self {
            max_attempts,
            ..self
        }
    }

    /// Solve the image captcha at `path`
    pub async fn normal(&self, path: impl AsRef<Path>) -> Result<Solution> {
        let captcha = NormalCaptcha::from_file(path)?;
        self.solve(&captcha).await
    }

    /// Solve an image captcha from raw bytes
    pub async fn normal_from_bytes(&self, bytes: impl AsRef<[u8]>) -> Result<Solution> {
        self.solve(&NormalCaptcha::from_bytes(bytes)).await
    }

    /// Solve a text question captcha
    pub async fn text(&self, question: &str) -> Result<Solution> {
        self.solve(&TextCaptcha::new(question)).await
    }

    /// Account balance in USD
    pub async fn balance(&self) -> Result<String> {
        self.client.balance().await
    }

    /// Submit `captcha` and poll for the answer
    pub async fn solve<C: Captcha>(&self, captcha: &C) -> Result<Solution> {
        let id = self.client.submit(captcha).await?;

        let pb = self
            .progress
            .build_with_message(self.max_attempts, "Waiting for the answer")?;

        for _ in 0..self.max_attempts {
            if let Some(solution) = self.client.result(&id).await? {
                pb.finish_and_clear();
                return Ok(solution);
            }
            pb.inc(1);
            tokio::time::sleep(self.poll_interval).await;
        }
        pb.finish_and_clear();

        bail!("Captcha solving timeout")
    }
}
