use anyhow::Context;

/// Remote-resource fetch collaborator: async URL → bytes.
///
/// The pipeline treats this as opaque; failures reach the caller wrapped as
/// [`StillframeError::Fetch`](crate::StillframeError::Fetch) with the source
/// error preserved. No retry, timeout, or header control is exposed here — a
/// caller wanting bounded latency wraps the whole render (or its own `Fetch`
/// implementation) in a timeout.
pub trait Fetch: Send + Sync {
    /// Fetch the resource at `url` and return its raw bytes.
    fn fetch(&self, url: &str) -> impl Future<Output = anyhow::Result<Vec<u8>>> + Send;
}

/// Default HTTP fetcher over a shared [`reqwest::Client`].
///
/// Non-success statuses are failures; response bodies are read fully into
/// memory.
#[derive(Clone, Debug, Default)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Fetcher with a fresh client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetcher over an existing client (connection pools, proxies, ...).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &str) -> anyhow::Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("request '{url}'"))?
            .error_for_status()
            .with_context(|| format!("fetch '{url}'"))?;
        let bytes = response
            .bytes()
            .await
            .with_context(|| format!("read body of '{url}'"))?;
        tracing::trace!(url, len = bytes.len(), "fetched remote resource");
        Ok(bytes.to_vec())
    }
}
