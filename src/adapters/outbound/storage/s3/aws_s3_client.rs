use anyhow::{Context, Result};
use async_trait::async_trait;
use aws_config::{BehaviorVersion, SdkConfig};
use aws_sdk_s3::{
    Client,
    config::{Builder as S3ConfigBuilder, Region},
    error::{DisplayErrorContext, ProvideErrorMetadata, SdkError},
    primitives::ByteStream,
    types::ObjectCannedAcl,
};
use bytes::Bytes;

use crate::{
    domain::{
        errors::{RemoteError, RemoteResult},
        models::StoreSettings,
        value_objects::ObjectAcl,
    },
    ports::{ObjectRequest, RemoteObjectClient},
};

/// Client settings derived from the stored region and endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct S3Overrides {
    pub region: Option<String>,
    pub endpoint_url: Option<String>,
    pub force_path_style: bool,
}

impl S3Overrides {
    /// Empty values leave the shared configuration untouched
    pub fn from_settings(settings: &StoreSettings) -> Result<Self> {
        let endpoint_url = settings.endpoint().map(normalize_endpoint).transpose()?;
        Ok(Self {
            region: settings.region().map(str::to_string),
            // Non-AWS services generally do not support virtual-hosted buckets
            force_path_style: endpoint_url.is_some(),
            endpoint_url,
        })
    }

    fn apply(&self, mut builder: S3ConfigBuilder) -> S3ConfigBuilder {
        if let Some(region) = &self.region {
            builder = builder.region(Region::new(region.clone()));
        }
        if let Some(endpoint) = &self.endpoint_url {
            builder = builder.endpoint_url(endpoint).force_path_style(self.force_path_style);
        }
        builder
    }
}

/// S3 client configured from object-storage settings
#[derive(Clone, Debug)]
pub struct AwsS3Client {
    client: Client,
}

impl AwsS3Client {
    /// Shared AWS configuration from the default provider chain
    ///
    /// Resolving it runs the region and credentials providers, so load it once and
    /// reuse it for every client.
    pub async fn load_shared_config() -> SdkConfig {
        aws_config::defaults(BehaviorVersion::latest()).load().await
    }

    /// Build a client on top of `shared`, overriding region and endpoint when they
    /// are set
    pub fn new(shared: &SdkConfig, settings: &StoreSettings) -> Result<Self> {
        let overrides = S3Overrides::from_settings(settings)?;

        tracing::debug!(
            region = overrides.region.as_deref().unwrap_or("<default>"),
            endpoint = overrides.endpoint_url.as_deref().unwrap_or("<default>"),
            "Built S3 client"
        );

        let builder = overrides.apply(S3ConfigBuilder::from(shared));
        Ok(Self {
            client: Client::from_conf(builder.build()),
        })
    }

    pub fn from_client(client: Client) -> Self {
        Self { client }
    }

    pub fn inner(&self) -> &Client {
        &self.client
    }
}

/// Endpoint URL with a scheme, `https://` when none was given
pub fn normalize_endpoint(endpoint: &str) -> Result<String> {
    let url = if endpoint.contains("://") {
        endpoint.to_string()
    } else {
        format!("https://{}", endpoint)
    };

    let uri: http::Uri = url
        .parse()
        .with_context(|| format!("Invalid S3 endpoint: {}", endpoint))?;
    if uri.host().is_none() {
        anyhow::bail!("Invalid S3 endpoint: {} has no host", endpoint);
    }

    Ok(url)
}

fn sdk_error<E>(err: SdkError<E>) -> RemoteError
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
{
    let code = err.code().unwrap_or("Unknown").to_string();
    let message = err
        .message()
        .map(str::to_string)
        .unwrap_or_else(|| DisplayErrorContext(&err).to_string());
    RemoteError::new(code, message, err)
}

#[async_trait]
impl RemoteObjectClient for AwsS3Client {
    async fn head_object(&self, request: &ObjectRequest) -> RemoteResult<()> {
        self.client
            .head_object()
            .bucket(&request.bucket)
            .key(request.key.as_str())
            .send()
            .await
            .map_err(sdk_error)?;
        Ok(())
    }

    async fn get_object(&self, request: &ObjectRequest) -> RemoteResult<Bytes> {
        let output = self
            .client
            .get_object()
            .bucket(&request.bucket)
            .key(request.key.as_str())
            .send()
            .await
            .map_err(sdk_error)?;

        let body = output
            .body
            .collect()
            .await
            .map_err(|err| RemoteError::new("BodyRead", err.to_string(), err))?;
        Ok(body.into_bytes())
    }

    async fn put_object(
        &self,
        request: &ObjectRequest,
        body: Bytes,
        acl: ObjectAcl,
    ) -> RemoteResult<()> {
        self.client
            .put_object()
            .bucket(&request.bucket)
            .key(request.key.as_str())
            .acl(ObjectCannedAcl::from(acl.as_str()))
            .body(ByteStream::from(body))
            .send()
            .await
            .map_err(sdk_error)?;
        Ok(())
    }

    async fn delete_object(&self, request: &ObjectRequest) -> RemoteResult<()> {
        self.client
            .delete_object()
            .bucket(&request.bucket)
            .key(request.key.as_str())
            .send()
            .await
            .map_err(sdk_error)?;
        Ok(())
    }
}
