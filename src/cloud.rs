//! Cloud orchestration and registry API.
//!
//! The [`CloudApi`] trait covers the three calls the dispatcher needs:
//! listing tasks of a family, stopping a task, and fetching a registry
//! authorization token. [`AwsCloud`] implements it with the official AWS
//! SDK (ECS + ECR), constructing one client per region the way the calls
//! are regional.

use aws_config::{BehaviorVersion, Region};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::error::CloudError;

/// Decoded registry credentials for `docker login`
#[derive(Debug, Clone)]
pub struct RegistryToken {
    /// Login username (`AWS` for ECR)
    pub username: String,
    /// Short-lived login password
    pub password: String,
}

impl RegistryToken {
    /// Decode an ECR authorization token (base64 `user:password`).
    pub fn decode(encoded: &str) -> Result<Self, CloudError> {
        let bytes = BASE64
            .decode(encoded)
            .map_err(|_| CloudError::MalformedRegistryToken)?;
        let text = String::from_utf8(bytes).map_err(|_| CloudError::MalformedRegistryToken)?;
        let (username, password) = text
            .split_once(':')
            .ok_or(CloudError::MalformedRegistryToken)?;
        Ok(Self {
            username: username.to_string(),
            password: password.to_string(),
        })
    }
}

/// Calls the dispatcher makes against the cloud.
pub trait CloudApi {
    /// List ARNs of running tasks of `family` in `cluster`.
    fn list_tasks(
        &self,
        region: &str,
        cluster: &str,
        family: &str,
    ) -> impl Future<Output = Result<Vec<String>, CloudError>>;

    /// Request a task be stopped.
    fn stop_task(
        &self,
        region: &str,
        cluster: &str,
        task_arn: &str,
    ) -> impl Future<Output = Result<(), CloudError>>;

    /// Fetch registry login credentials for `region`.
    fn registry_token(&self, region: &str)
    -> impl Future<Output = Result<RegistryToken, CloudError>>;
}

/// Production [`CloudApi`] backed by the AWS SDK.
///
/// Credentials come from the ambient provider chain (environment, profile,
/// instance metadata); no credential handling happens here.
#[derive(Debug, Default)]
pub struct AwsCloud;

impl AwsCloud {
    /// Create a cloud client. Region is supplied per call.
    pub fn new() -> Self {
        Self
    }

    async fn sdk_config(&self, region: &str) -> aws_config::SdkConfig {
        aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .load()
            .await
    }
}

impl CloudApi for AwsCloud {
    async fn list_tasks(
        &self,
        region: &str,
        cluster: &str,
        family: &str,
    ) -> Result<Vec<String>, CloudError> {
        let conf = self.sdk_config(region).await;
        let client = aws_sdk_ecs::Client::new(&conf);

        let mut arns = Vec::new();
        let mut pages = client
            .list_tasks()
            .cluster(cluster)
            .family(family)
            .into_paginator()
            .send();
        while let Some(page) = pages.next().await {
            let page = page.map_err(|e| CloudError::ListTasks {
                family: family.to_string(),
                region: region.to_string(),
                source: Box::new(e.into()),
            })?;
            arns.extend(page.task_arns().iter().cloned());
        }
        Ok(arns)
    }

    async fn stop_task(
        &self,
        region: &str,
        cluster: &str,
        task_arn: &str,
    ) -> Result<(), CloudError> {
        let conf = self.sdk_config(region).await;
        let client = aws_sdk_ecs::Client::new(&conf);

        client
            .stop_task()
            .cluster(cluster)
            .task(task_arn)
            .send()
            .await
            .map_err(|e| CloudError::StopTask {
                task: task_arn.to_string(),
                region: region.to_string(),
                source: Box::new(e.into()),
            })?;
        Ok(())
    }

    async fn registry_token(&self, region: &str) -> Result<RegistryToken, CloudError> {
        let conf = self.sdk_config(region).await;
        let client = aws_sdk_ecr::Client::new(&conf);

        let response = client.get_authorization_token().send().await.map_err(|e| {
            CloudError::RegistryToken {
                region: region.to_string(),
                source: Box::new(e.into()),
            }
        })?;
        let encoded = response
            .authorization_data()
            .first()
            .and_then(|data| data.authorization_token())
            .ok_or(CloudError::MalformedRegistryToken)?;
        RegistryToken::decode(encoded)
    }
}
