//! S3 remote client built on the AWS SDK
//!
//! `object_store` cannot attach a canned ACL to uploads, so the production client
//! talks to S3 through `aws-sdk-s3` directly.

mod aws_s3_client;

pub use aws_s3_client::{AwsS3Client, S3Overrides, normalize_endpoint};
