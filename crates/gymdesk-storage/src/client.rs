use aws_config::{BehaviorVersion, SdkConfig};

/// Load AWS config from the default chain (env, profile, IMDS).
pub async fn load_config() -> SdkConfig {
    aws_config::load_defaults(BehaviorVersion::latest()).await
}
