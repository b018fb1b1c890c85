//! Default model configuration

use super::DeploymentConfig;
use serde_json::{Map, json};

/// Build the default configuration for a model variant
pub fn default_config(model_name: &str, variant: &str) -> DeploymentConfig {
    let mut config = Map::new();
    config.insert("model_name".into(), json!(model_name));
    config.insert("variant".into(), json!(variant));
    config.insert("owner_team".into(), json!("personalization"));
    config.insert("omd_business_service".into(), json!("content-discovery"));
    config.insert("related_features".into(), json!({}));
    config.insert(
        "inference_configuration".into(),
        json!({ "response_item_limit": -1 }),
    );
    config.insert(
        "serving_configuration".into(),
        json!({
            "autoscaling": true,
            "autoscale_conditions": {
                "rps": 20
            },
            "min_instance": 1,
            "max_instance": 5,
            "machine_type": "ml.c5.xlarge",
            "processor": "cpu",
            "framework": {
                "framework_name": "tensorflow",
                "framework_version": "2.9.2"
            },
            "shadow_config": {}
        }),
    );
    config.insert("serving_regions".into(), json!(["us-east-1"]));

    DeploymentConfig::from(config)
}
