use shared::error::ApplicationError;
use tracing_subscriber::filter::LevelFilter;

/// Startup settings, read once from the Lambda environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub table_name: String,
    pub key_attribute: String,
    pub path_parameter: String,
    pub consistent_read: bool,
    pub service_name: String,
    pub metrics_namespace: String,
    pub log_level: LevelFilter,
    pub function_name: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ApplicationError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ApplicationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let table_name = var("TABLE_NAME")
            .ok_or_else(|| ApplicationError::InitError("TABLE_NAME must be set".to_string()))?;
        let consistent_read = match var("CONSISTENT_READ") {
            Some(value) => value.parse::<bool>().map_err(|e| {
                ApplicationError::InitError(format!("CONSISTENT_READ is not a bool: {}", e))
            })?,
            None => false,
        };
        let log_level = match var("LOG_LEVEL") {
            Some(value) => value.parse::<LevelFilter>().map_err(|e| {
                ApplicationError::InitError(format!("LOG_LEVEL is not a level: {}", e))
            })?,
            None => LevelFilter::INFO,
        };

        Ok(Config {
            table_name,
            key_attribute: var("KEY_ATTRIBUTE").unwrap_or_else(|| "id".to_string()),
            path_parameter: var("ID_PATH_PARAMETER").unwrap_or_else(|| "id".to_string()),
            consistent_read,
            service_name: var("POWERTOOLS_SERVICE_NAME").unwrap_or_else(|| "Get".to_string()),
            metrics_namespace: var("POWERTOOLS_METRICS_NAMESPACE")
                .unwrap_or_else(|| "GetService".to_string()),
            log_level,
            function_name: var("AWS_LAMBDA_FUNCTION_NAME"),
        })
    }
}
