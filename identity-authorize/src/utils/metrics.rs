//! CloudWatch Embedded Metric Format (EMF) publishing.
//!
//! Metrics are collected per invocation in a [`MetricSet`] and written as a single
//! structured log line; CloudWatch extracts them from the function's log stream.

#[cfg(test)]
use mockall::automock;
use serde::Serialize;
use serde_json::{json, Map, Value};
use std::{
    sync::Arc,
    time::{SystemTime, UNIX_EPOCH},
};
use typed_builder::TypedBuilder as Builder;

pub const SUCCESS_METRIC: &str = "GetSucceeded";
pub const COLD_START_METRIC: &str = "ColdStart";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MetricUnit {
    Count,
}

#[cfg_attr(test, automock)]
pub trait MetricsSink: Send + Sync {
    fn publish(&self, blob: &Value);
}

#[derive(Debug, Default)]
pub struct StdoutSink;

impl MetricsSink for StdoutSink {
    fn publish(&self, blob: &Value) {
        println!("{}", blob);
    }
}

#[derive(Debug, Clone, PartialEq)]
struct MetricEntry {
    name: String,
    value: f64,
    unit: MetricUnit,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricSet {
    metrics: Vec<MetricEntry>,
    dimensions: Vec<(String, String)>,
}

impl MetricSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_metric(&mut self, name: impl Into<String>, value: f64, unit: MetricUnit) {
        self.metrics.push(MetricEntry {
            name: name.into(),
            value,
            unit,
        });
    }

    pub fn add_dimension(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.dimensions.push((name.into(), value.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }
}

#[derive(Clone, Builder)]
pub struct Metrics {
    #[builder(setter(into))]
    namespace: String,

    #[builder(setter(into))]
    service: String,

    sink: Arc<dyn MetricsSink>,
}

impl Metrics {
    pub fn service(&self) -> &str {
        &self.service
    }

    /// Writes `set` through the sink. An empty set is skipped.
    pub fn publish(&self, set: &MetricSet) {
        if set.is_empty() {
            tracing::debug!("no metrics to publish");
            return;
        }
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as u64)
            .unwrap_or_default();
        self.sink.publish(&self.to_emf(set, timestamp));
    }

    fn to_emf(&self, set: &MetricSet, timestamp: u64) -> Value {
        let mut root = Map::new();
        let mut dimension_names = vec![Value::String("service".to_string())];
        root.insert("service".to_string(), Value::String(self.service.clone()));
        for (name, value) in &set.dimensions {
            dimension_names.push(Value::String(name.clone()));
            root.insert(name.clone(), Value::String(value.clone()));
        }

        let definitions: Vec<Value> = set
            .metrics
            .iter()
            .map(|metric| json!({ "Name": metric.name, "Unit": metric.unit }))
            .collect();
        for metric in &set.metrics {
            root.insert(metric.name.clone(), json!(metric.value));
        }

        root.insert(
            "_aws".to_string(),
            json!({
                "Timestamp": timestamp,
                "CloudWatchMetrics": [{
                    "Namespace": self.namespace,
                    "Dimensions": [dimension_names],
                    "Metrics": definitions,
                }]
            }),
        );

        Value::Object(root)
    }
}
