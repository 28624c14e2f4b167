//! Shared logging utilities for consistent tracing

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{Event, Subscriber, error, info, warn};
use tracing_subscriber::layer::Context;

/// Tracing endpoint configuration
#[derive(Debug, Clone)]
pub struct TracingEndpoint {
    pub url: String,
    pub batch_size: usize,
    pub flush_interval: Duration,
}

impl TracingEndpoint {
    pub fn new(url: String) -> Self {
        Self {
            url,
            batch_size: 5,
            flush_interval: Duration::from_millis(500),
        }
    }
}

/// Structured trace event for HTTP endpoint
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TraceEvent {
    pub timestamp: DateTime<Utc>,
    pub level: String,
    pub target: String,
    pub message: String,
    pub service: String,
    pub fields: HashMap<String, serde_json::Value>,
}

/// HTTP tracing layer that sends trace events to a remote endpoint
pub struct HttpTracingLayer {
    service: String,
    sender: mpsc::UnboundedSender<TraceEvent>,
}

impl HttpTracingLayer {
    /// Must be called from inside a tokio runtime; the batching task is spawned here.
    pub fn new(service: &str, endpoint: TracingEndpoint) -> Self {
        let (tx, mut rx) = mpsc::unbounded_channel::<TraceEvent>();

        let endpoint_url = endpoint.url.clone();
        let batch_size = endpoint.batch_size;
        let flush_interval = endpoint.flush_interval;

        tokio::spawn(async move {
            let client = reqwest::Client::new();
            let mut events_buffer = Vec::with_capacity(batch_size);
            let mut flush_timer = tokio::time::interval(flush_interval);

            loop {
                tokio::select! {
                    event = rx.recv() => {
                        match event {
                            Some(event) => {
                                events_buffer.push(event);
                                if events_buffer.len() >= batch_size {
                                    Self::send_batch(&client, &endpoint_url, &mut events_buffer).await;
                                }
                            }
                            None => {
                                // Channel closed
                                if !events_buffer.is_empty() {
                                    Self::send_batch(&client, &endpoint_url, &mut events_buffer).await;
                                }
                                break;
                            }
                        }
                    }

                    _ = flush_timer.tick() => {
                        if !events_buffer.is_empty() {
                            Self::send_batch(&client, &endpoint_url, &mut events_buffer).await;
                        }
                    }
                }
            }
        });

        HttpTracingLayer {
            service: service.to_string(),
            sender: tx,
        }
    }

    async fn send_batch(client: &reqwest::Client, endpoint_url: &str, events_buffer: &mut Vec<TraceEvent>) {
        let batch = std::mem::take(events_buffer);

        // Logging through tracing here would feed back into this layer
        match client.post(endpoint_url).json(&batch).send().await {
            Ok(response) if !response.status().is_success() => {
                eprintln!("Failed to send trace batch: HTTP {}", response.status());
            }
            Ok(_) => {}
            Err(e) => {
                eprintln!("Failed to send trace batch: {e}");
            }
        }
    }
}

impl<S> tracing_subscriber::Layer<S> for HttpTracingLayer
where
    S: Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let mut fields = HashMap::new();
        let mut message = String::new();

        let mut visitor = TraceVisitor {
            message: &mut message,
            fields: &mut fields,
        };
        event.record(&mut visitor);

        let trace_event = TraceEvent {
            timestamp: Utc::now(),
            level: metadata.level().to_string(),
            target: metadata.target().to_string(),
            message,
            service: self.service.clone(),
            fields,
        };

        // Receiver gone means the runtime is shutting down
        let _ = self.sender.send(trace_event);
    }
}

/// Visitor to extract event fields and message
struct TraceVisitor<'a> {
    message: &'a mut String,
    fields: &'a mut HashMap<String, serde_json::Value>,
}

impl<'a> tracing::field::Visit for TraceVisitor<'a> {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message.push_str(&format!("{value:?}"));
        } else {
            self.fields.insert(
                field.name().to_string(),
                serde_json::Value::String(format!("{value:?}")),
            );
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            self.fields
                .insert(field.name().to_string(), serde_json::Value::String(value.to_string()));
        }
    }

    fn record_i64(&mut self, field: &tracing::field::Field, value: i64) {
        self.fields.insert(
            field.name().to_string(),
            serde_json::Value::Number(serde_json::Number::from(value)),
        );
    }

    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.fields.insert(
            field.name().to_string(),
            serde_json::Value::Number(serde_json::Number::from(value)),
        );
    }

    fn record_bool(&mut self, field: &tracing::field::Field, value: bool) {
        self.fields
            .insert(field.name().to_string(), serde_json::Value::Bool(value));
    }
}

/// Filter directive for a service crate and its dependencies
pub fn filter_directive(service: &str, log_level: Option<&str>) -> String {
    let base_level = log_level.unwrap_or("info");
    format!("{service}={base_level},shared={base_level},tower_http=debug,reqwest=warn,hyper=warn")
}

/// Initialize tracing subscriber with optional endpoint and log level
pub fn init_tracing_with_endpoint_and_level(
    service: &str,
    endpoint: Option<TracingEndpoint>,
    log_level: Option<&str>,
) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let level_filter = filter_directive(service, log_level);
    let env_filter = EnvFilter::new(&level_filter);

    match endpoint {
        Some(endpoint) => {
            println!("Tracing endpoint configured: {}", endpoint.url);
            println!("Log level: {level_filter}");

            let http_layer = HttpTracingLayer::new(service, endpoint);

            let fmt_layer = fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact();

            tracing_subscriber::registry()
                .with(env_filter)
                .with(http_layer)
                .with(fmt_layer)
                .init();
        }
        None => {
            println!("Log level: {level_filter}");
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .init();
        }
    }
}

/// Get formatted timestamp for consistent logging
pub fn format_timestamp() -> String {
    let now: DateTime<Utc> = Utc::now();
    now.format("%H:%M:%S%.3f").to_string()
}

/// Contextual logging helper for startup messages
pub fn log_startup(details: &str) {
    info!(timestamp = format_timestamp(), "🚀 Starting {}", details);
}

/// Contextual logging helper for shutdown messages
pub fn log_shutdown(reason: &str) {
    info!(timestamp = format_timestamp(), "🛑 Shutting down: {}", reason);
}

/// Contextual logging helper for error conditions
pub fn log_error(context: &str, error: &dyn std::fmt::Display) {
    error!(
        timestamp = format_timestamp(),
        error = %error,
        "❌ {} failed: {}",
        context,
        error
    );
}

/// Contextual logging helper for recoverable problems
pub fn log_warning(context: &str, details: &dyn std::fmt::Display) {
    warn!(timestamp = format_timestamp(), "⚠️ {}: {}", context, details);
}

/// Contextual logging helper for success conditions
pub fn log_success(message: &str) {
    info!(timestamp = format_timestamp(), "✅ {}", message);
}
