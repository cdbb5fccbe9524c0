use tracing::subscriber::set_global_default;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::{fmt::MakeWriter, layer::SubscriberExt, EnvFilter, Registry};

/// Install the global subscriber: bunyan-formatted JSON to `console_sink`, filtered
/// by the `LOG` environment variable (default `info`). Records emitted through
/// the `log` crate are forwarded as well.
pub fn configure<W>(name: impl Into<String>, console_sink: W) -> Result<(), anyhow::Error>
where
    W: for<'a> MakeWriter<'a> + 'static + Send + Sync,
{
    LogTracer::builder()
        .ignore_crate("hyper")
        .with_max_level(log::LevelFilter::Debug)
        .init()?;

    let env_filter = EnvFilter::try_from_env("LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    let formatting_layer = BunyanFormattingLayer::new(name.into(), console_sink);
    let subscriber = Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(formatting_layer);

    set_global_default(subscriber)?;

    Ok(())
}
