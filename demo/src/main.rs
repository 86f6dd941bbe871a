use event_registry::{Args, EventRegistry, InvokeMode};
use event_registry_macros::event_source;
use tracing_subscriber::EnvFilter;

struct Example;

#[event_source]
impl Example {
    #[event_handler("HelloWorld")]
    fn hello_world() {
        println!("Hello world!");
    }
}

fn init_tracing() {
    // 日志级别通过 RUST_LOG 配置，默认 info
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let registry = EventRegistry::instance();
    let added = registry.scan_and_register::<Example>();
    tracing::info!(added, "handlers registered");

    registry.invoke("HelloWorld", InvokeMode::ShortCircuit, &Args::new())?;
    Ok(())
}
