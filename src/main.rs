use std::sync::Arc;

mod api;
mod config;
mod counter;
mod handler;
mod http;
mod logger;
mod server;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::Config::load_from("config")?;

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }

    let runtime = runtime_builder.build()?;
    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;

    // Counter is loaded before the listener exists, so no request can
    // race the initial load
    let store = counter::CounterStore::load(&cfg.counter.record_file);
    let state = Arc::new(config::AppState::new(&cfg, store));

    let listener = server::create_reusable_listener(addr)?;
    logger::log_server_start(&addr, &cfg);

    server::run(listener, state).await
}
