#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() {
    use project_showcase::backend::{self, HostConfig};

    let config = HostConfig::from_env();
    if let Err(error) = backend::run(config.clone()).await {
        config.log_failure(&*error);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    project_showcase::frontend::run();
}
