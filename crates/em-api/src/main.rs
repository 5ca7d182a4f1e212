#[tokio::main]
async fn main() {
    if let Err(err) = em_api::run().await {
        tracing::error!(error = %err, "em-api failed");
        std::process::exit(1);
    }
}
