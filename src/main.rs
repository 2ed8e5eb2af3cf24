#[tokio::main]
async fn main() {
    if let Err(e) = pharmaquest_lib::run().await {
        tracing::error!("PharmaQuest failed to start: {e}");
        eprintln!("PharmaQuest failed to start: {e}");
        std::process::exit(1);
    }
}
