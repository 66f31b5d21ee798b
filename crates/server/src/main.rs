#[tokio::main]
async fn main() -> anyhow::Result<()> {
    gleam_server::start().await
}
