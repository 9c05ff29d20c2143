#[tokio::main]
async fn main() -> anyhow::Result<()> {
    menubot::run().await
}
