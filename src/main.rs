use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    viva_cli::run_cli().await
}
