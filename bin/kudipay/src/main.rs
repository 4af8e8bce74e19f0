use eyre::Report;

#[tokio::main]
async fn main() -> Result<(), Report> {
    kudipay::run().await
}
