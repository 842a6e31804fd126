use qscrap::{process, Result};

#[tokio::main]
async fn main() -> Result<()> {
    process::run().await
}
