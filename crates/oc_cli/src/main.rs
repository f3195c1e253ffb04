use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    oc_cli::run().await
}
