use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    classroom_sessions::infra::logging::init();

    classroom_sessions::cli::run().await
}
