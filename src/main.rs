use std::process::ExitCode;

fn main() -> ExitCode {
    match rcng2unit::run() {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
