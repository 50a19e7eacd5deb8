use thiserror::Error;

#[derive(Error, Debug)]
pub enum BundlerError {
    #[error("Failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {status}")]
    ToolFailed {
        program: String,
        status: std::process::ExitStatus,
    },
}

pub type Result<T> = std::result::Result<T, BundlerError>;
