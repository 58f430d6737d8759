use parser::ParseError;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{}: {source}", .path.display())]
    Convert {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}
