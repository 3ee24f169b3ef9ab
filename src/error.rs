use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    EmptyInput,
    StaleCodeTable,
    SymbolNotInCodeTable(char),
    UnableToReadRecord(std::io::Error),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => {
                write!(f, "Record contains no characters to encode")
            }
            Self::StaleCodeTable => {
                write!(
                    f,
                    "No code table available for this record. Encode the record first."
                )
            }
            Self::SymbolNotInCodeTable(symbol) => {
                write!(f, "Symbol {:?} not present in code table", symbol)
            }
            Self::UnableToReadRecord(error) => {
                write!(f, "Unable to read telemetry record: {}", error)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnableToReadRecord(error) => Some(error),
            _ => None,
        }
    }
}
