#[derive(Debug, PartialEq)]
pub enum ParseError {
    /// Fewer lines than bucket, start, end, interval and one trend line
    TooFewLines(usize),

    /// The bucket line was blank
    MissingBucket,

    /// A start or end date could not be parsed
    InvalidDate { field: &'static str, value: String },

    /// Interval was not a positive whole number of minutes
    InvalidInterval(String),

    /// Dense output needs an interval but the line was blank
    MissingInterval,

    /// End date was not after the start date
    EmptyRange { start: String, end: String },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::TooFewLines(count) => {
                write!(f, "Input file must have at least 5 lines (got {}).", count)
            }
            ParseError::MissingBucket => write!(f, "Bucket name (line 1) is empty."),
            ParseError::InvalidDate { field, value } => write!(
                f,
                "Invalid {} date: '{}'. Expected format: YYYY-MM-DD",
                field, value
            ),
            ParseError::InvalidInterval(raw) => write!(
                f,
                "Invalid interval: '{}'. Expected a positive number of minutes",
                raw
            ),
            ParseError::MissingInterval => {
                write!(f, "Interval (line 4) is required for tsv output")
            }
            ParseError::EmptyRange { start, end } => {
                write!(f, "End date {} must be after start date {}", end, start)
            }
        }
    }
}

impl std::error::Error for ParseError {}
