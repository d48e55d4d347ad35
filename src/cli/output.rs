use clap::builder::{PossibleValuesParser, TypedValueParser};

pub use movierec_core::format::OutputFormat;

/// clap parser for `--format`, listing the accepted values in `--help`
pub fn format_parser() -> impl TypedValueParser<Value = OutputFormat> {
    PossibleValuesParser::new(["human", "json", "records"])
        .map(|s| s.parse::<OutputFormat>().unwrap_or_default())
}
