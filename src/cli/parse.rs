//! Value parsers for clap arguments

use lexis_core::query::SearchScope;
use lexis_core::transfer::TransferFormat;

pub fn parse_scope(s: &str) -> Result<SearchScope, String> {
    s.parse::<SearchScope>().map_err(|_| {
        let names: Vec<&str> = SearchScope::ALL.iter().map(|scope| scope.as_str()).collect();
        format!("unknown scope '{}' (expected one of: {})", s, names.join(", "))
    })
}

pub fn parse_transfer_format(s: &str) -> Result<TransferFormat, String> {
    s.parse::<TransferFormat>()
        .map_err(|_| format!("unknown format '{}' (expected csv or json)", s))
}
