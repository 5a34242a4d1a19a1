//! Locale listing

use natsort_core::locale::{available_locales, get_locale};
use std::io::Write;

use crate::error::CliResult;

/// Print the built-in locales with their separators
pub fn list_locales(writer: &mut impl Write) -> CliResult<()> {
    for code in available_locales()? {
        let locale = get_locale(&code)?;
        let group = locale
            .thousands_sep()
            .map_or_else(|| "none".to_string(), |c| format!("{c:?}"));
        writeln!(
            writer,
            "{code:<8} decimal {:?}  group {group}",
            locale.decimal_point()
        )?;
    }
    Ok(())
}
