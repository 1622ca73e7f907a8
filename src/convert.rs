//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Result, bail};

use eumryeok_calendar::{RenderConfig, Script};

use crate::config::RenderToml;

/// Parses a script name into the corresponding enum variant.
///
/// `"hangul"` and `"hanja"` are accepted as aliases.
pub fn parse_script(s: &str) -> Result<Script> {
    match s.to_lowercase().as_str() {
        "korean" | "hangul" => Ok(Script::Korean),
        "chinese" | "hanja" => Ok(Script::Chinese),
        other => bail!("unknown script: {other:?}"),
    }
}

/// Builds a [`RenderConfig`] from the TOML render table.
pub fn build_render_config(render: &RenderToml) -> Result<RenderConfig> {
    Ok(RenderConfig::new()
        .with_script(parse_script(&render.script)?)
        .with_intercalation_marker(render.intercalation_marker))
}
