use std::collections::HashMap;

use tera::Tera;

use crate::config::ThemeConfig;
use crate::error::AppError;

/// Initialize the Tera template engine from the theme's templates directory
pub fn init_templates(theme: &ThemeConfig) -> Result<Tera, AppError> {
    let mut tera = Tera::new(&theme.template_glob())?;

    tera.set_escape_fn(escape_html);
    tera.register_filter("external_attrs", external_attrs_filter);

    Ok(tera)
}

/// HTML escaping for text and quoted attribute values.
///
/// Unlike Tera's default this leaves `/` alone, so URLs in meta tags and
/// links come out readable.
pub fn escape_html(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            '\'' => output.push_str("&#39;"),
            _ => output.push(c),
        }
    }
    output
}

/// Render `target` and `rel` attributes for a link flagged as external.
///
/// `{{ link.external | external_attrs }}` yields
/// ` target="_blank" rel="noopener noreferrer"` for `true` and nothing otherwise.
/// Use with `| safe`.
fn external_attrs_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let external = value
        .as_bool()
        .ok_or_else(|| tera::Error::msg("external_attrs filter expects a boolean"))?;

    let attrs = if external {
        r#" target="_blank" rel="noopener noreferrer""#
    } else {
        ""
    };
    Ok(tera::Value::String(attrs.to_string()))
}
