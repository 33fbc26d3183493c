//! Target-syntax configuration.
//!
//! Every piece of emitted text comes from a string template with `{{name}}`
//! placeholders. The defaults reproduce the Flow library definitions the tool was
//! written for; other type systems only need a different config file.
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}").expect("placeholder pattern is valid")
});

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Templates {
    pub banner: BannerTemplates,
    pub partial: PartialTemplates,
    pub complement: ComplementTemplates,
    pub complement_tests: ComplementTestTemplates,
}

/// Comment block printed ahead of labelled output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BannerTemplates {
    /// line comment token of the target language
    pub comment: String,
    /// where the generated code comes from; available to `lines` as `{{origin}}`
    pub origin: String,
    pub lines: Vec<String>,
}

/// Placeholders in `member`: `params`, `bound`, `rest`, `ret`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialTemplates {
    pub max_arity: usize,
    pub label: Option<String>,
    pub return_type: String,
    pub member: String,
    pub separator: String,
}

/// Placeholders in `declaration`: `params`, `params_sep`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComplementTemplates {
    pub max_arity: usize,
    pub label: Option<String>,
    /// goes between the parameter list and the predicate parameter, only when the
    /// list is non-empty
    pub param_separator: String,
    pub declaration: String,
    pub separator: String,
}

/// Placeholders: `case` takes `index`, `header`, `call`, `tail`; `header_item` and
/// `call_item` take `name`; `negative` takes `args`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComplementTestTemplates {
    pub max_arity: usize,
    pub label: Option<String>,
    pub case: String,
    pub header_item: String,
    pub call_item: String,
    pub item_separator: String,
    pub negative: String,
    pub no_negative: String,
    pub separator: String,
}

// ————————————————————————————————————————————————————————————————————————————
// DEFAULTS
// ————————————————————————————————————————————————————————————————————————————

impl Default for BannerTemplates {
    fn default() -> Self {
        Self {
            comment: "//".into(),
            origin: "https://github.com/LoganBarnett/typedef-gen".into(),
            lines: vec![
                "The following code is generated from".into(),
                "{{origin}} due to Flow not being able to".into(),
                "preserve the input function's form as a return type.".into(),
                String::new(),
            ],
        }
    }
}

impl Default for PartialTemplates {
    fn default() -> Self {
        Self {
            max_arity: 10,
            label: None,
            return_type: "R".into(),
            member: "\
(<{{params}}, {{ret}}>(
  (...r: [{{params}}]) => {{ret}},
  args: [{{bound}}],
) => (({{rest}}) => {{ret}}))"
                .into(),
            separator: " &\n".into(),
        }
    }
}

impl Default for ComplementTemplates {
    fn default() -> Self {
        Self {
            max_arity: 11,
            label: Some("complement declaration".into()),
            param_separator: ",".into(),
            declaration: "
declare function complement<{{params}}{{params_sep}} Fn: ({{params}}) => boolean>(
  f: Fn
): Fn;"
                .into(),
            separator: "\n".into(),
        }
    }
}

impl Default for ComplementTestTemplates {
    fn default() -> Self {
        Self {
            max_arity: 11,
            label: Some("complement test cases".into()),
            case: "\
it('returns a function whose parameters match the input function ({{index}})', () => {
  const fn = complement(({{header}}) => true)
  fn({{call}})
  {{tail}}
})
"
            .into(),
            header_item: "{{name}}: '{{name}}',".into(),
            call_item: "'{{name}}',".into(),
            item_separator: " ".into(),
            negative: "// $ExpectError\n  fn({{args}})".into(),
            no_negative: "// Extra arguments are discarded, so there is no negative case here.".into(),
            separator: "\n".into(),
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// LOADING
// ————————————————————————————————————————————————————————————————————————————

impl Templates {
    /// Load a config file; `.json` is read as JSON, anything else as TOML. Missing
    /// keys fall back to the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let config_error = |message: String| Error::Config {
            path: path.display().to_string(),
            message,
        };
        let source = std::fs::read_to_string(path).map_err(|e| config_error(e.to_string()))?;
        let is_json = path.extension().is_some_and(|ext| ext == "json");
        let parsed = if is_json {
            crate::path_de::from_json_str_with_path(&source)
        } else {
            crate::path_de::from_toml_str_with_path(&source)
        };
        let templates: Templates = parsed.map_err(config_error)?;
        tracing::debug!(path = %path.display(), "loaded template config");
        Ok(templates)
    }
}

// ————————————————————————————————————————————————————————————————————————————
// RENDERING
// ————————————————————————————————————————————————————————————————————————————

/// Substitute `{{name}}` placeholders from `vars`. `template_name` only labels errors.
pub fn render(template_name: &'static str, template: &str, vars: &[(&str, &str)]) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut last = 0;
    for caps in PLACEHOLDER.captures_iter(template) {
        let Some(whole) = caps.get(0) else { continue };
        let name = &caps[1];
        let value = vars
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
            .ok_or_else(|| Error::UnknownPlaceholder {
                template: template_name,
                name: name.to_string(),
            })?;
        out.push_str(&template[last..whole.start()]);
        out.push_str(value);
        last = whole.end();
    }
    out.push_str(&template[last..]);
    Ok(out)
}
