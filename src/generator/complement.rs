//! Predicate complement: one generic declaration per arity.
use crate::error::Result;
use crate::naming::render_params;
use crate::template::{render, ComplementTemplates};

pub fn render_declaration(arity: usize, t: &ComplementTemplates) -> Result<String> {
    let params = render_params(0, arity)?;
    // zero params: nothing to separate from `Fn`
    let params_sep = if arity > 0 { t.param_separator.as_str() } else { "" };
    render(
        "complement.declaration",
        &t.declaration,
        &[("params", &params), ("params_sep", params_sep)],
    )
}
