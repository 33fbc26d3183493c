//! Curried partial application as an intersection of call signatures.
use crate::error::{Error, Result};
use crate::naming::{param_list, render_params};
use crate::template::{render, PartialTemplates};

/// One intersection member: a function of `arity` parameters with the first
/// `bound` of them supplied now and the rest left for the returned closure.
pub fn render_member(arity: usize, bound: usize, t: &PartialTemplates) -> Result<String> {
    let params = param_list(0, arity)?;
    if params.iter().any(|p| p.to_string() == t.return_type) {
        return Err(Error::ReservedNameCollision { name: t.return_type.clone() });
    }
    let all = render_params(0, arity)?;
    let pre = render_params(0, bound)?;
    let rest = render_params(bound, arity)?;
    let member = render(
        "partial.member",
        &t.member,
        &[("params", &all), ("bound", &pre), ("rest", &rest), ("ret", &t.return_type)],
    )?;
    tracing::trace!(arity, bound, "rendered partial member");
    Ok(member)
}
