//! Banner and begin/end markers around generated text.
use crate::error::Result;
use crate::template::{render, BannerTemplates};

/// Unlabelled output is the bare body. Labelled output gets the banner, then
/// `Begin generated <label>.`, the body, and `End generated <label>.`. Every line,
/// the body included, ends with a newline.
pub fn emit(body: &str, label: Option<&str>, banner: &BannerTemplates) -> Result<String> {
    let mut out = String::new();
    if let Some(label) = label {
        for line in &banner.lines {
            let line = render("banner.lines", line, &[("origin", &banner.origin)])?;
            push_comment(&mut out, &banner.comment, &line);
        }
        push_comment(&mut out, &banner.comment, &format!("Begin generated {label}."));
    }
    out.push_str(body);
    out.push('\n');
    if let Some(label) = label {
        push_comment(&mut out, &banner.comment, &format!("End generated {label}."));
    }
    Ok(out)
}

fn push_comment(out: &mut String, comment: &str, text: &str) {
    out.push_str(comment);
    if !text.is_empty() {
        out.push(' ');
        out.push_str(text);
    }
    out.push('\n');
}
