//! Fragment assembly: plan → per-entry text → joined compound declaration.
pub mod complement;
pub mod complement_tests;
pub mod partial;

use crate::arity;
use crate::error::Result;
use crate::ir::{GeneratorKind, Plan, Signature};
use crate::template::Templates;

/// Pure text for one generator run, without banner.
pub fn generate(generator: GeneratorKind, max_arity: usize, templates: &Templates) -> Result<String> {
    let plan = arity::plan(generator, max_arity)?;
    assemble(&plan, templates)
}

/// Banner, begin/end markers and body, as the emitter writes it. `max_arity` falls
/// back to the generator's configured default.
pub fn generate_document(
    generator: GeneratorKind,
    max_arity: Option<usize>,
    templates: &Templates,
) -> Result<String> {
    let max_arity = max_arity.unwrap_or_else(|| generator.default_max_arity(templates));
    let body = generate(generator, max_arity, templates)?;
    crate::emit::emit(&body, generator.label(templates), &templates.banner)
}

pub fn assemble(plan: &Plan, templates: &Templates) -> Result<String> {
    let fragments = plan
        .entries
        .iter()
        .map(|signature| render_fragment(signature, templates))
        .collect::<Result<Vec<_>>>()?;
    tracing::debug!(
        generator = ?plan.generator,
        max_arity = plan.max_arity,
        fragments = fragments.len(),
        "assembled fragments"
    );
    Ok(fragments.join(plan.generator.separator(templates)))
}

fn render_fragment(signature: &Signature, templates: &Templates) -> Result<String> {
    match *signature {
        Signature::PartialMember { arity, bound } => {
            partial::render_member(arity, bound, &templates.partial)
        }
        Signature::ComplementDecl { arity } => {
            complement::render_declaration(arity, &templates.complement)
        }
        Signature::ComplementTest { index, arity } => {
            complement_tests::render_case(index, arity, &templates.complement_tests)
        }
    }
}

impl GeneratorKind {
    pub fn separator(self, templates: &Templates) -> &str {
        match self {
            GeneratorKind::Partial => &templates.partial.separator,
            GeneratorKind::Complement => &templates.complement.separator,
            GeneratorKind::ComplementTests => &templates.complement_tests.separator,
        }
    }

    pub fn label(self, templates: &Templates) -> Option<&str> {
        match self {
            GeneratorKind::Partial => templates.partial.label.as_deref(),
            GeneratorKind::Complement => templates.complement.label.as_deref(),
            GeneratorKind::ComplementTests => templates.complement_tests.label.as_deref(),
        }
    }

    pub fn default_max_arity(self, templates: &Templates) -> usize {
        match self {
            GeneratorKind::Partial => templates.partial.max_arity,
            GeneratorKind::Complement => templates.complement.max_arity,
            GeneratorKind::ComplementTests => templates.complement_tests.max_arity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    const ALL: [GeneratorKind; 3] = [
        GeneratorKind::Partial,
        GeneratorKind::Complement,
        GeneratorKind::ComplementTests,
    ];

    #[test]
    fn default_max_arities() {
        let t = Templates::default();
        assert_eq!(GeneratorKind::Partial.default_max_arity(&t), 10);
        assert_eq!(GeneratorKind::Complement.default_max_arity(&t), 11);
        assert_eq!(GeneratorKind::ComplementTests.default_max_arity(&t), 11);
    }

    #[test]
    fn custom_separator_is_used() {
        let mut t = Templates::default();
        t.partial.separator = " & ".into();
        t.partial.member = "[{{bound}}|{{rest}}]".into();
        let out = generate(GeneratorKind::Partial, 3, &t).unwrap();
        assert_eq!(out, "[A|] & [A|B] & [A, B|]");
    }

    #[test]
    fn bad_template_surfaces_before_output() {
        let mut t = Templates::default();
        t.complement.declaration = "{{arity}}".into();
        assert!(generate(GeneratorKind::Complement, 2, &t).is_err());
        // nothing to render, nothing to fail
        assert_eq!(generate(GeneratorKind::Complement, 0, &t).unwrap(), "");
    }

    proptest! {
        #[test]
        fn output_is_deterministic(n in 0usize..=12, which in 0usize..3) {
            let t = Templates::default();
            let first = generate_document(ALL[which], Some(n), &t).unwrap();
            let second = generate_document(ALL[which], Some(n), &t).unwrap();
            prop_assert_eq!(first, second);
        }
    }
}
