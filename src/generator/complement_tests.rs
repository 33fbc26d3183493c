//! Test cases for the complement declarations.
use crate::error::Result;
use crate::naming::param_list;
use crate::template::{render, ComplementTestTemplates};

/// One `it(...)` block for a predicate of `arity` parameters. A zero-arity predicate
/// accepts any call, so it gets the `no_negative` comment instead of a failing call.
pub fn render_case(index: usize, arity: usize, t: &ComplementTestTemplates) -> Result<String> {
    let names = param_list(0, arity)?
        .into_iter()
        .map(|n| n.lower().to_string())
        .collect::<Vec<_>>();
    let header = render_items("complement_tests.header_item", &t.header_item, &names, &t.item_separator)?;
    let call = render_items("complement_tests.call_item", &t.call_item, &names, &t.item_separator)?;
    let tail = if arity == 0 {
        t.no_negative.clone()
    } else {
        let args = (0..arity).map(|i| i.to_string()).collect::<Vec<_>>().join(", ");
        render("complement_tests.negative", &t.negative, &[("args", &args)])?
    };
    let index = index.to_string();
    render(
        "complement_tests.case",
        &t.case,
        &[("index", &index), ("header", &header), ("call", &call), ("tail", &tail)],
    )
}

fn render_items(template_name: &'static str, template: &str, names: &[String], sep: &str) -> Result<String> {
    let items = names
        .iter()
        .map(|name| render(template_name, template, &[("name", name)]))
        .collect::<Result<Vec<_>>>()?;
    Ok(items.join(sep))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::GeneratorKind;
    use crate::template::Templates;
    use pretty_assertions::assert_eq;

    #[test]
    fn zero_arity_emits_discard_comment() {
        let out = render_case(0, 0, &ComplementTestTemplates::default()).unwrap();
        let expected = "\
it('returns a function whose parameters match the input function (0)', () => {
  const fn = complement(() => true)
  fn()
  // Extra arguments are discarded, so there is no negative case here.
})
";
        assert_eq!(out, expected);
    }

    #[test]
    fn arity_three_expects_a_type_error() {
        let out = render_case(3, 3, &ComplementTestTemplates::default()).unwrap();
        let expected = "\
it('returns a function whose parameters match the input function (3)', () => {
  const fn = complement((a: 'a', b: 'b', c: 'c',) => true)
  fn('a', 'b', 'c',)
  // $ExpectError
  fn(0, 1, 2)
})
";
        assert_eq!(out, expected);
    }

    #[test]
    fn cases_are_separated_by_a_blank_line() {
        let out = crate::generator::generate(GeneratorKind::ComplementTests, 2, &Templates::default()).unwrap();
        assert_eq!(out.matches("it('returns").count(), 2);
        assert!(out.contains("})\n\nit('returns a function whose parameters match the input function (1)'"));
        assert_eq!(out.matches("// $ExpectError").count(), 1);
    }
}
