//! Parameter naming: index → letter, and half-open ranges of letters.
use std::fmt;

use crate::error::{Error, Result, MAX_PARAM_INDEX};

/// A generated type parameter name. Index 0 is `A`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParamName(char);

impl ParamName {
    pub fn as_char(self) -> char {
        self.0
    }
    /// Value-level identifier for the same position (`A` → `a`).
    pub fn lower(self) -> char {
        self.0.to_ascii_lowercase()
    }
}

impl fmt::Display for ParamName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub fn param_name(index: usize) -> Result<ParamName> {
    if index > MAX_PARAM_INDEX {
        return Err(Error::UnsupportedParameterCount { index });
    }
    Ok(ParamName((b'A' + index as u8) as char))
}

/// Names for the indices in `start..end`, ascending.
pub fn param_list(start: usize, end: usize) -> Result<Vec<ParamName>> {
    if start > end {
        return Err(Error::InvalidRange { start, end });
    }
    (start..end).map(param_name).collect()
}

/// `param_list` joined with `", "`. Empty range renders as `""`; callers own any
/// separator that would follow the list.
pub fn render_params(start: usize, end: usize) -> Result<String> {
    Ok(join_names(&param_list(start, end)?, ", "))
}

pub fn join_names(names: &[ParamName], sep: &str) -> String {
    names.iter().map(|n| n.to_string()).collect::<Vec<_>>().join(sep)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn first_three_params() {
        assert_eq!(render_params(0, 3).unwrap(), "A, B, C");
    }

    #[test]
    fn lower_variant() {
        let name = param_name(2).unwrap();
        assert_eq!(name.as_char(), 'C');
        assert_eq!(name.lower(), 'c');
    }

    #[test]
    fn last_letter_and_beyond() {
        assert_eq!(param_name(25).unwrap().as_char(), 'Z');
        assert_eq!(param_name(26), Err(Error::UnsupportedParameterCount { index: 26 }));
        assert_eq!(
            render_params(24, 27),
            Err(Error::UnsupportedParameterCount { index: 26 })
        );
    }

    #[test]
    fn reversed_range_is_rejected() {
        assert_eq!(param_list(3, 1), Err(Error::InvalidRange { start: 3, end: 1 }));
    }

    proptest! {
        #[test]
        fn empty_range_renders_empty(n in 0usize..=26) {
            prop_assert_eq!(render_params(n, n).unwrap(), "");
        }

        #[test]
        fn list_is_sized_and_ascending(start in 0usize..=26, len in 0usize..=26) {
            let end = (start + len).min(26);
            let names = param_list(start, end).unwrap();
            prop_assert_eq!(names.len(), end - start);
            prop_assert!(names.windows(2).all(|w| w[0].as_char() < w[1].as_char()));
        }

        #[test]
        fn naming_is_injective(a in 0usize..26, b in 0usize..26) {
            prop_assert_eq!(a == b, param_name(a).unwrap() == param_name(b).unwrap());
        }
    }
}
