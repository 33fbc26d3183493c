use std::ops::Range;

use crate::error::{Error, Result, MAX_PARAM_INDEX};
use crate::ir::{GeneratorKind, Plan, Signature};

/// Largest accepted max arity: the last emitted arity is `max - 1`, whose last
/// parameter index is `max - 2`, which still has to be a letter.
pub const MAX_ARITY: usize = MAX_PARAM_INDEX + 2;

pub fn check_max_arity(max_arity: usize) -> Result<()> {
    if max_arity > MAX_ARITY {
        return Err(Error::InvalidArity { max_arity, limit: MAX_ARITY });
    }
    Ok(())
}

/// Arities generated for a run, ascending. `max_arity` itself is excluded.
pub fn arities(max_arity: usize) -> Range<usize> {
    0..max_arity
}

/// Pre-bound argument counts for one arity, in generation order: `perm` counts up
/// from zero and `n = arity - perm`, so this runs `arity, arity - 1, ..., 1`.
pub fn split_points(arity: usize) -> impl DoubleEndedIterator<Item = usize> + ExactSizeIterator {
    (0..arity).map(move |perm| arity - perm)
}

/// Number of partial-application members for a run: `0 + 1 + ... + (max - 1)`.
pub fn member_count(max_arity: usize) -> usize {
    max_arity * max_arity.saturating_sub(1) / 2
}

pub fn plan(generator: GeneratorKind, max_arity: usize) -> Result<Plan> {
    check_max_arity(max_arity)?;
    let entries = match generator {
        GeneratorKind::Partial => {
            let mut out = Vec::with_capacity(member_count(max_arity));
            for arity in arities(max_arity) {
                let mut group = split_points(arity)
                    .map(|bound| Signature::PartialMember { arity, bound })
                    .collect::<Vec<_>>();
                // generated descending; emitted with the fewest pre-bound args first
                group.reverse();
                out.extend(group);
            }
            out
        }
        GeneratorKind::Complement => arities(max_arity)
            .map(|arity| Signature::ComplementDecl { arity })
            .collect(),
        GeneratorKind::ComplementTests => arities(max_arity)
            .enumerate()
            .map(|(index, arity)| Signature::ComplementTest { index, arity })
            .collect(),
    };
    tracing::debug!(?generator, max_arity, entries = entries.len(), "planned fragments");
    Ok(Plan { generator, max_arity, entries })
}
