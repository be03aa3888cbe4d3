//! Dot-insertion variant generator.
//!
//! A local-part of `n` characters has `n - 1` gaps. Every subset of gaps, filled
//! with `.`, is a distinct rendition that dot-insensitive providers (Gmail) route
//! to the same mailbox. Subsets are enumerated as an integer mask where bit `i`
//! selects the gap after character `i`.

/// Default result cap for the dot scheme.
pub const DEFAULT_DOT_LIMIT: usize = 500;

/// Lazy enumeration of dotted renditions of a local-part.
///
/// Yields full addresses (`variant@domain`) in ascending mask order, so the
/// unmodified local-part always comes first. Nothing is materialized ahead of
/// the consumer, which lets callers cap the exponential space with
/// [`Iterator::take`].
#[derive(Debug, Clone)]
pub struct DotVariants<'a> {
    chars: Vec<char>,
    domain: &'a str,
    /// Next mask to render.
    mask: u64,
    /// Number of masks in the space, `None` when it does not fit in a `u64`.
    space: Option<u64>,
    /// Set once the iterator has nothing left to yield.
    done: bool,
    /// Local-parts that cannot be expanded yield themselves exactly once.
    passthrough: bool,
}

impl<'a> DotVariants<'a> {
    /// Create an enumeration for `local_part@domain`.
    ///
    /// A local-part shorter than two characters, or one that already contains
    /// a `.`, is treated as final and produces a single address.
    #[must_use]
    pub fn new(local_part: &str, domain: &'a str) -> Self {
        let chars: Vec<char> = local_part.chars().collect();
        let passthrough = chars.len() < 2 || chars.contains(&'.');
        let gaps = chars.len().saturating_sub(1);
        let space = u32::try_from(gaps)
            .ok()
            .and_then(|gaps| 1u64.checked_shl(gaps));

        Self {
            chars,
            domain,
            mask: 0,
            space,
            done: false,
            passthrough,
        }
    }

    /// Size of the full variant space, if it fits in a `u64`.
    ///
    /// Pass-through local-parts report a space of one.
    #[must_use]
    pub const fn space(&self) -> Option<u64> {
        if self.passthrough {
            Some(1)
        } else {
            self.space
        }
    }

    fn render(&self, mask: u64) -> String {
        let last = self.chars.len() - 1;
        let mut out = String::with_capacity(self.chars.len() * 2 + 1 + self.domain.len());

        for (i, c) in self.chars.iter().enumerate() {
            out.push(*c);
            if i < last && i < 64 && (mask >> i) & 1 == 1 {
                out.push('.');
            }
        }

        out.push('@');
        out.push_str(self.domain);
        out
    }
}

impl Iterator for DotVariants<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        if self.passthrough {
            self.done = true;
            let local: String = self.chars.iter().collect();
            return Some(format!("{local}@{}", self.domain));
        }

        if self.space.is_some_and(|space| self.mask >= space) {
            self.done = true;
            return None;
        }

        let variant = self.render(self.mask);
        match self.mask.checked_add(1) {
            Some(next) => self.mask = next,
            None => self.done = true,
        }
        Some(variant)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        if self.passthrough {
            return (1, Some(1));
        }
        match self
            .space
            .and_then(|space| usize::try_from(space - self.mask).ok())
        {
            Some(remaining) => (remaining, Some(remaining)),
            None => (usize::MAX, None),
        }
    }
}

/// Generate up to `limit` dotted variants of `local_part@domain`.
///
/// Enumeration stops as soon as `limit` addresses have been produced or the
/// mask space is exhausted. A local-part shorter than two characters, or one
/// already containing a `.`, is returned unmodified as the only element.
#[must_use]
pub fn generate_dot_variants(local_part: &str, domain: &str, limit: usize) -> Vec<String> {
    let variants = DotVariants::new(local_part, domain);
    if variants.passthrough {
        return variants.collect();
    }
    variants.take(limit).collect()
}
