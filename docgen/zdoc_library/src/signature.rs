//! Signature matching for overload deduplication and inheritance lookup.
//!
//! Two signatures match when they share a name and arity and every slot
//! (return type, then each parameter) is textually equal or has a wildcard
//! `any` as the first token on either side.

use zdoc_ir::TokenSequence;

/// Borrowed view of a method declaration.
#[derive(Clone, Debug)]
pub struct MethodSignature<'a> {
    pub name: &'a str,
    pub parameters: Vec<&'a TokenSequence>,
    pub return_type: &'a TokenSequence,
}

/// Which side of a match carried a wildcard on a slot that differed.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct SignatureMatch {
    pub lhs_wildcard: bool,
    pub rhs_wildcard: bool,
}

/// The side of a match whose types are kept.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Side {
    Lhs,
    Rhs,
}

impl SignatureMatch {
    /// `true` when the sides were equal slot for slot.
    pub fn is_exact(self) -> bool {
        !self.lhs_wildcard && !self.rhs_wildcard
    }

    /// The concrete side replaces a wildcard-only `lhs`; in every other case
    /// the left, earlier-seen side stays canonical.
    pub fn canonical(self) -> Side {
        if self.lhs_wildcard && !self.rhs_wildcard {
            Side::Rhs
        } else {
            Side::Lhs
        }
    }
}

/// Compare two signatures. `lhs` is the earlier-seen declaration.
pub fn match_signatures(lhs: &MethodSignature<'_>, rhs: &MethodSignature<'_>) -> Option<SignatureMatch> {
    if lhs.name != rhs.name || lhs.parameters.len() != rhs.parameters.len() {
        return None;
    }
    let mut verdict = SignatureMatch::default();
    verdict.slot(lhs.return_type, rhs.return_type)?;
    for (a, b) in lhs.parameters.iter().zip(&rhs.parameters) {
        verdict.slot(a, b)?;
    }
    Some(verdict)
}

impl SignatureMatch {
    fn slot(&mut self, lhs: &TokenSequence, rhs: &TokenSequence) -> Option<()> {
        if lhs.text_eq(rhs) {
            return Some(());
        }
        let lhs_any = starts_with_wildcard(lhs);
        let rhs_any = starts_with_wildcard(rhs);
        if !lhs_any && !rhs_any {
            return None;
        }
        self.lhs_wildcard |= lhs_any;
        self.rhs_wildcard |= rhs_any;
        Some(())
    }
}

fn starts_with_wildcard(tokens: &TokenSequence) -> bool {
    tokens.first().is_some_and(zdoc_ir::Token::is_wildcard)
}
