//! Per-import cycle search.
//!
//! Given an import `A --(kind, subject)--> B`, the search asks whether
//! serving `subject` from `B` can depend, transitively and through imports
//! of the same kind, on `A` itself.
//!
//! At each account `X` reached while tracking subject `s`, every import `J`
//! of `X` with the same kind is followed when the subject `J` makes visible
//! inside `X` (its alias, or its subject when not renamed) overlaps `s`. The
//! next hop tracks what `X` requests from `J`'s source:
//!
//! - a renamed import tracks `J`'s own subject, since any traffic on the
//!   alias maps onto it
//! - an import that is not renamed tracks the intersection of `J`'s subject
//!   and `s`, since only that part of `J` can carry the traffic in question
//!
//! Narrowing keeps a wildcard import from widening the search past what the
//! checked import asked for. Without it, `B` importing `nohelp` from `C`,
//! `C` importing `*` from `A` and `A` importing `help` from `B` would look
//! like a loop, although no single subject travels all the way round.
//!
//! Each `(account, tracked subject)` pair is expanded at most once per
//! search, so the verdict does not depend on the order imports are listed
//! in. Tracked subjects are always built from tokens already present in the
//! model, which bounds the search. Loops among other accounts that never
//! lead back to `A` are cut off here; they are caught when the imports that
//! form them are checked in turn.

use crate::report::{CyclePath, Hop};
use std::collections::HashSet;
use tollgate_account::{AccountModel, Kind};
use tollgate_core::AccountId;
use tollgate_subject::Subject;

/// Decide whether `importer` importing `subject` of `kind` from `source`
/// closes a loop back to `importer`.
///
/// Returns the path walked to the first loop found, or `None` when the
/// import is safe. The model is only read; the visited set lives for this
/// call alone.
///
/// # Examples
///
/// ```
/// use tollgate_account::{AccountModel, Export, Import, Kind};
/// use tollgate_core::AccountId;
/// use tollgate_cycle::forms_cycle;
/// use tollgate_subject::Subject;
///
/// let help = Subject::parse("help").unwrap();
/// let (a, b) = (AccountId::new("A"), AccountId::new("B"));
///
/// let mut model = AccountModel::new();
/// model.add_account(a.clone()).unwrap();
/// model.add_account(b.clone()).unwrap();
/// model.add_import(&b, Import::service(help.clone(), "A")).unwrap();
///
/// let path = forms_cycle(&model, &a, Kind::Service, &help, &b).unwrap();
/// assert_eq!(path.to_string(), "A:help -> B:help -> A");
/// ```
pub fn forms_cycle(
    model: &AccountModel,
    importer: &AccountId,
    kind: Kind,
    subject: &Subject,
    source: &AccountId,
) -> Option<CyclePath> {
    let mut search = Search {
        model,
        origin: importer,
        kind,
        visited: HashSet::new(),
        hops: vec![Hop::new(importer.clone(), subject.clone())],
    };

    if search.visit(source, subject.clone()) {
        Some(CyclePath::new(search.hops))
    } else {
        None
    }
}

struct Search<'a> {
    model: &'a AccountModel,
    origin: &'a AccountId,
    kind: Kind,
    visited: HashSet<(&'a AccountId, Subject)>,
    hops: Vec<Hop>,
}

impl<'a> Search<'a> {
    fn visit(&mut self, account: &'a AccountId, tracked: Subject) -> bool {
        if account == self.origin {
            return true;
        }
        if !self.visited.insert((account, tracked.clone())) {
            return false;
        }

        let model = self.model;
        let Some(node) = model.get(account) else {
            log::warn!("Cycle search reached unknown account '{account}', treating as dead end");
            return false;
        };

        for import in node.imports_of(self.kind) {
            if !import.local_subject().overlaps(&tracked) {
                continue;
            }
            let next = if import.is_renamed() {
                import.subject.clone()
            } else {
                let Some(narrowed) = import.subject.intersection(&tracked) else {
                    continue;
                };
                narrowed
            };
            log::trace!(
                "Following {} import '{}' of '{}' from '{}' (tracking '{}')",
                self.kind,
                import.subject,
                account,
                import.account,
                tracked
            );
            self.hops.push(Hop::new(account.clone(), import.subject.clone()));
            if self.visit(&import.account, next) {
                return true;
            }
            self.hops.pop();
        }

        false
    }
}
