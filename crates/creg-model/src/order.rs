//! The ordering pass.

use crate::record::ProjectRecord;

/// Stable ascending sort on credits issued.
///
/// Records with equal issued counts keep their input order; there is no
/// secondary key.
pub fn sort_by_issued(records: &mut [ProjectRecord]) {
    records.sort_by_key(|record| record.issued);
}
