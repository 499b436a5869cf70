//! Collapse declarations sharing an identity key.

use indexmap::IndexMap;
use tracing::debug;
use typeshape_ir::Declaration;

/// Drop every declaration whose identity key occurs again later.
///
/// Input is in emission order. For each key seen `n > 1` times the first
/// `n - 1` occurrences are removed, so the last-emitted one survives.
/// Field contents are not compared. Survivors keep their relative order.
pub fn dedup(declarations: Vec<Declaration>) -> Vec<Declaration> {
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for declaration in &declarations {
        *counts.entry(declaration.identity_key()).or_default() += 1;
    }

    let mut removable: IndexMap<String, usize> = counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(key, count)| (key, count - 1))
        .collect();

    if removable.is_empty() {
        return declarations;
    }

    declarations
        .into_iter()
        .filter(|declaration| {
            let key = declaration.identity_key();
            match removable.get_mut(&key) {
                Some(remaining) if *remaining > 0 => {
                    *remaining -= 1;
                    debug!(name = %key, kind = declaration.kind(), "drop duplicate declaration");
                    false
                }
                _ => true,
            }
        })
        .collect()
}
