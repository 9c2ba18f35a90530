// src/grouper.rs
//! Partitions declarations into exact duplicate groups by fingerprint, and
//! optionally emits fuzzy groups for bucket pairs whose representatives
//! score at or above the threshold.

use crate::decl::{Declaration, DuplicateGroup};
use crate::fingerprint::Fingerprint;
use crate::similarity;
use std::collections::HashMap;

/// Groups declarations by exact fingerprint match and, when
/// `threshold < 1`, by structural similarity between bucket
/// representatives.
///
/// Buckets are kept in first-seen order, so both group order and the
/// representative chosen for the fuzzy pass are deterministic from input
/// order. Fuzzy groups contain all members of both buckets and may
/// overlap; a declaration can appear in several of them. Singleton
/// buckets with no fuzzy partner produce nothing.
#[must_use]
pub fn group(decls: &[Declaration], threshold: f64) -> Vec<DuplicateGroup> {
    let buckets = bucket_by_fingerprint(decls);

    let mut groups = Vec::new();

    // Exact matches: same fingerprint => similarity 1
    for bucket in &buckets {
        if bucket.decls.len() > 1 {
            groups.push(DuplicateGroup {
                similarity: 1.0,
                decls: bucket.decls.clone(),
            });
        }
    }

    // Fuzzy matches: compare one representative per distinct shape.
    // Members of a bucket are already identical, so this keeps the pass
    // quadratic in distinct shapes rather than raw declarations without
    // losing any cross-bucket pair (the score depends only on canonical
    // text, which is constant within a bucket).
    if threshold < 1.0 {
        for i in 0..buckets.len() {
            for j in (i + 1)..buckets.len() {
                let sim =
                    similarity::text_similarity(&buckets[i].canonical, &buckets[j].canonical);
                if sim >= threshold && sim < 1.0 {
                    let mut decls = buckets[i].decls.clone();
                    decls.extend(buckets[j].decls.clone());
                    groups.push(DuplicateGroup {
                        similarity: sim,
                        decls,
                    });
                }
            }
        }
    }

    groups
}

struct Bucket {
    canonical: String,
    decls: Vec<Declaration>,
}

fn bucket_by_fingerprint(decls: &[Declaration]) -> Vec<Bucket> {
    let mut index: HashMap<Fingerprint, usize> = HashMap::new();
    let mut buckets: Vec<Bucket> = Vec::new();

    for d in decls {
        let canonical = crate::shape::canonical_text(&d.shape);
        let fp = Fingerprint::of_text(&canonical);
        match index.get(&fp) {
            Some(&i) => buckets[i].decls.push(d.clone()),
            None => {
                index.insert(fp, buckets.len());
                buckets.push(Bucket {
                    canonical,
                    decls: vec![d.clone()],
                });
            }
        }
    }

    buckets
}
