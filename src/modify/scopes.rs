use crate::interner::IStr;
use crate::model::SemanticModel;
use crate::qualified_id;
use crate::similarity::{lev_distance, max_allowed_distance};

/// Every package/namespace element's id, in model order (spec.md §4.F
/// "Scope listing & fuzzy-match helper").
pub fn list_scopes(model: &SemanticModel) -> Vec<IStr> {
    model.elements.iter().filter(|e| e.is_package()).map(|e| e.id.clone()).collect()
}

#[derive(Debug, Clone, Copy)]
enum Rank {
    Levenshtein(usize),
    PrefixOverlap,
    CaseInsensitiveLocal,
    ExactLocal,
}

/// Rank `scopes` against `target` and return the top `max` candidates,
/// best first (spec.md §4.F): exact local-name match beats a
/// case-insensitive local match, which beats a shared prefix, which beats
/// a bounded Levenshtein match. Scopes outside every tier are dropped.
pub fn find_similar_scopes(target: &str, scopes: &[IStr], max: usize) -> Vec<IStr> {
    let target_local = qualified_id::last_segment(target);
    let target_local_lower = target_local.to_lowercase();

    let mut ranked: Vec<(Rank, &IStr)> = scopes
        .iter()
        .filter(|id| id.as_ref() != target)
        .filter_map(|id| {
            let local = qualified_id::last_segment(id);
            if local == target_local {
                Some((Rank::ExactLocal, id))
            } else if local.to_lowercase() == target_local_lower {
                Some((Rank::CaseInsensitiveLocal, id))
            } else if local.starts_with(target_local) || target_local.starts_with(local) {
                Some((Rank::PrefixOverlap, id))
            } else {
                let distance = lev_distance(local, target_local);
                (distance <= max_allowed_distance(target_local)).then_some((Rank::Levenshtein(distance), id))
            }
        })
        .collect();

    // Levenshtein carries a numeric distance where lower is better, but
    // `Rank`'s derived ordering puts `Levenshtein` below the named tiers
    // regardless of its payload — sort by tier first, then invert distance
    // for ties within that tier.
    ranked.sort_by(|(rank_a, _), (rank_b, _)| {
        tier(rank_b).cmp(&tier(rank_a)).then_with(|| match (rank_a, rank_b) {
            (Rank::Levenshtein(a), Rank::Levenshtein(b)) => a.cmp(b),
            _ => std::cmp::Ordering::Equal,
        })
    });

    ranked.into_iter().take(max).map(|(_, id)| id.clone()).collect()
}

fn tier(rank: &Rank) -> u8 {
    match rank {
        Rank::Levenshtein(_) => 0,
        Rank::PrefixOverlap => 1,
        Rank::CaseInsensitiveLocal => 2,
        Rank::ExactLocal => 3,
    }
}
