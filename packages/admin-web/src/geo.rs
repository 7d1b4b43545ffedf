//! Region/commune selection helpers

use std::cmp::Ordering;

use crate::types::{Comuna, GeoUnit, Region};

/// Keep only entries of the given `tipo`.
pub fn retain_kind(units: Vec<GeoUnit>, kind: &str) -> Vec<GeoUnit> {
    units
        .into_iter()
        .filter(|u| u.kind.as_deref() == Some(kind))
        .collect()
}

/// Names of the communes belonging to a region, in Spanish alphabetical order.
///
/// A commune belongs to a region when the first two characters of its code
/// equal the region code left-padded with zeros to two characters.
pub fn communes_for_region(region_code: &str, communes: &[Comuna]) -> Vec<String> {
    let region_code = region_code.trim();
    if region_code.is_empty() {
        return Vec::new();
    }
    let prefix = format!("{:0>2}", region_code);

    let mut names: Vec<String> = communes
        .iter()
        .filter(|c| c.code.chars().take(2).collect::<String>() == prefix)
        .map(|c| c.name.clone())
        .filter(|name| !name.is_empty())
        .collect();

    names.sort_by(|a, b| spanish_cmp(a, b));
    names
}

pub fn region_name_for_code<'a>(code: &str, regions: &'a [Region]) -> Option<&'a str> {
    if code.is_empty() {
        return None;
    }
    regions
        .iter()
        .find(|r| r.code == code)
        .map(|r| r.name.as_str())
}

/// Find the code of a region stored by name.
///
/// Tries an exact case-insensitive match first, then a region whose name
/// contains the stored one, then a region whose name is contained in it.
pub fn region_code_for_name(name: &str, regions: &[Region]) -> Option<String> {
    let wanted = name.trim().to_lowercase();
    if wanted.is_empty() {
        return None;
    }

    let lowered: Vec<(String, &Region)> = regions
        .iter()
        .map(|r| (r.name.trim().to_lowercase(), r))
        .collect();

    lowered
        .iter()
        .find(|(n, _)| *n == wanted)
        .or_else(|| lowered.iter().find(|(n, _)| n.contains(&wanted)))
        .or_else(|| lowered.iter().find(|(n, _)| !n.is_empty() && wanted.contains(n.as_str())))
        .map(|(_, r)| r.code.clone())
}

/// Accent-insensitive ordering with `ñ` sorting after `n`.
pub fn spanish_cmp(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

fn collation_key(s: &str) -> String {
    let mut key = String::with_capacity(s.len());
    for c in s.chars().flat_map(char::to_lowercase) {
        match c {
            'á' | 'à' | 'ä' | 'â' => key.push('a'),
            'é' | 'è' | 'ë' | 'ê' => key.push('e'),
            'í' | 'ì' | 'ï' | 'î' => key.push('i'),
            'ó' | 'ò' | 'ö' | 'ô' => key.push('o'),
            'ú' | 'ù' | 'ü' | 'û' => key.push('u'),
            'ñ' => key.push_str("n~"),
            other => key.push(other),
        }
    }
    key
}
