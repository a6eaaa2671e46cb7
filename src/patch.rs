/*!
 * Best-effort rewriting of the translated text.
 *
 * For each flag, every known non-preferred variant is replaced with the
 * preferred term. This is a heuristic textual rewrite, not guaranteed to be
 * semantically correct; the guards below only prevent mechanical corruption
 * (partial replacement inside a longer variant, doubled preferred terms).
 */

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

use crate::consistency::Flag;

static COUNT_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(\d+\)\s*$").unwrap());

/// Parse the legacy joined summary form.
///
/// `"无人机项目(2); 无人飞行器项目(3); 项目(2)"` becomes
/// `["无人机项目", "无人飞行器项目", "项目"]`.
pub fn parse_candidate_summary(s: &str) -> Vec<String> {
    s.split(';')
        .map(|chunk| chunk.trim())
        .filter(|chunk| !chunk.is_empty())
        .map(|chunk| COUNT_SUFFIX.replace(chunk, "").trim().to_string())
        .filter(|term| !term.is_empty())
        .collect()
}

/// Rewrite `zh_text`, replacing each flag's variants with its preferred term.
///
/// Flags are applied in the order given; callers must ensure preferred terms
/// of different flags do not collide, or later flags may re-touch earlier
/// replacements. A flag with neither structured candidates nor a parsable
/// summary contributes no replacements. The rewrite is idempotent.
pub fn patch_zh_text(zh_text: &str, flags: &[Flag]) -> String {
    let mut patched = zh_text.to_string();

    for flag in flags {
        let preferred = flag.preferred_zh.trim();
        if preferred.is_empty() {
            continue;
        }

        // Union both candidate representations: freshly computed flags carry
        // the structured list, deserialized legacy flags may carry only the
        // joined summary string.
        let mut variants: BTreeSet<String> = BTreeSet::new();
        if let Some(terms) = &flag.candidate_terms {
            variants.extend(terms.iter().map(|t| t.trim().to_string()));
        }
        if let Some(summary) = &flag.candidate_zh_terms {
            variants.extend(parse_candidate_summary(summary));
        }
        variants.remove("");

        // Longest first, so a short variant never clobbers the inside of a
        // longer one. The BTreeSet gives a stable secondary order.
        let mut ordered: Vec<String> = variants.into_iter().collect();
        ordered.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));

        for variant in &ordered {
            if variant == preferred {
                continue;
            }
            // Replacing "项目" inside "无人机项目" would corrupt the
            // preferred term itself
            if preferred.contains(variant.as_str()) {
                continue;
            }
            patched = patched.replace(variant.as_str(), preferred);
        }

        // Collapse accidental doubling when a variant sat adjacent to an
        // existing preferred occurrence
        let doubled = format!("{}{}", preferred, preferred);
        while patched.contains(&doubled) {
            patched = patched.replace(&doubled, preferred);
        }
    }

    patched
}
