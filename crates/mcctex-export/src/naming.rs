//! Output file naming.

use std::collections::HashSet;

use mcctex_pack::ResolvedTexture;

/// Characters that cannot appear in a file name on common platforms.
const RESERVED: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// File stem for a texture name, with reserved characters replaced.
fn sanitize(name: &str, name_hash: u32) -> String {
    if name.is_empty() {
        return format!("{:08X}", name_hash);
    }
    name.chars()
        .map(|c| if RESERVED.contains(&c) || c.is_control() { '_' } else { c })
        .collect()
}

/// Compute output file stems for `textures`, in order.
///
/// The first texture with a given name (ignoring case) keeps it; later ones
/// get the stored name hash appended as `name_XXXXXXXX`. Equal names carry
/// equal hashes, so further clashes add a counter: `name_XXXXXXXX_2`, `_3`.
/// Every returned stem is unique ignoring case.
pub fn output_stems(textures: &[ResolvedTexture]) -> Vec<String> {
    let mut used = HashSet::with_capacity(textures.len());

    textures
        .iter()
        .map(|texture| {
            let stem = sanitize(&texture.name, texture.name_hash);
            if used.insert(stem.to_lowercase()) {
                return stem;
            }

            let hashed = format!("{}_{:08X}", stem, texture.name_hash);
            if used.insert(hashed.to_lowercase()) {
                return hashed;
            }

            let mut counter = 2u32;
            loop {
                let candidate = format!("{}_{}", hashed, counter);
                if used.insert(candidate.to_lowercase()) {
                    return candidate;
                }
                counter += 1;
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::texture;

    #[test]
    fn test_unique_names_unchanged() {
        let textures = [texture("a", 1, vec![]), texture("b", 2, vec![])];
        assert_eq!(output_stems(&textures), vec!["a", "b"]);
    }

    #[test]
    fn test_duplicates_get_hash_suffix() {
        let textures = [
            texture("Reticle", 0x1, vec![]),
            texture("reticle", 0xABCDEF, vec![]),
            texture("RETICLE", 0xDEADBEEF, vec![]),
        ];
        assert_eq!(
            output_stems(&textures),
            vec!["Reticle", "reticle_00ABCDEF", "RETICLE_DEADBEEF"]
        );
    }

    #[test]
    fn test_repeated_name_and_hash_stay_unique() {
        let textures = [
            texture("dup", 0x12345678, vec![]),
            texture("dup", 0x12345678, vec![]),
            texture("dup", 0x12345678, vec![]),
            texture("DUP", 0x12345678, vec![]),
        ];
        assert_eq!(
            output_stems(&textures),
            vec!["dup", "dup_12345678", "dup_12345678_2", "DUP_12345678_3"]
        );
    }

    #[test]
    fn test_suffixed_stem_is_reserved() {
        // A real texture already named like a disambiguated stem
        let textures = [
            texture("a_0000002B", 7, vec![]),
            texture("a", 0x2B, vec![]),
            texture("a", 0x2B, vec![]),
        ];
        assert_eq!(
            output_stems(&textures),
            vec!["a_0000002B", "a", "a_0000002B_2"]
        );
    }

    #[test]
    fn test_reserved_characters_replaced() {
        let textures = [texture("ui/hud:main", 1, vec![]), texture("", 0x42, vec![])];
        assert_eq!(output_stems(&textures), vec!["ui_hud_main", "00000042"]);
    }
}
