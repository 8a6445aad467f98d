//! Series colors

pub const DEFAULT_PALETTE: [&str; 10] = [
    "#4f46e5", "#16a34a", "#ea580c", "#0891b2", "#db2777", "#ca8a04", "#7c3aed", "#dc2626",
    "#0d9488", "#64748b",
];

/// Palette color for the n-th series; wraps around after the last one
pub fn palette_color(index: usize) -> &'static str {
    DEFAULT_PALETTE[index % DEFAULT_PALETTE.len()]
}

/// 32-bit FNV-1a
fn fnv1a(key: &str) -> u32 {
    let mut hash: u32 = 0x811c_9dc5;
    for byte in key.bytes() {
        hash ^= u32::from(byte);
        hash = hash.wrapping_mul(0x0100_0193);
    }
    hash
}

/// Stable color for a key without an explicit mapping
pub fn hash_color(key: &str) -> String {
    format!("hsl({}, 65%, 55%)", fnv1a(key) % 360)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_cycles() {
        assert_eq!(palette_color(0), palette_color(DEFAULT_PALETTE.len()));
        assert_ne!(palette_color(0), palette_color(1));
    }

    #[test]
    fn test_fnv1a_reference_values() {
        assert_eq!(fnv1a(""), 0x811c_9dc5);
        assert_eq!(fnv1a("a"), 0xe40c_292c);
    }

    #[test]
    fn test_hash_color_is_stable() {
        assert_eq!(hash_color("Alice"), hash_color("Alice"));
        assert!(hash_color("Alice").starts_with("hsl("));
        assert!(hash_color("Alice").ends_with(", 65%, 55%)"));
    }
}
