//! Built-in compressed class tables.
//!
//! The small classes every consumer wants (control characters, surrogates,
//! whitespace in its several flavors) ship with the crate as compressed
//! literals and decode on first use. Horizontal and Vertical are not real
//! Unicode categories: Zs omits tab while Zl/Zp omit newline and carriage
//! return, so the practical whitespace classes include those characters,
//! and Space fuses the two. Large tables (letters, case folding) are the
//! data provider's concern, not the crate's.

use std::sync::OnceLock;

use crate::category::Category;

fn decode(dictionary: &[u32], symbols: &str) -> Category {
    Category::decode_str(dictionary, symbols).expect("built-in class table is well-formed")
}

/// Control characters; Unicode category Cc.
pub fn control() -> &'static Category {
    static CELL: OnceLock<Category> = OnceLock::new();
    CELL.get_or_init(|| decode(&[0, 31, 32, 96], " !#\""))
}

/// Surrogates; Unicode category Cs.
pub fn surrogate() -> &'static Category {
    static CELL: OnceLock<Category> = OnceLock::new();
    CELL.get_or_init(|| decode(&[2047, 55296], "! "))
}

/// Private-use characters; Unicode category Co. The supplementary private
/// use planes lie past U+FFFF, so this table carries a truncation sentinel
/// and only the BMP block remains.
pub fn private_use() -> &'static Category {
    static CELL: OnceLock<Category> = OnceLock::new();
    CELL.get_or_init(|| decode(&[1792, 6399, 57344], "\"! "))
}

/// Space separators; Unicode category Zs.
pub fn space_separator() -> &'static Category {
    static CELL: OnceLock<Category> = OnceLock::new();
    CELL.get_or_init(|| decode(&[0, 10, 32, 37, 48, 128, 2432, 4001, 5600], "\" % ( &!# $ ' "))
}

/// The line separator; Unicode category Zl.
pub fn line_separator() -> &'static Category {
    static CELL: OnceLock<Category> = OnceLock::new();
    CELL.get_or_init(|| decode(&[0, 8232], "! "))
}

/// The paragraph separator; Unicode category Zp.
pub fn paragraph_separator() -> &'static Category {
    static CELL: OnceLock<Category> = OnceLock::new();
    CELL.get_or_init(|| decode(&[0, 8233], "! "))
}

/// Horizontal whitespace: Zs plus horizontal tab.
pub fn horizontal_space() -> &'static Category {
    static CELL: OnceLock<Category> = OnceLock::new();
    CELL.get_or_init(|| {
        decode(
            &[0, 9, 10, 23, 37, 48, 128, 2432, 4001, 5600],
            "! # & ) '\"$ % ( ",
        )
    })
}

/// Vertical whitespace: newline through carriage return, NEL, and the
/// line/paragraph separators.
pub fn vertical_space() -> &'static Category {
    static CELL: OnceLock<Category> = OnceLock::new();
    CELL.get_or_init(|| decode(&[0, 1, 3, 10, 120, 8099], "#\"$ %!"))
}

/// All whitespace: the fusion of horizontal and vertical.
pub fn space() -> &'static Category {
    static CELL: OnceLock<Category> = OnceLock::new();
    CELL.get_or_init(|| {
        decode(
            &[0, 1, 4, 6, 9, 10, 19, 27, 30, 48, 101, 2432, 4001, 5600],
            "$\"& * ' - +%(!# ) , ",
        )
    })
}

/// Look up a built-in class by category name or alias.
pub fn lookup(name: &str) -> Option<&'static Category> {
    match name {
        "Cc" => Some(control()),
        "Cs" => Some(surrogate()),
        "Co" => Some(private_use()),
        "Zs" => Some(space_separator()),
        "Zl" => Some(line_separator()),
        "Zp" => Some(paragraph_separator()),
        "Zh" | "Gh" | "Horizontal" => Some(horizontal_space()),
        "Zv" | "Gv" | "Vertical" => Some(vertical_space()),
        "G" | "Space" => Some(space()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control() {
        let cc = control();
        assert_eq!(
            cc.ranges().collect::<Vec<_>>(),
            vec![(0, 31), (127, 159)]
        );
        assert_eq!(cc.len(), 65);
        assert!(cc.contains(0));
        assert!(cc.contains(0x1F));
        assert!(!cc.contains(b' ' as u32));
        assert!(cc.contains(0x7F));
        assert!(!cc.contains(0xA0));
    }

    #[test]
    fn test_surrogate() {
        let cs = surrogate();
        assert_eq!(cs.ranges().collect::<Vec<_>>(), vec![(0xD800, 0xDFFF)]);
        assert_eq!(cs.len(), 2048);
    }

    #[test]
    fn test_private_use_keeps_only_the_bmp_block() {
        let co = private_use();
        assert_eq!(co.ranges().collect::<Vec<_>>(), vec![(0xE000, 0xF8FF)]);
        assert_eq!(co.len(), 6400);
        // The dangling sentinel from the dropped supplementary planes must
        // not surface as a member.
        assert!(!co.contains(0xFFFF));
        assert!(!co.contains(0xF0000));
    }

    #[test]
    fn test_space_separator() {
        let zs = space_separator();
        let expected: Vec<u32> = [32, 160, 5760]
            .into_iter()
            .chain(8192..=8202)
            .chain([8239, 8287, 12288])
            .collect();
        assert_eq!(zs.iter().collect::<Vec<u32>>(), expected);
        assert_eq!(zs.len(), 17);
        assert!(!zs.contains(9));
    }

    #[test]
    fn test_line_and_paragraph_separators() {
        assert_eq!(
            line_separator().iter().collect::<Vec<u32>>(),
            vec![0x2028]
        );
        assert_eq!(
            paragraph_separator().iter().collect::<Vec<u32>>(),
            vec![0x2029]
        );
    }

    #[test]
    fn test_horizontal_includes_tab() {
        let zh = horizontal_space();
        assert!(zh.contains(9));
        assert!(zh.contains(b' ' as u32));
        assert!(zh.contains(0x3000));
        assert!(!zh.contains(10));
        assert_eq!(zh.len(), 18);
    }

    #[test]
    fn test_vertical_members() {
        assert_eq!(
            vertical_space().iter().collect::<Vec<u32>>(),
            vec![10, 11, 12, 13, 133, 8232, 8233]
        );
    }

    #[test]
    fn test_space_is_the_fusion() {
        let fused = space();
        assert_eq!(
            fused.len(),
            horizontal_space().len() + vertical_space().len()
        );
        for cp in horizontal_space().iter().chain(vertical_space().iter()) {
            assert!(fused.contains(cp), "space is missing {}", cp);
        }
    }

    #[test]
    fn test_lookup_names_and_aliases() {
        assert!(std::ptr::eq(lookup("Cc").unwrap(), control()));
        assert!(std::ptr::eq(lookup("Zh").unwrap(), horizontal_space()));
        assert!(std::ptr::eq(lookup("Gv").unwrap(), vertical_space()));
        assert!(std::ptr::eq(lookup("G").unwrap(), space()));
        assert!(std::ptr::eq(lookup("Space").unwrap(), space()));
        assert!(lookup("Xx").is_none());
        assert!(lookup("").is_none());
    }
}
