//! Offset arithmetic for title-prefix paging.
//!
//! Offsets are zero-based row skips and always land on a page boundary once
//! they have been through [`clamp_offset`]. `page_size` must be non-zero.

/// Rows shown per page
pub const PAGE_SIZE: u64 = 10;

/// Start offset of the last non-empty page (0 for an empty result set)
pub fn last_page_start(total: u64, page_size: u64) -> u64 {
    if total == 0 {
        0
    } else {
        (total - 1) / page_size * page_size
    }
}

/// Round a requested offset down to a page boundary and clamp it into
/// `[0, last_page_start(total)]`.
pub fn clamp_offset(requested: i64, total: u64, page_size: u64) -> u64 {
    if requested <= 0 {
        return 0;
    }

    let aligned = requested as u64 / page_size * page_size;
    aligned.min(last_page_start(total, page_size))
}

pub fn previous_offset(offset: u64, page_size: u64) -> i64 {
    offset as i64 - page_size as i64
}

pub fn next_offset(offset: u64, page_size: u64) -> u64 {
    offset + page_size
}

pub fn has_previous(offset: u64) -> bool {
    offset != 0
}

/// Whether another page follows the one starting at `offset`.
///
/// Counts pages with `ceil`, so a trailing partial page is still reachable.
pub fn has_next(offset: u64, total: u64, page_size: u64) -> bool {
    total.div_ceil(page_size) > next_offset(offset, page_size) / page_size
}
