//! Target labeling and display-name formatting.
//!
//! All labels derive deterministically from the target ids; there is no
//! hidden state behind any of them.

/// Strips the leading server digit from a world id and drops leading
/// zeros: `1034` becomes `"34"`, `1003` becomes `"3"`.
///
/// A single-digit id has nothing left after the server digit and falls
/// back to the full id string.
pub fn world_label(world_id: u32) -> String {
    let digits = world_id.to_string();
    match digits.get(1..).and_then(|rest| rest.parse::<u32>().ok()) {
        Some(n) => n.to_string(),
        None => digits,
    }
}

/// Home-group marker for a guild: the last three decimal digits of its id.
pub fn guild_home_group(guild_id: u64) -> u64 {
    guild_id % 1000
}

/// Region display name for a world, keyed on its leading server digit.
pub fn server_name(world_id: u32) -> &'static str {
    match world_id.to_string().as_bytes()[0] {
        b'1' => "JP",
        b'2' => "KR",
        b'3' => "Asia",
        b'4' => "NA",
        b'5' => "EU",
        b'6' => "Global",
        _ => "?",
    }
}

/// Skill class display name.
pub fn class_name(class: u8) -> &'static str {
    match class {
        1 => "Elite",
        2 => "Expert",
        3 => "Grand Master",
        _ => "?",
    }
}

/// Sub-block display name.
pub fn block_name(block: u8) -> &'static str {
    match block {
        0 => "A",
        1 => "B",
        2 => "C",
        3 => "D",
        _ => "?",
    }
}
