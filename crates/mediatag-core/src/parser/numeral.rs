//! # Chinese Numeral Parser
//!
//! Converts season/episode numerals such as `12`, `三` or `二十一` to
//! integers. The scan keeps one running total: digits add to it and units
//! multiply all of it. That is exact for a digit followed by one unit
//! (`二十` = 20, `二十一` = 21) but cumulative for longer numerals
//! (`一百二十三` = ((1 × 100) + 2) × 10 + 3 = 1023).

/// Value of a digit character (formal and informal forms).
fn digit_value(c: char) -> Option<u32> {
    let value = match c {
        '〇' | '零' => 0,
        '一' | '壹' => 1,
        '二' | '贰' => 2,
        '三' | '叁' => 3,
        '四' | '肆' => 4,
        '五' | '伍' => 5,
        '六' | '陆' => 6,
        '七' | '柒' => 7,
        '八' | '捌' => 8,
        '九' | '玖' => 9,
        _ => return None,
    };
    Some(value)
}

/// Value of a unit character.
fn unit_value(c: char) -> Option<u32> {
    let value = match c {
        '十' | '拾' => 10,
        '百' | '佰' => 100,
        '千' | '仟' => 1_000,
        '万' | '萬' => 10_000,
        '亿' | '億' => 100_000_000,
        _ => return None,
    };
    Some(value)
}

/// Parses an ASCII decimal string or a run of Chinese numeral characters.
///
/// Returns `None` on any unrecognized character or on overflow. A leading
/// unit counts as one of that unit (`十` = 10, `十二` = 12), while an explicit
/// zero stays zero (`零十` = 0).
///
/// A plain running-total scan would read a leading unit as zero times the
/// unit, giving `十二` = 2 and `第十二集` = episode 2; this parser does not.
#[must_use]
pub fn parse_chinese_number(input: &str) -> Option<u32> {
    if let Ok(n) = input.parse::<u32>() {
        return Some(n);
    }

    let mut total: u32 = 0;
    for (i, c) in input.chars().enumerate() {
        if let Some(digit) = digit_value(c) {
            total = total.checked_add(digit)?;
        } else if let Some(unit) = unit_value(c) {
            total = if i == 0 { unit } else { total.checked_mul(unit)? };
        } else {
            return None;
        }
    }
    Some(total)
}
