//! # Standard Rule Tables
//!
//! The tag vocabulary recognized by the standard pipeline. Word boundaries
//! are ASCII-only (`(?-u:\b)`) so that CJK text next to a Latin token, as in
//! `中文CHS`, still counts as a boundary.

use super::group::GroupRule;
use super::rule::Rule;
use crate::error::Result;

/// Name of the resolution group.
pub const RESOLUTION: &str = "resolution";
/// Name of the quality/source-type group.
pub const QUALITY: &str = "quality";
/// Name of the video codec group.
pub const VIDEO_CODEC: &str = "video_codec";
/// Name of the audio codec group.
pub const AUDIO_CODEC: &str = "audio_codec";
/// Name of the subtitle language group.
pub const SUBTITLE: &str = "subtitle";
/// Name of the release info group.
pub const INFO: &str = "info";
/// Name of the streaming source group.
pub const SOURCE: &str = "source";
/// Name of the release group group.
pub const GROUP: &str = "group";

/// Builds the standard groups in pipeline order.
///
/// # Errors
///
/// Returns `MediatagError::RegexError` if a pattern fails to compile.
pub fn standard_groups() -> Result<Vec<GroupRule>> {
    Ok(vec![
        resolution()?,
        quality()?,
        video_codec()?,
        audio_codec()?,
        subtitle()?.continue_after_match(true).use_raw_text(true),
        info()?.continue_after_match(true),
        source()?,
        group()?,
    ])
}

fn resolution() -> Result<GroupRule> {
    Ok(GroupRule::new(
        RESOLUTION,
        vec![
            Rule::label(r"(?i)2160p|4k", "4K")?,
            Rule::label(r"(?i)1080p|1920.1080", "1080P")?,
            Rule::label(r"(?i)1080i", "1080i")?,
            Rule::label(r"(?i)720p|1280.720", "720P")?,
            Rule::label(r"(?i)576p|[0-9]+.576", "576P")?,
        ],
    ))
}

fn quality() -> Result<GroupRule> {
    Ok(GroupRule::new(
        QUALITY,
        vec![
            Rule::label(r"(?i)((?-u:\b)|_)(webrip|web.?dl|web)((?-u:\b)|_)", "Web")?,
            Rule::label(r"(?i)((?-u:\b)|_)(hdtvrip|hdtv)((?-u:\b)|_)", "HDTV")?,
            Rule::label(r"(?i)((?-u:\b)|_)(tvrip)((?-u:\b)|_)", "TVRip")?,
            Rule::label(r"(?i)((?-u:\b)|_)(bdrip|blu-?ray)((?-u:\b)|_)", "BluRay")?,
        ],
    ))
}

fn video_codec() -> Result<GroupRule> {
    Ok(GroupRule::new(
        VIDEO_CODEC,
        vec![
            Rule::label(r"(?i)((?-u:\b)|_)avc((?-u:\b)|_)|[xh].?264", "H264")?,
            Rule::label(r"(?i)((?-u:\b)|_)hevc((?-u:\b)|_)|[xh].?265", "H265")?,
        ],
    ))
}

fn audio_codec() -> Result<GroupRule> {
    Ok(GroupRule::new(
        AUDIO_CODEC,
        vec![
            Rule::label(r"(?i)((?-u:\b)|_)aac((?-u:\b)|_)", "AAC")?,
            Rule::label(r"(?i)((?-u:\b)|_)ddp2(.[0-9])?((?-u:\b)|_)", "DDP2.0")?,
            Rule::label(r"(?i)((?-u:\b)|_)ddp5(.[0-9])?((?-u:\b)|_)", "DDP5.1")?,
            Rule::label(r"(?i)((?-u:\b)|_)flac((?-u:\b)|_)", "FLAC")?,
        ],
    ))
}

fn subtitle() -> Result<GroupRule> {
    Ok(GroupRule::new(
        SUBTITLE,
        vec![
            Rule::label(
                r"(?i)((?-u:\b)|_)(chi|chs|gb)((?-u:\b)|_)|[中简][^\t\n\f\r ]*?((双语|外挂)(字幕)?|(双语|外挂)?(字幕))|简体|简繁",
                "简体中文字幕",
            )?,
            Rule::label(
                r"(?i)((?-u:\b)|_)(big5|cht)((?-u:\b)|_)|[繁][^\t\n\f\r ]*?(字幕|双语|外挂)|繁体|繁體|简繁",
                "繁体中文字幕",
            )?,
            Rule::label(
                r"(?i)((?-u:\b)|_)(eng)((?-u:\b)|_)|[英][^\t\n\f\r ]*?(字幕|双语|外挂)",
                "英语字幕",
            )?,
            Rule::label(
                r"(?i)((?-u:\b)|_)(jap|jp)((?-u:\b)|_)|[日][^\t\n\f\r ]*?(字幕|双语|外挂)",
                "日语字幕",
            )?,
        ],
    ))
}

fn info() -> Result<GroupRule> {
    Ok(GroupRule::new(
        INFO,
        vec![
            Rule::label(r"(?i)((?-u:\b)|_)(rarbg|rartv)((?-u:\b)|_)", "rarbg")?,
            Rule::label(r"(?i)((?-u:\b)|_)(dubbed)((?-u:\b)|_)", "DUBBED")?,
            Rule::label(r"(?i)((?-u:\b)|_)(extended)((?-u:\b)|_)", "EXTENDED")?,
            Rule::extract(r"(?i)((?-u:\b)|_)(mp4|mkv)((?-u:\b)|_)", container_format)?,
        ],
    ))
}

fn source() -> Result<GroupRule> {
    Ok(GroupRule::new(
        SOURCE,
        vec![
            Rule::label(r"(?i)((?-u:\b)|_)(amzn)((?-u:\b)|_)", "Amazon")?,
            Rule::label(r"(?i)((?-u:\b)|_)(nf)((?-u:\b)|_)", "Netflix")?,
            Rule::label(r"(?i)((?-u:\b)|_)(hmax)((?-u:\b)|_)", "HBO Max")?,
        ],
    ))
}

fn group() -> Result<GroupRule> {
    Ok(GroupRule::new(
        GROUP,
        vec![
            Rule::extract(
                r"(?i)[a-z0-9\x{4E00}-\x{9FA5}]+((字幕|搬运)[组社团]|工作室)",
                whole_match,
            )?,
            Rule::extract(
                r"(?i)((?-u:\b)|_)[a-z0-9\x{4E00}-\x{9FA5}]+-?(Sub|Raws)((?-u:\b)|_)",
                whole_match_without_underscores,
            )?,
            Rule::label(r"(?i)F.?I.?X[\t\n\f\r ]*字幕侠", "F.I.X字幕侠")?,
            Rule::label(r"(?i)人人影视|yyets", "YYeTs字幕组")?,
        ],
    ))
}

/// `mkv` / `_MP4_` → `MKV` / `MP4`.
///
/// Only the extension is kept; the separators the pattern consumed around
/// it are dropped rather than uppercased into the tag.
fn container_format(caps: &[String]) -> Vec<String> {
    caps.get(2).map(|format| format.to_uppercase()).into_iter().collect()
}

fn whole_match(caps: &[String]) -> Vec<String> {
    caps.first().cloned().into_iter().collect()
}

fn whole_match_without_underscores(caps: &[String]) -> Vec<String> {
    caps.first()
        .map(|name| name.replace('_', ""))
        .into_iter()
        .collect()
}
