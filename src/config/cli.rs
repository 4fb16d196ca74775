use clap::Parser;
use std::path::PathBuf;

pub const MAX_POSTS: usize = 100;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// How many posts would you like to fetch?
    #[arg(short, long, default_value = "30", value_parser = parse_post_count)]
    pub posts: usize,

    /// Path to a JSON site profile overriding the default URL, page size and selectors
    #[arg(long)]
    pub profile: Option<PathBuf>,

    /// Per-request timeout for page fetches
    #[arg(long, default_value = "30")]
    pub timeout_secs: u64,

    /// Log level (error, warn, info, debug, trace). Field fallback notices are always shown
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}

/// Accepts whole numbers in `0..=MAX_POSTS`.
pub fn parse_post_count(raw: &str) -> Result<usize, String> {
    let n: i64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("{raw} not a valid number."))?;

    if n < 0 {
        return Err(format!("{n} is an invalid integer."));
    }
    if n > MAX_POSTS as i64 {
        return Err(format!("{n} is too high. Max value = {MAX_POSTS}"));
    }

    Ok(n as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_bounds() {
        assert_eq!(parse_post_count("0"), Ok(0));
        assert_eq!(parse_post_count("100"), Ok(100));
        assert_eq!(parse_post_count("35"), Ok(35));
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert_eq!(
            parse_post_count("101"),
            Err("101 is too high. Max value = 100".to_string())
        );
        assert_eq!(
            parse_post_count("-1"),
            Err("-1 is an invalid integer.".to_string())
        );
    }

    #[test]
    fn test_rejects_non_numeric() {
        assert_eq!(
            parse_post_count("ten"),
            Err("ten not a valid number.".to_string())
        );
        assert!(parse_post_count("2.5").is_err());
    }

    #[test]
    fn test_default_args() {
        let args = Args::try_parse_from(["hnscrape"]).unwrap();
        assert_eq!(args.posts, 30);
        assert!(args.profile.is_none());
        assert_eq!(args.timeout_secs, 30);
    }

    #[test]
    fn test_short_flag_and_rejection() {
        let args = Args::try_parse_from(["hnscrape", "-p", "35"]).unwrap();
        assert_eq!(args.posts, 35);
        assert!(Args::try_parse_from(["hnscrape", "--posts", "500"]).is_err());
    }
}
