use anyhow::{bail, Context, Result};
use art_gallery::{Art, ArtGallery, ArtType, Gallery};
use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::Serialize;
use std::collections::HashSet;
use std::env;
use tracing::info;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "expected all, artists, recent, by-artist <name>, price [from|-] [to|-]";

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let gallery = demo_gallery()?;
    info!(pieces = gallery.len(), version = art_gallery::VERSION, "demo gallery loaded");

    match args.first().map(String::as_str) {
        None | Some("all") => print_art(gallery.all_art()),
        Some("artists") => print_json(&gallery.artists_sorted()),
        Some("recent") => print_art(gallery.recent_art()),
        Some("by-artist") => {
            let artist = args.get(1).context("by-artist needs an artist name")?;
            print_art(gallery.art_by_artist(artist))
        }
        Some("price") => {
            let from = parse_bound(args.get(1)).context("invalid lower price bound")?;
            let to = parse_bound(args.get(2)).context("invalid upper price bound")?;
            print_art(gallery.art_by_price(from, to))
        }
        Some(other) => bail!("unknown command '{}' ({})", other, USAGE),
    }
}

/// A few well-known works, one of them not for sale and one made this month
fn demo_gallery() -> Result<ArtGallery> {
    let pieces = vec![
        Art::new(
            "Mona Lisa",
            ArtType::Painting,
            Some(100),
            "da Vinci",
            date(1503, 10, 1)?,
        )?,
        Art::new(
            "David",
            ArtType::Sculpture,
            None,
            "michelangelo",
            date(1504, 9, 8)?,
        )?,
        Art::new(
            "The Bayeux Tapestry",
            ArtType::Tapestry,
            Some(2_500_000),
            "unknown",
            date(1077, 1, 1)?,
        )?,
        Art::new(
            "Study of Hands",
            ArtType::Drawing,
            Some(4_200),
            "da Vinci",
            date(1474, 1, 1)?,
        )?,
        Art::new(
            "Gallery Opening",
            ArtType::Photograph,
            Some(350),
            "house photographer",
            Utc::now() - Duration::days(14),
        )?,
    ];

    Ok(ArtGallery::with_art(pieces))
}

fn date(year: i32, month: u32, day: u32) -> Result<DateTime<Utc>> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .with_context(|| format!("invalid date {}-{}-{}", year, month, day))
}

/// Parse an optional price bound; missing or "-" means unbounded
fn parse_bound(arg: Option<&String>) -> Result<Option<i64>> {
    match arg.map(String::as_str) {
        None | Some("-") => Ok(None),
        Some(value) => {
            let pence = value
                .parse::<i64>()
                .with_context(|| format!("'{}' is not a whole number of pence", value))?;
            Ok(Some(pence))
        }
    }
}

fn print_art(art: HashSet<Art>) -> Result<()> {
    let mut sorted: Vec<Art> = art.into_iter().collect();
    sorted.sort_by_key(Art::key);
    print_json(&sorted)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to encode result as JSON")?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bound() {
        assert_eq!(parse_bound(None).unwrap(), None);
        assert_eq!(parse_bound(Some(&"-".to_string())).unwrap(), None);
        assert_eq!(parse_bound(Some(&"100".to_string())).unwrap(), Some(100));
        assert!(parse_bound(Some(&"ten".to_string())).is_err());
    }

    #[test]
    fn test_demo_gallery() {
        let gallery = demo_gallery().unwrap();

        assert_eq!(gallery.len(), 5);
        assert_eq!(gallery.recent_art().len(), 1);
        assert_eq!(gallery.art_by_artist("da Vinci").len(), 2);
        // David has no asking price
        assert_eq!(gallery.art_by_price(None, None).len(), 4);
    }
}
