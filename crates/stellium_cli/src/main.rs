use chrono::{DateTime, Datelike, Timelike, Utc};
use clap::{Parser, Subcommand};
use stellium_angles::{ZodiacSign, deg_to_dms, normalize_360};
use stellium_points::{
    AssemblyPolicy, HouseSystem, ObservationContext, StandardEphemeris, compute_chart_points,
    fortune_longitude, is_day_chart,
};
use stellium_time::calendar_to_jd;

#[derive(Parser)]
#[command(name = "stellium", about = "Chart-point derivation CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert degrees to DMS
    Dms {
        /// Angle in decimal degrees (normalized to [0, 360) first)
        deg: f64,
    },
    /// Zodiac sign of an ecliptic longitude
    Sign {
        /// Ecliptic longitude in degrees (normalized before lookup)
        lon: f64,
    },
    /// Part of Fortune from Ascendant, Sun, and Moon longitudes
    Fortune {
        /// Ascendant longitude in degrees
        #[arg(long)]
        asc: f64,
        /// Sun longitude in degrees
        #[arg(long)]
        sun: f64,
        /// Moon longitude in degrees
        #[arg(long)]
        moon: f64,
    },
    /// Full chart: derived angles plus supplied body longitudes, as JSON
    Chart {
        /// Julian Day (UT); alternative to --date
        #[arg(long, conflicts_with = "date")]
        jd: Option<f64>,
        /// UTC datetime (RFC 3339, e.g. 2000-01-01T12:00:00Z)
        #[arg(long)]
        date: Option<String>,
        /// Observer latitude in degrees, north positive
        #[arg(long)]
        lat: f64,
        /// Observer longitude in degrees, east positive
        #[arg(long)]
        lon: f64,
        /// Raw body longitude as name=degrees (repeatable)
        #[arg(long = "body")]
        bodies: Vec<String>,
        /// House system: placidus (default) or whole-sign
        #[arg(long, default_value = "placidus")]
        house_system: String,
        /// Keep going on per-point failures and report them separately
        #[arg(long)]
        partial: bool,
    },
}

fn format_dms(deg: f64) -> String {
    deg_to_dms(normalize_360(deg)).to_string()
}

fn parse_body(spec: &str) -> (String, f64) {
    let Some((name, value)) = spec.split_once('=') else {
        eprintln!("Invalid body spec: {spec} (expected name=degrees)");
        std::process::exit(1);
    };
    let Ok(deg) = value.parse::<f64>() else {
        eprintln!("Invalid body longitude: {value}");
        std::process::exit(1);
    };
    (name.to_string(), deg)
}

fn parse_house_system(s: &str) -> HouseSystem {
    match s {
        "placidus" => HouseSystem::Placidus,
        "whole-sign" => HouseSystem::WholeSign,
        _ => {
            eprintln!("Invalid house system: {s}");
            eprintln!("Valid: placidus (default), whole-sign");
            std::process::exit(1);
        }
    }
}

fn parse_date_to_jd(date: &str) -> f64 {
    let Ok(parsed) = DateTime::parse_from_rfc3339(date) else {
        eprintln!("Invalid date: {date} (expected RFC 3339, e.g. 2000-01-01T12:00:00Z)");
        std::process::exit(1);
    };
    let utc = parsed.with_timezone(&Utc);
    calendar_to_jd(
        utc.year(),
        utc.month(),
        utc.day(),
        utc.hour(),
        utc.minute(),
        utc.second() as f64,
    )
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Dms { deg } => {
            println!("{}", format_dms(deg));
        }

        Commands::Sign { lon } => {
            let norm = normalize_360(lon);
            // Total after normalization; unreachable None kept explicit.
            match ZodiacSign::from_longitude(norm) {
                Some(sign) => println!(
                    "{} ({} in sign, {:.4} deg)",
                    sign.name(),
                    deg_to_dms(norm - sign.index() as f64 * 30.0),
                    norm
                ),
                None => {
                    eprintln!("Longitude did not normalize: {lon}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Fortune { asc, sun, moon } => {
            let day = is_day_chart(sun, asc);
            let fortune = fortune_longitude(asc, sun, moon, day);
            let sign = ZodiacSign::from_longitude(fortune)
                .map(|s| s.name())
                .unwrap_or("?");
            println!(
                "{:.4} deg ({}) - {} chart",
                fortune,
                sign,
                if day { "day" } else { "night" }
            );
        }

        Commands::Chart {
            jd,
            date,
            lat,
            lon,
            bodies,
            house_system,
            partial,
        } => {
            let jd = match (jd, date) {
                (Some(jd), _) => jd,
                (None, Some(date)) => parse_date_to_jd(&date),
                (None, None) => {
                    eprintln!("Either --jd or --date is required");
                    std::process::exit(1);
                }
            };

            let mut ctx = ObservationContext::new(jd, lat, lon);
            for spec in &bodies {
                let (name, deg) = parse_body(spec);
                ctx.raw_longitudes.insert(name, deg);
            }

            let policy = if partial {
                AssemblyPolicy::Partial
            } else {
                AssemblyPolicy::FailFast
            };

            let provider = StandardEphemeris::new();
            match compute_chart_points(&provider, &ctx, parse_house_system(&house_system), policy) {
                Ok(outcome) => {
                    let json = serde_json::to_string_pretty(&outcome.points)
                        .expect("chart points serialize");
                    println!("{json}");
                    for (name, err) in &outcome.failures {
                        eprintln!("{name}: {err}");
                    }
                    if !outcome.failures.is_empty() {
                        std::process::exit(2);
                    }
                }
                Err(e) => {
                    eprintln!("Chart computation failed: {e}");
                    std::process::exit(1);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dms_output_normalizes_out_of_range_input() {
        // Unreduced degrees would otherwise saturate the u16 whole-degree
        // field in the decomposition.
        assert_eq!(format_dms(100_000.0), "280\u{b0}0'0.00\"");
        assert_eq!(format_dms(-10.0), "350\u{b0}0'0.00\"");
    }

    #[test]
    fn body_spec_parses() {
        let (name, deg) = parse_body("sun=280.5");
        assert_eq!(name, "sun");
        assert!((deg - 280.5).abs() < 1e-12);
    }

    #[test]
    fn rfc3339_date_to_jd() {
        let jd = parse_date_to_jd("2000-01-01T12:00:00Z");
        assert!((jd - 2_451_545.0).abs() < 1e-9, "jd={jd}");
    }

    #[test]
    fn date_with_offset_converts_to_utc() {
        // 14:00 +02:00 is noon UTC.
        let jd = parse_date_to_jd("2000-01-01T14:00:00+02:00");
        assert!((jd - 2_451_545.0).abs() < 1e-9, "jd={jd}");
    }
}
