use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use ziwei_base::{ChartOptions, Horoscope, HoroscopeItem, House, YearBoundary, resolve_pillars};
use ziwei_calendar::{
    LunarDate, TableCalendar, TimeSlot, hour_to_slot, lunar_to_solar, parse_date, parse_ymd,
    solar_to_lunar,
};
use ziwei_config::ZiweiConfig;
use ziwei_rs::{
    Astrolabe, Gender, Label, Locale, by_lunar_with, by_solar_with, format_lunar_date,
};

#[derive(Parser)]
#[command(name = "ziwei", about = "Zi Wei Dou Shu chart CLI")]
struct Cli {
    /// Emit JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Label locale: zh-CN or en-US (overrides config)
    #[arg(long, global = true)]
    locale: Option<String>,
    /// Keep a second-half leap month on its own month number
    #[arg(long, global = true)]
    no_fix_leap: bool,
    /// Year pillar boundary: lunar-new-year or calendar-year (overrides config)
    #[arg(long, global = true)]
    year_boundary: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

/// Birth moment shared by chart-producing commands.
#[derive(Args)]
struct Birth {
    /// Birth date (YYYY-M-D), solar unless --lunar
    #[arg(long)]
    date: String,
    /// Time slot 0-12 (0 early rat, 12 late rat)
    #[arg(long, conflicts_with = "hour")]
    slot: Option<u8>,
    /// Clock hour 0-23, mapped to a time slot
    #[arg(long)]
    hour: Option<u8>,
    /// male or female
    #[arg(long)]
    gender: String,
    /// Treat --date as a lunar date
    #[arg(long)]
    lunar: bool,
    /// The lunar month is a leap month
    #[arg(long, requires = "lunar")]
    leap: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Natal chart
    Chart {
        #[command(flatten)]
        birth: Birth,
    },
    /// Decadal, age, yearly, monthly, daily and hourly overlays
    Horoscope {
        #[command(flatten)]
        birth: Birth,
        /// Solar query date (YYYY-M-D)
        #[arg(long)]
        at: String,
        /// Query time slot 0-12
        #[arg(long, default_value = "0")]
        at_slot: u8,
    },
    /// Four pillars of a solar date and time slot
    Pillars {
        /// Solar date (YYYY-M-D)
        #[arg(long)]
        date: String,
        /// Time slot 0-12
        #[arg(long, default_value = "0")]
        slot: u8,
    },
    /// Convert a solar date to its lunar date
    ToLunar {
        /// Solar date (YYYY-M-D)
        #[arg(long)]
        date: String,
    },
    /// Convert a lunar date to its solar date
    ToSolar {
        /// Lunar date (YYYY-M-D)
        #[arg(long)]
        date: String,
        /// The month is a leap month
        #[arg(long)]
        leap: bool,
    },
    /// Time slot of a clock hour
    Slot {
        /// Hour of day 0-23
        #[arg(long)]
        hour: u8,
    },
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ziwei=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> ZiweiConfig {
    ZiweiConfig::load_or_default(path.map(PathBuf::as_path)).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}");
        std::process::exit(1);
    })
}

fn parse_boundary(s: &str) -> Option<YearBoundary> {
    match s.to_lowercase().as_str() {
        "lunar-new-year" | "lunar" => Some(YearBoundary::LunarNewYear),
        "calendar-year" | "calendar" => Some(YearBoundary::CalendarYear),
        _ => None,
    }
}

fn require_boundary(s: &str) -> YearBoundary {
    parse_boundary(s).unwrap_or_else(|| {
        eprintln!("Invalid year boundary: {s}");
        eprintln!("Valid: lunar-new-year (default), calendar-year");
        std::process::exit(1);
    })
}

fn require_gender(s: &str) -> Gender {
    Gender::from_name(s).unwrap_or_else(|| {
        eprintln!("Invalid gender: {s}");
        eprintln!("Valid: male, female");
        std::process::exit(1);
    })
}

fn require_slot(index: u8) -> TimeSlot {
    TimeSlot::new(index).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    })
}

fn require_date(s: &str) -> ziwei_calendar::NaiveDate {
    parse_date(s).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    })
}

/// Slot index from `--slot` or `--hour`; neither means slot 0.
fn birth_slot(birth: &Birth) -> u8 {
    match (birth.slot, birth.hour) {
        (Some(s), _) => s,
        (None, Some(h)) => hour_to_slot(h)
            .unwrap_or_else(|e| {
                eprintln!("{e}");
                std::process::exit(1);
            })
            .index(),
        (None, None) => 0,
    }
}

fn build(birth: &Birth, options: ChartOptions) -> Astrolabe {
    let gender = require_gender(&birth.gender);
    let slot = birth_slot(birth);
    let result = if birth.lunar {
        by_lunar_with(&birth.date, slot, gender, birth.leap, options)
    } else {
        by_solar_with(&birth.date, slot, gender, options)
    };
    result.unwrap_or_else(|e| {
        eprintln!("Failed to build chart: {e}");
        std::process::exit(1);
    })
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("Failed to serialize: {e}");
            std::process::exit(1);
        }
    }
}

fn star_list(house: &House, locale: Locale) -> String {
    house
        .stars()
        .map(|s| {
            let mut out = s.name.label(locale).to_string();
            if let Some(b) = s.brightness {
                out.push_str(&format!("({})", b.label(locale)));
            }
            if let Some(m) = s.mutagen {
                out.push_str(&format!("[{}]", m.label(locale)));
            }
            out
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_chart(a: &Astrolabe, locale: Locale) {
    let c = a.chart();
    println!(
        "{} {} {} slot {}",
        c.gender.label(locale),
        c.solar_date,
        format_lunar_date(&c.lunar_date, locale),
        c.slot
    );
    println!(
        "Pillars: {} {} {} {}",
        c.pillars.year, c.pillars.month, c.pillars.day, c.pillars.hour
    );
    println!(
        "Zodiac: {}  Sign: {}  Class: {}",
        c.zodiac.label(locale),
        c.sign.label(locale),
        c.five_elements_class.label(locale)
    );
    println!(
        "Soul: {} ({})  Body: {} ({})",
        c.soul_branch.label(locale),
        c.soul_star.label(locale),
        c.body_branch.label(locale),
        c.body_star.label(locale)
    );
    for h in &c.houses {
        let mark = if h.is_body_house { "*" } else { " " };
        let range = h
            .decadal
            .map(|d| format!("{:>3}-{:<3}", d.start_age, d.end_age))
            .unwrap_or_default();
        println!(
            "{mark}{:<4} {}{} {range} {}",
            h.role.label(locale),
            h.stem.label(locale),
            h.branch.label(locale),
            star_list(h, locale)
        );
    }
}

fn print_item(name: &str, item: &HoroscopeItem, locale: Locale) {
    let mutagens = item
        .mutagen_stars
        .iter()
        .map(|s| s.label(locale))
        .collect::<Vec<_>>()
        .join(" ");
    let moving = item
        .stars
        .iter()
        .map(|p| format!("{}@{}", p.star.name.label(locale), p.house_index))
        .collect::<Vec<_>>()
        .join(" ");
    println!(
        "{name:<8} {}{} house {:>2}  mutagens: {mutagens}  {moving}",
        item.stem.label(locale),
        item.branch.label(locale),
        item.index
    );
}

fn print_horoscope(h: &Horoscope, locale: Locale) {
    println!(
        "{} {} slot {}  nominal age {}",
        h.solar_date,
        format_lunar_date(&h.lunar_date, locale),
        h.slot,
        h.nominal_age
    );
    if let Some(d) = h.decadal.decadal {
        println!("Decade: ages {}-{}", d.start_age, d.end_age);
    }
    let names = ["decadal", "age", "yearly", "monthly", "daily", "hourly"];
    for (name, item) in names.iter().zip(h.items()) {
        print_item(name, item, locale);
    }
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let config = load_config(cli.config.as_ref());
    let locale = Locale::resolve(cli.locale.as_deref().unwrap_or(&config.display.locale));
    let mut options = config.chart_options();
    if cli.no_fix_leap {
        options.fix_leap = false;
    }
    if let Some(b) = &cli.year_boundary {
        options.year_boundary = require_boundary(b);
    }
    tracing::debug!(?options, %locale, "resolved options");

    match cli.command {
        Commands::Chart { birth } => {
            let a = build(&birth, options);
            if cli.json {
                print_json(&a);
            } else {
                print_chart(&a, locale);
            }
        }

        Commands::Horoscope {
            birth,
            at,
            at_slot,
        } => {
            let a = build(&birth, options);
            let h = a
                .horoscope_at(require_date(&at), require_slot(at_slot))
                .unwrap_or_else(|e| {
                    eprintln!("Failed to compute horoscope: {e}");
                    std::process::exit(1);
                });
            if cli.json {
                print_json(&h);
            } else {
                print_horoscope(&h, locale);
            }
        }

        Commands::Pillars { date, slot } => {
            let p = resolve_pillars(
                &TableCalendar,
                require_date(&date),
                require_slot(slot),
                options.year_boundary,
            )
            .unwrap_or_else(|e| {
                eprintln!("{e}");
                std::process::exit(1);
            });
            if cli.json {
                print_json(&p);
            } else {
                println!("{} {} {} {}", p.year, p.month, p.day, p.hour);
            }
        }

        Commands::ToLunar { date } => {
            let lunar = solar_to_lunar(require_date(&date)).unwrap_or_else(|e| {
                eprintln!("{e}");
                std::process::exit(1);
            });
            if cli.json {
                print_json(&lunar);
            } else {
                println!("{}", format_lunar_date(&lunar, locale));
            }
        }

        Commands::ToSolar { date, leap } => {
            let solar = parse_ymd(&date)
                .and_then(|(y, m, d)| LunarDate::new(y, m, d, leap))
                .and_then(|l| lunar_to_solar(&l))
                .unwrap_or_else(|e| {
                    eprintln!("{e}");
                    std::process::exit(1);
                });
            if cli.json {
                print_json(&solar);
            } else {
                println!("{solar}");
            }
        }

        Commands::Slot { hour } => {
            let slot = hour_to_slot(hour).unwrap_or_else(|e| {
                eprintln!("{e}");
                std::process::exit(1);
            });
            if cli.json {
                print_json(&slot);
            } else {
                println!("{slot}");
            }
        }
    }
}
