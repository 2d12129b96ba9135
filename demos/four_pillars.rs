//! Four pillars of a civil moment.
//!
//! ```text
//! cargo run --example four_pillars -- "2020-01-01 01:01:01" 39.9 116.4 +08:00
//! RUST_LOG=bazi=debug cargo run --example four_pillars
//! ```
//!
//! Missing arguments fall back to the worked example above; a missing offset
//! uses the offset the host zone had at that moment.

use bazi::{moment, Calculator, GeoPosition, TimeZoneOffset};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), bazi::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let birth = moment::parse(args.first().map_or("2020-01-01 01:01:01", String::as_str))?;
    let position = match (args.get(1), args.get(2)) {
        (Some(lat), Some(lon)) => GeoPosition::parse(lat, lon)?,
        _ => GeoPosition::REFERENCE,
    };
    let offset = match args.get(3) {
        Some(offset) => offset.parse()?,
        None if args.is_empty() => TimeZoneOffset::CHINA,
        None => TimeZoneOffset::local_at(birth),
    };

    let calc = Calculator::new(offset).with_position(position);
    let solar = calc.true_solar_time(birth)?;
    let pillars = calc.four_pillars(birth)?;

    println!("civil:      {birth} ({offset})");
    println!("position:   {position}");
    println!("true solar: {}", solar.format("%Y-%m-%d %H:%M:%S"));
    println!(
        "pillars:    {} {} {} {}",
        pillars.year, pillars.month, pillars.day, pillars.hour
    );
    Ok(())
}
