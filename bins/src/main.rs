use chrono::{Local, NaiveDate};
use clap::{builder::BoolishValueParser, ArgAction, Parser, Subcommand};
use eyre::Context as _;
use ledger::Ledger;
use log::{info, warn};
use model::{
    availability::{WeekDay, SLOT_DURATION_MIN},
    ids::{day_key, parse_date, CoachId},
    time::LocalTime,
};
use storage::Storage;

#[derive(Parser)]
#[command(
    name = "availability-cli",
    about = "Coach availability and slot booking",
    long_about = "Query bookable slots and manage coach schedules. Uses MONGO_URL when set, an in-memory store otherwise."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Bookable hourly start times on a date
    Slots {
        coach: String,
        #[arg(value_parser = parse_date)]
        date: NaiveDate,
    },
    /// Check whether a booking fits
    Check {
        coach: String,
        #[arg(value_parser = parse_date)]
        date: NaiveDate,
        start: LocalTime,
        /// Booking length in minutes, e.g. 90 for an hour and a half
        #[arg(long, default_value_t = SLOT_DURATION_MIN)]
        minutes: u32,
    },
    /// Commit time for a booking
    Block {
        coach: String,
        #[arg(value_parser = parse_date)]
        date: NaiveDate,
        start: LocalTime,
        /// Booking length in minutes
        #[arg(long, default_value_t = SLOT_DURATION_MIN)]
        minutes: u32,
        #[arg(long)]
        booking: Option<String>,
    },
    /// First date with a free slot, looking 60 days ahead
    Next {
        coach: String,
        #[arg(long, value_parser = parse_date)]
        from: Option<NaiveDate>,
    },
    /// Print the weekly template
    Schedule { coach: String },
    /// Open or close a weekday
    SetDay {
        coach: String,
        day: WeekDay,
        #[arg(value_parser = BoolishValueParser::new(), action = ArgAction::Set)]
        available: bool,
    },
    /// Add working hours to a weekday
    AddRange {
        coach: String,
        day: WeekDay,
        start: LocalTime,
        end: LocalTime,
    },
    /// Remove working hours from a weekday
    RemoveRange {
        coach: String,
        day: WeekDay,
        id: String,
    },
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let env = env::Env::load()?;
    pretty_env_logger::formatted_builder()
        .parse_filters(env.rust_log())
        .init();
    env.log_load();
    color_eyre::install()?;

    let cli = Cli::parse();
    let storage = match env.mongo_url() {
        Some(url) => Storage::new(url, env.db_name())
            .await
            .context("Failed to create storage")?,
        None => {
            warn!("MONGO_URL is not set, changes will not outlive this process");
            Storage::in_memory()
        }
    };
    info!("creating ledger");
    let ledger = Ledger::new(storage);
    run(&ledger, cli.command).await
}

async fn run(ledger: &Ledger, command: Command) -> eyre::Result<()> {
    match command {
        Command::Slots { coach, date } => {
            let slots = ledger
                .availability
                .available_time_slots(&CoachId::new(coach), date)
                .await;
            if slots.is_empty() {
                println!("{}: no free slots", day_key(date));
            } else {
                let slots = slots.iter().map(LocalTime::to_string).collect::<Vec<_>>();
                println!("{}: {}", day_key(date), slots.join(" "));
            }
        }
        Command::Check {
            coach,
            date,
            start,
            minutes,
        } => {
            let free = ledger
                .availability
                .is_time_slot_available(&CoachId::new(coach), date, start, minutes)
                .await;
            println!(
                "{} {} +{}m: {}",
                day_key(date),
                start,
                minutes,
                if free { "available" } else { "unavailable" }
            );
        }
        Command::Block {
            coach,
            date,
            start,
            minutes,
            booking,
        } => {
            let blocked = ledger
                .availability
                .block_slot(&CoachId::new(coach), date, start, minutes, booking)
                .await?;
            println!("blocked {} {}-{}", day_key(date), blocked.start, blocked.end);
        }
        Command::Next { coach, from } => {
            let from = from.unwrap_or_else(|| Local::now().date_naive());
            let date = ledger
                .availability
                .next_available_date(&CoachId::new(coach), from)
                .await;
            println!("{}", day_key(date));
        }
        Command::Schedule { coach } => {
            let week = ledger.schedule.weekly_schedule(&CoachId::new(coach)).await;
            for day in week.days() {
                let ranges = day
                    .time_slots
                    .iter()
                    .map(|range| format!("[{}] {}-{}", range.id, range.start, range.end))
                    .collect::<Vec<_>>();
                println!(
                    "{:<9} {:<4} {}",
                    day.day.name(),
                    if day.available { "on" } else { "off" },
                    ranges.join(", ")
                );
            }
        }
        Command::SetDay {
            coach,
            day,
            available,
        } => {
            ledger
                .schedule
                .set_day_available(&CoachId::new(coach), day, available)
                .await;
        }
        Command::AddRange {
            coach,
            day,
            start,
            end,
        } => {
            let range = ledger
                .schedule
                .add_time_range(&CoachId::new(coach), day, start, end)
                .await?;
            println!("added [{}] {}-{} on {}", range.id, range.start, range.end, day);
        }
        Command::RemoveRange { coach, day, id } => {
            let range = ledger
                .schedule
                .remove_time_range(&CoachId::new(coach), day, &id)
                .await?;
            println!("removed [{}] {}-{} on {}", range.id, range.start, range.end, day);
        }
    }
    Ok(())
}
