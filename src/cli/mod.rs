use crate::{
    budget::{format_budget_summary, format_money_saving_tips, BudgetEstimator, RateCard},
    catalogue::{self, format_destination_card, DEPARTURE_CITIES, TRAVEL_STYLES},
    config::{PlannerConfig, API_KEY_VAR},
    core::{spawn_trip_plan, ItineraryPlanner},
    schemas::{trip_request_schema, RequestValidator},
    types::{GenerationOutcome, TripRequest, EMPTY_RESPONSE_PLACEHOLDER},
};
use anyhow::{bail, Context};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::{
    env, fs,
    io::{self, Write},
    time::Duration,
};
use tracing::{error, info};

/// CLI entry point for the trip-saver tool
pub async fn run() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let matches = command().get_matches();
    match matches.subcommand() {
        Some(("destinations", _)) => list_destinations(),
        Some(("show", sub)) => show_destination(sub),
        Some(("estimate", sub)) => estimate(sub),
        Some(("plan", sub)) => plan(sub).await,
        Some(("schema", _)) => print_schema(),
        _ => unreachable!("clap requires a subcommand"),
    }
}

fn command() -> Command {
    Command::new("trip-saver")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Budget estimates and AI itineraries for student trips across India")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(Command::new("destinations").about("List the destinations in the catalogue"))
        .subcommand(
            Command::new("show")
                .about("Show everything we know about a destination")
                .arg(
                    Arg::new("name")
                        .help("Destination name, e.g. Rishikesh")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("estimate")
                .about("Estimate what a trip costs per person and for the group")
                .args(trip_args())
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print the breakdown as JSON"),
                ),
        )
        .subcommand(
            Command::new("plan")
                .about("Estimate the budget and stream a day-by-day itinerary")
                .args(trip_args())
                .args(provider_args()),
        )
        .subcommand(Command::new("schema").about("Print the JSON Schema of a trip request file"))
}

fn trip_args() -> Vec<Arg> {
    vec![
        Arg::new("destination")
            .short('d')
            .long("destination")
            .value_name("NAME")
            .help("Destination from the catalogue"),
        Arg::new("days")
            .short('n')
            .long("days")
            .value_name("DAYS")
            .value_parser(value_parser!(i32))
            .default_value("3")
            .help("Trip length in days (1-15)"),
        Arg::new("tier")
            .long("tier")
            .value_name("TIER")
            .default_value("budget")
            .help("Spending tier: budget, mid or premium"),
        Arg::new("group")
            .short('g')
            .long("group")
            .value_name("PEOPLE")
            .value_parser(value_parser!(u32))
            .default_value("1")
            .help("Number of students travelling (1-20)"),
        Arg::new("from")
            .long("from")
            .value_name("CITY")
            .default_value("Delhi")
            .help("Departure city"),
        Arg::new("style")
            .long("style")
            .value_name("STYLE")
            .default_value("Backpacker")
            .help("Travel style, e.g. \"Adventure & Trekking\""),
        Arg::new("prefs")
            .long("prefs")
            .value_name("TEXT")
            .help("Extra preferences such as dietary needs"),
        Arg::new("budget")
            .long("budget")
            .value_name("RUPEES")
            .value_parser(value_parser!(i64))
            .help("Budget per person you have in mind"),
        Arg::new("request")
            .short('r')
            .long("request")
            .value_name("FILE")
            .conflicts_with("destination")
            .help("Read the trip request from a JSON file instead of flags"),
        Arg::new("strict")
            .long("strict")
            .action(ArgAction::SetTrue)
            .requires("request")
            .help("Check the request file against the JSON Schema before decoding"),
        Arg::new("rates")
            .long("rates")
            .value_name("FILE")
            .help("Use a custom rate card (JSON) instead of the built-in one"),
    ]
}

fn provider_args() -> Vec<Arg> {
    vec![
        Arg::new("api-key")
            .short('k')
            .long("api-key")
            .value_name("KEY")
            .help("Groq API key (or set GROQ_API_KEY env var)"),
        Arg::new("base-url")
            .short('u')
            .long("base-url")
            .value_name("URL")
            .help("OpenAI-compatible base URL (or set GROQ_BASE_URL env var)"),
        Arg::new("model")
            .short('m')
            .long("model")
            .value_name("MODEL")
            .help("Model to use (or set GROQ_MODEL env var)"),
        Arg::new("timeout")
            .short('t')
            .long("timeout")
            .value_name("SECONDS")
            .value_parser(value_parser!(u64))
            .help("Request timeout in seconds (or set GROQ_TIMEOUT_SECS env var)"),
    ]
}

fn list_destinations() -> anyhow::Result<()> {
    for dest in catalogue::destinations() {
        println!("{} {:<12} {} ({})", dest.emoji, dest.name, dest.tagline, dest.state);
    }
    println!();
    println!("Departure cities: {}", DEPARTURE_CITIES.join(", "));
    println!("Travel styles: {}", TRAVEL_STYLES.join(", "));
    Ok(())
}

fn show_destination(matches: &ArgMatches) -> anyhow::Result<()> {
    let name = matches
        .get_one::<String>("name")
        .context("destination name is required")?;
    match catalogue::search_destination(name) {
        Some(dest) => {
            println!("{}", format_destination_card(dest));
            Ok(())
        }
        None => bail!(
            "unknown destination {name:?}; try one of: {}",
            catalogue::destination_names().join(", ")
        ),
    }
}

fn read_trip_request(matches: &ArgMatches) -> anyhow::Result<TripRequest> {
    let request = match matches.get_one::<String>("request") {
        Some(path) => {
            let validator = if matches.get_flag("strict") {
                RequestValidator::Strict
            } else {
                RequestValidator::SerdeFirst
            };
            let json = fs::read_to_string(path)
                .with_context(|| format!("failed to read trip request from {path}"))?;
            validator.parse_request_str(&json)?
        }
        None => {
            let destination = matches
                .get_one::<String>("destination")
                .context("pass --destination or --request <FILE>")?;
            // flags with defaults are always present
            let days = matches.get_one::<i32>("days").copied().unwrap_or(3);
            let tier = matches
                .get_one::<String>("tier")
                .map(String::as_str)
                .unwrap_or("budget");
            let group = matches.get_one::<u32>("group").copied().unwrap_or(1);

            let mut request = TripRequest::new(destination.as_str(), days, tier, group);
            if let Some(city) = matches.get_one::<String>("from") {
                request = request.with_departure_city(city.as_str());
            }
            if let Some(style) = matches.get_one::<String>("style") {
                request = request.with_travel_style(style.as_str());
            }
            if let Some(prefs) = matches.get_one::<String>("prefs") {
                request = request.with_preferences(prefs.as_str());
            }
            if let Some(budget) = matches.get_one::<i64>("budget") {
                request = request.with_budget_per_person(*budget);
            }
            request
        }
    };

    request.validate()?;
    if catalogue::find_destination(&request.destination).is_none() {
        info!(
            destination = %request.destination,
            "destination not in catalogue, using fallback rates"
        );
    }
    Ok(request)
}

fn load_rate_card(matches: &ArgMatches) -> anyhow::Result<Option<RateCard>> {
    matches
        .get_one::<String>("rates")
        .map(|path| {
            RateCard::from_json_file(path)
                .with_context(|| format!("failed to load rate card from {path}"))
        })
        .transpose()
}

fn estimate(matches: &ArgMatches) -> anyhow::Result<()> {
    let request = read_trip_request(matches)?;
    let custom_rates = load_rate_card(matches)?;
    let estimator = custom_rates
        .as_ref()
        .map(BudgetEstimator::new)
        .unwrap_or_else(|| BudgetEstimator::standard());

    let breakdown = estimator.estimate(&request);
    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
    } else {
        println!("{}", format_budget_summary(&breakdown));
        println!("\n{}", format_money_saving_tips());
    }
    Ok(())
}

fn resolve_config(matches: &ArgMatches) -> anyhow::Result<PlannerConfig> {
    let key_flag = matches.get_one::<String>("api-key").cloned();
    let mut config = PlannerConfig::from_lookup(|name| match name {
        API_KEY_VAR => key_flag.clone().or_else(|| env::var(name).ok()),
        _ => env::var(name).ok(),
    })
    .context("Groq API key is required. Set GROQ_API_KEY environment variable or use --api-key")?;

    if let Some(base_url) = matches.get_one::<String>("base-url") {
        config.base_url = base_url.clone();
    }
    if let Some(model) = matches.get_one::<String>("model") {
        config.model = model.clone();
    }
    if let Some(secs) = matches.get_one::<u64>("timeout") {
        config.timeout = Duration::from_secs(*secs);
    }
    config.validate()?;
    Ok(config)
}

async fn plan(matches: &ArgMatches) -> anyhow::Result<()> {
    let request = read_trip_request(matches)?;
    let custom_rates = load_rate_card(matches)?;
    let estimator = custom_rates
        .as_ref()
        .map(BudgetEstimator::new)
        .unwrap_or_else(|| BudgetEstimator::standard());
    let breakdown = estimator.estimate(&request);
    println!("{}\n", format_budget_summary(&breakdown));

    let config = resolve_config(matches)?;
    info!("Using model: {}", config.model);
    info!("Base URL: {}", config.base_url);
    let planner = ItineraryPlanner::from_config(&config);

    println!("🤖 Generating your {}-day itinerary...\n", request.duration_days);
    let handle = spawn_trip_plan(planner, &request, &breakdown);
    let outcome = handle
        .drain(|fragment| {
            print!("{fragment}");
            let _ = io::stdout().flush();
        })
        .await;

    match outcome {
        GenerationOutcome::Success { text } => {
            if text == EMPTY_RESPONSE_PLACEHOLDER {
                println!("{text}");
            } else {
                println!();
            }
            Ok(())
        }
        GenerationOutcome::Failure { kind, message } => {
            println!();
            eprintln!("{}", kind.user_message(&message));
            error!("Itinerary generation failed: {}", message);
            bail!("itinerary generation failed ({})", kind.code())
        }
    }
}

fn print_schema() -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(&trip_request_schema()?)?);
    Ok(())
}
