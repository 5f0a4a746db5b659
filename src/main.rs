use num_bigint::BigUint;
use std::process::ExitCode;
use std::str::FromStr;
use swap_validator::{
    check_allowance, quote, ExchangeDirection, ScaledAmount, TransactionValidator,
    ValidationError, ValidatorConfig,
};
use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "\
Usage:
  swap-validator validate <buy|sell> <amount> [price_wei] [decimals]
  swap-validator allowance <allowance> <requested> <decimals>
  swap-validator quote <buy|sell> <amount> <price_wei> <in_decimals> <out_decimals>";

/// Command-line usage errors
#[derive(Debug, Error)]
enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument { arg: String, reason: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Failed to encode output: {0}")]
    Output(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    // Load environment variables from .env file (if present)
    dotenvy::dotenv().ok();

    // Initialize tracing (stderr keeps stdout clean for JSON)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "swap_validator=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = ValidatorConfig::from_env();
    tracing::debug!(
        min_transaction_usd = %config.min_transaction_usd,
        default_decimals = config.default_decimals,
        "Loaded validator config"
    );

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args, config) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(CliError::Usage(msg)) => {
            eprintln!("{}\n\n{}", msg, USAGE);
            ExitCode::from(2)
        }
        Err(e) => {
            eprintln!("❌ {}", e);
            ExitCode::from(2)
        }
    }
}

fn run(args: &[String], config: ValidatorConfig) -> Result<String, CliError> {
    let (command, rest) = args
        .split_first()
        .ok_or_else(|| CliError::Usage("Missing command".to_string()))?;

    match command.as_str() {
        "validate" => {
            let direction: ExchangeDirection = required(rest, 0, "direction")?.parse()?;
            let amount = required(rest, 1, "amount")?;
            let price = rest.get(2).map(|p| parse_arg::<BigUint>(p)).transpose()?;
            let decimals = match rest.get(3) {
                Some(d) => parse_arg::<u8>(d)?,
                None => config.default_decimals,
            };

            let validator = TransactionValidator::new(config);
            let result = validator.validate(amount, direction, price.as_ref(), decimals);
            Ok(serde_json::to_string_pretty(&result)?)
        }
        "allowance" => {
            let allowance = required(rest, 0, "allowance")?;
            let requested = required(rest, 1, "requested")?;
            let decimals = parse_arg::<u8>(required(rest, 2, "decimals")?)?;

            let decision = check_allowance(allowance, requested, decimals);
            Ok(serde_json::to_string_pretty(&decision)?)
        }
        "quote" => {
            let direction: ExchangeDirection = required(rest, 0, "direction")?.parse()?;
            let amount = required(rest, 1, "amount")?;
            let price = parse_arg::<BigUint>(required(rest, 2, "price_wei")?)?;
            let in_decimals = parse_arg::<u8>(required(rest, 3, "in_decimals")?)?;
            let out_decimals = parse_arg::<u8>(required(rest, 4, "out_decimals")?)?;

            let amount_in = ScaledAmount::parse(amount, in_decimals)?;
            let quote = quote(direction, &amount_in, &price, out_decimals)?;
            tracing::info!(
                %direction,
                amount_in = %quote.amount_in,
                amount_out = %quote.amount_out,
                "Quoted"
            );
            Ok(serde_json::to_string_pretty(&serde_json::json!({
                "direction": quote.direction,
                "amount_in": quote.amount_in.to_string(),
                "amount_out": quote.amount_out.to_string(),
                "amount_out_raw": quote.amount_out.value().to_string(),
            }))?)
        }
        other => Err(CliError::Usage(format!("Unknown command '{}'", other))),
    }
}

fn required<'a>(args: &'a [String], index: usize, name: &str) -> Result<&'a str, CliError> {
    args.get(index)
        .map(String::as_str)
        .ok_or_else(|| CliError::Usage(format!("Missing <{}>", name)))
}

fn parse_arg<T>(arg: &str) -> Result<T, CliError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    arg.parse::<T>().map_err(|e| CliError::InvalidArgument {
        arg: arg.to_string(),
        reason: e.to_string(),
    })
}
