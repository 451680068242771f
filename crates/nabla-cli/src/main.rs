use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use std::path::PathBuf;

use nabla_cli::classify::input::ClassifyTrainConfig;
use nabla_cli::classify::train;
use nabla_cli::forward::demo;

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default()
            .filter_or("NABLA_LOG", "error,nabla=info,nabla_cli=info,nabla_classifiers=info"),
    )
    .init();

    let matches = Command::new("nabla")
        .version(clap::crate_version!())
        .about("\u{2207} nabla - Deep-Learning Primitives for Image Classification")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("classify")
                .about("Train and evaluate the logistic-regression image classifier")
                .subcommand(
                    Command::new("train")
                        .about("Run the gradient-descent learning-rate sweep")
                        .arg(
                            Arg::new("config")
                                .help("Path to training configuration file")
                                .required(false)
                                .value_parser(clap::value_parser!(PathBuf))
                                .value_hint(ValueHint::FilePath),
                        )
                        .arg(
                            Arg::new("train_data")
                                .short('d')
                                .long("train_data")
                                .value_parser(clap::builder::NonEmptyStringValueParser::new())
                                .help(
                                    "Path to training data. Overrides the training data file \
                                     specified in the configuration file.",
                                )
                                .value_hint(ValueHint::FilePath),
                        )
                        .arg(
                            Arg::new("test_data")
                                .short('t')
                                .long("test_data")
                                .value_parser(clap::builder::NonEmptyStringValueParser::new())
                                .help(
                                    "Path to test data. Overrides the test data file specified \
                                     in the configuration file.",
                                )
                                .value_hint(ValueHint::FilePath),
                        )
                        .arg(
                            Arg::new("synthetic")
                                .long("synthetic")
                                .help("Generate a seeded synthetic dataset instead of reading files.")
                                .action(ArgAction::SetTrue),
                        )
                        .arg(
                            Arg::new("seed")
                                .long("seed")
                                .help("Seed for the synthetic dataset generator.")
                                .value_parser(clap::value_parser!(u64)),
                        )
                        .arg(
                            Arg::new("output_report")
                                .short('o')
                                .long("output_report")
                                .value_parser(clap::builder::NonEmptyStringValueParser::new())
                                .help(
                                    "File path that the HTML report will be written to. \
                                     Overrides the path specified in the configuration file.",
                                )
                                .value_hint(ValueHint::FilePath),
                        )
                        .arg(
                            Arg::new("no_report")
                                .long("no-report")
                                .help("Disable HTML report generation.")
                                .action(ArgAction::SetTrue),
                        ),
                ),
        )
        .subcommand(
            Command::new("layers")
                .about("Run the convolutional forward-pass building blocks")
                .subcommand(
                    Command::new("demo")
                        .about("Pad, convolve, and pool seeded random tensors")
                        .arg(
                            Arg::new("seed")
                                .long("seed")
                                .help("Seed for the random input tensors.")
                                .value_parser(clap::value_parser!(u64)),
                        ),
                ),
        )
        .help_template(
            "{usage-heading} {usage}\n\n\
             {about-with-newline}\n\
             Version {version}\n\n\
             {all-args}{after-help}",
        )
        .get_matches();

    match matches.subcommand() {
        Some(("classify", sub_m)) => handle_classify(sub_m),
        Some(("layers", sub_m)) => handle_layers(sub_m),
        _ => unreachable!("Subcommand is required by CLI configuration"),
    }
}

fn handle_classify(matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("train", train_matches)) => {
            let Some(config_path) = train_matches.get_one::<PathBuf>("config") else {
                eprintln!("No config file provided; printing a template configuration.");
                println!(
                    "{}",
                    serde_json::to_string_pretty(&ClassifyTrainConfig::default())?
                );
                return Ok(());
            };
            log::info!("[nabla::classify] Training from config: {:?}", config_path);

            let config = ClassifyTrainConfig::from_arguments(config_path, train_matches)?;

            match train::run_training(&config) {
                Ok(_) => Ok(()),
                Err(e) => {
                    log::error!("Training failed: {:#}", e);
                    std::process::exit(1)
                }
            }
        }
        _ => unreachable!("Subcommand is required by CLI configuration"),
    }
}

fn handle_layers(matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("demo", demo_matches)) => {
            let seed = demo_matches.get_one::<u64>("seed").copied().unwrap_or(1);
            log::info!("[nabla::layers] Running forward-pass demo with seed {}", seed);

            match demo::run_demo(seed) {
                Ok(_) => Ok(()),
                Err(e) => {
                    log::error!("Demo failed: {:#}", e);
                    std::process::exit(1)
                }
            }
        }
        _ => unreachable!("Subcommand is required by CLI configuration"),
    }
}
