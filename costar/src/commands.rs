use crate::CLAP_STYLING;
use clap::{arg, command, value_parser};

pub(crate) fn command_argument_builder() -> clap::Command {
    clap::Command::new("costar")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("costar")
        .styles(CLAP_STYLING)
        .arg(arg!(-q --"quiet" "Suppress banner and non-essential output").required(false))
        .subcommand_required(false)
        .subcommand(
            command!("trace")
                .about("Crawl two actors and report their degrees of separation")
                .arg(
                    arg!(--"from" <URL>)
                        .required(true)
                        .help("Filmography URL of the first actor"),
                )
                .arg(
                    arg!(--"to" <URL>)
                        .required(true)
                        .help("Filmography URL of the second actor"),
                )
                .arg(
                    arg!(-w --"workers" <COUNT>)
                        .required(false)
                        .value_parser(value_parser!(usize))
                        .default_value("8")
                        .help("Maximum concurrent work fetches per seed"),
                )
                .arg(
                    arg!(-i --"interval" <SECONDS>)
                        .required(false)
                        .value_parser(value_parser!(u64))
                        .default_value("5")
                        .help("Progress report interval"),
                )
                .arg(
                    arg!(-t --"timeout" <SECONDS>)
                        .required(false)
                        .value_parser(value_parser!(u64))
                        .default_value("10")
                        .help("Per-request timeout"),
                )
                .arg(arg!(--"no-progress" "Disable periodic progress output").required(false))
                .arg(arg!(--"json" "Emit the trace report as JSON").required(false)),
        )
        .subcommand(
            command!("crawl")
                .about("Crawl a single actor's one-hop co-star neighborhood")
                .arg(
                    arg!(-u --"url" <URL>)
                        .required(true)
                        .help("Filmography URL of the actor"),
                )
                .arg(
                    arg!(-w --"workers" <COUNT>)
                        .required(false)
                        .value_parser(value_parser!(usize))
                        .default_value("8")
                        .help("Maximum concurrent work fetches"),
                )
                .arg(
                    arg!(-t --"timeout" <SECONDS>)
                        .required(false)
                        .value_parser(value_parser!(u64))
                        .default_value("10")
                        .help("Per-request timeout"),
                )
                .arg(arg!(--"json" "Emit the crawl summary as JSON").required(false)),
        )
}
