use crate::report::{chart::DEFAULT_CHART_WIDTH, DEFAULT_BANDWIDTH};
use crate::Arguments;
use clap::{
    arg, crate_authors, crate_description, crate_name, crate_version, value_parser, Arg,
    ArgMatches, Command,
};
use std::ffi::OsString;

const MIN_CHART_WIDTH: u16 = 10;
const MAX_CHART_WIDTH: u16 = 200;

pub struct CLIParser {
    command: Command,
}

impl CLIParser {
    pub fn new() -> Self {
        let command = Self::create_base_command();
        let command = Self::register_arguments(command);
        CLIParser { command }
    }

    pub fn parse<I, T>(&mut self, itr: I) -> Arguments
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self
            .command
            .try_get_matches_from_mut(itr)
            .unwrap_or_else(|e| e.exit());
        Self::extract_arguments(&matches)
    }

    fn register_arguments(command: Command) -> Command {
        let command = Self::register_record_argument(command);
        let command = Self::register_bandwidth_argument(command);
        let command = Self::register_chart_width_argument(command);
        Self::register_no_chart_argument(command)
    }

    fn register_record_argument(command: Command) -> Command {
        command.arg(Self::create_record_argument())
    }

    fn register_bandwidth_argument(command: Command) -> Command {
        command.arg(Self::create_bandwidth_argument())
    }

    fn register_chart_width_argument(command: Command) -> Command {
        command.arg(Self::create_chart_width_argument())
    }

    fn register_no_chart_argument(command: Command) -> Command {
        command.arg(Self::create_no_chart_argument())
    }

    fn create_base_command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .author(crate_authors!())
            .about(crate_description!())
    }

    fn create_record_argument() -> Arg {
        Arg::new("record")
            .help("Comma separated telemetry record (temperature, pressure, altitude, battery). Read from stdin if omitted.")
            .value_parser(value_parser!(String))
            .allow_hyphen_values(true)
            .required(false)
    }

    fn create_bandwidth_argument() -> Arg {
        arg!(-b --bandwidth <BITS_PER_SECOND> "Link bandwidth in bits per second")
            .default_value(DEFAULT_BANDWIDTH.to_string())
            .value_parser(value_parser!(u32).range(1..))
    }

    fn create_chart_width_argument() -> Arg {
        arg!(chart_width: -w --chart_width <COLUMNS> "Width of the bar chart in columns")
            .default_value(DEFAULT_CHART_WIDTH.to_string())
            .value_parser(
                value_parser!(u16).range(i64::from(MIN_CHART_WIDTH)..=i64::from(MAX_CHART_WIDTH)),
            )
    }

    fn create_no_chart_argument() -> Arg {
        arg!(no_chart: --no_chart "Do not render the bar chart")
    }

    fn extract_arguments(matches: &ArgMatches) -> Arguments {
        Arguments {
            record: Self::extract_record_argument(matches),
            bandwidth: Self::extract_bandwidth_argument(matches),
            chart_width: Self::extract_chart_width_argument(matches),
            show_chart: !Self::extract_no_chart_argument(matches),
        }
    }

    fn extract_record_argument(matches: &ArgMatches) -> Option<String> {
        matches.get_one::<String>("record").cloned()
    }

    fn extract_bandwidth_argument(matches: &ArgMatches) -> u32 {
        matches
            .get_one::<u32>("bandwidth")
            .expect("Bandwidth must be provided, but was unset.")
            .to_owned()
    }

    fn extract_chart_width_argument(matches: &ArgMatches) -> usize {
        matches
            .get_one::<u16>("chart_width")
            .map(|&width| usize::from(width))
            .expect("Chart width must be provided, but was unset.")
    }

    fn extract_no_chart_argument(matches: &ArgMatches) -> bool {
        matches.get_flag("no_chart")
    }
}

impl Default for CLIParser {
    fn default() -> Self {
        Self::new()
    }
}
