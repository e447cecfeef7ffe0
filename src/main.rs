use qsettings_decoder::cli;

fn main() {
    let cli = cli::parse_args();
    std::process::exit(cli::run(&cli));
}
