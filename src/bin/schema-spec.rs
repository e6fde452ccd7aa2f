use std::process::ExitCode;

use schema_spec::catalog::Catalog;
use schema_spec::check::run;
use schema_spec::config::Config;

fn main() -> ExitCode {
    let config = match Config::from_args_and_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {:#}", e);
            return ExitCode::from(2);
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    let catalog = Catalog::with_builtin();
    let mut stdout = std::io::stdout().lock();

    match run(&config, &catalog, &mut stdout) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(2)
        }
    }
}
