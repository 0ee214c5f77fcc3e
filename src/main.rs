use cics_cmci::config::cli::syntax_error;
use cics_cmci::config::ConnectionSettings;
use cics_cmci::core::runner::{render_failure_json, render_success};
use cics_cmci::utils::{logger, validation::Validate};
use cics_cmci::{CicsError, Cli, CommandRunner};
use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match syntax_error(&err) {
            Some(e) => exit_with(&e, false),
            None => err.exit(),
        },
    };

    logger::init_cli_logger(cli.verbose, cli.log_format);
    tracing::debug!("CLI arguments: {:?}", cli.command);

    let json_output = cli.rfj;
    if let Err(e) = cli.validate() {
        exit_with(&e, json_output);
    }

    let context = match ConnectionSettings::from(&cli.connection).resolve() {
        Ok(context) => context,
        Err(e) => exit_with(&e, json_output),
    };

    let runner = CommandRunner::new(cli.command.into_handler());
    let outcome = runner
        .run(&context.session, &context)
        .await
        .and_then(|response| render_success(&response, json_output));

    match outcome {
        Ok(output) => println!("{}", output),
        Err(e) => exit_with(&e, json_output),
    }
}

fn exit_with(e: &CicsError, json_output: bool) -> ! {
    tracing::error!(
        "Command failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    if json_output {
        println!("{}", render_failure_json(e));
    } else {
        eprintln!("{}", e.user_friendly_message());
        eprintln!("{}", e.recovery_suggestion());
    }
    std::process::exit(e.exit_code());
}
