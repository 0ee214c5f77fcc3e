use crate::config::ConnectionSettings;
use crate::core::session::Protocol;
use crate::domain::ports::CommandHandler;
use crate::utils::error::{CicsError, Result};
use crate::utils::logger::LogFormat;
use crate::utils::validation::{require_positional, Validate};
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cics-cmci")]
#[command(about = "Manage CICS resources through the CMCI REST API")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Print the response as JSON on stdout
    #[arg(long, global = true)]
    pub rfj: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log output format
    #[arg(long, value_enum, global = true, default_value = "compact")]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// Connection options shared by every command. Unset values come from the
/// selected profile.
#[derive(Args, Debug, Clone, Default)]
pub struct ConnectionArgs {
    /// CMCI server host name
    #[arg(long, env = "CICS_HOST", global = true)]
    pub host: Option<String>,

    /// CMCI server port
    #[arg(long, env = "CICS_PORT", global = true)]
    pub port: Option<u16>,

    /// Mainframe user name
    #[arg(long, short = 'u', env = "CICS_USER", global = true)]
    pub user: Option<String>,

    /// Mainframe password
    #[arg(long, env = "CICS_PASSWORD", global = true, hide_env_values = true)]
    pub password: Option<String>,

    #[arg(long, value_enum, env = "CICS_PROTOCOL", global = true)]
    pub protocol: Option<Protocol>,

    /// Reject self-signed certificates
    #[arg(long, env = "CICS_REJECT_UNAUTHORIZED", global = true, action = ArgAction::Set)]
    pub reject_unauthorized: Option<bool>,

    /// CICS region to address
    #[arg(long, env = "CICS_REGION_NAME", global = true)]
    pub region_name: Option<String>,

    /// CICSplex containing the region
    #[arg(long, env = "CICS_PLEX", global = true)]
    pub cics_plex: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Name of the connection profile to use
    #[arg(long, global = true)]
    pub cics_profile: Option<String>,

    /// Path of the TOML profile file
    #[arg(long, env = "CICS_PROFILE_FILE", global = true)]
    pub profile_file: Option<PathBuf>,
}

impl From<&ConnectionArgs> for ConnectionSettings {
    fn from(args: &ConnectionArgs) -> Self {
        ConnectionSettings {
            host: args.host.clone(),
            port: args.port,
            user: args.user.clone(),
            password: args.password.clone(),
            protocol: args.protocol,
            reject_unauthorized: args.reject_unauthorized,
            region_name: args.region_name.clone(),
            cics_plex: args.cics_plex.clone(),
            timeout_seconds: args.timeout,
            profile_name: args.cics_profile.clone(),
            profile_file: args.profile_file.clone(),
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Define new resources to CICS
    #[command(subcommand)]
    Define(DefineCommand),
    /// Delete resource definitions from the CSD
    #[command(subcommand)]
    Delete(DeleteCommand),
    /// Install resource definitions into a region
    #[command(subcommand)]
    Install(InstallCommand),
    /// Discard installed resources from a region
    #[command(subcommand)]
    Discard(DiscardCommand),
    /// Enable installed resources
    #[command(subcommand)]
    Enable(EnableCommand),
    /// Disable installed resources
    #[command(subcommand)]
    Disable(DisableCommand),
    /// Refresh installed programs
    #[command(subcommand)]
    Refresh(RefreshCommand),
    /// Read resources from a region or CICSplex
    #[command(subcommand)]
    Get(GetCommand),
    /// Add a CSD group to a CSD list
    #[command(subcommand)]
    AddToList(AddToListCommand),
    /// Remove a CSD group from a CSD list
    #[command(subcommand)]
    RemoveFromList(RemoveFromListCommand),
}

#[derive(Subcommand, Debug, Clone)]
pub enum DefineCommand {
    Program(ProgramDefinitionArgs),
    Transaction(DefineTransactionArgs),
    UrimapServer(UrimapServerArgs),
    UrimapClient(UrimapClientArgs),
    UrimapPipeline(UrimapPipelineArgs),
    Webservice(DefineWebServiceArgs),
}

#[derive(Subcommand, Debug, Clone)]
pub enum DeleteCommand {
    Program(ProgramDefinitionArgs),
    Transaction(TransactionDefinitionArgs),
    Urimap(UrimapDefinitionArgs),
    Webservice(WebServiceDefinitionArgs),
}

#[derive(Subcommand, Debug, Clone)]
pub enum InstallCommand {
    Program(ProgramDefinitionArgs),
    Transaction(TransactionDefinitionArgs),
    Urimap(UrimapDefinitionArgs),
    Webservice(WebServiceDefinitionArgs),
}

#[derive(Subcommand, Debug, Clone)]
pub enum DiscardCommand {
    Program(ProgramNameArgs),
    Transaction(TransactionNameArgs),
    Urimap(UrimapNameArgs),
}

#[derive(Subcommand, Debug, Clone)]
pub enum EnableCommand {
    Urimap(UrimapNameArgs),
}

#[derive(Subcommand, Debug, Clone)]
pub enum DisableCommand {
    Urimap(UrimapNameArgs),
}

#[derive(Subcommand, Debug, Clone)]
pub enum RefreshCommand {
    Program(ProgramNameArgs),
}

#[derive(Subcommand, Debug, Clone)]
pub enum GetCommand {
    Resource(ResourceArgs),
}

#[derive(Subcommand, Debug, Clone)]
pub enum AddToListCommand {
    #[command(name = "csdGroup")]
    CsdGroup(CsdGroupListArgs),
}

#[derive(Subcommand, Debug, Clone)]
pub enum RemoveFromListCommand {
    #[command(name = "csdGroup")]
    CsdGroup(CsdGroupListArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct ProgramDefinitionArgs {
    #[arg(value_name = "programName")]
    pub program_name: String,
    #[arg(value_name = "csdGroup")]
    pub csd_group: String,
}

#[derive(Args, Debug, Clone, Default)]
pub struct DefineTransactionArgs {
    #[arg(value_name = "transactionName")]
    pub transaction_name: String,
    #[arg(value_name = "programName")]
    pub program_name: String,
    #[arg(value_name = "csdGroup")]
    pub csd_group: String,
}

#[derive(Args, Debug, Clone, Default)]
pub struct TransactionDefinitionArgs {
    #[arg(value_name = "transactionName")]
    pub transaction_name: String,
    #[arg(value_name = "csdGroup")]
    pub csd_group: String,
}

#[derive(Args, Debug, Clone, Default)]
pub struct UrimapDefinitionArgs {
    #[arg(value_name = "urimapName")]
    pub urimap_name: String,
    #[arg(value_name = "csdGroup")]
    pub csd_group: String,
}

#[derive(Args, Debug, Clone, Default)]
pub struct WebServiceDefinitionArgs {
    #[arg(value_name = "webserviceName")]
    pub webservice_name: String,
    #[arg(value_name = "csdGroup")]
    pub csd_group: String,
}

/// Arguments every URIMAP definition takes, whatever its usage.
#[derive(Args, Debug, Clone, Default)]
pub struct UrimapArgs {
    #[arg(value_name = "urimapName")]
    pub urimap_name: String,
    #[arg(value_name = "csdGroup")]
    pub csd_group: String,

    /// Path component of the URI, e.g. /app/orders
    #[arg(long, value_name = "urimapPath")]
    pub urimap_path: String,

    /// Host component of the URI
    #[arg(long, value_name = "urimapHost")]
    pub urimap_host: String,

    /// http or https (default http)
    #[arg(long, value_name = "urimapScheme")]
    pub urimap_scheme: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    /// Install the URIMAP enabled (default true)
    #[arg(long, action = ArgAction::Set)]
    pub enable: Option<bool>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct UrimapServerArgs {
    #[command(flatten)]
    pub urimap: UrimapArgs,

    /// Program that handles the request
    #[arg(long, value_name = "programName")]
    pub program_name: String,

    #[arg(long, value_name = "transactionName")]
    pub transaction_name: Option<String>,

    #[arg(long)]
    pub tcpipservice: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct UrimapClientArgs {
    #[command(flatten)]
    pub urimap: UrimapArgs,

    /// NO or BASIC
    #[arg(long)]
    pub authenticate: Option<String>,

    /// Label of the client certificate
    #[arg(long)]
    pub certificate: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct UrimapPipelineArgs {
    #[command(flatten)]
    pub urimap: UrimapArgs,

    #[arg(long, value_name = "pipelineName")]
    pub pipeline_name: String,

    #[arg(long, value_name = "transactionName")]
    pub transaction_name: Option<String>,

    #[arg(long, value_name = "webserviceName")]
    pub webservice_name: Option<String>,

    #[arg(long)]
    pub tcpipservice: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct DefineWebServiceArgs {
    #[arg(value_name = "webserviceName")]
    pub webservice_name: String,
    #[arg(value_name = "csdGroup")]
    pub csd_group: String,

    #[arg(long, value_name = "pipelineName")]
    pub pipeline_name: String,

    /// HFS path of the web service binding file
    #[arg(long)]
    pub wsbind: String,

    /// Validate SOAP messages against the WSDL
    #[arg(long)]
    pub validation: bool,

    #[arg(long)]
    pub description: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ProgramNameArgs {
    #[arg(value_name = "programName")]
    pub program_name: String,
}

#[derive(Args, Debug, Clone, Default)]
pub struct TransactionNameArgs {
    #[arg(value_name = "transactionName")]
    pub transaction_name: String,
}

#[derive(Args, Debug, Clone, Default)]
pub struct UrimapNameArgs {
    #[arg(value_name = "urimapName")]
    pub urimap_name: String,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ResourceArgs {
    /// CMCI resource table, e.g. CICSProgram
    #[arg(value_name = "resourceName")]
    pub resource_name: String,

    /// CMCI filter, e.g. "PROGRAM=PGM*"
    #[arg(long)]
    pub criteria: Option<String>,

    #[arg(long)]
    pub parameter: Option<String>,

    /// Treat an empty result as an error
    #[arg(long)]
    pub fail_on_no_data: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct CsdGroupListArgs {
    #[arg(value_name = "name")]
    pub name: String,
    #[arg(value_name = "csdList")]
    pub csd_list: String,
}

impl Command {
    pub fn into_handler(self) -> Box<dyn CommandHandler> {
        match self {
            Command::Define(command) => Box::new(command),
            Command::Delete(command) => Box::new(command),
            Command::Install(command) => Box::new(command),
            Command::Discard(command) => Box::new(command),
            Command::Enable(command) => Box::new(command),
            Command::Disable(command) => Box::new(command),
            Command::Refresh(command) => Box::new(command),
            Command::Get(command) => Box::new(command),
            Command::AddToList(command) => Box::new(command),
            Command::RemoveFromList(command) => Box::new(command),
        }
    }
}

/// Turn a clap parse failure into the tool's syntax error. `None` means
/// clap printed help or version and the process should exit normally.
pub fn syntax_error(err: &clap::Error) -> Option<CicsError> {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => None,
        ErrorKind::MissingRequiredArgument => {
            let missing = match err.get(ContextKind::InvalidArg) {
                Some(ContextValue::Strings(values)) => values.first().cloned(),
                Some(ContextValue::String(value)) => Some(value.clone()),
                _ => None,
            };
            Some(match missing {
                Some(arg) if arg.starts_with("--") => CicsError::MissingOptionError {
                    option: arg.split_whitespace().next().unwrap_or(&arg).to_string(),
                },
                Some(arg) => CicsError::MissingPositionalError {
                    argument: arg.trim_matches(|c| c == '<' || c == '>').to_string(),
                },
                None => CicsError::SyntaxError {
                    message: err.to_string(),
                },
            })
        }
        _ => Some(CicsError::SyntaxError {
            message: err.to_string().trim_start_matches("error: ").trim_end().to_string(),
        }),
    }
}

impl Validate for Cli {
    fn validate(&self) -> Result<()> {
        self.command.validate()
    }
}

impl Validate for Command {
    fn validate(&self) -> Result<()> {
        match self {
            Command::Define(DefineCommand::Program(args)) => args.validate(),
            Command::Define(DefineCommand::Transaction(args)) => {
                require_positional("transactionName", &args.transaction_name)?;
                require_positional("programName", &args.program_name)?;
                require_positional("csdGroup", &args.csd_group)
            }
            Command::Define(DefineCommand::UrimapServer(args)) => args.urimap.validate(),
            Command::Define(DefineCommand::UrimapClient(args)) => args.urimap.validate(),
            Command::Define(DefineCommand::UrimapPipeline(args)) => args.urimap.validate(),
            Command::Define(DefineCommand::Webservice(args)) => {
                require_positional("webserviceName", &args.webservice_name)?;
                require_positional("csdGroup", &args.csd_group)
            }
            Command::Delete(DeleteCommand::Program(args))
            | Command::Install(InstallCommand::Program(args)) => args.validate(),
            Command::Delete(DeleteCommand::Transaction(args))
            | Command::Install(InstallCommand::Transaction(args)) => {
                require_positional("transactionName", &args.transaction_name)?;
                require_positional("csdGroup", &args.csd_group)
            }
            Command::Delete(DeleteCommand::Urimap(args))
            | Command::Install(InstallCommand::Urimap(args)) => {
                require_positional("urimapName", &args.urimap_name)?;
                require_positional("csdGroup", &args.csd_group)
            }
            Command::Delete(DeleteCommand::Webservice(args))
            | Command::Install(InstallCommand::Webservice(args)) => {
                require_positional("webserviceName", &args.webservice_name)?;
                require_positional("csdGroup", &args.csd_group)
            }
            Command::Discard(DiscardCommand::Program(args))
            | Command::Refresh(RefreshCommand::Program(args)) => {
                require_positional("programName", &args.program_name)
            }
            Command::Discard(DiscardCommand::Transaction(args)) => {
                require_positional("transactionName", &args.transaction_name)
            }
            Command::Discard(DiscardCommand::Urimap(args))
            | Command::Enable(EnableCommand::Urimap(args))
            | Command::Disable(DisableCommand::Urimap(args)) => {
                require_positional("urimapName", &args.urimap_name)
            }
            Command::Get(GetCommand::Resource(args)) => {
                require_positional("resourceName", &args.resource_name)
            }
            Command::AddToList(AddToListCommand::CsdGroup(args))
            | Command::RemoveFromList(RemoveFromListCommand::CsdGroup(args)) => {
                require_positional("name", &args.name)?;
                require_positional("csdList", &args.csd_list)
            }
        }
    }
}

impl Validate for ProgramDefinitionArgs {
    fn validate(&self) -> Result<()> {
        require_positional("programName", &self.program_name)?;
        require_positional("csdGroup", &self.csd_group)
    }
}

impl Validate for UrimapArgs {
    fn validate(&self) -> Result<()> {
        require_positional("urimapName", &self.urimap_name)?;
        require_positional("csdGroup", &self.csd_group)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> std::result::Result<Cli, CicsError> {
        let mut argv = vec!["cics-cmci"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).map_err(|e| syntax_error(&e).unwrap())
    }

    #[test]
    fn test_parse_define_program() {
        let cli = parse(&["define", "program", "PGM1", "GRP1", "--region-name", "RGN1"]).unwrap();
        assert_eq!(cli.connection.region_name.as_deref(), Some("RGN1"));
        match cli.command {
            Command::Define(DefineCommand::Program(args)) => {
                assert_eq!(args.program_name, "PGM1");
                assert_eq!(args.csd_group, "GRP1");
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_missing_positional_names_the_argument() {
        let err = parse(&["define", "program", "PGM1"]).unwrap_err();
        assert_eq!(err.exit_code(), 1);
        let message = err.to_string();
        assert!(message.contains("Missing Positional Argument"));
        assert!(message.contains("csdGroup"));
    }

    #[test]
    fn test_all_positionals_missing_reports_the_first() {
        let err = parse(&["discard", "transaction"]).unwrap_err();
        assert!(matches!(err, CicsError::MissingPositionalError { ref argument } if argument == "transactionName"));
    }

    #[test]
    fn test_missing_required_option() {
        let err = parse(&["define", "urimap-server", "URI1", "GRP1", "--urimap-path", "/a"]).unwrap_err();
        assert!(err.to_string().contains("Missing Required Option"));
    }

    #[test]
    fn test_empty_positional_counts_as_missing() {
        let cli = parse(&["add-to-list", "csdGroup", "GRP1", ""]).unwrap();
        let err = cli.validate().unwrap_err();
        assert!(matches!(err, CicsError::MissingPositionalError { ref argument } if argument == "csdList"));
    }

    #[test]
    fn test_unknown_subcommand_is_a_syntax_error() {
        let err = parse(&["define", "queue", "Q1"]).unwrap_err();
        assert!(matches!(err, CicsError::SyntaxError { .. }));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_help_is_not_an_error() {
        let err = Cli::try_parse_from(["cics-cmci", "--help"]).unwrap_err();
        assert!(syntax_error(&err).is_none());
    }

    #[test]
    fn test_connection_args_become_settings() {
        let cli = parse(&[
            "enable",
            "urimap",
            "URI1",
            "--host",
            "cics.example.com",
            "--port",
            "1490",
            "--protocol",
            "http",
            "--reject-unauthorized",
            "false",
            "--cics-profile",
            "dev",
        ])
        .unwrap();
        let settings = ConnectionSettings::from(&cli.connection);
        assert_eq!(settings.host.as_deref(), Some("cics.example.com"));
        assert_eq!(settings.port, Some(1490));
        assert_eq!(settings.protocol, Some(Protocol::Http));
        assert_eq!(settings.reject_unauthorized, Some(false));
        assert_eq!(settings.profile_name.as_deref(), Some("dev"));
    }

    #[test]
    fn test_urimap_enable_flag_takes_a_value() {
        let cli = parse(&[
            "define",
            "urimap-client",
            "URI1",
            "GRP1",
            "--urimap-path",
            "/a",
            "--urimap-host",
            "example.com",
            "--enable",
            "false",
        ])
        .unwrap();
        match cli.command {
            Command::Define(DefineCommand::UrimapClient(args)) => {
                assert_eq!(args.urimap.enable, Some(false))
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
