use clap::Args;
use clap::builder::NonEmptyStringValueParser;
use cloudghost_providers::ClientCredentials;

#[derive(Debug, Clone, Args)]
pub struct AuthArgs {
    #[arg(
        long,
        value_parser = NonEmptyStringValueParser::new(),
        help = "Application (client) ID of the service principal"
    )]
    pub client_id: String,

    #[arg(
        long,
        value_parser = NonEmptyStringValueParser::new(),
        help = "Client secret of the service principal"
    )]
    pub client_secret: String,

    #[arg(
        long,
        value_parser = NonEmptyStringValueParser::new(),
        help = "Directory (tenant) ID"
    )]
    pub tenant_id: String,
}

impl AuthArgs {
    pub fn credentials(&self) -> ClientCredentials {
        ClientCredentials {
            client_id: self.client_id.clone(),
            client_secret: self.client_secret.clone(),
            tenant_id: self.tenant_id.clone(),
        }
    }
}

/// Storage account and container shared by every blob command
#[derive(Debug, Clone, Args)]
pub struct ContainerArgs {
    #[arg(
        short = 'a',
        long,
        value_parser = NonEmptyStringValueParser::new(),
        help = "Storage account name"
    )]
    pub account: String,

    #[arg(
        short = 'k',
        long,
        value_parser = NonEmptyStringValueParser::new(),
        help = "Storage account key (base64)"
    )]
    pub key: String,

    #[arg(
        short = 'c',
        long,
        value_parser = NonEmptyStringValueParser::new(),
        help = "Container name"
    )]
    pub container: String,
}

/// Bearer token and project shared by every GCP command
#[derive(Debug, Clone, Args)]
pub struct GcpTargetArgs {
    #[arg(
        long,
        value_parser = NonEmptyStringValueParser::new(),
        help = "GCP OAuth2 access token"
    )]
    pub token: String,

    #[arg(
        long,
        value_parser = NonEmptyStringValueParser::new(),
        help = "GCP project ID"
    )]
    pub project_id: String,
}
