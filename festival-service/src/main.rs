// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! CLI tool to mint, list and share festival greeting NFTs.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::{Context as _, Result};
use clap::Parser;
use festival_base::{
    catalog::DesignCatalog,
    data_types::{Currency, GreetingViewModel, ImageChoice},
    identifiers::{Address, TokenId},
    share::{build_share_url, ShareContext, SharePlatform},
    template::{self, TemplateValues},
};
use festival_core::{
    assemble_for_account, form::Submission, AssemblyPolicy, FormController, GreetingsContext,
};
use festival_ledger::{client::EvmGreetingLedger, ipfs::IpfsUploader, GreetingLedger};
use festival_service::config::{Config, Overrides};
use tracing::info;

/// Festival greetings CLI
#[derive(Parser, Debug)]
#[command(name = "festival-greetings", version)]
struct Options {
    #[command(flatten)]
    ledger: LedgerOptions,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Args, Debug, Clone)]
struct LedgerOptions {
    /// JSON-RPC URL of the EVM node
    #[arg(long, env = "FESTIVAL_RPC_URL", global = true)]
    rpc_url: Option<String>,

    /// Address of the greetings contract
    #[arg(long, env = "FESTIVAL_CONTRACT", global = true)]
    contract: Option<Address>,

    /// Private key signing mint transactions
    #[arg(long, env = "FESTIVAL_PRIVATE_KEY", hide_env_values = true, global = true)]
    private_key: Option<String>,

    /// Account whose greetings are listed
    #[arg(long, global = true)]
    account: Option<Address>,

    /// Path to a TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// The maximal number of greetings fetched simultaneously
    #[arg(long, global = true)]
    max_concurrent_fetches: Option<usize>,

    /// Either `existence-checked` or `direct`
    #[arg(long, global = true)]
    policy: Option<AssemblyPolicy>,

    /// URL of the IPFS HTTP API receiving uploaded artwork
    #[arg(long, env = "FESTIVAL_IPFS_API_URL", global = true)]
    ipfs_api_url: Option<String>,

    /// Project id authenticating uploads to the IPFS API
    #[arg(long, env = "FESTIVAL_IPFS_PROJECT_ID", global = true)]
    ipfs_project_id: Option<String>,

    /// Project secret authenticating uploads to the IPFS API
    #[arg(
        long,
        env = "FESTIVAL_IPFS_PROJECT_SECRET",
        hide_env_values = true,
        global = true
    )]
    ipfs_project_secret: Option<String>,
}

#[derive(clap::Subcommand, Debug, Clone)]
enum Command {
    /// List the built-in designs
    Designs,
    /// Render a design with the given text
    Preview(PreviewOptions),
    /// Mint a new greeting
    Mint(MintOptions),
    /// Show the greetings sent and received by an account
    List(ListOptions),
    /// Print share links for a greeting
    Share(ShareOptions),
}

#[derive(clap::Args, Debug, Clone)]
struct PreviewOptions {
    /// Id of the design
    #[arg(long, default_value = "1")]
    design: u32,

    #[arg(long, default_value = "Festival")]
    festival: String,

    #[arg(long, default_value = "Your Message")]
    message: String,

    /// Date written on the greeting. Defaults to today
    #[arg(long)]
    date: Option<String>,

    /// Path to write the SVG to instead of standard output
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(clap::Args, Debug, Clone)]
struct MintOptions {
    /// Address of the recipient
    #[arg(long)]
    to: String,

    #[arg(long)]
    festival: String,

    #[arg(long)]
    message: String,

    /// Name of the sender
    #[arg(long, default_value = "")]
    from_name: String,

    /// Id of a built-in design
    #[arg(long, conflicts_with_all = ["svg_file", "ipfs", "image_file"])]
    design: Option<u32>,

    /// Path to a custom SVG design
    #[arg(long, conflicts_with_all = ["ipfs", "image_file"])]
    svg_file: Option<PathBuf>,

    /// IPFS content id of pinned artwork
    #[arg(long, conflicts_with = "image_file")]
    ipfs: Option<String>,

    /// Path to artwork uploaded to IPFS before minting
    #[arg(long)]
    image_file: Option<PathBuf>,

    /// Amount paid along with the greeting
    #[arg(long, default_value = "")]
    amount: String,

    #[arg(long, default_value = "USD")]
    currency: Currency,
}

#[derive(clap::Args, Debug, Clone)]
struct ListOptions {
    /// Print the greetings as JSON
    #[arg(long)]
    json: bool,
}

#[derive(clap::Args, Debug, Clone)]
struct ShareOptions {
    /// Id of the greeting
    #[arg(long)]
    token: TokenId,

    /// Platform to share on. All platforms if omitted
    #[arg(long)]
    platform: Option<SharePlatform>,
}

fn main() -> Result<()> {
    festival_base::tracing::init("festival-greetings");
    let options = Options::parse();
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(options.run())
}

impl Options {
    async fn run(self) -> Result<()> {
        let config = self.ledger.config()?;
        match self.command {
            Command::Designs => {
                for design in DesignCatalog::builtin().list() {
                    println!("{:>3}  {}", design.id, design.name);
                }
                Ok(())
            }
            Command::Preview(options) => options.run(),
            Command::Mint(options) => options.run(&self.ledger, config).await,
            Command::List(options) => options.run(&self.ledger, config).await,
            Command::Share(options) => options.run(config).await,
        }
    }
}

impl LedgerOptions {
    fn config(&self) -> Result<Config> {
        let overrides = Overrides {
            rpc_url: self.rpc_url.clone(),
            contract: self.contract,
            account: self.account,
            ipfs_api_url: self.ipfs_api_url.clone(),
            ipfs_project_id: self.ipfs_project_id.clone(),
            ipfs_project_secret: self.ipfs_project_secret.clone(),
            max_concurrent_fetches: self.max_concurrent_fetches,
            policy: self.policy,
        };
        Ok(Config::load(self.config.as_deref(), overrides)?)
    }

    /// Connects to the ledger, with a signer if a private key is given.
    fn connect(&self, config: &Config) -> Result<EvmGreetingLedger> {
        let contract = config.contract()?;
        let ledger = match &self.private_key {
            Some(private_key) => {
                EvmGreetingLedger::with_signer(&config.rpc_url, contract, private_key)?
            }
            None => EvmGreetingLedger::new(&config.rpc_url, contract)?,
        };
        Ok(ledger)
    }
}

fn context(ledger: Arc<dyn GreetingLedger>, config: &Config) -> GreetingsContext {
    GreetingsContext::new(ledger, config.view.clone())
}

fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

impl PreviewOptions {
    fn run(&self) -> Result<()> {
        let design = DesignCatalog::builtin().get(self.design)?;
        let date = self.date.clone().unwrap_or_else(today);
        let values = TemplateValues::new(&self.festival, &self.message, &date);
        let svg = template::render_preview(design, &values);
        match &self.output {
            Some(path) => {
                fs_err::write(path, &svg)?;
                eprintln!("Wrote preview of {:?} to {}", design.name, path.display());
            }
            None => println!("{svg}"),
        }
        Ok(())
    }
}

impl MintOptions {
    async fn run(&self, options: &LedgerOptions, config: Config) -> Result<()> {
        let ledger = options.connect(&config)?;
        let sender = ledger.sender();
        let mut form = FormController::new(context(Arc::new(ledger), &config), sender);
        let draft = form.draft_mut();
        draft.recipient = self.to.clone();
        draft.festival_type = self.festival.clone();
        draft.message = self.message.clone();
        draft.from_name = self.from_name.clone();
        draft.amount = self.amount.clone();
        draft.currency = self.currency;
        if let Some(design) = self.design {
            draft.design_id = design;
        }
        draft.image = match (&self.svg_file, &self.ipfs, &self.image_file) {
            (Some(path), _, _) => ImageChoice::CustomSvg(fs_err::read_to_string(path)?),
            (None, Some(content_id), _) => ImageChoice::External(content_id.clone()),
            (None, None, Some(path)) => ImageChoice::External(upload(&config, path).await?),
            (None, None, None) => ImageChoice::Design,
        };
        let signed_by = form.preview_sender();

        match form.submit().await {
            Ok(Submission { receipt, notice }) => {
                eprintln!("{}: {}", notice.title, notice.description);
                eprintln!("From {signed_by}");
                println!("{}", receipt.transaction_hash);
                if let Some(token_id) = receipt.token_id {
                    info!("greeting {token_id} minted");
                    println!("{token_id}");
                }
                Ok(())
            }
            Err(error) => {
                let notice = error.notice();
                eprintln!("{}: {}", notice.title, notice.description);
                Err(error.into())
            }
        }
    }
}

/// Uploads the artwork at `path` to IPFS and returns its content id.
async fn upload(config: &Config, path: &Path) -> Result<String> {
    let uploader = IpfsUploader::new(&config.ipfs_api_url, config.ipfs_credentials.clone())?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "artwork".to_string());
    let content = fs_err::read(path)?;
    let content_id = uploader
        .add(&file_name, content)
        .await
        .with_context(|| format!("failed to upload {}", path.display()))?;
    info!("uploaded {} as {content_id}", path.display());
    Ok(content_id)
}

impl ListOptions {
    async fn run(&self, options: &LedgerOptions, config: Config) -> Result<()> {
        let ledger = options.connect(&config)?;
        let account = config
            .account
            .or(ledger.sender())
            .context("pass --account or a private key to choose whose greetings to list")?;
        let views = assemble_for_account(&context(Arc::new(ledger), &config), account).await;
        if self.json {
            println!("{}", serde_json::to_string_pretty(&views)?);
            return Ok(());
        }
        println!("Sent by {account}:");
        print_greetings(&views.sent);
        println!("Received by {account}:");
        print_greetings(&views.received);
        Ok(())
    }
}

fn print_greetings(views: &[GreetingViewModel]) {
    if views.is_empty() {
        println!("  (none)");
    }
    for view in views {
        println!(
            "  #{} {} [{}] from {}: {}",
            view.token_id, view.festival, view.design_label, view.sender, view.message
        );
    }
}

impl ShareOptions {
    async fn run(&self, config: Config) -> Result<()> {
        let ledger = EvmGreetingLedger::new(&config.rpc_url, config.contract()?)?;
        let record = ledger
            .record(self.token)
            .await
            .with_context(|| format!("failed to read greeting {}", self.token))?;
        let context = ShareContext::new(
            &record.festival,
            &record.message,
            &config.view.share_base_url,
            record.token_id,
        );
        let platforms = match self.platform {
            Some(platform) => vec![platform],
            None => SharePlatform::ALL.to_vec(),
        };
        for platform in platforms {
            println!("{platform}: {}", build_share_url(platform, &context));
        }
        Ok(())
    }
}
