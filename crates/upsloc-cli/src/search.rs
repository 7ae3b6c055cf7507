//! Handlers for the `search` and `render` subcommands.

use std::path::PathBuf;

use clap::Args;
use upsloc_core::{load_address, Address, DistanceUnit, RequestOption, SearchOptions, SearchRadius};
use upsloc_locator::{build_locator_request, LocatorClient, TransactionReference};

/// Origin address, from a YAML file, individual flags, or both.
///
/// Flags override the matching fields loaded from `--address-file`.
#[derive(Debug, Args)]
pub struct AddressArgs {
    /// YAML file with address fields (`address_line1`, `city`, ...)
    #[arg(long)]
    pub address_file: Option<PathBuf>,
    #[arg(long)]
    pub attention: Option<String>,
    #[arg(long)]
    pub building: Option<String>,
    #[arg(long)]
    pub line1: Option<String>,
    #[arg(long)]
    pub line2: Option<String>,
    #[arg(long)]
    pub line3: Option<String>,
    /// City or locality
    #[arg(long)]
    pub city: Option<String>,
    /// State or province code
    #[arg(long)]
    pub state: Option<String>,
    /// ISO country code (e.g., US)
    #[arg(long)]
    pub country: Option<String>,
    #[arg(long)]
    pub postal_code: Option<String>,
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    #[command(flatten)]
    pub address: AddressArgs,
    /// Search radius magnitude
    #[arg(long, default_value_t = 5)]
    pub radius: u32,
    /// Radius unit: KM or MI
    #[arg(long)]
    pub unit: DistanceUnit,
    /// Request option flags (1, 8, 16, 24, 32, 40, 48, 56 or 64)
    #[arg(long, default_value = "1")]
    pub option: RequestOption,
    /// Maximum number of locations to return
    #[arg(long, default_value_t = 15)]
    pub max: u32,
    /// Language code for translated fields
    #[arg(long, default_value = "eng")]
    pub language: String,
    /// Locale for translated fields
    #[arg(long, default_value = "en-US")]
    pub locale: String,
}

impl AddressArgs {
    /// Resolve the origin address.
    ///
    /// # Errors
    ///
    /// Returns an error if `--address-file` cannot be read or parsed.
    pub fn resolve(&self) -> anyhow::Result<Address> {
        let mut address = match &self.address_file {
            Some(path) => load_address(path)?,
            None => Address::default(),
        };

        let overrides = [
            (&mut address.attention_name, &self.attention),
            (&mut address.building_name, &self.building),
            (&mut address.address_line1, &self.line1),
            (&mut address.address_line2, &self.line2),
            (&mut address.address_line3, &self.line3),
            (&mut address.city, &self.city),
            (&mut address.state_province_code, &self.state),
            (&mut address.country_code, &self.country),
            (&mut address.postal_code, &self.postal_code),
        ];
        for (field, value) in overrides {
            if value.is_some() {
                field.clone_from(value);
            }
        }

        Ok(address)
    }
}

impl SearchArgs {
    pub fn radius(&self) -> SearchRadius {
        SearchRadius::new(self.radius, self.unit)
    }

    pub fn options(&self) -> SearchOptions {
        SearchOptions {
            request_option: self.option,
            max_list_size: self.max,
            language_code: self.language.clone(),
            locale: self.locale.clone(),
        }
    }
}

/// Run a live search and print the normalized results as JSON.
///
/// # Errors
///
/// Returns an error if the address cannot be resolved, the client cannot be
/// built, or the Locator call fails.
pub(crate) async fn run_search(
    config: &upsloc_core::AppConfig,
    args: &SearchArgs,
) -> anyhow::Result<()> {
    let address = args.address.resolve()?;
    let client = LocatorClient::from_config(config)
        .map_err(|e| anyhow::anyhow!("failed to build Locator client: {e}"))?;

    tracing::info!(
        env = %config.env,
        endpoint = client.endpoint_url(),
        radius = args.radius,
        unit = %args.unit,
        "running Locator search"
    );

    let results = client.search(&address, &args.radius(), &args.options()).await?;
    println!("{}", serde_json::to_string_pretty(&results)?);
    Ok(())
}

/// Print the request document for the given arguments.
///
/// # Errors
///
/// Returns an error if the address cannot be resolved or the document
/// cannot be rendered.
pub(crate) fn run_render(args: &SearchArgs) -> anyhow::Result<()> {
    let address = args.address.resolve()?;
    let xml = build_locator_request(
        &TransactionReference::generate(),
        &address,
        &args.radius(),
        &args.options(),
    )?;
    println!("{xml}");
    Ok(())
}
