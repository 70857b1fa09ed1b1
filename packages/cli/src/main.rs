//! `shop`: Paint Shop backend command-line client.
//!
//! Subcommands:
//!
//! - **`login`**, **`admin-login`**, **`register`**, **`logout`**, **`whoami`**
//!   manage the stored session.
//! - **`products`** lists, fetches and searches the backend catalogue.
//! - **`call`** invokes any catalogued endpoint by its `group.name` key.
//! - **`endpoints`** prints the endpoint catalogue.
//! - **`showcase`** prints the fixed showcase paints.
//! - **`search-link`** prints the storefront search URL for a query.
//!
//! The session (token, user, admin marker) is kept in a JSON file between
//! runs. Results are printed to stdout as pretty JSON; logs go to stderr.

use std::fs;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use paintshop::catalog::{self, Endpoint, CATALOG};
use paintshop::render::{render_catalog, render_product, render_showcase};
use paintshop::{showcase, ApiError, BodyShape, Context, Session};
use paintshop_api::ListQuery;
use paintshop_client::{
    ApiClient, ClientConfig, FilePart, FileStore, LogNavigator, Payload, Upload,
};
use serde_json::Value;

/// shop: Paint Shop backend CLI
#[derive(Parser)]
#[command(name = "shop", version, about, long_about = None)]
struct Cli {
    /// Backend base URL.
    #[arg(long, global = true, env = "PAINTSHOP_API_BASE")]
    api_base: Option<String>,

    /// Which login page an ended session points at: customer | admin
    #[arg(long, global = true, env = "PAINTSHOP_CONTEXT")]
    context: Option<Context>,

    /// Where the session is kept between runs.
    #[arg(long, global = true, env = "PAINTSHOP_SESSION_FILE")]
    session_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sign in as a customer and store the session.
    Login {
        #[arg(short, long)]
        email: String,
        #[arg(short, long, env = "PAINTSHOP_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Sign in to the admin console and store the session.
    AdminLogin {
        #[arg(short, long)]
        email: String,
        #[arg(short, long, env = "PAINTSHOP_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Create a customer account and store the session.
    Register {
        #[arg(short, long)]
        name: String,
        #[arg(short, long)]
        email: String,
        #[arg(short, long, env = "PAINTSHOP_PASSWORD", hide_env_values = true)]
        password: String,
        /// Defaults to --password.
        #[arg(long)]
        confirm: Option<String>,
    },

    /// Sign out and forget the stored session.
    Logout,

    /// Print the signed-in user as the backend sees it.
    Whoami,

    /// Browse the backend product catalogue.
    Products {
        #[command(subcommand)]
        command: ProductsCommand,
    },

    /// Call any catalogued endpoint.
    ///
    /// Examples:
    ///   shop call cart.update --arg id=7 --body '{"quantity":3}'
    ///   shop call admin.orders.list --query status=pending
    ///   shop call admin.gallery.upload --field title=Lobby --file image=./lobby.jpg
    Call {
        /// Catalogue key, e.g. `cart.add` or `admin.products.get`.
        key: String,

        /// Path slot value: NAME=VALUE. Repeat for each slot.
        #[arg(long = "arg", value_name = "NAME=VALUE")]
        args: Vec<String>,

        /// Query parameter: NAME=VALUE. Repeatable.
        #[arg(long = "query", value_name = "NAME=VALUE")]
        query: Vec<String>,

        /// JSON body. Pass `@path` to read it from a file.
        #[arg(long, value_name = "JSON")]
        body: Option<String>,

        /// Multipart text field: NAME=VALUE. Repeatable.
        #[arg(long = "field", value_name = "NAME=VALUE")]
        fields: Vec<String>,

        /// Multipart file: FIELD=PATH. Repeatable.
        #[arg(long = "file", value_name = "FIELD=PATH")]
        files: Vec<String>,
    },

    /// List catalogued endpoints, optionally for one group.
    Endpoints {
        /// Group name, e.g. `cart` or `admin.settings`.
        group: Option<String>,
    },

    /// Show the showcase paints, or one of them in detail.
    Showcase {
        /// Product slug, e.g. `royal-satin`.
        slug: Option<String>,

        /// Only products in this category.
        #[arg(long)]
        category: Option<String>,
    },

    /// Print the storefront search URL for a query.
    SearchLink { query: String },
}

#[derive(Subcommand)]
enum ProductsCommand {
    /// List products.
    List {
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        sort: Option<String>,
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        per_page: Option<u32>,
    },
    /// Fetch one product by slug.
    Get { slug: String },
    /// Search products by free text.
    Search { query: String },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "paintshop_client=info,paintshop_cli=info".into()),
        )
        .init();

    let cli = Cli::parse();

    // Offline subcommands never touch the session file.
    match &cli.command {
        Command::Endpoints { group } => {
            let entries: Vec<Endpoint> = match group {
                Some(g) => catalog::group(g).into_iter().copied().collect(),
                None => CATALOG.to_vec(),
            };
            if entries.is_empty() {
                fatal(&format!("no endpoints in group {:?}", group.as_deref().unwrap_or("")));
            }
            print!("{}", render_catalog(&entries));
            return;
        }
        Command::Showcase { slug, category } => {
            match slug {
                Some(slug) => match showcase::find(slug) {
                    Some(p) => print!("{}", render_product(p)),
                    None => fatal(&format!("no showcase product {slug:?}")),
                },
                None => {
                    let products: Vec<_> = match category {
                        Some(c) => showcase::by_category(c).into_iter().copied().collect(),
                        None => showcase::PRODUCTS.to_vec(),
                    };
                    print!("{}", render_showcase(&products));
                }
            }
            return;
        }
        Command::SearchLink { query } => {
            match paintshop::query::search_link(query) {
                Some(link) => println!("{link}"),
                None => fatal("search query is empty"),
            }
            return;
        }
        _ => {}
    }

    let client = build_client(&cli);
    tracing::debug!(base = client.base_url(), context = %client.context(), "client ready");
    match run(&client, cli.command).await {
        Ok(Some(value)) => print_json(&value),
        Ok(None) => {}
        Err(e) => {
            eprintln!("shop: {e}");
            let envelope = e.envelope();
            for (field, messages) in &envelope.errors {
                for m in messages {
                    eprintln!("  {field}: {m}");
                }
            }
            process::exit(1);
        }
    }
}

fn build_client(cli: &Cli) -> ApiClient {
    let mut config =
        ClientConfig::from_env().unwrap_or_else(|e| fatal(&format!("bad configuration: {e}")));
    if let Some(base) = &cli.api_base {
        config.api_base = base.trim_end_matches('/').to_string();
    }
    if let Some(context) = cli.context {
        config.context = context;
    }
    if let Some(path) = &cli.session_file {
        config.session_file = path.clone();
    }

    let store = FileStore::open(&config.session_file)
        .unwrap_or_else(|e| fatal(&format!("cannot open session file: {e}")));
    tracing::debug!(path = %store.path().display(), "session file opened");
    ApiClient::with_session(
        &config,
        Arc::new(Session::new(store)),
        Arc::new(LogNavigator),
    )
    .unwrap_or_else(|e| fatal(&e.to_string()))
}

async fn run(client: &ApiClient, command: Command) -> Result<Option<Value>, ApiError> {
    let value = match command {
        Command::Login { email, password } => client.auth().login(&email, &password).await?,
        Command::AdminLogin { email, password } => {
            client.auth().admin_login(&email, &password).await?
        }
        Command::Register {
            name,
            email,
            password,
            confirm,
        } => {
            let confirm = confirm.unwrap_or_else(|| password.clone());
            client
                .auth()
                .register(&name, &email, &password, &confirm)
                .await?
        }
        Command::Logout => {
            client.auth().logout().await?;
            return Ok(None);
        }
        Command::Whoami => client.auth().user().await?,
        Command::Products { command } => match command {
            ProductsCommand::List {
                search,
                category,
                sort,
                page,
                per_page,
            } => {
                let query = ListQuery {
                    search,
                    category,
                    sort,
                    page,
                    per_page,
                    ..ListQuery::default()
                };
                client.products().list(&query).await?
            }
            ProductsCommand::Get { slug } => client.products().get(&slug).await?,
            ProductsCommand::Search { query } => client.products().search(&query).await?,
        },
        Command::Call {
            key,
            args,
            query,
            body,
            fields,
            files,
        } => {
            let endpoint = catalog::find(&key)?;
            let args: Vec<(String, String)> = args.iter().map(|a| split_pair(a, "--arg")).collect();
            let args: Vec<(&str, &str)> =
                args.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
            let payload = build_payload(endpoint, query, body, fields, files).await;
            client.call(endpoint, &args, payload).await?
        }
        Command::Endpoints { .. } | Command::Showcase { .. } | Command::SearchLink { .. } => {
            return Ok(None)
        }
    };
    Ok(Some(value))
}

/// Shape the `call` flags into the payload the endpoint takes.
async fn build_payload(
    endpoint: &Endpoint,
    query: Vec<String>,
    body: Option<String>,
    fields: Vec<String>,
    files: Vec<String>,
) -> Payload {
    match endpoint.body {
        BodyShape::Query => {
            let pairs: Vec<(String, String)> =
                query.iter().map(|q| split_pair(q, "--query")).collect();
            Payload::Query(pairs)
        }
        BodyShape::Json => match body {
            Some(raw) => Payload::Json(parse_body(&raw)),
            None => Payload::None,
        },
        BodyShape::Multipart => {
            let mut upload = Upload::new();
            for f in &fields {
                let (name, value) = split_pair(f, "--field");
                upload = upload.text(name, value);
            }
            for f in &files {
                let (field, path) = split_pair(f, "--file");
                let part = FilePart::from_path(field, &path)
                    .await
                    .unwrap_or_else(|e| fatal(&format!("failed to read {path}: {e}")));
                upload = upload.file(part);
            }
            Payload::Multipart(upload)
        }
        BodyShape::None => Payload::None,
    }
}

// --- helpers -----------------------------------------------------------------

/// Parse `NAME=VALUE`, exiting on anything else.
fn split_pair(raw: &str, flag: &str) -> (String, String) {
    match raw.split_once('=') {
        Some((k, v)) if !k.is_empty() => (k.to_string(), v.to_string()),
        _ => fatal(&format!("invalid {flag} {raw:?}: expected NAME=VALUE")),
    }
}

/// Inline JSON, or the contents of a file when prefixed with `@`.
fn parse_body(raw: &str) -> Value {
    let text = match raw.strip_prefix('@') {
        Some(path) => fs::read_to_string(path)
            .unwrap_or_else(|e| fatal(&format!("failed to read {path}: {e}"))),
        None => raw.to_string(),
    };
    serde_json::from_str(&text).unwrap_or_else(|e| fatal(&format!("--body is not JSON: {e}")))
}

fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => fatal(&format!("failed to print response: {e}")),
    }
}

/// Print an error message to stderr and exit with code 2.
fn fatal(msg: &str) -> ! {
    eprintln!("shop: {}", msg);
    process::exit(2);
}
