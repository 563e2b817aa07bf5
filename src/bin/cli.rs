//! page-inspector
//!
//! Loads a page (through headless Chrome, or from a saved HTML file), lists its
//! elements, shows its text and answers questions about it through a
//! chat-completion endpoint.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use page_inspector::{BrowserSession, ChatBackend, ChatClient, ChatOptions, Inspector, InspectorError,
                     LaunchOptions, PageRenderer, PromptStyle, StaticPage, ToolContext, ToolRegistry,
                     ToolResult, shell::command::{self, Command}};
use std::{io::{self, BufRead, Read, Write},
          path::PathBuf,
          time::Duration};

#[derive(Parser)]
#[command(name = "page-inspector")]
#[command(version)]
#[command(about = "Inspect a web page's elements and text, and ask questions about it", long_about = None)]
struct Cli {
    /// Page to load on start
    url: Option<String>,

    /// Inspect a saved HTML file instead of launching a browser ("-" reads stdin)
    #[arg(long, short = 'f', value_name = "PATH")]
    file: Option<PathBuf>,

    /// Launch browser in headed mode (default: headless)
    #[arg(long, short = 'H')]
    headed: bool,

    /// Path to custom browser executable
    #[arg(long, value_name = "PATH")]
    chrome_path: Option<PathBuf>,

    /// Persistent browser profile directory
    #[arg(long, value_name = "DIR")]
    user_data_dir: Option<PathBuf>,

    /// Disable the Chrome sandbox
    #[arg(long)]
    no_sandbox: bool,

    /// Chat API key (default: $GROQ_API_KEY)
    #[arg(long, value_name = "KEY")]
    api_key: Option<String>,

    /// Chat completions endpoint
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Model identifier
    #[arg(long)]
    model: Option<String>,

    /// Sampling temperature
    #[arg(long)]
    temperature: Option<f32>,

    /// How page text and question are laid out in the prompt
    #[arg(long, value_enum, default_value = "system-context")]
    prompt_style: PromptStyle,

    /// Chat request timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Print the page text and exit
    #[arg(long, conflicts_with = "elements")]
    text: bool,

    /// Print the element list and exit
    #[arg(long)]
    elements: bool,

    /// With --elements, print JSON including each element's markup
    #[arg(long, requires = "elements")]
    json: bool,

    /// More logging (-v: info, -vv: debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let renderer = build_renderer(&cli)?;
    let chat = build_chat(&cli);
    let mut inspector = Inspector::new(renderer, chat);

    let start_url = cli.url.clone().or_else(|| {
        cli.file
            .as_ref()
            .map(|path| format!("file://{}", path.display()))
    });

    if cli.text || cli.elements {
        let url = start_url.context("A URL or --file is required with --text/--elements")?;
        inspector.load_url(&url)?;
        return print_one_shot(&cli, &inspector);
    }

    let registry = ToolRegistry::with_defaults();
    if let Some(url) = start_url {
        run_tool(&registry, &mut inspector, "navigate", serde_json::json!({ "url": url }));
    }

    eprintln!("page-inspector v{} (:help for commands)", env!("CARGO_PKG_VERSION"));
    repl(&registry, &mut inspector)
}

fn build_renderer(cli: &Cli) -> Result<Box<dyn PageRenderer>> {
    if let Some(path) = &cli.file {
        let html = if path.as_os_str() == "-" {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).context("Failed to read HTML from stdin")?;
            buf
        } else {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?
        };
        return Ok(Box::new(StaticPage::from_document(html)));
    }

    let mut options = LaunchOptions::new().headless(!cli.headed).sandbox(!cli.no_sandbox);
    if let Some(path) = &cli.chrome_path {
        options = options.chrome_path(path);
    }
    if let Some(dir) = &cli.user_data_dir {
        options = options.user_data_dir(dir);
    }

    let session = BrowserSession::launch(options)?;
    Ok(Box::new(session))
}

fn build_chat(cli: &Cli) -> Option<Box<dyn ChatBackend>> {
    let mut options = ChatOptions::from_env().prompt_style(cli.prompt_style);
    if let Some(key) = &cli.api_key {
        options = options.api_key(key);
    }
    if let Some(endpoint) = &cli.endpoint {
        options = options.endpoint(endpoint);
    }
    if let Some(model) = &cli.model {
        options = options.model(model);
    }
    if let Some(temperature) = cli.temperature {
        options = options.temperature(temperature);
    }
    if let Some(secs) = cli.timeout {
        options = options.timeout(Duration::from_secs(secs));
    }

    match ChatClient::new(options) {
        Ok(client) => Some(Box::new(client)),
        Err(InspectorError::MissingApiKey) => {
            log::warn!("No API key configured; questions will not be answered");
            None
        }
        Err(e) => {
            log::warn!("Chat disabled: {}", e);
            None
        }
    }
}

fn print_one_shot(cli: &Cli, inspector: &Inspector) -> Result<()> {
    let page = inspector.page();
    if cli.text {
        println!("{}", page.context_text());
    } else if cli.json {
        println!("{}", page.catalog().to_json()?);
    } else {
        for (i, label) in page.catalog().labels().enumerate() {
            println!("[{}] {}", i, label);
        }
    }
    Ok(())
}

fn repl(registry: &ToolRegistry, inspector: &mut Inspector) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match command::parse_line(&line) {
            Ok(Command::Empty) => {}
            Ok(Command::Quit) => break,
            Ok(Command::Help) => println!("{}", command::HELP),
            Ok(Command::ListTools) => {
                for name in registry.names() {
                    if let Some((description, schema)) = registry.describe(name) {
                        println!("{:<16} {}", name, description);
                        log::debug!("{} schema: {}", name, schema);
                    }
                }
            }
            Ok(Command::Tool { name, params }) => run_tool(registry, inspector, &name, params),
            Err(e) => eprintln!("error: {}", e),
        }
    }

    Ok(())
}

fn run_tool(registry: &ToolRegistry, inspector: &mut Inspector, name: &str, params: serde_json::Value) {
    let mut context = ToolContext::new(inspector);
    match registry.execute(name, params, &mut context) {
        Ok(result) => print_result(name, &result),
        Err(e) => eprintln!("error: {}", e),
    }
}

fn print_result(name: &str, result: &ToolResult) {
    if !result.success {
        eprintln!("Error: {}", result.error.as_deref().unwrap_or("unknown error"));
        return;
    }

    let Some(data) = &result.data else {
        return;
    };
    if data["ignored"] == true {
        if name == "select_element" {
            eprintln!("No element at position {}", data["position"]);
        }
        return;
    }

    match name {
        "navigate" => println!(
            "Loaded {} ({} elements, {} chars of text)",
            data["normalized_url"].as_str().unwrap_or_default(),
            data["elements"],
            data["text_length"]
        ),
        "list_elements" => {
            for item in data["elements"].as_array().into_iter().flatten() {
                println!("[{}] {}", item["position"], item["label"].as_str().unwrap_or_default());
            }
        }
        "select_element" => {
            println!("{}", data["raw_html"].as_str().unwrap_or_default());
            let preview = data["preview"].as_str().unwrap_or_default();
            if !preview.trim().is_empty() {
                println!("\n{}", preview);
            }
        }
        "get_text" => println!("{}", data["text"].as_str().unwrap_or_default()),
        "switch_view" => println!("{}", data["rendered"].as_str().unwrap_or_default()),
        "ask" => println!("AI:\n{}", data["answer"].as_str().unwrap_or_default()),
        _ => println!(
            "{}",
            serde_json::to_string_pretty(data).unwrap_or_else(|_| data.to_string())
        ),
    }
}
