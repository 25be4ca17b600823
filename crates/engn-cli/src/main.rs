//! `engn` CLI: command-line client for the ENGN-F1 site server.
//!
//! Talks to a running server over its JSON API. The `validate` command
//! needs no server: it runs the same lead rules locally.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use serde_json::{Value, json};

use engn_core::schema::{LeadSchema, SchemaVariant};

// ── ANSI color helpers ───────────────────────────────────────────────

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";
const WHITE: &str = "\x1b[37m";

// ── CLI structure ────────────────────────────────────────────────────

/// ENGN-F1 site tooling.
#[derive(Parser)]
#[command(
    name = "engn",
    version,
    about = "ENGN-F1 CLI: submit demo requests, inspect leads, and read dashboard data",
    long_about = None,
    after_help = format!(
        "{DIM}Environment variables:{RESET}\n  \
         ENGN_ADDR     Server address (default: http://127.0.0.1:3000)\n\n\
         {DIM}Examples:{RESET}\n  \
         engn submit --name 'Jane Doe' --email jane@x.com --model smart\n  \
         engn leads\n  \
         engn validate lead.json --schema standard"
    ),
)]
struct Cli {
    /// ENGN-F1 server address.
    #[arg(long, env = "ENGN_ADDR", default_value = "http://127.0.0.1:3000")]
    addr: String,

    /// Print raw JSON instead of formatted output.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit a demo request.
    Submit {
        /// Full name of the requester.
        #[arg(long)]
        name: String,
        /// Contact email.
        #[arg(long)]
        email: String,
        /// Model of interest (base, smart, ultra, custom).
        #[arg(long)]
        model: String,
        /// Company name.
        #[arg(long)]
        company: Option<String>,
        /// Free-form message.
        #[arg(long)]
        message: Option<String>,
        /// Contact number in international form, e.g. +917278183606.
        #[arg(long)]
        contact_no: Option<String>,
    },
    /// List stored demo requests, newest first.
    Leads,
    /// Show the current dashboard metrics.
    Metrics,
    /// List the industry use-case showcase.
    UseCases,
    /// Check a lead JSON file against the submission rules without a server.
    Validate {
        /// Path to a JSON file holding one submission.
        file: String,
        /// Rule set to apply (`contact` or `standard`).
        #[arg(long, default_value = "contact")]
        schema: SchemaVariant,
    },
}

// ── Pretty output helpers ────────────────────────────────────────────

fn header(icon: &str, title: &str) {
    println!("{BOLD}{CYAN}{icon} {title}{RESET}");
    println!("{DIM}─────────────────────────────────────────{RESET}");
}

fn kv_line(key: &str, value: &str) {
    println!("  {DIM}{key:<20}{RESET} {WHITE}{value}{RESET}");
}

fn success(msg: &str) {
    println!("{GREEN}{BOLD}✓{RESET} {msg}");
}

fn warning(msg: &str) {
    println!("{YELLOW}{BOLD}⚠{RESET} {YELLOW}{msg}{RESET}");
}

/// Render a JSON scalar without quotes around strings.
fn plain(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "-".to_owned(),
        other => other.to_string(),
    }
}

fn print_leads(resp: &Value) {
    let leads = resp.as_array().map(Vec::as_slice).unwrap_or_default();
    header("◆", &format!("Leads ({})", leads.len()));
    if leads.is_empty() {
        warning("no demo requests yet");
        return;
    }
    for lead in leads {
        println!(
            "  {BOLD}#{:<5}{RESET} {WHITE}{:<24}{RESET} {DIM}{:<28}{RESET} {CYAN}{}{RESET}",
            plain(&lead["id"]),
            plain(&lead["fullName"]),
            plain(&lead["email"]),
            plain(&lead["modelInterest"]),
        );
        if let Some(company) = lead["company"].as_str() {
            println!("         {DIM}company:{RESET} {company}");
        }
        if let Some(phone) = lead["contactNo"].as_str() {
            println!("         {DIM}phone:{RESET}   {phone}");
        }
        println!("         {DIM}created:{RESET} {}", plain(&lead["createdAt"]));
    }
}

fn print_metrics(resp: &Value) {
    header("◆", "Dashboard Metrics");
    let rows = [
        ("Delivery time", "deliveryTime", " min"),
        ("Optimization", "optimization", "%"),
        ("Efficiency", "efficiency", "%"),
        ("Quantum processing", "quantumProcessing", "%"),
        ("Neural networks", "neuralNetworks", ""),
        ("Data points", "dataPoints", ""),
        ("Orders", "orders", ""),
        ("Revenue", "revenue", ""),
        ("Growth", "growth", ""),
        ("Team", "team", ""),
        ("Infrastructure", "infrastructure", ""),
        ("Office", "office", ""),
    ];
    for (label, key, suffix) in rows {
        kv_line(label, &format!("{}{suffix}", plain(&resp[key])));
    }
}

fn print_use_cases(resp: &Value) {
    let cases = resp.as_array().map(Vec::as_slice).unwrap_or_default();
    header("◆", &format!("Use Cases ({})", cases.len()));
    for case in cases {
        println!(
            "  {BOLD}{:>2}. {:<24}{RESET} {DIM}{}{RESET}",
            plain(&case["id"]),
            plain(&case["name"]),
            plain(&case["category"]),
        );
        println!("      {}", plain(&case["description"]));
        println!("      {GREEN}{}{RESET}", plain(&case["impact"]));
    }
}

fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("failed to format JSON: {e}"),
    }
}

// ── HTTP client ──────────────────────────────────────────────────────

struct Client {
    http: reqwest::Client,
    addr: String,
}

impl Client {
    fn new(addr: String) -> Self {
        let http = reqwest::Client::new();
        Self {
            http,
            addr: addr.trim_end_matches('/').to_owned(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.addr)
    }

    async fn get(&self, path: &str) -> Result<Value> {
        let resp = self
            .http
            .get(self.url(path))
            .send()
            .await
            .context("request failed")?;
        handle_response(resp).await
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value> {
        let resp = self
            .http
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .context("request failed")?;
        handle_response(resp).await
    }
}

async fn handle_response(resp: reqwest::Response) -> Result<Value> {
    let status = resp.status();
    let body = resp.text().await.context("failed to read response body")?;
    if !status.is_success() {
        let parsed: Option<Value> = serde_json::from_str(&body).ok();
        match parsed.as_ref().and_then(|v| v["details"].as_array()) {
            Some(details) => bail!("server returned {status}: {}", describe_issues(details)),
            None => bail!("server returned {status}: {body}"),
        }
    }
    serde_json::from_str(&body).context("failed to parse response JSON")
}

/// One `field: message` entry per issue, joined for a single error line.
fn describe_issues(details: &[Value]) -> String {
    details
        .iter()
        .map(|issue| {
            let field = issue["path"][0].as_str().unwrap_or("body");
            format!("{field}: {}", plain(&issue["message"]))
        })
        .collect::<Vec<_>>()
        .join("; ")
}

// ── Command dispatch ─────────────────────────────────────────────────

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let client = Client::new(cli.addr);

    match run(&client, cli.command, cli.json).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!();
            eprintln!("  {RED}{BOLD}✗ Error:{RESET} {e:#}");
            eprintln!();
            ExitCode::FAILURE
        }
    }
}

async fn run(client: &Client, cmd: Commands, json: bool) -> Result<()> {
    match cmd {
        Commands::Submit {
            name,
            email,
            model,
            company,
            message,
            contact_no,
        } => {
            let mut body = json!({
                "fullName": name,
                "email": email,
                "modelInterest": model,
            });
            for (key, value) in [
                ("company", company),
                ("message", message),
                ("contactNo", contact_no),
            ] {
                if let Some(value) = value {
                    body[key] = Value::String(value);
                }
            }
            cmd_submit(client, &body, json).await
        }
        Commands::Leads => {
            let resp = client.get("/api/leads").await?;
            if json {
                print_json(&resp);
            } else {
                print_leads(&resp);
            }
            Ok(())
        }
        Commands::Metrics => {
            let resp = client.get("/api/metrics").await?;
            if json {
                print_json(&resp);
            } else {
                print_metrics(&resp);
            }
            Ok(())
        }
        Commands::UseCases => {
            let resp = client.get("/api/use-cases").await?;
            if json {
                print_json(&resp);
            } else {
                print_use_cases(&resp);
            }
            Ok(())
        }
        Commands::Validate { file, schema } => cmd_validate(Path::new(&file), schema, json),
    }
}

async fn cmd_submit(client: &Client, body: &Value, json: bool) -> Result<()> {
    let resp = client.post("/api/leads", body).await?;
    if json {
        print_json(&resp);
    } else {
        success(&format!(
            "demo request received (lead #{})",
            plain(&resp["leadId"])
        ));
    }
    Ok(())
}

fn cmd_validate(file: &Path, schema: SchemaVariant, json: bool) -> Result<()> {
    if !file.exists() {
        bail!("file not found: {}", file.display());
    }
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let body: Value = serde_json::from_str(&content)
        .with_context(|| format!("{} is not valid JSON", file.display()))?;

    match LeadSchema::new(schema).parse(&body) {
        Ok(lead) => {
            if json {
                let normalized = json!({
                    "fullName": lead.full_name,
                    "email": lead.email,
                    "company": lead.company,
                    "modelInterest": lead.model_interest,
                    "message": lead.message,
                    "contactNo": lead.contact_no,
                });
                print_json(&normalized);
            } else {
                success(&format!("valid submission ({schema} rules)"));
                kv_line("Name", &lead.full_name);
                kv_line("Email", &lead.email);
                kv_line("Model", &lead.model_interest);
                if let Some(phone) = &lead.contact_no {
                    kv_line("Phone (E.164)", phone);
                }
            }
            Ok(())
        }
        Err(failure) => {
            for issue in &failure.issues {
                let field = issue.field_name().unwrap_or("body");
                eprintln!("  {RED}•{RESET} {BOLD}{field}{RESET}: {}", issue.message);
            }
            bail!(
                "{} failed validation with {} issue(s)",
                file.display(),
                failure.issues.len()
            )
        }
    }
}
