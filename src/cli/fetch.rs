//! One-shot fetch/summarize commands.
//!
//! These go through the same bridge as the TUI — there is no second path to
//! the providers. The raw JSON payload is printed to stdout; errors go to
//! stderr with a non-zero exit.

use std::io::Read;
use std::time::Duration;

use crate::bridge::{BridgeHandle, BridgeRequest};
use crate::cli::Provider;
use crate::config;

const REPLY_TIMEOUT: Duration = Duration::from_secs(60);

/// Execute `bawi fetch <provider>`
pub fn execute(bridge: &BridgeHandle, provider: Provider, channel: Option<String>) {
    let request = match provider {
        Provider::Slack => {
            let settings = config::load_settings();
            let channel_id = channel.unwrap_or_else(|| config::slack_channel(&settings));
            BridgeRequest::FetchMessages { channel_id }
        }
        Provider::Emails => BridgeRequest::FetchEmails,
        Provider::Calendar => BridgeRequest::FetchCalendarEvents,
    };

    run(bridge, request);
}

/// Execute `bawi summarize` over stdin
pub fn execute_summarize(bridge: &BridgeHandle) {
    let mut text = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut text) {
        eprintln!("Failed to read stdin: {}", e);
        std::process::exit(1);
    }

    run(bridge, BridgeRequest::Summarize { text });
}

fn run(bridge: &BridgeHandle, request: BridgeRequest) {
    let op = request.op_name();
    let reply = bridge.call(request).recv_timeout(REPLY_TIMEOUT);

    match reply {
        Ok(Ok(payload)) => {
            // Payload is already JSON; pretty-print it for the terminal
            let rendered = serde_json::to_string_pretty(&payload)
                .unwrap_or_else(|_| payload.to_string());
            println!("{}", rendered);
        }
        Ok(Err(message)) => {
            eprintln!("{} failed: {}", op, message);
            std::process::exit(1);
        }
        Err(_) => {
            eprintln!("{} timed out", op);
            std::process::exit(1);
        }
    }
}
