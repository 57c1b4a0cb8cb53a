//! `bawi check`: report which providers are configured.

use crate::backend::Backend;
use crate::config::Credentials;

pub struct CheckResult {
    pub ok: bool,
    pub lines: Vec<String>,
}

pub fn check_credentials(credentials: &Credentials) -> CheckResult {
    let backend = Backend::new(credentials);
    let (slack, google, openai) = backend.configured();

    let lines = vec![
        status_line("Slack", slack, "SLACK_TOKEN"),
        status_line(
            "Gmail / Calendar",
            google,
            "GMAIL_CLIENT_ID, GMAIL_CLIENT_SECRET, GMAIL_REFRESH_TOKEN",
        ),
        status_line("OpenAI", openai, "OPENAI_API_KEY"),
    ];

    CheckResult {
        ok: slack && google && openai,
        lines,
    }
}

fn status_line(name: &str, configured: bool, vars: &str) -> String {
    if configured {
        format!("  ✓ {}", name)
    } else {
        format!("  ✗ {} (set {})", name, vars)
    }
}

pub fn execute(credentials: &Credentials) {
    let result = check_credentials(credentials);

    println!("Provider credentials:");
    for line in &result.lines {
        println!("{}", line);
    }

    if !result.ok {
        println!("\nMissing credentials disable only their own operations.");
        std::process::exit(1);
    }
}
