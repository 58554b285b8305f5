// NetVision - api/prompt.rs
//
// Prompt templates for the two request kinds, and the input truncation
// applied before a log blob is embedded in a prompt.

use crate::util::constants::LOG_INPUT_MAX_CHARS;

/// System instruction sent with every profiling request.
pub const SYSTEM_INSTRUCTION: &str =
    "You are a realistic network simulation engine. Output raw JSON.";

/// Build the profiling prompt for a target string.
///
/// The literal target string always appears in the prompt, quoted.
pub fn profile_prompt(target: &str) -> String {
    format!(
        "Act as a Senior Network Security Engineer and Pentester.\n\
         I need you to generate a *simulated* port scan and vulnerability profile \
         for the following target: \"{target}\".\n\
         \n\
         Since we cannot physically scan the target right now, use your knowledge \
         base to predict:\n\
         1. What services this type of target usually runs.\n\
         2. Which ports are likely to be OPEN.\n\
         3. What the potential security risks are for those ports.\n\
         \n\
         If the target is a generic service name (e.g. \"PostgreSQL Database\"), \
         profile the standard ports for that service.\n\
         If the target is a domain (e.g. \"example.com\"), profile a standard web \
         server configuration for that domain type.\n\
         \n\
         CRITICAL: For each open port, list 1-3 *potential* vulnerabilities that \
         are historically common for that service type. Use realistic CVE IDs \
         (e.g. CVE-2021-44228 for Java apps, or generic IDs like \"WEAK-AUTH\") \
         and descriptions.\n\
         \n\
         Be realistic. Include a mix of standard ports (80, 443) and management \
         ports if applicable (22, 3389, 8080)."
    )
}

/// Build the log-analysis prompt for a (pre-truncated) log blob.
pub fn analysis_prompt(log_data: &str) -> String {
    format!(
        "Analyze the following raw Nmap (or similar) scan output.\n\
         Provide a detailed security report in Markdown format.\n\
         Include:\n\
         1. Executive Summary\n\
         2. Open Port Analysis\n\
         3. OS Detection (if applicable)\n\
         4. Critical Vulnerabilities\n\
         5. Recommended Remediation Steps\n\
         \n\
         Raw Log:\n\
         {log_data}"
    )
}

/// Truncate pasted log input to the prompt bound.
///
/// Counts Unicode scalar values, never splitting a character. Returns the
/// (possibly shortened) text and whether truncation occurred.
pub fn truncate_log_input(input: &str) -> (&str, bool) {
    match input.char_indices().nth(LOG_INPUT_MAX_CHARS) {
        Some((byte_idx, _)) => (&input[..byte_idx], true),
        None => (input, false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_prompt_contains_literal_target() {
        let prompt = profile_prompt("db-core.internal:5432");
        assert!(prompt.contains("\"db-core.internal:5432\""));
    }

    #[test]
    fn test_analysis_prompt_contains_log_text() {
        let prompt = analysis_prompt("22/tcp open ssh OpenSSH 8.9");
        assert!(prompt.contains("22/tcp open ssh OpenSSH 8.9"));
        assert!(prompt.contains("Markdown"));
    }

    #[test]
    fn test_truncation_bound_not_exceeded() {
        let input = "x".repeat(LOG_INPUT_MAX_CHARS + 500);
        let (out, truncated) = truncate_log_input(&input);
        assert!(truncated);
        assert_eq!(out.chars().count(), LOG_INPUT_MAX_CHARS);
    }

    #[test]
    fn test_short_input_passes_through() {
        let (out, truncated) = truncate_log_input("short log");
        assert!(!truncated);
        assert_eq!(out, "short log");
    }

    #[test]
    fn test_exact_bound_is_not_truncated() {
        let input = "y".repeat(LOG_INPUT_MAX_CHARS);
        let (out, truncated) = truncate_log_input(&input);
        assert!(!truncated);
        assert_eq!(out.len(), LOG_INPUT_MAX_CHARS);
    }

    #[test]
    fn test_truncation_respects_multibyte_boundaries() {
        // Each '日' is 3 bytes; the cut must land on a char boundary.
        let input = "日".repeat(LOG_INPUT_MAX_CHARS + 10);
        let (out, truncated) = truncate_log_input(&input);
        assert!(truncated);
        assert_eq!(out.chars().count(), LOG_INPUT_MAX_CHARS);
        assert!(input.is_char_boundary(out.len()));
    }
}
