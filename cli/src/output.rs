//! Console formatting for debate results

use debate_domain::DebateResult;
use std::fmt::Write;

/// Format the complete result: per-backend sections with timing badges,
/// then the synthesized answer
pub fn format_full(result: &DebateResult) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Question: {}", result.question);
    let _ = writeln!(out);

    for (backend, text) in result.models.iter() {
        let _ = writeln!(
            out,
            "--- {} ({}ms) ---",
            backend.display_name(),
            result.timings.backend(backend)
        );
        let _ = writeln!(out, "{}", text);
        let _ = writeln!(out);
    }

    let _ = writeln!(
        out,
        "=== Consensus ({}ms, {}ms total) ===",
        result.timings.consensus, result.timings.total
    );
    let _ = writeln!(out, "{}", result.final_answer);

    out
}
