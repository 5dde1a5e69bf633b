// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `netviz inspect` command: human-readable model overview.
//!
//! Prints model metadata, the declared inputs/outputs, the operator
//! histogram and a per-node table with incoming/outgoing edge counts and
//! the size of the constants each node consumes.

use inspector::InspectorConfig;
use model_ir::{describe_code, format_shape};
use std::path::PathBuf;

pub async fn execute(config: &InspectorConfig, model: PathBuf) -> anyhow::Result<()> {
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║              netviz · Model Inspector                ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();

    let session = super::open_session(config, &model).await?;
    let loaded = session.state().model()?;
    let meta = &loaded.metadata;
    let graph = &loaded.graph;

    // ── Metadata ───────────────────────────────────────────────
    println!("  Graph:     {}", display_or_dash(&meta.graph_name));
    println!(
        "  Producer:  {} {}",
        display_or_dash(&meta.producer_name),
        meta.producer_version
    );
    println!("  IR:        v{}", meta.ir_version);
    println!("  Version:   {}", meta.model_version);
    for opset in &meta.opset_imports {
        let domain = if opset.domain.is_empty() { "ai.onnx" } else { opset.domain.as_str() };
        println!("  Opset:     {domain} v{}", opset.version);
    }
    println!("  Structure: {}", graph.summary());
    println!(
        "  Constants: {} ({:.2} MB)",
        loaded.constants.len(),
        loaded.constants.total_bytes() as f64 / (1024.0 * 1024.0),
    );
    println!();

    // ── Inputs / Outputs ───────────────────────────────────────
    for (label, infos) in [("Input", &meta.inputs), ("Output", &meta.outputs)] {
        for info in infos {
            println!(
                "  {:<7} {:<24} {:<10} {}",
                label,
                truncate(&info.name, 24),
                describe_code(info.element_type),
                format_shape(info.dims()),
            );
        }
    }
    println!();

    // ── Operator Histogram ─────────────────────────────────────
    let summary = session.summary()?;
    println!("  {:<24} {:>6}", "Op type", "Count");
    println!("  {}", "-".repeat(31));
    for (op, count) in &summary.op_types {
        println!("  {:<24} {:>6}", truncate(op, 24), count);
    }
    println!();

    // ── Per-Node Detail ────────────────────────────────────────
    println!(
        "  {:<30} {:<16} {:>4} {:>4} {:>5} {:>12}",
        "Id", "Type", "In", "Out", "#W", "Weights",
    );
    println!("  {}", "-".repeat(76));

    for node in graph.nodes() {
        let detail = session.node(&node.id)?;
        println!(
            "  {:<30} {:<16} {:>4} {:>4} {:>5} {:>9.1} KB",
            truncate(&node.id, 30),
            truncate(&node.op_type, 16),
            graph.incoming(&node.id).count(),
            graph.outgoing(&node.id).count(),
            detail.weights.len(),
            detail.weight_bytes() as f64 / 1024.0,
        );
    }
    println!();
    Ok(())
}

fn display_or_dash(s: &str) -> &str {
    if s.is_empty() {
        "-"
    } else {
        s
    }
}

/// Truncates a string to `max_len` characters with ellipsis if needed.
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{head}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("conv1", 30), "conv1");
        assert_eq!(truncate("encoder.layer.0.attention", 10), "encoder...");
        assert_eq!(truncate("ééééééé", 5), "éé...");
    }
}
