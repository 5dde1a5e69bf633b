// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Example: Build a LeNet-style model in memory and walk it through the
//! inspector session.
//!
//! Shows the three views the visualizer serves: the summary, the full
//! node/edge listing, and per-node detail joined with its weights.
//!
//! ```bash
//! cargo run -p inspector --example lenet_walkthrough
//! ```

use inspector::Session;
use model_ir::proto::helper::*;
use model_ir::{format_shape, ElementType};
use prost::Message;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialise tracing.
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .init();

    let bytes = build_lenet().encode_to_vec();
    println!("Encoded model: {} bytes\n", bytes.len());

    let mut session = Session::new();
    let meta = session.load(&bytes)?;
    println!(
        "Loaded '{}' (producer '{}', ir v{})\n",
        meta.graph_name, meta.producer_name, meta.ir_version
    );

    // Summary.
    let summary = session.summary()?;
    for input in &summary.input_info {
        println!("input  {:<10} {}", input.name, format_shape(&input.shape));
    }
    for output in &summary.output_info {
        println!("output {:<10} {}", output.name, format_shape(&output.shape));
    }
    println!();
    println!("{:<12} {:>6}", "Op type", "Count");
    println!("{}", "-".repeat(19));
    for (op, count) in &summary.op_types {
        println!("{op:<12} {count:>6}");
    }

    // Graph listing.
    let listing = session.graph()?;
    println!("\n--- {} edges ---\n", listing.edges.len());
    for edge in &listing.edges {
        println!("{:>8} --{}--> {}", edge.source, edge.tensor_name, edge.target);
    }

    // Node detail for every node that consumes weights.
    println!("\n--- Weights ---\n");
    println!("{:<8} {:<8} {:<10} {:<12} {:>10}", "Node", "Op", "Tensor", "Dims", "Bytes");
    println!("{}", "-".repeat(52));
    for node in &listing.nodes {
        let detail = session.node(&node.id)?;
        for (tensor, entry) in &detail.weights {
            let dtype = ElementType::from_code(entry.element_type_code)
                .map(|t| t.as_str())
                .unwrap_or("?");
            println!(
                "{:<8} {:<8} {:<10} {:<12} {:>10} ({dtype})",
                detail.id,
                detail.op_type,
                tensor,
                format!("{:?}", entry.dims),
                entry.byte_size,
            );
        }
    }

    // The views serialise straight to the visualizer's JSON.
    println!("\n{}", serde_json::to_string_pretty(&session.node("conv1")?)?);

    Ok(())
}

fn build_lenet() -> model_ir::proto::ModelProto {
    let nodes = vec![
        make_node(
            "Conv",
            &["input", "conv1_w", "conv1_b"],
            &["c1"],
            "conv1",
            vec![make_attribute_ints("kernel_shape", &[5, 5])],
        ),
        make_node("Relu", &["c1"], &["r1"], "", vec![]),
        make_node(
            "MaxPool",
            &["r1"],
            &["p1"],
            "",
            vec![
                make_attribute_ints("kernel_shape", &[2, 2]),
                make_attribute_ints("strides", &[2, 2]),
            ],
        ),
        make_node(
            "Conv",
            &["p1", "conv2_w", "conv2_b"],
            &["c2"],
            "conv2",
            vec![make_attribute_ints("kernel_shape", &[5, 5])],
        ),
        make_node("Relu", &["c2"], &["r2"], "", vec![]),
        make_node("Flatten", &["r2"], &["flat"], "", vec![make_attribute_int("axis", 1)]),
        make_node(
            "Gemm",
            &["flat", "fc_w", "fc_b"],
            &["logits"],
            "fc",
            vec![make_attribute_int("transB", 1)],
        ),
    ];

    let graph = make_graph(
        nodes,
        "lenet",
        vec![make_tensor_value_info("input", 1, &[0, 1, 32, 32])],
        vec![make_tensor_value_info("logits", 1, &[0, 10])],
        vec![
            make_zeros("conv1_w", &[6, 1, 5, 5]),
            make_zeros("conv1_b", &[6]),
            make_zeros("conv2_w", &[16, 6, 5, 5]),
            make_zeros("conv2_b", &[16]),
            make_zeros("fc_w", &[10, 400]),
            make_zeros("fc_b", &[10]),
        ],
    );
    make_model(graph, "netviz-example")
}
