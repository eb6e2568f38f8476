//! Display and output functions for install operation
//! Prints progress lines for each stage of an install run

use std::collections::BTreeSet;
use std::path::Path;

use console::Style;

use crate::domain::{ApiVersion, RequestBatch, Resolution};

/// Print the configured SDK locations
pub fn print_header(sdk_root: &Path, node_home: &Path) {
    let bold = Style::new().bold();
    println!("{} {}", bold.apply_to("SDK root:"), sdk_root.display());
    println!("{} {}", bold.apply_to("Toolchain home:"), node_home.display());
}

pub fn print_versions(versions: &BTreeSet<ApiVersion>, target: ApiVersion) {
    let listed = versions
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    println!("Detected API versions: [{listed}], target={target}");
}

pub fn print_first_attempt_failed() {
    println!(
        "{}",
        Style::new()
            .yellow()
            .apply_to("First install attempt failed, trying auto-accept licenses...")
    );
}

pub fn print_no_remote_licenses() {
    println!("No remote license IDs found.");
}

pub fn print_no_unaccepted_licenses() {
    println!("No unaccepted licenses.");
}

pub fn print_accepting_licenses(count: usize) {
    println!("Accepting licenses count={count}");
}

pub fn print_license_acceptance_done() {
    println!("License acceptance done.");
}

/// One line per batch request, present or explicitly absent
pub fn resolution_lines(batch: &RequestBatch, resolution: &Resolution) -> Vec<String> {
    batch
        .iter()
        .map(|request| match resolution.get(request) {
            Some(c) => format!(
                "- {request} => {} | {}",
                c.display_name,
                c.location.display()
            ),
            None => format!("- {request} => absent"),
        })
        .collect()
}

pub fn print_resolution(batch: &RequestBatch, resolution: &Resolution) {
    println!(
        "{}",
        Style::new().green().bold().apply_to("Installed/resolved components:")
    );
    for line in resolution_lines(batch, resolution) {
        println!("{line}");
    }
}

pub fn print_local_count(count: usize) {
    println!("Local SDK count={count}");
}
