//! Render the landing page with stock content.
//!
//! Run with: `cargo run --example render_page`

use pd_site::{PageOptions, render_page};

fn main() {
    let html = render_page(&PageOptions::current());

    let output_path = "landing.html";
    std::fs::write(output_path, &html).expect("Failed to write page");

    println!("Page written to: {}", output_path);
    println!("HTML size: {} bytes", html.len());
}
