//! Demo: video id extraction and link scanning
//!
//! Run with: cargo run -p ytdesc-models --example youtube_url_demo

use ytdesc_models::{extract_video_id, format_links_text, scan_links};

fn main() {
    let test_urls = [
        "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
        "https://youtu.be/dQw4w9WgXcQ?t=30",
        "youtube.com/watch?v=dQw4w9WgXcQ&list=PLrAXtmRdnEQy",
        "https://www.youtube.com/embed?feature=oembed&v=dQw4w9WgXcQ",
        "https://www.youtube.com/shorts/abc123def45",
        "https://vimeo.com/123456789",
    ];

    for url in test_urls {
        match extract_video_id(url) {
            Ok(id) => println!("{:<60} -> {}", url, id),
            Err(e) => println!("{:<60} -> {}", url, e),
        }
    }

    let description = "Gear I use (https://shop.example.com/desk) and https://example.org/mic\n\
                       Sponsor: https://sponsor.example.com/?ref=yt";

    println!("\n{}", "=".repeat(60));
    println!("{}", format_links_text(&scan_links(description)));
}
