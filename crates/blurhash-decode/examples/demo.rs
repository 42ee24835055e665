//! BlurHash Demo - decode a placeholder and print a few pixels
//!
//! Run with: RUST_LOG=debug cargo run --example demo -- 'LEHV6nWB2yk8pyo0adR*.7kCMdnj?punch=1.2'

use blurhash_decode::{components, decode_request, ImageRequest};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let id = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "LEHV6nWB2yk8pyo0adR*.7kCMdnj".to_string());

    println!("=== BlurHash Demo ===\n");

    let request = ImageRequest::parse(&id);
    println!("1. Request id: {id}");
    println!("   Hash: {}  punch: {}\n", request.hash, request.punch);

    match components(request.hash) {
        Ok((cx, cy)) => println!("2. Components: {cx}x{cy}\n"),
        Err(e) => {
            eprintln!("invalid blurhash: {e}");
            std::process::exit(1);
        }
    }

    let image = match decode_request(&id, 8, 8) {
        Ok(image) => image,
        Err(e) => {
            eprintln!("decode failed: {e}");
            std::process::exit(1);
        }
    };

    println!(
        "3. Decoded to {}x{} image ({} bytes)",
        image.width(),
        image.height(),
        image.as_bytes().len()
    );
    for y in 0..image.height() {
        let row: Vec<String> = (0..image.width())
            .filter_map(|x| image.pixel(x, y))
            .map(|[r, g, b, _]| format!("{r:02x}{g:02x}{b:02x}"))
            .collect();
        println!("   {}", row.join(" "));
    }

    println!("\n=== Demo Complete ===");
}
