//! Basic usage example for rechunk-api

use rechunk_api::{chunk_text, process_text, ChunkConfig, TextChunker};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Method 1: Simplest usage with convenience function
    println!("=== Method 1: Convenience Function ===");
    let chunks = chunk_text("Hello world. This text fits into a single chunk.");
    println!("Got {} chunk(s): {:?}\n", chunks.len(), chunks);

    // Method 2: Positioned chunks with metadata
    println!("=== Method 2: Output With Metadata ===");
    let text = "First paragraph.\n\nSecond paragraph, a bit longer.\n\nThird.".repeat(40);
    let output = process_text(&text)?;
    for chunk in &output.chunks {
        println!(
            "  chunk {} at char {} ({} chars, {} shared)",
            chunk.index, chunk.char_offset, chunk.char_len, chunk.overlap
        );
    }
    println!("Processing took {}ms\n", output.metadata.processing_time_ms);

    // Method 3: Custom configuration
    println!("=== Method 3: Custom Configuration ===");
    let config = ChunkConfig::builder()
        .chunk_size(40)
        .chunk_overlap(8)
        .separators([". ", " ", ""])
        .build()?;
    let chunker = TextChunker::with_config(config)?;

    for chunk in chunker.chunk("Dr. Smith went to the store. He bought some milk. Then he went home.") {
        println!("  {chunk:?}");
    }

    Ok(())
}
